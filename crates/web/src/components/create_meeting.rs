use chrono::Utc;
use dioxus::prelude::*;
use officetrack_core::Action;
use officetrack_core::forms::{
    DURATION_MAX, DURATION_MIN, DURATION_STEP, MEETING_CREATED_MESSAGE, MeetingForm,
    earliest_meeting_date,
};

use super::common::Avatar;
use crate::app::{AppContext, today};
use crate::telegram::alert;

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-gray-300 rounded-xl focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all duration-200";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 mb-2";
const SECTION_CLASS: &str = "bg-white rounded-2xl shadow-sm p-6 space-y-4";

#[component]
pub fn CreateMeeting() -> Element {
    let ctx = use_context::<AppContext>();
    let mut form = use_signal(MeetingForm::default);

    let state = ctx.state.read();
    let projects = state.projects.clone();
    let employees = state.employees.clone();
    drop(state);

    let min_date = earliest_meeting_date(today()).format("%Y-%m-%d").to_string();
    let current = form();
    let selected_count = current.participant_ids.len();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = {
            let state = ctx.state.read();
            form.read()
                .submit(state.user.as_ref(), &state.employees, Utc::now())
        };
        match result {
            Ok(meeting) => {
                tracing::info!(meeting_id = %meeting.id, "Meeting created");
                ctx.dispatch(Action::AddMeeting(meeting));
                form.set(MeetingForm::default());
                alert(MEETING_CREATED_MESSAGE);
            }
            Err(e) => alert(&e.to_string()),
        }
    };

    rsx! {
        div { class: "p-4 space-y-6",
            h1 { class: "text-2xl font-bold text-gray-900", "Создать встречу" }

            form { class: "space-y-6", onsubmit: on_submit,
                div { class: SECTION_CLASS,
                    h2 { class: "text-lg font-semibold text-gray-900", "Основная информация" }
                    div {
                        label { r#for: "title", class: LABEL_CLASS, "Название встречи *" }
                        input {
                            r#type: "text",
                            id: "title",
                            class: INPUT_CLASS,
                            placeholder: "Введите название встречи",
                            value: "{current.title}",
                            oninput: move |e| form.write().title = e.value(),
                        }
                    }
                    div {
                        label { r#for: "description", class: LABEL_CLASS, "Описание" }
                        textarea {
                            id: "description",
                            rows: "3",
                            class: "{INPUT_CLASS} resize-none",
                            placeholder: "Дополнительная информация о встрече",
                            value: "{current.description}",
                            oninput: move |e| form.write().description = e.value(),
                        }
                    }
                    div {
                        label { r#for: "project", class: LABEL_CLASS, "Проект" }
                        select {
                            id: "project",
                            class: INPUT_CLASS,
                            value: "{current.project_id}",
                            onchange: move |e| form.write().project_id = e.value(),
                            option { value: "", "Выберите проект (опционально)" }
                            for project in projects {
                                option { key: "{project.id}", value: "{project.id}", "{project.name}" }
                            }
                        }
                    }
                }

                div { class: SECTION_CLASS,
                    h2 { class: "text-lg font-semibold text-gray-900", "Дата и время" }
                    div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                        div {
                            label { r#for: "date", class: LABEL_CLASS, "Дата *" }
                            input {
                                r#type: "date",
                                id: "date",
                                min: "{min_date}",
                                class: INPUT_CLASS,
                                value: "{current.date}",
                                oninput: move |e| form.write().date = e.value(),
                            }
                        }
                        div {
                            label { r#for: "time", class: LABEL_CLASS, "Время *" }
                            input {
                                r#type: "time",
                                id: "time",
                                class: INPUT_CLASS,
                                value: "{current.time}",
                                oninput: move |e| form.write().time = e.value(),
                            }
                        }
                        div {
                            label { r#for: "duration", class: LABEL_CLASS, "Длительность (мин)" }
                            input {
                                r#type: "number",
                                id: "duration",
                                min: "{DURATION_MIN}",
                                max: "{DURATION_MAX}",
                                step: "{DURATION_STEP}",
                                class: INPUT_CLASS,
                                value: "{current.duration}",
                                oninput: move |e| {
                                    if let Ok(minutes) = e.value().parse::<u32>() {
                                        form.write().duration = minutes;
                                    }
                                },
                            }
                        }
                    }
                }

                div { class: SECTION_CLASS,
                    h2 { class: "text-lg font-semibold text-gray-900", "Участники *" }
                    div { class: "space-y-3",
                        for employee in employees {
                            label {
                                key: "{employee.id}",
                                class: "flex items-center space-x-3 p-3 rounded-xl hover:bg-gray-50 cursor-pointer",
                                input {
                                    r#type: "checkbox",
                                    class: "w-5 h-5 text-blue-600 rounded",
                                    checked: current.is_selected(employee.id),
                                    onchange: {
                                        let id = employee.id;
                                        move |_| form.write().toggle_participant(id)
                                    },
                                }
                                Avatar { user: employee.clone(), class: "w-10 h-10 rounded-full" }
                                div { class: "flex-1",
                                    p { class: "font-medium text-gray-900", {employee.full_name()} }
                                    p { class: "text-sm text-gray-500", {employee.phone.clone().unwrap_or_default()} }
                                }
                            }
                        }
                    }
                    if selected_count > 0 {
                        div { class: "mt-4 p-3 bg-blue-50 rounded-xl",
                            p { class: "text-sm text-blue-700", "Выбрано участников: {selected_count}" }
                        }
                    }
                }

                div { class: "bg-white rounded-2xl shadow-sm p-6",
                    button {
                        r#type: "submit",
                        class: "w-full bg-gradient-to-r from-blue-500 to-blue-600 text-white py-3 px-6 rounded-xl font-medium",
                        "＋ Создать встречу"
                    }
                }
            }
        }
    }
}
