use chrono::Utc;
use dioxus::prelude::*;
use officetrack_core::Action;
use officetrack_core::forms::RegistrationForm;

use crate::app::AppContext;
use crate::telegram::alert;

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-gray-300 rounded-xl focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all duration-200";

#[component]
pub fn RegistrationPage() -> Element {
    let ctx = use_context::<AppContext>();
    let mut form = use_signal(|| RegistrationForm::prefilled(ctx.host_user().as_ref()));

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let host_user = ctx.host_user();
        let result = form.read().submit(host_user.as_ref(), Utc::now());
        match result {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "Registration complete");
                ctx.dispatch_all(Action::sign_in(user));
            }
            Err(e) => alert(&e.to_string()),
        }
    };

    let RegistrationForm {
        first_name,
        last_name,
        phone,
    } = form();

    rsx! {
        div { class: "min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 flex items-center justify-center p-4",
            div { class: "max-w-md w-full",
                div { class: "bg-white rounded-2xl shadow-xl p-8",
                    div { class: "text-center mb-8",
                        h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Регистрация" }
                        p { class: "text-gray-600", "Введите ваши данные для продолжения" }
                    }

                    form { class: "space-y-6", onsubmit: on_submit,
                        div {
                            label { r#for: "first_name", class: "block text-sm font-medium text-gray-700 mb-2", "Имя *" }
                            input {
                                r#type: "text",
                                id: "first_name",
                                required: true,
                                class: INPUT_CLASS,
                                placeholder: "Введите имя",
                                value: "{first_name}",
                                oninput: move |e| form.write().first_name = e.value(),
                            }
                        }
                        div {
                            label { r#for: "last_name", class: "block text-sm font-medium text-gray-700 mb-2", "Фамилия *" }
                            input {
                                r#type: "text",
                                id: "last_name",
                                required: true,
                                class: INPUT_CLASS,
                                placeholder: "Введите фамилию",
                                value: "{last_name}",
                                oninput: move |e| form.write().last_name = e.value(),
                            }
                        }
                        div {
                            label { r#for: "phone", class: "block text-sm font-medium text-gray-700 mb-2", "Телефон *" }
                            input {
                                r#type: "tel",
                                id: "phone",
                                required: true,
                                class: INPUT_CLASS,
                                placeholder: "+7 (999) 123-45-67",
                                value: "{phone}",
                                oninput: move |e| form.write().phone = e.value(),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "w-full bg-gradient-to-r from-blue-500 to-blue-600 text-white py-3 px-6 rounded-xl font-medium",
                            "Завершить регистрацию"
                        }
                    }
                }
            }
        }
    }
}
