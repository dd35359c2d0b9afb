use chrono::NaiveDate;
use dioxus::prelude::*;
use officetrack_core::views::calendar::{format_date, format_day_month};
use officetrack_core::views::reports::{office_stats_for, weekly_stats};

use crate::app::{AppContext, today};

#[component]
pub fn Reports() -> Element {
    let ctx = use_context::<AppContext>();
    let mut selected = use_signal(today);

    let state = ctx.state.read();
    let total = state.employees.len();
    let date = selected();
    let stats = office_stats_for(date, &state.offices, &state.office_plans, total);

    let picked = date.format("%Y-%m-%d").to_string();
    let heading = format_date(date);
    let present = stats.present;
    let absences = stats.absences;
    let percent = stats.attendance_percent();

    let office_rows: Vec<Element> = stats
        .per_office
        .iter()
        .map(|(office, count)| {
            rsx! {
                div { key: "{office.id}", class: "flex items-center justify-between p-3 bg-gray-50 rounded-lg",
                    div { class: "flex items-center space-x-3",
                        div { class: "w-4 h-4 rounded-full", style: "background-color: {office.color}" }
                        div {
                            p { class: "font-medium text-gray-900", "{office.name}" }
                            p { class: "text-sm text-gray-500", "{office.address}" }
                        }
                    }
                    span { class: "text-lg font-semibold text-gray-900", "{count}" }
                }
            }
        })
        .collect();

    let week_rows: Vec<Element> = weekly_stats(today(), &state.offices, &state.office_plans, total)
        .into_iter()
        .map(|day| {
            let label = format_day_month(day.stats.date);
            let name = day.day_name;
            let present = day.stats.present;
            let absences = day.stats.absences;
            let percent = day.stats.attendance_percent();
            let width = percent.min(100);
            rsx! {
                div { key: "{label}", class: "flex items-center space-x-4",
                    div { class: "w-16 text-sm text-gray-600",
                        div { class: "font-medium", "{name}" }
                        div { class: "text-xs", "{label}" }
                    }
                    div { class: "flex-1",
                        div { class: "flex items-center justify-between mb-1 text-sm",
                            span { class: "text-gray-700", "Присутствует: {present}" }
                            span { class: "text-gray-500", "Отсутствует: {absences}" }
                        }
                        div { class: "w-full bg-gray-200 rounded-full h-2",
                            div { class: "bg-blue-500 h-2 rounded-full", style: "width: {width}%" }
                        }
                    }
                    span { class: "w-12 text-right text-sm font-semibold text-gray-900", "{percent}%" }
                }
            }
        })
        .collect();
    drop(state);

    rsx! {
        div { class: "p-4 space-y-6",
            h1 { class: "text-2xl font-bold text-gray-900", "Отчёты" }

            div { class: "bg-white rounded-2xl shadow-sm p-6",
                div { class: "flex items-center space-x-4",
                    label { r#for: "report-date", class: "text-sm font-medium text-gray-700",
                        "Выберите дату для детального отчёта:"
                    }
                    input {
                        r#type: "date",
                        id: "report-date",
                        class: "px-3 py-2 border border-gray-300 rounded-lg",
                        value: "{picked}",
                        onchange: move |e| {
                            match NaiveDate::parse_from_str(&e.value(), "%Y-%m-%d") {
                                Ok(date) => selected.set(date),
                                Err(err) => tracing::debug!(error = %err, "Ignoring unparseable report date"),
                            }
                        },
                    }
                }
            }

            div { class: "bg-white rounded-2xl shadow-sm p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Отчёт на {heading}" }

                div { class: "grid grid-cols-2 gap-4 mb-6",
                    StatTile { value: present.to_string(), label: "В офисах/удалённо", class: "bg-blue-50 text-blue-600" }
                    StatTile { value: absences.to_string(), label: "Отсутствуют", class: "bg-red-50 text-red-600" }
                    StatTile { value: format!("{percent}%"), label: "Присутствие", class: "bg-green-50 text-green-600" }
                    StatTile { value: total.to_string(), label: "Всего сотрудников", class: "bg-gray-50 text-gray-600" }
                }

                div { class: "space-y-3",
                    h3 { class: "font-semibold text-gray-900", "Распределение по офисам:" }
                    {office_rows.into_iter()}
                }
            }

            div { class: "bg-white rounded-2xl shadow-sm p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Недельная динамика" }
                div { class: "space-y-4", {week_rows.into_iter()} }
            }
        }
    }
}

#[component]
fn StatTile(value: String, label: String, class: String) -> Element {
    rsx! {
        div { class: "rounded-xl p-4 {class}",
            p { class: "text-2xl font-bold", "{value}" }
            p { class: "text-sm", "{label}" }
        }
    }
}
