use dioxus::prelude::*;
use officetrack_core::Action;
use officetrack_core::navigation::Route;
use officetrack_core::views::calendar::{format_day_month, office_for};
use officetrack_core::views::employees::recent_plans;

use super::common::Avatar;
use crate::app::{AppContext, today};

/// One recent plan on an employee card
struct PlanChip {
    day: String,
    text: String,
    class: &'static str,
    color: Option<String>,
}

#[component]
pub fn Employees() -> Element {
    let ctx = use_context::<AppContext>();
    let state = ctx.state.read();
    let today = today();

    let cards: Vec<Element> = state
        .employees
        .iter()
        .map(|employee| {
            let id = employee.id;
            let name = employee.full_name();
            let phone = employee.phone.clone().unwrap_or_default();
            let username = employee.username.clone();
            let plans: Vec<PlanChip> = recent_plans(&state.office_plans, id, today)
                .into_iter()
                .map(|plan| {
                    let office = office_for(&state.offices, Some(plan));
                    let (text, class) = match office {
                        _ if plan.is_absence() => ("Отсутствие".to_string(), "text-xs text-red-600 font-medium"),
                        Some(office) => (office.name.clone(), "text-xs text-gray-700"),
                        None => ("Не указано".to_string(), "text-xs text-gray-500"),
                    };
                    PlanChip {
                        day: format_day_month(plan.date),
                        text,
                        class,
                        color: office.map(|o| o.color.clone()),
                    }
                })
                .collect();
            let ctx = ctx.clone();

            rsx! {
                div { key: "{id}", class: "bg-white rounded-2xl shadow-sm p-6",
                    div { class: "flex items-start space-x-4",
                        Avatar { user: employee.clone(), class: "w-16 h-16 rounded-xl" }
                        div { class: "flex-1",
                            h3 { class: "text-lg font-semibold text-gray-900 mb-1", "{name}" }
                            div { class: "flex items-center space-x-4 text-sm text-gray-500 mb-3",
                                span { "{phone}" }
                                if let Some(username) = username {
                                    span { "@{username}" }
                                }
                            }
                            div { class: "space-y-2",
                                span { class: "text-sm font-medium text-gray-700", "Ближайшие планы:" }
                                div { class: "flex flex-wrap gap-2",
                                    if plans.is_empty() {
                                        span { class: "text-xs text-gray-500", "Планы не заданы" }
                                    }
                                    for chip in plans {
                                        div { key: "{chip.day}", class: "flex items-center space-x-2 bg-gray-50 rounded-lg px-3 py-1",
                                            span { class: "text-xs text-gray-600", "{chip.day}" }
                                            if let Some(color) = chip.color {
                                                div { class: "w-2 h-2 rounded-full", style: "background-color: {color}" }
                                            }
                                            span { class: chip.class, "{chip.text}" }
                                        }
                                    }
                                }
                            }
                        }
                        button {
                            class: "px-4 py-2 bg-blue-50 text-blue-600 rounded-lg hover:bg-blue-100 text-sm font-medium",
                            onclick: move |_| ctx.dispatch(Action::SetCurrentPage(Route::employee_detail(id))),
                            "Подробнее"
                        }
                    }
                }
            }
        })
        .collect();
    drop(state);

    rsx! {
        div { class: "p-4 space-y-6",
            h1 { class: "text-2xl font-bold text-gray-900", "Сотрудники" }
            div { class: "space-y-4", {cards.into_iter()} }
        }
    }
}
