use dioxus::prelude::*;
use officetrack_core::Action;
use officetrack_core::navigation::Route;
use officetrack_core::types::UserId;
use officetrack_core::views::employees::find_employee;

use super::calendar::MonthCalendar;
use super::common::{Avatar, OfficeLegend};
use crate::app::{AppContext, today};

/// Read-only card and calendar for one employee
#[component]
pub fn EmployeeDetail(id: Option<UserId>) -> Element {
    let ctx = use_context::<AppContext>();
    let state = ctx.state.read();
    let employee = find_employee(&state.employees, id).cloned();
    let offices = state.offices.clone();
    let plans = state.office_plans.clone();
    drop(state);

    let back = move |_| ctx.dispatch(Action::SetCurrentPage(Route::Employees));

    let Some(employee) = employee else {
        tracing::debug!(?id, "Employee detail for unknown id");
        return rsx! {
            div { class: "p-4",
                div { class: "text-center",
                    p { class: "text-gray-500", "Сотрудник не найден" }
                    button { class: "mt-4 text-blue-600 hover:text-blue-800", onclick: back, "Вернуться к списку" }
                }
            }
        };
    };

    let name = employee.full_name();
    let phone = employee.phone.clone().unwrap_or_default();
    let username = employee.username.clone();
    let role = employee.role.label();
    let user_id = employee.id;

    rsx! {
        div { class: "p-4 space-y-6",
            div { class: "flex items-center space-x-4",
                button { class: "p-2 hover:bg-gray-100 rounded-full transition-colors duration-200", onclick: back, "←" }
                h1 { class: "text-2xl font-bold text-gray-900", "{name}" }
            }

            div { class: "bg-white rounded-2xl shadow-sm p-6",
                div { class: "flex items-start space-x-4",
                    Avatar { user: employee, class: "w-20 h-20 rounded-xl" }
                    div { class: "flex-1",
                        h2 { class: "text-xl font-semibold text-gray-900 mb-2", "{name}" }
                        div { class: "space-y-2 text-sm text-gray-600",
                            div { "{phone}" }
                            if let Some(username) = username {
                                div { "@{username}" }
                            }
                            div { class: "inline-block px-3 py-1 bg-blue-100 text-blue-800 rounded-full text-xs font-medium", "{role}" }
                        }
                    }
                }
            }

            MonthCalendar { offices: offices.clone(), plans, user_id, today: today() }

            OfficeLegend { offices, title: "Легенда" }
        }
    }
}
