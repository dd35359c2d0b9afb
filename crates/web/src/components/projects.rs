use dioxus::prelude::*;
use officetrack_core::models::{ProjectStatus, participants_label};
use officetrack_core::views::calendar::format_date;
use officetrack_core::views::projects::{DeadlineUrgency, days_until_deadline, deadline_label};

use super::common::ParticipantStack;
use crate::app::{AppContext, today};

fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Active => "bg-green-100 text-green-800",
        ProjectStatus::Completed => "bg-blue-100 text-blue-800",
        ProjectStatus::OnHold => "bg-yellow-100 text-yellow-800",
    }
}

#[component]
pub fn Projects() -> Element {
    let ctx = use_context::<AppContext>();
    let projects = ctx.state.read().projects.clone();
    let today = today();

    rsx! {
        div { class: "p-4 space-y-6",
            h1 { class: "text-2xl font-bold text-gray-900", "Проекты" }

            div { class: "space-y-4",
                {projects.into_iter().map(|project| {
                    let days_left = days_until_deadline(project.deadline, today);
                    let countdown = deadline_label(days_left);
                    let countdown_class = DeadlineUrgency::from_days(days_left).css_class();
                    let deadline = format_date(project.deadline);
                    let status = project.status.label();
                    let badge = status_class(project.status);
                    let people = participants_label(project.participants.len());

                    rsx! {
                        div { key: "{project.id}", class: "bg-white rounded-2xl shadow-sm p-6",
                            div { class: "flex items-start justify-between mb-4",
                                div { class: "flex-1",
                                    h3 { class: "text-lg font-semibold text-gray-900 mb-1", "{project.name}" }
                                    p { class: "text-gray-600 text-sm mb-3", "{project.description}" }
                                    div { class: "flex items-center space-x-4 text-sm text-gray-500",
                                        span { "{deadline}" }
                                        span { class: "{countdown_class}", "{countdown}" }
                                    }
                                }
                                span { class: "px-3 py-1 rounded-full text-xs font-medium {badge}", "{status}" }
                            }

                            div { class: "mb-4",
                                div { class: "flex items-center justify-between mb-2",
                                    span { class: "text-sm font-medium text-gray-700", "Прогресс" }
                                    span { class: "text-sm text-gray-600", "{project.progress}%" }
                                }
                                div { class: "w-full bg-gray-200 rounded-full h-2",
                                    div {
                                        class: "bg-gradient-to-r from-blue-500 to-blue-600 h-2 rounded-full transition-all duration-300",
                                        style: "width: {project.progress}%",
                                    }
                                }
                            }

                            div { class: "flex items-center justify-between",
                                span { class: "text-sm text-gray-600", "{people}" }
                                ParticipantStack { participants: project.participants.clone() }
                            }
                        }
                    }
                })}
            }
        }
    }
}
