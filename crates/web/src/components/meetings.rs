use dioxus::prelude::*;
use officetrack_core::models::{MeetingStatus, participants_label};
use officetrack_core::views::calendar::format_date;
use officetrack_core::views::meetings::{MeetingFilter, is_upcoming, meeting_page, project_name};

use super::common::ParticipantStack;
use crate::app::{AppContext, now};

fn status_class(status: MeetingStatus) -> &'static str {
    match status {
        MeetingStatus::Scheduled => "bg-blue-100 text-blue-800",
        MeetingStatus::Completed => "bg-green-100 text-green-800",
        MeetingStatus::Cancelled => "bg-red-100 text-red-800",
    }
}

#[component]
pub fn Meetings() -> Element {
    let ctx = use_context::<AppContext>();
    let mut filter = use_signal(MeetingFilter::default);
    let mut page = use_signal(|| 1usize);

    let state = ctx.state.read();
    let paginated = meeting_page(
        &state.meetings,
        filter(),
        page(),
        ctx.config.meetings_page_size,
    );
    let now = now();
    let current_page = paginated.page;
    let total_pages = paginated.total_pages;
    let has_prev = paginated.has_prev();
    let has_next = paginated.has_next();

    let cards: Vec<Element> = paginated
        .items
        .iter()
        .map(|meeting| {
            let date = format_date(meeting.date);
            let time = meeting.time.format("%H:%M").to_string();
            let project = project_name(&state.projects, meeting.project_id.as_ref()).map(str::to_string);
            let status = meeting.status.label();
            let badge = status_class(meeting.status);
            let soon = meeting.status == MeetingStatus::Scheduled && is_upcoming(meeting, now);
            let people = participants_label(meeting.participants.len());

            rsx! {
                div { key: "{meeting.id}", class: "bg-white rounded-2xl shadow-sm p-6",
                    div { class: "flex items-start justify-between mb-4",
                        div { class: "flex-1",
                            h3 { class: "text-lg font-semibold text-gray-900 mb-1", "{meeting.title}" }
                            if let Some(description) = meeting.description.clone() {
                                p { class: "text-gray-600 text-sm mb-3", "{description}" }
                            }
                            div { class: "flex items-center space-x-4 text-sm text-gray-500",
                                span { "{date}" }
                                span { "{time} ({meeting.duration} мин)" }
                            }
                            if let Some(project) = project {
                                div { class: "mt-2",
                                    span { class: "inline-block px-2 py-1 bg-gray-100 text-gray-700 text-xs rounded-full", "{project}" }
                                }
                            }
                        }
                        div { class: "flex flex-col items-end space-y-2",
                            span { class: "px-3 py-1 rounded-full text-xs font-medium {badge}", "{status}" }
                            if soon {
                                span { class: "text-xs text-blue-600 font-medium", "Скоро" }
                            }
                        }
                    }
                    div { class: "flex items-center justify-between",
                        span { class: "text-sm text-gray-600", "{people}" }
                        ParticipantStack { participants: meeting.participants.clone() }
                    }
                }
            }
        })
        .collect();
    drop(state);

    rsx! {
        div { class: "p-4 space-y-6",
            h1 { class: "text-2xl font-bold text-gray-900", "Встречи" }

            div { class: "bg-white rounded-2xl shadow-sm p-4",
                div { class: "flex space-x-2",
                    for (label, tab) in MeetingFilter::ALL.map(|t| (t.label(), t)) {
                        button {
                            key: "{label}",
                            class: if filter() == tab {
                                "px-4 py-2 rounded-lg text-sm font-medium bg-blue-100 text-blue-700"
                            } else {
                                "px-4 py-2 rounded-lg text-sm font-medium text-gray-600 hover:bg-gray-100"
                            },
                            onclick: move |_| {
                                filter.set(tab);
                                page.set(1);
                            },
                            "{label}"
                        }
                    }
                }
            }

            div { class: "space-y-4", {cards.into_iter()} }

            if total_pages > 1 {
                div { class: "bg-white rounded-2xl shadow-sm p-4",
                    div { class: "flex items-center justify-between",
                        button {
                            class: "px-4 py-2 text-sm font-medium text-gray-600 disabled:opacity-50",
                            disabled: !has_prev,
                            onclick: move |_| page.set(current_page.saturating_sub(1).max(1)),
                            "‹ Назад"
                        }
                        div { class: "flex items-center space-x-2",
                            for number in 1..=total_pages {
                                button {
                                    key: "{number}",
                                    class: if number == current_page {
                                        "w-8 h-8 rounded-full text-sm font-medium bg-blue-600 text-white"
                                    } else {
                                        "w-8 h-8 rounded-full text-sm font-medium text-gray-600 hover:bg-gray-100"
                                    },
                                    onclick: move |_| page.set(number),
                                    "{number}"
                                }
                            }
                        }
                        button {
                            class: "px-4 py-2 text-sm font-medium text-gray-600 disabled:opacity-50",
                            disabled: !has_next,
                            onclick: move |_| page.set((current_page + 1).min(total_pages)),
                            "Вперед ›"
                        }
                    }
                }
            }
        }
    }
}
