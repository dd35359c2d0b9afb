use chrono::NaiveDate;
use dioxus::prelude::*;
use officetrack_core::models::OfficePlan;
use officetrack_core::types::OfficeId;
use officetrack_core::Action;
use officetrack_core::views::calendar::format_date;

use super::calendar::MonthCalendar;
use super::common::{AbsenceLabel, OfficeLegend};
use crate::app::{AppContext, today};

const CHOICE_CLASS: &str = "w-full p-3 rounded-xl border border-gray-200 hover:bg-gray-50 transition-colors duration-200 text-left";

/// The signed-in user's own calendar; future days open the office picker
#[component]
pub fn OfficePlanning() -> Element {
    let ctx = use_context::<AppContext>();
    let mut selected = use_signal(|| None::<NaiveDate>);

    let handle = ctx.clone();
    let choose = use_callback(move |office_id: Option<OfficeId>| {
        let Some(date) = selected() else {
            return;
        };
        let Some(user_id) = handle.state.read().user.as_ref().map(|u| u.id) else {
            return;
        };
        tracing::debug!(%date, office = ?office_id, "Updating office plan");
        handle.dispatch(Action::UpdateOfficePlan(OfficePlan::new(date, office_id, user_id)));
        selected.set(None);
    });

    let state = ctx.state.read();
    let Some(user_id) = state.user.as_ref().map(|u| u.id) else {
        return rsx! {};
    };
    let offices = state.offices.clone();
    let plans = state.office_plans.clone();
    drop(state);
    let picked_label = selected().map(format_date);

    rsx! {
        div { class: "p-4 space-y-6",
            h1 { class: "text-2xl font-bold text-gray-900", "Планирование офисов" }

            MonthCalendar {
                offices: offices.clone(),
                plans,
                user_id,
                today: today(),
                on_pick: move |date| selected.set(Some(date)),
            }

            OfficeLegend { offices: offices.clone(), title: "Офисы" }

            if let Some(label) = picked_label {
                div { class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center p-4 z-50",
                    div { class: "bg-white rounded-2xl p-6 w-full max-w-sm",
                        div { class: "flex items-center justify-between mb-4",
                            h3 { class: "text-lg font-semibold text-gray-900", "План на {label}" }
                            button {
                                class: "p-1 hover:bg-gray-100 rounded-full",
                                onclick: move |_| selected.set(None),
                                "✕"
                            }
                        }
                        div { class: "space-y-3",
                            for office in offices {
                                button {
                                    key: "{office.id}",
                                    class: CHOICE_CLASS,
                                    onclick: {
                                        let id = office.id.clone();
                                        move |_| choose.call(Some(id.clone()))
                                    },
                                    div { class: "flex items-center space-x-3",
                                        div {
                                            class: "w-4 h-4 rounded-full",
                                            style: "background-color: {office.color}",
                                        }
                                        div {
                                            p { class: "font-medium text-gray-900", "{office.name}" }
                                            p { class: "text-sm text-gray-500", "{office.address}" }
                                        }
                                    }
                                }
                            }
                            button {
                                class: CHOICE_CLASS,
                                onclick: move |_| choose.call(None),
                                AbsenceLabel {}
                            }
                        }
                    }
                }
            }
        }
    }
}
