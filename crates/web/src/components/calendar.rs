use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;
use officetrack_core::models::{Office, OfficePlan};
use officetrack_core::types::UserId;
use officetrack_core::views::calendar::{DAY_NAMES, MonthCursor, month_grid, office_for, plan_for};

/// Month grid coloured by one user's plans
///
/// Without `on_pick` the grid is read-only.
#[component]
pub fn MonthCalendar(
    offices: Vec<Office>,
    plans: Vec<OfficePlan>,
    user_id: UserId,
    today: NaiveDate,
    on_pick: Option<EventHandler<NaiveDate>>,
) -> Element {
    let mut cursor = use_signal(|| MonthCursor::containing(today));
    let current = cursor();
    let title = current.title();
    let grid = month_grid(current, today);

    rsx! {
        div { class: "bg-white rounded-2xl shadow-sm p-6",
            div { class: "flex items-center justify-between mb-6",
                button {
                    class: "p-2 hover:bg-gray-100 rounded-full transition-colors duration-200",
                    onclick: move |_| cursor.set(current.prev()),
                    "‹"
                }
                h2 { class: "text-xl font-semibold text-gray-900", "{title}" }
                button {
                    class: "p-2 hover:bg-gray-100 rounded-full transition-colors duration-200",
                    onclick: move |_| cursor.set(current.next()),
                    "›"
                }
            }

            div { class: "grid grid-cols-7 gap-2 mb-2",
                for name in DAY_NAMES {
                    div { key: "{name}", class: "text-center text-sm font-medium text-gray-500 py-2", "{name}" }
                }
            }

            div { class: "grid grid-cols-7 gap-2",
                {grid.into_iter().map(|day| {
                    let plan = plan_for(&plans, user_id, day.date);
                    let office = office_for(&offices, plan);
                    let absent = plan.is_some_and(OfficePlan::is_absence);
                    let clickable = on_pick.is_some() && day.editable;

                    let mut class = String::from(
                        "aspect-square p-2 rounded-xl text-sm font-medium transition-all duration-200 relative",
                    );
                    class.push_str(if day.in_month { " text-gray-900" } else { " text-gray-300" });
                    if day.is_today {
                        class.push_str(" ring-2 ring-blue-500");
                    }
                    if clickable {
                        class.push_str(" hover:bg-gray-50 cursor-pointer");
                    }
                    if absent {
                        class.push_str(" bg-red-50 text-red-600");
                    }
                    let style = office
                        .map(|o| format!("background-color: {}20; color: {}", o.color, o.color))
                        .unwrap_or_default();
                    let dot = office.map(|o| o.color.clone());
                    let date = day.date;
                    let number = date.day();

                    rsx! {
                        button {
                            key: "{date}",
                            class: "{class}",
                            style: "{style}",
                            disabled: !clickable,
                            onclick: move |_| {
                                if let Some(handler) = on_pick {
                                    handler.call(date);
                                }
                            },
                            span { class: "relative z-10", "{number}" }
                            if absent {
                                span { class: "absolute inset-0 m-auto w-4 h-4 text-red-500", "✕" }
                            }
                            if let Some(color) = dot {
                                div {
                                    class: "absolute bottom-1 left-1/2 transform -translate-x-1/2 w-2 h-2 rounded-full",
                                    style: "background-color: {color}",
                                }
                            }
                        }
                    }
                })}
            }
        }
    }
}
