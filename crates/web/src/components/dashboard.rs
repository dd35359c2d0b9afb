use dioxus::prelude::*;
use officetrack_core::Action;
use officetrack_core::host::HostBridge;
use officetrack_core::navigation::{NavItem, Page, Route, navigation_items};

use super::common::Avatar;
use super::create_meeting::CreateMeeting;
use super::employee_detail::EmployeeDetail;
use super::employees::Employees;
use super::meetings::Meetings;
use super::office_planning::OfficePlanning;
use super::projects::Projects;
use super::reports::Reports;
use crate::app::AppContext;
use crate::telegram::close_web_app;

/// Signed-in shell: top bar, current page, bottom navigation
#[component]
pub fn Dashboard(page: Page) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-50 flex flex-col",
            TopBar {}
            div { class: "flex-1 overflow-auto pb-20",
                match page {
                    Page::OfficePlanning => rsx! { OfficePlanning {} },
                    Page::Projects => rsx! { Projects {} },
                    Page::Meetings => rsx! { Meetings {} },
                    Page::Employees => rsx! { Employees {} },
                    Page::Reports => rsx! { Reports {} },
                    Page::CreateMeeting => rsx! { CreateMeeting {} },
                    Page::EmployeeDetail(id) => rsx! { EmployeeDetail { id } },
                }
            }
            div { class: "fixed bottom-0 left-0 right-0",
                BottomNavigation {}
            }
        }
    }
}

#[component]
fn TopBar() -> Element {
    let ctx = use_context::<AppContext>();
    let state = ctx.state.read();
    let Some(user) = state.user.clone() else {
        return rsx! {};
    };
    let is_telegram_app = state.is_telegram_app;
    drop(state);

    let name = user.full_name();
    let role = user.role.label();
    let bridge = ctx.bridge;

    let on_close = move |_| match bridge.read().as_ref() {
        Some(bridge) => bridge.close(),
        None => close_web_app(),
    };

    rsx! {
        div { class: "bg-white shadow-sm border-b border-gray-200 px-4 py-3 flex items-center justify-between",
            div { class: "flex items-center space-x-3",
                Avatar { user, class: "w-10 h-10 rounded-full" }
                div {
                    h2 { class: "font-semibold text-gray-900", "{name}" }
                    p { class: "text-sm text-gray-500", "{role}" }
                }
            }
            if is_telegram_app {
                button {
                    class: "p-2 hover:bg-gray-100 rounded-full transition-colors duration-200",
                    onclick: on_close,
                    "✕"
                }
            }
        }
    }
}

#[component]
fn BottomNavigation() -> Element {
    let ctx = use_context::<AppContext>();
    let state = ctx.state.read();
    let current = state.current_page;
    let items = navigation_items(state.user.as_ref());
    drop(state);

    let (common, director): (Vec<NavItem>, Vec<NavItem>) =
        items.into_iter().partition(|item| !item.director_only);

    rsx! {
        div { class: "bg-white border-t border-gray-200 px-4 py-2",
            NavRow { items: common, current, active_class: "bg-blue-50 text-blue-600" }
            if !director.is_empty() {
                div { class: "mt-2 pt-2 border-t border-gray-100",
                    NavRow { items: director, current, active_class: "bg-orange-50 text-orange-600" }
                }
            }
        }
    }
}

#[component]
fn NavRow(items: Vec<NavItem>, current: Route, active_class: String) -> Element {
    let ctx = use_context::<AppContext>();
    rsx! {
        div { class: "grid grid-cols-3 gap-2",
            for item in items {
                button {
                    key: "{item.route}",
                    class: if item.is_active(&current) {
                        "flex flex-col items-center py-2 px-3 rounded-lg transition-all duration-200 {active_class}"
                    } else {
                        "flex flex-col items-center py-2 px-3 rounded-lg transition-all duration-200 text-gray-600 hover:bg-gray-50"
                    },
                    onclick: {
                        let ctx = ctx.clone();
                        move |_| ctx.dispatch(Action::SetCurrentPage(item.route))
                    },
                    span { class: "text-xs font-medium", "{item.label}" }
                }
            }
        }
    }
}
