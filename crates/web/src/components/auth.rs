use dioxus::prelude::*;
use officetrack_core::Action;
use officetrack_core::forms::demo_user;
use officetrack_core::host::telegram_login_url;

use crate::app::AppContext;
use crate::telegram::open_link;

#[component]
pub fn AuthPage() -> Element {
    let ctx = use_context::<AppContext>();
    let is_telegram_app = ctx.state.read().is_telegram_app;
    let demo_enabled = ctx.config.demo_login_enabled;
    let login_url = telegram_login_url(&ctx.config.bot_username);

    let on_demo_login = move |_| {
        tracing::info!("Demo login");
        ctx.dispatch_all(Action::sign_in(demo_user()));
    };

    rsx! {
        div { class: "min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 flex items-center justify-center p-4",
            div { class: "max-w-md w-full",
                div { class: "bg-white rounded-2xl shadow-xl p-8 text-center",
                    div { class: "mb-8",
                        h1 { class: "text-2xl font-bold text-gray-900 mb-2", "EmployeeTracker" }
                        p { class: "text-gray-600", "Система управления сотрудниками и планирования" }
                    }

                    div { class: "flex items-center justify-center space-x-4 text-sm text-gray-600 mb-8",
                        span { "Планирование" }
                        span { "Офисы" }
                        span { "Встречи" }
                    }

                    if !is_telegram_app {
                        div { class: "space-y-4",
                            button {
                                class: "w-full bg-gradient-to-r from-blue-500 to-blue-600 text-white py-3 px-6 rounded-xl font-medium",
                                onclick: move |_| open_link(&login_url),
                                "Войти через Telegram"
                            }
                            if demo_enabled {
                                button {
                                    class: "w-full bg-gray-100 text-gray-700 py-3 px-6 rounded-xl font-medium hover:bg-gray-200",
                                    onclick: on_demo_login,
                                    "Демо-вход (для разработки)"
                                }
                            }
                        }
                    }

                    div { class: "mt-8 text-xs text-gray-500",
                        p { "Для полного функционала используйте Telegram Mini App" }
                    }
                }
            }
        }
    }
}
