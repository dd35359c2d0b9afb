//! Small pieces shared by several screens

use dioxus::prelude::*;
use officetrack_core::models::{Office, User};

/// Photo, or initials on a gradient when there is none
#[component]
pub fn Avatar(user: User, class: String) -> Element {
    let name = user.full_name();
    match user.photo_url {
        Some(src) => rsx! {
            img { class: "{class} object-cover", src: "{src}", alt: "{name}" }
        },
        None => {
            let initials = user.initials();
            rsx! {
                div { class: "{class} bg-gradient-to-r from-blue-500 to-indigo-600 flex items-center justify-center",
                    span { class: "text-xs text-white font-medium", "{initials}" }
                }
            }
        }
    }
}

/// Up to three overlapping avatars plus a "+N" bubble
#[component]
pub fn ParticipantStack(participants: Vec<User>) -> Element {
    let hidden = participants.len().saturating_sub(3);
    rsx! {
        div { class: "flex -space-x-2",
            for participant in participants.into_iter().take(3) {
                div { key: "{participant.id}", class: "relative",
                    Avatar { user: participant.clone(), class: "w-8 h-8 rounded-full border-2 border-white" }
                }
            }
            if hidden > 0 {
                div { class: "w-8 h-8 bg-gray-200 rounded-full border-2 border-white flex items-center justify-center",
                    span { class: "text-xs text-gray-600 font-medium", "+{hidden}" }
                }
            }
        }
    }
}

/// Office colours plus the absence marker
#[component]
pub fn OfficeLegend(offices: Vec<Office>, title: String) -> Element {
    rsx! {
        div { class: "bg-white rounded-2xl shadow-sm p-6",
            h3 { class: "text-lg font-semibold text-gray-900 mb-4", "{title}" }
            div { class: "grid grid-cols-2 gap-3",
                for office in offices {
                    div { key: "{office.id}", class: "flex items-center space-x-3",
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
                AbsenceLabel {}
            }
        }
    }
}

#[component]
pub fn AbsenceLabel() -> Element {
    rsx! {
        div { class: "flex items-center space-x-3",
            span { class: "w-4 h-4 text-red-500 font-bold", "✕" }
            div {
                p { class: "font-medium text-gray-900", "Отсутствие" }
                p { class: "text-sm text-gray-500", "Выходной/отпуск" }
            }
        }
    }
}
