//! Board roster section
//!
//! The profile form never edits the roster; membership lives in its own area
//! of the application. This section is a read-only listing plus the redirect
//! notice.

use dioxus::prelude::*;
use shared_types::BoardMember;

#[component]
pub fn BoardSection(members: Vec<BoardMember>) -> Element {
    rsx! {
        div {
            class: "profile-board",
            div {
                class: "profile-board-notice",
                "Board members are managed in the membership area. The list below is read-only."
            }
            if members.is_empty() {
                div { class: "profile-board-empty", "No board members on file yet." }
            } else {
                ul {
                    class: "profile-board-list",
                    for member in members.iter() {
                        li {
                            key: "{member.member_id}",
                            class: "profile-board-row",
                            span { class: "profile-board-name", "{member.name}" }
                            span { class: "profile-board-role", "{member.role}" }
                            if let Some(email) = member.email.as_ref() {
                                span { class: "profile-board-email", "{email}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
