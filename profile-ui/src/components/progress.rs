//! Completion progress bar

use dioxus::prelude::*;

#[component]
pub fn ProgressBar(percent: u32) -> Element {
    let clamped = percent.min(100);
    rsx! {
        div {
            class: "profile-progress",
            role: "progressbar",
            aria_valuenow: "{clamped}",
            aria_valuemin: "0",
            aria_valuemax: "100",
            div {
                class: "profile-progress-track",
                div {
                    class: "profile-progress-fill",
                    style: "width: {clamped}%;",
                }
            }
            span { class: "profile-progress-label", "{clamped}% complete" }
        }
    }
}
