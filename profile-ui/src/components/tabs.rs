//! Section tab strip for the profile form

use dioxus::prelude::*;

use super::form::types::FormSection;

#[component]
pub fn SectionTabs(
    active: FormSection,
    complete: Vec<bool>,
    on_select: Callback<FormSection>,
) -> Element {
    rsx! {
        div {
            class: "profile-tabs",
            role: "tablist",
            for (idx, section) in FormSection::ALL.iter().enumerate() {
                {
                    let section = *section;
                    let is_active = section == active;
                    let is_complete = complete.get(idx).copied().unwrap_or(false);
                    rsx! {
                        button {
                            key: "{section.label()}",
                            class: if is_active { "profile-tab is-active" } else { "profile-tab" },
                            role: "tab",
                            onclick: move |_| on_select.call(section),
                            "{section.label()}"
                            if !is_complete {
                                span {
                                    class: "profile-tab-marker",
                                    title: "Section incomplete",
                                    "•"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
