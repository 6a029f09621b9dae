//! Main ProfileFormView component

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::api::{fetch_drive_link_status, fetch_profile, save_profile};
use crate::components::autosave::AutosaveIndicator;
use crate::components::board::BoardSection;
use crate::components::progress::ProgressBar;
use crate::components::tabs::SectionTabs;
use shared_types::{DriveLinkStatus, NarrativeKind, OrgProfile, ProgramDescription};

use super::logic::{completion_percent, remove_program, section_completion_flags};
use super::styles::PROFILE_STYLES;
use super::types::FormSection;

/// Wait this long after the last edit before autosaving
const AUTOSAVE_DEBOUNCE_MS: u32 = 2000;

#[component]
pub fn ProfileFormView(org_id: String) -> Element {
    let mut profile = use_signal(|| None::<OrgProfile>);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| None::<String>);
    let mut load_started = use_signal(|| false);

    let mut dirty = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut save_error = use_signal(|| None::<String>);
    let mut last_saved_at = use_signal(|| None::<DateTime<Utc>>);

    let mut active_section = use_signal(|| FormSection::Basics);
    let mut drive_status = use_signal(|| None::<DriveLinkStatus>);
    let mut drive_load_started = use_signal(|| false);

    let org_id_signal = use_signal(|| org_id.clone());

    let reload = use_callback(move |_| {
        let org_id = org_id_signal.peek().clone();
        spawn(async move {
            loading.set(true);
            match fetch_profile(&org_id).await {
                Ok(loaded) => {
                    last_saved_at.set(loaded.updated_at);
                    profile.set(Some(loaded));
                    load_error.set(None);
                }
                Err(e) => {
                    dioxus_logger::tracing::error!("Failed to load profile: {}", e);
                    load_error.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    // Load profile on mount
    {
        use_effect(move || {
            if load_started() {
                return;
            }
            load_started.set(true);
            reload.call(());
        });
    }

    // Drive link status is informational; a failed fetch just leaves the
    // badge out.
    {
        use_effect(move || {
            if drive_load_started() {
                return;
            }
            drive_load_started.set(true);
            let org_id = org_id_signal.peek().clone();
            spawn(async move {
                match fetch_drive_link_status(&org_id).await {
                    Ok(status) => drive_status.set(Some(status)),
                    Err(e) => {
                        dioxus_logger::tracing::warn!("Drive status unavailable: {}", e);
                    }
                }
            });
        });
    }

    let mark_edited = use_callback(move |_| {
        if !dirty() {
            dirty.set(true);
        }
    });

    let handle_save = use_callback(move |_| {
        if saving() {
            return;
        }
        let Some(current) = profile() else {
            return;
        };
        let org_id = org_id_signal.peek().clone();
        saving.set(true);
        dirty.set(false);
        save_error.set(None);
        spawn(async move {
            match save_profile(&org_id, &current).await {
                Ok(response) => {
                    last_saved_at.set(Some(response.saved_at));
                    if let Some(p) = profile.write().as_mut() {
                        p.updated_at = Some(response.saved_at);
                    }
                }
                Err(e) => {
                    dioxus_logger::tracing::error!("Autosave failed: {}", e);
                    save_error.set(Some(e));
                }
            }
            saving.set(false);
        });
    });

    // Debounced autosave while there are unsaved edits
    {
        use_effect(move || {
            if !dirty() {
                return;
            }
            spawn(async move {
                TimeoutFuture::new(AUTOSAVE_DEBOUNCE_MS).await;
                if dirty() && !saving() {
                    handle_save.call(());
                }
            });
        });
    }

    let current_profile = profile();
    let current_drive_status = drive_status();
    let is_loading = loading();
    let current_load_error = load_error();

    rsx! {
        style { {PROFILE_STYLES} }
        div {
            class: "profile-app",

            if is_loading {
                div { class: "profile-loading", "Loading profile..." }
            } else if let Some(err) = current_load_error {
                div {
                    class: "profile-load-error",
                    p { style: "font-weight: 500;", "Error loading profile" }
                    p { class: "profile-load-error-detail", "{err}" }
                    button {
                        class: "profile-retry-btn",
                        onclick: move |_| reload.call(()),
                        "Retry"
                    }
                }
            } else if let Some(current) = current_profile {
                div {
                    class: "profile-toolbar",
                    span { class: "profile-toolbar-title", "Organization profile" }
                    {match current_drive_status {
                        Some(DriveLinkStatus::Connected { ref folder_id }) => rsx! {
                            span {
                                class: "profile-drive-badge profile-drive-badge--connected",
                                title: "Drive folder {folder_id}",
                                "Drive linked"
                            }
                        },
                        Some(DriveLinkStatus::NotConnected) => rsx! {
                            span { class: "profile-drive-badge", "Drive not connected" }
                        },
                        None => rsx! {},
                    }}
                    div { class: "profile-toolbar-spacer" }
                    AutosaveIndicator {
                        last_saved_at,
                        saving,
                        dirty,
                        error: save_error,
                    }
                }

                SectionTabs {
                    active: active_section(),
                    complete: section_completion_flags(&current),
                    on_select: move |section| active_section.set(section),
                }

                ProgressBar { percent: completion_percent(&current) }

                {match active_section() {
                    FormSection::Basics => rsx! {
                        div {
                            class: "profile-section",
                            div {
                                class: "profile-field",
                                label { class: "profile-field-label", "Organization name" }
                                input {
                                    r#type: "text",
                                    value: "{current.name}",
                                    oninput: move |e: FormEvent| {
                                        if let Some(p) = profile.write().as_mut() {
                                            p.name = e.value();
                                        }
                                        mark_edited.call(());
                                    },
                                }
                            }
                            div {
                                class: "profile-field",
                                label { class: "profile-field-label", "Organization id" }
                                span {
                                    style: "font-size: 0.8rem; color: var(--text-muted, #9ca3af);",
                                    "{current.org_id}"
                                }
                            }
                        }
                    },
                    FormSection::Narratives => rsx! {
                        div {
                            class: "profile-section",
                            for kind in NarrativeKind::ALL.iter() {
                                {
                                    let kind = *kind;
                                    rsx! {
                                        div {
                                            key: "{kind.label()}",
                                            class: "profile-field",
                                            label { class: "profile-field-label", "{kind.label()}" }
                                            textarea {
                                                value: "{current.narrative(kind)}",
                                                oninput: move |e: FormEvent| {
                                                    if let Some(p) = profile.write().as_mut() {
                                                        p.set_narrative(kind, e.value());
                                                    }
                                                    mark_edited.call(());
                                                },
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    FormSection::Programs => rsx! {
                        div {
                            class: "profile-section",
                            for program in current.programs.iter() {
                                {render_program_card(program, profile, mark_edited)}
                            }
                            button {
                                class: "profile-add-program",
                                onclick: move |_| {
                                    if let Some(p) = profile.write().as_mut() {
                                        p.programs.push(ProgramDescription::new());
                                    }
                                    mark_edited.call(());
                                },
                                "+ Add program"
                            }
                        }
                    },
                    FormSection::Board => rsx! {
                        div {
                            class: "profile-section",
                            BoardSection { members: current.board_members.clone() }
                        }
                    },
                }}
            }
        }
    }
}

fn render_program_card(
    program: &ProgramDescription,
    mut profile: Signal<Option<OrgProfile>>,
    mark_edited: Callback<()>,
) -> Element {
    let program_id = program.program_id.clone();
    let remove_id = program_id.clone();
    let name_id = program_id.clone();
    let summary_id = program_id.clone();
    let budget_id = program_id.clone();
    let budget_value = program
        .annual_budget
        .map(|b| b.to_string())
        .unwrap_or_default();

    rsx! {
        div {
            key: "{program_id}",
            class: "profile-program-card",
            div {
                class: "profile-program-card-header",
                span { class: "profile-field-label", "Program" }
                button {
                    class: "profile-program-remove",
                    onclick: move |_| {
                        if let Some(p) = profile.write().as_mut() {
                            remove_program(&mut p.programs, &remove_id);
                        }
                        mark_edited.call(());
                    },
                    "Remove"
                }
            }
            div {
                class: "profile-field",
                label { class: "profile-field-label", "Name" }
                input {
                    r#type: "text",
                    value: "{program.name}",
                    oninput: move |e: FormEvent| {
                        if let Some(p) = profile.write().as_mut() {
                            if let Some(prog) =
                                p.programs.iter_mut().find(|pr| pr.program_id == name_id)
                            {
                                prog.name = e.value();
                            }
                        }
                        mark_edited.call(());
                    },
                }
            }
            div {
                class: "profile-field",
                label { class: "profile-field-label", "Summary" }
                textarea {
                    value: "{program.summary}",
                    oninput: move |e: FormEvent| {
                        if let Some(p) = profile.write().as_mut() {
                            if let Some(prog) =
                                p.programs.iter_mut().find(|pr| pr.program_id == summary_id)
                            {
                                prog.summary = e.value();
                            }
                        }
                        mark_edited.call(());
                    },
                }
            }
            div {
                class: "profile-field",
                label { class: "profile-field-label", "Annual budget (USD)" }
                input {
                    r#type: "text",
                    inputmode: "numeric",
                    value: "{budget_value}",
                    oninput: move |e: FormEvent| {
                        if let Some(p) = profile.write().as_mut() {
                            if let Some(prog) =
                                p.programs.iter_mut().find(|pr| pr.program_id == budget_id)
                            {
                                prog.annual_budget = super::logic::parse_budget(&e.value());
                            }
                        }
                        mark_edited.call(());
                    },
                }
            }
        }
    }
}
