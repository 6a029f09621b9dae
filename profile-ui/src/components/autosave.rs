//! Auto-save status indicator
//!
//! Derives a save state from the owning form's signals and shows how long ago
//! the profile last reached the server. The elapsed label refreshes on a
//! recurring tick while a last-saved instant is present; the tick stops when
//! the instant goes away or the indicator unmounts.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Cadence of the elapsed-label refresh, also advertised to the user as the
/// auto-save interval.
pub const DEFAULT_REMINDER_INTERVAL_SECS: u32 = 30;

/// Save state of the profile form, derived on every render and never stored.
///
/// Precedence is strict: an error always wins, then an in-flight save, then
/// unsaved edits, then the last successful save. With none of those present
/// the indicator renders nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveState {
    /// Save failed; the caller's message is shown verbatim
    Error(String),
    /// Save in progress
    Saving,
    /// Has unsaved changes
    Dirty,
    /// No unsaved changes since the given instant
    Clean(DateTime<Utc>),
    /// Nothing to report yet
    Unknown,
}

/// Compute the save state from the four independent inputs.
pub fn derive_save_state(
    error: Option<&str>,
    saving: bool,
    dirty: bool,
    last_saved_at: Option<DateTime<Utc>>,
) -> SaveState {
    if let Some(message) = error {
        return SaveState::Error(message.to_string());
    }
    if saving {
        return SaveState::Saving;
    }
    if dirty {
        return SaveState::Dirty;
    }
    match last_saved_at {
        Some(instant) => SaveState::Clean(instant),
        None => SaveState::Unknown,
    }
}

/// Humanized "time since last save" label.
///
/// An instant in the future clamps to zero elapsed seconds rather than
/// wrapping into the hours branch.
pub fn elapsed_label(last_saved_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - last_saved_at).num_seconds().max(0);
    if secs < 60 {
        "just now".to_string()
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else {
        format!("{}h ago", secs / 3600)
    }
}

#[component]
pub fn AutosaveIndicator(
    last_saved_at: Signal<Option<DateTime<Utc>>>,
    saving: Signal<bool>,
    dirty: Signal<bool>,
    error: Signal<Option<String>>,
    #[props(default = DEFAULT_REMINDER_INTERVAL_SECS)] reminder_interval_secs: u32,
) -> Element {
    let mut now = use_signal(Utc::now);

    let mut tick_started = use_signal(|| false);
    let tick_alive = use_hook(|| Rc::new(Cell::new(true)));

    {
        let tick_alive = tick_alive.clone();
        use_drop(move || {
            tick_alive.set(false);
        });
    }

    {
        let tick_alive = tick_alive.clone();
        use_effect(move || {
            if last_saved_at().is_none() {
                // A running pump notices the absent instant at its next tick
                // and stops on its own.
                return;
            }
            if tick_started() {
                return;
            }
            tick_started.set(true);
            now.set(Utc::now());

            let interval_ms = reminder_interval_secs.max(1).saturating_mul(1000);
            let tick_alive = tick_alive.clone();
            spawn(async move {
                loop {
                    TimeoutFuture::new(interval_ms).await;
                    if !tick_alive.get() {
                        return;
                    }
                    if last_saved_at.peek().is_none() {
                        break;
                    }
                    now.set(Utc::now());
                }
                tick_started.set(false);
            });
        });
    }

    let state = derive_save_state(
        error.read().as_deref(),
        saving(),
        dirty(),
        last_saved_at(),
    );

    match state {
        SaveState::Error(message) => rsx! {
            span {
                class: "profile-save-status profile-save-status--error",
                title: "{message}",
                "Save failed: {message}"
            }
        },
        SaveState::Saving => rsx! {
            span {
                class: "profile-save-status profile-save-status--saving",
                span { style: "animation: spin 1s linear infinite; display: inline-block;", "◐" }
                "Saving..."
            }
        },
        SaveState::Dirty => rsx! {
            span {
                class: "profile-save-status profile-save-status--dirty",
                "Unsaved changes (autosaves every {reminder_interval_secs}s)"
            }
        },
        SaveState::Clean(instant) => {
            let label = elapsed_label(instant, now());
            rsx! {
                span {
                    class: "profile-save-status profile-save-status--clean",
                    "Saved {label}"
                }
            }
        }
        SaveState::Unknown => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn saved(now: DateTime<Utc>, secs_ago: i64) -> Option<DateTime<Utc>> {
        Some(now - Duration::seconds(secs_ago))
    }

    #[test]
    fn error_beats_every_other_input() {
        let now = Utc::now();
        let state = derive_save_state(Some("Network timeout"), true, true, saved(now, 10));
        assert_eq!(state, SaveState::Error("Network timeout".to_string()));
    }

    #[test]
    fn saving_beats_dirty_and_clean() {
        let now = Utc::now();
        let state = derive_save_state(None, true, true, saved(now, 10));
        assert_eq!(state, SaveState::Saving);
    }

    #[test]
    fn dirty_beats_clean() {
        let now = Utc::now();
        let state = derive_save_state(None, false, true, saved(now, 10));
        assert_eq!(state, SaveState::Dirty);
    }

    #[test]
    fn clean_requires_a_last_saved_instant() {
        let now = Utc::now();
        let instant = now - Duration::seconds(10);
        let state = derive_save_state(None, false, false, Some(instant));
        assert_eq!(state, SaveState::Clean(instant));
    }

    #[test]
    fn absent_inputs_are_unknown_not_an_error() {
        let state = derive_save_state(None, false, false, None);
        assert_eq!(state, SaveState::Unknown);
    }

    #[test]
    fn exactly_one_state_for_every_input_combination() {
        let now = Utc::now();
        for error in [None, Some("boom")] {
            for saving in [false, true] {
                for dirty in [false, true] {
                    for last in [None, saved(now, 5)] {
                        let state = derive_save_state(error, saving, dirty, last);
                        let expected = if error.is_some() {
                            SaveState::Error("boom".to_string())
                        } else if saving {
                            SaveState::Saving
                        } else if dirty {
                            SaveState::Dirty
                        } else if let Some(instant) = last {
                            SaveState::Clean(instant)
                        } else {
                            SaveState::Unknown
                        };
                        assert_eq!(state, expected);
                    }
                }
            }
        }
    }

    #[test]
    fn label_under_a_minute_is_just_now() {
        let now = Utc::now();
        assert_eq!(elapsed_label(now - Duration::seconds(10), now), "just now");
        assert_eq!(elapsed_label(now - Duration::seconds(59), now), "just now");
    }

    #[test]
    fn label_minutes() {
        let now = Utc::now();
        assert_eq!(elapsed_label(now - Duration::seconds(60), now), "1m ago");
        assert_eq!(elapsed_label(now - Duration::seconds(125), now), "2m ago");
        assert_eq!(elapsed_label(now - Duration::seconds(3599), now), "59m ago");
    }

    #[test]
    fn label_hours() {
        let now = Utc::now();
        assert_eq!(elapsed_label(now - Duration::seconds(3600), now), "1h ago");
        assert_eq!(elapsed_label(now - Duration::seconds(7500), now), "2h ago");
        assert_eq!(
            elapsed_label(now - Duration::seconds(48 * 3600), now),
            "48h ago"
        );
    }

    #[test]
    fn future_instant_clamps_to_just_now() {
        let now = Utc::now();
        assert_eq!(elapsed_label(now + Duration::seconds(90), now), "just now");
    }
}
