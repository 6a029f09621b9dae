//! Profile form styles

pub const PROFILE_STYLES: &str = r#"
/* ── App frame ── */
.profile-app {
    display: flex;
    flex-direction: column;
    height: 100%;
    background: var(--window-bg, #ffffff);
    color: var(--text-primary, #111827);
    font-family: system-ui, sans-serif;
}

.profile-toolbar {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 0.5rem 1rem;
    background: var(--titlebar-bg, #f9fafb);
    border-bottom: 1px solid var(--border-color, #e5e7eb);
    flex-shrink: 0;
}

.profile-toolbar-title {
    font-size: 0.9rem;
    font-weight: 600;
    color: var(--text-primary, #111827);
}

.profile-toolbar-spacer {
    flex: 1;
}

/* ── Save status ── */
.profile-save-status {
    font-size: 0.8rem;
    display: flex;
    align-items: center;
    gap: 0.3rem;
    white-space: nowrap;
}

.profile-save-status--error  { color: var(--danger-text, #ef4444); }
.profile-save-status--saving { color: var(--accent-bg, #3b82f6); }
.profile-save-status--dirty  { color: var(--warning-bg, #f59e0b); }
.profile-save-status--clean  { color: var(--text-secondary, #6b7280); }

@keyframes spin {
    from { transform: rotate(0deg); }
    to   { transform: rotate(360deg); }
}

/* ── Drive badge ── */
.profile-drive-badge {
    font-size: 0.72rem;
    padding: 0.125rem 0.4rem;
    border-radius: 0.25rem;
    background: var(--hover-bg, #f3f4f6);
    color: var(--text-secondary, #6b7280);
    white-space: nowrap;
}

.profile-drive-badge--connected {
    background: color-mix(in srgb, var(--success-bg, #22c55e) 12%, transparent);
    color: var(--success-bg, #16a34a);
}

/* ── Tabs ── */
.profile-tabs {
    display: flex;
    gap: 0.25rem;
    padding: 0.4rem 1rem 0;
    border-bottom: 1px solid var(--border-color, #e5e7eb);
    flex-shrink: 0;
}

.profile-tab {
    background: transparent;
    border: none;
    border-bottom: 2px solid transparent;
    color: var(--text-secondary, #6b7280);
    padding: 0.4rem 0.7rem;
    font-size: 0.82rem;
    cursor: pointer;
    display: flex;
    align-items: center;
    gap: 0.3rem;
}

.profile-tab:hover {
    color: var(--text-primary, #111827);
}

.profile-tab.is-active {
    color: var(--text-primary, #111827);
    border-bottom-color: var(--accent-bg, #3b82f6);
}

.profile-tab-marker {
    color: var(--warning-bg, #f59e0b);
    font-size: 0.9rem;
    line-height: 1;
}

/* ── Progress ── */
.profile-progress {
    display: flex;
    align-items: center;
    gap: 0.6rem;
    padding: 0.5rem 1rem;
    flex-shrink: 0;
}

.profile-progress-track {
    flex: 1;
    height: 6px;
    border-radius: 3px;
    background: var(--hover-bg, #f3f4f6);
    overflow: hidden;
}

.profile-progress-fill {
    height: 100%;
    border-radius: 3px;
    background: var(--accent-bg, #3b82f6);
    transition: width 0.2s;
}

.profile-progress-label {
    font-size: 0.75rem;
    color: var(--text-secondary, #6b7280);
    white-space: nowrap;
}

/* ── Sections ── */
.profile-section {
    flex: 1;
    overflow-y: auto;
    padding: 1rem;
    display: flex;
    flex-direction: column;
    gap: 0.9rem;
    max-width: 44rem;
}

.profile-field {
    display: flex;
    flex-direction: column;
    gap: 0.3rem;
}

.profile-field-label {
    font-size: 0.8rem;
    font-weight: 500;
    color: var(--text-secondary, #6b7280);
}

.profile-field input,
.profile-field textarea {
    border: 1px solid var(--border-color, #e5e7eb);
    border-radius: 0.375rem;
    padding: 0.45rem 0.6rem;
    font-size: 0.85rem;
    font-family: inherit;
    color: var(--text-primary, #111827);
    background: var(--bg-secondary, #ffffff);
}

.profile-field textarea {
    min-height: 6rem;
    resize: vertical;
}

/* ── Program cards ── */
.profile-program-card {
    border: 1px solid var(--border-color, #e5e7eb);
    border-radius: 10px;
    background: var(--bg-secondary, #ffffff);
    padding: 0.75rem;
    display: flex;
    flex-direction: column;
    gap: 0.6rem;
}

.profile-program-card-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.profile-program-remove {
    background: transparent;
    border: 1px solid var(--border-color, #e5e7eb);
    color: var(--danger-text, #ef4444);
    border-radius: 0.3rem;
    padding: 0.2rem 0.5rem;
    font-size: 0.72rem;
    cursor: pointer;
}

.profile-add-program {
    align-self: flex-start;
    background: transparent;
    border: 1px dashed var(--border-color, #e5e7eb);
    color: var(--text-secondary, #6b7280);
    border-radius: 0.4rem;
    padding: 0.4rem 0.8rem;
    font-size: 0.8rem;
    cursor: pointer;
}

.profile-add-program:hover {
    color: var(--text-primary, #111827);
    border-color: var(--accent-bg, #3b82f6);
}

/* ── Board ── */
.profile-board {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}

.profile-board-notice {
    padding: 0.6rem 0.8rem;
    background: color-mix(in srgb, var(--accent-bg, #3b82f6) 10%, transparent);
    border-radius: 0.4rem;
    font-size: 0.8rem;
    color: var(--text-primary, #111827);
}

.profile-board-empty {
    font-size: 0.82rem;
    color: var(--text-secondary, #6b7280);
}

.profile-board-list {
    list-style: none;
    margin: 0;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 0.4rem;
}

.profile-board-row {
    display: flex;
    gap: 0.75rem;
    align-items: baseline;
    padding: 0.4rem 0.6rem;
    border: 1px solid var(--border-color, #e5e7eb);
    border-radius: 0.4rem;
    font-size: 0.82rem;
}

.profile-board-name { font-weight: 600; }
.profile-board-role { color: var(--text-secondary, #6b7280); }
.profile-board-email { color: var(--text-muted, #9ca3af); margin-left: auto; }

/* ── Load states ── */
.profile-loading {
    display: flex;
    align-items: center;
    justify-content: center;
    height: 100%;
    color: var(--text-muted, #6b7280);
}

.profile-load-error {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    height: 100%;
    gap: 0.5rem;
    color: var(--danger-text, #ef4444);
    padding: 2rem;
    text-align: center;
}

.profile-load-error-detail {
    font-size: 0.875rem;
    color: var(--text-secondary, #9ca3af);
}

.profile-retry-btn {
    background: transparent;
    border: 1px solid var(--border-color, #e5e7eb);
    color: var(--text-primary, #111827);
    border-radius: 0.375rem;
    padding: 0.35rem 0.8rem;
    font-size: 0.8rem;
    cursor: pointer;
}
"#;
