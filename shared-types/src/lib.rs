//! Shared profile data contracts
//!
//! These types are used by both:
//! - the persistence API (native Rust)
//! - Dioxus form components (WASM)
//!
//! Serializable with serde for JSON over HTTP. Each field category gets an
//! explicit contract; nothing here is loosely typed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Core Types
// ============================================================================

/// Unique identifier for organizations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[ts(export, export_to = "../../profile-ui/src/types/generated.ts")]
pub struct OrgId(pub String);

impl OrgId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OrgId {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Narrative Statements
// ============================================================================

/// Narrative field category. The profile carries exactly one statement per
/// category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../../profile-ui/src/types/generated.ts")]
pub enum NarrativeKind {
    Mission,
    Background,
    Impact,
    Needs,
}

impl NarrativeKind {
    pub const ALL: [NarrativeKind; 4] = [
        NarrativeKind::Mission,
        NarrativeKind::Background,
        NarrativeKind::Impact,
        NarrativeKind::Needs,
    ];

    /// Label shown next to the statement's text area
    pub fn label(self) -> &'static str {
        match self {
            NarrativeKind::Mission => "Mission statement",
            NarrativeKind::Background => "Organization background",
            NarrativeKind::Impact => "Impact statement",
            NarrativeKind::Needs => "Statement of needs",
        }
    }
}

/// One narrative statement of the profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../profile-ui/src/types/generated.ts")]
pub struct NarrativeField {
    pub kind: NarrativeKind,
    pub text: String,
}

// ============================================================================
// Programs and Board
// ============================================================================

/// Program run by the organization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../profile-ui/src/types/generated.ts")]
pub struct ProgramDescription {
    pub program_id: String,
    pub name: String,
    pub summary: String,
    /// Whole dollars; absent when the org has not budgeted the program yet
    pub annual_budget: Option<u64>,
}

impl ProgramDescription {
    pub fn new() -> Self {
        Self {
            program_id: uuid::Uuid::new_v4().to_string(),
            name: String::new(),
            summary: String::new(),
            annual_budget: None,
        }
    }
}

impl Default for ProgramDescription {
    fn default() -> Self {
        Self::new()
    }
}

/// Board roster entry. Read-only in the profile form; membership is managed
/// elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../profile-ui/src/types/generated.ts")]
pub struct BoardMember {
    pub member_id: String,
    pub name: String,
    pub role: String,
    pub email: Option<String>,
}

// ============================================================================
// Profile
// ============================================================================

/// Full organization profile as held by the form and the persistence API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../profile-ui/src/types/generated.ts")]
pub struct OrgProfile {
    pub org_id: String,
    pub name: String,
    pub narratives: Vec<NarrativeField>,
    pub programs: Vec<ProgramDescription>,
    pub board_members: Vec<BoardMember>,
    /// When the server last accepted a save, if ever
    pub updated_at: Option<DateTime<Utc>>,
}

impl OrgProfile {
    /// Fresh profile with one empty statement per narrative category
    pub fn empty(org_id: impl Into<String>) -> Self {
        Self {
            org_id: org_id.into(),
            name: String::new(),
            narratives: NarrativeKind::ALL
                .iter()
                .map(|kind| NarrativeField {
                    kind: *kind,
                    text: String::new(),
                })
                .collect(),
            programs: Vec::new(),
            board_members: Vec::new(),
            updated_at: None,
        }
    }

    /// Text of the statement for `kind`, empty when the profile predates the
    /// category
    pub fn narrative(&self, kind: NarrativeKind) -> &str {
        self.narratives
            .iter()
            .find(|field| field.kind == kind)
            .map(|field| field.text.as_str())
            .unwrap_or("")
    }

    /// Upsert the statement for `kind`
    pub fn set_narrative(&mut self, kind: NarrativeKind, text: impl Into<String>) {
        let text = text.into();
        if let Some(field) = self.narratives.iter_mut().find(|field| field.kind == kind) {
            field.text = text;
        } else {
            self.narratives.push(NarrativeField { kind, text });
        }
    }
}

// ============================================================================
// Google Drive Link (stub)
// ============================================================================

/// Link state of the org's Google Drive folder. The form only surfaces this;
/// connecting and syncing happen outside the app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export, export_to = "../../profile-ui/src/types/generated.ts")]
pub enum DriveLinkStatus {
    NotConnected,
    Connected { folder_id: String },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ts_rs::Config;

    #[test]
    fn test_org_id_generation() {
        let id1 = OrgId::new();
        let id2 = OrgId::new();
        assert_ne!(id1, id2);
        assert_eq!(id1.0.len(), 36); // UUID length
    }

    #[test]
    fn test_profile_serialization() {
        let mut profile = OrgProfile::empty("org-1");
        profile.name = "Open Rivers Trust".to_string();
        profile.set_narrative(NarrativeKind::Mission, "Keep rivers open.");
        profile.programs.push(ProgramDescription {
            program_id: "prog-1".to_string(),
            name: "Watershed cleanup".to_string(),
            summary: "Quarterly volunteer cleanups.".to_string(),
            annual_budget: Some(12_000),
        });

        let json = serde_json::to_string(&profile).unwrap();
        let deserialized: OrgProfile = serde_json::from_str(&json).unwrap();

        assert_eq!(profile, deserialized);
    }

    #[test]
    fn test_narrative_upsert() {
        let mut profile = OrgProfile::empty("org-1");
        assert_eq!(profile.narrative(NarrativeKind::Impact), "");

        profile.set_narrative(NarrativeKind::Impact, "Served 400 families.");
        assert_eq!(
            profile.narrative(NarrativeKind::Impact),
            "Served 400 families."
        );

        profile.set_narrative(NarrativeKind::Impact, "Served 500 families.");
        assert_eq!(
            profile.narrative(NarrativeKind::Impact),
            "Served 500 families."
        );
        // Upsert must not duplicate the category
        assert_eq!(
            profile
                .narratives
                .iter()
                .filter(|f| f.kind == NarrativeKind::Impact)
                .count(),
            1
        );
    }

    #[test]
    fn test_narrative_kind_serialization() {
        let kind = NarrativeKind::Mission;
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, "\"mission\"");
    }

    #[test]
    fn test_drive_status_serialization() {
        let status = DriveLinkStatus::NotConnected;
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, "{\"status\":\"not_connected\"}");

        let status = DriveLinkStatus::Connected {
            folder_id: "folder-9".to_string(),
        };
        let json = serde_json::to_string(&status).unwrap();
        let back: DriveLinkStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, back);
    }

    #[test]
    fn export_types() {
        // Export all types to TypeScript
        // The export_to attribute in each type's #[ts] macro specifies the output file
        let config = Config::default();
        OrgId::export(&config).unwrap();
        NarrativeKind::export(&config).unwrap();
        NarrativeField::export(&config).unwrap();
        ProgramDescription::export(&config).unwrap();
        BoardMember::export(&config).unwrap();
        OrgProfile::export(&config).unwrap();
        DriveLinkStatus::export(&config).unwrap();
    }
}
