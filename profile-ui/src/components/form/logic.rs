//! Profile form pure logic functions — no RSX, no signals

use shared_types::{NarrativeKind, OrgProfile, ProgramDescription};

use super::types::FormSection;

/// Whether a section's required content is filled in
pub fn section_complete(profile: &OrgProfile, section: FormSection) -> bool {
    match section {
        FormSection::Basics => !profile.name.trim().is_empty(),
        FormSection::Narratives => NarrativeKind::ALL
            .iter()
            .all(|kind| !profile.narrative(*kind).trim().is_empty()),
        FormSection::Programs => profile
            .programs
            .iter()
            .any(|p| !p.name.trim().is_empty() && !p.summary.trim().is_empty()),
        FormSection::Board => !profile.board_members.is_empty(),
    }
}

pub fn section_completion_flags(profile: &OrgProfile) -> Vec<bool> {
    FormSection::ALL
        .iter()
        .map(|section| section_complete(profile, *section))
        .collect()
}

pub fn completion_percent(profile: &OrgProfile) -> u32 {
    let total = FormSection::ALL.len() as u32;
    let complete = FormSection::ALL
        .iter()
        .filter(|section| section_complete(profile, **section))
        .count() as u32;
    complete * 100 / total
}

/// Replace the program with the same id, or append when it is new
pub fn upsert_program(programs: &mut Vec<ProgramDescription>, updated: ProgramDescription) {
    if let Some(existing) = programs
        .iter_mut()
        .find(|p| p.program_id == updated.program_id)
    {
        *existing = updated;
    } else {
        programs.push(updated);
    }
}

pub fn remove_program(programs: &mut Vec<ProgramDescription>, program_id: &str) {
    programs.retain(|p| p.program_id != program_id);
}

/// Parse a budget input field. Blank or unparseable input clears the budget;
/// separators and a dollar sign are tolerated.
pub fn parse_budget(raw: &str) -> Option<u64> {
    let trimmed = raw.trim().replace([',', '$'], "");
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<u64>().ok()
}
