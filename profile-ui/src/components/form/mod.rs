pub mod logic;
pub mod styles;
pub mod types;
pub mod view;

pub use view::ProfileFormView;

#[cfg(test)]
mod tests {
    use super::logic::{
        completion_percent, parse_budget, remove_program, section_complete,
        section_completion_flags, upsert_program,
    };
    use super::types::FormSection;
    use shared_types::{BoardMember, NarrativeKind, OrgProfile, ProgramDescription};

    fn filled_profile() -> OrgProfile {
        let mut profile = OrgProfile::empty("org-1");
        profile.name = "Open Rivers Trust".to_string();
        for kind in NarrativeKind::ALL {
            profile.set_narrative(kind, "Some statement.");
        }
        profile.programs.push(ProgramDescription {
            program_id: "prog-1".to_string(),
            name: "Watershed cleanup".to_string(),
            summary: "Quarterly volunteer cleanups.".to_string(),
            annual_budget: None,
        });
        profile.board_members.push(BoardMember {
            member_id: "m-1".to_string(),
            name: "Dana Whitfield".to_string(),
            role: "Chair".to_string(),
            email: None,
        });
        profile
    }

    #[test]
    fn empty_profile_has_no_complete_sections() {
        let profile = OrgProfile::empty("org-1");
        for section in FormSection::ALL {
            assert!(!section_complete(&profile, section), "{:?}", section);
        }
        assert_eq!(completion_percent(&profile), 0);
    }

    #[test]
    fn filled_profile_is_fully_complete() {
        let profile = filled_profile();
        assert_eq!(section_completion_flags(&profile), vec![true; 4]);
        assert_eq!(completion_percent(&profile), 100);
    }

    #[test]
    fn whitespace_does_not_count_as_content() {
        let mut profile = filled_profile();
        profile.name = "   ".to_string();
        assert!(!section_complete(&profile, FormSection::Basics));

        profile.set_narrative(NarrativeKind::Needs, "  \n ");
        assert!(!section_complete(&profile, FormSection::Narratives));
    }

    #[test]
    fn programs_need_both_name_and_summary() {
        let mut profile = filled_profile();
        profile.programs[0].summary = String::new();
        assert!(!section_complete(&profile, FormSection::Programs));
        assert_eq!(completion_percent(&profile), 75);
    }

    #[test]
    fn partial_completion_rounds_down() {
        let mut profile = OrgProfile::empty("org-1");
        profile.name = "Open Rivers Trust".to_string();
        assert_eq!(completion_percent(&profile), 25);
    }

    #[test]
    fn upsert_program_replaces_by_id() {
        let mut programs = vec![ProgramDescription {
            program_id: "prog-1".to_string(),
            name: "Old".to_string(),
            summary: String::new(),
            annual_budget: None,
        }];

        upsert_program(
            &mut programs,
            ProgramDescription {
                program_id: "prog-1".to_string(),
                name: "New".to_string(),
                summary: String::new(),
                annual_budget: Some(500),
            },
        );
        assert_eq!(programs.len(), 1);
        assert_eq!(programs[0].name, "New");

        upsert_program(&mut programs, ProgramDescription::new());
        assert_eq!(programs.len(), 2);
    }

    #[test]
    fn remove_program_is_a_noop_for_unknown_ids() {
        let mut programs = vec![ProgramDescription {
            program_id: "prog-1".to_string(),
            name: String::new(),
            summary: String::new(),
            annual_budget: None,
        }];
        remove_program(&mut programs, "prog-2");
        assert_eq!(programs.len(), 1);
        remove_program(&mut programs, "prog-1");
        assert!(programs.is_empty());
    }

    #[test]
    fn budget_parsing_accepts_common_formatting() {
        assert_eq!(parse_budget("12000"), Some(12_000));
        assert_eq!(parse_budget(" $12,000 "), Some(12_000));
        assert_eq!(parse_budget(""), None);
        assert_eq!(parse_budget("   "), None);
        assert_eq!(parse_budget("a lot"), None);
    }
}
