//! Submission-boundary validation for the setup form
//!
//! The widgets clamp their own input ranges; everything here re-checks the
//! same invariants at submission so an out-of-range value can never reach
//! the generation hand-off.

use thiserror::Error;

use super::types::{QuestionConfig, SECTIONS};

/// Required total of included marks per section.
pub const SECTION_TOTAL: u32 = 15;
/// Bounds on the per-section generation count.
pub const PER_SECTION_MIN: u32 = 1;
pub const PER_SECTION_MAX: u32 = 20;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("Section {section} must have a total of {expected} marks. Current total: {actual}")]
    SectionTotal {
        section: u8,
        expected: u32,
        actual: u32,
    },
    #[error("Questions per section must be between {min} and {max}. Requested: {actual}")]
    PerSectionCount { min: u32, max: u32, actual: u32 },
}

/// Sum of included marks for one section. An optional slot left unchecked
/// contributes nothing.
pub fn section_total(configs: &[QuestionConfig], section: u8) -> u32 {
    configs
        .iter()
        .filter(|q| q.slot.section == section)
        .filter(|q| !q.slot.is_optional() || q.include_c)
        .map(|q| q.marks)
        .sum()
}

/// Require every section to total exactly [`SECTION_TOTAL`] marks, checked
/// in section order; the first failing section aborts.
pub fn validate_marks(configs: &[QuestionConfig]) -> Result<(), SetupError> {
    for &section in &SECTIONS {
        let actual = section_total(configs, section);
        if actual != SECTION_TOTAL {
            return Err(SetupError::SectionTotal {
                section,
                expected: SECTION_TOTAL,
                actual,
            });
        }
    }
    Ok(())
}

/// Bounds check for the per-section generation count.
pub fn validate_per_section(count: u32) -> Result<(), SetupError> {
    if !(PER_SECTION_MIN..=PER_SECTION_MAX).contains(&count) {
        return Err(SetupError::PerSectionCount {
            min: PER_SECTION_MIN,
            max: PER_SECTION_MAX,
            actual: count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::types::default_question_configs;
    use super::*;

    #[test]
    fn default_slots_pass() {
        let configs = default_question_configs();
        for section in SECTIONS {
            assert_eq!(section_total(&configs, section), SECTION_TOTAL);
        }
        assert_eq!(validate_marks(&configs), Ok(()));
    }

    #[test]
    fn excluding_1c_blocks_with_section_and_total() {
        let mut configs = default_question_configs();
        let c1 = configs
            .iter_mut()
            .find(|q| q.slot.to_string() == "1c")
            .unwrap();
        c1.include_c = false;

        assert_eq!(section_total(&configs, 1), 10);

        let err = validate_marks(&configs).unwrap_err();
        assert_eq!(
            err,
            SetupError::SectionTotal {
                section: 1,
                expected: 15,
                actual: 10,
            }
        );

        let message = err.to_string();
        assert!(message.contains("Section 1"));
        assert!(message.contains("10"));
    }

    #[test]
    fn excluded_marks_do_not_count_even_when_raised() {
        let mut configs = default_question_configs();
        for q in configs.iter_mut().filter(|q| q.slot.section == 2) {
            if q.slot.is_optional() {
                q.include_c = false;
                q.marks = 15;
            }
        }
        // 5 + 5 included, the excluded c slot's 15 ignored
        assert_eq!(section_total(&configs, 2), 10);
        assert!(validate_marks(&configs).is_err());
    }

    #[test]
    fn uneven_marks_still_pass_when_totals_match() {
        let mut configs = default_question_configs();
        for q in configs.iter_mut().filter(|q| q.slot.section == 3) {
            q.marks = match q.slot.to_string().as_str() {
                "3a" => 7,
                "3b" => 5,
                "3c" => 3,
                _ => unreachable!(),
            };
        }
        assert_eq!(validate_marks(&configs), Ok(()));
    }

    #[test]
    fn first_failing_section_is_reported() {
        let mut configs = default_question_configs();
        for q in configs.iter_mut() {
            if q.slot.is_optional() {
                q.include_c = false;
            }
        }
        // All three sections fail; section 1 is cited.
        match validate_marks(&configs) {
            Err(SetupError::SectionTotal { section, .. }) => assert_eq!(section, 1),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn per_section_bounds_enforced_at_submission() {
        assert!(validate_per_section(0).is_err());
        assert!(validate_per_section(21).is_err());
        for n in PER_SECTION_MIN..=PER_SECTION_MAX {
            assert_eq!(validate_per_section(n), Ok(()));
        }

        let err = validate_per_section(0).unwrap_err();
        assert_eq!(
            err,
            SetupError::PerSectionCount {
                min: 1,
                max: 20,
                actual: 0,
            }
        );
    }
}
