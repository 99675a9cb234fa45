//! Exam domain types: exam kinds, semesters, catalog courses, question slots

use serde::Deserialize;
use std::fmt;

/// Kind of paper being configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExamType {
    Cie,
    See,
}

impl ExamType {
    pub const ALL: [ExamType; 2] = [ExamType::Cie, ExamType::See];

    pub fn short(&self) -> &'static str {
        match self {
            ExamType::Cie => "CIE",
            ExamType::See => "SEE",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            ExamType::Cie => "Continuous Internal Evaluation (CIE)",
            ExamType::See => "Semester End Examination (SEE)",
        }
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short())
    }
}

/// Semester 1..=8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "u8")]
pub struct Semester(u8);

impl Semester {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    pub fn new(n: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&n).then_some(Self(n))
    }

    pub fn all() -> impl Iterator<Item = Semester> {
        (Self::MIN..=Self::MAX).map(Semester)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Semester {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Semester::new(n).ok_or_else(|| format!("semester out of range: {n}"))
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog course. The upstream service emits `_id`; plain `id` is also
/// accepted.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Course {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub code: String,
}

/// Catalog listing payload: `{ "data": [Course] }`.
#[derive(Clone, Debug, Deserialize)]
pub struct CourseList {
    pub data: Vec<Course>,
}

/// The three choices carried from the selection screen into a setup screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamSelection {
    pub exam_type: ExamType,
    pub semester: Semester,
    /// Course code of the selected catalog entry.
    pub course: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Question sections; each must total [`crate::exam::SECTION_TOTAL`] marks.
pub const SECTIONS: [u8; 3] = [1, 2, 3];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    A,
    B,
    C,
}

impl Part {
    pub const ALL: [Part; 3] = [Part::A, Part::B, Part::C];

    fn letter(&self) -> char {
        match self {
            Part::A => 'a',
            Part::B => 'b',
            Part::C => 'c',
        }
    }
}

/// One of the nine question slots 1a..3c.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotId {
    /// Section 1..=3.
    pub section: u8,
    pub part: Part,
}

impl SlotId {
    /// Part c is the optional sub-question toggled per slot.
    pub fn is_optional(&self) -> bool {
        self.part == Part::C
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.section, self.part.letter())
    }
}

/// Per-slot configuration edited on the CIE setup screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionConfig {
    pub slot: SlotId,
    pub level: Difficulty,
    pub marks: u32,
    /// Whether an optional "c" slot counts toward its section and the
    /// generation set; ignored on a/b slots.
    pub include_c: bool,
}

pub const DEFAULT_MARKS: u32 = 5;
/// Widget bounds for a single slot's marks.
pub const MARKS_MIN: u32 = 1;
pub const MARKS_MAX: u32 = 15;
/// Default per-section generation count.
pub const DEFAULT_PER_SECTION: u32 = 5;

/// The nine slots with their CIE defaults: a/b medium and mandatory, c hard
/// and included.
pub fn default_question_configs() -> Vec<QuestionConfig> {
    let mut configs = Vec::with_capacity(SECTIONS.len() * Part::ALL.len());
    for &section in &SECTIONS {
        for part in Part::ALL {
            let slot = SlotId { section, part };
            let optional = slot.is_optional();
            configs.push(QuestionConfig {
                slot,
                level: if optional {
                    Difficulty::Hard
                } else {
                    Difficulty::Medium
                },
                marks: DEFAULT_MARKS,
                include_c: optional,
            });
        }
    }
    configs
}

/// Everything the generation screen needs: the carried selection, the nine
/// slots and the per-section generation count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaperPlan {
    pub exam: ExamSelection,
    pub questions: Vec<QuestionConfig>,
    pub per_section: u32,
}
