//! Exam setup domain - types and submission validation shared by the screens

pub mod types;
pub mod validate;

pub use types::{
    default_question_configs, Course, CourseList, Difficulty, ExamSelection, ExamType, PaperPlan,
    QuestionConfig, Semester, SlotId,
};
pub use validate::{
    section_total, validate_marks, validate_per_section, SetupError, SECTION_TOTAL,
};
