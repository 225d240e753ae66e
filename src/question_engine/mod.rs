//! Core question engine: random utilities, question factories, the question
//! bank and the selection entry points.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: question instances, answer options, requests, errors |
//! | `random`    | Integer sampling and Fisher-Yates shuffling over an explicit RNG |
//! | `helpers`   | GCD/LCM, yes/no wording, exact number formatting, distractor filtering |
//! | `factories` | Reusable generators: paired mappings, translations, definitions, dates, mistake counts |
//! | `bank`      | The five curriculum levels and their per-field generators |
//! | `selection` | `pick_random_question()` / `pick_random_course()`: the public query surface |

pub mod bank;
pub mod factories;
pub mod helpers;
pub mod models;
pub mod random;
pub mod selection;

// Re-export the public API surface so callers can use
// `question_engine::pick_random_question` without reaching into sub-modules.
pub use bank::{Field, Level, QuestionBank, LEVEL_NAMES};
pub use models::{
    AnswerOption, CourseRequest, QuestionGenerator, QuestionInstance, QuestionRequest,
    QuestionResult, QuizError, Subject,
};
pub use selection::{
    generate_course, generate_question, pick_random_course, pick_random_question,
    COURSE_ATTEMPTS,
};
