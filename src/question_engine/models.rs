use std::fmt;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::question_engine::random::random_int;

// ---------------------------------------------------------------------------
// Subject fields
// ---------------------------------------------------------------------------

/// School subject a question belongs to.
///
/// The names are the field keys the game uses when it asks for a course
/// (`"svt"` for the apothecary, `"maths"` for the dump tool, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Chimie,
    Francais,
    Geographie,
    Histoire,
    Langues,
    Maths,
    Physique,
    Svt,
}

impl Subject {
    pub const ALL: [Subject; 8] = [
        Subject::Chimie,
        Subject::Francais,
        Subject::Geographie,
        Subject::Histoire,
        Subject::Langues,
        Subject::Maths,
        Subject::Physique,
        Subject::Svt,
    ];

    /// Field name as used by the game scripts.
    pub fn name(self) -> &'static str {
        match self {
            Subject::Chimie     => "chimie",
            Subject::Francais   => "français",
            Subject::Geographie => "géographie",
            Subject::Histoire   => "histoire",
            Subject::Langues    => "langues",
            Subject::Maths      => "maths",
            Subject::Physique   => "physique",
            Subject::Svt        => "svt",
        }
    }

    /// Look a subject up by its field name. Unknown names give `None`.
    pub fn from_name(name: &str) -> Option<Subject> {
        Subject::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ---------------------------------------------------------------------------
// Generated questions
// ---------------------------------------------------------------------------

/// One question produced by a generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionInstance {
    pub statement: String,
    /// Canonical correct answer, always as text.
    pub correct: String,
    /// Distractors. Never contains `correct`, never contains duplicates.
    pub wrong: Vec<String>,
    /// Short lesson attached to the question, if any.
    pub course: Option<Vec<String>>,
}

impl QuestionInstance {
    pub fn new(
        statement: impl Into<String>,
        correct: impl Into<String>,
        wrong: Vec<String>,
    ) -> Self {
        QuestionInstance {
            statement: statement.into(),
            correct: correct.into(),
            wrong,
            course: None,
        }
    }

    pub fn with_course<S: Into<String>>(mut self, lines: impl IntoIterator<Item = S>) -> Self {
        self.course = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    /// Course lines, treating an empty course like a missing one.
    pub fn course_lines(&self) -> Option<&[String]> {
        self.course.as_deref().filter(|lines| !lines.is_empty())
    }
}

/// Something that produces a fresh (possibly randomised) question each time
/// it is invoked.
///
/// Invoking a generator twice gives two independent draws: callers that
/// present one question must invoke once and keep the result.
pub trait QuestionGenerator: Send + Sync {
    fn generate(&self, rng: &mut dyn RngCore) -> QuestionInstance;
}

impl<F> QuestionGenerator for F
where
    F: Fn(&mut dyn RngCore) -> QuestionInstance + Send + Sync,
{
    fn generate(&self, rng: &mut dyn RngCore) -> QuestionInstance {
        self(rng)
    }
}

// ---------------------------------------------------------------------------
// Selection requests / results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// `true` only for the correct answer.
    pub value: bool,
    pub text: String,
}

/// A question ready to be shown in a choice dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub statement: String,
    pub options: Vec<AnswerOption>,
    /// Damage dealt to the sphinx by a correct answer: question level + 1.
    pub damage: u32,
}

impl QuestionResult {
    /// Whether the option at `index` is the correct one. Out-of-range
    /// indices count as wrong answers.
    pub fn is_correct(&self, index: usize) -> bool {
        self.options.get(index).is_some_and(|o| o.value)
    }

    pub fn correct_text(&self) -> Option<&str> {
        self.options.iter().find(|o| o.value).map(|o| o.text.as_str())
    }

    /// Remove one random wrong option (the magic eraser bonus item).
    ///
    /// A random index is drawn; when it lands on the correct answer the next
    /// option is removed instead. Returns the removed option, or `None` when
    /// no wrong option is left.
    pub fn erase_wrong_option<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<AnswerOption> {
        if self.options.iter().all(|o| o.value) {
            return None;
        }
        let len = self.options.len();
        let mut index = random_int(rng, 0, len as i64) as usize;
        if self.options[index].value {
            index = (index + 1) % len;
        }
        Some(self.options.remove(index))
    }
}

/// Request for one question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    /// Exclusive upper bound on the question level (the player level, 1..=5).
    pub max_level: usize,
    /// Seed for a reproducible draw; `None` uses entropy.
    pub rng_seed: Option<u64>,
}

impl QuestionRequest {
    pub fn new(max_level: usize) -> Self {
        QuestionRequest { max_level, rng_seed: None }
    }
}

/// Request for a course in one field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRequest {
    pub max_level: usize,
    pub field: String,
    pub rng_seed: Option<u64>,
}

impl CourseRequest {
    pub fn new(max_level: usize, field: impl Into<String>) -> Self {
        CourseRequest { max_level, field: field.into(), rng_seed: None }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("level bound {max_level} is outside 1..={level_count}")]
    InvalidLevelBound { max_level: usize, level_count: usize },
    #[error("level {level} has no question")]
    EmptyLevel { level: usize },
}
