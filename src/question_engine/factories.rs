//! Reusable question generators.
//!
//! Most of the bank is built from a few shapes of question:
//!
//! - [`MapQuestion`]: a one-to-one association (capital ↔ country, word ↔
//!   translation, date ↔ event) asked in either direction, with the other
//!   entries used as distractors.
//! - [`translation_question`], [`definition_question`], [`date_question`]:
//!   `MapQuestion` with the wording already filled in.
//! - [`MistakeQuestion`]: "how many mistakes are in this sentence?", with
//!   neighbouring counts as distractors.
//!
//! Templates mark the substituted parts with `%KEY` and `%VALUE`; every
//! occurrence is replaced literally.

use rand::{Rng, RngCore};

use crate::question_engine::{
    models::{QuestionGenerator, QuestionInstance},
    random::{random_int, shuffled_indices},
};

/// Most distractors a mapping question offers.
pub const MAX_DISTRACTORS: usize = 3;

/// Size of the window of counts offered by a mistake question.
pub const MISTAKE_ANSWER_COUNT: i64 = 4;

/// Insertion-ordered `(key, value)` pairs. Keys are unique, values are unique.
pub type PairedMapping = &'static [(&'static str, &'static str)];

const KEY_MARKER: &str = "%KEY";
const VALUE_MARKER: &str = "%VALUE";

struct CourseTemplate {
    intro: String,
    line: String,
}

/// Question built from a [`PairedMapping`].
pub struct MapQuestion {
    entries: PairedMapping,
    key_to_value: String,
    value_to_key: String,
    course: Option<CourseTemplate>,
}

impl MapQuestion {
    /// `key_to_value` must contain `%KEY`, `value_to_key` must contain
    /// `%VALUE`. Panics on a mapping with fewer than two entries.
    pub fn new(
        entries: PairedMapping,
        key_to_value: impl Into<String>,
        value_to_key: impl Into<String>,
    ) -> Self {
        assert!(entries.len() >= 2, "a mapping question needs at least 2 entries");
        MapQuestion {
            entries,
            key_to_value: key_to_value.into(),
            value_to_key: value_to_key.into(),
            course: None,
        }
    }

    /// Attach a course: `intro` followed by `line` rendered for every entry.
    pub fn with_course(mut self, intro: impl Into<String>, line: impl Into<String>) -> Self {
        self.course = Some(CourseTemplate { intro: intro.into(), line: line.into() });
        self
    }

    /// Number of distractors every generated question carries.
    pub fn distractor_count(&self) -> usize {
        self.entries.len().min(MAX_DISTRACTORS + 1) - 1
    }

    fn course_lines(&self) -> Option<Vec<String>> {
        let template = self.course.as_ref()?;
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push(template.intro.clone());
        for (key, value) in self.entries {
            lines.push(template.line.replace(KEY_MARKER, key).replace(VALUE_MARKER, value));
        }
        Some(lines)
    }
}

impl QuestionGenerator for MapQuestion {
    fn generate(&self, rng: &mut dyn RngCore) -> QuestionInstance {
        let indices = shuffled_indices(rng, self.entries.len());
        let course = self.course_lines();
        let ask_value = rng.gen_bool(0.5);

        // Indices are consumed from the back: first the asked entry, then the
        // distractors.
        let mut order = indices.iter().rev().map(|&i| self.entries[i]);
        let Some((key, value)) = order.next() else {
            unreachable!("mappings hold at least 2 entries");
        };
        let others = order.take(self.distractor_count());

        let question = if ask_value {
            QuestionInstance::new(
                self.key_to_value.replace(KEY_MARKER, key),
                value,
                others.map(|(_, v)| v.to_string()).collect(),
            )
        } else {
            QuestionInstance::new(
                self.value_to_key.replace(VALUE_MARKER, value),
                key,
                others.map(|(k, _)| k.to_string()).collect(),
            )
        };
        QuestionInstance { course, ..question }
    }
}

/// Vocabulary question between French (keys) and `language` (values).
pub fn translation_question(entries: PairedMapping, language: &str) -> MapQuestion {
    MapQuestion::new(
        entries,
        format!("Comment dit-on \"%KEY\" en {language} ?"),
        format!("Que signifie \"%VALUE\" en {language} ?"),
    )
    .with_course(
        format!("Un peu de vocabulaire {language}..."),
        "\"%KEY\" se dit \"%VALUE\"",
    )
}

/// Term (keys) to definition (values).
pub fn definition_question(entries: PairedMapping) -> MapQuestion {
    MapQuestion::new(
        entries,
        "Comment définir le terme « %KEY » ?",
        "À quoi correspond la définition « %VALUE » ?",
    )
    .with_course("Quelques définitions...", "%KEY : %VALUE")
}

/// Date (keys) to historical event (values).
pub fn date_question(entries: PairedMapping) -> MapQuestion {
    MapQuestion::new(
        entries,
        "Que s'est-il passé %KEY ?",
        "Quand a eu lieu %VALUE ?",
    )
    .with_course("Quelques dates historiques...", "%KEY : %VALUE")
}

/// "How many mistakes are in this text?"
pub struct MistakeQuestion {
    text: &'static str,
    mistake_count: i64,
}

/// `"1 erreur"`, `"2 erreurs"`, ...
pub fn mistake_answer(count: i64) -> String {
    format!("{count} erreur{}", if count >= 2 { "s" } else { "" })
}

pub fn mistake_question(text: &'static str, mistake_count: u32) -> MistakeQuestion {
    MistakeQuestion { text, mistake_count: i64::from(mistake_count) }
}

impl QuestionGenerator for MistakeQuestion {
    fn generate(&self, rng: &mut dyn RngCore) -> QuestionInstance {
        let n = self.mistake_count;
        // The window [low, low + 4) always contains n.
        let low = random_int(rng, n - MISTAKE_ANSWER_COUNT + 1, n + 1).max(0);
        let wrong = (low..low + MISTAKE_ANSWER_COUNT)
            .filter(|&c| c != n)
            .map(mistake_answer)
            .collect();
        QuestionInstance::new(
            format!("Combien d'erreurs comporte le texte suivant : « {} » ?", self.text),
            mistake_answer(n),
            wrong,
        )
    }
}
