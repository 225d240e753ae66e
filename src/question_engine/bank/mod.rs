//! The question bank: five curriculum levels, each mapping subject fields to
//! an ordered list of generators.
//!
//! | Index | Level      | Module       |
//! |-------|------------|--------------|
//! | 0     | Primaire   | `primaire`   |
//! | 1     | 6e         | `sixieme`    |
//! | 2     | 5e         | `cinquieme`  |
//! | 3     | 4e         | `quatrieme`  |
//! | 4     | 3e et plus | `troisieme`  |
//!
//! Field order inside a level is significant: the selection engine walks the
//! fields in that order when it maps a flat index to a generator.

use log::trace;
use once_cell::sync::Lazy;

use crate::question_engine::models::{QuestionGenerator, Subject};

mod cinquieme;
mod primaire;
mod quatrieme;
mod sixieme;
mod troisieme;

/// Display names of the levels, easiest first.
pub const LEVEL_NAMES: [&str; 5] = ["Primaire", "6e", "5e", "4e", "3e"];

static GLOBAL_BANK: Lazy<QuestionBank> = Lazy::new(QuestionBank::build);

/// Box a generator for storage in a [`Field`].
pub(crate) fn boxed<G: QuestionGenerator + 'static>(generator: G) -> Box<dyn QuestionGenerator> {
    Box::new(generator)
}

/// All the generators of one subject at one level.
pub struct Field {
    subject: Subject,
    generators: Vec<Box<dyn QuestionGenerator>>,
}

impl Field {
    pub fn new(subject: Subject, generators: Vec<Box<dyn QuestionGenerator>>) -> Self {
        Field { subject, generators }
    }

    pub fn subject(&self) -> Subject {
        self.subject
    }

    pub fn name(&self) -> &'static str {
        self.subject.name()
    }

    pub fn generators(&self) -> &[Box<dyn QuestionGenerator>] {
        &self.generators
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

/// One difficulty level.
pub struct Level {
    name: &'static str,
    fields: Vec<Field>,
}

impl Level {
    pub fn new(name: &'static str, fields: Vec<Field>) -> Self {
        Level { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Number of generators across all fields of this level.
    pub fn question_count(&self) -> usize {
        self.fields.iter().map(Field::len).sum()
    }
}

/// Immutable collection of every question of the game.
pub struct QuestionBank {
    levels: Vec<Level>,
}

impl QuestionBank {
    /// Build the full bank. Cheap enough to call in tests; the game uses
    /// [`QuestionBank::global`].
    pub fn build() -> Self {
        let bank = QuestionBank::from_levels(vec![
            primaire::level(),
            sixieme::level(),
            cinquieme::level(),
            quatrieme::level(),
            troisieme::level(),
        ]);
        for level in bank.levels() {
            trace!("level {}: {} generators", level.name(), level.question_count());
        }
        bank
    }

    /// Bank made of arbitrary levels.
    pub fn from_levels(levels: Vec<Level>) -> Self {
        QuestionBank { levels }
    }

    /// Process-wide bank, built on first use.
    pub fn global() -> &'static QuestionBank {
        &GLOBAL_BANK
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Generators of one level, zero past the last level.
    pub fn question_count(&self, level: usize) -> usize {
        self.level(level).map_or(0, Level::question_count)
    }

    /// Generators of `field` over levels `[0, max_level)`, clamped to the
    /// levels that exist. Unknown fields count zero.
    pub fn field_question_count(&self, max_level: usize, field: &str) -> usize {
        self.levels
            .iter()
            .take(max_level)
            .filter_map(|level| level.field(field))
            .map(Field::len)
            .sum()
    }
}
