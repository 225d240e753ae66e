//! Public query surface: pick a question for a player level, or a course in
//! a field.
//!
//! Both entry points invoke exactly one generator per draw. Generators are
//! random, so invoking one twice would yield two unrelated questions.

use log::{debug, warn};
use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};

use crate::question_engine::{
    bank::{Field, QuestionBank},
    models::{
        AnswerOption, CourseRequest, QuestionGenerator, QuestionRequest, QuestionResult, QuizError,
    },
    random::{random_int, shuffle},
};

/// Maximum generator invocations for one course lookup.
pub const COURSE_ATTEMPTS: usize = 5;

/// Map a flat index over the concatenated generator lists of `fields` to the
/// generator it designates.
fn locate<'a>(
    fields: impl IntoIterator<Item = &'a Field>,
    mut index: usize,
) -> Option<(&'a Field, &'a dyn QuestionGenerator)> {
    for field in fields {
        if index < field.len() {
            return Some((field, field.generators()[index].as_ref()));
        }
        index -= field.len();
    }
    None
}

impl QuestionBank {
    /// Draw one question of a level strictly below `max_level`.
    ///
    /// The level is uniform, then the generator is uniform over the whole
    /// level, so fields with more generators come up more often.
    pub fn pick_question<R: Rng>(
        &self,
        rng: &mut R,
        max_level: usize,
    ) -> Result<QuestionResult, QuizError> {
        let level_count = self.level_count();
        if max_level == 0 || max_level > level_count {
            return Err(QuizError::InvalidLevelBound { max_level, level_count });
        }

        let level_index = random_int(rng, 0, max_level as i64) as usize;
        let level = &self.levels()[level_index];
        let total = level.question_count();
        if total == 0 {
            return Err(QuizError::EmptyLevel { level: level_index });
        }
        let index = random_int(rng, 0, total as i64) as usize;
        let (field, generator) =
            locate(level.fields(), index).ok_or(QuizError::EmptyLevel { level: level_index })?;
        debug!(
            "question: level {} ({}), field {}, index {index}/{total}",
            level_index,
            level.name(),
            field.name()
        );

        let question = generator.generate(rng);
        let mut options = Vec::with_capacity(question.wrong.len() + 1);
        options.push(AnswerOption { value: true, text: question.correct });
        options.extend(
            question
                .wrong
                .into_iter()
                .map(|text| AnswerOption { value: false, text }),
        );
        shuffle(rng, &mut options);

        Ok(QuestionResult {
            statement: question.statement,
            options,
            damage: level_index as u32 + 1,
        })
    }

    /// Look for course lines in `field` over the levels below `max_level`.
    ///
    /// `max_level` is clamped to the existing levels. Each attempt invokes a
    /// single generator; after [`COURSE_ATTEMPTS`] attempts without a course
    /// the lookup gives up.
    pub fn pick_course<R: Rng>(
        &self,
        rng: &mut R,
        max_level: usize,
        field: &str,
    ) -> Option<Vec<String>> {
        let total = self.field_question_count(max_level, field);
        if total == 0 {
            debug!("course: no generator for field {field:?} below level {max_level}");
            return None;
        }
        let fields: Vec<&Field> = self
            .levels()
            .iter()
            .take(max_level)
            .filter_map(|level| level.field(field))
            .collect();

        for attempt in 1..=COURSE_ATTEMPTS {
            let index = random_int(rng, 0, total as i64) as usize;
            let (_, generator) = locate(fields.iter().copied(), index)?;
            let question = generator.generate(rng);
            if let Some(lines) = question.course_lines() {
                debug!("course: field {field:?} found at attempt {attempt} (index {index}/{total})");
                return Some(lines.to_vec());
            }
            debug!("course: field {field:?} attempt {attempt} (index {index}/{total}) has no course");
        }

        warn!("course: no course found in field {field:?} after {COURSE_ATTEMPTS} attempts");
        None
    }
}

/// Question for a player of level `max_level`, from the global bank.
pub fn pick_random_question(max_level: usize) -> Result<QuestionResult, QuizError> {
    QuestionBank::global().pick_question(&mut thread_rng(), max_level)
}

/// Course lines in `field` for a player of level `max_level`, from the
/// global bank.
pub fn pick_random_course(max_level: usize, field: &str) -> Option<Vec<String>> {
    QuestionBank::global().pick_course(&mut thread_rng(), max_level, field)
}

fn request_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Request-based variant of [`pick_random_question`]; a seed makes the draw
/// reproducible.
pub fn generate_question(request: QuestionRequest) -> Result<QuestionResult, QuizError> {
    let mut rng = request_rng(request.rng_seed);
    QuestionBank::global().pick_question(&mut rng, request.max_level)
}

/// Request-based variant of [`pick_random_course`].
pub fn generate_course(request: CourseRequest) -> Option<Vec<String>> {
    let mut rng = request_rng(request.rng_seed);
    QuestionBank::global().pick_course(&mut rng, request.max_level, &request.field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_engine::{
        bank::Level,
        models::{QuestionInstance, Subject},
    };
    use rand::RngCore;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    struct Counting {
        calls: Arc<AtomicUsize>,
        course: bool,
    }

    impl QuestionGenerator for Counting {
        fn generate(&self, _rng: &mut dyn RngCore) -> QuestionInstance {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let q = QuestionInstance::new("Q ?", "oui", vec!["non".to_string()]);
            if self.course {
                q.with_course(["leçon"])
            } else {
                q
            }
        }
    }

    fn counting_bank(course: bool) -> (QuestionBank, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let level = |name| {
            Level::new(
                name,
                vec![Field::new(
                    Subject::Maths,
                    vec![
                        Box::new(Counting { calls: calls.clone(), course }) as Box<dyn QuestionGenerator>,
                        Box::new(Counting { calls: calls.clone(), course }),
                    ],
                )],
            )
        };
        (QuestionBank::from_levels(vec![level("A"), level("B")]), calls)
    }

    fn fixed_bank() -> QuestionBank {
        fn two_plus_two(_rng: &mut dyn RngCore) -> QuestionInstance {
            QuestionInstance::new(
                "Combien font 2 + 2 ?",
                "4",
                vec!["3".to_string(), "5".to_string(), "6".to_string()],
            )
        }
        QuestionBank::from_levels(vec![Level::new(
            "A",
            vec![Field::new(Subject::Maths, vec![Box::new(two_plus_two) as Box<dyn QuestionGenerator>])],
        )])
    }

    // ── locate ──────────────────────────────────────────────────────────────

    #[test]
    fn locate_walks_fields_in_order() {
        let bank = QuestionBank::build();
        let fields = bank.levels()[0].fields();
        let first = fields[0].len();
        let (field, _) = locate(fields, 0).unwrap();
        assert_eq!(field.name(), fields[0].name());
        let (field, _) = locate(fields, first - 1).unwrap();
        assert_eq!(field.name(), fields[0].name());
        let (field, _) = locate(fields, first).unwrap();
        assert_eq!(field.name(), fields[1].name());
        assert!(locate(fields, bank.question_count(0)).is_none());
    }

    // ── questions ───────────────────────────────────────────────────────────

    #[test]
    fn question_options_put_exactly_one_correct_answer() {
        let bank = QuestionBank::build();
        for seed in 0..200 {
            let q = bank.pick_question(&mut seeded(seed), 5).unwrap();
            assert_eq!(q.options.iter().filter(|o| o.value).count(), 1, "{}", q.statement);
            assert!(q.options.len() >= 2, "{}", q.statement);
        }
    }

    #[test]
    fn options_are_the_correct_answer_plus_every_distractor() {
        let bank = fixed_bank();
        for seed in 0..50 {
            let q = bank.pick_question(&mut seeded(seed), 1).unwrap();
            assert_eq!(q.statement, "Combien font 2 + 2 ?");
            assert_eq!(q.correct_text(), Some("4"));
            assert_eq!(q.options.iter().filter(|o| o.value).count(), 1);
            let mut texts: Vec<&str> = q.options.iter().map(|o| o.text.as_str()).collect();
            texts.sort_unstable();
            assert_eq!(texts, ["3", "4", "5", "6"]);
        }
    }

    #[test]
    fn options_are_shuffled() {
        let bank = fixed_bank();
        let first_texts: std::collections::HashSet<String> = (0..50)
            .map(|seed| bank.pick_question(&mut seeded(seed), 1).unwrap().options[0].text.clone())
            .collect();
        assert!(first_texts.len() > 1);
    }

    #[test]
    fn damage_stays_below_the_bound() {
        let bank = QuestionBank::build();
        for max_level in 1..=5 {
            for seed in 0..50 {
                let q = bank.pick_question(&mut seeded(seed), max_level).unwrap();
                assert!((1..=max_level as u32).contains(&q.damage));
            }
        }
    }

    #[test]
    fn level_one_questions_deal_one_damage() {
        for seed in 0..20 {
            let q = QuestionBank::global().pick_question(&mut seeded(seed), 1).unwrap();
            assert_eq!(q.damage, 1);
        }
    }

    #[test]
    fn out_of_range_bounds_are_rejected() {
        let bank = QuestionBank::build();
        for max_level in [0, 6, 100] {
            assert_eq!(
                bank.pick_question(&mut seeded(1), max_level),
                Err(QuizError::InvalidLevelBound { max_level, level_count: 5 })
            );
        }
    }

    #[test]
    fn empty_level_is_an_error() {
        let bank = QuestionBank::from_levels(vec![Level::new("vide", vec![])]);
        assert_eq!(bank.pick_question(&mut seeded(1), 1), Err(QuizError::EmptyLevel { level: 0 }));
    }

    #[test]
    fn one_question_invokes_one_generator() {
        let (bank, calls) = counting_bank(false);
        bank.pick_question(&mut seeded(3), 2).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    // ── courses ─────────────────────────────────────────────────────────────

    #[test]
    fn unknown_field_has_no_course() {
        let bank = QuestionBank::build();
        assert_eq!(bank.pick_course(&mut seeded(1), 1, "nonexistent-field"), None);
        assert_eq!(bank.pick_course(&mut seeded(1), 0, "maths"), None);
    }

    #[test]
    fn course_lookup_gives_up_after_the_attempt_budget() {
        let (bank, calls) = counting_bank(false);
        assert_eq!(bank.pick_course(&mut seeded(9), 2, "maths"), None);
        assert_eq!(calls.load(Ordering::SeqCst), COURSE_ATTEMPTS);
    }

    #[test]
    fn course_lookup_stops_at_the_first_course() {
        let (bank, calls) = counting_bank(true);
        assert_eq!(bank.pick_course(&mut seeded(9), 2, "maths"), Some(vec!["leçon".to_string()]));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn course_level_bound_is_clamped() {
        let (bank, _) = counting_bank(true);
        assert!(bank.pick_course(&mut seeded(2), 50, "maths").is_some());
    }

    #[test]
    fn maths_courses_are_found_in_the_real_bank() {
        let bank = QuestionBank::build();
        let found = (0..50)
            .filter_map(|seed| bank.pick_course(&mut seeded(seed), 5, "maths"))
            .count();
        assert!(found > 0);
    }

    // ── requests ────────────────────────────────────────────────────────────

    #[test]
    fn seeded_requests_are_reproducible() {
        let request = QuestionRequest { max_level: 5, rng_seed: Some(77) };
        assert_eq!(generate_question(request.clone()), generate_question(request));

        let request = CourseRequest { max_level: 5, field: "maths".into(), rng_seed: Some(77) };
        assert_eq!(generate_course(request.clone()), generate_course(request));
    }
}
