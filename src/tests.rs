//! Crate-level tests for `school_quiz_gen`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Whole bank | Every generator: non-empty statement, correct answer never among the distractors, distractors pairwise distinct, courses never empty |
//! | Options | Exactly one `true` option; option texts are the correct answer plus the distractors |
//! | Level bound | Damage within `1..=max_level`; invalid bounds rejected |
//! | Determinism | Same seed → identical question and course |
//! | Encounters | Sphinx eraser, hermit series, apothecary course lookups |
//! | JSON | Payloads built from real draws |

use std::collections::HashSet;

use rand::{rngs::StdRng, RngCore, SeedableRng};

use crate::{
    course_to_json, generate_course, generate_question, pick_random_course, pick_random_question,
    question_engine::factories::mistake_question, question_to_json, CourseRequest, Field, Level,
    QuestionBank, QuestionGenerator, QuestionInstance, QuestionRequest, QuizError, Subject,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Seeds spanning different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

/// Invoke every generator of the bank `draws` times, labelled with its
/// position.
fn every_draw(draws: u64) -> Vec<(String, QuestionInstance)> {
    let bank = QuestionBank::build();
    let mut out = Vec::new();
    for seed in 0..draws {
        let mut rng = StdRng::seed_from_u64(seed);
        for level in bank.levels() {
            for field in level.fields() {
                for (i, generator) in field.generators().iter().enumerate() {
                    let label = format!("{} / {} #{i}", level.name(), field.name());
                    out.push((label, generator.generate(&mut rng)));
                }
            }
        }
    }
    out
}

// ── whole bank ───────────────────────────────────────────────────────────────

#[test]
fn every_generator_keeps_its_answers_unique() {
    for (label, q) in every_draw(40) {
        assert!(!q.statement.trim().is_empty(), "{label}: empty statement");
        assert!(!q.correct.is_empty(), "{label}: empty correct answer");
        assert!(!q.wrong.is_empty(), "{label}: no distractor");
        assert!(!q.wrong.contains(&q.correct), "{label}: correct among wrong in {q:?}");
        let distinct: HashSet<&String> = q.wrong.iter().collect();
        assert_eq!(distinct.len(), q.wrong.len(), "{label}: duplicate distractor in {q:?}");
    }
}

#[test]
fn courses_are_never_empty_lists() {
    for (label, q) in every_draw(10) {
        if let Some(course) = &q.course {
            assert!(!course.is_empty(), "{label}: empty course");
            assert!(course.iter().all(|l| !l.is_empty()), "{label}: blank course line");
        }
    }
}

#[test]
fn templates_leave_no_marker_behind() {
    for (label, q) in every_draw(5) {
        let texts = std::iter::once(&q.statement)
            .chain(std::iter::once(&q.correct))
            .chain(q.wrong.iter())
            .chain(q.course.iter().flatten());
        for text in texts {
            assert!(!text.contains("%KEY") && !text.contains("%VALUE"), "{label}: {text}");
        }
    }
}

#[test]
fn every_field_of_every_level_is_a_known_subject() {
    for level in QuestionBank::global().levels() {
        for field in level.fields() {
            assert_eq!(Subject::from_name(field.name()), Some(field.subject()));
        }
    }
}

// ── options ──────────────────────────────────────────────────────────────────

#[test]
fn options_hold_one_correct_answer_and_distinct_texts() {
    let bank = QuestionBank::global();
    for seed in 0..300 {
        let q = bank.pick_question(&mut StdRng::seed_from_u64(seed), 5).unwrap();
        let correct: Vec<_> = q.options.iter().filter(|o| o.value).collect();
        assert_eq!(correct.len(), 1, "{}", q.statement);
        assert_eq!(q.correct_text(), Some(correct[0].text.as_str()));

        let texts: HashSet<&str> = q.options.iter().map(|o| o.text.as_str()).collect();
        assert_eq!(texts.len(), q.options.len(), "{}: repeated option", q.statement);
    }
}

#[test]
fn options_carry_the_generated_answers_unchanged() {
    fn capital(_rng: &mut dyn RngCore) -> QuestionInstance {
        QuestionInstance::new(
            "Quelle est la capitale de l'Italie ?",
            "Rome",
            vec!["Milan".to_string(), "Naples".to_string(), "Turin".to_string()],
        )
    }
    let generators: Vec<Box<dyn QuestionGenerator>> = vec![Box::new(capital)];
    let bank = QuestionBank::from_levels(vec![Level::new(
        "Primaire",
        vec![Field::new(Subject::Geographie, generators)],
    )]);

    for seed in SEEDS {
        let q = bank.pick_question(&mut StdRng::seed_from_u64(seed), 1).unwrap();
        let correct: Vec<&str> = q.options.iter().filter(|o| o.value).map(|o| o.text.as_str()).collect();
        assert_eq!(correct, ["Rome"], "seed {seed}");
        let mut texts: Vec<&str> = q.options.iter().map(|o| o.text.as_str()).collect();
        texts.sort_unstable();
        assert_eq!(texts, ["Milan", "Naples", "Rome", "Turin"], "seed {seed}");
    }
}

#[test]
fn is_correct_agrees_with_option_values() {
    let q = generate_question(QuestionRequest { max_level: 5, rng_seed: Some(5) }).unwrap();
    for (i, option) in q.options.iter().enumerate() {
        assert_eq!(q.is_correct(i), option.value);
    }
    assert!(!q.is_correct(q.options.len()));
}

// ── level bound ──────────────────────────────────────────────────────────────

#[test]
fn damage_never_exceeds_the_player_level() {
    for max_level in 1..=5 {
        for _ in 0..30 {
            let q = pick_random_question(max_level).unwrap();
            assert!(q.damage >= 1 && q.damage as usize <= max_level);
        }
    }
}

#[test]
fn first_level_player_gets_primaire_questions() {
    for _ in 0..20 {
        assert_eq!(pick_random_question(1).unwrap().damage, 1);
    }
}

#[test]
fn invalid_level_bounds_are_errors() {
    assert_eq!(
        pick_random_question(0),
        Err(QuizError::InvalidLevelBound { max_level: 0, level_count: 5 })
    );
    assert_eq!(
        pick_random_question(6),
        Err(QuizError::InvalidLevelBound { max_level: 6, level_count: 5 })
    );
    assert_eq!(
        QuizError::InvalidLevelBound { max_level: 6, level_count: 5 }.to_string(),
        "level bound 6 is outside 1..=5"
    );
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_question() {
    for seed in SEEDS {
        let a = generate_question(QuestionRequest { max_level: 5, rng_seed: Some(seed) });
        let b = generate_question(QuestionRequest { max_level: 5, rng_seed: Some(seed) });
        assert_eq!(a, b, "seed {seed}");
    }
}

#[test]
fn different_seeds_produce_varied_questions() {
    let statements: HashSet<String> = (0..20)
        .map(|seed| {
            generate_question(QuestionRequest { max_level: 5, rng_seed: Some(seed) })
                .unwrap()
                .statement
        })
        .collect();
    assert!(statements.len() > 1);
}

#[test]
fn same_seed_produces_identical_course() {
    for seed in SEEDS {
        let request = CourseRequest { max_level: 5, field: "maths".to_string(), rng_seed: Some(seed) };
        assert_eq!(generate_course(request.clone()), generate_course(request));
    }
}

#[test]
fn entropy_request_produces_a_valid_question() {
    let q = generate_question(QuestionRequest::new(5)).unwrap();
    assert!(!q.statement.is_empty());
    assert!(q.options.len() >= 2);
}

// ── encounters ───────────────────────────────────────────────────────────────

#[test]
fn eraser_removes_only_wrong_options() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut q = QuestionBank::global().pick_question(&mut rng, 5).unwrap();
        let correct = q.correct_text().map(str::to_string);
        while let Some(removed) = q.erase_wrong_option(&mut rng) {
            assert!(!removed.value);
        }
        assert_eq!(q.options.len(), 1);
        assert_eq!(q.correct_text().map(str::to_string), correct);
    }
}

#[test]
fn hermit_series_of_ten_primaire_questions() {
    let mut rng = StdRng::seed_from_u64(10);
    let total_damage: u32 = (0..10)
        .map(|_| QuestionBank::global().pick_question(&mut rng, 1).unwrap().damage)
        .sum();
    assert_eq!(total_damage, 10);
}

#[test]
fn apothecary_finds_svt_courses_at_every_level() {
    // Every svt question carries a course.
    for max_level in 1..=5 {
        for seed in SEEDS {
            let request = CourseRequest { max_level, field: "svt".to_string(), rng_seed: Some(seed) };
            let lines = generate_course(request).unwrap_or_default();
            assert!(lines.len() >= 2, "svt below level {max_level}, seed {seed}");
        }
        assert!(pick_random_course(max_level, "svt").is_some());
    }
    assert_eq!(pick_random_course(1, "nonexistent-field"), None);
}

#[test]
fn mistake_question_never_lists_its_answer_as_wrong() {
    let q = mistake_question("Danses avec ton ami avant qu'elle ne parte.", 2);
    for seed in 0..100 {
        let draw = q.generate(&mut StdRng::seed_from_u64(seed));
        assert_eq!(draw.correct, "2 erreurs");
        assert!(!draw.wrong.contains(&draw.correct));
    }
}

// ── JSON ─────────────────────────────────────────────────────────────────────

#[test]
fn json_payloads_from_real_draws() {
    let q = generate_question(QuestionRequest { max_level: 3, rng_seed: Some(3) }).unwrap();
    let v = question_to_json(&q);
    assert_eq!(v["statement"], q.statement.as_str());
    assert_eq!(v["options"].as_array().map(Vec::len), Some(q.options.len()));
    assert_eq!(v["damage"], q.damage);

    let course = generate_course(CourseRequest::new(1, "nonexistent-field"));
    assert_eq!(course_to_json(course.as_deref())["lines"], serde_json::Value::Null);
}
