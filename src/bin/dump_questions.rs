//! Print one draw of every question of the bank as Markdown, then exercise
//! the public API once.
//!
//! Run with: `cargo run --bin dump_questions [seed]`
//!
//! Set `RUST_LOG=debug` to see the selection engine's sampling.

use std::error::Error;

use rand::{rngs::StdRng, SeedableRng};
use school_quiz_gen::{
    course_to_json, generate_course, generate_question, question_to_json, CourseRequest,
    QuestionBank, QuestionGenerator, QuestionInstance, QuestionRequest,
};

fn print_question(question: &QuestionInstance) {
    println!("{}", question.statement);
    println!("  * {} ✓", question.correct);
    for wrong in &question.wrong {
        println!("  * {wrong}");
    }
    if let Some(lines) = question.course_lines() {
        println!("  Cours :");
        for line in lines {
            println!("    {line}");
        }
    }
    println!();
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let seed = std::env::args().nth(1).map(|arg| arg.parse::<u64>()).transpose()?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let bank = QuestionBank::global();
    for level in bank.levels() {
        println!("# Niveau {}", level.name());
        println!();
        for field in level.fields() {
            println!("## {}", field.name());
            println!();
            for generator in field.generators() {
                print_question(&generator.generate(&mut rng));
            }
        }
    }

    println!("# Test de l'API");
    println!();
    let question = generate_question(QuestionRequest { max_level: 5, rng_seed: seed })?;
    println!("{}", serde_json::to_string_pretty(&question_to_json(&question))?);
    let course = generate_course(CourseRequest { max_level: 5, field: "maths".to_string(), rng_seed: seed });
    println!("{}", serde_json::to_string_pretty(&course_to_json(course.as_deref()))?);

    Ok(())
}
