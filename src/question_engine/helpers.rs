//! Shared helpers for the question generators.
//!
//! Arithmetic questions all need the same few things: a GCD, an exact way to
//! print decimals without floating-point noise, and a way to turn a handful of
//! "classic mistake" values into distractors that never repeat the correct
//! answer. These helpers keep the generators in `bank` focused on the maths.

use rand::Rng;

use crate::question_engine::random::shuffled_indices;

/// Greatest common divisor (Euclid). Always non-negative; `gcd(a, 0) = |a|`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.abs()
}

/// Least common multiple of two positive integers.
pub fn lcm(a: i64, b: i64) -> i64 {
    a / gcd(a, b) * b
}

/// The French yes/no answer for a boolean.
pub fn boolean_to_answer(value: bool) -> &'static str {
    if value { "Oui" } else { "Non" }
}

/// Exact decimal text of `mantissa × 10^exp10`, trailing zeros trimmed.
///
/// `format_decimal(1375, -1)` is `"137.5"`, `format_decimal(3, -2)` is
/// `"0.03"`, `format_decimal(4, 2)` is `"400"`.
pub fn format_decimal(mantissa: i64, exp10: i32) -> String {
    if exp10 >= 0 {
        return (mantissa * 10i64.pow(exp10 as u32)).to_string();
    }
    let digits = exp10.unsigned_abs() as usize;
    let scale = 10i64.pow(digits as u32);
    let sign = if mantissa < 0 { "-" } else { "" };
    let abs = mantissa.abs();
    let (int_part, frac_part) = (abs / scale, abs % scale);
    if frac_part == 0 {
        return format!("{sign}{int_part}");
    }
    let frac = format!("{frac_part:0digits$}");
    format!("{sign}{int_part}.{}", frac.trim_end_matches('0'))
}

/// Text of `halves / 2`, e.g. `15 → "7.5"`, `14 → "7"`.
pub fn format_halves(halves: i64) -> String {
    format_decimal(halves * 5, -1)
}

/// Turn candidate mistakes into `count` distinct distractors.
///
/// Candidates equal to `correct` or to an earlier candidate are skipped. If
/// fewer than `count` survive, the list is padded with `correct + 1`,
/// `correct - 1`, `correct + 2`, ... so the result always has `count` values.
pub fn near_misses(correct: i64, candidates: impl IntoIterator<Item = i64>, count: usize) -> Vec<i64> {
    let mut wrong: Vec<i64> = Vec::with_capacity(count);
    let padding = (1..).flat_map(|k| [correct + k, correct - k]);
    for value in candidates.into_iter().chain(padding) {
        if wrong.len() == count {
            break;
        }
        if value != correct && !wrong.contains(&value) {
            wrong.push(value);
        }
    }
    wrong
}

/// `count` distinct values `base + shift` with shifts drawn without
/// replacement from `±1 ..= ±max_shift`.
pub fn shifted_values<R: Rng + ?Sized>(
    rng: &mut R,
    base: i64,
    max_shift: i64,
    count: usize,
) -> Vec<i64> {
    let shifts: Vec<i64> = (1..=max_shift).flat_map(|i| [i, -i]).collect();
    let mut indices = shuffled_indices(rng, shifts.len());
    (0..count)
        .filter_map(|_| indices.pop())
        .map(|i| base + shifts[i])
        .collect()
}

/// Drop text distractors that repeat the correct answer or each other.
pub fn distinct_texts(correct: &str, candidates: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut wrong: Vec<String> = Vec::new();
    for text in candidates {
        if text != correct && !wrong.contains(&text) {
            wrong.push(text);
        }
    }
    wrong
}
