use rand::Rng;

/// Uniform integer in `[min, max)`.
///
/// Panics when the range is empty; callers guarantee `max > min`.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    assert!(max > min, "empty range {min}..{max}");
    rng.gen_range(min..max)
}

/// Shuffle a slice in place.
pub fn shuffle<T, R: Rng + ?Sized>(rng: &mut R, items: &mut [T]) {
    // Fisher-Yates shuffle
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// The indices `0..count` in a random order.
pub fn shuffled_indices<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..count).collect();
    shuffle(rng, &mut indices);
    indices
}

/// A uniformly chosen element, `None` for an empty slice.
pub fn pick_random<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.gen_range(0..items.len()))
}
