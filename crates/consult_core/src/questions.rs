use rand::{seq::SliceRandom, Rng};
use shared::domain::QuestionItem;

/// Draws `count` distinct questions from `pool` in a uniformly random order.
///
/// When `count` covers the whole pool the pool is returned as-is.
pub fn select_random_questions<R: Rng + ?Sized>(
    pool: &[QuestionItem],
    count: usize,
    rng: &mut R,
) -> Vec<QuestionItem> {
    if count >= pool.len() {
        return pool.to_vec();
    }

    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}
