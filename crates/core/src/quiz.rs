//! Quiz question selection.
//!
//! A quiz session is held entirely by the client as a list of previously
//! asked question ids; the server re-derives the remaining candidate pool on
//! every call and draws one entry at random. The generator is injected so
//! tests can seed it.

use rand::Rng;

/// Draw one element uniformly at random from the candidate pool.
///
/// Returns `None` when the pool is empty, which callers report as a normal
/// "quiz exhausted" result rather than an error.
pub fn draw<T, R: Rng + ?Sized>(mut candidates: Vec<T>, rng: &mut R) -> Option<T> {
    if candidates.is_empty() {
        return None;
    }
    let index = rng.random_range(0..candidates.len());
    Some(candidates.swap_remove(index))
}
