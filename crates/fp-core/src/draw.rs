//! Single uniform draws.

use rand::Rng;

use crate::error::{PickError, PickResult};

/// Draw one element uniformly at random.
///
/// The input is not consumed, so repeated draws sample the same set. A
/// "spinning" presentation is just this function called on a timer.
pub fn draw<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> PickResult<&'a T> {
    if items.is_empty() {
        return Err(PickError::invalid("cannot draw from an empty list"));
    }
    let idx = rng.random_range(0..items.len());
    tracing::debug!(entries = items.len(), index = idx, "drew entry");
    Ok(&items[idx])
}
