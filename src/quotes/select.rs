//! Uniform random selection from the filtered set.
//!
//! # Design Decisions
//! - The RNG is passed in by the caller so selection stays a pure function
//!   of (set, RNG); handlers use a request-local `thread_rng`
//! - Empty set yields `None`; the handler substitutes the sentinel

use rand::seq::SliceRandom;
use rand::Rng;

use crate::quotes::types::Quote;

/// Pick one quote uniformly at random. Returns `None` on an empty slice.
pub fn select_random<'a, R: Rng>(quotes: &'a [Quote], rng: &mut R) -> Option<&'a Quote> {
    quotes.choose(rng)
}
