use rand::Rng;
use rand::seq::SliceRandom;

use vocab_core::model::VocabularyEntry;

/// Return a uniformly random permutation of `entries`.
///
/// The input is left untouched; every entry appears exactly once in the result.
pub fn permutation<R: Rng + ?Sized>(
    entries: &[VocabularyEntry],
    rng: &mut R,
) -> Vec<VocabularyEntry> {
    let mut shuffled = entries.to_vec();
    shuffled.as_mut_slice().shuffle(rng);
    shuffled
}
