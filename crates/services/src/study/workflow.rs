use rand::SeedableRng;
use rand::rng;
use rand::rngs::StdRng;

use vocab_core::model::Vocabulary;

use super::session::StudySession;
use crate::error::StudyError;

/// Starts study sessions over a shared vocabulary.
///
/// Holds the seed policy: with a fixed seed every started session draws the same
/// first permutation, otherwise each session is seeded from the thread RNG.
#[derive(Debug, Clone)]
pub struct StudyLoopService {
    vocabulary: Vocabulary,
    seed: Option<u64>,
}

impl StudyLoopService {
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            seed: None,
        }
    }

    /// Service over the vocabulary compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Vocabulary` if the built-in table is malformed.
    pub fn builtin() -> Result<Self, StudyError> {
        Ok(Self::new(Vocabulary::builtin()?))
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Start a new session with a freshly shuffled order.
    #[must_use]
    pub fn start_session(&self) -> StudySession {
        let source = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rng()),
        };
        log::info!(
            "starting study session ({} entries, seed: {:?})",
            self.vocabulary.len(),
            self.seed
        );
        StudySession::new(self.vocabulary.clone(), source)
    }
}
