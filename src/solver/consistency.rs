//! Candidate filtering against accumulated clue history

use crate::core::{Clue, History, Word};

/// Which side a candidate plays when a past clue is recomputed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsistencyCheck {
    /// `Clue::calculate(candidate, past_guess)` must reproduce the recorded clue
    #[default]
    CandidateAsSource,
    /// `Clue::calculate(past_guess, candidate)` must reproduce the recorded clue,
    /// i.e. the candidate is treated as a hypothetical secret
    CandidateAsSecret,
}

impl ConsistencyCheck {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CandidateAsSource => "candidate-source",
            Self::CandidateAsSecret => "candidate-secret",
        }
    }

    /// Recompute the clue a past guess would be compared against
    #[must_use]
    pub fn clue_for(self, candidate: &Word, past_guess: &Word) -> Clue {
        match self {
            Self::CandidateAsSource => Clue::calculate(candidate, past_guess),
            Self::CandidateAsSecret => Clue::calculate(past_guess, candidate),
        }
    }

    /// Check whether `candidate` could have produced every recorded clue
    ///
    /// Stops at the first mismatch.
    #[must_use]
    pub fn is_consistent(self, candidate: &Word, history: &History) -> bool {
        history
            .entries()
            .iter()
            .all(|entry| self.clue_for(candidate, &entry.guess) == entry.clue)
    }
}

/// Check `candidate` against `history` with the candidate as clue source
///
/// # Examples
/// ```
/// use astar_wordle::core::{Clue, History, Word};
/// use astar_wordle::solver::is_consistent;
///
/// let guess = Word::new("aaron").unwrap();
/// let secret = Word::new("eagle").unwrap();
/// let history = History::new().extended(guess.clone(), Clue::calculate(&guess, &secret));
///
/// assert!(is_consistent(&secret, &history));
/// assert!(!is_consistent(&Word::new("apple").unwrap(), &history));
/// ```
#[must_use]
pub fn is_consistent(candidate: &Word, history: &History) -> bool {
    ConsistencyCheck::CandidateAsSource.is_consistent(candidate, history)
}
