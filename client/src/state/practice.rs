//! Practice-session progress shared across routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sentence-practice flow is the only writer. Presentation components such
//! as `FinishModal` receive the count through [`completed_sentences`] as a
//! read-only signal and never hold the `RwSignal` itself.

#[cfg(test)]
#[path = "practice_test.rs"]
mod practice_test;

use leptos::prelude::*;

/// Progress of the current practice session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PracticeState {
    /// Number of sentences the user has finished practicing.
    pub completed_sentences: u32,
}

impl PracticeState {
    /// Record one more finished sentence.
    pub fn complete_sentence(&mut self) {
        self.completed_sentences = self.completed_sentences.saturating_add(1);
    }

    /// Start a fresh session.
    pub fn reset(&mut self) {
        self.completed_sentences = 0;
    }
}

/// Derive a read-only view of the completed-sentence count.
pub fn completed_sentences(practice: RwSignal<PracticeState>) -> Signal<u32> {
    Signal::derive(move || practice.get().completed_sentences)
}
