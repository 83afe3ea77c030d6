//! Step ledger for staged builders
//!
//! A build session accumulates product state across named steps; extraction
//! is only legal once every mandatory step has run. [`StepLedger`] tracks
//! which steps ran so a builder can fail loudly instead of yielding a
//! partially built product.

use crate::error::{CreationError, CreationResult};
use std::collections::HashSet;

/// Tracks which mandatory steps of a build session have run
///
/// The required step list is fixed at construction and keeps its order;
/// [`StepLedger::verify`] reports the first step that has not run yet.
/// Recording the same step twice is fine — the ledger only cares that it
/// ran at least once.
#[derive(Debug, Clone)]
pub struct StepLedger {
    required: Vec<&'static str>,
    completed: HashSet<&'static str>,
}

impl StepLedger {
    /// Create a ledger over a fixed list of mandatory step names
    #[must_use]
    pub fn new(required: &[&'static str]) -> Self {
        Self {
            required: required.to_vec(),
            completed: HashSet::new(),
        }
    }

    /// Mark a step as having run
    pub fn record(&mut self, step: &'static str) {
        self.completed.insert(step);
    }

    /// Check that every mandatory step has run
    ///
    /// # Errors
    /// [`CreationError::IncompleteBuild`] naming the first missing step.
    pub fn verify(&self) -> CreationResult<()> {
        match self
            .required
            .iter()
            .copied()
            .find(|s| !self.completed.contains(s))
        {
            Some(missing) => Err(CreationError::IncompleteBuild(missing)),
            None => Ok(()),
        }
    }

    /// Whether every mandatory step has run
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.verify().is_ok()
    }

    /// Forget all recorded steps, readying the ledger for a fresh session
    pub fn reset(&mut self) {
        self.completed.clear();
    }

    /// The mandatory step names, in order
    #[inline]
    #[must_use]
    pub fn required_steps(&self) -> &[&'static str] {
        &self.required
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ledger_is_complete() {
        let ledger = StepLedger::new(&[]);
        assert!(ledger.is_complete());
    }

    #[test]
    fn verify_reports_first_missing_step() {
        let mut ledger = StepLedger::new(&["base", "filling", "glaze"]);
        ledger.record("glaze");

        let err = ledger.verify().unwrap_err();
        assert_eq!(err, CreationError::IncompleteBuild("base"));
    }

    #[test]
    fn all_steps_recorded_verifies() {
        let mut ledger = StepLedger::new(&["base", "glaze"]);
        ledger.record("base");
        ledger.record("glaze");
        assert!(ledger.verify().is_ok());
    }

    #[test]
    fn recording_twice_is_harmless() {
        let mut ledger = StepLedger::new(&["base"]);
        ledger.record("base");
        ledger.record("base");
        assert!(ledger.is_complete());
    }

    #[test]
    fn reset_clears_progress() {
        let mut ledger = StepLedger::new(&["base"]);
        ledger.record("base");
        ledger.reset();

        assert!(!ledger.is_complete());
        assert_eq!(ledger.required_steps(), &["base"]);
    }
}
