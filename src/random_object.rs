use crate::util::{Count, Outcome, Symbol, TranslationResult};

/// A thing that draws distinguishable symbols from a fixed set, like a deck
/// of cards or a bag of dice.
///
/// `count_distinct_outcomes` and `next_outcome` panic when `k` exceeds
/// [`RandomObject::capacity`]. Callers are expected to check first.
pub trait RandomObject {
    /// Maximum number of draws.
    fn capacity(&self) -> usize;

    /// Exact number of distinct ordered outcomes of `k` draws.
    fn count_distinct_outcomes(&self, k: usize) -> Count;

    /// Next outcome of `k` draws in canonical order, or `None` once every
    /// outcome has been returned. Changing `k` restarts the enumeration, and
    /// so does calling again after `None`.
    fn next_outcome(&mut self, k: usize) -> Option<Outcome>;

    /// Discards the enumeration cursor.
    fn reset(&mut self);

    fn translate(&self, symbol: Symbol) -> TranslationResult<String>;

    /// Labels of every symbol in `outcome`, joined with `+`.
    fn label(&self, outcome: &[Symbol]) -> TranslationResult<String> {
        let names = outcome
            .iter()
            .map(|&s| self.translate(s))
            .collect::<TranslationResult<Vec<_>>>()?;
        Ok(names.join("+"))
    }
}
