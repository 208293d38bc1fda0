use itertools::Itertools;

use crate::cursor::{nothing, Cursor};
use crate::defs::{FRENCH_CARDS, TAROT_DE_MARSEILLE_CARDS};
use crate::random_object::RandomObject;
use crate::translate::{translate_french, translate_tarot_de_marseille};
use crate::util::{check_draws, Count, Outcome, Symbol, TranslationResult, Translator};

/// A deck of distinguishable cards drawn without replacement.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Symbol>,
    translator: Translator,
    cursor: Option<Cursor>,
}

impl Deck {
    /// # Panics
    ///
    /// When `cards` holds the same symbol twice.
    #[must_use]
    pub fn new(cards: Vec<Symbol>, translator: Translator) -> Self {
        assert!(cards.iter().all_unique(), "deck holds duplicate cards");
        Self {
            cards,
            translator,
            cursor: None,
        }
    }

    /// 52 cards: four French suits of ace through king.
    #[must_use]
    pub fn french() -> Self {
        Self::new(FRENCH_CARDS.clone(), translate_french)
    }

    /// 78 cards: four Italian suits of ace through king including the
    /// knight, followed by 22 trumps.
    #[must_use]
    pub fn tarot_de_marseille() -> Self {
        Self::new(TAROT_DE_MARSEILLE_CARDS.clone(), translate_tarot_de_marseille)
    }

    #[must_use]
    pub fn card(&self, n: usize) -> Option<Symbol> {
        self.cards.get(n).copied()
    }

    #[must_use]
    pub fn cards(&self) -> &[Symbol] {
        &self.cards
    }

    /// Lowest card of the alphabet.
    #[must_use]
    pub fn floor(&self) -> Option<Symbol> {
        self.cards.iter().min().copied()
    }
}

impl RandomObject for Deck {
    fn capacity(&self) -> usize {
        self.cards.len()
    }

    fn count_distinct_outcomes(&self, k: usize) -> Count {
        let n = self.capacity();
        check_draws(k, n);
        (n - k + 1..=n).map(Count::from).product()
    }

    fn next_outcome(&mut self, k: usize) -> Option<Outcome> {
        check_draws(k, self.capacity());
        let cards = &self.cards;
        Cursor::advance(&mut self.cursor, k, || {
            if k == 0 {
                return nothing();
            }
            let cards = cards.clone();
            Box::new(
                (0..cards.len())
                    .permutations(k)
                    .map(move |p| p.into_iter().map(|i| cards[i]).collect::<Outcome>()),
            )
        })
    }

    fn reset(&mut self) {
        self.cursor = None;
    }

    fn translate(&self, symbol: Symbol) -> TranslationResult<String> {
        (self.translator)(symbol)
    }
}
