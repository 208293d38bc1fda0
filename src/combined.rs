use crate::deck::Deck;
use crate::defs::ACE_OF_SPADES;
use crate::dice::DiceBag;
use crate::random_object::RandomObject;
use crate::util::{check_draws, Count, Error, Outcome, Result, Symbol, TranslationResult};

/// Dice rolled first, then cards drawn from a deck.
///
/// Every outcome is a dice prefix followed by a card suffix. All dice are
/// rolled before the first card is drawn, and all card draws are exhausted
/// before the dice advance. Dice faces sit below the deck's lowest card,
/// which is how [`Combined::translate`] tells them apart.
#[derive(Debug)]
pub struct Combined {
    dice: DiceBag,
    deck: Deck,
    cursor: Option<Prefix>,
}

#[derive(Debug)]
struct Prefix {
    draws: usize,
    dice: Outcome,
}

impl Combined {
    /// A bag of dice and a 52-card French deck.
    pub fn new(dice: &[u32]) -> Result<Self> {
        Self::with_deck(DiceBag::new(dice), Deck::french())
    }

    /// Fails when a die face would land on or above the deck's lowest card.
    pub fn with_deck(dice: DiceBag, deck: Deck) -> Result<Self> {
        let faces = dice.dice().iter().max().copied();
        if let (Some(faces), Some(floor)) = (faces, deck.floor()) {
            if faces > floor {
                return Err(Error::DiceOverlap { faces, floor });
            }
        }
        Ok(Self {
            dice,
            deck,
            cursor: None,
        })
    }

    #[must_use]
    pub fn dice(&self) -> &DiceBag {
        &self.dice
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns `(kdice, kcards)`.
    #[must_use]
    pub fn split_draws(&self, k: usize) -> (usize, usize) {
        let kdice = k.min(self.dice.capacity());
        (kdice, k - kdice)
    }

    fn open(&mut self, k: usize, kdice: usize) -> Option<()> {
        self.cursor = None;
        self.dice.reset();
        self.deck.reset();
        let dice = self.dice.next_outcome(kdice)?;
        self.cursor = Some(Prefix { draws: k, dice });
        Some(())
    }
}

impl RandomObject for Combined {
    fn capacity(&self) -> usize {
        self.dice.capacity() + self.deck.capacity()
    }

    fn count_distinct_outcomes(&self, k: usize) -> Count {
        check_draws(k, self.capacity());
        let (kdice, kcards) = self.split_draws(k);
        self.dice.count_distinct_outcomes(kdice) * self.deck.count_distinct_outcomes(kcards)
    }

    fn next_outcome(&mut self, k: usize) -> Option<Outcome> {
        check_draws(k, self.capacity());
        let (kdice, kcards) = self.split_draws(k);
        if self.cursor.as_ref().map_or(true, |p| p.draws != k) {
            self.open(k, kdice)?;
        }

        let cards = match self.deck.next_outcome(kcards) {
            Some(cards) => cards,
            None => match self.dice.next_outcome(kdice) {
                Some(dice) => {
                    if let Some(prefix) = self.cursor.as_mut() {
                        prefix.dice = dice;
                    }
                    self.deck.next_outcome(kcards)?
                }
                None => {
                    self.cursor = None;
                    return None;
                }
            },
        };

        let prefix = self.cursor.as_ref()?;
        let mut outcome = Vec::with_capacity(k);
        outcome.extend_from_slice(&prefix.dice);
        outcome.extend(cards);
        Some(outcome)
    }

    fn reset(&mut self) {
        self.cursor = None;
        self.dice.reset();
        self.deck.reset();
    }

    fn translate(&self, symbol: Symbol) -> TranslationResult<String> {
        if symbol < self.deck.floor().unwrap_or(ACE_OF_SPADES) {
            self.dice.translate(symbol)
        } else {
            self.deck.translate(symbol)
        }
    }
}
