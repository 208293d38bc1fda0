use std::path::PathBuf;

use thiserror::Error;

pub type Symbol = u32;
pub type Outcome = Vec<Symbol>;
pub type Count = num::BigUint;
pub type Translator = fn(Symbol) -> TranslationResult<String>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("word list file '{}': {source}", path.display())]
    WordList {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid dice identifier '{0}'")]
    DiceSpec(String),
    #[error("dice with {faces} faces reach into the deck starting at {floor:#x}")]
    DiceOverlap { faces: u32, floor: Symbol },
    #[error(transparent)]
    Translation(#[from] TranslationError),
    #[error("cannot draw {draws} times from a device with capacity {capacity}")]
    TooManyDraws { draws: usize, capacity: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TranslationError {
    #[error("symbol {0:#x} is out of bounds")]
    OutOfBounds(Symbol),
    #[error("suit of symbol {0:#x} is unknown")]
    UnknownSuit(Symbol),
    #[error("rank of symbol {0:#x} is unknown")]
    UnknownRank(Symbol),
}

pub type Result<T> = core::result::Result<T, Error>;
pub type TranslationResult<T> = core::result::Result<T, TranslationError>;

#[inline]
pub(crate) fn check_draws(k: usize, capacity: usize) {
    assert!(k <= capacity, "k > capacity ({k} > {capacity})");
}
