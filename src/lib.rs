mod assemble;
mod combined;
mod cursor;
mod deck;
pub mod defs;
mod dice;
mod random_object;
pub mod symbols;
pub mod translate;
mod util;
pub mod wordlist;

pub use assemble::{assemble, Entry, Listing, Plan};
pub use combined::Combined;
pub use deck::Deck;
pub use dice::{DiceBag, DiceSpec};
pub use random_object::RandomObject;
pub use util::{
    Count, Error, Outcome, Result, Symbol, TranslationError, TranslationResult, Translator,
};
