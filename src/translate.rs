use crate::defs::{
    ACE_OF_SPADES, FRENCH_SUITS, FRENCH_VALUES, KING_OF_CLUBS, KNIGHT_RANK, RANK_SLOTS,
    SUIT_STRIDE, TAROT_DE_MARSEILLE_SUITS, TAROT_DE_MARSEILLE_TRUMPS, TAROT_DE_MARSEILLE_VALUES,
    THE_FOOL, THE_WORLD,
};
use crate::util::{Symbol, TranslationError, TranslationResult};

/// Name of a French playing card, rank first: `A♠`, `T♡`, `K♣`.
pub fn translate_french(symbol: Symbol) -> TranslationResult<String> {
    if !(ACE_OF_SPADES..=KING_OF_CLUBS).contains(&symbol) {
        return Err(TranslationError::OutOfBounds(symbol));
    }
    let (suit, rank) = suit_and_rank(symbol);
    let suit = FRENCH_SUITS
        .get(suit)
        .ok_or(TranslationError::UnknownSuit(symbol))?;
    if rank == KNIGHT_RANK as usize || rank >= RANK_SLOTS as usize {
        return Err(TranslationError::UnknownRank(symbol));
    }
    let rank = if rank > KNIGHT_RANK as usize { rank - 1 } else { rank };
    Ok(format!("{}{suit}", FRENCH_VALUES[rank]))
}

/// Name of a Tarot de Marseille card. Trumps are roman numerals.
pub fn translate_tarot_de_marseille(symbol: Symbol) -> TranslationResult<String> {
    if !(ACE_OF_SPADES..=THE_WORLD).contains(&symbol) {
        return Err(TranslationError::OutOfBounds(symbol));
    }
    if symbol >= THE_FOOL {
        return Ok(TAROT_DE_MARSEILLE_TRUMPS[(symbol - THE_FOOL) as usize].to_owned());
    }
    let (suit, rank) = suit_and_rank(symbol);
    let suit = TAROT_DE_MARSEILLE_SUITS
        .get(suit)
        .ok_or(TranslationError::UnknownSuit(symbol))?;
    let value = TAROT_DE_MARSEILLE_VALUES
        .get(rank)
        .ok_or(TranslationError::UnknownRank(symbol))?;
    Ok(format!("{value}{suit}"))
}

/// Faces are stored 0-indexed and shown 1-indexed.
pub fn translate_die(symbol: Symbol) -> String {
    format!("[{}]", u64::from(symbol) + 1)
}

fn suit_and_rank(symbol: Symbol) -> (usize, usize) {
    let offset = symbol - ACE_OF_SPADES;
    ((offset / SUIT_STRIDE) as usize, (offset % SUIT_STRIDE) as usize)
}
