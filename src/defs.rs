use std::sync::LazyLock;

use crate::util::Symbol;

/// Lowest card of both decks, U+1F0A1 PLAYING CARD ACE OF SPADES.
pub const ACE_OF_SPADES: Symbol = 0x1F0A1;
/// Highest suited card, U+1F0DE PLAYING CARD KING OF CLUBS.
pub const KING_OF_CLUBS: Symbol = 0x1F0DE;
/// Lowest trump, U+1F0E0 PLAYING CARD FOOL.
pub const THE_FOOL: Symbol = 0x1F0E0;
/// Highest trump, U+1F0F5 PLAYING CARD TRUMP-21.
pub const THE_WORLD: Symbol = 0x1F0F5;

/// Distance between the aces of two neighbouring suits.
pub const SUIT_STRIDE: Symbol = 16;
/// Rank slot of the knight, absent from French decks.
pub const KNIGHT_RANK: Symbol = 11;
/// Number of used rank slots per suit (the two above are jokers and blanks).
pub const RANK_SLOTS: Symbol = 14;

pub const FRENCH_COLORS: [char; 2] = ['B', 'R'];
pub const FRENCH_SUITS: [char; 4] = ['♠', '♡', '♢', '♣'];
pub const FRENCH_VALUES: [char; 13] = [
    'A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K',
];

pub const TAROT_DE_MARSEILLE_SUITS: [char; 4] = ['♣', '⚔', '⛾', '⛤'];
pub const TAROT_DE_MARSEILLE_VALUES: [char; 14] = [
    'A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'N', 'Q', 'K',
];
pub const TAROT_DE_MARSEILLE_TRUMPS: [&str; 22] = [
    "0", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV",
    "XV", "XVI", "XVII", "XVIII", "XIX", "XX", "XXI",
];

pub static FRENCH_CARDS: LazyLock<Vec<Symbol>> =
    LazyLock::new(|| suited_cards(false).collect());

pub static TAROT_DE_MARSEILLE_CARDS: LazyLock<Vec<Symbol>> =
    LazyLock::new(|| suited_cards(true).chain(THE_FOOL..=THE_WORLD).collect());

fn suited_cards(knights: bool) -> impl Iterator<Item = Symbol> {
    (0..FRENCH_SUITS.len() as Symbol).flat_map(move |suit| {
        (0..RANK_SLOTS)
            .filter(move |&rank| knights || rank != KNIGHT_RANK)
            .map(move |rank| ACE_OF_SPADES + suit * SUIT_STRIDE + rank)
    })
}
