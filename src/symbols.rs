use std::fmt::{self, Display};

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore};

use crate::defs::{FRENCH_COLORS, FRENCH_VALUES};

pub const SYMBOLS: [char; 29] = [
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '-', '+', '=', '~', '{', '[', '}', ']',
    '|', '\\', ':', ';', '<', ',', '>', '.', '?', '/',
];
pub const QUOTES: [char; 3] = ['`', '\'', '"'];

/// Shuffled punctuation laid out by card rank and color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: Vec<char>,
}

impl SymbolTable {
    pub fn shuffled<G>(rng: &mut G, quotes: bool, space: bool) -> Self
    where
        G: RngCore + CryptoRng,
    {
        let mut symbols = palette(quotes, space);
        symbols.shuffle(rng);
        Self { symbols }
    }

    /// Symbol for a card of rank `rank` (0 = ace) and color `color`
    /// (0 = black).
    #[must_use]
    pub fn get(&self, rank: usize, color: usize) -> Option<char> {
        if color >= FRENCH_COLORS.len() || rank >= FRENCH_VALUES.len() {
            return None;
        }
        self.symbols.get(rank * FRENCH_COLORS.len() + color).copied()
    }
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for color in FRENCH_COLORS {
            write!(f, "  {color}")?;
        }
        writeln!(f)?;
        for (rank, value) in FRENCH_VALUES.iter().enumerate() {
            write!(f, "{value}")?;
            for color in 0..FRENCH_COLORS.len() {
                if let Some(symbol) = self.get(rank, color) {
                    write!(f, "  {symbol}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn palette(quotes: bool, space: bool) -> Vec<char> {
    let mut symbols = SYMBOLS.to_vec();
    if quotes {
        symbols.extend(QUOTES);
    }
    if space {
        symbols.push(' ');
    }
    symbols
}

/// Which card color marks a capital letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capital {
    Black,
    Red,
}

impl Capital {
    pub fn flip<G>(rng: &mut G) -> Self
    where
        G: RngCore + CryptoRng,
    {
        if rng.gen_bool(0.5) {
            Capital::Black
        } else {
            Capital::Red
        }
    }
}

impl Display for Capital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = match self {
            Capital::Black => FRENCH_COLORS[0],
            Capital::Red => FRENCH_COLORS[1],
        };
        write!(f, "CAPITAL: {color}")
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn palette_sizes() {
        assert_eq!(palette(false, false).len(), 29);
        assert_eq!(palette(true, false).len(), 32);
        assert_eq!(palette(true, true).len(), 33);
        assert!(palette(false, true).contains(&' '));
    }

    #[test]
    fn table_is_a_permutation_of_the_palette() {
        let mut rng = StdRng::seed_from_u64(7);
        let table = SymbolTable::shuffled(&mut rng, true, false);
        let mut got = table.symbols.clone();
        let mut want = palette(true, false);
        got.sort_unstable();
        want.sort_unstable();
        assert_eq!(got, want);
    }

    #[test]
    fn grid_layout() {
        let mut rng = StdRng::seed_from_u64(1);
        let table = SymbolTable::shuffled(&mut rng, false, false);
        let text = table.to_string();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "   B  R");
        assert!(lines[1].starts_with('A'));
        assert!(lines[13].starts_with('K'));
        assert_eq!(lines[2], format!("2  {}  {}", table.symbols[2], table.symbols[3]));
        assert_eq!(table.get(13, 0), None);
        assert_eq!(table.get(0, 2), None);
    }

    #[test]
    fn capital_marker() {
        assert_eq!(Capital::Black.to_string(), "CAPITAL: B");
        assert_eq!(Capital::Red.to_string(), "CAPITAL: R");
        let mut rng = StdRng::seed_from_u64(3);
        let flips = (0..64).map(|_| Capital::flip(&mut rng)).collect::<Vec<_>>();
        assert!(flips.contains(&Capital::Black));
        assert!(flips.contains(&Capital::Red));
    }
}
