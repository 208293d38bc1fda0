use std::fmt::{self, Display};
use std::str::FromStr;

use itertools::Itertools;

use crate::cursor::{nothing, Cursor};
use crate::defs::ACE_OF_SPADES;
use crate::random_object::RandomObject;
use crate::translate::translate_die;
use crate::util::{
    check_draws, Count, Error, Outcome, Symbol, TranslationError, TranslationResult,
};

/// A bag of independent dice, rolled in order. Die `i` shows one of
/// `0..faces[i]`.
#[derive(Debug, Default)]
pub struct DiceBag {
    dice: Vec<u32>,
    cursor: Option<Cursor>,
}

impl DiceBag {
    #[must_use]
    pub fn new(dice: &[u32]) -> Self {
        Self {
            dice: dice.to_vec(),
            cursor: None,
        }
    }

    #[must_use]
    pub fn dice(&self) -> &[u32] {
        &self.dice
    }
}

impl RandomObject for DiceBag {
    fn capacity(&self) -> usize {
        self.dice.len()
    }

    fn count_distinct_outcomes(&self, k: usize) -> Count {
        check_draws(k, self.capacity());
        self.dice[..k].iter().map(|&f| Count::from(f)).product()
    }

    fn next_outcome(&mut self, k: usize) -> Option<Outcome> {
        check_draws(k, self.capacity());
        let dice = &self.dice[..k];
        Cursor::advance(&mut self.cursor, k, || {
            if k == 0 {
                return nothing();
            }
            let ranges = dice.iter().map(|&f| 0..f).collect_vec();
            Box::new(ranges.into_iter().multi_cartesian_product())
        })
    }

    fn reset(&mut self) {
        self.cursor = None;
    }

    fn translate(&self, symbol: Symbol) -> TranslationResult<String> {
        match self.dice.iter().max() {
            Some(&faces) if symbol < faces => Ok(translate_die(symbol)),
            _ => Err(TranslationError::OutOfBounds(symbol)),
        }
    }
}

impl Display for DiceBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DiceSpec(self.dice.clone()).fmt(f)
    }
}

/// Dice written as `[N]dF[+[N]dF...]`, e.g. `2d6+1d20`. Faces run from 1 to
/// the code point of the ace of spades, so no face is mistaken for a card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiceSpec(pub Vec<u32>);

impl DiceSpec {
    pub fn extend(&mut self, other: &DiceSpec) {
        self.0.extend_from_slice(&other.0);
    }
}

impl FromStr for DiceSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut dice = Vec::new();
        for term in s.split('+') {
            let (n, faces) = parse_term(term).ok_or_else(|| Error::DiceSpec(term.to_owned()))?;
            dice.extend(std::iter::repeat(faces).take(n));
        }
        Ok(Self(dice))
    }
}

fn parse_term(term: &str) -> Option<(usize, u32)> {
    let (n, faces) = term.trim().split_once(['d', 'D'])?;
    let n = if n.is_empty() { 1 } else { parse_digits(n)? };
    let faces = parse_digits(faces)?;
    (1..=ACE_OF_SPADES).contains(&faces).then_some((n, faces))
}

fn parse_digits<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl Display for DiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups = self
            .0
            .iter()
            .sorted()
            .dedup_with_count()
            .map(|(n, faces)| format!("{n}d{faces}"))
            .join("+");
        f.write_str(&groups)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn count() {
        let bag = DiceBag::new(&[6, 6, 20]);
        assert_eq!(bag.capacity(), 3);
        assert_eq!(bag.count_distinct_outcomes(0), Count::from(1u32));
        assert_eq!(bag.count_distinct_outcomes(1), Count::from(6u32));
        assert_eq!(bag.count_distinct_outcomes(2), Count::from(36u32));
        assert_eq!(bag.count_distinct_outcomes(3), Count::from(720u32));
        assert_eq!(DiceBag::default().count_distinct_outcomes(0), Count::from(1u32));
    }

    #[test]
    fn count_is_exact_for_many_dice() {
        let bag = DiceBag::new(&[100; 30]);
        assert_eq!(bag.count_distinct_outcomes(30), Count::from(10u32).pow(60));
    }

    #[test]
    #[should_panic]
    fn count_too_many() {
        DiceBag::new(&[6]).count_distinct_outcomes(2);
    }

    #[test]
    #[should_panic]
    fn next_too_many() {
        DiceBag::default().next_outcome(1);
    }

    #[test]
    fn two_d6_cover_the_product() {
        let mut bag = DiceBag::new(&[6, 6]);
        let drawn = std::iter::from_fn(|| bag.next_outcome(2)).collect::<Vec<_>>();
        assert_eq!(drawn.len(), 36);
        assert_eq!(drawn.first(), Some(&vec![0, 0]));
        assert_eq!(drawn.get(1), Some(&vec![0, 1]));
        assert_eq!(drawn.last(), Some(&vec![5, 5]));
        let unique = drawn.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), 36);
        assert!((0..6).cartesian_product(0..6).all(|(a, b)| unique.contains(&vec![a, b])));
    }

    #[test]
    fn uses_leading_dice_only() {
        let mut bag = DiceBag::new(&[2, 3]);
        let drawn = std::iter::from_fn(|| bag.next_outcome(1)).collect::<Vec<_>>();
        assert_eq!(drawn, vec![vec![0], vec![1]]);
    }

    #[test]
    fn restarts_after_exhaustion() {
        let mut bag = DiceBag::new(&[2]);
        assert_eq!(bag.next_outcome(1), Some(vec![0]));
        assert_eq!(bag.next_outcome(1), Some(vec![1]));
        assert_eq!(bag.next_outcome(1), None);
        assert_eq!(bag.next_outcome(1), Some(vec![0]));
        assert_eq!(bag.next_outcome(0), Some(vec![]));
        assert_eq!(bag.next_outcome(0), None);
    }

    #[test]
    fn translate() {
        let bag = DiceBag::new(&[6, 20]);
        assert_eq!(bag.translate(0).unwrap(), "[1]");
        assert_eq!(bag.translate(19).unwrap(), "[20]");
        assert_eq!(bag.translate(20), Err(TranslationError::OutOfBounds(20)));
        assert!(DiceBag::default().translate(0).is_err());
    }

    #[test]
    fn parse_notation() {
        assert_eq!("2d6+1d20".parse::<DiceSpec>().unwrap(), DiceSpec(vec![6, 6, 20]));
        assert_eq!("d8".parse::<DiceSpec>().unwrap(), DiceSpec(vec![8]));
        assert_eq!("3D4".parse::<DiceSpec>().unwrap(), DiceSpec(vec![4, 4, 4]));
        assert_eq!("0d6".parse::<DiceSpec>().unwrap(), DiceSpec(vec![]));
    }

    #[test]
    fn parse_notation_rejects_garbage() {
        for bad in ["", "6", "2d", "2x6", "d0", "2d6+", "-1d6", "2d6+foo", "1d200000"] {
            assert!(
                matches!(bad.parse::<DiceSpec>(), Err(Error::DiceSpec(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn parse_notation_caps_faces_below_cards() {
        let largest = format!("d{ACE_OF_SPADES}");
        assert_eq!(largest.parse::<DiceSpec>().unwrap(), DiceSpec(vec![ACE_OF_SPADES]));
        let too_many = format!("2d6+d{}", ACE_OF_SPADES + 1);
        assert!(matches!(
            too_many.parse::<DiceSpec>(),
            Err(Error::DiceSpec(term)) if term == format!("d{}", ACE_OF_SPADES + 1)
        ));
    }

    #[test]
    fn display_groups_faces() {
        let spec = "1d20+2d6".parse::<DiceSpec>().unwrap();
        assert_eq!(spec.to_string(), "2d6+1d20");
        assert_eq!(DiceBag::new(&spec.0).to_string(), "2d6+1d20");
    }
}
