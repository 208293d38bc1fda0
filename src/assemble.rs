use std::fmt::{self, Display};

use bon::Builder;
use log::{debug, info, warn};
use num::ToPrimitive;
use rand::seq::SliceRandom;
use rand::{CryptoRng, RngCore};

use crate::combined::Combined;
use crate::random_object::RandomObject;
use crate::util::{Count, Error, Outcome, Result};

/// How many symbols to draw for a word list.
#[derive(Debug, Clone, Default, Builder)]
pub struct Plan {
    /// Cards drawn on top of the dice.
    #[builder(default)]
    cards: usize,
    /// Upper bound on the draw count picked when neither dice nor cards
    /// are given. Zero means no bound.
    max_draws: Option<usize>,
}

/// One line of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub outcome: Outcome,
    pub label: String,
    pub word: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub draws: usize,
    pub entries: Vec<Entry>,
}

impl Plan {
    /// Every die plus the extra cards. Without either, the fewest draws
    /// whose outcomes cover `words`.
    pub fn draws(&self, device: &Combined, words: usize) -> Result<usize> {
        let capacity = device.capacity();
        let dice = device.dice().capacity();
        let max_draws = self.max_draws.filter(|&max| max > 0);
        if dice > 0 || self.cards > 0 {
            if let Some(max) = max_draws {
                info!("ignoring the limit of {max} draws, dice and cards fix the count");
            }
            let draws = dice + self.cards;
            if draws > capacity {
                return Err(Error::TooManyDraws { draws, capacity });
            }
            return Ok(draws);
        }

        let needed = Count::from(words);
        let draws = (1..=capacity)
            .find(|&k| device.count_distinct_outcomes(k) >= needed)
            .unwrap_or(capacity);
        debug!("{words} words need {draws} draws");
        match max_draws {
            Some(max) if max < draws => {
                info!("limiting to {max} draws");
                Ok(max)
            }
            _ => Ok(draws),
        }
    }

    pub fn run<G>(&self, device: &mut Combined, words: Vec<String>, rng: &mut G) -> Result<Listing>
    where
        G: RngCore + CryptoRng,
    {
        let draws = self.draws(device, words.len())?;
        let entries = assemble(device, draws, words, rng)?;
        Ok(Listing { draws, entries })
    }
}

/// Pairs a random subset of `words` with the first outcomes of `draws`
/// draws from `device`. Both sides are sorted before pairing, so the
/// listing is in canonical outcome order and alphabetical at once.
pub fn assemble<D, G>(
    device: &mut D,
    draws: usize,
    mut words: Vec<String>,
    rng: &mut G,
) -> Result<Vec<Entry>>
where
    D: RandomObject,
    G: RngCore + CryptoRng,
{
    let count = device.count_distinct_outcomes(draws);
    let size = count
        .to_usize()
        .map_or(words.len(), |c| c.min(words.len()));
    info!("drawing {draws} times for {count} distinct outcomes");
    if Count::from(words.len()) < count {
        warn!(
            "due to word list size, only {} of {count} outcomes will be used",
            words.len()
        );
    }
    info!("drawing a total of {size} words");

    words.shuffle(rng);
    words.truncate(size);
    words.sort();

    device.reset();
    let mut outcomes = Vec::with_capacity(size);
    while outcomes.len() < size {
        match device.next_outcome(draws) {
            Some(outcome) => outcomes.push(outcome),
            None => break,
        }
    }
    device.reset();
    outcomes.sort();

    outcomes
        .into_iter()
        .zip(words)
        .map(|(outcome, word)| {
            let label = device.label(&outcome)?;
            Ok(Entry {
                outcome,
                label,
                word,
            })
        })
        .collect()
}

impl Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.word)
    }
}

impl Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
