use std::path::PathBuf;

use cardware::DiceSpec;
use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "cardware")]
#[command(about = "Map a word list onto playing cards and dice for passphrase generation")]
pub struct Cli {
    /// Word list, one word per line
    pub wordlist: PathBuf,

    /// Minimum number of letters in words
    #[arg(short = 'm', default_value_t = 4)]
    pub min_length: usize,

    /// Draw this many playing cards to augment randomness
    #[arg(short = 'c', default_value_t = 0)]
    pub cards: usize,

    /// Upper bound on the number of card draws picked for the word list
    #[arg(
        short = 'n',
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
        conflicts_with_all = ["cards", "dice"]
    )]
    pub max_draws: Option<usize>,

    /// Bag of dice in [N]dF+[N]dF+... notation (repeatable)
    #[arg(short = 'd', value_name = "DICE")]
    pub dice: Vec<DiceSpec>,

    /// Do not create a symbol table
    #[arg(long)]
    pub no_symbols: bool,

    /// Allow quote characters in the symbol table
    #[arg(long)]
    pub quotes: bool,

    /// Allow the space character in the symbol table
    #[arg(long)]
    pub space: bool,

    /// Do not create a capital letter marker
    #[arg(long)]
    pub no_capitals: bool,

    /// Log verbosity, repeat for more (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn dice(&self) -> DiceSpec {
        self.dice.iter().fold(DiceSpec::default(), |mut acc, spec| {
            acc.extend(spec);
            acc
        })
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
