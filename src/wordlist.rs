use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::util::{Error, Result};

/// Reads one word per line, keeping trimmed words of at least `min_length`
/// characters.
pub fn load_words<R>(reader: R, min_length: usize) -> Result<Vec<String>>
where
    R: BufRead,
{
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() && word.chars().count() >= min_length {
            words.push(word.to_owned());
        }
    }
    Ok(words)
}

pub fn read_word_list<P>(path: P, min_length: usize) -> Result<Vec<String>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    debug!("reading word list {}", path.display());
    let file = File::open(path).map_err(|source| Error::WordList {
        path: path.to_owned(),
        source,
    })?;
    load_words(BufReader::new(file), min_length)
}
