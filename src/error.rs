use thiserror::Error;

use crate::checksum::Part;

#[derive(Error, Debug)]
pub enum Error {
    #[error("self-test for part {part} failed: expected {expected}, got {actual}")]
    SelfTest {
        part: Part,
        expected: u64,
        actual: u64,
    },

    #[error("rucksack {rucksack} (line {line}): compartments share no item type")]
    NoCommonItem { rucksack: usize, line: usize },

    #[error("rucksack {rucksack} (line {line}): invalid item type {item:?}")]
    InvalidItemType {
        rucksack: usize,
        line: usize,
        item: char,
    },

    #[error("group {group}: rucksacks share no badge")]
    NoCommonBadge { group: usize },

    #[error("group {group}: expected 3 rucksacks, got {len}")]
    IncompleteGroup { group: usize, len: usize },

    #[error("malformed input: {0}")]
    Parse(#[from] nom::error::Error<String>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
