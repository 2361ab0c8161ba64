use tracing::{info, warn};

use crate::checksum::Part;
use crate::error::{Error, Result};
use crate::rucksack::Rucksack;

pub const EXAMPLE: [&str; 6] = [
    "vJrwpWtwJgWrhcsFMMfFFhFp",
    "jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL",
    "PmmdzqPrVvPwwTWBwg",
    "wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn",
    "ttgJtRGJQctTZtZT",
    "CrZsJsPPZsGzwwsLwLmpwMDw",
];

pub fn expected(part: Part) -> u64 {
    match part {
        Part::One => 157,
        Part::Two => 70,
    }
}

fn check(part: Part, rucksacks: &[Rucksack<'_>], expected: u64) -> Result<()> {
    let actual = part.solve(rucksacks)?;

    if actual != expected {
        warn!(%part, expected, actual, "self-test mismatch");
        return Err(Error::SelfTest {
            part,
            expected,
            actual,
        });
    }

    Ok(())
}

// Must pass before any real input is processed.
pub fn run() -> Result<()> {
    let rucksacks = EXAMPLE.map(Rucksack::from);

    for part in Part::ALL {
        check(part, &rucksacks, expected(part))?;
    }

    info!("self-test passed");
    Ok(())
}
