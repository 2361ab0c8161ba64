pub mod checksum;
pub mod config;
pub mod error;
pub mod logger;
pub mod parser;
pub mod priority;
pub mod rucksack;
pub mod selftest;

pub use checksum::{sum_badge_priorities, sum_priorities, Part};
pub use error::{Error, Result};
pub use rucksack::Rucksack;
