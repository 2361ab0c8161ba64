use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::checksum::Part;
use crate::error::Result;

#[derive(Debug, Clone, Parser)]
#[command(name = "day03")]
#[command(about = "Sums rucksack item priorities")]
pub struct Config {
    #[arg(help = "Puzzle input, read from stdin when omitted")]
    pub input: Option<PathBuf>,

    #[arg(long, value_enum, help = "Solve only this part, both when omitted")]
    pub part: Option<PartArg>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum PartArg {
    One,
    Two,
}

impl From<PartArg> for Part {
    fn from(arg: PartArg) -> Part {
        match arg {
            PartArg::One => Part::One,
            PartArg::Two => Part::Two,
        }
    }
}

impl Config {
    pub fn parts(&self) -> Vec<Part> {
        match self.part {
            Some(part) => vec![part.into()],
            None => Part::ALL.to_vec(),
        }
    }

    pub fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => {
                let mut input = String::new();
                std::io::stdin().read_to_string(&mut input)?;
                Ok(input)
            }
        }
    }
}
