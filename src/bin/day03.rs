use clap::Parser;

use rucksacks::config::Config;
use rucksacks::{logger, parser, selftest};

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    logger::init_cli_logger(config.verbose);

    if let Err(e) = selftest::run() {
        tracing::error!("{}", e);
        return Err(e.into());
    }

    let input = config.read_input()?;
    let rucksacks = parser::parse_input(&input).map_err(rucksacks::Error::from)?;
    tracing::debug!(rucksacks = rucksacks.len(), "parsed input");

    for part in config.parts() {
        match part.solve(&rucksacks) {
            Ok(total) => println!("{}", total),
            Err(e) => {
                tracing::error!(%part, "{}", e);
                return Err(e.into());
            }
        }
    }

    Ok(())
}
