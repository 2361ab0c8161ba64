use nom::bytes::complete::take_till;
use nom::character::complete::char;
use nom::combinator::eof;
use nom::multi::separated_list0;
use nom::sequence::terminated;
use nom::{Finish, IResult, Parser};

use crate::rucksack::Rucksack;

pub fn nom_error_to_owned<I>(e: nom::error::Error<&I>) -> nom::error::Error<I::Owned>
where
    I: ToOwned + ?Sized,
    I::Owned: 'static,
{
    let nom::error::Error { input, code } = e;
    nom::error::Error {
        input: input.to_owned(),
        code,
    }
}

// Only '\n' ends a line, so a stray '\r' stays in the rucksack for the scorer to reject.
fn lines(input: &str) -> IResult<&str, Vec<&str>> {
    terminated(separated_list0(char('\n'), take_till(|c: char| c == '\n')), eof).parse(input)
}

pub fn parse_input(input: &str) -> Result<Vec<Rucksack<'_>>, nom::error::Error<String>> {
    let lines = match lines(input).finish() {
        Ok((_rest, lines)) => lines,
        Err(e) => return Err(nom_error_to_owned(e)),
    };

    Ok(lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| (i + 1, line.strip_suffix('\r').unwrap_or(line)))
        .filter(|(_, items)| !items.is_empty())
        .map(|(n, items)| Rucksack::at_line(n, items))
        .collect())
}
