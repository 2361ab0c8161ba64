use std::fmt;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::priority::{priority, InvalidItem, Priority};
use crate::rucksack::Rucksack;

const GROUP_SIZE: usize = 3;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub const ALL: [Part; 2] = [Part::One, Part::Two];

    pub fn solve(self, rucksacks: &[Rucksack<'_>]) -> Result<u64> {
        match self {
            Part::One => sum_priorities(rucksacks),
            Part::Two => sum_badge_priorities(rucksacks),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::One => write!(f, "one"),
            Part::Two => write!(f, "two"),
        }
    }
}

pub fn sum_priorities(rucksacks: &[Rucksack<'_>]) -> Result<u64> {
    let total = rucksacks
        .iter()
        .enumerate()
        .try_fold(Priority::default(), |total, (i, r)| {
            let n = i + 1;
            let line = r.line().unwrap_or(n);
            let item = r
                .common_item()
                .ok_or(Error::NoCommonItem { rucksack: n, line })?;
            let p = priority(item).map_err(|InvalidItem(item)| Error::InvalidItemType {
                rucksack: n,
                line,
                item,
            })?;

            debug!(rucksack = n, line, %item, priority = p.0, "common item");
            Ok::<_, Error>(total + p)
        })?;

    info!(rucksacks = rucksacks.len(), total = total.0, "summed priorities");
    Ok(total.0)
}

pub fn sum_badge_priorities(rucksacks: &[Rucksack<'_>]) -> Result<u64> {
    let total = rucksacks
        .chunks(GROUP_SIZE)
        .enumerate()
        .try_fold(Priority::default(), |total, (i, group)| {
            let n = i + 1;

            if group.len() != GROUP_SIZE {
                return Err(Error::IncompleteGroup {
                    group: n,
                    len: group.len(),
                });
            }

            let badge = Rucksack::badge(group).ok_or(Error::NoCommonBadge { group: n })?;
            // Badge items come from the group's first rucksack.
            let first = i * GROUP_SIZE + 1;
            let p = priority(badge).map_err(|InvalidItem(item)| Error::InvalidItemType {
                rucksack: first,
                line: group[0].line().unwrap_or(first),
                item,
            })?;

            debug!(group = n, %badge, priority = p.0, "badge");
            Ok::<_, Error>(total + p)
        })?;

    info!(groups = rucksacks.len() / GROUP_SIZE, total = total.0, "summed badge priorities");
    Ok(total.0)
}
