use std::ops::Add;

use thiserror::Error;

// An item's priority is its 1-based position here.
pub const ITEM_TYPES: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Priority(pub u64);

impl Add for Priority {
    type Output = Priority;

    fn add(self, other: Priority) -> Self::Output {
        Priority(self.0 + other.0)
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
#[error("{0:?} is not an item type")]
pub struct InvalidItem(pub char);

pub fn priority(item: char) -> Result<Priority, InvalidItem> {
    let value = match item {
        'a'..='z' => item as u64 - 'a' as u64 + 1,
        'A'..='Z' => item as u64 - 'A' as u64 + 27,
        _ => return Err(InvalidItem(item)),
    };

    Ok(Priority(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_item_types_order() {
        for (i, c) in ITEM_TYPES.chars().enumerate() {
            assert_eq!(priority(c), Ok(Priority(i as u64 + 1)), "item {:?}", c);
        }
    }

    #[test]
    fn test_bounds() {
        assert_eq!(priority('a'), Ok(Priority(1)));
        assert_eq!(priority('z'), Ok(Priority(26)));
        assert_eq!(priority('A'), Ok(Priority(27)));
        assert_eq!(priority('Z'), Ok(Priority(52)));
    }

    #[test]
    fn test_rejects_everything_else() {
        for c in (0u8..=255).map(char::from).filter(|c| !c.is_ascii_alphabetic()) {
            assert_eq!(priority(c), Err(InvalidItem(c)));
        }

        for c in ['é', 'ß', 'Ω', '\u{1F392}'] {
            assert_eq!(priority(c), Err(InvalidItem(c)));
        }
    }

    #[test]
    fn test_unique() {
        let mut seen = [false; 52];

        for c in ITEM_TYPES.chars() {
            let Priority(p) = priority(c).unwrap();
            assert!((1..=52).contains(&p));
            assert!(!seen[p as usize - 1], "duplicate priority {}", p);
            seen[p as usize - 1] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }
}
