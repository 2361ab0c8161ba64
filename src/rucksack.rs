use std::collections::HashSet;

// The first half of the items is the first compartment, the second half is the second.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Rucksack<'s> {
    line: Option<usize>,
    items: &'s str,
}

impl<'s> Rucksack<'s> {
    pub fn at_line(line: usize, items: &'s str) -> Rucksack<'s> {
        Rucksack {
            line: Some(line),
            items,
        }
    }

    pub fn items(&self) -> &'s str {
        self.items
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    // Odd lengths leave the extra item in the second compartment.
    pub fn compartments(&self) -> (&'s str, &'s str) {
        let half = self.items.chars().count() / 2;
        let mid = self
            .items
            .char_indices()
            .nth(half)
            .map_or(self.items.len(), |(i, _)| i);

        self.items.split_at(mid)
    }

    pub fn common_item(&self) -> Option<char> {
        let (first, second) = self.compartments();
        let second: HashSet<char> = second.chars().collect();

        // First match in the first compartment wins.
        first.chars().find(|c| second.contains(c))
    }

    pub fn badge(group: &[Rucksack<'_>]) -> Option<char> {
        let (head, rest) = group.split_first()?;
        let rest: Vec<HashSet<char>> = rest.iter().map(|r| r.items.chars().collect()).collect();

        head.items
            .chars()
            .find(|c| rest.iter().all(|items| items.contains(c)))
    }
}

impl<'s> From<&'s str> for Rucksack<'s> {
    fn from(items: &'s str) -> Rucksack<'s> {
        Rucksack { line: None, items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::priority::ITEM_TYPES;
    use crate::selftest::EXAMPLE;

    #[test]
    fn test_compartments_split_evenly() {
        let source = ITEM_TYPES.repeat(2);

        for len in (0..=source.len()).step_by(2) {
            let items = &source[..len];
            let (first, second) = Rucksack::from(items).compartments();

            assert_eq!(first.len(), len / 2);
            assert_eq!(second.len(), len / 2);
            assert_eq!(format!("{}{}", first, second), items);
        }
    }

    #[test]
    fn test_compartments_odd_length() {
        assert_eq!(Rucksack::from("abc").compartments(), ("a", "bc"));
        assert_eq!(Rucksack::from("x").compartments(), ("", "x"));
    }

    #[test]
    fn test_compartments_split_on_chars() {
        assert_eq!(Rucksack::from("éaßb").compartments(), ("éa", "ßb"));
    }

    #[test]
    fn test_common_item_example() {
        let found = EXAMPLE
            .iter()
            .map(|&s| Rucksack::from(s).common_item())
            .collect::<Vec<_>>();

        assert_eq!(
            found,
            vec![
                Some('p'),
                Some('L'),
                Some('P'),
                Some('v'),
                Some('t'),
                Some('s')
            ]
        );
    }

    #[test]
    fn test_common_item_first_match_wins() {
        assert_eq!(Rucksack::from("aabxya").common_item(), Some('a'));
        assert_eq!(Rucksack::from("baazab").common_item(), Some('b'));
        assert_eq!(Rucksack::from("xyzzyx").common_item(), Some('x'));
    }

    #[test]
    fn test_common_item_none() {
        assert_eq!(Rucksack::from("abcdef").common_item(), None);
        assert_eq!(Rucksack::from("").common_item(), None);
        assert_eq!(Rucksack::from("aabb").common_item(), None);
    }

    #[test]
    fn test_badge_example() {
        let rucksacks = EXAMPLE.iter().map(|&s| Rucksack::from(s)).collect::<Vec<_>>();

        assert_eq!(Rucksack::badge(&rucksacks[..3]), Some('r'));
        assert_eq!(Rucksack::badge(&rucksacks[3..]), Some('Z'));
    }

    #[test]
    fn test_badge_none() {
        let group = ["abc", "def", "abf"].map(Rucksack::from);
        assert_eq!(Rucksack::badge(&group), None);
        assert_eq!(Rucksack::badge(&[]), None);
    }
}
