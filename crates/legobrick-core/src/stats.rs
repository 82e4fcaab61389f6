//! Aggregation over small in-memory brick collections.

use serde::Serialize;

use crate::brick::Brick;

pub fn total_studs(bricks: &[Brick]) -> i64 {
    bricks.iter().map(Brick::studs).sum()
}

/// Split `candidates` into those `target` can connect to and those it
/// cannot. Order within each side is preserved.
pub fn partition_compatible<'a>(
    target: &Brick,
    candidates: &'a [Brick],
) -> (Vec<&'a Brick>, Vec<&'a Brick>) {
    candidates.iter().partition(|b| target.can_connect_to(b))
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Occurrence count per color, remembering first-seen order.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ColorTally {
    entries: Vec<(String, usize)>,
}

impl ColorTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bricks<'a>(bricks: impl IntoIterator<Item = &'a Brick>) -> Self {
        let mut tally = Self::new();
        for brick in bricks {
            tally.record(brick.color());
        }
        tally
    }

    pub fn record(&mut self, color: &str) {
        match self.entries.iter_mut().find(|(c, _)| c == color) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((color.to_string(), 1)),
        }
    }

    pub fn count(&self, color: &str) -> usize {
        self.entries
            .iter()
            .find(|(c, _)| c == color)
            .map_or(0, |(_, n)| *n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by color.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut out: Vec<(&str, usize)> =
            self.entries.iter().map(|(c, n)| (c.as_str(), *n)).collect();
        out.sort_by(|a, b| a.0.cmp(b.0));
        out
    }

    /// Highest count; among ties, the color recorded first.
    pub fn most_common(&self) -> Option<(&str, usize)> {
        self.entries
            .iter()
            .fold(None, |best: Option<&(String, usize)>, entry| match best {
                Some(b) if b.1 >= entry.1 => Some(b),
                _ => Some(entry),
            })
            .map(|(c, n)| (c.as_str(), *n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_lowercases_tail() {
        assert_eq!(capitalize("blue"), "Blue");
        assert_eq!(capitalize("nEON-Octarine"), "Neon-octarine");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("ä"), "Ä");
    }

    #[test]
    fn empty_tally() {
        let tally = ColorTally::new();
        assert!(tally.is_empty());
        assert_eq!(tally.most_common(), None);
        assert!(tally.sorted().is_empty());
    }
}
