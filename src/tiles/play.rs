use super::{Placement, RACK};
use std::iter::FromIterator;
use std::slice::Iter;
use tinyvec::TinyVec;

type Placements = TinyVec<[Placement; RACK]>;

/// The tiles proposed in one turn, sorted by (row, col).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Play(Placements);

impl Play {
    /// Create a play from `placements`, in any order.
    /// ## Example
    /// ```
    /// use scrabble_referee::{Placement, Play};
    /// let play = Play::new(&[Placement::new('o', 7, 8), Placement::new('n', 7, 7)]);
    /// assert_eq!(play.first().map(|p| p.letter), Some('n'));
    /// ```
    pub fn new(placements: &[Placement]) -> Play {
        placements.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Placement> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<&Placement> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Placement> {
        self.0.last()
    }
}

impl<P: Into<Placement>> FromIterator<P> for Play {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut placements: Placements = iter.into_iter().map(Into::into).collect();
        // the fields are public, so a placement may bypass `Placement::new`
        for p in placements.iter_mut() {
            p.letter = p.letter.to_ascii_lowercase();
        }
        placements.sort_by_key(Placement::position);
        Play(placements)
    }
}

impl<'a> IntoIterator for &'a Play {
    type Item = &'a Placement;
    type IntoIter = Iter<'a, Placement>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
