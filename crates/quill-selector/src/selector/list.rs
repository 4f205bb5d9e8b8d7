//! Selector lists.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::complex::Sequence;

/// [§ 4.1 Selector lists](https://www.w3.org/TR/selectors-4/#grouping)
///
/// "A comma-separated list of selectors represents the union of all elements
/// selected by each of the individual selectors in the list."
///
/// Equality treats the list as a set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommaSequence {
    members: Vec<Sequence>,
}

impl CommaSequence {
    /// Build a selector list from its alternatives.
    #[must_use]
    pub const fn new(members: Vec<Sequence>) -> Self {
        Self { members }
    }

    /// The alternatives in source order.
    #[must_use]
    pub fn members(&self) -> &[Sequence] {
        &self.members
    }

    /// Whether the list has no alternatives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether this list matches every element `other` matches: each of
    /// `other`'s alternatives must be covered by one of ours.
    #[must_use]
    pub fn is_superselector(&self, other: &Self) -> bool {
        let verdict = other
            .members
            .iter()
            .all(|theirs| self.is_superselector_of_sequence(theirs));
        tracing::trace!(ours = %self, theirs = %other, verdict, "selector list superselector");
        verdict
    }

    /// Whether one of our alternatives covers `sequence`.
    #[must_use]
    pub fn is_superselector_of_sequence(&self, sequence: &Sequence) -> bool {
        self.members
            .iter()
            .any(|ours| ours.is_superselector(sequence))
    }
}

impl PartialEq for CommaSequence {
    fn eq(&self, other: &Self) -> bool {
        self.members.iter().all(|member| other.members.contains(member))
            && other.members.iter().all(|member| self.members.contains(member))
    }
}

impl Eq for CommaSequence {}

impl From<Sequence> for CommaSequence {
    fn from(sequence: Sequence) -> Self {
        Self::new(vec![sequence])
    }
}

impl FromIterator<Sequence> for CommaSequence {
    fn from_iter<I: IntoIterator<Item = Sequence>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for CommaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, sequence) in self.members.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{sequence}")?;
        }
        Ok(())
    }
}
