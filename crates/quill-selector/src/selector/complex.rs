//! Complex selectors: compounds joined by combinators.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use super::compound::SimpleSequence;
use super::specificity::Specificity;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// The descendant combinator is whitespace and has no variant: two adjacent
/// compounds in a [`Sequence`] are in a descendant relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Combinator {
    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A selector of the form 'A > B' represents an element B that is a
    /// direct child of element A."
    #[strum(serialize = ">")]
    #[serde(rename = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A selector of the form 'A + B' represents an element B that
    /// immediately follows element A, where A and B share the same parent."
    #[strum(serialize = "+")]
    #[serde(rename = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A selector of the form 'A ~ B' represents an element B that
    /// follows element A (not necessarily immediately), where A and B share the
    /// same parent."
    #[strum(serialize = "~")]
    #[serde(rename = "~")]
    SubsequentSibling,
}

/// One link of a [`Sequence`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SequenceMember {
    /// A compound selector.
    Compound(SimpleSequence),
    /// An explicit combinator between two compounds.
    Combinator(Combinator),
}

impl SequenceMember {
    /// The compound in this link, if it is one.
    #[must_use]
    pub const fn as_compound(&self) -> Option<&SimpleSequence> {
        match self {
            Self::Compound(compound) => Some(compound),
            Self::Combinator(_) => None,
        }
    }

    /// The combinator in this link, if it is one.
    #[must_use]
    pub const fn as_combinator(&self) -> Option<Combinator> {
        match self {
            Self::Compound(_) => None,
            Self::Combinator(combinator) => Some(*combinator),
        }
    }
}

impl From<SimpleSequence> for SequenceMember {
    fn from(compound: SimpleSequence) -> Self {
        Self::Compound(compound)
    }
}

impl From<Combinator> for SequenceMember {
    fn from(combinator: Combinator) -> Self {
        Self::Combinator(combinator)
    }
}

impl fmt::Display for SequenceMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(compound) => write!(f, "{compound}"),
            Self::Combinator(combinator) => write!(f, "{combinator}"),
        }
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// "A complex selector is a chain of one or more compound selectors separated
/// by combinators."
///
/// Example: `div.container > ul.nav li` is stored left to right as
/// ```text
/// [div.container] [>] [ul.nav] [li]
/// ```
/// A leading or trailing combinator is representable (nested rules produce
/// them) but makes the sequence incomparable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence {
    members: Vec<SequenceMember>,
}

impl Sequence {
    /// Build a sequence from its members, left to right.
    #[must_use]
    pub const fn new(members: Vec<SequenceMember>) -> Self {
        Self { members }
    }

    /// The members, left to right.
    #[must_use]
    pub fn members(&self) -> &[SequenceMember] {
        &self.members
    }

    /// The subject compound, unless the sequence ends with a combinator.
    #[must_use]
    pub fn last_compound(&self) -> Option<&SimpleSequence> {
        self.members.last().and_then(SequenceMember::as_compound)
    }

    /// The only member, if the sequence is a lone compound.
    #[must_use]
    pub fn single_compound(&self) -> Option<&SimpleSequence> {
        match self.members.as_slice() {
            [SequenceMember::Compound(compound)] => Some(compound),
            _ => None,
        }
    }

    /// Whether this sequence matches every element `other` matches.
    #[must_use]
    pub fn is_superselector(&self, other: &Self) -> bool {
        self.is_superselector_of_members(&other.members)
    }

    /// Compare against a raw member chain, for callers that assemble a
    /// context that isn't a standalone [`Sequence`].
    #[must_use]
    pub fn is_superselector_of_members(&self, others: &[SequenceMember]) -> bool {
        members_superselector(&self.members, others)
    }

    /// [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// Sum of the specificity of every compound in the chain.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.members
            .iter()
            .filter_map(SequenceMember::as_compound)
            .map(SimpleSequence::specificity)
            .sum()
    }
}

fn is_combinator(member: &SequenceMember) -> bool {
    matches!(member, SequenceMember::Combinator(_))
}

/// Chain-level superselector check.
///
/// Walks `ours` left to right, anchoring each of our compounds at the
/// leftmost compound of `theirs` it subsumes, then checks the combinators
/// that follow both anchors are compatible.
fn members_superselector(ours: &[SequenceMember], theirs: &[SequenceMember]) -> bool {
    let (Some(our_first), Some(our_last), Some(their_first), Some(their_last)) =
        (ours.first(), ours.last(), theirs.first(), theirs.last())
    else {
        return false;
    };
    if [our_first, our_last, their_first, their_last]
        .into_iter()
        .any(is_combinator)
    {
        return false;
    }

    // More complex selectors are never superselectors of less complex ones.
    if ours.len() > theirs.len() {
        return false;
    }

    let (SequenceMember::Compound(our_head), Some(their_subject)) =
        (our_first, their_last.as_compound())
    else {
        return false;
    };
    if ours.len() == 1 {
        return our_head.is_superselector(their_subject, &theirs[..theirs.len() - 1]);
    }

    // Our head can't anchor on their subject: the rest of ours would have
    // nothing left to match.
    let Some(anchor) = theirs[..theirs.len() - 1]
        .iter()
        .enumerate()
        .find_map(|(position, member)| {
            let compound = member.as_compound()?;
            our_head
                .is_superselector(compound, &theirs[..position])
                .then_some(position)
        })
    else {
        return false;
    };

    match (ours[1].as_combinator(), theirs[anchor + 1].as_combinator()) {
        (Some(our_combinator), Some(their_combinator)) => {
            // `.a ~ .b` covers `.a + .b`; every other pair must match exactly.
            let compatible = if our_combinator == Combinator::SubsequentSibling {
                their_combinator != Combinator::Child
            } else {
                our_combinator == their_combinator
            };
            if !compatible {
                return false;
            }
            // `.a > .c` doesn't cover `.a > .b > .c` or `.a > .b .c`, even
            // though `.c` covers `.b > .c` and `.b .c`.
            if ours.len() == 3 && theirs.len() > 3 {
                return false;
            }
            members_superselector(&ours[2..], &theirs[anchor + 2..])
        }
        (Some(_), None) => false,
        // A descendant covers a child, not a sibling.
        (None, Some(Combinator::Child)) => members_superselector(&ours[1..], &theirs[anchor + 2..]),
        (None, Some(_)) => false,
        (None, None) => members_superselector(&ours[1..], &theirs[anchor + 1..]),
    }
}

impl From<SimpleSequence> for Sequence {
    fn from(compound: SimpleSequence) -> Self {
        Self::new(vec![SequenceMember::Compound(compound)])
    }
}

impl FromIterator<SequenceMember> for Sequence {
    fn from_iter<I: IntoIterator<Item = SequenceMember>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, member) in self.members.iter().enumerate() {
            if position > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{member}")?;
        }
        Ok(())
    }
}
