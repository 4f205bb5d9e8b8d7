//! Compound selectors.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::complex::SequenceMember;
use super::pseudo::{Pseudo, PseudoType};
use super::simple::SimpleSelector;
use super::specificity::Specificity;

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// Members are a set: order is kept for rendering but ignored by equality and
/// matching. On construction the compound indexes its selector-bearing
/// pseudo-classes by unprefixed name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "Vec<SimpleSelector>", into = "Vec<SimpleSelector>")]
pub struct SimpleSequence {
    members: Vec<SimpleSelector>,
    /// Unprefixed pseudo-class name to positions in `members`.
    selector_pseudo_classes: BTreeMap<String, Vec<usize>>,
}

impl SimpleSequence {
    /// Build a compound from its members.
    #[must_use]
    pub fn new(members: Vec<SimpleSelector>) -> Self {
        let mut selector_pseudo_classes: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (position, pseudo) in members
            .iter()
            .enumerate()
            .filter_map(|(position, member)| Some((position, member.as_pseudo()?)))
        {
            if pseudo.pseudo_type() == PseudoType::Class && pseudo.selector().is_some() {
                selector_pseudo_classes
                    .entry(pseudo.unprefixed_name().to_owned())
                    .or_default()
                    .push(position);
            }
        }

        Self {
            members,
            selector_pseudo_classes,
        }
    }

    /// The simple selectors in source order.
    #[must_use]
    pub fn members(&self) -> &[SimpleSelector] {
        &self.members
    }

    /// Whether the compound has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The type or universal selector of this compound, if any.
    #[must_use]
    pub fn base(&self) -> Option<&SimpleSelector> {
        self.members.iter().find(|member| member.is_base())
    }

    /// Members whose effective type is pseudo-element.
    pub fn pseudo_elements(&self) -> impl Iterator<Item = &SimpleSelector> {
        self.members.iter().filter(|member| member.is_pseudo_element())
    }

    /// Members that are neither the base nor a pseudo-element.
    pub fn rest(&self) -> impl Iterator<Item = &SimpleSelector> {
        self.members
            .iter()
            .filter(|member| !member.is_base() && !member.is_pseudo_element())
    }

    /// Pseudo-classes with a nested selector whose unprefixed name is `name`.
    pub fn selector_pseudo_classes<'a>(
        &'a self,
        name: &str,
    ) -> impl Iterator<Item = &'a Pseudo> + use<'a> {
        self.selector_pseudo_classes
            .get(name)
            .into_iter()
            .flatten()
            .filter_map(|&position| self.members[position].as_pseudo())
    }

    /// Every indexed pseudo-class, grouped by name.
    fn indexed_pseudo_classes(&self) -> impl Iterator<Item = &Pseudo> {
        self.selector_pseudo_classes
            .values()
            .flatten()
            .filter_map(|&position| self.members[position].as_pseudo())
    }

    /// Whether this compound matches every element `other` matches, given
    /// the sequence members `parents` that precede `other`.
    #[must_use]
    pub fn is_superselector(&self, other: &Self, parents: &[SequenceMember]) -> bool {
        let base_covers = match self.base() {
            None | Some(SimpleSelector::Universal) => true,
            Some(base) => other.base() == Some(base),
        };
        if !base_covers {
            return false;
        }

        let ours: Vec<_> = self.pseudo_elements().collect();
        let theirs: Vec<_> = other.pseudo_elements().collect();
        if !same_members(&ours, &theirs) {
            return false;
        }

        let plain_members_covered = self.rest().all(|member| {
            if member
                .as_pseudo()
                .is_some_and(|pseudo| pseudo.selector().is_some())
            {
                return true;
            }
            other.members.contains(member) || other.implies_through_alternatives(member)
        });
        if !plain_members_covered {
            return false;
        }

        self.indexed_pseudo_classes()
            .all(|pseudo| pseudo.is_superselector(other, parents))
    }

    /// Whether every alternative of some `:matches()` or column pseudo on this
    /// compound is a single compound containing `simple`, as `.foo` is implied
    /// by `:matches(.foo.bar, .foo.baz)`.
    fn implies_through_alternatives(&self, simple: &SimpleSelector) -> bool {
        self.members
            .iter()
            .filter_map(SimpleSelector::as_pseudo)
            .filter(|pseudo| {
                pseudo.pseudo_type() == PseudoType::Class
                    && pseudo.kind().restricts_to_alternatives()
            })
            .filter_map(Pseudo::selector)
            .any(|selector| {
                selector.members().iter().all(|alternative| {
                    alternative
                        .single_compound()
                        .is_some_and(|compound| compound.members.contains(simple))
                })
            })
    }

    /// Merge this compound with `other` into one that matches the elements
    /// both match. Returns `None` if no element can match both.
    #[must_use]
    pub fn unify(&self, other: &Self) -> Option<Self> {
        let members = self
            .members
            .iter()
            .try_fold(other.members.clone(), |unified, member| member.unify(&unified))?;
        Some(Self::new(members))
    }

    /// [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.members.iter().map(SimpleSelector::specificity).sum()
    }
}

fn same_members(ours: &[&SimpleSelector], theirs: &[&SimpleSelector]) -> bool {
    ours.iter().all(|member| theirs.contains(member))
        && theirs.iter().all(|member| ours.contains(member))
}

impl PartialEq for SimpleSequence {
    fn eq(&self, other: &Self) -> bool {
        self.members.iter().all(|member| other.members.contains(member))
            && other.members.iter().all(|member| self.members.contains(member))
    }
}

impl Eq for SimpleSequence {}

impl From<Vec<SimpleSelector>> for SimpleSequence {
    fn from(members: Vec<SimpleSelector>) -> Self {
        Self::new(members)
    }
}

impl From<SimpleSequence> for Vec<SimpleSelector> {
    fn from(compound: SimpleSequence) -> Self {
        compound.members
    }
}

impl FromIterator<SimpleSelector> for SimpleSequence {
    fn from_iter<I: IntoIterator<Item = SimpleSelector>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for SimpleSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for member in &self.members {
            write!(f, "{member}")?;
        }
        Ok(())
    }
}
