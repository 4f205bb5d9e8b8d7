//! Builders for selector ASTs used across the integration tests.
#![allow(dead_code)]

use quill_selector::{
    Combinator, CommaSequence, Pseudo, PseudoType, Sequence, SequenceMember, SimpleSelector,
    SimpleSequence,
};

pub fn tag(name: &str) -> SimpleSelector {
    SimpleSelector::tag(name)
}

pub fn id(name: &str) -> SimpleSelector {
    SimpleSelector::id(name)
}

pub fn class(name: &str) -> SimpleSelector {
    SimpleSelector::class(name)
}

pub fn compound(members: Vec<SimpleSelector>) -> SimpleSequence {
    SimpleSequence::new(members)
}

/// A sequence member holding a compound.
pub fn link(members: Vec<SimpleSelector>) -> SequenceMember {
    SequenceMember::Compound(compound(members))
}

pub fn child() -> SequenceMember {
    SequenceMember::Combinator(Combinator::Child)
}

pub fn next_sibling() -> SequenceMember {
    SequenceMember::Combinator(Combinator::NextSibling)
}

pub fn subsequent_sibling() -> SequenceMember {
    SequenceMember::Combinator(Combinator::SubsequentSibling)
}

pub fn sequence(members: Vec<SequenceMember>) -> Sequence {
    Sequence::new(members)
}

/// A selector list with a single compound alternative.
pub fn list_of(members: Vec<SimpleSelector>) -> CommaSequence {
    CommaSequence::from(Sequence::from(compound(members)))
}

/// A selector list whose alternatives are single compounds.
pub fn list_of_compounds(alternatives: Vec<Vec<SimpleSelector>>) -> CommaSequence {
    alternatives
        .into_iter()
        .map(|members| Sequence::from(compound(members)))
        .collect()
}

pub fn selector_pseudo(name: &str, selector: CommaSequence) -> SimpleSelector {
    SimpleSelector::Pseudo(Pseudo::with_selector(name, selector).unwrap())
}

pub fn not(selector: CommaSequence) -> SimpleSelector {
    selector_pseudo("not", selector)
}

pub fn matches(selector: CommaSequence) -> SimpleSelector {
    selector_pseudo("matches", selector)
}

pub fn current(selector: CommaSequence) -> SimpleSelector {
    selector_pseudo("current", selector)
}

pub fn nth_column(name: &str, arg: &str, selector: CommaSequence) -> SimpleSelector {
    SimpleSelector::Pseudo(
        Pseudo::new(PseudoType::Class, name, Some(arg.to_string()), Some(selector)).unwrap(),
    )
}

pub fn pseudo_class(name: &str) -> SimpleSelector {
    SimpleSelector::Pseudo(Pseudo::class(name).unwrap())
}

pub fn pseudo_element(name: &str) -> SimpleSelector {
    SimpleSelector::Pseudo(Pseudo::element(name).unwrap())
}

/// Unwrap the pseudo inside a simple selector built by one of the helpers.
pub fn as_pseudo(simple: &SimpleSelector) -> &Pseudo {
    simple.as_pseudo().unwrap()
}
