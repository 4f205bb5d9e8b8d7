//! Integration tests for the superselector relation on compounds, complex
//! selectors, and selector lists.

mod common;

use common::*;
use quill_selector::{
    AttributeSelector, Combinator, CommaSequence, Pseudo, PseudoKind, PseudoType, Sequence,
    SequenceMember, SimpleSelector, SimpleSequence, Specificity,
};

fn single(members: Vec<SimpleSelector>) -> Sequence {
    Sequence::from(compound(members))
}

// Compounds
// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)

#[test]
fn test_fewer_classes_is_broader() {
    let foo = compound(vec![class("foo")]);
    let foo_bar = compound(vec![class("foo"), class("bar")]);
    assert!(foo.is_superselector(&foo_bar, &[]));
    assert!(!foo_bar.is_superselector(&foo, &[]));
}

#[test]
fn test_base_must_match() {
    let a = compound(vec![tag("a"), class("x")]);
    let p = compound(vec![tag("p"), class("x")]);
    let bare = compound(vec![class("x")]);
    assert!(!a.is_superselector(&p, &[]));
    assert!(!a.is_superselector(&bare, &[]));
    assert!(bare.is_superselector(&a, &[]));
}

#[test]
fn test_universal_base_covers_any_base() {
    let universal = compound(vec![SimpleSelector::Universal, class("x")]);
    let a = compound(vec![tag("a"), class("x")]);
    assert!(universal.is_superselector(&a, &[]));
}

#[test]
fn test_pseudo_elements_must_be_identical() {
    let before = compound(vec![class("x"), pseudo_element("before")]);
    let plain = compound(vec![class("x")]);
    let legacy_before = compound(vec![class("x"), class("y"), pseudo_class("before")]);
    assert!(!plain.is_superselector(&before, &[]));
    assert!(!before.is_superselector(&plain, &[]));
    assert!(before.is_superselector(&legacy_before, &[]));
}

#[test]
fn test_attributes_and_placeholders_compare_member_wise() {
    let href = SimpleSelector::Attribute(AttributeSelector::Exists("href".to_string()));
    let ours = compound(vec![href.clone(), SimpleSelector::placeholder("button")]);
    let theirs = compound(vec![
        tag("a"),
        href,
        SimpleSelector::placeholder("button"),
        class("primary"),
    ]);
    assert!(ours.is_superselector(&theirs, &[]));
    assert!(!theirs.is_superselector(&ours, &[]));
}

#[test]
fn test_class_implied_by_every_matches_alternative() {
    let foo = single(vec![class("foo")]);
    let narrowed = single(vec![matches(list_of_compounds(vec![
        vec![class("foo"), class("bar")],
        vec![class("foo"), class("baz")],
    ]))]);
    assert!(foo.is_superselector(&narrowed));

    let mixed = single(vec![matches(list_of_compounds(vec![
        vec![class("foo")],
        vec![class("bar")],
    ]))]);
    assert!(!foo.is_superselector(&mixed));
}

#[test]
fn test_class_is_not_implied_through_negation() {
    let foo = single(vec![class("foo")]);
    let negated = single(vec![not(list_of(vec![class("bar")]))]);
    assert!(!foo.is_superselector(&negated));
}

#[test]
fn test_class_implied_by_nth_column_alternatives() {
    let cell = single(vec![class("cell")]);
    let column = single(vec![nth_column(
        "nth-column",
        "2n of",
        list_of(vec![class("cell"), class("wide")]),
    )]);
    assert!(cell.is_superselector(&column));
}

#[test]
fn test_compound_with_pseudo_delegates_to_the_pseudo() {
    let ours = single(vec![class("x"), not(list_of(vec![tag("a")]))]);
    let theirs = single(vec![tag("p"), class("x")]);
    assert!(ours.is_superselector(&theirs));

    let excluded = single(vec![tag("a"), class("x")]);
    assert!(!ours.is_superselector(&excluded));
}

// Complex selectors
// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

#[test]
fn test_descendant_covers_child() {
    let descendant = sequence(vec![link(vec![class("a")]), link(vec![class("b")])]);
    let child_of = sequence(vec![link(vec![class("a")]), child(), link(vec![class("b")])]);
    assert!(descendant.is_superselector(&child_of));
    assert!(!child_of.is_superselector(&descendant));
}

#[test]
fn test_subsequent_sibling_covers_next_sibling() {
    let subsequent = sequence(vec![
        link(vec![class("a")]),
        subsequent_sibling(),
        link(vec![class("b")]),
    ]);
    let next = sequence(vec![
        link(vec![class("a")]),
        next_sibling(),
        link(vec![class("b")]),
    ]);
    assert!(subsequent.is_superselector(&next));
    assert!(!next.is_superselector(&subsequent));
}

#[test]
fn test_subsequent_sibling_does_not_cover_child() {
    let subsequent = sequence(vec![
        link(vec![class("a")]),
        subsequent_sibling(),
        link(vec![class("b")]),
    ]);
    let child_of = sequence(vec![link(vec![class("a")]), child(), link(vec![class("b")])]);
    assert!(!subsequent.is_superselector(&child_of));
}

#[test]
fn test_descendant_does_not_cover_siblings() {
    let descendant = sequence(vec![link(vec![class("a")]), link(vec![class("b")])]);
    let sibling = sequence(vec![
        link(vec![class("a")]),
        next_sibling(),
        link(vec![class("b")]),
    ]);
    assert!(!descendant.is_superselector(&sibling));
}

#[test]
fn test_child_does_not_cover_a_longer_chain() {
    let short = sequence(vec![link(vec![class("a")]), child(), link(vec![class("c")])]);
    let long = sequence(vec![
        link(vec![class("a")]),
        child(),
        link(vec![class("b")]),
        child(),
        link(vec![class("c")]),
    ]);
    assert!(!short.is_superselector(&long));
}

#[test]
fn test_descendant_skips_intermediate_ancestors() {
    let ours = sequence(vec![link(vec![class("a")]), link(vec![class("c")])]);
    let theirs = sequence(vec![
        link(vec![class("a")]),
        child(),
        link(vec![class("b")]),
        link(vec![class("c")]),
    ]);
    assert!(ours.is_superselector(&theirs));
}

#[test]
fn test_anchor_may_sit_deeper_in_their_chain() {
    let ours = sequence(vec![link(vec![class("a")]), link(vec![class("b")])]);
    let theirs = sequence(vec![
        link(vec![tag("main")]),
        link(vec![class("a"), class("x")]),
        link(vec![class("b")]),
    ]);
    assert!(ours.is_superselector(&theirs));
}

#[test]
fn test_single_compound_covers_its_subject_anywhere() {
    let b = single(vec![class("b")]);
    let nested = sequence(vec![
        link(vec![class("a")]),
        child(),
        link(vec![class("b"), class("c")]),
    ]);
    assert!(b.is_superselector(&nested));
    assert!(!nested.is_superselector(&b));
}

#[test]
fn test_longer_sequence_is_never_broader() {
    let long = sequence(vec![link(vec![class("a")]), link(vec![class("b")])]);
    let short = single(vec![class("a"), class("b")]);
    assert!(!long.is_superselector(&short));
}

#[test]
fn test_matches_with_complex_alternative_in_context() {
    let ours = single(vec![matches(CommaSequence::from(sequence(vec![
        link(vec![class("a")]),
        link(vec![class("b")]),
    ])))]);
    let theirs = sequence(vec![link(vec![class("a")]), child(), link(vec![class("b")])]);
    assert!(ours.is_superselector(&theirs));

    let unrelated = sequence(vec![link(vec![class("z")]), child(), link(vec![class("b")])]);
    assert!(!ours.is_superselector(&unrelated));
}

#[test]
fn test_well_formed_sequences_are_reflexive() {
    let sequences = [
        single(vec![tag("a"), id("x"), class("y"), pseudo_class("hover")]),
        sequence(vec![
            link(vec![tag("nav")]),
            child(),
            link(vec![class("item")]),
            next_sibling(),
            link(vec![class("item"), not(list_of(vec![class("active")]))]),
        ]),
        single(vec![
            class("x"),
            matches(list_of_compounds(vec![vec![class("a")], vec![class("b")]])),
            current(list_of(vec![class("c")])),
        ]),
        sequence(vec![
            link(vec![class("a")]),
            subsequent_sibling(),
            link(vec![class("b"), pseudo_element("after")]),
        ]),
    ];
    for selector in &sequences {
        assert!(selector.is_superselector(selector), "{selector}");
    }
}

#[test]
fn test_combinator_rendering() {
    let rendered = sequence(vec![
        link(vec![tag("ul")]),
        child(),
        link(vec![tag("li")]),
        next_sibling(),
        link(vec![tag("li")]),
        subsequent_sibling(),
        link(vec![class("last")]),
        link(vec![tag("a")]),
    ]);
    assert_eq!(rendered.to_string(), "ul > li + li ~ .last a");
    assert_eq!(Combinator::SubsequentSibling.to_string(), "~");
}

#[test]
fn test_sequence_specificity() {
    let selector = sequence(vec![
        link(vec![tag("ul"), id("nav")]),
        child(),
        link(vec![tag("li"), class("item"), pseudo_class("hover")]),
    ]);
    assert_eq!(selector.specificity(), Specificity(1, 2, 2));
}

// Selector lists
// [§ 4.1 Selector lists](https://www.w3.org/TR/selectors-4/#grouping)

#[test]
fn test_list_covers_each_alternative() {
    let ours = list_of_compounds(vec![vec![class("a")], vec![class("b")]]);
    let theirs = list_of_compounds(vec![
        vec![class("a"), class("x")],
        vec![class("b"), class("y")],
    ]);
    assert!(ours.is_superselector(&theirs));
    assert!(!theirs.is_superselector(&ours));
}

#[test]
fn test_list_needs_every_alternative_covered() {
    let ours = list_of(vec![class("a")]);
    let theirs = list_of_compounds(vec![vec![class("a")], vec![class("b")]]);
    assert!(!ours.is_superselector(&theirs));
    assert!(theirs.is_superselector(&ours));
}

#[test]
fn test_list_of_sequence() {
    let ours = list_of_compounds(vec![vec![class("a")], vec![class("b")]]);
    let nested = sequence(vec![link(vec![tag("main")]), link(vec![class("b")])]);
    assert!(ours.is_superselector_of_sequence(&nested));
    assert!(!ours.is_superselector_of_sequence(&single(vec![class("c")])));
}

#[test]
fn test_list_equality_is_order_insensitive() {
    let ab = list_of_compounds(vec![vec![class("a")], vec![class("b")]]);
    let ba = list_of_compounds(vec![vec![class("b")], vec![class("a")]]);
    assert_eq!(ab, ba);
    assert_eq!(ab.to_string(), ".a, .b");
}

#[test]
fn test_ast_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SimpleSelector>();
    assert_send_sync::<AttributeSelector>();
    assert_send_sync::<Pseudo>();
    assert_send_sync::<PseudoKind>();
    assert_send_sync::<PseudoType>();
    assert_send_sync::<SimpleSequence>();
    assert_send_sync::<SequenceMember>();
    assert_send_sync::<Sequence>();
    assert_send_sync::<CommaSequence>();
}

#[test]
fn test_queries_run_across_threads() {
    let ours = list_of(vec![class("a")]);
    let theirs = list_of(vec![class("a"), class("b")]);
    let verdicts: Vec<bool> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| ours.is_superselector(&theirs)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });
    assert!(verdicts.into_iter().all(|verdict| verdict));
}
