//! Selector subsumption and unification for the Quill style-sheet compiler.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector AST** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, universal, ID, class, attribute, placeholder, and pseudo selectors
//!   - Compound selectors, complex selectors with combinators, selector lists
//!   - JSON interchange via serde
//!
//! - **Superselector relation**
//!   - Set containment for ordinary simple selectors
//!   - Combinator-aware comparison of complex selectors
//!   - Dedicated rules for `:matches()`/`:any()`, `:not()`, `:current()`,
//!     `:nth-column()` and `:nth-last-column()`
//!   - Vendor-prefix normalization and legacy pseudo-element reclassification
//!
//! - **Unification** of compound selectors, refusing to merge two distinct
//!   pseudo-elements
//!
//! - **Specificity** ([§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!   per node, summed over compounds and complex selectors
//!
//! # Not Implemented
//!
//! - Parsing selector text (the AST is built by the caller or loaded from JSON)
//! - Matching selectors against a document
//! - Generalizing nth expressions (`:nth-column(2n)` vs `:nth-column(4n)`)
//! - Unifying complex selectors (the `@extend` weave)

/// Selector AST, superselector relation, and unification.
pub mod selector;

pub use selector::{
    AttributeSelector, Combinator, CommaSequence, Pseudo, PseudoKind, PseudoType, SelectorError,
    Sequence, SequenceMember, SimpleSelector, SimpleSequence, Specificity,
};
