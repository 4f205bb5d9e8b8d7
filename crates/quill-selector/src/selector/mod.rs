//! Selector AST and the subsumption relations over it.
//!
//! The AST follows [Selectors Level 4](https://www.w3.org/TR/selectors-4/):
//! simple selectors combine into compounds ([`SimpleSequence`]), compounds
//! into complex selectors ([`Sequence`]), and complex selectors into
//! selector lists ([`CommaSequence`]).
//!
//! Two questions are answered over that AST:
//! - **superselector**: does selector A match every element selector B
//!   matches? Asked at any level, it recurses down to the pseudo selectors,
//!   where the irregular rules live.
//! - **unification**: can two compounds be merged into one matching their
//!   intersection?
//!
//! Nodes are immutable after construction and every query is read-only, so
//! a shared AST can be queried from any number of threads.

mod complex;
mod compound;
mod list;
mod pseudo;
mod simple;
mod specificity;

pub use complex::{Combinator, Sequence, SequenceMember};
pub use compound::SimpleSequence;
pub use list::CommaSequence;
pub use pseudo::{Pseudo, PseudoKind, PseudoType};
pub use simple::{AttributeSelector, SimpleSelector};
pub use specificity::Specificity;

/// Errors raised when a pseudo selector is built with an invalid shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// The pseudo name is the empty string.
    #[error("pseudo selector has an empty name")]
    EmptyName,

    /// A selector-only pseudo such as `:not` has no nested selector.
    #[error("`:{name}()` requires a selector argument")]
    MissingSelector {
        /// The pseudo name as written.
        name: String,
    },

    /// A selector-only pseudo also carries a plain argument.
    #[error("`:{name}()` takes a selector, not a plain argument")]
    UnexpectedArgument {
        /// The pseudo name as written.
        name: String,
    },

    /// A column pseudo has a nested selector but no nth expression before it.
    #[error("`:{name}()` requires an nth expression before its selector")]
    MissingArgument {
        /// The pseudo name as written.
        name: String,
    },

    /// The nested selector list has no alternatives.
    #[error("`:{name}()` has an empty selector list")]
    EmptySelectorList {
        /// The pseudo name as written.
        name: String,
    },
}
