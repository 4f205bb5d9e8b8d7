//! Pseudo-class and pseudo-element selectors.
//!
//! Everything irregular about selector subsumption lives here: pseudo names
//! are normalized by stripping vendor prefixes, a handful of legacy
//! pseudo-elements written with single-colon syntax are reclassified, and the
//! selector-bearing pseudos (`:matches()`, `:not()`, `:current()`, the column
//! pseudos) each have their own superselector rule.

use std::fmt;

use quill_common::warning::warn_once;
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use super::SelectorError;
use super::complex::SequenceMember;
use super::compound::SimpleSequence;
use super::list::CommaSequence;
use super::simple::{SimpleSelector, unify_default};
use super::specificity::Specificity;

/// [CSS 2.1 § 5.12](https://www.w3.org/TR/CSS21/selector.html#pseudo-element-selectors)
///
/// Pseudo-elements that predate the `::` syntax. They are pseudo-elements no
/// matter how they are written.
const PSEUDO_CLASS_SYNTAX_ELEMENTS: [&str; 4] = ["after", "before", "first-line", "first-letter"];

/// How a pseudo selector is written: `:name` or `::name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PseudoType {
    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// "A pseudo-class is a simple selector that permits selection based on
    /// information that lies outside of the document tree."
    Class,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// "Pseudo-elements create abstractions about the document tree beyond
    /// those specified by the document language."
    Element,
}

/// The pseudo names with a dedicated subsumption rule.
///
/// Resolved once from the unprefixed name. Names are case-sensitive, like
/// every other name comparison in this crate, so `:NOT()` is ordinary. Every name without a dedicated rule
/// is [`PseudoKind::Ordinary`] and compares member-wise, so no pseudo name can
/// reach the superselector check unhandled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum PseudoKind {
    /// [§ 4.2 The Matches-any Pseudo-class](https://www.w3.org/TR/selectors-4/#matches)
    /// `:matches()` and its older spelling `:any()`.
    #[strum(serialize = "matches", serialize = "any")]
    Matches,

    /// [§ 4.3 The Negation Pseudo-class](https://www.w3.org/TR/selectors-4/#negation)
    Not,

    /// [§ 12.1 The Current-element Pseudo-class](https://www.w3.org/TR/selectors-4/#the-current-pseudo)
    Current,

    /// [§ 15.2 `:nth-column()`](https://www.w3.org/TR/selectors-4/#the-nth-col-pseudo)
    NthColumn,

    /// [§ 15.3 `:nth-last-column()`](https://www.w3.org/TR/selectors-4/#the-nth-last-col-pseudo)
    NthLastColumn,

    /// Any other pseudo-class or pseudo-element.
    #[strum(disabled)]
    Ordinary,
}

impl PseudoKind {
    /// Resolve the kind of an unprefixed pseudo name.
    #[must_use]
    pub fn of(unprefixed_name: &str) -> Self {
        unprefixed_name.parse().unwrap_or(Self::Ordinary)
    }

    /// Kinds that are meaningless without a nested selector and take no plain argument.
    const fn requires_selector(self) -> bool {
        matches!(self, Self::Matches | Self::Not | Self::Current)
    }

    /// Pseudos that restrict their element to one of their nested alternatives,
    /// so a selector shared by every alternative applies to the element itself.
    pub(crate) const fn restricts_to_alternatives(self) -> bool {
        matches!(self, Self::Matches | Self::NthColumn | Self::NthLastColumn)
    }
}

/// A pseudo-class or pseudo-element selector.
///
/// Immutable once constructed. The unprefixed name and the [`PseudoKind`] are
/// derived at construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PseudoRepr", into = "PseudoRepr")]
pub struct Pseudo {
    syntactic_type: PseudoType,
    name: String,
    unprefixed_name: String,
    kind: PseudoKind,
    arg: Option<String>,
    selector: Option<CommaSequence>,
}

impl Pseudo {
    /// Construct a pseudo selector.
    ///
    /// `arg` is the plain argument (`:lang(en)`), or, when `selector` is also
    /// given, the prefix written before the nested selector (the `2n+1 of` of
    /// `:nth-column(2n+1 of .cell)`).
    ///
    /// # Errors
    ///
    /// Returns a [`SelectorError`] if the name is empty, if `:matches()`,
    /// `:not()` or `:current()` lack a nested selector or carry a plain
    /// argument, if a column pseudo has a nested selector but no nth
    /// expression, or if the nested selector list is empty.
    pub fn new(
        syntactic_type: PseudoType,
        name: impl Into<String>,
        arg: Option<String>,
        selector: Option<CommaSequence>,
    ) -> Result<Self, SelectorError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SelectorError::EmptyName);
        }

        let unprefixed_name = strip_vendor_prefix(&name).to_owned();
        let kind = PseudoKind::of(&unprefixed_name);

        if selector.as_ref().is_some_and(CommaSequence::is_empty) {
            return Err(SelectorError::EmptySelectorList { name });
        }
        if kind.requires_selector() {
            if selector.is_none() {
                return Err(SelectorError::MissingSelector { name });
            }
            if arg.is_some() {
                return Err(SelectorError::UnexpectedArgument { name });
            }
        }
        if matches!(kind, PseudoKind::NthColumn | PseudoKind::NthLastColumn)
            && selector.is_some()
            && arg.as_deref().is_none_or(|prefix| prefix.trim().is_empty())
        {
            return Err(SelectorError::MissingArgument { name });
        }

        Ok(Self {
            syntactic_type,
            name,
            unprefixed_name,
            kind,
            arg,
            selector,
        })
    }

    /// A pseudo-class with no argument, such as `:hover`.
    ///
    /// # Errors
    ///
    /// See [`Pseudo::new`].
    pub fn class(name: impl Into<String>) -> Result<Self, SelectorError> {
        Self::new(PseudoType::Class, name, None, None)
    }

    /// A pseudo-element with no argument, such as `::selection`.
    ///
    /// # Errors
    ///
    /// See [`Pseudo::new`].
    pub fn element(name: impl Into<String>) -> Result<Self, SelectorError> {
        Self::new(PseudoType::Element, name, None, None)
    }

    /// A pseudo-class wrapping a selector list, such as `:not(.foo, .bar)`.
    ///
    /// # Errors
    ///
    /// See [`Pseudo::new`].
    pub fn with_selector(
        name: impl Into<String>,
        selector: CommaSequence,
    ) -> Result<Self, SelectorError> {
        Self::new(PseudoType::Class, name, None, Some(selector))
    }

    /// How the selector was written.
    #[must_use]
    pub const fn syntactic_type(&self) -> PseudoType {
        self.syntactic_type
    }

    /// The name as written, including any vendor prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name without its vendor prefix (`-moz-any` becomes `any`).
    #[must_use]
    pub fn unprefixed_name(&self) -> &str {
        &self.unprefixed_name
    }

    /// The subsumption rule this pseudo follows.
    #[must_use]
    pub const fn kind(&self) -> PseudoKind {
        self.kind
    }

    /// The plain argument, or the prefix before the nested selector.
    #[must_use]
    pub fn arg(&self) -> Option<&str> {
        self.arg.as_deref()
    }

    /// The nested selector list, if any.
    #[must_use]
    pub const fn selector(&self) -> Option<&CommaSequence> {
        self.selector.as_ref()
    }

    /// The effective type. `:before`, `:after`, `:first-line` and
    /// `:first-letter` are pseudo-elements even when written with one colon.
    #[must_use]
    pub fn pseudo_type(&self) -> PseudoType {
        if PSEUDO_CLASS_SYNTAX_ELEMENTS.contains(&self.unprefixed_name.as_str()) {
            PseudoType::Element
        } else {
            self.syntactic_type
        }
    }

    /// [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// Pseudo-classes weigh like classes and pseudo-elements like type
    /// selectors. The nested selector does not change the weight.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        match self.pseudo_type() {
            PseudoType::Class => Specificity::CLASS,
            PseudoType::Element => Specificity::ELEMENT,
        }
    }

    /// Unify this pseudo with the members of a compound selector.
    ///
    /// A compound can't be two different pseudo-elements at once, so a
    /// pseudo-element refuses to join a compound that already has another one.
    #[must_use]
    pub fn unify(&self, members: &[SimpleSelector]) -> Option<Vec<SimpleSelector>> {
        if self.pseudo_type() == PseudoType::Element
            && members
                .iter()
                .filter_map(SimpleSelector::as_pseudo)
                .any(|other| other.pseudo_type() == PseudoType::Element && !self.same_selector(other))
        {
            tracing::debug!(pseudo = %self, "refusing to unify two distinct pseudo-elements");
            return None;
        }
        Some(unify_default(&SimpleSelector::Pseudo(self.clone()), members))
    }

    /// Whether this pseudo matches every element `compound` matches.
    ///
    /// `parents` holds the sequence members that precede `compound`, which
    /// `:matches()` needs to compare its complex alternatives in context.
    #[must_use]
    pub fn is_superselector(&self, compound: &SimpleSequence, parents: &[SequenceMember]) -> bool {
        let Some(selector) = &self.selector else {
            return self.is_member_of(compound);
        };

        let verdict = match self.kind {
            PseudoKind::Matches => self.matches_is_superselector(selector, compound, parents),
            PseudoKind::Not => self.not_is_superselector(selector, compound),
            // `:current(X)` picks the innermost matching ancestor, so nesting a
            // broader selector changes which ancestor is meant.
            PseudoKind::Current => compound
                .selector_pseudo_classes(&self.unprefixed_name)
                .any(|other| other.name == self.name && other.selector() == Some(selector)),
            PseudoKind::NthColumn | PseudoKind::NthLastColumn => compound
                .selector_pseudo_classes(&self.unprefixed_name)
                .any(|other| {
                    other.name == self.name
                        && other.arg == self.arg
                        && other
                            .selector()
                            .is_some_and(|theirs| selector.is_superselector(theirs))
                }),
            PseudoKind::Ordinary => {
                warn_once(
                    "Selector",
                    &format!(
                        "no subsumption rule for :{}(); comparing structurally",
                        self.unprefixed_name
                    ),
                );
                self.is_member_of(compound)
            }
        };

        tracing::trace!(pseudo = %self, %compound, verdict, "pseudo superselector");
        verdict
    }

    /// `:matches(X, Y)` matches what X or Y matches. It subsumes another
    /// `:matches()` with a narrower alternative list, or any compound that
    /// one of its alternatives subsumes on its own.
    fn matches_is_superselector(
        &self,
        selector: &CommaSequence,
        compound: &SimpleSequence,
        parents: &[SequenceMember],
    ) -> bool {
        let structural = compound
            .selector_pseudo_classes(&self.unprefixed_name)
            .any(|other| {
                other
                    .selector()
                    .is_some_and(|theirs| selector.is_superselector(theirs))
            });
        if structural {
            return true;
        }

        let mut context = parents.to_vec();
        context.push(SequenceMember::Compound(compound.clone()));
        selector
            .members()
            .iter()
            .any(|alternative| alternative.is_superselector_of_members(&context))
    }

    /// `:not(S1, S2)` subsumes a compound when the compound rules out each Si:
    /// it names a different tag or id than Si's subject, or it carries a
    /// `:not(T)` where T subsumes Si.
    fn not_is_superselector(&self, selector: &CommaSequence, compound: &SimpleSequence) -> bool {
        selector.members().iter().all(|alternative| {
            compound.members().iter().any(|member| match member {
                SimpleSelector::Type(_) | SimpleSelector::Id(_) => {
                    alternative.last_compound().is_some_and(|subject| {
                        subject
                            .members()
                            .iter()
                            .any(|negated| excludes(member, negated))
                    })
                }
                SimpleSelector::Pseudo(other) => {
                    other.name == self.name
                        && other
                            .selector()
                            .is_some_and(|theirs| theirs.is_superselector_of_sequence(alternative))
                }
                SimpleSelector::Universal
                | SimpleSelector::Class(_)
                | SimpleSelector::Attribute(_)
                | SimpleSelector::Placeholder(_) => false,
            })
        })
    }

    fn is_member_of(&self, compound: &SimpleSequence) -> bool {
        compound
            .members()
            .iter()
            .any(|member| member.as_pseudo() == Some(self))
    }

    fn same_selector(&self, other: &Self) -> bool {
        self.name == other.name && self.arg == other.arg && self.selector == other.selector
    }
}

/// Whether an element carrying `present` can never match `negated`.
fn excludes(present: &SimpleSelector, negated: &SimpleSelector) -> bool {
    match (present, negated) {
        (SimpleSelector::Type(ours), SimpleSelector::Type(theirs))
        | (SimpleSelector::Id(ours), SimpleSelector::Id(theirs)) => ours != theirs,
        _ => false,
    }
}

/// Strip a leading vendor prefix such as `-moz-` or `-webkit-`.
fn strip_vendor_prefix(name: &str) -> &str {
    let Some(rest) = name.strip_prefix('-') else {
        return name;
    };
    match rest.find('-') {
        Some(end) if end > 0 && rest[..end].bytes().all(|b| b.is_ascii_alphanumeric()) => {
            &rest[end + 1..]
        }
        _ => name,
    }
}

impl PartialEq for Pseudo {
    fn eq(&self, other: &Self) -> bool {
        self.pseudo_type() == other.pseudo_type() && self.same_selector(other)
    }
}

impl Eq for Pseudo {}

impl fmt::Display for Pseudo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.syntactic_type {
            PseudoType::Class => ":",
            PseudoType::Element => "::",
        };
        write!(f, "{prefix}{}", self.name)?;
        if self.arg.is_none() && self.selector.is_none() {
            return Ok(());
        }

        f.write_str("(")?;
        if let Some(arg) = &self.arg {
            f.write_str(arg.trim())?;
            if self.selector.is_some() {
                f.write_str(" ")?;
            }
        }
        if let Some(selector) = &self.selector {
            write!(f, "{selector}")?;
        }
        f.write_str(")")
    }
}

/// Wire shape of a [`Pseudo`]; deserializing runs the construction checks.
#[derive(Serialize, Deserialize)]
struct PseudoRepr {
    #[serde(rename = "type")]
    syntactic_type: PseudoType,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    arg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    selector: Option<CommaSequence>,
}

impl TryFrom<PseudoRepr> for Pseudo {
    type Error = SelectorError;

    fn try_from(repr: PseudoRepr) -> Result<Self, Self::Error> {
        Self::new(repr.syntactic_type, repr.name, repr.arg, repr.selector)
    }
}

impl From<Pseudo> for PseudoRepr {
    fn from(pseudo: Pseudo) -> Self {
        Self {
            syntactic_type: pseudo.syntactic_type,
            name: pseudo.name,
            arg: pseudo.arg,
            selector: pseudo.selector,
        }
    }
}
