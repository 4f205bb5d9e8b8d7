//! Simple selectors and their default unification rules.

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

use super::pseudo::{Pseudo, PseudoType};
use super::specificity::Specificity;

/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// A simple selector is a single condition on an element. The set of kinds is
/// closed: every comparison in this crate matches on it exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimpleSelector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type,
    /// and represents an instance of that element type in the document tree."
    ///
    /// Examples: `div`, `p`, `h1`
    Type(String),

    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
    /// "The universal selector is a single asterisk (*) and represents the
    /// qualified name of any element type."
    Universal,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#nav-bar`
    Id(String),

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.highlight`, `.btn`
    Class(String),

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[type="text"]`, `[lang|="en"]`
    Attribute(AttributeSelector),

    /// A placeholder selector (`%name`). It only exists to be extended and
    /// never appears in emitted CSS, but it takes part in subsumption like a
    /// class.
    Placeholder(String),

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `:hover`, `::before`, `:not(.foo)`, `:nth-column(2n+1 of .cell)`
    Pseudo(Pseudo),
}

/// Attribute selectors per [§ 6.4](https://www.w3.org/TR/selectors-4/#attribute-selectors)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeSelector {
    /// `[attr]`: "Represents an element with the att attribute"
    Exists(String),

    /// `[attr=value]`: the attribute value is exactly `value`.
    Equals(String, String),

    /// `[attr~=value]`: one whitespace-separated word of the value is `value`.
    Includes(String, String),

    /// `[attr|=value]`: the value is `value` or starts with `value-`.
    DashMatch(String, String),

    /// `[attr^=value]`: the value starts with `value`.
    PrefixMatch(String, String),

    /// `[attr$=value]`: the value ends with `value`.
    SuffixMatch(String, String),

    /// `[attr*=value]`: the value contains `value`.
    SubstringMatch(String, String),
}

impl SimpleSelector {
    /// A type selector such as `div`.
    #[must_use]
    pub fn tag(name: impl Into<String>) -> Self {
        Self::Type(name.into())
    }

    /// An ID selector such as `#main`.
    #[must_use]
    pub fn id(name: impl Into<String>) -> Self {
        Self::Id(name.into())
    }

    /// A class selector such as `.foo`.
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(name.into())
    }

    /// A placeholder selector such as `%button-base`.
    #[must_use]
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::Placeholder(name.into())
    }

    /// The pseudo selector inside this simple selector, if any.
    #[must_use]
    pub const fn as_pseudo(&self) -> Option<&Pseudo> {
        match self {
            Self::Pseudo(pseudo) => Some(pseudo),
            _ => None,
        }
    }

    /// Whether this is a pseudo selector whose effective type is `element`.
    #[must_use]
    pub fn is_pseudo_element(&self) -> bool {
        self.as_pseudo()
            .is_some_and(|pseudo| pseudo.pseudo_type() == PseudoType::Element)
    }

    /// Whether this is a type or universal selector, the "base" of a compound.
    #[must_use]
    pub const fn is_base(&self) -> bool {
        matches!(self, Self::Type(_) | Self::Universal)
    }

    /// [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// This node's own contribution to specificity.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        match self {
            // "count the number of ID selectors in the selector (= A)"
            Self::Id(_) => Specificity::ID,

            // "count the number of class selectors, attributes selectors,
            // and pseudo-classes in the selector (= B)"
            Self::Class(_) | Self::Attribute(_) | Self::Placeholder(_) => Specificity::CLASS,

            // "count the number of type selectors and pseudo-elements
            // in the selector (= C)"
            Self::Type(_) => Specificity::ELEMENT,

            // "ignore the universal selector"
            Self::Universal => Specificity::default(),

            Self::Pseudo(pseudo) => pseudo.specificity(),
        }
    }

    /// Unify this selector with the members of a compound selector.
    ///
    /// Returns the members of a compound that matches exactly the elements
    /// matched by both `self` and every selector in `members`, or `None` if
    /// no element can match both.
    #[must_use]
    pub fn unify(&self, members: &[Self]) -> Option<Vec<Self>> {
        match self {
            Self::Universal => Some(unify_universal(members)),
            Self::Type(name) => unify_type(name, members),
            Self::Id(id) => {
                // An element has at most one ID.
                if members
                    .iter()
                    .any(|member| matches!(member, Self::Id(other) if other != id))
                {
                    return None;
                }
                Some(unify_default(self, members))
            }
            Self::Pseudo(pseudo) => pseudo.unify(members),
            Self::Class(_) | Self::Attribute(_) | Self::Placeholder(_) => {
                Some(unify_default(self, members))
            }
        }
    }
}

/// Default unification: set union that keeps pseudos at the end.
///
/// A non-pseudo goes in front of the first pseudo, as does any pseudo joining
/// a compound that ends in a pseudo-element. Other pseudos are appended.
pub(crate) fn unify_default(
    simple: &SimpleSelector,
    members: &[SimpleSelector],
) -> Vec<SimpleSelector> {
    if let [SimpleSelector::Universal] = members {
        return vec![simple.clone()];
    }
    if members.contains(simple) {
        return members.to_vec();
    }

    let before_pseudos = simple.as_pseudo().is_none()
        || members.last().is_some_and(SimpleSelector::is_pseudo_element);
    let position = if before_pseudos {
        members.iter().position(|member| member.as_pseudo().is_some())
    } else {
        None
    };

    let mut unified = members.to_vec();
    match position {
        Some(position) => unified.insert(position, simple.clone()),
        None => unified.push(simple.clone()),
    }
    unified
}

/// `*` adds no constraint, so it survives only in an otherwise empty compound.
fn unify_universal(members: &[SimpleSelector]) -> Vec<SimpleSelector> {
    if members.is_empty() {
        vec![SimpleSelector::Universal]
    } else {
        members.to_vec()
    }
}

/// A compound holds its base anywhere, so every member is checked. The type
/// takes the place of any `*` and goes first.
fn unify_type(name: &str, members: &[SimpleSelector]) -> Option<Vec<SimpleSelector>> {
    let mut same_type = false;
    for member in members {
        if let SimpleSelector::Type(other) = member {
            if other != name {
                return None;
            }
            same_type = true;
        }
    }
    if same_type {
        return Some(members.to_vec());
    }

    let mut unified = Vec::with_capacity(members.len() + 1);
    unified.push(SimpleSelector::tag(name));
    unified.extend(
        members
            .iter()
            .filter(|member| !matches!(member, SimpleSelector::Universal))
            .cloned(),
    );
    Some(unified)
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(name) => f.write_str(name),
            Self::Universal => f.write_str("*"),
            Self::Id(name) => write!(f, "#{name}"),
            Self::Class(name) => write!(f, ".{name}"),
            Self::Attribute(attribute) => fmt::Display::fmt(attribute, f),
            Self::Placeholder(name) => write!(f, "%{name}"),
            Self::Pseudo(pseudo) => fmt::Display::fmt(pseudo, f),
        }
    }
}

impl fmt::Display for AttributeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, operator, value) = match self {
            Self::Exists(name) => return write!(f, "[{name}]"),
            Self::Equals(name, value) => (name, "=", value),
            Self::Includes(name, value) => (name, "~=", value),
            Self::DashMatch(name, value) => (name, "|=", value),
            Self::PrefixMatch(name, value) => (name, "^=", value),
            Self::SuffixMatch(name, value) => (name, "$=", value),
            Self::SubstringMatch(name, value) => (name, "*=", value),
        };
        write!(f, "[{name}{operator}\"")?;
        for ch in value.chars() {
            if matches!(ch, '"' | '\\') {
                f.write_char('\\')?;
            }
            f.write_char(ch)?;
        }
        f.write_str("\"]")
    }
}
