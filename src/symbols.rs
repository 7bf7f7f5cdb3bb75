use std::fmt::{self, Display};

/// Marker that introduces the canonical (LaTeX) spelling of an operator.
pub const ESCAPE_MARKER: char = '\\';

/// A logical connective.
///
/// Besides the escaped spelling every operator has symbolic aliases (`<=>`, `=>`, `^`,
/// `|`, `&&`, `!`). The only reserved word is `not`; any other word is a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Iff,
    Implies,
    Xor,
    Or,
    And,
    Not,
}

/// Operators ordered from the loosest to the tightest binding.
///
/// The evaluator splits a formula at the first operator of the earliest level that
/// occurs outside of any parentheses.
pub const PRECEDENCE: [Operator; 6] = [
    Operator::Iff,
    Operator::Implies,
    Operator::Xor,
    Operator::Or,
    Operator::And,
    Operator::Not,
];

impl Operator {
    /// The escaped spelling, as written in LaTeX math mode.
    pub const fn canonical(self) -> &'static str {
        match self {
            Self::Iff => "\\iff",
            Self::Implies => "\\Rightarrow",
            Self::Xor => "\\oplus",
            Self::Or => "\\lor",
            Self::And => "\\land",
            Self::Not => "\\lnot",
        }
    }

    fn matches(self, s: &str) -> bool {
        s == self.canonical()
            || match self {
                Self::Iff => s == "<=>",
                Self::Implies => matches!(s, "=>" | "->"),
                Self::Xor => s == "^",
                Self::Or => matches!(s, "|" | "||"),
                Self::And => matches!(s, "&" | "&&"),
                Self::Not => matches!(s, "!" | "-" | "~" | "not"),
            }
    }

    pub fn from_token(s: &str) -> Option<Self> {
        PRECEDENCE.iter().copied().find(|op| op.matches(s))
    }

    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Not)
    }

    /// Combines the operand values. The left operand is ignored for negation.
    pub const fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Self::Iff => (!left || right) && (!right || left),
            Self::Implies => !left || right,
            Self::Xor => left != right,
            Self::Or => left || right,
            Self::And => left && right,
            Self::Not => !right,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn aliases_resolve_to_operators() {
        assert_eq!(Operator::from_token("\\Rightarrow"), Some(Operator::Implies));
        assert_eq!(Operator::from_token("=>"), Some(Operator::Implies));
        assert_eq!(Operator::from_token("&&"), Some(Operator::And));
        assert_eq!(Operator::from_token("not"), Some(Operator::Not));
        assert_eq!(Operator::from_token("\\oplus"), Some(Operator::Xor));
        assert_eq!(Operator::from_token("p"), None);
        assert_eq!(Operator::from_token("and"), None);
        assert_eq!(Operator::from_token("eq"), None);
        assert_eq!(Operator::from_token("\\foo"), None);
    }

    #[test]
    fn truth_functions() {
        assert!(Operator::Implies.apply(false, false));
        assert!(Operator::Implies.apply(false, true));
        assert!(!Operator::Implies.apply(true, false));
        assert!(Operator::Implies.apply(true, true));

        assert!(!Operator::Xor.apply(true, true));
        assert!(Operator::Xor.apply(true, false));

        assert!(!Operator::Iff.apply(false, true));
        assert!(!Operator::Iff.apply(true, false));
        assert!(Operator::Iff.apply(false, false));
        assert!(Operator::Iff.apply(true, true));

        assert!(Operator::Or.apply(false, true));
        assert!(!Operator::Or.apply(false, false));
        assert!(Operator::And.apply(true, true));
        assert!(!Operator::And.apply(true, false));

        assert!(Operator::Not.apply(true, false));
        assert!(!Operator::Not.apply(false, true));
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(Operator::And.to_string(), "\\land");
        assert_eq!(format!("{:>8}", Operator::Or), "    \\lor");
    }
}
