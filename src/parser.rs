use crate::error::{Error, Result};
use crate::symbols::{Operator, ESCAPE_MARKER};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::{self, Display};

lazy_static! {
    static ref GROUPING: Regex = Regex::new(r"[()]").expect("grouping pattern is valid");
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Operator(Operator),
    OpenParen,
    CloseParen,
    Name(String),
}

impl Token {
    fn from_word(word: &str) -> Self {
        match word {
            "(" => Self::OpenParen,
            ")" => Self::CloseParen,
            other => Operator::from_token(other)
                .map_or_else(|| Self::Name(other.to_string()), Self::Operator),
        }
    }

    /// True for operator tokens and for words carrying the escape marker.
    pub fn is_logical(&self) -> bool {
        match self {
            Self::Operator(_) => true,
            Self::Name(name) => name.contains(ESCAPE_MARKER),
            Self::OpenParen | Self::CloseParen => false,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operator(op) => Display::fmt(op, f),
            Self::OpenParen => f.pad("("),
            Self::CloseParen => f.pad(")"),
            Self::Name(name) => f.pad(name),
        }
    }
}

/// A tokenized header entry.
///
/// Tokens are produced once, by surrounding every grouping mark with whitespace and
/// splitting on whitespace. Parentheses are checked for balance at this point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    source: String,
    tokens: Vec<Token>,
}

impl Formula {
    pub fn parse(source: &str) -> Result<Self> {
        let tokens = tokenize(source);

        if tokens.is_empty() {
            return Err(Error::malformed(source, "empty formula"));
        }

        let mut depth = 0usize;
        for token in &tokens {
            match token {
                Token::OpenParen => depth += 1,
                Token::CloseParen => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or_else(|| Error::malformed(source, "unexpected ')'"))?;
                }
                _ => {}
            }
        }

        if depth > 0 {
            return Err(Error::malformed(source, "unclosed '('"));
        }

        Ok(Self {
            source: source.to_string(),
            tokens,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub const fn tokens(&self) -> &[Token] {
        self.tokens.as_slice()
    }

    /// An entry is atomic iff none of its tokens is logical.
    pub fn is_atomic(&self) -> bool {
        !self.tokens.iter().any(Token::is_logical)
    }
}

pub fn tokenize(source: &str) -> Vec<Token> {
    GROUPING
        .replace_all(source, " $0 ")
        .split_whitespace()
        .map(Token::from_word)
        .collect()
}

/// Spacing-independent spelling of `tokens`; operators use their canonical form.
pub(crate) fn normalize(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn name(s: &str) -> Token {
        Token::Name(s.to_string())
    }

    #[test]
    fn grouping_marks_are_split() {
        assert_eq!(
            tokenize("(p)"),
            vec![Token::OpenParen, name("p"), Token::CloseParen]
        );
        assert_eq!(tokenize("( p )"), tokenize("(p)"));
        assert_eq!(
            tokenize("(p\\land q)|(r)"),
            vec![
                Token::OpenParen,
                name("p\\land"),
                name("q"),
                Token::CloseParen,
                Token::Operator(Operator::Or),
                Token::OpenParen,
                name("r"),
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn classification() -> Result<()> {
        assert!(Formula::parse("p")?.is_atomic());
        assert!(Formula::parse("  p ")?.is_atomic());
        assert!(Formula::parse("(p)")?.is_atomic());
        assert!(!Formula::parse("p \\Rightarrow q")?.is_atomic());
        assert!(!Formula::parse("not p")?.is_atomic());
        assert!(!Formula::parse("p \\foo q")?.is_atomic());
        Ok(())
    }

    #[test]
    fn normalization_ignores_spacing_and_spelling() -> Result<()> {
        assert_eq!(
            normalize(Formula::parse("(p => q)")?.tokens()),
            normalize(Formula::parse("( p \\Rightarrow q )")?.tokens())
        );
        assert_eq!(normalize(&tokenize("p  &&  q")), "p \\land q");
        Ok(())
    }

    #[test]
    fn unbalanced_parentheses() {
        assert!(matches!(
            Formula::parse("(p \\land q"),
            Err(Error::MalformedFormula { .. })
        ));
        assert!(matches!(
            Formula::parse("p) \\land (q"),
            Err(Error::MalformedFormula { .. })
        ));
        assert!(matches!(
            Formula::parse("   "),
            Err(Error::MalformedFormula { .. })
        ));
    }
}
