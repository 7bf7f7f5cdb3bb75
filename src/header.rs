use crate::error::{Error, Result};
use crate::parser::{Formula, Token};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    formula: Formula,
    atomic: bool,
}

impl HeaderEntry {
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    pub fn name(&self) -> &str {
        self.formula.source()
    }

    pub const fn is_atomic(&self) -> bool {
        self.atomic
    }
}

/// The ordered, duplicate-free list of table columns.
///
/// Entries are tokenized and classified once, on construction. Two entries that only
/// differ in spacing or operator spelling are considered duplicates, since a formula
/// could not tell them apart when referring to either of them.
#[derive(Debug, Clone)]
pub struct Header {
    entries: Vec<HeaderEntry>,
    index: FxHashMap<Vec<Token>, usize>,
}

impl Header {
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut header = Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        };

        for entry in entries {
            let formula = Formula::parse(entry.as_ref())?;
            let position = header.entries.len();

            if header
                .index
                .insert(formula.tokens().to_vec(), position)
                .is_some()
            {
                return Err(Error::DuplicateHeaderEntry {
                    entry: formula.source().to_string(),
                });
            }

            header.entries.push(HeaderEntry {
                atomic: formula.is_atomic(),
                formula,
            });
        }

        Ok(header)
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HeaderEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(HeaderEntry::name)
    }

    pub fn atomic_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_atomic()).count()
    }

    /// Column of the entry spelled by `tokens`, if any.
    pub fn position(&self, tokens: &[Token]) -> Option<usize> {
        self.index.get(tokens).copied()
    }
}

impl PartialEq for Header {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Header {}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::parser::tokenize;

    #[test]
    fn classifies_entries() -> Result<()> {
        let header = Header::new(["p", "q", "p \\land q", "\\lnot p"])?;

        assert_eq!(header.len(), 4);
        assert_eq!(header.atomic_count(), 2);
        assert_eq!(
            header.entries().iter().map(HeaderEntry::is_atomic).collect::<Vec<_>>(),
            vec![true, true, false, false]
        );
        assert_eq!(
            header.names().collect::<Vec<_>>(),
            vec!["p", "q", "p \\land q", "\\lnot p"]
        );
        Ok(())
    }

    #[test]
    fn positions_are_spacing_independent() -> Result<()> {
        let header = Header::new(["p", "q", "(p \\land q)"])?;

        assert_eq!(header.position(&tokenize("p")), Some(0));
        assert_eq!(header.position(&tokenize("( p && q )")), Some(2));
        assert_eq!(header.position(&tokenize("p \\land q")), None);
        assert_eq!(header.position(&tokenize("r")), None);
        Ok(())
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            Header::new(["p", "p"]),
            Err(Error::DuplicateHeaderEntry {
                entry: "p".to_string()
            })
        );
        assert_eq!(
            Header::new(["p", "q", "p => q", "p \\Rightarrow q"]),
            Err(Error::DuplicateHeaderEntry {
                entry: "p \\Rightarrow q".to_string()
            })
        );
    }
}
