use crate::error::{Error, Result};
use crate::evaluator::Evaluator;
use crate::header::Header;
use log::{debug, info};
use std::fmt::{self, Display};

/// Largest number of atomic variables a table may have unless configured otherwise.
pub const DEFAULT_MAX_VARIABLES: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Single cell value in a truth table, written as `1` or `0`.
pub enum TruthValue {
    True,
    False,
}

impl TruthValue {
    pub const fn is_true(self) -> bool {
        matches!(self, Self::True)
    }
}

impl From<bool> for TruthValue {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

impl From<TruthValue> for bool {
    fn from(value: TruthValue) -> Self {
        value.is_true()
    }
}

impl From<TruthValue> for u8 {
    fn from(value: TruthValue) -> Self {
        Self::from(value.is_true())
    }
}

impl Display for TruthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::True => "1",
            Self::False => "0",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    max_variables: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_variables: DEFAULT_MAX_VARIABLES,
        }
    }
}

impl TableConfig {
    #[must_use]
    pub const fn with_max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = max_variables;
        self
    }

    /// The effective ceiling, never large enough for `2^n` to overflow `usize`.
    ///
    /// Tables below this ceiling may still be too large to allocate; building one
    /// fails with [`Error::VariableCountOverflow`].
    pub fn max_variables(&self) -> usize {
        self.max_variables.min(usize::BITS as usize - 1)
    }
}

/// A fully evaluated truth table.
///
/// Atomic columns count in binary over the rows, with the right-most atomic column
/// toggling fastest; compound columns hold the value of their formula under the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    header: Header,
    rows: Vec<Vec<bool>>,
}

impl TruthTable {
    pub fn build<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_with(Header::new(entries)?, &TableConfig::default())
    }

    pub fn build_with(header: Header, config: &TableConfig) -> Result<Self> {
        let atomic = header.atomic_count();
        let max = config.max_variables();

        if atomic > max {
            return Err(Error::VariableCountOverflow { count: atomic, max });
        }

        let row_count = 1usize << atomic;
        info!(
            "building truth table: {} columns, {atomic} atomic, {row_count} rows",
            header.len()
        );

        // block size of every atomic column, right-most first
        let mut blocks = vec![None; header.len()];
        let mut block = 1usize;
        for (column, entry) in header.entries().iter().enumerate().rev() {
            if entry.is_atomic() {
                debug!("atomic column {column} '{}' toggles every {block} rows", entry.name());
                blocks[column] = Some(block);
                block <<= 1;
            }
        }

        let mut rows: Vec<Vec<bool>> = Vec::new();
        rows.try_reserve_exact(row_count)
            .map_err(|_| Error::VariableCountOverflow { count: atomic, max })?;

        for r in 0..row_count {
            let mut row: Vec<Option<bool>> = blocks
                .iter()
                .map(|size| size.map(|size| (r / size) % 2 == 1))
                .collect();

            for (column, entry) in header.entries().iter().enumerate() {
                if row[column].is_none() {
                    let value = Evaluator::new(&header, &row).eval(entry.formula())?;
                    row[column] = Some(value);
                }
            }

            rows.push(row.into_iter().map(|v| v.unwrap_or_default()).collect());
        }

        Ok(Self { header, rows })
    }

    pub const fn header(&self) -> &Header {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// The rows as `0`/`1` integers.
    pub fn bits(&self) -> Vec<Vec<u8>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&v| u8::from(v)).collect())
            .collect()
    }

    pub fn values(&self) -> impl Iterator<Item = Vec<TruthValue>> + '_ {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&v| TruthValue::from(v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn truth_values_print_as_bits() {
        assert_eq!(TruthValue::from(false).to_string(), "0");
        assert_eq!(format!("{:>3}", TruthValue::True), "  1");
        assert_eq!(u8::from(TruthValue::True), 1);
    }

    #[test]
    fn ceiling_fits_row_count() {
        let config = TableConfig::default().with_max_variables(usize::MAX);
        assert_eq!(config.max_variables(), usize::BITS as usize - 1);
        assert_eq!(TableConfig::default().max_variables(), DEFAULT_MAX_VARIABLES);
    }

    #[test]
    fn unallocatable_table_is_rejected() -> Result<()> {
        let names: Vec<String> = (0..60).map(|i| format!("x{i}")).collect();
        let header = Header::new(&names)?;
        let config = TableConfig::default().with_max_variables(63);

        assert!(matches!(
            TruthTable::build_with(header, &config),
            Err(Error::VariableCountOverflow { count: 60, .. })
        ));
        Ok(())
    }

    #[test]
    fn compound_columns_do_not_shift_bits() -> Result<()> {
        let table = TruthTable::build(["p", "p \\land q", "q"])?;

        assert_eq!(
            table.bits(),
            vec![vec![0, 0, 0], vec![0, 0, 1], vec![1, 0, 0], vec![1, 1, 1]]
        );
        Ok(())
    }

    #[test]
    fn rejects_before_allocating() -> Result<()> {
        let names: Vec<String> = (0..40).map(|i| format!("x{i}")).collect();
        let header = Header::new(&names)?;

        assert_eq!(
            TruthTable::build_with(header, &TableConfig::default()),
            Err(Error::VariableCountOverflow { count: 40, max: 20 })
        );
        Ok(())
    }
}
