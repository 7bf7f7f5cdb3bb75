#![warn(clippy::disallowed_types)]

pub use error::{Error, Result};
pub use evaluator::{evaluate, Evaluator};
pub use header::{Header, HeaderEntry};
pub use parser::{Formula, Token};
pub use symbols::*;
pub use truth_table::{TableConfig, TruthTable, TruthValue, DEFAULT_MAX_VARIABLES};

pub mod parser;
pub mod table_io;

mod error;
mod evaluator;
mod header;
mod symbols;
mod truth_table;

/// Builds the truth table of `header` with the default configuration.
///
/// ```
/// let table = truthtab::build(["p", "q", "p \\Rightarrow q"]).unwrap();
///
/// assert_eq!(
///     table.bits(),
///     vec![vec![0, 0, 1], vec![0, 1, 1], vec![1, 0, 0], vec![1, 1, 1]]
/// );
/// ```
pub fn build<I, S>(header: I) -> Result<TruthTable>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TruthTable::build(header)
}
