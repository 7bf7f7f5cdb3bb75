use crate::truth_table::{TruthTable, TruthValue};
use itertools::Itertools;
use std::fmt;
use std::io;
use std::io::{Read, Write};

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self.header().names().map(|name| name.chars().count()).collect();

        let header = self
            .header()
            .names()
            .zip(&widths)
            .map(|(name, &width)| format!("{name:<width$}"))
            .join(" | ");
        writeln!(f, "{}", header.trim_end())?;

        for row in self.values() {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(value, &width)| format!("{value:<width$}"))
                .join(" | ");
            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}

/// Writes the table as space-padded columns separated by `|`.
pub fn write_plain<W: Write>(writer: &mut W, table: &TruthTable) -> io::Result<()> {
    write!(writer, "{table}")
}

/// Writes the header record followed by one `0`/`1` record per row.
pub fn write_csv<W: Write>(writer: &mut W, table: &TruthTable) -> io::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(table.header().names())?;
    for row in table.values() {
        csv_writer.write_record(row.iter().map(TruthValue::to_string))?;
    }

    csv_writer.flush()
}

/// Writes the table as a centered LaTeX `tabular`, every cell in math mode.
pub fn write_latex<W: Write>(writer: &mut W, table: &TruthTable) -> io::Result<()> {
    let columns = "c|".repeat(table.header().len());

    writeln!(writer, "\\begin{{center}}")?;
    writeln!(writer, " \\begin{{tabular}}{{|{columns}}}")?;
    writeln!(writer, " \\hline")?;

    let header = table.header().names().map(|name| format!("${name}$")).join(" & ");
    writeln!(writer, "{header}\\\\")?;
    writeln!(writer, "\\hline")?;

    for row in table.values() {
        let line = row.iter().map(|value| format!("${value}$")).join(" & ");
        writeln!(writer, "{line}\\\\")?;
    }

    writeln!(writer, "\\hline")?;
    writeln!(writer, "\\end{{tabular}}")?;
    writeln!(writer, "\\end{{center}}")?;

    Ok(())
}

/// Reads one header per CSV record. Fields are trimmed, empty fields and records are
/// skipped and lines starting with `#` are comments.
pub fn read_headers<R: Read>(reader: R) -> io::Result<Vec<Vec<String>>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut headers: Vec<Vec<String>> = Vec::new();

    for header_record in csv_reader.records() {
        let record = header_record?;

        let entries: Vec<String> = record
            .iter()
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();

        if !entries.is_empty() {
            headers.push(entries);
        }
    }

    Ok(headers)
}
