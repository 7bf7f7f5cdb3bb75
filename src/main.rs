use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use truthtab::table_io::{read_headers, write_csv, write_latex, write_plain};
use truthtab::{Header, TableConfig, TruthTable, DEFAULT_MAX_VARIABLES};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Plain,
    Csv,
    Latex,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(value_parser, value_name = "ENTRIES")]
    /// Header entries, e.g. p q "p \Rightarrow q"
    entries: Vec<String>,

    #[clap(value_parser, short, long, value_name = "FILE", conflicts_with = "entries")]
    /// Read headers from a CSV file, one header per line
    input: Option<PathBuf>,

    #[clap(value_enum, short, long, default_value_t = Format::Plain)]
    /// Output format
    format: Format,

    #[clap(value_parser, short, long, value_name = "FILE")]
    /// The output filename (or stdout if not provided)
    output: Option<PathBuf>,

    #[clap(long, value_name = "N", env = "TRUTHTAB_MAX_VARIABLES", default_value_t = DEFAULT_MAX_VARIABLES)]
    /// Refuse to build tables with more than N atomic variables
    max_variables: usize,

    #[clap(short, long, action = clap::ArgAction::Count)]
    /// Print more diagnostics (repeat for more)
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse_from(argfile::expand_args_from(
        wild::args_os(),
        argfile::parse_fromfile,
        argfile::PREFIX,
    )?);

    let level = match args.verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let headers = if let Some(input_file) = &args.input {
        let file = File::open(input_file)
            .with_context(|| format!("cannot open {}", input_file.display()))?;
        read_headers(BufReader::new(file))
            .with_context(|| format!("cannot read headers from {}", input_file.display()))?
    } else if args.entries.is_empty() {
        anyhow::bail!("Must provide header entries or an input file")
    } else {
        vec![args.entries.clone()]
    };

    let config = TableConfig::default().with_max_variables(args.max_variables);

    let mut writer = if let Some(output_file) = &args.output {
        let file = File::create(output_file)?;
        Box::new(BufWriter::new(file)) as Box<dyn Write>
    } else {
        Box::new(BufWriter::new(io::stdout())) as Box<dyn Write>
    };

    for (i, entries) in headers.iter().enumerate() {
        let table = Header::new(entries)
            .and_then(|header| TruthTable::build_with(header, &config))
            .with_context(|| format!("cannot build truth table for [{}]", entries.join(", ")))?;

        if i > 0 {
            writeln!(writer)?;
        }

        match args.format {
            Format::Plain => write_plain(&mut writer, &table)?,
            Format::Csv => write_csv(&mut writer, &table)?,
            Format::Latex => write_latex(&mut writer, &table)?,
        }
    }

    // flush the writer before dropping it
    writer.flush()?;

    Ok(())
}
