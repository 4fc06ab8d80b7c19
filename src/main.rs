use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;

use refine::value::Table;

#[derive(Parser)]
#[command(name = "refine")]
#[command(
    about = "Applies a JSON-described sequence of cleaning operations to tabular data: row/column filtering by rule, cell replacement, type interpretation, and transposition."
)]
struct Cli {
    /// Operations as inline JSON, or @<path> to read them from a file
    ops: String,

    /// Optional CSV files to process (stdin when absent)
    files: Vec<String>,

    /// Output as JSON
    #[arg(short = 'j', long = "json")]
    json: bool,

    /// Read the table as JSON (an array of rows) instead of CSV
    #[arg(long = "json-in")]
    json_in: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let ops_json = match cli.ops.strip_prefix('@') {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading operations from {}", path))?,
        None => cli.ops.clone(),
    };
    let operations = refine::parse_operations(&ops_json)?;

    let table = load_table(&cli).context("reading input table")?;
    let result = refine::refine(&operations, &table);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut handle, &result)?;
        writeln!(handle)?;
    } else {
        result.write_csv(&mut handle)?;
    }
    Ok(())
}

fn load_table(cli: &Cli) -> anyhow::Result<Table> {
    if cli.json_in {
        let contents = match cli.files.as_slice() {
            [] => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
            [path] => fs::read_to_string(path)?,
            _ => bail!("--json-in accepts at most one file"),
        };
        Ok(serde_json::from_str(&contents)?)
    } else if cli.files.is_empty() {
        Ok(Table::from_stdin()?)
    } else {
        let paths: Vec<PathBuf> = cli.files.iter().map(PathBuf::from).collect();
        Ok(Table::from_files(&paths)?)
    }
}
