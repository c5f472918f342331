use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rle_table::CompressedTable;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rle-table", about = "Run-length compressed two-dimensional tables")]
struct Cli {
    /// Emit debug-level diagnostics (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a cell of a 5x6 table of `x`, then revert it, dumping each step.
    Demo,
    /// Build a table, apply writes in order, and print the result.
    Render {
        /// Number of rows.
        #[arg(long)]
        rows: usize,
        /// Number of columns.
        #[arg(long)]
        cols: usize,
        /// Initial value of every cell.
        #[arg(long, default_value = "x")]
        default: String,
        /// A write as `row,col,value`; may be repeated.
        #[arg(long = "set", value_parser = parse_write)]
        writes: Vec<CellWrite>,
    },
}

#[derive(Debug, Clone)]
struct CellWrite {
    row: usize,
    col: usize,
    value: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo => run_demo()?,
        Commands::Render {
            rows,
            cols,
            default,
            writes,
        } => run_render(rows, cols, default, writes)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_demo() -> Result<()> {
    let mut table =
        CompressedTable::new(5, 6, "x".to_string()).context("failed to build demo table")?;
    println!("table is {table}");
    table.update_info(0, 1, "a".to_string())?;
    println!("table is {table}");
    table.update_info(0, 1, "x".to_string())?;
    println!("table is {table}");
    Ok(())
}

fn run_render(rows: usize, cols: usize, default: String, writes: Vec<CellWrite>) -> Result<()> {
    let mut table = CompressedTable::new(rows, cols, default)
        .with_context(|| format!("failed to build {rows}x{cols} table"))?;

    for write in writes {
        table
            .update_info(write.row, write.col, write.value)
            .with_context(|| format!("write to ({}, {}) failed", write.row, write.col))?;
    }

    print!("{table}");
    println!();
    print!("{}", table.entire_table()?);
    Ok(())
}

fn parse_write(raw: &str) -> Result<CellWrite> {
    let mut parts = raw.splitn(3, ',');
    let (Some(row), Some(col), Some(value)) = (parts.next(), parts.next(), parts.next()) else {
        bail!("expected `row,col,value`, got `{raw}`");
    };
    Ok(CellWrite {
        row: row.trim().parse().context("row must be a non-negative integer")?,
        col: col.trim().parse().context("column must be a non-negative integer")?,
        value: value.to_string(),
    })
}
