use anyhow::{Context, Result};
use clap::Parser;
use mimalloc::MiMalloc;
use std::io::{self, BufWriter, Write};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[command(
    name = "paygen",
    about = "Generate random debt-simplifier input",
    version
)]
struct Cli {
    /// Number of `def person` declarations to emit
    people: u64,

    /// Number of payment lines to emit
    transactions: u64,

    /// Seed the RNG for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Bare invocation keeps the short usage contract scripts rely on:
    // two lines on stdout, exit code 1.
    if std::env::args().len() <= 1 {
        println!("usage: paygen <people> <transactions> [--seed <n>]");
        println!("emits a currency line, <people> person declarations, and <transactions> payment lines");
        std::process::exit(1);
    }

    let cli = Cli::parse();

    let stdout = io::stdout().lock();
    let mut out = BufWriter::with_capacity(128 * 1024, stdout);

    let mut generator = paygen::Generator::new(paygen::Config {
        people: cli.people,
        transactions: cli.transactions,
        seed: cli.seed,
    });
    generator
        .write_to(&mut out)
        .context("failed to generate output")?;

    out.flush()?;
    Ok(())
}
