use anyhow::{Context, Result};
use clap::Parser;
use fpgrowth::cli::Args;
use fpgrowth::input::read_transactions;
use fpgrowth::report::Report;
use std::io::Write;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let miner = args.miner().context("invalid mining parameters")?;

    let transactions = read_transactions(&args.file, &args.column)
        .with_context(|| format!("failed to read transactions from {}", args.file.display()))?;
    log::info!("loaded {} transactions", transactions.len());

    #[cfg(feature = "parallel")]
    let patterns = if args.parallel {
        miner.mine_par(&transactions)
    } else {
        miner.mine(&transactions)
    };
    #[cfg(not(feature = "parallel"))]
    let patterns = miner.mine(&transactions);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Report::new(&patterns, args.limit)
        .render(args.format, &mut out)
        .context("failed to write report")?;
    out.flush()?;

    Ok(())
}
