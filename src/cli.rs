//! Command-line arguments for the `fpgrowth` binary.

use crate::error::FpResult;
use crate::fp::FpGrowth;
use crate::input::DEFAULT_ITEMS_COLUMN;
use crate::report::{DEFAULT_LIMIT, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

/// Mine frequent itemsets from a CSV file of transactions with FP-Growth.
#[derive(Debug, Parser)]
#[command(name = "fpgrowth", version, about)]
pub struct Args {
    /// CSV file with one transaction per row
    pub file: PathBuf,

    /// Minimum number of transactions an itemset must appear in
    #[arg(short = 's', long, default_value_t = 2)]
    pub min_support: usize,

    /// Column holding the comma-separated items of each transaction
    #[arg(short, long, default_value = DEFAULT_ITEMS_COLUMN)]
    pub column: String,

    /// Maximum number of itemsets to print
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Always recurse, even into trees that are a single path
    #[arg(long)]
    pub no_single_path: bool,

    /// Mine top-level items in parallel
    #[cfg(feature = "parallel")]
    #[arg(long)]
    pub parallel: bool,
}

impl Args {
    /// Miner configured from these arguments.
    pub fn miner(&self) -> FpResult<FpGrowth> {
        Ok(FpGrowth::new(self.min_support)?.with_single_path_shortcut(!self.no_single_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FpError;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["fpgrowth", "tx.csv"]).unwrap();
        assert_eq!(args.min_support, 2);
        assert_eq!(args.column, "Items");
        assert_eq!(args.limit, 1000);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.no_single_path);
        assert_eq!(args.miner().unwrap().min_support(), 2);
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "fpgrowth", "tx.csv", "-s", "5", "--column", "Basket", "--limit", "10", "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.min_support, 5);
        assert_eq!(args.column, "Basket");
        assert_eq!(args.limit, 10);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_zero_min_support_is_rejected_by_miner() {
        let args = Args::try_parse_from(["fpgrowth", "tx.csv", "--min-support", "0"]).unwrap();
        assert!(matches!(args.miner(), Err(FpError::InvalidArgument(_))));
    }
}
