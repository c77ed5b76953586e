//! Presentation of mining results: ranking, truncation and rendering.

use crate::fp::{FrequentPatterns, Item, Itemset};
use serde::Serialize;
use std::cmp::Reverse;
use std::fmt::Display;
use std::io::{self, Write};

/// Default number of itemsets shown.
pub const DEFAULT_LIMIT: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// All entries sorted by descending support, then by itemset content.
pub fn ranked<I: Item>(patterns: &FrequentPatterns<I>) -> Vec<(&Itemset<I>, usize)> {
    let mut entries: Vec<(&Itemset<I>, usize)> = patterns
        .iter()
        .map(|(itemset, &support)| (itemset, support))
        .collect();
    entries.sort_unstable_by_key(|&(itemset, support)| (Reverse(support), itemset));
    entries
}

#[derive(Debug, Serialize)]
struct Entry<'a, I> {
    items: &'a Itemset<I>,
    support: usize,
}

#[derive(Debug, Serialize)]
pub struct Report<'a, I> {
    total: usize,
    limit: usize,
    itemsets: Vec<Entry<'a, I>>,
}

impl<'a, I: Item> Report<'a, I> {
    /// The `limit` best-ranked entries of `patterns`.
    pub fn new(patterns: &'a FrequentPatterns<I>, limit: usize) -> Self {
        let itemsets = ranked(patterns)
            .into_iter()
            .take(limit)
            .map(|(items, support)| Entry { items, support })
            .collect();
        Self {
            total: patterns.len(),
            limit,
            itemsets,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn shown(&self) -> usize {
        self.itemsets.len()
    }
}

impl<I: Item + Display + Serialize> Report<'_, I> {
    pub fn render<W: Write>(&self, format: OutputFormat, out: &mut W) -> io::Result<()> {
        match format {
            OutputFormat::Text => self.render_text(out),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)
            }
        }
    }

    fn render_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Total frequent itemsets found: {}", self.total)?;
        writeln!(out, "Showing up to {} frequent itemsets:", self.limit)?;
        writeln!(out)?;
        for entry in &self.itemsets {
            let items: Vec<String> = entry.items.iter().map(ToString::to_string).collect();
            writeln!(out, "[{}] : {}", items.join(", "), entry.support)?;
        }
        Ok(())
    }
}
