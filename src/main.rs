use std::{fs, path::Path, path::PathBuf};

use anyhow::{Result, anyhow, bail};
use clap::{Parser, Subcommand};
use num_bigint::BigUint;

use kperm::combinatorics::permutation_count;
use kperm::extrema::min_max;
use kperm::lazy::unrank_lazy;
use kperm::unrank::{rank_dense, unrank_dense};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count the ordered selections of k items from a universe of n.
    Count {
        /// Universe size.
        n: usize,
        /// Number of positions to fill.
        k: usize,
    },
    /// Map indices to the k-permutations occupying them.
    Unrank {
        /// Number of positions to fill.
        #[arg(short)]
        k: usize,
        /// File with one universe element per line.
        #[arg(long, conflicts_with = "universe")]
        wordlist: Option<PathBuf>,
        /// Universe size; selections are reported as bare identities.
        #[arg(long)]
        universe: Option<usize>,
        /// Zero-based ranks, as decimal strings of arbitrary size.
        #[arg(required = true)]
        indices: Vec<String>,
    },
    /// Map an ordered selection back to its index.
    Rank {
        /// File with one universe element per line.
        #[arg(long)]
        wordlist: PathBuf,
        /// The selected elements, in order.
        #[arg(required = true)]
        elements: Vec<String>,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("kperm failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Count { n, k } => {
            println!("{}", permutation_count(n, k));
        }
        Commands::Unrank {
            k,
            wordlist,
            universe,
            indices,
        } => {
            let indices = parse_indices(&indices)?;
            match (wordlist, universe) {
                (Some(path), None) => {
                    let contents = read_wordlist(&path)?;
                    let words: Vec<&str> = contents.lines().collect();
                    check_span(words.len(), k, &indices)?;
                    for index in &indices {
                        println!("{}", unrank_dense(&words, k, index)?.join(" "));
                    }
                }
                (None, Some(n)) => {
                    check_span(n, k, &indices)?;
                    for index in &indices {
                        let identities = unrank_lazy(n, k, index, |id| id.to_string())?;
                        println!("{}", identities.join(" "));
                    }
                }
                _ => bail!("exactly one of --wordlist or --universe is required"),
            }
        }
        Commands::Rank { wordlist, elements } => {
            let contents = read_wordlist(&wordlist)?;
            let words: Vec<&str> = contents.lines().collect();
            let elements: Vec<&str> = elements.iter().map(String::as_str).collect();
            println!("{}", rank_dense(&words, &elements)?);
        }
    }

    Ok(())
}

fn parse_indices(raw: &[String]) -> Result<Vec<BigUint>> {
    raw.iter()
        .map(|value| {
            value
                .parse()
                .map_err(|err| anyhow!("invalid index: {value}: {err}"))
        })
        .collect()
}

fn read_wordlist(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| anyhow!("cannot read {}: {err}", path.display()))
}

/// Reject the whole batch up front when its extreme index is out of range.
fn check_span(n: usize, k: usize, indices: &[BigUint]) -> Result<()> {
    if k > n {
        bail!("cannot select {k} positions from a universe of {n}");
    }
    let total = permutation_count(n, k);
    if let Some((_, max)) = min_max(indices) {
        if *max >= total {
            bail!("index {max} is outside the valid range [0, {}]", &total - 1u32);
        }
    }
    Ok(())
}
