use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use poet::AffinityPoet;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wdgraph::{AdjacencyMap, EdgeList, MutableStorage};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Storage {
    /// Per-vertex adjacency maps with a reverse index
    AdjacencyMap,
    /// Flat edge list, scanned linearly
    EdgeList,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Insert corpus bridge words into a phrase")]
struct Args {
    /// Corpus text the affinity graph is built from
    corpus: PathBuf,
    /// Phrase to rewrite. When omitted, every stdin line is rewritten.
    phrase: Vec<String>,
    /// Graph representation backing the affinity graph
    #[arg(long, value_enum, default_value_t = Storage::AdjacencyMap)]
    storage: Storage,
    /// Print the affinity graph before the poems
    #[arg(long)]
    dump_graph: bool,
}

fn run<S>(args: &Args) -> Result<()>
where
    S: MutableStorage<Label = String, Weight = u32>,
{
    let poet = AffinityPoet::<S>::from_path(&args.corpus)
        .with_context(|| format!("loading corpus {}", args.corpus.display()))?;
    info!(
        vertices = poet.graph().order(),
        edges = poet.graph().size(),
        storage = ?args.storage,
        "affinity graph ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.dump_graph {
        write!(out, "{poet}")?;
    }

    if !args.phrase.is_empty() {
        writeln!(out, "{}", poet.poem(&args.phrase.join(" ")))?;
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("reading phrase from stdin")?;
        writeln!(out, "{}", poet.poem(&line))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match args.storage {
        Storage::AdjacencyMap => run::<AdjacencyMap<String, u32>>(&args),
        Storage::EdgeList => run::<EdgeList<String, u32>>(&args),
    }
}
