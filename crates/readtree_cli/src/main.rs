//! Command-line launcher for a reading tree.
//!
//! # Responsibility
//! - Open one snapshot-backed session and run a single command against it.
//! - Print graph and canvas views for inspection or for piping to a renderer.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{CliArgs, Command};
use readtree_core::{init_logging, NewWork, ReadingService, ReadingTreeConfig};
use std::path::PathBuf;

fn main() {
    if let Err(err) = run(CliArgs::parse()) {
        eprintln!("readtree error: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<()> {
    if let Some(log_dir) = &args.log_dir {
        let log_dir = absolute(log_dir.clone())?;
        init_logging(args.log_level(), &log_dir).map_err(|err| {
            anyhow::anyhow!("failed to start logging in `{}`: {err}", log_dir.display())
        })?;
    }

    let config = ReadingTreeConfig::default().with_data_file(&args.data);
    let mut service = ReadingService::from_config(&config)
        .with_context(|| format!("failed to open `{}`", args.data.display()))?;

    match args.command {
        Command::Add {
            title,
            author,
            image_url,
            before,
        } => {
            let mut request = NewWork::new(title);
            request.author = author;
            request.image_url = image_url;
            request.prerequisites = before;
            let work = service.add_work(request)?;
            println!("added `{}` ({})", work.title, work.id);
        }
        Command::List => {
            for work in service.registry().works() {
                let author = work.author.as_deref().unwrap_or("-");
                println!("{} | {}", work.title, author);
                for prerequisite in &work.prerequisites {
                    println!("    after: {prerequisite}");
                }
            }
        }
        Command::Graph => {
            let graph = service.graph();
            println!("nodes ({}):", graph.nodes.len());
            for node in &graph.nodes {
                println!("  - {node}");
            }
            println!("edges ({}):", graph.edges.len());
            for edge in &graph.edges {
                println!("  {} -> {}", edge.from, edge.to);
            }
        }
        Command::Layers => {
            for (depth, layer) in service.layers().iter().enumerate() {
                println!("{depth}: {}", layer.join(" | "));
            }
        }
        Command::Canvas => {
            let json = serde_json::to_string_pretty(&service.canvas())
                .context("failed to encode canvas view")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn absolute(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    Ok(cwd.join(path))
}
