#![allow(clippy::collapsible_else_if)]

use std::path::PathBuf;

use clap::Parser;

use pacard::{
    config::Config,
    procedures::explore::Explorer,
    types::err::{self},
    world::cave::{Cave, Walk},
};

/// Explore a cave, stepping only where safety can be proven.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The layout of the cave.
    layout: PathBuf,

    /// Take a risk only from a cell with more successors than this.
    #[arg(short, long)]
    risk_threshold: Option<usize>,

    /// Never enter a cell without proof of safety.
    #[arg(long)]
    no_forced_risk: bool,

    /// Keep subsumed clauses during resolution.
    #[arg(long)]
    no_subsumption: bool,

    /// Keep tautological resolvents during resolution.
    #[arg(long)]
    keep_tautologies: bool,

    /// Draw the cave with each visited cell marked.
    #[arg(short, long)]
    map: bool,
}

fn config_from_args(args: &Args) -> Config {
    let mut config = Config::default();

    if let Some(threshold) = args.risk_threshold {
        if !config.risk_threshold.set(threshold) {
            let (min, max) = config.risk_threshold.min_max();
            println!(
                "c {} must be between {min} and {max}, not {threshold}",
                config.risk_threshold.name
            );
            std::process::exit(1);
        }
    }

    config.forced_risk.value = !args.no_forced_risk;
    config.subsumption.value = !args.no_subsumption;
    config.tautology_deletion.value = !args.keep_tautologies;

    config
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();
    let config = config_from_args(&args);

    let layout = match std::fs::read_to_string(&args.layout) {
        Ok(layout) => layout,
        Err(e) => {
            println!("c Failed to read {:?}: {e}", args.layout);
            std::process::exit(1);
        }
    };

    let cave: Cave = match layout.parse() {
        Ok(cave) => cave,
        Err(e) => {
            println!("c {}", err::ErrorKind::from(e));
            std::process::exit(1);
        }
    };

    let mut explorer = Explorer::new(&cave, config);
    let exploration = match explorer.explore() {
        Ok(exploration) => exploration,
        Err(e) => {
            println!("c {e}");
            println!("c Visited: {}", cells_string(explorer.visited()));
            println!(
                "c Exits: {}",
                cells_string(&cave.exits().copied().collect::<Vec<_>>())
            );
            if args.map {
                print!("{}", cave.render(explorer.visited()));
            }
            println!("s NO PATH");
            std::process::exit(2);
        }
    };

    let actions = exploration
        .actions
        .iter()
        .map(|action| action.to_string())
        .collect::<Vec<_>>();

    println!("c Visited: {}", cells_string(&exploration.visited));
    if !exploration.is_proven() {
        println!("c Risks: {}", cells_string(&exploration.forced));
    }
    println!("c {}", exploration.counters);
    if args.map {
        print!("{}", cave.render(&exploration.visited));
    }
    println!("v {}", actions.join(" "));

    match cave.walk(&exploration.actions) {
        Walk::Exited(cell) => {
            println!("s EXITED at {cell}");
        }
        Walk::Perished(cell, hazard) => {
            println!("s PERISHED at {cell} ({hazard:?})");
            std::process::exit(3);
        }
        Walk::Teleported(cell) => {
            println!("s TELEPORTED at {cell}");
            std::process::exit(2);
        }
        Walk::Stranded(cell) | Walk::Blocked(cell) => {
            println!("s STRANDED at {cell}");
            std::process::exit(2);
        }
    }
}

fn cells_string(cells: &[pacard::structures::cell::Cell]) -> String {
    cells
        .iter()
        .map(|cell| cell.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
