use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use grid_dijkstra::{find_route, Input, Report, Selection, SolverConfig};

/// Finds the cheapest Path from the top-left Cell of a Grid to a target Cell and draws it.
#[derive(Debug, Parser)]
#[command(version, about)]
struct CLIArgs {
    /// JSON file with a "board" of Cell Costs and a "target" as [x, y]
    #[arg(default_value = "input.json")]
    input_path: PathBuf,
    /// How the search picks the next Cell to visit
    #[arg(long, value_enum, default_value_t = SelectionArg::Linear)]
    selection: SelectionArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SelectionArg {
    Linear,
    Heap,
}

impl From<SelectionArg> for Selection {
    fn from(arg: SelectionArg) -> Selection {
        match arg {
            SelectionArg::Linear => Selection::LinearScan,
            SelectionArg::Heap => Selection::BinaryHeap,
        }
    }
}

fn main() -> Result<()> {
    let env = Env::default()
        .filter_or("GRID_DIJKSTRA_LOG", "warn")
        .write_style_or("GRID_DIJKSTRA_LOG_STYLE", "auto");
    env_logger::init_from_env(env);

    let args = CLIArgs::parse();
    let input = Input::read(&args.input_path).with_context(|| {
        format!(
            "Failed to read input from given file({}).",
            args.input_path.display()
        )
    })?;
    let (grid, target) = input
        .into_parts()
        .context("Given board is not a valid grid.")?;

    let config = SolverConfig::with_selection(args.selection.into());
    let route = find_route(&grid, target, config).with_context(|| {
        format!(
            "Failed to find a path from the top-left cell to ({}, {}).",
            target.0, target.1
        )
    })?;

    print!("{}", Report::new(&grid, &route));
    Ok(())
}
