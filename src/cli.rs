use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::planner::{GroupLimit, Penalty};

/// diet: pick the cheapest servings of food that meet daily nutrient bounds.
#[derive(Parser, Debug)]
#[command(name = "diet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub solve: SolveArgs,

    /// Path to a diet JSON file (defaults to the built-in USDA table).
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace.
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve the diet problem and print what to buy.
    Solve(SolveArgs),

    /// Print the nutrient bounds and foods of the diet table.
    Foods,

    /// Write the built-in diet table to a JSON file for editing.
    Export {
        /// Destination JSON file.
        path: PathBuf,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct SolveArgs {
    /// Objective shape: none (linear cost) or quadratic (cost * servings^2).
    #[arg(short, long, value_enum, default_value_t = Penalty::None)]
    pub penalty: Penalty,

    /// Weight costs by the time of year.
    #[arg(short, long, value_enum, default_value_t = Toggle::No)]
    pub weighted: Toggle,

    /// Day of the year used for weighting (defaults to today).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=366))]
    pub day: Option<u32>,

    /// Cap total servings of a food group, e.g. `dairy=6`. Repeatable.
    #[arg(short, long = "limit", value_name = "GROUP=MAX", value_parser = parse_group_limit)]
    pub limits: Vec<GroupLimit>,

    /// Also write the plan to this CSV file.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    Yes,
    #[default]
    No,
}

impl Toggle {
    pub fn is_on(self) -> bool {
        self == Toggle::Yes
    }
}

fn parse_group_limit(s: &str) -> Result<GroupLimit, String> {
    s.parse().map_err(|e: crate::error::DietError| e.to_string())
}
