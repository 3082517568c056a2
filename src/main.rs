use clap::Parser;
use log::info;
use std::path::Path;

use diet_planner_rs::cli::{Cli, Command, SolveArgs};
use diet_planner_rs::data::{builtin_diet, load_diet, save_diet};
use diet_planner_rs::error::Result;
use diet_planner_rs::interface::{display_diet, render_plan, write_plan_csv};
use diet_planner_rs::models::Diet;
use diet_planner_rs::planner::{solve, today, SolveOptions};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    diet_planner_rs::log::init(cli.log_level.as_deref())?;

    match cli.command {
        None => cmd_solve(cli.data.as_deref(), &cli.solve),
        Some(Command::Solve(args)) => cmd_solve(cli.data.as_deref(), &args),
        Some(Command::Foods) => cmd_foods(cli.data.as_deref()),
        Some(Command::Export { path }) => cmd_export(&path),
    }
}

/// Load the diet from a JSON file, or fall back to the built-in table.
fn load(data: Option<&Path>) -> Result<Diet> {
    match data {
        Some(path) => {
            let diet = load_diet(path)?;
            info!("Loaded {} foods from {}", diet.foods.len(), path.display());
            Ok(diet)
        }
        None => Ok(builtin_diet()),
    }
}

/// Solve the diet problem and print the plan.
fn cmd_solve(data: Option<&Path>, args: &SolveArgs) -> Result<()> {
    let diet = load(data)?;

    let day = if args.weighted.is_on() {
        Some(args.day.unwrap_or_else(today))
    } else {
        None
    };

    let options = SolveOptions {
        penalty: args.penalty,
        day,
        group_limits: args.limits.clone(),
    };

    let plan = solve(&diet, &options)?;
    print!("{}", render_plan(&plan));

    if let Some(path) = &args.csv {
        if write_plan_csv(&plan, path)? {
            println!();
            println!("Wrote plan to {}", path.display());
        }
    }

    Ok(())
}

/// Print the diet table.
fn cmd_foods(data: Option<&Path>) -> Result<()> {
    let diet = load(data)?;
    display_diet(&diet);
    Ok(())
}

/// Write the built-in diet table to JSON.
fn cmd_export(path: &Path) -> Result<()> {
    save_diet(path, &builtin_diet())?;
    println!("Wrote built-in diet to {}", path.display());
    Ok(())
}
