//! Command-line dispatch. Thin boundary layer: parse arguments, hand off to
//! the library, print JSON or a tab-separated table.

use std::fs::File;
use std::path::Path;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::error::SimError;
use crate::montecarlo::runner::{run_monte_carlo, Field};
use crate::montecarlo::AggregateSummary;
use crate::parallel::{run_simulation_batches, WorkerPool};
use crate::race::engine::simulate_race;
use crate::race::rider::Rider;
use crate::race::rng::stream_seed;
use crate::scenario::{demo_scenario, load_scenario, write_histogram_csv, ScenarioSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Race,
    Simulate,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("race") => Some(Command::Race),
        Some("simulate") => Some(Command::Simulate),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Race) => handle_race(args),
        Some(Command::Simulate) => handle_simulate(args),
        Some(Command::Validate) => handle_validate(args),
        None => {
            eprintln!(
                "usage: peloton <race|simulate|validate> [scenario|-] [trials] [seed] \
                 [--table] [--sequential] [--csv PATH]"
            );
            2
        }
    }
}

/// One race on the trial-0 seed stream, printed as a JSON finish order.
fn handle_race(args: &[String]) -> i32 {
    let positional = positional_args(args);
    let scenario = match scenario_from_arg(positional.first().copied()) {
        Ok(scenario) => scenario,
        Err(err) => {
            eprintln!("scenario error: {err}");
            return 1;
        }
    };
    let seed = parse_u64_arg(positional.get(1).copied(), "seed", scenario.seed);

    let (field, route) = match scenario.build() {
        Ok(built) => built,
        Err(err) => {
            eprintln!("scenario error: {err}");
            return 1;
        }
    };

    let mut rng = SmallRng::seed_from_u64(stream_seed(seed, 0));
    let sampled;
    let riders: &[Rider] = match &field {
        Field::Roster(riders) => riders,
        Field::Generated { generator, count } => {
            sampled = match generator.sample_field(*count, &mut rng) {
                Ok(field) => field,
                Err(err) => {
                    eprintln!("field error: {err}");
                    return 1;
                }
            };
            &sampled
        }
    };

    match simulate_race(riders, &route, &mut rng) {
        Ok(result) => print_json(&result),
        Err(err) => {
            eprintln!("race error: {err}");
            1
        }
    }
}

fn handle_simulate(args: &[String]) -> i32 {
    let positional = positional_args(args);
    let scenario = match scenario_from_arg(positional.first().copied()) {
        Ok(scenario) => scenario,
        Err(err) => {
            eprintln!("scenario error: {err}");
            return 1;
        }
    };
    let trials = parse_usize_arg(positional.get(1).copied(), "trials", scenario.trials);
    let seed = parse_u64_arg(positional.get(2).copied(), "seed", scenario.seed);
    let as_table = flag_present(args, "--table");
    let sequential = flag_present(args, "--sequential");
    let csv_path = flag_value(args, "--csv");

    let (field, route) = match scenario.build() {
        Ok(built) => built,
        Err(err) => {
            eprintln!("scenario error: {err}");
            return 1;
        }
    };

    let result = if sequential {
        run_monte_carlo(&field, &route, trials, seed)
    } else {
        run_simulation_batches(&field, &route, trials, seed, &WorkerPool::from_env())
    };
    let aggregate = match result {
        Ok(aggregate) => aggregate,
        Err(err) => {
            eprintln!("simulation error: {err}");
            return 1;
        }
    };
    let summary = aggregate.summary();

    if let Some(path) = csv_path {
        if let Err(err) = export_csv(&summary, path) {
            eprintln!("failed to write csv `{path}`: {err}");
            return 1;
        }
    }

    if as_table {
        print_table(&summary);
        0
    } else {
        print_json(&summary)
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let Some(path) = positional_args(args).first().copied() else {
        eprintln!("usage: peloton validate <scenario>");
        return 2;
    };
    let scenario = match load_scenario(Path::new(path)) {
        Ok(scenario) => scenario,
        Err(err) => {
            eprintln!("scenario error: {err}");
            return 1;
        }
    };
    match scenario.build() {
        Ok((field, route)) => {
            let field_desc = match &field {
                Field::Roster(riders) => format!("{} named riders", riders.len()),
                Field::Generated { count, .. } => format!("generated field of {count}"),
            };
            println!(
                "scenario ok: {field_desc}, {} segments over {:.1} km, {} trials",
                route.segments().len(),
                route.total_distance_m() / 1000.0,
                scenario.trials
            );
            0
        }
        Err(err) => {
            eprintln!("invalid scenario: {err}");
            1
        }
    }
}

fn scenario_from_arg(arg: Option<&str>) -> Result<ScenarioSpec, SimError> {
    match arg {
        None | Some("-") => Ok(demo_scenario()),
        Some(path) => load_scenario(Path::new(path)),
    }
}

fn export_csv(summary: &AggregateSummary, path: &str) -> Result<(), SimError> {
    let file = File::create(path)?;
    write_histogram_csv(summary, file)
}

fn print_json(value: &impl serde::Serialize) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize result: {err}");
            1
        }
    }
}

fn print_table(summary: &AggregateSummary) {
    println!("rider\twins\twin_fraction");
    for (name, count) in &summary.win_counts {
        let fraction = summary.win_fractions.get(name).copied().unwrap_or(0.0);
        println!("{name}\t{count}\t{fraction:.3}");
    }
    println!();
    println!("trait\twinner_mean");
    for (trait_name, mean) in &summary.winner_trait_means {
        println!("{trait_name}\t{mean:.3}");
    }
}

/// Arguments after the command, minus flags and their values.
fn positional_args(args: &[String]) -> Vec<&str> {
    let mut positional = Vec::new();
    let mut skip_next = false;
    for arg in args.iter().skip(2) {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--csv" {
            skip_next = true;
            continue;
        }
        if arg.starts_with("--") {
            continue;
        }
        positional.push(arg.as_str());
    }
    positional
}

fn flag_present(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| arg == flag)
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    let position = args.iter().position(|arg| arg == flag)?;
    args.get(position + 1).map(String::as_str)
}

fn parse_usize_arg(arg: Option<&str>, name: &str, default: usize) -> usize {
    match arg {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("invalid {name} `{raw}`, using {default}");
            default
        }),
        None => default,
    }
}

fn parse_u64_arg(arg: Option<&str>, name: &str, default: u64) -> u64 {
    match arg {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("invalid {name} `{raw}`, using {default}");
            default
        }),
        None => default,
    }
}
