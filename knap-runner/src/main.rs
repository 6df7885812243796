use anyhow::{anyhow, Result};
use clap::{arg, ArgMatches, Command};
use knap_algorithms::Strategy;
use knap_challenges::{CaveSize, Challenge, Item, Solution};
use knap_runner::{run_caves, solve_items, write_report, RunSettings};
use knap_utils::{jsonify, jsonify_pretty, load_json};
use std::time::Duration;

fn cli() -> Command {
    Command::new("knap-runner")
        .about("Fills a knapsack with cave loot using naive, exact and greedy strategies")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Generates small, medium and large caves and compares strategies")
                .arg(
                    arg!(--settings [SETTINGS] "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--seed [SEED] "Seed used to generate the caves")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--capacity [CAPACITY] "How many pounds the backpack holds")
                        .value_parser(clap::value_parser!(i64)),
                )
                .arg(
                    arg!(--caves [CAVES] "Comma separated cave sizes (small,medium,large)")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--strategies [STRATEGIES] "Comma separated strategy names")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--"timeout-ms" [TIMEOUT_MS] "Optional time limit for exact strategies")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--workers [WORKERS] "Number of caves solved concurrently")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(arg!(--json "Print the reports as json")),
        )
        .subcommand(
            Command::new("solve")
                .about("Solves a list of items")
                .arg(
                    arg!(<ITEMS> "Items json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--capacity <CAPACITY> "How many pounds the backpack holds")
                        .value_parser(clap::value_parser!(i64)),
                )
                .arg(
                    arg!(--strategy [STRATEGY] "Strategy name")
                        .default_value("dynamic")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--"timeout-ms" [TIMEOUT_MS] "Optional time limit for exact strategies")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(arg!(--"skip-invalid" "Drop items with negative weight or value")),
        )
        .subcommand(
            Command::new("verify")
                .about("Verifies a solution against a challenge")
                .arg(
                    arg!(<CHALLENGE> "Challenge json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SOLUTION> "Solution json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("run", sub_m)) => run(sub_m),
        Some(("solve", sub_m)) => solve(
            sub_m.get_one::<String>("ITEMS").unwrap().clone(),
            *sub_m.get_one::<i64>("capacity").unwrap(),
            sub_m.get_one::<String>("strategy").unwrap().clone(),
            sub_m.get_one::<u64>("timeout-ms").cloned(),
            sub_m.get_flag("skip-invalid"),
        ),
        Some(("verify", sub_m)) => verify(
            sub_m.get_one::<String>("CHALLENGE").unwrap().clone(),
            sub_m.get_one::<String>("SOLUTION").unwrap().clone(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn parse_list<T>(list: &str) -> Result<Vec<T>>
where
    T: std::str::FromStr<Err = anyhow::Error>,
{
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.trim().parse::<T>())
        .collect()
}

fn run(sub_m: &ArgMatches) -> Result<()> {
    let mut settings = match sub_m.get_one::<String>("settings") {
        Some(settings) => load_json::<RunSettings>(settings)?,
        None => RunSettings::default(),
    };
    if let Some(seed) = sub_m.get_one::<u64>("seed") {
        settings.seed = *seed;
    }
    if let Some(capacity) = sub_m.get_one::<i64>("capacity") {
        settings.capacity = *capacity;
    }
    if let Some(caves) = sub_m.get_one::<String>("caves") {
        settings.caves = parse_list::<CaveSize>(caves)?;
    }
    if let Some(strategies) = sub_m.get_one::<String>("strategies") {
        settings.strategies = parse_list::<Strategy>(strategies)?;
    }
    if let Some(timeout_ms) = sub_m.get_one::<u64>("timeout-ms") {
        settings.timeout_ms = Some(*timeout_ms);
    }
    if let Some(workers) = sub_m.get_one::<usize>("workers") {
        settings.workers = *workers;
    }
    if settings.capacity < 0 {
        return Err(anyhow!("Capacity ({}) must be non-negative", settings.capacity));
    }

    let reports = run_caves(&settings)?;
    if sub_m.get_flag("json") {
        println!("{}", jsonify(&reports));
    } else {
        let mut stdout = std::io::stdout().lock();
        for report in &reports {
            write_report(&mut stdout, report)?;
        }
    }
    Ok(())
}

fn solve(
    items: String,
    capacity: i64,
    strategy: String,
    timeout_ms: Option<u64>,
    skip_invalid: bool,
) -> Result<()> {
    let items = load_json::<Vec<Item>>(&items)?;
    let strategy = strategy.parse::<Strategy>()?;
    let solution = solve_items(
        items,
        capacity,
        strategy,
        timeout_ms.map(Duration::from_millis),
        skip_invalid,
    )?;
    println!("{}", jsonify_pretty(&solution));
    Ok(())
}

fn verify(challenge: String, solution: String) -> Result<()> {
    let challenge = load_json::<Challenge>(&challenge)?;
    let solution = load_json::<Solution>(&solution)?;
    let total_value = challenge
        .verify_solution(&solution)
        .map_err(|e| anyhow!("Invalid solution: {}", e))?;
    println!("Solution is valid (total value ${})", total_value);
    Ok(())
}
