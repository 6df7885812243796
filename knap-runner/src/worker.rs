use crate::settings::RunSettings;
use anyhow::{anyhow, Result};
use futures::stream::{self, StreamExt};
use knap_algorithms::{Deadline, Strategy};
use knap_challenges::{partition_valid_items, CaveSize, Challenge, Item, Solution};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use std::{io::Write, sync::Arc, time::Duration, time::Instant};
use tokio::runtime::Runtime;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StrategyOutcome {
    pub strategy: Strategy,
    pub solution: Option<Solution>,
    pub error: Option<String>,
    pub elapsed_secs: f64,
    /// Fraction of the exact optimum lost, when an exact strategy ran.
    pub gap_to_optimum: Option<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CaveReport {
    pub cave: CaveSize,
    pub challenge: Challenge,
    pub optimum: Option<i64>,
    pub outcomes: Vec<StrategyOutcome>,
}

/// One seed per cave, all derived from the run seed.
pub fn cave_seeds(settings: &RunSettings) -> Vec<(CaveSize, [u8; 32])> {
    let mut rng = StdRng::seed_from_u64(settings.seed);
    settings
        .caves
        .iter()
        .map(|&cave| (cave, rng.gen::<[u8; 32]>()))
        .collect()
}

pub fn relative_gap(optimum: i64, value: i64) -> f64 {
    if optimum == 0 {
        0.0
    } else {
        (optimum - value) as f64 / optimum as f64
    }
}

pub fn run_strategy(
    strategy: Strategy,
    capacity: i64,
    items: &[Item],
    timeout: Option<Duration>,
) -> StrategyOutcome {
    let deadline = match timeout {
        Some(limit) => Deadline::after(limit),
        None => Deadline::none(),
    };
    let start = Instant::now();
    let result = strategy.solve(capacity, items, &deadline);
    let elapsed_secs = start.elapsed().as_secs_f64();

    let (solution, error) = match result {
        Ok(solution) => (Some(solution), None),
        Err(e) => {
            log::warn!("{} failed on {} items: {}", strategy, items.len(), e);
            (None, Some(e.to_string()))
        }
    };
    StrategyOutcome {
        strategy,
        solution,
        error,
        elapsed_secs,
        gap_to_optimum: None,
    }
}

pub fn solve_cave(cave: CaveSize, seed: &[u8; 32], settings: &RunSettings) -> Result<CaveReport> {
    let challenge = Challenge::generate_instance(seed, &cave.difficulty(settings.capacity))?;
    log::info!(
        "{} cave: {} items, backpack holds {} lbs",
        cave,
        challenge.items.len(),
        challenge.max_weight
    );

    let mut outcomes: Vec<StrategyOutcome> = settings
        .strategies
        .iter()
        .map(|&strategy| {
            run_strategy(
                strategy,
                challenge.max_weight,
                &challenge.items,
                settings.timeout(),
            )
        })
        .collect();

    for outcome in &outcomes {
        if let Some(solution) = &outcome.solution {
            challenge
                .verify_solution(solution)
                .map_err(|e| anyhow!("{} produced an invalid solution: {}", outcome.strategy, e))?;
        }
    }

    let optimum = outcomes
        .iter()
        .filter(|outcome| outcome.strategy.is_exact())
        .find_map(|outcome| outcome.solution.as_ref().map(|s| s.total_value));
    if let Some(optimum) = optimum {
        for outcome in outcomes.iter_mut() {
            outcome.gap_to_optimum = outcome
                .solution
                .as_ref()
                .map(|s| relative_gap(optimum, s.total_value));
        }
    }

    Ok(CaveReport {
        cave,
        challenge,
        optimum,
        outcomes,
    })
}

/// Caves are independent; with more than one worker they are solved
/// concurrently, one blocking task per cave. Reports keep the settings order.
pub fn run_caves(settings: &RunSettings) -> Result<Vec<CaveReport>> {
    let seeds = cave_seeds(settings);
    if settings.workers <= 1 {
        return seeds
            .iter()
            .map(|(cave, seed)| solve_cave(*cave, seed, settings))
            .collect();
    }

    let num_workers = settings.workers;
    let settings = Arc::new(settings.clone());
    let runtime = Runtime::new()?;
    runtime.block_on(async {
        let results = stream::iter(seeds.into_iter().enumerate())
            .map(|(i, (cave, seed))| {
                let settings = Arc::clone(&settings);
                tokio::task::spawn_blocking(move || (i, solve_cave(cave, &seed, &settings)))
            })
            .buffer_unordered(num_workers)
            .collect::<Vec<_>>()
            .await;

        let mut reports = Vec::with_capacity(results.len());
        for result in results {
            let (i, report) = result?;
            reports.push((i, report?));
        }
        reports.sort_by_key(|(i, _)| *i);
        Ok::<Vec<CaveReport>, anyhow::Error>(reports.into_iter().map(|(_, r)| r).collect())
    })
}

/// Solves a caller-supplied item list. With `skip_invalid`, items with a
/// negative weight or value are dropped instead of failing the call; the
/// returned indices still refer to the original list.
pub fn solve_items(
    items: Vec<Item>,
    capacity: i64,
    strategy: Strategy,
    timeout: Option<Duration>,
    skip_invalid: bool,
) -> Result<Solution> {
    let deadline = match timeout {
        Some(limit) => Deadline::after(limit),
        None => Deadline::none(),
    };
    if !skip_invalid {
        return Ok(strategy.solve(capacity, &items, &deadline)?);
    }

    let original_indices: Vec<usize> = (0..items.len())
        .filter(|&i| items[i].is_valid())
        .collect();
    let (valid_items, skipped) = partition_valid_items(items);
    if !skipped.is_empty() {
        log::info!("skipped {} invalid items", skipped.len());
    }
    let mut solution = strategy.solve(capacity, &valid_items, &deadline)?;
    solution.items = solution
        .items
        .into_iter()
        .map(|i| original_indices[i])
        .collect();
    Ok(solution)
}

pub fn write_report<W: Write>(out: &mut W, report: &CaveReport) -> std::io::Result<()> {
    for outcome in &report.outcomes {
        writeln!(
            out,
            "\nStarting {} cave ({} items), {} approach...",
            report.cave,
            report.challenge.items.len(),
            outcome.strategy
        )?;
        match (&outcome.solution, &outcome.error) {
            (Some(solution), _) => {
                writeln!(out, "\nBest items to put in knapsack: ")?;
                for item in solution.selected(&report.challenge.items) {
                    writeln!(out, "-{}", item)?;
                }
                writeln!(
                    out,
                    "\nTotal: {} lbs, ${}",
                    solution.total_weight, solution.total_value
                )?;
                if let Some(gap) = outcome.gap_to_optimum {
                    writeln!(out, "{:.1}% below the optimum", gap * 100.0)?;
                }
            }
            (None, Some(error)) => writeln!(out, "\nFailed: {}", error)?,
            (None, None) => {}
        }
        writeln!(
            out,
            "\nResult calculated in {:.5} seconds\n",
            outcome.elapsed_secs
        )?;
        writeln!(out, "\n-------------------------")?;
    }
    Ok(())
}
