//! Printshop CLI - interactive queue management front end
//!
//! Thin menu layer over `printshop-core`: reads choices, validates indices
//! before calling in, and renders status. All queue state lives in the
//! in-process [`PrintQueueService`] for this run.

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use printshop_core::application::{CandidateSource, OptimizationReport, PrintQueueService};
use printshop_core::domain::{DomainError, JobKind, MaterialKind, Money, Objective};
use printshop_core::port::{SequentialIdProvider, SystemClock};
use printshop_core::AppError;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tabled::{Table, Tabled};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "printshop")]
#[command(about = "Print shop queue management with budget optimization", long_about = None)]
#[command(version)]
struct Cli {
    /// Starting budget in whole dollars (prompted interactively when absent)
    #[arg(long, env = "PRINTSHOP_BUDGET")]
    budget: Option<u64>,
}

#[derive(Tabled)]
struct QueueRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Job")]
    job: String,
}

#[derive(Tabled)]
struct ChosenRow {
    #[tabled(rename = "Job")]
    job: &'static str,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "Source")]
    source: String,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    println!("Welcome to the print shop queue management system!");

    let mut service = build_service(cli.budget)?;
    debug!(budget = %service.initial_budget(), "controller constructed");

    loop {
        println!();
        println!("1. Start a new print job");
        println!("2. Review all jobs");
        println!("3. Maximize value");
        println!("4. Exit");

        match prompt("Enter your choice (1-4): ")?.as_str() {
            "1" => new_job(&mut service)?,
            "2" => review(&service),
            "3" => optimize(&service)?,
            "4" => {
                println!("Thank you for using the print shop. Goodbye!");
                return Ok(());
            }
            other => println!("{}", format!("Invalid choice: {other:?}").red()),
        }
    }
}

fn init_logging() {
    let log_format = std::env::var("PRINTSHOP_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("printshop=warn"))
        .expect("Failed to create env filter");

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }
}

/// Composition root: wire the production ports into a controller.
///
/// The budget must be a non-negative integer before the ledger exists;
/// garbage input re-prompts instead of crashing.
fn build_service(budget_flag: Option<u64>) -> Result<PrintQueueService> {
    let mut budget = budget_flag;
    loop {
        let dollars = match budget.take() {
            Some(dollars) => dollars,
            None => match prompt("Enter your starting budget ($): ")?.parse::<u64>() {
                Ok(dollars) => dollars,
                Err(_) => {
                    println!(
                        "{}",
                        "The budget must be a non-negative whole number of dollars.".red()
                    );
                    continue;
                }
            },
        };

        match PrintQueueService::new(
            Money::from_dollars(dollars),
            Arc::new(SequentialIdProvider::new()),
            Arc::new(SystemClock),
        ) {
            Ok(service) => return Ok(service),
            Err(AppError::Validation(message)) => println!("{}", message.red()),
            Err(err) => return Err(err.into()),
        }
    }
}

fn new_job(service: &mut PrintQueueService) -> Result<()> {
    println!("\nAvailable print job options:");
    for (number, kind) in JobKind::ALL.iter().enumerate() {
        println!("{}. {}", number + 1, kind);
    }

    let kind = loop {
        let choice = prompt("Please enter the number of your job choice: ")?;
        match parse_one_based(&choice).and_then(|index| service.job_kind_by_index(index).ok()) {
            Some(kind) => break kind,
            None => println!("{}", "Please pick one of the listed jobs.".red()),
        }
    };

    println!("\nAvailable materials:");
    for (number, material) in MaterialKind::ALL.iter().enumerate() {
        println!("{}. {}", number + 1, material);
    }

    let settings = loop {
        let line = prompt("Enter material numbers separated by commas (blank for none): ")?;
        match parse_material_indices(&line) {
            Some(indices) => match service.build_settings(&indices) {
                Ok(settings) => break settings,
                Err(_) => println!("{}", "Please pick only listed materials.".red()),
            },
            None => println!("{}", "Please enter numbers separated by commas.".red()),
        }
    };

    match service.process_job(kind, settings) {
        Ok(receipt) => {
            println!(
                "{}",
                format!(
                    "Processed job {} ({}). Total cost: {}. Remaining budget: {}",
                    receipt.job_id,
                    kind.name(),
                    receipt.cost,
                    receipt.remaining
                )
                .green()
            );
            Ok(())
        }
        Err(err) => match err.as_domain() {
            Some(DomainError::InsufficientBudget { cost, remaining, .. }) => {
                println!(
                    "{}",
                    format!(
                        "Not enough budget to process this job (cost {}, remaining {}).",
                        cost, remaining
                    )
                    .red()
                );
                Ok(())
            }
            _ => Err(err.into()),
        },
    }
}

fn review(service: &PrintQueueService) {
    let report = service.review_jobs();

    if report.entries.is_empty() {
        println!("No jobs currently in system.");
        return;
    }

    let rows: Vec<QueueRow> = report
        .entries
        .into_iter()
        .map(|entry| QueueRow {
            id: entry.id,
            job: entry.line,
        })
        .collect();
    println!("{}", Table::new(rows));
    println!("Total cost: {}", report.total_cost);
    println!("Total print time: {} minutes", report.total_duration_min);
    println!("Remaining budget: {}", service.remaining_budget());
}

fn optimize(service: &PrintQueueService) -> Result<()> {
    println!("\nObjectives:");
    println!("1. Profit");
    println!("2. Revenue");
    println!("3. Job count");

    let objective = loop {
        match prompt("Enter the objective to maximize (1-3): ")?.as_str() {
            "1" => break Objective::Profit,
            "2" => break Objective::Revenue,
            "3" => break Objective::Count,
            _ => println!("{}", "Please pick 1, 2 or 3.".red()),
        }
    };

    let report = service.optimize(objective)?;
    print_optimization(service, &report);
    Ok(())
}

fn print_optimization(service: &PrintQueueService, report: &OptimizationReport) {
    let best = match report.objective {
        Objective::Count => format!("{} jobs", report.max_value),
        _ => Money::from_cents(report.max_value).to_string(),
    };
    println!(
        "{}",
        format!(
            "Maximum {} achievable with the original budget ({}): {}",
            report.objective,
            service.initial_budget(),
            best
        )
        .green()
    );

    if report.chosen.is_empty() {
        return;
    }
    let rows: Vec<ChosenRow> = report
        .chosen
        .iter()
        .map(|candidate| ChosenRow {
            job: candidate.kind.name(),
            cost: candidate.cost.to_string(),
            source: match candidate.source {
                CandidateSource::Queued(id) => format!("queued (job {id})"),
                CandidateSource::Speculative => "speculative".to_string(),
            },
        })
        .collect();
    println!("{}", Table::new(rows));
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().context("flushing stdout")?;

    let mut line = String::new();
    let bytes = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading stdin")?;
    if bytes == 0 {
        bail!("input closed");
    }
    Ok(line.trim().to_string())
}

/// Menu entries are 1-based; the catalog is 0-based.
fn parse_one_based(input: &str) -> Option<usize> {
    input.parse::<usize>().ok()?.checked_sub(1)
}

/// Comma-separated 1-based indices; a blank line means no materials.
fn parse_material_indices(line: &str) -> Option<Vec<usize>> {
    if line.is_empty() {
        return Some(Vec::new());
    }
    line.split(',')
        .map(|part| parse_one_based(part.trim()))
        .collect()
}
