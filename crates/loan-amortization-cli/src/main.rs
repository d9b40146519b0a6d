mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::compare::CompareArgs;
use commands::loan::{PaymentArgs, ScheduleArgs, SummaryArgs};
use commands::views::{DistributionArgs, PageArgs, YearlyArgs};

/// Amortizing-loan schedules, summaries and comparisons
#[derive(Parser)]
#[command(
    name = "amort",
    version,
    about = "Amortizing-loan schedules, summaries and comparisons",
    long_about = "A CLI for fixed-rate loan amortization with decimal precision. \
                  Computes monthly payments, month-by-month schedules, lifetime \
                  totals and side-by-side comparisons across terms, rates and amounts."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log computation details to stderr (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the fixed monthly payment
    Payment(PaymentArgs),
    /// Generate the month-by-month amortization schedule
    Schedule(ScheduleArgs),
    /// Payment, lifetime totals and (optionally) the schedule
    Summary(SummaryArgs),
    /// Compare the loan across values of one parameter
    Compare(CompareArgs),
    /// Principal vs interest chart series and cost breakdown
    Distribution(DistributionArgs),
    /// Year-by-year totals and balances
    Yearly(YearlyArgs),
    /// One page of the schedule table, with optional month search
    Page(PageArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payment(args) => commands::loan::run_payment(args),
        Commands::Schedule(args) => commands::loan::run_schedule(args),
        Commands::Summary(args) => commands::loan::run_summary(args),
        Commands::Compare(args) => commands::compare::run_compare(args),
        Commands::Distribution(args) => commands::views::run_distribution(args),
        Commands::Yearly(args) => commands::views::run_yearly(args),
        Commands::Page(args) => commands::views::run_page(args),
        Commands::Version => {
            println!("amort {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
