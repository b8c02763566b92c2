//! Compute a single mortgage payoff comparison from the command line
//!
//! Prints both monthly payments and the headline savings metrics, and can
//! write the full schedule as CSV or the summary as JSON

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use mortgage_planner::{export, summarize, LoanTerms, ScheduleEngine, ScheduleSummary};

#[derive(Parser, Debug)]
#[command(
    name = "run_schedule",
    about = "Compare minimum-payment and goal-payment mortgage schedules"
)]
struct Args {
    /// Outstanding loan amount in dollars
    #[arg(long)]
    loan_amount: f64,

    /// Down payment already held outside the loan, in dollars
    #[arg(long, default_value_t = 0.0)]
    down_payment: f64,

    /// Annual interest rate as a fraction (0.065 = 6.5%)
    #[arg(long)]
    annual_rate: f64,

    /// Remaining payments on the current mortgage
    #[arg(long)]
    term_months: u32,

    /// Target number of payments for the accelerated payoff
    #[arg(long)]
    goal_term_months: u32,

    /// Write the full schedule to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn print_metric_months(label: &str, value: Option<i32>) {
    match value {
        Some(months) => println!("  {label}: {months} payments"),
        None => println!("  {label}: never (within the scheduled term)"),
    }
}

fn print_metric_dollars(label: &str, value: Option<f64>) {
    match value {
        Some(amount) => println!("  {label}: ${amount:.0}"),
        None => println!("  {label}: n/a (goal path never pays off)"),
    }
}

fn print_summary(summary: &ScheduleSummary) {
    println!("\nSummary:");
    print_metric_months(
        "PMI dropped (minimum path)",
        summary.minimum_pmi_drop.map(|p| p as i32),
    );
    print_metric_months(
        "PMI dropped (goal path)",
        summary.goal_pmi_drop.map(|p| p as i32),
    );
    print_metric_months("PMI payments saved", summary.months_saved_on_pmi);
    print_metric_dollars("Interest saved", summary.interest_saved);
    print_metric_dollars("Extra principal paid by payoff", summary.extra_principal_paid);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let terms = LoanTerms {
        loan_amount: args.loan_amount,
        down_payment: args.down_payment,
        annual_rate: args.annual_rate,
        term_months: args.term_months,
        goal_term_months: args.goal_term_months,
    };
    terms.validate().context("invalid loan terms")?;

    let min_payment = terms.minimum_payment();
    let goal_payment = terms.goal_payment();
    println!(
        "Minimum payment: ${:.2} over {} months",
        min_payment, terms.term_months
    );
    println!(
        "Goal payment:    ${:.2} over {} months",
        goal_payment, terms.goal_term_months
    );
    println!("Difference:      ${:.2}/month", goal_payment - min_payment);

    let start = Instant::now();
    let schedule = ScheduleEngine::new(terms, min_payment, goal_payment).run();
    let summary = summarize(&schedule);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    if let Some(path) = &args.csv {
        export::write_csv_file(path, &schedule)
            .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;
        println!("\nSchedule written to {}", path.display());
    }

    log::debug!("computed {} rows in {:?}", schedule.len(), start.elapsed());
    Ok(())
}
