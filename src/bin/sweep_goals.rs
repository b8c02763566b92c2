//! Sweep goal payoff terms for one mortgage and tabulate the savings
//!
//! Runs one independent schedule per candidate goal term (in parallel) and
//! prints a per-term summary table for comparison; optionally writes the
//! table as CSV.

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use mortgage_planner::{summarize, LoanTerms, ScheduleEngine, ScheduleSummary};

#[derive(Parser, Debug)]
#[command(
    name = "sweep_goals",
    about = "Evaluate a range of accelerated payoff terms for one mortgage"
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

    /// Spacing between candidate goal terms, in months
    #[arg(long, default_value_t = 12)]
    step_months: u32,

    /// Write the sweep table to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

struct SweepRow {
    goal_term: u32,
    goal_payment: f64,
    summary: ScheduleSummary,
}

fn format_option_i32(value: Option<i32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn format_option_dollars(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.0}"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let base_terms = LoanTerms {
        loan_amount: args.loan_amount,
        down_payment: args.down_payment,
        annual_rate: args.annual_rate,
        term_months: args.term_months,
        goal_term_months: args.term_months,
    };
    base_terms.validate().context("invalid loan terms")?;
    if args.step_months == 0 {
        anyhow::bail!("step must be at least one month");
    }

    let min_payment = base_terms.minimum_payment();
    println!(
        "Minimum payment: ${:.2} over {} months",
        min_payment, args.term_months
    );

    let goal_terms: Vec<u32> = (args.step_months..args.term_months)
        .step_by(args.step_months as usize)
        .collect();

    let start = Instant::now();
    let rows: Vec<SweepRow> = goal_terms
        .par_iter()
        .map(|&goal_term| {
            let terms = LoanTerms {
                goal_term_months: goal_term,
                ..base_terms.clone()
            };
            let goal_payment = terms.goal_payment();
            let schedule = ScheduleEngine::new(terms, min_payment, goal_payment).run();
            SweepRow {
                goal_term,
                goal_payment,
                summary: summarize(&schedule),
            }
        })
        .collect();
    println!(
        "Swept {} goal terms in {:?}\n",
        rows.len(),
        start.elapsed()
    );

    println!(
        "{:>9} | {:>12} | {:>12} | {:>14} | {:>14} | {:>15}",
        "GoalTerm", "GoalPayment", "PMIDropGoal", "PMISavedMonths", "InterestSaved", "ExtraPrincipal"
    );
    for row in &rows {
        println!(
            "{:>9} | {:>12.2} | {:>12} | {:>14} | {:>14} | {:>15}",
            row.goal_term,
            row.goal_payment,
            format_option_i32(row.summary.goal_pmi_drop.map(|p| p as i32)),
            format_option_i32(row.summary.months_saved_on_pmi),
            format_option_dollars(row.summary.interest_saved),
            format_option_dollars(row.summary.extra_principal_paid),
        );
    }

    if let Some(path) = &args.csv {
        let mut file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        writeln!(
            file,
            "GoalTermMonths,GoalPayment,PMIDropGoal,PMISavedMonths,InterestSaved,ExtraPrincipal"
        )?;
        for row in &rows {
            writeln!(
                file,
                "{},{:.2},{},{},{},{}",
                row.goal_term,
                row.goal_payment,
                format_option_i32(row.summary.goal_pmi_drop.map(|p| p as i32)),
                format_option_i32(row.summary.months_saved_on_pmi),
                format_option_dollars(row.summary.interest_saved),
                format_option_dollars(row.summary.extra_principal_paid),
            )?;
        }
        println!("\nSweep table written to {}", path.display());
    }

    Ok(())
}
