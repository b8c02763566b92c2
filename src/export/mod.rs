//! CSV export of a completed schedule
//!
//! The layout is fixed at 9 columns: payment number, then the four
//! minimum-path figures, then the four goal-path figures. Currency columns
//! are rendered with 0 decimal places and equity columns with 3; goal-path
//! cells are empty strings once that path has finished.

use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::schedule::{PathSnapshot, Schedule};

/// Column headers, one per exported field
pub const CSV_HEADERS: [&str; 9] = [
    "Payment Number",
    "Min Payment Scenario - Cumulative Payments",
    "Min Payment Scenario - Remaining Balance",
    "Min Payment Scenario - Cumulative Interest Paid",
    "Min Payment Scenario - Equity (%)",
    "Goal Payment Scenario - Cumulative Payments",
    "Goal Payment Scenario - Remaining Balance",
    "Goal Payment Scenario - Cumulative Interest Paid",
    "Goal Payment Scenario - Equity (%)",
];

fn snapshot_cells(snapshot: Option<&PathSnapshot>) -> [String; 4] {
    match snapshot {
        Some(s) => [
            format!("{:.0}", s.cumulative_paid),
            format!("{:.0}", s.balance),
            format!("{:.0}", s.cumulative_interest),
            format!("{:.3}", s.equity),
        ],
        None => Default::default(),
    }
}

/// Write the schedule as CSV to any writer
pub fn write_csv<W: Write>(writer: W, schedule: &Schedule) -> Result<(), Box<dyn Error>> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADERS)?;

    for row in &schedule.rows {
        let minimum = snapshot_cells(Some(&row.minimum));
        let goal = snapshot_cells(row.goal.as_ref());
        let mut record = Vec::with_capacity(9);
        record.push(row.payment_number.to_string());
        record.extend(minimum);
        record.extend(goal);
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the schedule as a CSV file at the given path
pub fn write_csv_file<P: AsRef<Path>>(path: P, schedule: &Schedule) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    write_csv(file, schedule)
}

/// Render the schedule as an in-memory CSV string
pub fn to_csv_string(schedule: &Schedule) -> Result<String, Box<dyn Error>> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, schedule)?;
    Ok(String::from_utf8(buffer)?)
}
