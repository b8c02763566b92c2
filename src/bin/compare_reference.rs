//! Compare computed monthly payments with published amortization values
//!
//! Reference payments come from standard online amortization calculators,
//! rounded to cents

use mortgage_planner::monthly_payment;

fn main() {
    // (loan amount, annual rate, term months, reference payment)
    let reference_values = [
        (300_000.0, 0.06, 360, 1_798.65),
        (400_000.0, 0.05, 360, 2_147.29),
        (400_000.0, 0.05, 240, 2_639.82),
        (200_000.0, 0.05, 360, 1_073.64),
        (150_000.0, 0.045, 180, 1_147.49),
        (1_000.0, 0.12, 12, 88.85),
    ];

    println!("Computed vs reference monthly payments");
    println!(
        "{:<12} {:<8} {:<6} {:<14} {:<14} {:<10}",
        "Loan", "Rate", "Term", "Computed", "Reference", "Diff"
    );

    for (loan, rate, term, reference) in reference_values {
        let computed = monthly_payment(loan, rate, term);
        println!(
            "{:<12.0} {:<8.4} {:<6} {:<14.4} {:<14.2} {:<10.4}",
            loan,
            rate,
            term,
            computed,
            reference,
            computed - reference
        );
    }
}
