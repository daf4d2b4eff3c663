use chrono::NaiveDate;
use log::error;
use mortgage::*;
use simple_logger::SimpleLogger;

fn main() {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .unwrap();

    let raw = RawComparisonInput {
        current: RawLoanInput {
            principal: 200000.,
            annual_rate_percent: 4.5,
            term_months: 360.,
            extra_payment: Some(10000.),
        },
        refinance_rate_percent: 3.,
        refinance_term_months: 360.,
        closing_cost_fees: None,
        flat_closing_costs: Some(4000.),
    };

    let inputs = match validate_comparison(&raw) {
        Ok(inputs) => inputs,
        Err(errors) => {
            error!("{}", errors);
            std::process::exit(1);
        }
    };

    let config = AnalysisConfig::default();
    let comparison = compare_options(&inputs, &config);

    for outcome in comparison.outcomes() {
        println!(
            "{}: payment ${:.2}, total interest ${:.2}, paid off in {} months",
            outcome.variant,
            outcome.monthly_payment,
            outcome.total_interest,
            outcome.months_to_payoff()
        );
    }
    println!(
        "refinance {} (closing costs ${:.2}), best option: {}",
        comparison.break_even,
        comparison.closing_costs.amount,
        comparison.best_option()
    );

    let first_pmt_date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
    match comparison.refinance.schedule.dated(first_pmt_date) {
        Ok(dated) => {
            for row in dated.iter().take(12) {
                println!("{} {}", row.due_date, row.entry);
            }
        }
        Err(err) => error!("{}", err),
    }
}

// verifies that types can implement the gated traits below
#[allow(dead_code)]
fn is_normal<T: Sized + Send + Sync + Unpin>() {}

#[test]
fn normal_types() {
    is_normal::<ScheduleEntry>();
    is_normal::<Comparison>();
}
