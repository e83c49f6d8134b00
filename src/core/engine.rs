use std::cmp::Ordering;

use tracing::debug;

use super::types::{
    ProjectionParams, ProjectionResult, ProjectionSummary, ValidationError, YearRecord,
};

const MONTHS_PER_YEAR: f64 = 12.0;
const SAFE_WITHDRAWAL_RATE: f64 = 0.04;
const RULE_OF_72: f64 = 72.0;

pub fn project(params: &ProjectionParams) -> Result<ProjectionResult, ValidationError> {
    validate(params)?;

    let horizon = params.years_to_retirement();
    let mut years = Vec::with_capacity(horizon as usize + 1);
    let mut capital = params.current_savings;

    for year in 0..=horizon {
        let annual_income = params.monthly_income
            * MONTHS_PER_YEAR
            * compound_factor(params.income_growth_rate, year);
        let annual_expenses = params.monthly_expenses
            * MONTHS_PER_YEAR
            * compound_factor(params.inflation_rate, year);
        let annual_contribution = annual_income - annual_expenses;

        // Year 0 is the starting balance: no return, no contribution.
        if year > 0 {
            capital = grow_capital(capital, annual_contribution, params.annual_return);
        }

        years.push(YearRecord {
            age: params.current_age + year,
            annual_income,
            annual_expenses,
            annual_contribution,
            nominal_value: capital,
            real_value: capital / compound_factor(params.inflation_rate, year),
        });
    }

    let summary = summarize(params, &years);
    debug!(
        years = years.len(),
        final_nominal = summary.final_nominal,
        final_real = summary.final_real,
        "projection complete"
    );

    Ok(ProjectionResult { years, summary })
}

fn validate(params: &ProjectionParams) -> Result<(), ValidationError> {
    if params.retirement_age <= params.current_age {
        return Err(ValidationError::InvalidAgeRange {
            current_age: params.current_age,
            retirement_age: params.retirement_age,
        });
    }

    // NaN on either side compares as None and is rejected too.
    if params.monthly_income.partial_cmp(&params.monthly_expenses) != Some(Ordering::Greater) {
        return Err(ValidationError::NoSurplus {
            monthly_income: params.monthly_income,
            monthly_expenses: params.monthly_expenses,
        });
    }

    Ok(())
}

fn compound_factor(rate_pct: f64, year: u32) -> f64 {
    (1.0 + rate_pct / 100.0).powi(year as i32)
}

/// One year of capital growth. A deficit is never withdrawn; it counts as a zero contribution.
fn grow_capital(previous: f64, contribution: f64, annual_return_pct: f64) -> f64 {
    let growth = 1.0 + annual_return_pct / 100.0;
    if contribution > 0.0 {
        (previous + contribution) * growth
    } else {
        previous * growth
    }
}

fn summarize(params: &ProjectionParams, years: &[YearRecord]) -> ProjectionSummary {
    let last = years[years.len() - 1];
    let final_nominal = last.nominal_value;
    let final_real = last.real_value;

    let contributions: Vec<f64> = years
        .iter()
        .skip(1)
        .map(|y| y.annual_contribution)
        .collect();
    let total_contributions = params.current_savings + contributions.iter().sum::<f64>();

    let positive: Vec<f64> = contributions.iter().copied().filter(|&c| c > 0.0).collect();
    let avg_annual_contribution = if positive.is_empty() {
        0.0
    } else {
        positive.iter().sum::<f64>() / positive.len() as f64
    };

    let monthly_pension_nominal = final_nominal * SAFE_WITHDRAWAL_RATE / MONTHS_PER_YEAR;
    let monthly_pension_real = final_real * SAFE_WITHDRAWAL_RATE / MONTHS_PER_YEAR;

    let pension_coverage_pct = if params.monthly_expenses > 0.0 {
        Some(monthly_pension_real / params.monthly_expenses * 100.0)
    } else {
        None
    };

    let doubling_time_years = if params.annual_return > 0.0 {
        Some(RULE_OF_72 / params.annual_return)
    } else {
        None
    };

    ProjectionSummary {
        final_nominal,
        final_real,
        total_contributions,
        avg_annual_contribution,
        investment_gain: final_nominal - total_contributions,
        monthly_pension_nominal,
        monthly_pension_real,
        pension_coverage_pct,
        doubling_time_years,
    }
}
