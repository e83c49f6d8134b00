use serde::Serialize;
use thiserror::Error;

/// Inputs for a single projection run. Rates are percentages, e.g. `6.5` for 6.5%/year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionParams {
    pub current_age: u32,
    pub retirement_age: u32,
    pub current_savings: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub income_growth_rate: f64,
    pub inflation_rate: f64,
    pub annual_return: f64,
}

impl ProjectionParams {
    /// Number of simulated years after the starting one.
    pub fn years_to_retirement(&self) -> u32 {
        self.retirement_age.saturating_sub(self.current_age)
    }

    pub fn monthly_surplus(&self) -> f64 {
        self.monthly_income - self.monthly_expenses
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    pub age: u32,
    pub annual_income: f64,
    pub annual_expenses: f64,
    pub annual_contribution: f64,
    pub nominal_value: f64,
    pub real_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub final_nominal: f64,
    pub final_real: f64,
    pub total_contributions: f64,
    pub avg_annual_contribution: f64,
    pub investment_gain: f64,
    pub monthly_pension_nominal: f64,
    pub monthly_pension_real: f64,
    /// `None` when current monthly expenses are zero.
    pub pension_coverage_pct: Option<f64>,
    /// Rule of 72; `None` when the annual return is not positive.
    pub doubling_time_years: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionResult {
    pub years: Vec<YearRecord>,
    pub summary: ProjectionSummary,
}

impl ProjectionResult {
    /// The record for the retirement year. A result always holds at least two years.
    pub fn retirement_year(&self) -> &YearRecord {
        &self.years[self.years.len() - 1]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    #[error("retirement age {retirement_age} must be greater than current age {current_age}")]
    InvalidAgeRange {
        current_age: u32,
        retirement_age: u32,
    },
    #[error("monthly income {monthly_income} must exceed monthly expenses {monthly_expenses}")]
    NoSurplus {
        monthly_income: f64,
        monthly_expenses: f64,
    },
}

impl ValidationError {
    /// Stable machine-readable identifier.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidAgeRange { .. } => "invalid-age-range",
            ValidationError::NoSurplus { .. } => "no-surplus",
        }
    }
}
