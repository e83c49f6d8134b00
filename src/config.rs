use clap::Args;

use crate::core::ProjectionParams;
use crate::i18n::Language;

/// Input bounds offered by the calculator form.
pub mod limits {
    pub const MIN_CURRENT_AGE: u32 = 18;
    pub const MAX_CURRENT_AGE: u32 = 99;
    pub const MIN_RETIREMENT_AGE: u32 = 50;
    pub const MAX_RETIREMENT_AGE: u32 = 79;
    pub const MAX_INCOME_GROWTH_RATE: f64 = 10.0;
    pub const MAX_ANNUAL_RETURN: f64 = 15.0;
    pub const MAX_INFLATION_RATE: f64 = 10.0;
}

pub mod defaults {
    pub const CURRENT_AGE: u32 = 30;
    pub const RETIREMENT_AGE: u32 = 65;
    pub const CURRENT_SAVINGS: f64 = 71_000.0;
    pub const MONTHLY_INCOME: f64 = 12_833.0;
    pub const INCOME_GROWTH_RATE: f64 = 6.5;
    pub const MONTHLY_EXPENSES: f64 = 6_500.0;
    pub const ANNUAL_RETURN: f64 = 6.0;
    pub const INFLATION_RATE: f64 = 3.5;
    pub const CURRENCY: &str = "PLN";
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ParamArgs {
    #[arg(long, default_value_t = defaults::CURRENT_AGE)]
    pub current_age: u32,
    #[arg(
        long,
        default_value_t = defaults::RETIREMENT_AGE,
        help = "Age at which you plan to retire"
    )]
    pub retirement_age: u32,
    #[arg(
        long,
        default_value_t = defaults::CURRENT_SAVINGS,
        help = "Amount already saved"
    )]
    pub current_savings: f64,
    #[arg(
        long,
        default_value_t = defaults::MONTHLY_INCOME,
        help = "Current net monthly income, including bonuses and tax refunds"
    )]
    pub monthly_income: f64,
    #[arg(
        long,
        default_value_t = defaults::INCOME_GROWTH_RATE,
        help = "Expected annual income growth in percent (promotions, wage inflation)"
    )]
    pub income_growth_rate: f64,
    #[arg(
        long,
        default_value_t = defaults::MONTHLY_EXPENSES,
        help = "Current monthly living costs"
    )]
    pub monthly_expenses: f64,
    #[arg(
        long,
        default_value_t = defaults::ANNUAL_RETURN,
        help = "Expected annual investment return in percent"
    )]
    pub annual_return: f64,
    #[arg(
        long,
        default_value_t = defaults::INFLATION_RATE,
        help = "Expected average annual inflation in percent (expense growth)"
    )]
    pub inflation_rate: f64,
    #[arg(
        long,
        default_value = defaults::CURRENCY,
        help = "Currency label printed next to amounts; no conversion is applied"
    )]
    pub currency: String,
    #[arg(long, default_value_t = Language::Pl, help = "Display language: pl, en or de")]
    pub lang: Language,
}

impl Default for ParamArgs {
    fn default() -> Self {
        ParamArgs {
            current_age: defaults::CURRENT_AGE,
            retirement_age: defaults::RETIREMENT_AGE,
            current_savings: defaults::CURRENT_SAVINGS,
            monthly_income: defaults::MONTHLY_INCOME,
            income_growth_rate: defaults::INCOME_GROWTH_RATE,
            monthly_expenses: defaults::MONTHLY_EXPENSES,
            annual_return: defaults::ANNUAL_RETURN,
            inflation_rate: defaults::INFLATION_RATE,
            currency: defaults::CURRENCY.to_string(),
            lang: Language::Pl,
        }
    }
}

/// Checks each field against the form bounds. Cross-field rules (retirement
/// after current age, income above expenses) are left to the engine.
pub fn build_params(args: &ParamArgs) -> Result<ProjectionParams, String> {
    use self::limits::*;

    if !(MIN_CURRENT_AGE..=MAX_CURRENT_AGE).contains(&args.current_age) {
        return Err(format!(
            "--current-age must be between {MIN_CURRENT_AGE} and {MAX_CURRENT_AGE}"
        ));
    }

    if !(MIN_RETIREMENT_AGE..=MAX_RETIREMENT_AGE).contains(&args.retirement_age) {
        return Err(format!(
            "--retirement-age must be between {MIN_RETIREMENT_AGE} and {MAX_RETIREMENT_AGE}"
        ));
    }

    for (name, value) in [
        ("--current-savings", args.current_savings),
        ("--monthly-income", args.monthly_income),
        ("--monthly-expenses", args.monthly_expenses),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(format!("{name} must be >= 0"));
        }
    }

    for (name, value, max) in [
        (
            "--income-growth-rate",
            args.income_growth_rate,
            MAX_INCOME_GROWTH_RATE,
        ),
        ("--annual-return", args.annual_return, MAX_ANNUAL_RETURN),
        ("--inflation-rate", args.inflation_rate, MAX_INFLATION_RATE),
    ] {
        if !(0.0..=max).contains(&value) {
            return Err(format!("{name} must be between 0 and {max}"));
        }
    }

    if args.currency.trim().is_empty() {
        return Err("--currency must not be empty".to_string());
    }

    Ok(ProjectionParams {
        current_age: args.current_age,
        retirement_age: args.retirement_age,
        current_savings: args.current_savings,
        monthly_income: args.monthly_income,
        monthly_expenses: args.monthly_expenses,
        income_growth_rate: args.income_growth_rate,
        inflation_rate: args.inflation_rate,
        annual_return: args.annual_return,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        args: ParamArgs,
    }

    #[test]
    fn clap_defaults_match_default_impl() {
        let cli = TestCli::try_parse_from(["nestegg"]).expect("defaults parse");
        assert_eq!(cli.args, ParamArgs::default());
    }

    #[test]
    fn clap_parses_flags_and_language_tag() {
        let cli = TestCli::try_parse_from([
            "nestegg",
            "--current-age",
            "40",
            "--annual-return",
            "7.5",
            "--lang",
            "en-GB",
            "--currency",
            "GBP",
        ])
        .expect("flags parse");
        assert_eq!(cli.args.current_age, 40);
        assert_eq!(cli.args.annual_return, 7.5);
        assert_eq!(cli.args.lang, Language::En);
        assert_eq!(cli.args.currency, "GBP");
    }

    #[test]
    fn clap_rejects_unknown_language() {
        assert!(TestCli::try_parse_from(["nestegg", "--lang", "fr"]).is_err());
    }

    #[test]
    fn build_params_accepts_defaults() {
        let params = build_params(&ParamArgs::default()).expect("valid defaults");
        assert_eq!(params.current_age, 30);
        assert_eq!(params.retirement_age, 65);
        assert_eq!(params.monthly_income, 12_833.0);
        assert_eq!(params.annual_return, 6.0);
    }

    #[test]
    fn build_params_rejects_out_of_range_ages() {
        let mut args = ParamArgs::default();
        args.current_age = 17;
        let err = build_params(&args).expect_err("too young");
        assert!(err.contains("--current-age"));

        let mut args = ParamArgs::default();
        args.retirement_age = 80;
        let err = build_params(&args).expect_err("retirement too late");
        assert!(err.contains("--retirement-age"));
    }

    #[test]
    fn build_params_leaves_age_order_to_the_engine() {
        let mut args = ParamArgs::default();
        args.current_age = 70;
        args.retirement_age = 65;
        assert!(build_params(&args).is_ok());
    }

    #[test]
    fn build_params_rejects_negative_or_non_finite_amounts() {
        let mut args = ParamArgs::default();
        args.current_savings = -1.0;
        let err = build_params(&args).expect_err("negative savings");
        assert!(err.contains("--current-savings"));

        let mut args = ParamArgs::default();
        args.monthly_expenses = f64::NAN;
        let err = build_params(&args).expect_err("NaN expenses");
        assert!(err.contains("--monthly-expenses"));
    }

    #[test]
    fn build_params_rejects_rates_outside_form_bounds() {
        let mut args = ParamArgs::default();
        args.annual_return = 15.5;
        let err = build_params(&args).expect_err("return too high");
        assert_eq!(err, "--annual-return must be between 0 and 15");

        let mut args = ParamArgs::default();
        args.inflation_rate = -0.1;
        let err = build_params(&args).expect_err("negative inflation");
        assert!(err.contains("--inflation-rate"));
    }

    #[test]
    fn build_params_rejects_blank_currency() {
        let mut args = ParamArgs::default();
        args.currency = "  ".to_string();
        let err = build_params(&args).expect_err("blank currency");
        assert!(err.contains("--currency"));
    }
}
