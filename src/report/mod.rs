//! Localized presentation of a projection: chart series, table, metrics and notes.
//!
//! Everything here is a pure function of the engine output plus a [`Language`]
//! and a currency label. No value is recomputed; the engine's numbers are only
//! rounded and grouped for display.

use serde::Serialize;

use crate::core::{ProjectionParams, ProjectionResult, ValidationError};
use crate::i18n::{self, Language, keys};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NumberStyle {
    pub grouping: char,
    pub decimal: char,
}

impl NumberStyle {
    pub fn for_language(lang: Language) -> Self {
        match lang {
            Language::Pl => NumberStyle {
                grouping: ' ',
                decimal: ',',
            },
            Language::En => NumberStyle {
                grouping: ',',
                decimal: '.',
            },
            Language::De => NumberStyle {
                grouping: '.',
                decimal: ',',
            },
        }
    }
}

/// Formats `value` with `digits` decimals and language-specific separators.
pub fn format_decimal(value: f64, lang: Language, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let style = NumberStyle::for_language(lang);
    let raw = format!("{:.*}", digits, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (raw.as_str(), None),
    };

    let mut out = String::with_capacity(raw.len() + raw.len() / 3 + 1);
    // Rounding can turn a tiny negative into zero; never print "-0".
    if value < 0.0 && raw.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, style.grouping));
    if let Some(frac_part) = frac_part {
        out.push(style.decimal);
        out.push_str(frac_part);
    }
    out
}

/// Whole currency units, e.g. `1 234 567 PLN`.
pub fn format_amount(value: f64, lang: Language, currency: &str) -> String {
    let number = format_decimal(value, lang, 0);
    if currency.is_empty() {
        number
    } else {
        format!("{number} {currency}")
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

pub fn error_message(lang: Language, err: &ValidationError) -> String {
    let key = match err {
        ValidationError::InvalidAgeRange { .. } => keys::ERROR_INVALID_AGE_RANGE,
        ValidationError::NoSurplus { .. } => keys::ERROR_NO_SURPLUS,
    };
    i18n::text(lang, key).to_string()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub lang: Language,
    pub currency: String,
    pub title: String,
    pub surplus_note: String,
    pub chart: Chart,
    pub table: Table,
    pub summary_title: String,
    pub metrics: Vec<Metric>,
    pub notes_title: String,
    pub notes: Vec<String>,
    pub tips_title: String,
    pub tips: Vec<Tip>,
}

/// Raw series for plotting; only the labels are localized.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub x_label: String,
    pub y_label: String,
    pub nominal_label: String,
    pub real_label: String,
    pub ages: Vec<u32>,
    pub nominal: Vec<f64>,
    pub real: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub help: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    pub title: String,
    pub body: String,
}

pub fn build_report(
    params: &ProjectionParams,
    result: &ProjectionResult,
    lang: Language,
    currency: &str,
) -> Report {
    let amount = |value: f64| format_amount(value, lang, currency);
    let summary = &result.summary;

    let years = params.years_to_retirement().to_string();
    let title = i18n::format(lang, keys::CHART_TITLE, &[("years", years.as_str())]);
    let surplus_note = i18n::format(
        lang,
        keys::SURPLUS_NOTE,
        &[("amount", amount(params.monthly_surplus()).as_str())],
    );

    let chart = Chart {
        x_label: i18n::text(lang, keys::CHART_AXIS_AGE).to_string(),
        y_label: i18n::format(lang, keys::CHART_AXIS_VALUE, &[("currency", currency)]),
        nominal_label: i18n::text(lang, keys::CHART_SERIES_NOMINAL).to_string(),
        real_label: i18n::text(lang, keys::CHART_SERIES_REAL).to_string(),
        ages: result.years.iter().map(|y| y.age).collect(),
        nominal: result.years.iter().map(|y| y.nominal_value).collect(),
        real: result.years.iter().map(|y| y.real_value).collect(),
    };

    let table = Table {
        title: i18n::text(lang, keys::TABLE_TITLE).to_string(),
        headers: [
            keys::TABLE_AGE,
            keys::TABLE_INCOME,
            keys::TABLE_EXPENSES,
            keys::TABLE_CONTRIBUTION,
            keys::TABLE_NOMINAL,
            keys::TABLE_REAL,
        ]
        .into_iter()
        .map(|key| i18n::text(lang, key).to_string())
        .collect(),
        rows: result
            .years
            .iter()
            .map(|y| {
                vec![
                    y.age.to_string(),
                    amount(y.annual_income),
                    amount(y.annual_expenses),
                    amount(y.annual_contribution),
                    amount(y.nominal_value),
                    amount(y.real_value),
                ]
            })
            .collect(),
    };

    let metric = |label: &'static str, help: &'static str, value: f64| Metric {
        label: i18n::text(lang, label).to_string(),
        value: amount(value),
        help: i18n::text(lang, help).to_string(),
    };
    let metrics = vec![
        metric(
            keys::SUMMARY_FINAL_NOMINAL,
            keys::SUMMARY_FINAL_NOMINAL_HELP,
            summary.final_nominal,
        ),
        metric(
            keys::SUMMARY_FINAL_REAL,
            keys::SUMMARY_FINAL_REAL_HELP,
            summary.final_real,
        ),
        metric(
            keys::SUMMARY_TOTAL_CONTRIBUTIONS,
            keys::SUMMARY_TOTAL_CONTRIBUTIONS_HELP,
            summary.total_contributions,
        ),
        metric(
            keys::SUMMARY_AVG_CONTRIBUTION,
            keys::SUMMARY_AVG_CONTRIBUTION_HELP,
            summary.avg_annual_contribution,
        ),
        metric(
            keys::SUMMARY_INVESTMENT_GAIN,
            keys::SUMMARY_INVESTMENT_GAIN_HELP,
            summary.investment_gain,
        ),
    ];

    let last = result.retirement_year();
    let retirement_age = last.age.to_string();
    let mut notes = vec![
        i18n::format(
            lang,
            keys::NOTES_RETIREMENT_YEAR,
            &[
                ("age", retirement_age.as_str()),
                ("income", amount(last.annual_income).as_str()),
                ("expenses", amount(last.annual_expenses).as_str()),
                ("surplus", amount(last.annual_contribution).as_str()),
            ],
        ),
        i18n::format(
            lang,
            keys::NOTES_PENSION_NOMINAL,
            &[
                ("amount", amount(summary.monthly_pension_nominal).as_str()),
                ("age", retirement_age.as_str()),
            ],
        ),
        i18n::format(
            lang,
            keys::NOTES_PENSION_REAL,
            &[("amount", amount(summary.monthly_pension_real).as_str())],
        ),
    ];
    if let Some(pct) = summary.pension_coverage_pct {
        notes.push(i18n::format(
            lang,
            keys::NOTES_COVERAGE,
            &[
                ("pct", format_decimal(pct, lang, 1).as_str()),
                ("pension", amount(summary.monthly_pension_real).as_str()),
                ("expenses", amount(params.monthly_expenses).as_str()),
            ],
        ));
    }
    if let Some(years) = summary.doubling_time_years {
        notes.push(i18n::format(
            lang,
            keys::NOTES_DOUBLING,
            &[("years", format_decimal(years, lang, 1).as_str())],
        ));
    }

    let tips = [
        (keys::TIPS_RULE_TITLE, keys::TIPS_RULE_BODY),
        (keys::TIPS_DIVERSIFY_TITLE, keys::TIPS_DIVERSIFY_BODY),
        (keys::TIPS_TIME_TITLE, keys::TIPS_TIME_BODY),
    ]
    .into_iter()
    .map(|(title, body)| Tip {
        title: i18n::text(lang, title).to_string(),
        body: i18n::text(lang, body).to_string(),
    })
    .collect();

    Report {
        lang,
        currency: currency.to_string(),
        title,
        surplus_note,
        chart,
        table,
        summary_title: i18n::text(lang, keys::SUMMARY_TITLE).to_string(),
        metrics,
        notes_title: i18n::text(lang, keys::NOTES_TITLE).to_string(),
        notes,
        tips_title: i18n::text(lang, keys::TIPS_TITLE).to_string(),
        tips,
    }
}

/// Plain-text rendering for a terminal.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    push_heading(&mut out, &report.title);
    out.push_str(&report.surplus_note);
    out.push_str("\n\n");

    push_heading(&mut out, &report.table.title);
    let columns = report.table.headers.len();
    let mut widths: Vec<usize> = report.table.headers.iter().map(|h| display_width(h)).collect();
    for row in &report.table.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell));
        }
    }
    push_row(&mut out, &report.table.headers, &widths);
    let rule_len = widths.iter().sum::<usize>() + 2 * columns.saturating_sub(1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in &report.table.rows {
        push_row(&mut out, row, &widths);
    }
    out.push('\n');

    push_heading(&mut out, &report.summary_title);
    for metric in &report.metrics {
        out.push_str(&format!("{}: {}\n", metric.label, metric.value));
    }
    out.push('\n');

    push_heading(&mut out, &report.notes_title);
    for note in &report.notes {
        out.push_str(note);
        out.push_str("\n\n");
    }

    push_heading(&mut out, &report.tips_title);
    for tip in &report.tips {
        out.push_str(&format!("* {}\n  {}\n", tip.title, tip.body));
    }
    out
}

fn push_heading(out: &mut String, heading: &str) {
    out.push_str(heading);
    out.push('\n');
    out.push_str(&"=".repeat(display_width(heading)));
    out.push('\n');
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| {
            let pad = width.saturating_sub(display_width(cell));
            format!("{}{cell}", " ".repeat(pad))
        })
        .collect();
    out.push_str(&line.join("  "));
    out.push('\n');
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::project;

    fn one_year_inputs() -> ProjectionParams {
        ProjectionParams {
            current_age: 30,
            retirement_age: 31,
            current_savings: 1_000.0,
            monthly_income: 5_000.0,
            monthly_expenses: 3_000.0,
            income_growth_rate: 0.0,
            inflation_rate: 0.0,
            annual_return: 10.0,
        }
    }

    fn report_for(params: &ProjectionParams, lang: Language, currency: &str) -> Report {
        let result = project(params).expect("valid params");
        build_report(params, &result, lang, currency)
    }

    #[test]
    fn format_amount_groups_thousands_per_language() {
        assert_eq!(format_amount(1_234_567.4, Language::En, "USD"), "1,234,567 USD");
        assert_eq!(format_amount(1_234_567.4, Language::Pl, "PLN"), "1 234 567 PLN");
        assert_eq!(format_amount(1_234_567.4, Language::De, "EUR"), "1.234.567 EUR");
        assert_eq!(format_amount(999.0, Language::En, "USD"), "999 USD");
        assert_eq!(format_amount(1_000.0, Language::En, ""), "1,000");
    }

    #[test]
    fn format_amount_keeps_sign_but_never_prints_negative_zero() {
        assert_eq!(format_amount(-12_000.0, Language::En, "USD"), "-12,000 USD");
        assert_eq!(format_amount(-0.4, Language::Pl, "PLN"), "0 PLN");
        assert_eq!(format_amount(-0.0, Language::En, "USD"), "0 USD");
    }

    #[test]
    fn format_decimal_uses_language_decimal_separator() {
        assert_eq!(format_decimal(11.14, Language::Pl, 1), "11,1");
        assert_eq!(format_decimal(11.14, Language::En, 1), "11.1");
        assert_eq!(format_decimal(1_234.56, Language::De, 2), "1.234,56");
        assert_eq!(format_decimal(f64::INFINITY, Language::En, 1), "inf");
    }

    #[test]
    fn report_table_mirrors_engine_rows() {
        let report = report_for(&one_year_inputs(), Language::En, "USD");

        assert_eq!(report.title, "Retirement capital growth (1 years)");
        assert_eq!(report.table.headers.len(), 6);
        assert_eq!(report.table.headers[0], "Age");
        assert_eq!(report.table.rows.len(), 2);
        assert_eq!(
            report.table.rows[1],
            vec![
                "31",
                "60,000 USD",
                "36,000 USD",
                "24,000 USD",
                "27,500 USD",
                "27,500 USD",
            ]
        );
        assert_eq!(report.chart.ages, vec![30, 31]);
        assert_eq!(report.chart.nominal.len(), 2);
        assert_eq!(report.chart.y_label, "Value (USD)");
    }

    #[test]
    fn report_metrics_and_notes_are_localized() {
        let report = report_for(&one_year_inputs(), Language::En, "USD");

        assert_eq!(
            report.surplus_note,
            "Current monthly surplus available to save: 2,000 USD"
        );
        let labels: Vec<&str> = report.metrics.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Capital at retirement",
                "Real value",
                "Total contributions",
                "Average annual contribution",
                "Investment gain",
            ]
        );
        assert_eq!(report.metrics[0].value, "27,500 USD");
        assert_eq!(report.metrics[2].value, "25,000 USD");
        assert_eq!(report.metrics[4].value, "2,500 USD");

        assert_eq!(report.notes.len(), 5);
        assert!(report.notes[0].contains("Income: 60,000 USD"));
        assert!(report.notes[1].contains("92 USD"));
        assert!(report.notes[3].contains("3.1%"));
        assert!(report.notes[4].contains("7.2 years"));
        assert_eq!(report.tips.len(), 3);
    }

    #[test]
    fn report_omits_undefined_notes() {
        let mut params = one_year_inputs();
        params.annual_return = 0.0;
        params.monthly_expenses = 0.0;

        let report = report_for(&params, Language::Pl, "PLN");
        assert_eq!(report.notes.len(), 3);
        assert!(report.notes.iter().all(|n| !n.contains("podwojenia")));
        assert!(report.notes.iter().all(|n| !n.contains("Pokrycie")));
    }

    #[test]
    fn polish_report_uses_polish_labels_and_separators() {
        let report = report_for(&one_year_inputs(), Language::Pl, "PLN");
        assert_eq!(report.table.headers[1], "Roczny dochód");
        assert_eq!(report.table.rows[1][1], "60 000 PLN");
        assert!(report.notes[3].contains("3,1%"));
    }

    #[test]
    fn error_messages_are_localized() {
        let err = ValidationError::NoSurplus {
            monthly_income: 1.0,
            monthly_expenses: 2.0,
        };
        assert_eq!(
            error_message(Language::En, &err),
            "Current expenses exceed income! There is no surplus to save."
        );
        let err = ValidationError::InvalidAgeRange {
            current_age: 40,
            retirement_age: 40,
        };
        assert!(error_message(Language::De, &err).contains("Rentenalter"));
    }

    #[test]
    fn render_text_right_aligns_table_columns() {
        let report = report_for(&one_year_inputs(), Language::En, "USD");
        let text = render_text(&report);

        assert!(text.starts_with("Retirement capital growth (1 years)\n"));
        let header = text
            .lines()
            .find(|line| line.contains("Annual income"))
            .expect("table header");
        let row = text
            .lines()
            .find(|line| line.trim_start().starts_with("31 "))
            .expect("retirement row");
        assert_eq!(header.chars().count(), row.chars().count());
        assert!(row.ends_with("27,500 USD"));
        assert!(text.contains("Capital at retirement: 27,500 USD"));
        assert!(text.contains("* The 4% rule"));
    }
}
