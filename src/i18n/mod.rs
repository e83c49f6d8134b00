//! Display strings keyed by language tag.
//!
//! The projection engine never sees a [`Language`]; only the report layer
//! resolves labels through [`text`] and [`format`].

mod catalog;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub mod keys {
    pub const CHART_TITLE: &str = "chart.title";
    pub const CHART_AXIS_AGE: &str = "chart.axis_age";
    pub const CHART_AXIS_VALUE: &str = "chart.axis_value";
    pub const CHART_SERIES_NOMINAL: &str = "chart.series_nominal";
    pub const CHART_SERIES_REAL: &str = "chart.series_real";

    pub const SURPLUS_NOTE: &str = "surplus.note";

    pub const TABLE_TITLE: &str = "table.title";
    pub const TABLE_AGE: &str = "table.age";
    pub const TABLE_INCOME: &str = "table.income";
    pub const TABLE_EXPENSES: &str = "table.expenses";
    pub const TABLE_CONTRIBUTION: &str = "table.contribution";
    pub const TABLE_NOMINAL: &str = "table.nominal";
    pub const TABLE_REAL: &str = "table.real";

    pub const SUMMARY_TITLE: &str = "summary.title";
    pub const SUMMARY_FINAL_NOMINAL: &str = "summary.final_nominal";
    pub const SUMMARY_FINAL_NOMINAL_HELP: &str = "summary.final_nominal_help";
    pub const SUMMARY_FINAL_REAL: &str = "summary.final_real";
    pub const SUMMARY_FINAL_REAL_HELP: &str = "summary.final_real_help";
    pub const SUMMARY_TOTAL_CONTRIBUTIONS: &str = "summary.total_contributions";
    pub const SUMMARY_TOTAL_CONTRIBUTIONS_HELP: &str = "summary.total_contributions_help";
    pub const SUMMARY_AVG_CONTRIBUTION: &str = "summary.avg_contribution";
    pub const SUMMARY_AVG_CONTRIBUTION_HELP: &str = "summary.avg_contribution_help";
    pub const SUMMARY_INVESTMENT_GAIN: &str = "summary.investment_gain";
    pub const SUMMARY_INVESTMENT_GAIN_HELP: &str = "summary.investment_gain_help";

    pub const NOTES_TITLE: &str = "notes.title";
    pub const NOTES_RETIREMENT_YEAR: &str = "notes.retirement_year";
    pub const NOTES_PENSION_NOMINAL: &str = "notes.pension_nominal";
    pub const NOTES_PENSION_REAL: &str = "notes.pension_real";
    pub const NOTES_COVERAGE: &str = "notes.coverage";
    pub const NOTES_DOUBLING: &str = "notes.doubling";

    pub const TIPS_TITLE: &str = "tips.title";
    pub const TIPS_RULE_TITLE: &str = "tips.rule_title";
    pub const TIPS_RULE_BODY: &str = "tips.rule_body";
    pub const TIPS_DIVERSIFY_TITLE: &str = "tips.diversify_title";
    pub const TIPS_DIVERSIFY_BODY: &str = "tips.diversify_body";
    pub const TIPS_TIME_TITLE: &str = "tips.time_title";
    pub const TIPS_TIME_BODY: &str = "tips.time_body";

    pub const ERROR_INVALID_AGE_RANGE: &str = "error.invalid_age_range";
    pub const ERROR_NO_SURPLUS: &str = "error.no_surplus";
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pl,
    En,
    De,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Pl, Language::En, Language::De];

    /// Matches on the primary subtag, so `pl-PL`, `en_GB` and `DE` all resolve.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "pl" => Some(Language::Pl),
            "en" => Some(Language::En),
            "de" => Some(Language::De),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Language::Pl => "pl",
            Language::En => "en",
            Language::De => "de",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_tag(s).ok_or_else(|| {
            let supported: Vec<&str> = Language::ALL.iter().map(Language::as_tag).collect();
            format!(
                "unsupported language '{s}', expected one of: {}",
                supported.join(", ")
            )
        })
    }
}

/// Looks up `key`, falling back to English and then to the key itself.
pub fn text(lang: Language, key: &'static str) -> &'static str {
    catalog::lookup(lang, key)
        .or_else(|| catalog::lookup(Language::En, key))
        .unwrap_or(key)
}

/// Like [`text`], with `{name}` placeholders replaced from `args`.
pub fn format(lang: Language, key: &'static str, args: &[(&str, &str)]) -> String {
    let mut out = text(lang, key).to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}
