//! Field normalizers: pure transforms from the free text each template
//! renders into typed ranges. All of them resolve unparsable input to
//! `None` rather than erroring, so a single malformed field never costs a
//! whole record.

use chrono::{Duration, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

/// Fixed exchange rate used when a salary is posted in USD.
pub const USD_TO_VND: i64 = 24_000;

/// Site wording for "salary negotiable".
const NO_AGREEMENT: &str = "Thoả thuận";
/// Site wording for "no experience required".
const NO_EXPERIENCE: &str = "Không yêu cầu kinh nghiệm";

/// Salary fragments separate tokens with whitespace runs that sometimes
/// include zero-width spaces.
fn salary_token_splitter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s\u{200b}]+").unwrap())
}

/// Parses a salary fragment into `(min, max)` bounds in million VND.
///
/// Recognized shapes: `<min> - <max> <unit>`, `Trên <min> <unit>`,
/// `Tới <max> <unit>`, a single bare number, and the literal "Thoả thuận"
/// (no bounds). Thousand-separator commas are stripped; a `USD` token (any
/// case) switches the unit and both bounds are converted at [`USD_TO_VND`]
/// and truncated to whole millions.
pub fn parse_salary(text: &str) -> (Option<i64>, Option<i64>) {
    let text = text.trim();
    if text == NO_AGREEMENT {
        return (None, None);
    }

    let mut values: Vec<i64> = Vec::new();
    let mut is_usd = false;
    for token in salary_token_splitter().split(text) {
        let token = token.replace(',', "");
        if token.eq_ignore_ascii_case("USD") {
            is_usd = true;
        } else if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(value) = token.parse::<i64>() {
                values.push(value);
            }
        }
    }

    let (mut min, mut max) = match values.as_slice() {
        [min, max] => (Some(*min), Some(*max)),
        [value] if text.starts_with("Trên") => (Some(*value), None),
        [value] if text.starts_with("Tới") => (None, Some(*value)),
        [value] => (Some(*value), Some(*value)),
        _ => (None, None),
    };

    if is_usd {
        min = min.map(|value| value * USD_TO_VND / 1_000_000);
        max = max.map(|value| value * USD_TO_VND / 1_000_000);
    }

    (min, max)
}

/// Parses an experience fragment into `(min, max)` years.
///
/// `"Không yêu cầu kinh nghiệm"` means no experience required and maps to
/// `(Some(0), Some(0))`. Otherwise the first numeric token is the reference
/// value: a leading number is an exact requirement, a leading "Trên" a lower
/// bound, a leading "Dưới" an upper bound. Anything else is unspecified.
pub fn parse_experience(text: &str) -> (Option<u32>, Option<u32>) {
    let text = text.trim();
    if text == NO_EXPERIENCE {
        return (Some(0), Some(0));
    }

    let tokens: Vec<&str> = text.split(' ').collect();
    let years = tokens
        .iter()
        .find(|token| is_numeric(token))
        .and_then(|token| token.parse::<u32>().ok());
    let Some(years) = years else {
        return (None, None);
    };

    match tokens.first() {
        Some(first) if is_numeric(first) => (Some(years), Some(years)),
        Some(&"Trên") => (Some(years), None),
        Some(&"Dưới") => (None, Some(years)),
        _ => (None, None),
    }
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// Parses the final whitespace-delimited token of `text` as a `dd/mm/YYYY`
/// date. Used by the templates that print an absolute deadline after a label.
pub fn parse_due_date(text: &str) -> Option<NaiveDate> {
    let token = text.split_whitespace().last()?;
    NaiveDate::parse_from_str(token, "%d/%m/%Y").ok()
}

/// Resolves a days-remaining counter against `today`. Used by the diamond
/// template, which prints deadlines relative to the current date.
pub fn parse_days_remaining(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let days: i64 = text.trim().parse().ok()?;
    today.checked_add_signed(Duration::days(days))
}
