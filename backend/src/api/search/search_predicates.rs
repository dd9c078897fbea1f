//! Predicate builder for scheme searches.

use common::{
    filter_criteria::FilterCriteria,
    predicate::{Predicate, SchemeColumn},
};
use tracing::debug;


/// Parse the way a browser's `parseInt(value, 10)` does: skip leading
/// whitespace, accept a sign, read digits until the first non-digit.
/// `None` when no digit is found. Out-of-range values saturate.
pub fn parse_income_threshold(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }
    let digits = &rest[..digits_len];
    let signed = if negative { format!("-{digits}") } else { digits.to_string() };
    match signed.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Map the filled-in form fields to predicates. Empty and whitespace-only
/// fields add nothing. `language` is never a predicate.
///
/// A non-numeric income is dropped without an error, leaving income
/// unconstrained.
pub fn build_predicates(criteria: &FilterCriteria) -> Vec<Predicate> {
    let mut predicates = vec![];

    if !criteria.scheme.trim().is_empty() {
        predicates.push(Predicate::contains(SchemeColumn::Scheme, &criteria.scheme));
    }
    if !criteria.income.trim().is_empty() {
        match parse_income_threshold(&criteria.income) {
            Some(threshold) => predicates.push(Predicate::at_most(SchemeColumn::Income, threshold)),
            None => debug!(income = %criteria.income, "ignoring non-numeric income filter"),
        }
    }
    for (column, value) in [
        (SchemeColumn::Education, &criteria.education),
        (SchemeColumn::Region, &criteria.region),
        (SchemeColumn::Organization, &criteria.organization),
    ] {
        if !value.trim().is_empty() {
            predicates.push(Predicate::contains(column, value));
        }
    }

    predicates
}
