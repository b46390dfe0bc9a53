//! Age breakdown from a birth date. The subtraction is calendar-aware: a
//! negative day count borrows the length of the month preceding the reference
//! month, and a negative month count borrows twelve months from the years.
//!
//! The borrowed month length uses a `year % 4 == 0` leap test on the birth
//! year. That is the rule the application has always used, kept for
//! behavioral fidelity; it ignores the century/400-year exceptions and reads
//! the wrong year for the borrow. Date *validation* is exact Gregorian, so
//! impossible dates are still rejected.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{Error, Result};

/// Elapsed time between a birth date and a reference date, broken down the
/// way the result panel presents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBreakdown {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    /// Exact calendar-day delta between the two dates.
    pub total_days: i64,
    /// `years * 12 + months`.
    pub total_months: i32,
}

/// Compute the age as of today.
pub fn calculate_age(day: u32, month: u32, year: i32) -> Result<AgeBreakdown> {
    calculate_age_at(day, month, year, Local::now().date_naive())
}

/// Compute the age as of an explicit reference date. Split out so tests and
/// callers with a fixed "today" get deterministic results.
pub fn calculate_age_at(day: u32, month: u32, year: i32, reference: NaiveDate) -> Result<AgeBreakdown> {
    let birth = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::validation("Please enter a valid date."))?;

    if birth > reference {
        return Err(Error::validation("Birth date cannot be in the future."));
    }

    let mut years = reference.year() - birth.year();
    let mut months = reference.month() as i32 - birth.month() as i32;
    let mut days = reference.day() as i32 - birth.day() as i32;

    if days < 0 {
        months -= 1;
        let prev_month = if reference.month() > 1 {
            reference.month() - 1
        } else {
            12
        };
        days += days_in_month(prev_month, year);
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    let total_days = reference.signed_duration_since(birth).num_days();

    Ok(AgeBreakdown {
        years,
        months,
        days,
        total_days,
        total_months: years * 12 + months,
    })
}

/// Day count of a month under the historical `% 4` leap approximation.
fn days_in_month(month: u32, year: i32) -> i32 {
    let february = if year % 4 == 0 { 29 } else { 28 };
    match month {
        1 => 31,
        2 => february,
        3 => 31,
        4 => 30,
        5 => 31,
        6 => 30,
        7 => 31,
        8 => 31,
        9 => 30,
        10 => 31,
        11 => 30,
        12 => 31,
        _ => unreachable!("month is always 1-12 here"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn reference_example_breakdown() {
        let age = calculate_age_at(15, 1, 2000, date(2024, 6, 1)).unwrap();
        assert_eq!(age.years, 24);
        assert_eq!(age.months, 4);
        assert_eq!(age.days, 17);
        assert_eq!(age.total_months, 24 * 12 + 4);
        assert_eq!(age.total_days, 8904);
    }

    #[test]
    fn exact_birthday_is_zero_months_zero_days() {
        let age = calculate_age_at(10, 3, 1990, date(2024, 3, 10)).unwrap();
        assert_eq!((age.years, age.months, age.days), (34, 0, 0));
    }

    #[test]
    fn day_borrow_crosses_january_into_december() {
        // Reference in January borrows December of the previous year.
        let age = calculate_age_at(20, 6, 2000, date(2024, 1, 5)).unwrap();
        assert_eq!((age.years, age.months, age.days), (23, 6, 16));
    }

    #[test]
    fn leap_borrow_reads_the_birth_year_not_the_reference_year() {
        // Borrowing February's length checks `birth_year % 4`, so a 1999
        // birth borrows 28 days even though the reference year 2024 is a
        // leap year, and the single borrow can leave `days` at -1. Both are
        // long-standing quirks of the algorithm, pinned here rather than
        // silently fixed.
        let age = calculate_age_at(30, 1, 1999, date(2024, 3, 1)).unwrap();
        assert_eq!(age.days, -1); // 1 - 30 + 28 borrowed
        let age_leap_birth = calculate_age_at(30, 1, 2000, date(2024, 3, 1)).unwrap();
        assert_eq!(age_leap_birth.days, 0); // 1 - 30 + 29 borrowed
    }

    #[test]
    fn impossible_date_is_rejected() {
        assert!(matches!(
            calculate_age_at(31, 2, 2001, date(2024, 6, 1)),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn future_birth_date_is_rejected() {
        assert!(matches!(
            calculate_age_at(1, 1, 2030, date(2024, 6, 1)),
            Err(Error::Validation(_))
        ));
    }
}
