//! Dates
//!
//! Every date-bounded record in the catalog (price tiers, gift cards) shares the same
//! validity rule: it is active on a date when the date falls between its start and end,
//! both inclusive, with a missing end meaning the record never expires.

use jiff::civil::Date;

/// An inclusive range of calendar dates, open-ended when there is no end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Option<Date>,
}

impl DateRange {
    /// Creates a new date range.
    pub const fn new(start: Date, end: Option<Date>) -> Self {
        Self { start, end }
    }

    /// Creates a range that starts on `start` and never ends.
    pub const fn starting(start: Date) -> Self {
        Self::new(start, None)
    }

    /// Creates a range covering `start` to `end`, both inclusive.
    pub const fn between(start: Date, end: Date) -> Self {
        Self::new(start, Some(end))
    }

    /// First day of the range.
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Last day of the range, if any.
    pub const fn end(&self) -> Option<Date> {
        self.end
    }

    /// Whether the range ends before it starts, and so can never contain a date.
    pub fn is_inverted(&self) -> bool {
        self.end.is_some_and(|end| end < self.start)
    }

    /// Returns `true` when `date` falls inside the range.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && self.end.is_none_or(|end| end >= date)
    }
}

/// Records whose validity is bounded by a [`DateRange`].
pub trait Dated {
    /// The dates on which the record applies.
    fn validity(&self) -> DateRange;

    /// Returns `true` when the record applies on `date`.
    fn is_active_on(&self, date: Date) -> bool {
        self.validity().contains(date)
    }
}

/// Filters `records` down to the ones active on `date`.
pub fn active_on<'a, T>(
    records: impl IntoIterator<Item = &'a T>,
    date: Date,
) -> impl Iterator<Item = &'a T>
where
    T: Dated + 'a,
{
    records
        .into_iter()
        .filter(move |record| record.is_active_on(date))
}

/// Parses an ISO calendar date (`YYYY-MM-DD`).
///
/// Month and day may be written with one or two digits. Anything else, including dates
/// that do not exist in the calendar, is rejected.
pub fn parse_iso_date(value: &str) -> Option<Date> {
    let mut parts = value.split('-');

    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);

    if parts.next().is_some() {
        return None;
    }

    let well_formed = year.len() == 4
        && (1..=2).contains(&month.len())
        && (1..=2).contains(&day.len())
        && [year, month, day]
            .iter()
            .all(|part| part.bytes().all(|byte| byte.is_ascii_digit()));

    if !well_formed {
        return None;
    }

    let year: i16 = year.parse().ok().filter(|year| *year >= 1)?;

    Date::new(year, month.parse().ok()?, day.parse().ok()?).ok()
}
