//! Gift Cards

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::civil::Date;

use crate::{
    dates::{DateRange, Dated},
    prices::Price,
};

/// Maximum length of a gift card code.
pub const GIFT_CARD_CODE_MAX_LEN: usize = 30;

/// A fixed-amount discount redeemable on any product while it is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiftCard {
    /// Code the customer enters
    pub code: String,

    /// Value of the gift card
    pub amount: Price,

    /// Dates the gift card can be redeemed on
    pub validity: DateRange,
}

impl GiftCard {
    /// Creates a new gift card.
    pub fn new(code: impl Into<String>, amount: Price, start: Date, end: Option<Date>) -> Self {
        Self {
            code: code.into(),
            amount,
            validity: DateRange::new(start, end),
        }
    }

    /// The gift card's value as a display string.
    pub fn formatted_amount(&self) -> String {
        self.amount.to_string()
    }
}

impl Dated for GiftCard {
    fn validity(&self) -> DateRange {
        self.validity
    }
}

impl Display for GiftCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} - {}", self.code, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn gift_card_display_uses_formatted_amount() {
        let card = GiftCard::new("250OFF", Price::new(25_000), date(2019, 1, 1), None);

        assert_eq!(card.formatted_amount(), "$250.00");
        assert_eq!(card.to_string(), "250OFF - $250.00");
    }

    #[test]
    fn gift_card_activity_follows_validity() {
        let card = GiftCard::new(
            "10OFF",
            Price::new(1_000),
            date(2018, 12, 1),
            Some(date(2019, 1, 31)),
        );

        assert!(card.is_active_on(date(2019, 1, 31)), "last valid day");
        assert!(!card.is_active_on(date(2019, 2, 1)), "expired");
        assert!(!card.is_active_on(date(2018, 11, 30)), "not yet valid");
    }
}
