//! Gift Card Fixtures

use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, check_len, parse_validity},
    gift_cards::{GIFT_CARD_CODE_MAX_LEN, GiftCard},
    prices::Price,
};

/// Gift Card Fixture
#[derive(Debug, Deserialize)]
pub struct GiftCardFixture {
    /// Gift card code
    pub code: String,

    /// Amount in cents
    pub amount: u64,

    /// First day the card can be redeemed (`YYYY-MM-DD`)
    pub date_start: String,

    /// Last day the card can be redeemed, open-ended when missing
    #[serde(default)]
    pub date_end: Option<String>,
}

impl TryFrom<GiftCardFixture> for GiftCard {
    type Error = FixtureError;

    fn try_from(fixture: GiftCardFixture) -> Result<Self, Self::Error> {
        check_len("gift card code", &fixture.code, GIFT_CARD_CODE_MAX_LEN)?;

        let validity = parse_validity(
            &format!("gift card {}", fixture.code),
            &fixture.date_start,
            fixture.date_end.as_deref(),
        )?;

        Ok(GiftCard {
            code: fixture.code,
            amount: Price::new(fixture.amount),
            validity,
        })
    }
}
