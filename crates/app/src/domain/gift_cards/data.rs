//! Gift Cards Data

use jiff::civil::Date;
use pricetag::prices::Price;

use crate::domain::gift_cards::records::GiftCardUuid;

/// New Gift Card Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewGiftCard {
    pub uuid: GiftCardUuid,
    pub code: String,
    pub amount: Price,
    pub date_start: Date,
    pub date_end: Option<Date>,
}
