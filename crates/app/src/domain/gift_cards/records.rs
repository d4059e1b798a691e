//! Gift Card Records

use jiff::Timestamp;
use pricetag::gift_cards::GiftCard;

use crate::uuids::TypedUuid;

/// Gift Card UUID
pub type GiftCardUuid = TypedUuid<GiftCardRecord>;

/// Gift Card Record
#[derive(Debug, Clone, PartialEq)]
pub struct GiftCardRecord {
    pub uuid: GiftCardUuid,
    pub gift_card: GiftCard,
    pub created_at: Timestamp,
}
