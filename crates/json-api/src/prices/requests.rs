//! Price Requests

use jiff::civil::Date;
use pricetag::{
    dates::parse_iso_date, gift_cards::GIFT_CARD_CODE_MAX_LEN, products::PRODUCT_CODE_MAX_LEN,
};

pub(crate) const PRODUCT_CODE: &str = "productCode";
pub(crate) const DATE: &str = "date";
pub(crate) const GIFT_CARD_CODE: &str = "giftCardCode";

pub(crate) const REQUIRED: &str = "This field is required.";
pub(crate) const BLANK: &str = "This field may not be blank.";
pub(crate) const INVALID_DATE: &str =
    "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.";
pub(crate) const PRODUCT_NOT_FOUND: &str = "Product with this code does not exist.";
pub(crate) const GIFT_CARD_NOT_FOUND: &str = "Gift card with this code does not exist.";

/// Raw price lookup query. camelCase keys are canonical, snake_case is accepted too.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct GetPriceQuery {
    pub(crate) product_code: Option<String>,
    pub(crate) date: Option<String>,
    pub(crate) gift_card_code: Option<String>,
}

impl GetPriceQuery {
    /// Builds the query from `(key, value)` pairs in the order they were sent.
    ///
    /// Both spellings of a field fill the same slot, so the later pair wins and a request
    /// carrying `productCode` and `product_code` is not rejected. Unknown keys are ignored.
    pub(crate) fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs {
            let slot = match key {
                PRODUCT_CODE | "product_code" => &mut query.product_code,
                DATE => &mut query.date,
                GIFT_CARD_CODE | "gift_card_code" => &mut query.gift_card_code,
                _ => continue,
            };

            *slot = Some(value.to_owned());
        }

        query
    }
}

fn too_long(max: usize) -> String {
    format!("Ensure this field has no more than {max} characters.")
}

fn trimmed_code(value: &str, max: usize) -> Result<String, String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(BLANK.to_string());
    }

    if value.chars().count() > max {
        return Err(too_long(max));
    }

    Ok(value.to_string())
}

pub(crate) fn validate_product_code(value: Option<&str>) -> Result<String, String> {
    let value = value.ok_or_else(|| REQUIRED.to_string())?;

    trimmed_code(value, PRODUCT_CODE_MAX_LEN)
}

pub(crate) fn validate_date(value: Option<&str>) -> Result<Date, String> {
    let value = value.ok_or_else(|| REQUIRED.to_string())?;

    parse_iso_date(value).ok_or_else(|| INVALID_DATE.to_string())
}

pub(crate) fn validate_gift_card_code(value: Option<&str>) -> Result<Option<String>, String> {
    value
        .map(|value| trimmed_code(value, GIFT_CARD_CODE_MAX_LEN))
        .transpose()
}
