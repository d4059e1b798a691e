//! Gift Cards Repository

use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use pricetag::{dates::DateRange, gift_cards::GiftCard};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    database::{decode_price, encode_price},
    domain::gift_cards::{
        data::NewGiftCard,
        records::{GiftCardRecord, GiftCardUuid},
    },
};

const LIST_GIFT_CARDS_BY_CODE_SQL: &str = include_str!("sql/list_gift_cards_by_code.sql");
const CREATE_GIFT_CARD_SQL: &str = include_str!("sql/create_gift_card.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgGiftCardsRepository;

impl PgGiftCardsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Every gift card with `code`, earliest start first.
    pub(crate) async fn list_gift_cards_by_code(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &str,
    ) -> Result<Vec<GiftCardRecord>, sqlx::Error> {
        query_as::<Postgres, GiftCardRecord>(LIST_GIFT_CARDS_BY_CODE_SQL)
            .bind(code)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_gift_card(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        gift_card: &NewGiftCard,
    ) -> Result<GiftCardRecord, sqlx::Error> {
        query_as::<Postgres, GiftCardRecord>(CREATE_GIFT_CARD_SQL)
            .bind(gift_card.uuid)
            .bind(&gift_card.code)
            .bind(encode_price("amount", gift_card.amount)?)
            .bind(SqlxDate::from(gift_card.date_start))
            .bind(gift_card.date_end.map(SqlxDate::from))
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for GiftCardRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let validity = DateRange::new(
            row.try_get::<SqlxDate, _>("date_start")?.to_jiff(),
            row.try_get::<Option<SqlxDate>, _>("date_end")?
                .map(SqlxDate::to_jiff),
        );

        Ok(Self {
            uuid: row.try_get::<GiftCardUuid, _>("uuid")?,
            gift_card: GiftCard {
                code: row.try_get("code")?,
                amount: decode_price(row, "amount")?,
                validity,
            },
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
