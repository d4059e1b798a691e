//! Gift cards service.

use async_trait::async_trait;
use jiff::civil::Date;
use mockall::automock;
use pricetag::dates::Dated;

use crate::{
    database::Db,
    domain::gift_cards::{
        data::NewGiftCard,
        errors::GiftCardsServiceError,
        records::GiftCardRecord,
        repository::PgGiftCardsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgGiftCardsService {
    db: Db,
    repository: PgGiftCardsRepository,
}

impl PgGiftCardsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgGiftCardsRepository::new(),
        }
    }
}

#[async_trait]
impl GiftCardsService for PgGiftCardsService {
    async fn get_active_gift_card(
        &self,
        code: String,
        date: Date,
    ) -> Result<GiftCardRecord, GiftCardsServiceError> {
        let mut tx = self.db.begin().await?;

        let candidates = self
            .repository
            .list_gift_cards_by_code(&mut tx, &code)
            .await?;

        tx.commit().await?;

        // Candidates arrive earliest start first.
        candidates
            .into_iter()
            .find(|record| record.gift_card.is_active_on(date))
            .ok_or(GiftCardsServiceError::NotFound)
    }

    async fn create_gift_card(
        &self,
        gift_card: NewGiftCard,
    ) -> Result<GiftCardRecord, GiftCardsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_gift_card(&mut tx, &gift_card).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait GiftCardsService: Send + Sync {
    /// Find the gift card with `code` that can be redeemed on `date`.
    ///
    /// When several cards share the code, the one that became valid earliest wins.
    async fn get_active_gift_card(
        &self,
        code: String,
        date: Date,
    ) -> Result<GiftCardRecord, GiftCardsServiceError>;

    /// Creates a new gift card.
    async fn create_gift_card(
        &self,
        gift_card: NewGiftCard,
    ) -> Result<GiftCardRecord, GiftCardsServiceError>;
}
