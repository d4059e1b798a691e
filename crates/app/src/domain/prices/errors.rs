//! Prices service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PricesServiceError {
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
