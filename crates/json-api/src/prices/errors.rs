//! Price Errors

use std::collections::BTreeMap;

use salvo::{
    oapi::{self, Components, EndpointOutRegister, Operation},
    prelude::*,
};
use serde::Serialize;
use tracing::error;

use pricetag_app::domain::{gift_cards::GiftCardsServiceError, products::ProductsServiceError};

/// Validation messages keyed by the camelCase name of the failing field.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub(crate) struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub(crate) fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    /// Keeps the value of a passing check, records the message of a failing one.
    pub(crate) fn check<T>(&mut self, field: &'static str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.add(field, message);

                None
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Price lookup failure.
#[derive(Debug)]
pub(crate) enum PriceError {
    /// Query parameters failed validation.
    Validation(FieldErrors),

    /// Anything else, rendered as a plain status error.
    Status(StatusError),
}

impl From<FieldErrors> for PriceError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<StatusError> for PriceError {
    fn from(error: StatusError) -> Self {
        Self::Status(error)
    }
}

impl Scribe for PriceError {
    fn render(self, res: &mut Response) {
        match self {
            Self::Validation(errors) => {
                res.status_code(StatusCode::BAD_REQUEST);
                res.render(Json(errors));
            }
            Self::Status(error) => res.render(error),
        }
    }
}

impl EndpointOutRegister for PriceError {
    fn register(components: &mut Components, operation: &mut Operation) {
        StatusError::register(components, operation);

        operation.responses.insert(
            "400",
            oapi::Response::new("Invalid query parameters, as a map of field name to messages"),
        );
    }
}

pub(crate) fn products_error(error: ProductsServiceError) -> StatusError {
    error!("failed to look up product: {error}");

    StatusError::internal_server_error()
}

pub(crate) fn gift_cards_error(error: GiftCardsServiceError) -> StatusError {
    error!("failed to look up gift card: {error}");

    StatusError::internal_server_error()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn field_errors_serialize_as_map_of_lists() -> TestResult {
        let mut errors = FieldErrors::default();

        errors.add("productCode", "This field is required.");
        errors.add("date", "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.");

        assert_eq!(
            serde_json::to_value(&errors)?,
            json!({
                "productCode": ["This field is required."],
                "date": ["Date has wrong format. Use one of these formats instead: YYYY-MM-DD."],
            })
        );

        Ok(())
    }

    #[test]
    fn check_records_failures_only() {
        let mut errors = FieldErrors::default();

        assert_eq!(errors.check("date", Ok::<_, String>(1)), Some(1));
        assert!(errors.is_empty());

        assert_eq!(errors.check::<u8>("date", Err("bad".to_string())), None);
        assert!(!errors.is_empty());
    }
}
