use axum::http::StatusCode;

/// Trait for mapping domain errors to structured error codes, optional tips and
/// the HTTP status they surface as.
pub trait ToStructuredError {
    fn error_code_and_tip(&self) -> (&'static str, Option<&'static str>);

    fn status_code(&self) -> StatusCode;
}

// ── ItemError ──────────────────────────────────────────────────────────────────
impl ToStructuredError for crate::item::core::error::ItemError {
    fn error_code_and_tip(&self) -> (&'static str, Option<&'static str>) {
        use crate::item::core::error::ItemError;
        match self {
            ItemError::NotFound(_) => ("ITEM_NOT_FOUND", None),
            ItemError::Persistence(_) => (
                "PERSISTENCE_FAILURE",
                Some("Check that the ticket database exists and is writable"),
            ),
        }
    }

    fn status_code(&self) -> StatusCode {
        use crate::item::core::error::ItemError;
        match self {
            ItemError::NotFound(_) => StatusCode::NOT_FOUND,
            ItemError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::core::error::ItemError;

    #[test]
    fn test_not_found_mapping() {
        let err = ItemError::not_found("1");
        assert_eq!(err.error_code_and_tip(), ("ITEM_NOT_FOUND", None));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_persistence_mapping() {
        let err = ItemError::persistence("locked");
        let (code, tip) = err.error_code_and_tip();
        assert_eq!(code, "PERSISTENCE_FAILURE");
        assert!(tip.is_some());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
