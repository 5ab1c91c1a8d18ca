use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether the server answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        let err = ClientError::UnexpectedStatus {
            status: 404,
            body: "Sorry, that item doesn't exist".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Unexpected status 404: Sorry, that item doesn't exist"
        );
    }

    #[test]
    fn test_decode_error_is_not_not_found() {
        let err: ClientError = serde_json::from_str::<u64>("nope").unwrap_err().into();
        assert!(!err.is_not_found());
        assert!(err.to_string().starts_with("Failed to decode response"));
    }
}
