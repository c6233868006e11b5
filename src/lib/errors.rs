use std::fmt;

/// Errors surfaced to screens. Every variant carries a message that is safe
/// to render inline; nothing here is fatal to the application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Local input or configuration problem, reported before any request.
    Config(String),
    /// The server could not be reached.
    Network(String),
    /// The request was aborted by the client-side timeout.
    Timeout(String),
    /// The API answered with a non-success status; `detail` holds the
    /// server's `detail` field when present, a sanitized body otherwise.
    Api { status: u16, detail: String },
    /// The response body could not be decoded.
    Parse(String),
    /// The request body could not be encoded.
    Serialization(String),
}

impl AppError {
    /// Message suitable for inline display next to a form.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(message) | AppError::Api { detail: message, .. } => message.clone(),
            AppError::Network(_) => "An error occurred. Please try again.".to_string(),
            AppError::Timeout(message) => message.clone(),
            AppError::Parse(_) | AppError::Serialization(_) => {
                "Unexpected response from the server.".to_string()
            }
        }
    }

    /// True when the API rejected the credential itself.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Api { status: 401, .. })
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "{message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Api { status, detail } => {
                write!(formatter, "Request failed ({status}): {detail}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => write!(formatter, "Request error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn api_errors_surface_the_detail_field() {
        let err = AppError::Api {
            status: 400,
            detail: "Incorrect username or password".to_string(),
        };
        assert_eq!(err.user_message(), "Incorrect username or password");
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn network_errors_are_generic_for_users() {
        let err = AppError::Network("dns failure".to_string());
        assert_eq!(err.user_message(), "An error occurred. Please try again.");
    }

    #[test]
    fn unauthorized_detection() {
        let unauthorized = AppError::Api {
            status: 401,
            detail: "Could not validate credentials".to_string(),
        };
        let bad_request = AppError::Api {
            status: 400,
            detail: "nope".to_string(),
        };
        assert!(unauthorized.is_unauthorized());
        assert!(!bad_request.is_unauthorized());
    }
}
