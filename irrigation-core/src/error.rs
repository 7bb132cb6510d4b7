use crate::labels::{Label, Language, resolve_label};

/// Failure of a single advice request.
///
/// Every variant is terminal for that request only; the session carries on.
#[derive(Debug, thiserror::Error)]
pub enum AdvisoryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Weather provider returned status {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("Weather request timed out")]
    Timeout,

    #[error("Connection to weather service failed: {0}")]
    Connection(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl AdvisoryError {
    /// Classify a transport error from the HTTP client.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AdvisoryError::Timeout
        } else if err.is_decode() || err.is_builder() {
            AdvisoryError::Unexpected(err.to_string())
        } else {
            AdvisoryError::Connection(err.to_string())
        }
    }

    /// Message shown to the user, in the selected display language.
    pub fn user_message(&self, language: Language) -> String {
        let api = resolve_label(language, Label::ErrorApi);

        match self {
            AdvisoryError::InvalidInput(msg) => msg.clone(),
            AdvisoryError::Provider { message, .. } => {
                format!("{}: {}", resolve_label(language, Label::ErrorWeather), message)
            }
            AdvisoryError::Timeout => format!("{api} (Timeout)"),
            AdvisoryError::Connection(_) => format!("{api} (Connection Error)"),
            AdvisoryError::Unexpected(msg) => format!("An unexpected error occurred: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_is_distinct_from_connection() {
        let timeout = AdvisoryError::Timeout.user_message(Language::English);
        let conn = AdvisoryError::Connection("refused".into()).user_message(Language::English);

        assert!(timeout.ends_with("(Timeout)"));
        assert!(conn.ends_with("(Connection Error)"));
        assert_ne!(timeout, conn);
    }

    #[test]
    fn provider_message_carries_provider_text() {
        let err = AdvisoryError::Provider { status: 404, message: "city not found".into() };
        let msg = err.user_message(Language::English);

        assert!(msg.starts_with("Unable to fetch weather data"));
        assert!(msg.ends_with(": city not found"));
    }

    #[test]
    fn messages_follow_language() {
        let msg = AdvisoryError::Timeout.user_message(Language::Hindi);
        assert!(msg.starts_with(resolve_label(Language::Hindi, Label::ErrorApi)));
    }

    #[test]
    fn invalid_input_passes_message_through() {
        let err = AdvisoryError::InvalidInput("Please enter a valid location.".into());
        assert_eq!(err.user_message(Language::Gujarati), "Please enter a valid location.");
    }
}
