use std::fmt::Display;

/// Client side failures: either the server answered with an error
/// payload, the request never made it, or the body had an unexpected
/// shape.
#[derive(Debug)]
pub enum TodoError {
    Api(String),
    Http(String),
    UnexpectedResponse,
}

impl Display for TodoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api(message) => {
                write!(f, "{}", message)
            }
            Self::Http(e) => {
                write!(f, "Request failed: {}", e)
            }
            Self::UnexpectedResponse => {
                write!(f, "Unexpected response from server")
            }
        }
    }
}

impl From<reqwest::Error> for TodoError {
    fn from(e: reqwest::Error) -> Self {
        TodoError::Http(e.to_string())
    }
}

impl std::error::Error for TodoError {}

#[cfg(test)]
mod errors_test {
    use super::TodoError;

    #[test]
    fn test_api_error_keeps_server_message() {
        let err = TodoError::Api(String::from("Todo not found"));

        assert_eq!(err.to_string(), "Todo not found");
    }

    #[test]
    fn test_unexpected_response_message() {
        assert_eq!(
            TodoError::UnexpectedResponse.to_string(),
            "Unexpected response from server"
        );
    }
}
