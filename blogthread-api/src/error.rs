use serde_json::json;

pub const GENERIC_FAILURE: &str = "Request failed.";

/// Failures the server reports in its replies, plus the client-side
/// validation failure that shares their wording
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Comment cannot be empty.")]
    EmptyContent,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Rejected(String),
}

impl Error {
    pub fn status_code(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            Error::EmptyContent => StatusCode::OK,
            Error::Unauthorized => StatusCode::FORBIDDEN,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Rejected(_) => StatusCode::OK,
        }
    }

    /// Body of the reply the server sends for this error
    ///
    /// Not-found replies are the web framework's HTML page, not JSON.
    pub fn contents(&self) -> Vec<u8> {
        match self {
            Error::NotFound => {
                return b"<!doctype html>\n<title>404 Not Found</title>\n<h1>Not Found</h1>".to_vec()
            }
            Error::EmptyContent | Error::Unauthorized | Error::Rejected(_) => (),
        }
        serde_json::to_vec(&json!({
            "success": false,
            "error": self.to_string(),
        }))
        .expect("serializing error reply")
    }

    /// Recovers the error from a reply that has `success` unset or false
    pub fn from_reply(data: &serde_json::Value) -> Error {
        let msg = data
            .get("error")
            .and_then(|e| e.as_str())
            .unwrap_or(GENERIC_FAILURE);
        match msg {
            "Comment cannot be empty." => Error::EmptyContent,
            "Unauthorized" => Error::Unauthorized,
            _ => Error::Rejected(String::from(msg)),
        }
    }
}
