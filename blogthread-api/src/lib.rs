use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};

mod comment;
pub use comment::{Comment, CommentDeleted, CommentEdited, CommentId, EditComment, NewComment};

mod error;
pub use error::Error;

mod like;
pub use like::LikeToggled;

/// Header in which the anti-forgery token is echoed back to the server
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Anti-forgery token handed out by the hosting page. Opaque, never parsed.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CsrfToken(pub String);

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct PostId(pub u64);

impl PostId {
    pub fn comment_path(&self) -> String {
        format!("/post/{}/ajax_comment", self.0)
    }

    pub fn like_path(&self) -> String {
        format!("/like/{}", self.0)
    }
}

/// Trims `raw`, refusing content that is empty once trimmed
pub fn validate_content(raw: &str) -> Result<String, Error> {
    let content = raw.trim();
    if content.is_empty() {
        return Err(Error::EmptyContent);
    }
    Ok(String::from(content))
}

/// Parses a server reply body.
///
/// The outer error is for bodies that are not a JSON reply at all (eg. an
/// HTML error page), the inner one for replies the server marked as failed.
pub fn parse_reply<T: DeserializeOwned>(body: &[u8]) -> anyhow::Result<Result<T, Error>> {
    let data: serde_json::Value = serde_json::from_slice(body).context("parsing reply body")?;
    let success = data
        .get("success")
        .and_then(|s| s.as_bool())
        .unwrap_or(false);
    if !success {
        return Ok(Err(Error::from_reply(&data)));
    }
    Ok(Ok(
        serde_json::from_value(data).context("parsing contents of successful reply")?
    ))
}

/// Parses a reply from an endpoint that only sends `success` when failing
///
/// The like endpoint answers with the bare payload, so a missing `success`
/// is a success there, while an explicit `success: false` is still a refusal.
pub fn parse_plain_reply<T: DeserializeOwned>(body: &[u8]) -> anyhow::Result<Result<T, Error>> {
    let data: serde_json::Value = serde_json::from_slice(body).context("parsing reply body")?;
    if data.get("success").and_then(|s| s.as_bool()) == Some(false) {
        return Ok(Err(Error::from_reply(&data)));
    }
    let res = serde_json::from_value(data).context("parsing contents of reply")?;
    Ok(Ok(res))
}

/// Serializes `data` as a successful reply, the way the server sends them
pub fn success_reply<T: Serialize>(data: &T) -> Vec<u8> {
    let mut value = serde_json::to_value(data).expect("serializing reply");
    if let Some(obj) = value.as_object_mut() {
        obj.insert(String::from("success"), serde_json::Value::Bool(true));
    }
    serde_json::to_vec(&value).expect("serializing reply")
}
