#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub u64);

impl CommentId {
    pub fn edit_path(&self) -> String {
        format!("/comment/{}/ajax_edit", self.0)
    }

    pub fn delete_path(&self) -> String {
        format!("/comment/{}/ajax_delete", self.0)
    }
}

/// One comment, as the server confirmed it
///
/// This is also the reply to a successful creation request, hence the field
/// renames.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    #[serde(rename = "comment_id")]
    pub id: CommentId,

    #[serde(rename = "username")]
    pub author: String,

    pub content: String,

    /// Already formatted by the server, displayed verbatim
    pub created_at: String,

    #[serde(default)]
    pub parent_id: Option<CommentId>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewComment {
    pub content: String,

    /// Serialized as `null` for top-level comments
    pub parent_id: Option<CommentId>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EditComment {
    pub content: String,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentEdited {
    /// Content as stored by the server, which may differ from what was sent
    pub content: String,

    #[serde(default)]
    pub comment_id: Option<CommentId>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentDeleted {
    #[serde(default)]
    pub comment_id: Option<CommentId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_request_has_null_parent() {
        let req = NewComment {
            content: String::from("hello"),
            parent_id: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"content": "hello", "parent_id": null}),
        );
    }

    #[test]
    fn reply_request_carries_parent() {
        let req = NewComment {
            content: String::from("hi back"),
            parent_id: Some(CommentId(4)),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"content": "hi back", "parent_id": 4}),
        );
    }
}
