/// Reply of the like endpoint, which carries no `success` field
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct LikeToggled {
    /// Whether the current user now likes the post
    pub liked: bool,

    #[serde(rename = "total_likes")]
    pub like_count: u64,
}
