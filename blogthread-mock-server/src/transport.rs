use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use blogthread_client::{
    api::{
        self, Comment, CommentDeleted, CommentEdited, CommentId, EditComment, LikeToggled,
        NewComment, PostId,
    },
    Transport,
};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;

use crate::MockServer;

/// Sends requests to a shared `MockServer`, going through the same JSON
/// bodies as the real server
#[derive(Clone)]
pub struct MockTransport {
    server: Arc<Mutex<MockServer>>,
    offline: Arc<Mutex<bool>>,
}

impl MockTransport {
    pub fn new(server: MockServer) -> MockTransport {
        MockTransport {
            server: Arc::new(Mutex::new(server)),
            offline: Arc::new(Mutex::new(false)),
        }
    }

    pub fn server(&self) -> parking_lot::MutexGuard<'_, MockServer> {
        self.server.lock()
    }

    /// While offline, every request fails before reaching the server
    pub fn set_offline(&self, offline: bool) {
        *self.offline.lock() = offline;
    }

    fn send(&self, path: &str, body: Option<serde_json::Value>) -> anyhow::Result<Vec<u8>> {
        if *self.offline.lock() {
            return Err(anyhow!("connection refused while sending request to {path}"));
        }
        let body = body.map(|b| serde_json::to_vec(&b)).transpose()?;
        let (status, reply) = self.server.lock().handle(path, body.as_deref());
        tracing::debug!(%path, %status, "mock transport received reply");
        Ok(reply)
    }

    fn post<R: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> anyhow::Result<Result<R, api::Error>> {
        api::parse_reply(&self.send(path, body)?)
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn create_comment(
        &self,
        post: PostId,
        req: &NewComment,
    ) -> anyhow::Result<Result<Comment, api::Error>> {
        self.post(&post.comment_path(), Some(serde_json::to_value(req)?))
    }

    async fn edit_comment(
        &self,
        id: CommentId,
        req: &EditComment,
    ) -> anyhow::Result<Result<CommentEdited, api::Error>> {
        self.post(&id.edit_path(), Some(serde_json::to_value(req)?))
    }

    async fn delete_comment(
        &self,
        id: CommentId,
    ) -> anyhow::Result<Result<CommentDeleted, api::Error>> {
        self.post(&id.delete_path(), None)
    }

    async fn toggle_like(&self, post: PostId) -> anyhow::Result<Result<LikeToggled, api::Error>> {
        api::parse_plain_reply(&self.send(&post.like_path(), None)?)
    }
}
