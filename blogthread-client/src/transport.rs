use async_trait::async_trait;

use crate::api::{
    self, Comment, CommentDeleted, CommentEdited, CommentId, EditComment, LikeToggled, NewComment,
    PostId,
};

/// Round trips to the comment store
///
/// The outer error is a transport or parse failure, the inner one a failure
/// the server reported. Futures are not `Send` so that browser fetches can
/// implement this.
#[async_trait(?Send)]
pub trait Transport {
    async fn create_comment(
        &self,
        post: PostId,
        req: &NewComment,
    ) -> anyhow::Result<Result<Comment, api::Error>>;

    async fn edit_comment(
        &self,
        id: CommentId,
        req: &EditComment,
    ) -> anyhow::Result<Result<CommentEdited, api::Error>>;

    async fn delete_comment(
        &self,
        id: CommentId,
    ) -> anyhow::Result<Result<CommentDeleted, api::Error>>;

    async fn toggle_like(&self, post: PostId) -> anyhow::Result<Result<LikeToggled, api::Error>>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for &T {
    async fn create_comment(
        &self,
        post: PostId,
        req: &NewComment,
    ) -> anyhow::Result<Result<Comment, api::Error>> {
        (**self).create_comment(post, req).await
    }

    async fn edit_comment(
        &self,
        id: CommentId,
        req: &EditComment,
    ) -> anyhow::Result<Result<CommentEdited, api::Error>> {
        (**self).edit_comment(id, req).await
    }

    async fn delete_comment(
        &self,
        id: CommentId,
    ) -> anyhow::Result<Result<CommentDeleted, api::Error>> {
        (**self).delete_comment(id).await
    }

    async fn toggle_like(&self, post: PostId) -> anyhow::Result<Result<LikeToggled, api::Error>> {
        (**self).toggle_like(post).await
    }
}
