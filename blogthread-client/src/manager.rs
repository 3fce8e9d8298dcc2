use crate::{
    api::{self, CommentId, NewComment, PostId},
    prompt::{report_error, DELETE_CONFIRMATION},
    CommentTree, Error, Prompt, Transport,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LikeState {
    pub liked: bool,
    pub count: u64,
}

/// Folds a transport result and the server's verdict into one `Result`
pub fn settle<R>(res: anyhow::Result<Result<R, api::Error>>) -> Result<R, Error> {
    Ok(res??)
}

/// Keeps the displayed comment thread of one post in sync with the server
///
/// Every mutation is one round trip, and the tree only changes once the
/// server confirmed it. Failures are reported through the `Prompt` and
/// returned to the caller.
pub struct CommentManager<T, P> {
    post: PostId,
    transport: T,
    prompt: P,
    tree: CommentTree,
    like: Option<LikeState>,
}

impl<T: Transport, P: Prompt> CommentManager<T, P> {
    pub fn new(post: PostId, tree: CommentTree, transport: T, prompt: P) -> CommentManager<T, P> {
        CommentManager {
            post,
            transport,
            prompt,
            tree,
            like: None,
        }
    }

    pub fn post(&self) -> PostId {
        self.post
    }

    pub fn tree(&self) -> &CommentTree {
        &self.tree
    }

    pub fn like(&self) -> Option<LikeState> {
        self.like
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    fn report<R>(&self, res: Result<R, Error>) -> Result<R, Error> {
        if let Err(err) = &res {
            report_error(&self.prompt, err);
        }
        res
    }

    pub async fn submit_comment(&mut self, text: &str) -> Result<CommentId, Error> {
        let res = self.do_submit_comment(text).await;
        self.report(res)
    }

    async fn do_submit_comment(&mut self, text: &str) -> Result<CommentId, Error> {
        let req = NewComment {
            content: api::validate_content(text)?,
            parent_id: None,
        };
        tracing::debug!(post = ?self.post, "submitting comment");
        let comment = settle(self.transport.create_comment(self.post, &req).await)?;
        let id = comment.id;
        self.tree.insert_top(comment)?;
        Ok(id)
    }

    pub fn open_reply_form(&mut self, id: CommentId) -> Result<bool, Error> {
        let res = self.tree.open_reply_form(id);
        self.report(res)
    }

    pub fn open_edit_form(&mut self, id: CommentId) -> Result<String, Error> {
        let res = self.tree.open_edit_form(id);
        self.report(res)
    }

    pub fn cancel_form(&mut self, id: CommentId) -> Result<(), Error> {
        let res = self.tree.close_form(id);
        self.report(res)
    }

    /// Posts `text` as a reply to `parent`, closing its form on success
    pub async fn submit_reply(
        &mut self,
        parent: CommentId,
        text: &str,
    ) -> Result<CommentId, Error> {
        let res = self.do_submit_reply(parent, text).await;
        self.report(res)
    }

    async fn do_submit_reply(&mut self, parent: CommentId, text: &str) -> Result<CommentId, Error> {
        let req = self.tree.begin_reply(parent, text)?;
        tracing::debug!(post = ?self.post, ?parent, "submitting reply");
        let res = settle(self.transport.create_comment(self.post, &req).await);
        self.tree.apply_reply(parent, res)
    }

    /// Saves `text` as the new content of `id`, closing its form on success
    ///
    /// The displayed content becomes what the server stored, not `text`.
    pub async fn submit_edit(&mut self, id: CommentId, text: &str) -> Result<(), Error> {
        let res = self.do_submit_edit(id, text).await;
        self.report(res)
    }

    async fn do_submit_edit(&mut self, id: CommentId, text: &str) -> Result<(), Error> {
        let req = self.tree.begin_edit(id, text)?;
        tracing::debug!(?id, "submitting edit");
        let res = settle(self.transport.edit_comment(id, &req).await);
        self.tree.apply_edit(id, res)
    }

    /// Deletes `id` and its replies once the user confirmed
    ///
    /// Returns `Ok(false)` if the user declined.
    pub async fn delete(&mut self, id: CommentId) -> Result<bool, Error> {
        let res = self.do_delete(id).await;
        self.report(res)
    }

    async fn do_delete(&mut self, id: CommentId) -> Result<bool, Error> {
        if !self.tree.contains(id) {
            return Err(Error::UnknownComment(id));
        }
        if !self.prompt.confirm(DELETE_CONFIRMATION) {
            return Ok(false);
        }
        tracing::debug!(?id, "deleting comment");
        settle(self.transport.delete_comment(id).await)?;
        let removed = self.tree.remove(id)?;
        tracing::debug!(?id, num_removed = removed.len(), "comment deleted");
        Ok(true)
    }

    pub async fn toggle_like(&mut self) -> Result<LikeState, Error> {
        let res = settle(self.transport.toggle_like(self.post).await).map(|l| LikeState {
            liked: l.liked,
            count: l.like_count,
        });
        if let Ok(state) = &res {
            self.like = Some(*state);
        }
        self.report(res)
    }
}
