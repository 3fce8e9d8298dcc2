use crate::api::{self, CommentId};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be sent, or its reply could not be understood
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error(transparent)]
    Api(#[from] api::Error),

    #[error("no comment with id {0:?} is displayed")]
    UnknownComment(CommentId),

    #[error("comment {0:?} is already displayed")]
    DuplicateComment(CommentId),

    #[error("a submission is already in flight for comment {0:?}")]
    SubmissionPending(CommentId),
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Api(api::Error::EmptyContent))
    }
}
