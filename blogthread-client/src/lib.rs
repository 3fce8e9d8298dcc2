mod error;
pub use error::Error;

mod http;
pub use http::HttpTransport;

mod manager;
pub use manager::{settle, CommentManager, LikeState};

mod prompt;
pub use prompt::{report_error, Prompt, DELETE_CONFIRMATION, TRANSPORT_FAILURE};

mod transport;
pub use transport::Transport;

mod tree;
pub use tree::{CommentTree, Form, FormKind, FormSubmission, Node, Walk};

pub mod api {
    pub use blogthread_api::*;
}
