mod app;
pub use app::{App, AppProps};

mod comment_form;
pub use comment_form::CommentForm;

mod comment_item;
pub use comment_item::{CommentActions, CommentItem};

mod like_button;
pub use like_button::LikeButton;

mod new_comment_form;
pub use new_comment_form::NewCommentForm;

/// Bootstrap margin step per indent level
pub const INDENT_STEP: usize = 4;
