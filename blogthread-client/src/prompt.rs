use crate::Error;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this comment?";
pub const TRANSPORT_FAILURE: &str = "Could not reach the server, please try again.";

/// Blocking dialogs shown to the user
pub trait Prompt {
    fn alert(&self, msg: &str);
    fn confirm(&self, msg: &str) -> bool;
}

impl<P: Prompt + ?Sized> Prompt for &P {
    fn alert(&self, msg: &str) {
        (**self).alert(msg)
    }

    fn confirm(&self, msg: &str) -> bool {
        (**self).confirm(msg)
    }
}

/// Tells the user about a failed operation
pub fn report_error<P: Prompt + ?Sized>(prompt: &P, err: &Error) {
    match err {
        Error::Api(err) => {
            tracing::info!("operation refused: {err}");
            prompt.alert(&err.to_string());
        }
        Error::Anyhow(err) => {
            tracing::error!(?err, "request failed");
            prompt.alert(TRANSPORT_FAILURE);
        }
        Error::UnknownComment(_) | Error::DuplicateComment(_) | Error::SubmissionPending(_) => {
            tracing::warn!("ignoring user action: {err}");
        }
    }
}
