use blogthread_client::FormKind;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentFormProps {
    pub kind: FormKind,
    pub draft: String,
    pub pending: bool,
    pub on_draft: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Inline reply or edit form shown under a comment
#[function_component(CommentForm)]
pub fn comment_form(p: &CommentFormProps) -> Html {
    let (form_class, submit_class, submit_label) = match p.kind {
        FormKind::Reply => ("reply-form", "btn-primary", "Reply"),
        FormKind::Edit => ("edit-form", "btn-success", "Save"),
    };
    let on_submit = p.on_submit.clone();
    let on_draft = p.on_draft.clone();
    html! {
        <form
            class={ form_class }
            onsubmit={ Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                on_submit.emit(());
            }) }
        >
            <textarea
                class="form-control mb-2"
                rows="2"
                value={ p.draft.clone() }
                disabled={ p.pending }
                oninput={ Callback::from(move |e: InputEvent| {
                    let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                    on_draft.emit(input.value())
                }) }
            />
            <button
                type="submit"
                class={ classes!("btn", "btn-sm", submit_class) }
                disabled={ p.pending }
            >
                { submit_label }
            </button>
            <button
                type="button"
                class="btn btn-sm btn-secondary cancel"
                disabled={ p.pending }
                onclick={ p.on_cancel.reform(|_| ()) }
            >
                { "Cancel" }
            </button>
        </form>
    }
}
