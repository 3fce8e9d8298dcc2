use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct NewCommentFormProps {
    pub draft: String,
    pub pending: bool,
    pub on_draft: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(NewCommentForm)]
pub fn new_comment_form(p: &NewCommentFormProps) -> Html {
    let on_submit = p.on_submit.clone();
    let on_draft = p.on_draft.clone();
    html! {
        <form
            id="comment-form"
            class="mb-3"
            onsubmit={ Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                on_submit.emit(());
            }) }
        >
            <textarea
                name="content"
                class="form-control mb-2"
                rows="3"
                placeholder="Write a comment"
                aria-label="Comment"
                value={ p.draft.clone() }
                oninput={ Callback::from(move |e: InputEvent| {
                    let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                    on_draft.emit(input.value())
                }) }
            />
            <button type="submit" class="btn btn-primary" disabled={ p.pending }>
                { "Comment" }
            </button>
        </form>
    }
}
