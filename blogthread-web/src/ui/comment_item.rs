use std::rc::Rc;

use blogthread_client::{api::CommentId, CommentTree};
use yew::prelude::*;

use crate::ui;

/// What the user can do on a comment, each keyed by the comment's id
#[derive(Clone, PartialEq)]
pub struct CommentActions {
    pub on_reply: Callback<CommentId>,
    pub on_edit: Callback<CommentId>,
    pub on_delete: Callback<CommentId>,
    pub on_cancel: Callback<CommentId>,
    pub on_draft: Callback<(CommentId, String)>,
    pub on_submit: Callback<CommentId>,
}

#[derive(Clone, PartialEq, Properties)]
pub struct CommentItemProps {
    pub tree: Rc<CommentTree>,
    pub id: CommentId,
    pub depth: usize,
    pub actions: CommentActions,
}

#[function_component(CommentItem)]
pub fn comment_item(p: &CommentItemProps) -> Html {
    let node = match p.tree.get(p.id) {
        Some(node) => node,
        None => return html! {},
    };
    let c = node.comment();
    let id = p.id;
    let indent = format!("ms-{}", p.depth * ui::INDENT_STEP);

    let form = node.form().map(|form| {
        html! {
            <ui::CommentForm
                kind={ form.kind }
                draft={ form.draft.clone() }
                pending={ form.pending }
                on_draft={ p.actions.on_draft.reform(move |d: String| (id, d)) }
                on_submit={ p.actions.on_submit.reform(move |()| id) }
                on_cancel={ p.actions.on_cancel.reform(move |()| id) }
            />
        }
    });

    let replies = (!node.children().is_empty()).then(|| {
        html! {
            <ul class="list-group mt-2">
                { for node.children().iter().map(|child| html! {
                    <CommentItem
                        key={ child.0 }
                        tree={ p.tree.clone() }
                        id={ *child }
                        depth={ p.depth + 1 }
                        actions={ p.actions.clone() }
                    />
                }) }
            </ul>
        }
    });

    html! {
        <li
            class={ classes!("list-group-item", indent) }
            id={ format!("comment-{}", id.0) }
            data-id={ id.0.to_string() }
        >
            <strong>{ &c.author }</strong>{ ": " }
            <span class="comment-content">{ &c.content }</span>
            <br />
            <small class="text-muted">{ &c.created_at }</small>
            <div class="mt-2">
                <button
                    type="button"
                    class="btn btn-sm btn-link reply-btn"
                    onclick={ p.actions.on_reply.reform(move |_| id) }
                >
                    { "Reply" }
                </button>
                <button
                    type="button"
                    class="btn btn-sm btn-link edit-comment"
                    onclick={ p.actions.on_edit.reform(move |_| id) }
                >
                    { "Edit" }
                </button>
                <button
                    type="button"
                    class="btn btn-sm btn-link text-danger delete-comment"
                    onclick={ p.actions.on_delete.reform(move |_| id) }
                >
                    { "Delete" }
                </button>
            </div>
            <div class="reply-form-container">
                { for form }
            </div>
            { for replies }
        </li>
    }
}
