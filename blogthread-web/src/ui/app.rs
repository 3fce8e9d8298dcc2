use std::rc::Rc;

use blogthread_client::{
    api::{self, Comment, CommentEdited, CommentId, LikeToggled, NewComment},
    report_error, settle, CommentTree, Error, FormSubmission, LikeState, Prompt, Transport,
    DELETE_CONFIRMATION,
};
use yew::prelude::*;

use crate::{dom::BrowserPrompt, ui, PageConfig};

#[derive(Clone, PartialEq, Properties)]
pub struct AppProps {
    pub config: PageConfig,
    pub tree: CommentTree,
    pub like: Option<LikeState>,
}

pub enum AppMsg {
    SetNewDraft(String),
    SubmitNew,
    NewCreated(Result<Comment, Error>),

    OpenReply(CommentId),
    OpenEdit(CommentId),
    CancelForm(CommentId),
    SetDraft(CommentId, String),
    SubmitForm(CommentId),
    ReplyCreated(CommentId, Result<Comment, Error>),
    Edited(CommentId, Result<CommentEdited, Error>),

    Delete(CommentId),
    Deleted(CommentId, Result<(), Error>),

    ToggleLike,
    LikeToggled(Result<LikeToggled, Error>),
}

pub struct App {
    tree: Rc<CommentTree>,
    new_draft: String,
    new_pending: bool,
    like: Option<LikeState>,
    like_pending: bool,
}

impl App {
    fn tree_mut(&mut self) -> &mut CommentTree {
        Rc::make_mut(&mut self.tree)
    }

    /// Reports `res` if it failed, returning whether anything changed
    fn check(&self, res: Result<(), Error>) -> bool {
        match res {
            Ok(()) => true,
            Err(err) => {
                report_error(&BrowserPrompt, &err);
                false
            }
        }
    }

    /// Sends the draft of the form open under `id`, returning whether one was
    fn submit_form(&mut self, ctx: &Context<Self>, id: CommentId) -> Result<bool, Error> {
        let submission = match self.tree_mut().submit_form(id)? {
            Some(submission) => submission,
            None => return Ok(false),
        };
        let config = ctx.props().config.clone();
        match submission {
            FormSubmission::Reply(req) => {
                tracing::debug!(parent = ?id, "submitting reply");
                ctx.link().send_future(async move {
                    let res = config.transport().create_comment(config.post, &req).await;
                    AppMsg::ReplyCreated(id, settle(res))
                });
            }
            FormSubmission::Edit(req) => {
                tracing::debug!(?id, "submitting edit");
                ctx.link().send_future(async move {
                    let res = config.transport().edit_comment(id, &req).await;
                    AppMsg::Edited(id, settle(res))
                });
            }
        }
        Ok(true)
    }
}

impl Component for App {
    type Message = AppMsg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        App {
            tree: Rc::new(ctx.props().tree.clone()),
            new_draft: String::new(),
            new_pending: false,
            like: ctx.props().like,
            like_pending: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::SetNewDraft(draft) => {
                self.new_draft = draft;
                false
            }
            AppMsg::SubmitNew => {
                if self.new_pending {
                    return false;
                }
                let content = match api::validate_content(&self.new_draft) {
                    Ok(c) => c,
                    Err(err) => return self.check(Err(err.into())),
                };
                self.new_pending = true;
                let config = ctx.props().config.clone();
                ctx.link().send_future(async move {
                    let req = NewComment {
                        content,
                        parent_id: None,
                    };
                    let res = config.transport().create_comment(config.post, &req).await;
                    AppMsg::NewCreated(settle(res))
                });
                true
            }
            AppMsg::NewCreated(res) => {
                self.new_pending = false;
                let res = res.and_then(|c| self.tree_mut().insert_top(c));
                if res.is_ok() {
                    self.new_draft.clear();
                }
                self.check(res);
                true
            }
            AppMsg::OpenReply(id) => {
                let res = self.tree_mut().open_reply_form(id);
                match res {
                    Ok(opened) => opened,
                    Err(err) => self.check(Err(err)),
                }
            }
            AppMsg::OpenEdit(id) => {
                let res = self.tree_mut().open_edit_form(id).map(|_| ());
                self.check(res)
            }
            AppMsg::CancelForm(id) => {
                let res = self.tree_mut().close_form(id);
                self.check(res)
            }
            AppMsg::SetDraft(id, draft) => {
                let res = self.tree_mut().set_draft(id, draft);
                self.check(res);
                false
            }
            AppMsg::SubmitForm(id) => match self.submit_form(ctx, id) {
                Ok(sent) => sent,
                Err(err) => self.check(Err(err)),
            },
            AppMsg::ReplyCreated(parent, res) => {
                let res = self.tree_mut().apply_reply(parent, res).map(|_| ());
                self.check(res);
                true
            }
            AppMsg::Edited(id, res) => {
                let res = self.tree_mut().apply_edit(id, res);
                self.check(res);
                true
            }
            AppMsg::Delete(id) => {
                if !self.tree.contains(id) {
                    return false;
                }
                if !BrowserPrompt.confirm(DELETE_CONFIRMATION) {
                    return false;
                }
                tracing::debug!(?id, "deleting comment");
                let config = ctx.props().config.clone();
                ctx.link().send_future(async move {
                    let res = config.transport().delete_comment(id).await;
                    AppMsg::Deleted(id, settle(res).map(|_| ()))
                });
                false
            }
            AppMsg::Deleted(id, res) => {
                let res = res.and_then(|()| self.tree_mut().remove(id).map(|_| ()));
                self.check(res)
            }
            AppMsg::ToggleLike => {
                if self.like_pending {
                    return false;
                }
                self.like_pending = true;
                let config = ctx.props().config.clone();
                ctx.link().send_future(async move {
                    let res = config.transport().toggle_like(config.post).await;
                    AppMsg::LikeToggled(settle(res))
                });
                true
            }
            AppMsg::LikeToggled(res) => {
                self.like_pending = false;
                let res = res.map(|l| {
                    self.like = Some(LikeState {
                        liked: l.liked,
                        count: l.like_count,
                    });
                });
                self.check(res);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let actions = ui::CommentActions {
            on_reply: ctx.link().callback(AppMsg::OpenReply),
            on_edit: ctx.link().callback(AppMsg::OpenEdit),
            on_delete: ctx.link().callback(AppMsg::Delete),
            on_cancel: ctx.link().callback(AppMsg::CancelForm),
            on_draft: ctx.link().callback(|(id, d): (CommentId, String)| AppMsg::SetDraft(id, d)),
            on_submit: ctx.link().callback(AppMsg::SubmitForm),
        };
        let like = self.like.map(|l| {
            html! {
                <ui::LikeButton
                    liked={ l.liked }
                    count={ l.count }
                    pending={ self.like_pending }
                    on_click={ ctx.link().callback(|()| AppMsg::ToggleLike) }
                />
            }
        });
        html! {
            <div class="comment-thread">
                { for like }
                <ui::NewCommentForm
                    draft={ self.new_draft.clone() }
                    pending={ self.new_pending }
                    on_draft={ ctx.link().callback(AppMsg::SetNewDraft) }
                    on_submit={ ctx.link().callback(|()| AppMsg::SubmitNew) }
                />
                <ul id="comment-list" class="list-group">
                    { for self.tree.roots().iter().map(|id| html! {
                        <ui::CommentItem
                            key={ id.0 }
                            tree={ self.tree.clone() }
                            id={ *id }
                            depth={ 0 }
                            actions={ actions.clone() }
                        />
                    }) }
                </ul>
            </div>
        }
    }
}
