use anyhow::Context;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    api::{
        self, Comment, CommentDeleted, CommentEdited, CommentId, CsrfToken, EditComment,
        LikeToggled, NewComment, PostId,
    },
    Transport,
};

/// Talks to the blog's JSON endpoints over HTTP
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,

    /// Scheme and authority, without trailing slash
    host: String,

    csrf: CsrfToken,

    /// Raw `Cookie` header value, for clients outside the browser
    session: Option<String>,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client, host: String, csrf: CsrfToken) -> HttpTransport {
        HttpTransport {
            client,
            host: String::from(host.trim_end_matches('/')),
            csrf,
            session: None,
        }
    }

    pub fn with_session_cookie(mut self, cookie: String) -> HttpTransport {
        self.session = Some(cookie);
        self
    }

    async fn send<B>(&self, path: &str, body: Option<&B>) -> anyhow::Result<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        let mut req = self
            .client
            .post(format!("{}{}", self.host, path))
            .header(api::CSRF_HEADER, &self.csrf.0);
        if let Some(body) = body {
            req = req.json(body);
        }
        if let Some(cookie) = &self.session {
            req = req.header(reqwest::header::COOKIE, cookie);
        }
        tracing::debug!(%path, "sending request");
        let resp = req
            .send()
            .await
            .with_context(|| format!("sending request to {path}"))?;
        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .with_context(|| format!("reading reply to {path}"))?;
        tracing::debug!(%path, %status, "received reply");
        Ok(body.to_vec())
    }

    async fn post<B, R>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> anyhow::Result<Result<R, api::Error>>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let reply = self.send(path, body).await?;
        api::parse_reply(&reply).with_context(|| format!("parsing reply to {path}"))
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn create_comment(
        &self,
        post: PostId,
        req: &NewComment,
    ) -> anyhow::Result<Result<Comment, api::Error>> {
        self.post(&post.comment_path(), Some(req)).await
    }

    async fn edit_comment(
        &self,
        id: CommentId,
        req: &EditComment,
    ) -> anyhow::Result<Result<CommentEdited, api::Error>> {
        self.post(&id.edit_path(), Some(req)).await
    }

    async fn delete_comment(
        &self,
        id: CommentId,
    ) -> anyhow::Result<Result<CommentDeleted, api::Error>> {
        self.post::<(), _>(&id.delete_path(), None).await
    }

    async fn toggle_like(&self, post: PostId) -> anyhow::Result<Result<LikeToggled, api::Error>> {
        let path = post.like_path();
        let reply = self.send::<()>(&path, None).await?;
        api::parse_plain_reply(&reply).with_context(|| format!("parsing reply to {path}"))
    }
}
