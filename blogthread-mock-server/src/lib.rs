use std::collections::{BTreeMap, HashMap, HashSet};

use blogthread_client::api::{
    self, Comment, CommentDeleted, CommentEdited, CommentId, EditComment, Error, LikeToggled,
    NewComment, PostId,
};
use http::StatusCode;

mod prompt;
pub use prompt::RecordingPrompt;

mod transport;
pub use transport::MockTransport;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Clone, Debug)]
struct StoredComment {
    post: PostId,
    author: String,
    content: String,
    created_at: String,
    parent: Option<CommentId>,
}

/// In-memory stand-in for the blog server's comment and like endpoints
pub struct MockServer {
    /// Name of the logged-in user, to whom every request is attributed
    current_user: String,

    /// Users who like each post
    posts: HashMap<PostId, HashSet<String>>,

    comments: BTreeMap<CommentId, StoredComment>,
    next_id: u64,

    /// Escape HTML in stored content, like a sanitizing server would
    escape_html: bool,

    /// Paths of all requests received, in order
    requests: Vec<String>,
}

impl MockServer {
    pub fn new(current_user: &str) -> MockServer {
        MockServer {
            current_user: String::from(current_user),
            posts: HashMap::new(),
            comments: BTreeMap::new(),
            next_id: 1,
            escape_html: false,
            requests: Vec::new(),
        }
    }

    pub fn add_post(&mut self, post: PostId) {
        self.posts.entry(post).or_insert_with(HashSet::new);
    }

    pub fn login(&mut self, user: &str) {
        self.current_user = String::from(user);
    }

    pub fn set_escape_html(&mut self, escape: bool) {
        self.escape_html = escape;
    }

    /// Stores a comment without going through a request, eg. to build the
    /// initial page
    pub fn seed_comment(
        &mut self,
        post: PostId,
        author: &str,
        content: &str,
        parent: Option<CommentId>,
    ) -> Comment {
        self.add_post(post);
        self.store(post, String::from(author), String::from(content), parent)
    }

    pub fn requests(&self) -> &[String] {
        &self.requests
    }

    pub fn num_comments(&self) -> usize {
        self.comments.len()
    }

    pub fn stored(&self, id: CommentId) -> Option<Comment> {
        self.comments.get(&id).map(|c| to_comment(id, c))
    }

    /// Comments of `post` in the order the server renders them: top-level
    /// comments newest first, each followed by its replies oldest first
    pub fn thread(&self, post: PostId) -> Vec<Comment> {
        let mut res = Vec::new();
        let mut stack = self
            .comments
            .iter()
            .filter(|(_, c)| c.post == post && c.parent.is_none())
            .map(|(id, _)| *id)
            .collect::<Vec<_>>();
        while let Some(id) = stack.pop() {
            if let Some(c) = self.comments.get(&id) {
                res.push(to_comment(id, c));
                stack.extend(self.replies_of(id).into_iter().rev());
            }
        }
        res
    }

    fn replies_of(&self, id: CommentId) -> Vec<CommentId> {
        self.comments
            .iter()
            .filter(|(_, c)| c.parent == Some(id))
            .map(|(id, _)| *id)
            .collect()
    }

    fn store(
        &mut self,
        post: PostId,
        author: String,
        content: String,
        parent: Option<CommentId>,
    ) -> Comment {
        let id = CommentId(self.next_id);
        self.next_id += 1;
        let stored = StoredComment {
            post,
            author,
            content,
            created_at: chrono::Utc::now().format(TIME_FORMAT).to_string(),
            parent,
        };
        let res = to_comment(id, &stored);
        self.comments.insert(id, stored);
        res
    }

    fn clean(&self, content: &str) -> Result<String, Error> {
        let content = api::validate_content(content)?;
        Ok(match self.escape_html {
            true => escape_html(&content),
            false => content,
        })
    }

    fn owned(&self, id: CommentId) -> Result<&StoredComment, Error> {
        let c = self.comments.get(&id).ok_or(Error::NotFound)?;
        if c.author != self.current_user {
            return Err(Error::Unauthorized);
        }
        Ok(c)
    }

    pub fn comment(&mut self, post: PostId, req: NewComment) -> Result<Comment, Error> {
        let content = self.clean(&req.content)?;
        if !self.posts.contains_key(&post) {
            return Err(Error::NotFound);
        }
        let author = self.current_user.clone();
        Ok(self.store(post, author, content, req.parent_id))
    }

    pub fn edit(&mut self, id: CommentId, req: EditComment) -> Result<CommentEdited, Error> {
        self.owned(id)?;
        let content = self.clean(&req.content)?;
        if let Some(c) = self.comments.get_mut(&id) {
            c.content = content.clone();
        }
        Ok(CommentEdited {
            content,
            comment_id: Some(id),
        })
    }

    pub fn delete(&mut self, id: CommentId) -> Result<CommentDeleted, Error> {
        self.owned(id)?;
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            stack.extend(self.replies_of(next));
            self.comments.remove(&next);
        }
        Ok(CommentDeleted {
            comment_id: Some(id),
        })
    }

    pub fn like(&mut self, post: PostId) -> Result<LikeToggled, Error> {
        let likes = self.posts.get_mut(&post).ok_or(Error::NotFound)?;
        let liked = match likes.remove(&self.current_user) {
            true => false,
            false => likes.insert(self.current_user.clone()),
        };
        Ok(LikeToggled {
            liked,
            like_count: likes.len() as u64,
        })
    }

    /// Answers a `POST` the way the real server does, with status and body
    pub fn handle(&mut self, path: &str, body: Option<&[u8]>) -> (StatusCode, Vec<u8>) {
        self.requests.push(String::from(path));
        tracing::debug!(%path, "mock server received request");
        match self.route(path, body) {
            Ok(reply) => (StatusCode::OK, reply),
            Err(err) => (err.status_code(), err.contents()),
        }
    }

    fn route(&mut self, path: &str, body: Option<&[u8]>) -> Result<Vec<u8>, Error> {
        let parts = path.trim_matches('/').split('/').collect::<Vec<_>>();
        let (kind, id, action) = match parts.as_slice() {
            [kind, id] => (*kind, *id, ""),
            [kind, id, action] => (*kind, *id, *action),
            _ => return Err(Error::NotFound),
        };
        let id = id.parse::<u64>().map_err(|_| Error::NotFound)?;
        match (kind, action) {
            ("post", "ajax_comment") => {
                let req = parse_body(body)?;
                Ok(api::success_reply(&self.comment(PostId(id), req)?))
            }
            ("comment", "ajax_edit") => {
                let req = parse_body(body)?;
                Ok(api::success_reply(&self.edit(CommentId(id), req)?))
            }
            ("comment", "ajax_delete") => Ok(api::success_reply(&self.delete(CommentId(id))?)),
            // Answered without a `success` field
            ("like", "") => {
                let like = self.like(PostId(id))?;
                Ok(serde_json::to_vec(&like).expect("serializing like reply"))
            }
            _ => Err(Error::NotFound),
        }
    }
}

fn parse_body<T: serde::de::DeserializeOwned>(body: Option<&[u8]>) -> Result<T, Error> {
    // The server reads missing fields as empty content
    let body = body.unwrap_or(b"{}");
    serde_json::from_slice(body).map_err(|_| Error::EmptyContent)
}

fn to_comment(id: CommentId, c: &StoredComment) -> Comment {
    Comment {
        id,
        author: c.author.clone(),
        content: c.content.clone(),
        created_at: c.created_at.clone(),
        parent_id: c.parent,
    }
}

fn escape_html(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => res.push_str("&amp;"),
            '<' => res.push_str("&lt;"),
            '>' => res.push_str("&gt;"),
            '"' => res.push_str("&quot;"),
            c => res.push(c),
        }
    }
    res
}
