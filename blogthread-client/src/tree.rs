use std::collections::{HashMap, HashSet};

use crate::{
    api::{self, Comment, CommentEdited, CommentId, EditComment, NewComment},
    Error,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormKind {
    Reply,
    Edit,
}

/// Inline form opened under a comment
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Form {
    pub kind: FormKind,
    pub draft: String,

    /// Set while the form's submission waits for the server
    pub pending: bool,
}

/// Request built from the draft of an open form
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormSubmission {
    Reply(NewComment),
    Edit(EditComment),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node {
    comment: Comment,
    parent: Option<CommentId>,
    children: Vec<CommentId>,
    form: Option<Form>,
}

impl Node {
    fn new(comment: Comment, parent: Option<CommentId>) -> Node {
        Node {
            comment,
            parent,
            children: Vec::new(),
            form: None,
        }
    }

    pub fn id(&self) -> CommentId {
        self.comment.id
    }

    pub fn comment(&self) -> &Comment {
        &self.comment
    }

    pub fn parent(&self) -> Option<CommentId> {
        self.parent
    }

    /// Replies, in display order
    pub fn children(&self) -> &[CommentId] {
        &self.children
    }

    pub fn form(&self) -> Option<&Form> {
        self.form.as_ref()
    }
}

/// The displayed comment thread of one post
///
/// Nodes live in an arena indexed by comment id. Indent levels are never
/// stored: they are the depth of a node in the tree.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommentTree {
    nodes: HashMap<CommentId, Node>,

    /// Top-level comments, in display order
    roots: Vec<CommentId>,
}

impl CommentTree {
    pub fn new() -> CommentTree {
        CommentTree::default()
    }

    /// Builds the tree from comments listed in display order
    ///
    /// Comments whose parent cannot be found are shown at the top level.
    pub fn from_comments<I>(comments: I) -> CommentTree
    where
        I: IntoIterator<Item = Comment>,
    {
        let mut tree = CommentTree::new();
        let mut seen = HashSet::new();
        let mut todo: Vec<Comment> = Vec::new();
        for c in comments {
            if !seen.insert(c.id) {
                tracing::warn!(id = ?c.id, "ignoring duplicate comment in initial thread");
                continue;
            }
            todo.push(c);
        }

        // Parents may be listed after their children, so link in passes
        while !todo.is_empty() {
            let num_todo = todo.len();
            let mut deferred = Vec::new();
            for c in todo.drain(..) {
                match c.parent_id {
                    None => tree.push_root(c),
                    Some(p) if tree.nodes.contains_key(&p) => tree.push_child(p, c),
                    Some(_) => deferred.push(c),
                }
            }
            if deferred.len() == num_todo {
                // No progress: the first one's parent is missing or part of a cycle
                let mut orphan = deferred.remove(0);
                tracing::warn!(
                    id = ?orphan.id,
                    parent = ?orphan.parent_id,
                    "parent of comment not found, showing it at top level"
                );
                orphan.parent_id = None;
                tree.push_root(orphan);
            }
            todo = deferred;
        }
        tree
    }

    fn push_root(&mut self, c: Comment) {
        self.roots.push(c.id);
        self.nodes.insert(c.id, Node::new(c, None));
    }

    fn push_child(&mut self, parent: CommentId, c: Comment) {
        if let Some(p) = self.nodes.get_mut(&parent) {
            p.children.push(c.id);
        }
        self.nodes.insert(c.id, Node::new(c, Some(parent)));
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: CommentId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn get(&self, id: CommentId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn roots(&self) -> &[CommentId] {
        &self.roots
    }

    fn node_mut(&mut self, id: CommentId) -> Result<&mut Node, Error> {
        self.nodes.get_mut(&id).ok_or(Error::UnknownComment(id))
    }

    /// Indent level of a comment, 0 for top-level ones
    pub fn depth(&self, id: CommentId) -> Option<usize> {
        let mut node = self.nodes.get(&id)?;
        let mut depth = 0;
        while let Some(p) = node.parent {
            node = self.nodes.get(&p)?;
            depth += 1;
        }
        Some(depth)
    }

    /// Depth-first walk in display order, yielding each node with its indent level
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            stack: self.roots.iter().rev().map(|id| (0, *id)).collect(),
        }
    }

    /// Shows a new top-level comment at the head of the thread
    pub fn insert_top(&mut self, mut c: Comment) -> Result<(), Error> {
        if self.nodes.contains_key(&c.id) {
            return Err(Error::DuplicateComment(c.id));
        }
        c.parent_id = None;
        self.roots.insert(0, c.id);
        self.nodes.insert(c.id, Node::new(c, None));
        Ok(())
    }

    /// Shows a new reply as the last child of `parent`, returning its indent level
    pub fn insert_reply(&mut self, parent: CommentId, mut c: Comment) -> Result<usize, Error> {
        if self.nodes.contains_key(&c.id) {
            return Err(Error::DuplicateComment(c.id));
        }
        self.node_mut(parent)?.children.push(c.id);
        c.parent_id = Some(parent);
        let id = c.id;
        self.nodes.insert(id, Node::new(c, Some(parent)));
        Ok(self.depth(id).expect("just-inserted reply is in the tree"))
    }

    /// Swaps the displayed content of a comment, leaving its replies untouched
    pub fn set_content(&mut self, id: CommentId, content: String) -> Result<(), Error> {
        self.node_mut(id)?.comment.content = content;
        Ok(())
    }

    /// Removes a comment and all of its replies, returning the removed ids
    pub fn remove(&mut self, id: CommentId) -> Result<Vec<CommentId>, Error> {
        let parent = self.nodes.get(&id).ok_or(Error::UnknownComment(id))?.parent;
        match parent {
            None => self.roots.retain(|r| *r != id),
            Some(p) => {
                if let Some(p) = self.nodes.get_mut(&p) {
                    p.children.retain(|c| *c != id);
                }
            }
        }
        let mut removed = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.remove(&next) {
                stack.extend(node.children.iter().rev());
                removed.push(next);
            }
        }
        Ok(removed)
    }

    /// Opens the reply form, unless a form is already open under this comment
    ///
    /// Returns whether a form was opened.
    pub fn open_reply_form(&mut self, id: CommentId) -> Result<bool, Error> {
        let node = self.node_mut(id)?;
        if node.form.is_some() {
            return Ok(false);
        }
        node.form = Some(Form {
            kind: FormKind::Reply,
            draft: String::new(),
            pending: false,
        });
        Ok(true)
    }

    /// Opens the edit form pre-filled with the current content, replacing any
    /// form already open under this comment, and returns the pre-filled text
    pub fn open_edit_form(&mut self, id: CommentId) -> Result<String, Error> {
        let node = self.node_mut(id)?;
        if node.form.as_ref().map_or(false, |f| f.pending) {
            return Err(Error::SubmissionPending(id));
        }
        let draft = String::from(node.comment.content.trim());
        node.form = Some(Form {
            kind: FormKind::Edit,
            draft: draft.clone(),
            pending: false,
        });
        Ok(draft)
    }

    pub fn set_draft(&mut self, id: CommentId, draft: String) -> Result<(), Error> {
        if let Some(form) = &mut self.node_mut(id)?.form {
            form.draft = draft;
        }
        Ok(())
    }

    pub fn close_form(&mut self, id: CommentId) -> Result<(), Error> {
        self.node_mut(id)?.form = None;
        Ok(())
    }

    /// Marks the open form, if any, as waiting for the server
    pub fn begin_submit(&mut self, id: CommentId) -> Result<(), Error> {
        match &mut self.node_mut(id)?.form {
            Some(form) if form.pending => Err(Error::SubmissionPending(id)),
            Some(form) => {
                form.pending = true;
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Re-enables the open form after a failed submission, keeping its draft
    pub fn abort_submit(&mut self, id: CommentId) {
        if let Some(form) = self.nodes.get_mut(&id).and_then(|n| n.form.as_mut()) {
            form.pending = false;
        }
    }

    /// Validates `text` as a reply to `parent` and marks the form open there
    /// as waiting for the server, returning the request to send
    pub fn begin_reply(&mut self, parent: CommentId, text: &str) -> Result<NewComment, Error> {
        if !self.contains(parent) {
            return Err(Error::UnknownComment(parent));
        }
        let content = api::validate_content(text)?;
        self.begin_submit(parent)?;
        Ok(NewComment {
            content,
            parent_id: Some(parent),
        })
    }

    /// Same as `begin_reply`, for a new content of `id`
    pub fn begin_edit(&mut self, id: CommentId, text: &str) -> Result<EditComment, Error> {
        if !self.contains(id) {
            return Err(Error::UnknownComment(id));
        }
        let content = api::validate_content(text)?;
        self.begin_submit(id)?;
        Ok(EditComment { content })
    }

    /// Starts submitting the draft of the form open under `id`
    ///
    /// Returns `None` if no form is open there.
    pub fn submit_form(&mut self, id: CommentId) -> Result<Option<FormSubmission>, Error> {
        let node = self.nodes.get(&id).ok_or(Error::UnknownComment(id))?;
        let (kind, draft) = match &node.form {
            Some(form) => (form.kind, form.draft.clone()),
            None => return Ok(None),
        };
        Ok(Some(match kind {
            FormKind::Reply => FormSubmission::Reply(self.begin_reply(id, &draft)?),
            FormKind::Edit => FormSubmission::Edit(self.begin_edit(id, &draft)?),
        }))
    }

    /// Applies the server's answer to a reply submitted under `parent`
    ///
    /// On success the reply is shown and the form closed. Otherwise the form
    /// is re-enabled with its draft.
    pub fn apply_reply(
        &mut self,
        parent: CommentId,
        res: Result<Comment, Error>,
    ) -> Result<CommentId, Error> {
        let res = res.and_then(|c| {
            let id = c.id;
            self.insert_reply(parent, c).map(|_| id)
        });
        match res {
            Ok(id) => {
                self.close_form(parent)?;
                Ok(id)
            }
            Err(err) => {
                self.abort_submit(parent);
                Err(err)
            }
        }
    }

    /// Applies the server's answer to an edit of `id`, showing the content the
    /// server stored
    pub fn apply_edit(
        &mut self,
        id: CommentId,
        res: Result<CommentEdited, Error>,
    ) -> Result<(), Error> {
        match res.and_then(|edited| self.set_content(id, edited.content)) {
            Ok(()) => self.close_form(id),
            Err(err) => {
                self.abort_submit(id);
                Err(err)
            }
        }
    }
}

pub struct Walk<'a> {
    tree: &'a CommentTree,
    stack: Vec<(usize, CommentId)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (depth, id) = self.stack.pop()?;
            if let Some(node) = self.tree.nodes.get(&id) {
                self.stack
                    .extend(node.children.iter().rev().map(|c| (depth + 1, *c)));
                return Some((depth, node));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn comment(id: u64, parent: Option<u64>, content: &str) -> Comment {
        Comment {
            id: CommentId(id),
            author: String::from("alice"),
            content: String::from(content),
            created_at: String::from("2024-01-02 03:04"),
            parent_id: parent.map(CommentId),
        }
    }

    fn layout(tree: &CommentTree) -> Vec<(usize, u64)> {
        tree.walk().map(|(d, n)| (d, n.id().0)).collect()
    }

    fn check_invariants(tree: &CommentTree) {
        let mut seen = HashSet::new();
        for (depth, node) in tree.walk() {
            assert!(seen.insert(node.id()), "node {:?} reached twice", node.id());
            assert_eq!(tree.depth(node.id()), Some(depth));
            assert_eq!(node.comment().parent_id, node.parent());
            for c in node.children() {
                assert_eq!(tree.get(*c).unwrap().parent(), Some(node.id()));
            }
        }
        assert_eq!(seen.len(), tree.len(), "some nodes are not reachable");
        for r in tree.roots() {
            assert_eq!(tree.get(*r).unwrap().parent(), None);
        }
    }

    #[test]
    fn from_comments_keeps_order() {
        let tree = CommentTree::from_comments(vec![
            comment(1, None, "a"),
            comment(2, Some(1), "a.1"),
            comment(3, None, "b"),
            comment(4, Some(1), "a.2"),
            comment(5, Some(2), "a.1.1"),
        ]);
        assert_eq!(layout(&tree), vec![(0, 1), (1, 2), (2, 5), (1, 4), (0, 3)]);
        check_invariants(&tree);
    }

    #[test]
    fn from_comments_children_before_parents() {
        let tree = CommentTree::from_comments(vec![
            comment(5, Some(2), "a.1.1"),
            comment(2, Some(1), "a.1"),
            comment(1, None, "a"),
        ]);
        assert_eq!(layout(&tree), vec![(0, 1), (1, 2), (2, 5)]);
        check_invariants(&tree);
    }

    #[test]
    fn from_comments_orphans_and_cycles() {
        let tree = CommentTree::from_comments(vec![
            comment(1, None, "a"),
            comment(2, Some(42), "orphan"),
            comment(3, Some(4), "cycle"),
            comment(4, Some(3), "cycle"),
            comment(1, None, "duplicate"),
        ]);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.get(CommentId(1)).unwrap().comment().content, "a");
        assert_eq!(tree.depth(CommentId(2)), Some(0));
        assert_eq!(tree.depth(CommentId(3)), Some(0));
        assert_eq!(tree.depth(CommentId(4)), Some(1));
        check_invariants(&tree);
    }

    #[test]
    fn top_level_goes_first() {
        let mut tree = CommentTree::new();
        tree.insert_top(comment(1, None, "first")).unwrap();
        tree.insert_top(comment(2, None, "second")).unwrap();
        assert_eq!(tree.roots(), &[CommentId(2), CommentId(1)]);
        assert!(matches!(
            tree.insert_top(comment(1, None, "again")),
            Err(Error::DuplicateComment(CommentId(1)))
        ));
    }

    #[test]
    fn replies_nest_one_level_deeper() {
        let mut tree = CommentTree::new();
        tree.insert_top(comment(1, None, "hello")).unwrap();
        assert_eq!(tree.insert_reply(CommentId(1), comment(2, None, "hi")).unwrap(), 1);
        assert_eq!(tree.insert_reply(CommentId(2), comment(3, None, "yo")).unwrap(), 2);
        assert_eq!(tree.insert_reply(CommentId(1), comment(4, None, "hey")).unwrap(), 1);
        assert_eq!(tree.roots(), &[CommentId(1)]);
        assert_eq!(layout(&tree), vec![(0, 1), (1, 2), (2, 3), (1, 4)]);
        assert_eq!(
            tree.get(CommentId(3)).unwrap().comment().parent_id,
            Some(CommentId(2))
        );
        check_invariants(&tree);
    }

    #[test]
    fn reply_to_unknown_parent() {
        let mut tree = CommentTree::new();
        assert!(matches!(
            tree.insert_reply(CommentId(9), comment(1, None, "x")),
            Err(Error::UnknownComment(CommentId(9)))
        ));
        assert!(tree.is_empty());
    }

    #[test]
    fn set_content_keeps_children() {
        let mut tree = CommentTree::from_comments(vec![
            comment(1, None, "a"),
            comment(2, Some(1), "a.1"),
        ]);
        tree.set_content(CommentId(1), String::from("edited")).unwrap();
        let node = tree.get(CommentId(1)).unwrap();
        assert_eq!(node.comment().content, "edited");
        assert_eq!(node.children(), &[CommentId(2)]);
    }

    #[test]
    fn remove_takes_whole_subtree() {
        let mut tree = CommentTree::from_comments(vec![
            comment(1, None, "a"),
            comment(2, Some(1), "a.1"),
            comment(3, Some(2), "a.1.1"),
            comment(4, Some(1), "a.2"),
            comment(5, None, "b"),
        ]);
        assert_eq!(
            tree.remove(CommentId(2)).unwrap(),
            vec![CommentId(2), CommentId(3)]
        );
        assert_eq!(layout(&tree), vec![(0, 1), (1, 4), (0, 5)]);
        check_invariants(&tree);

        assert_eq!(
            tree.remove(CommentId(1)).unwrap(),
            vec![CommentId(1), CommentId(4)]
        );
        assert_eq!(layout(&tree), vec![(0, 5)]);
        assert!(matches!(
            tree.remove(CommentId(1)),
            Err(Error::UnknownComment(_))
        ));
        check_invariants(&tree);
    }

    #[test]
    fn reply_form_opens_once() {
        let mut tree = CommentTree::from_comments(vec![comment(1, None, "a")]);
        assert!(tree.open_reply_form(CommentId(1)).unwrap());
        tree.set_draft(CommentId(1), String::from("typed")).unwrap();
        assert!(!tree.open_reply_form(CommentId(1)).unwrap());
        let form = tree.get(CommentId(1)).unwrap().form().unwrap();
        assert_eq!(form.kind, FormKind::Reply);
        assert_eq!(form.draft, "typed");
    }

    #[test]
    fn edit_form_replaces_reply_form() {
        let mut tree = CommentTree::from_comments(vec![comment(1, None, "  a  ")]);
        tree.open_reply_form(CommentId(1)).unwrap();
        assert_eq!(tree.open_edit_form(CommentId(1)).unwrap(), "a");
        let form = tree.get(CommentId(1)).unwrap().form().unwrap();
        assert_eq!(form.kind, FormKind::Edit);
        assert_eq!(form.draft, "a");

        // A reply click while editing does nothing
        assert!(!tree.open_reply_form(CommentId(1)).unwrap());
        tree.close_form(CommentId(1)).unwrap();
        assert_eq!(tree.get(CommentId(1)).unwrap().form(), None);
    }

    #[test]
    fn pending_submission_blocks_second_one() {
        let mut tree = CommentTree::from_comments(vec![comment(1, None, "a")]);
        tree.open_reply_form(CommentId(1)).unwrap();
        tree.begin_submit(CommentId(1)).unwrap();
        assert!(matches!(
            tree.begin_submit(CommentId(1)),
            Err(Error::SubmissionPending(_))
        ));
        assert!(matches!(
            tree.open_edit_form(CommentId(1)),
            Err(Error::SubmissionPending(_))
        ));
        tree.abort_submit(CommentId(1));
        tree.begin_submit(CommentId(1)).unwrap();
    }

    #[test]
    fn submit_form_builds_request_from_draft() {
        let mut tree =
            CommentTree::from_comments(vec![comment(1, None, "a"), comment(2, None, "b")]);
        assert_eq!(tree.submit_form(CommentId(1)).unwrap(), None);
        assert!(matches!(
            tree.submit_form(CommentId(9)),
            Err(Error::UnknownComment(CommentId(9)))
        ));

        tree.open_reply_form(CommentId(1)).unwrap();
        tree.set_draft(CommentId(1), String::from("  hi  ")).unwrap();
        assert_eq!(
            tree.submit_form(CommentId(1)).unwrap(),
            Some(FormSubmission::Reply(NewComment {
                content: String::from("hi"),
                parent_id: Some(CommentId(1)),
            }))
        );
        assert!(tree.get(CommentId(1)).unwrap().form().unwrap().pending);

        tree.open_edit_form(CommentId(2)).unwrap();
        tree.set_draft(CommentId(2), String::from(" ")).unwrap();
        assert!(tree.submit_form(CommentId(2)).unwrap_err().is_validation());
        assert!(!tree.get(CommentId(2)).unwrap().form().unwrap().pending);
        tree.set_draft(CommentId(2), String::from("b2")).unwrap();
        assert_eq!(
            tree.submit_form(CommentId(2)).unwrap(),
            Some(FormSubmission::Edit(EditComment {
                content: String::from("b2"),
            }))
        );
    }

    #[test]
    fn reply_applies_without_an_open_form() {
        let mut tree = CommentTree::from_comments(vec![comment(1, None, "a")]);
        let req = tree.begin_reply(CommentId(1), "hi").unwrap();
        assert_eq!(req.parent_id, Some(CommentId(1)));
        let id = tree
            .apply_reply(CommentId(1), Ok(comment(2, None, "hi")))
            .unwrap();
        assert_eq!(id, CommentId(2));
        assert_eq!(tree.depth(id), Some(1));
        assert_eq!(tree.get(CommentId(1)).unwrap().form(), None);
    }

    #[test]
    fn failed_reply_reenables_form() {
        let mut tree = CommentTree::from_comments(vec![comment(1, None, "a")]);
        tree.open_reply_form(CommentId(1)).unwrap();
        tree.set_draft(CommentId(1), String::from("hi")).unwrap();
        tree.submit_form(CommentId(1)).unwrap();

        let offline = Error::Anyhow(anyhow::anyhow!("connection refused"));
        assert!(tree.apply_reply(CommentId(1), Err(offline)).is_err());
        let form = tree.get(CommentId(1)).unwrap().form().unwrap();
        assert!(!form.pending);
        assert_eq!(form.draft, "hi");
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn duplicate_reply_reenables_form() {
        let mut tree = CommentTree::from_comments(vec![comment(1, None, "a")]);
        tree.open_reply_form(CommentId(1)).unwrap();
        tree.set_draft(CommentId(1), String::from("hi")).unwrap();
        tree.submit_form(CommentId(1)).unwrap();

        // The server hands back an id that is already displayed
        assert!(matches!(
            tree.apply_reply(CommentId(1), Ok(comment(1, None, "hi"))),
            Err(Error::DuplicateComment(CommentId(1)))
        ));
        assert!(!tree.get(CommentId(1)).unwrap().form().unwrap().pending);
        assert!(tree.get(CommentId(1)).unwrap().children().is_empty());
        tree.submit_form(CommentId(1)).unwrap();
    }

    #[test]
    fn edit_applies_server_content() {
        let mut tree = CommentTree::from_comments(vec![comment(1, None, "a")]);
        tree.open_edit_form(CommentId(1)).unwrap();
        tree.set_draft(CommentId(1), String::from("<b>")).unwrap();
        tree.submit_form(CommentId(1)).unwrap();

        let refused = Error::Api(api::Error::Unauthorized);
        assert!(tree.apply_edit(CommentId(1), Err(refused)).is_err());
        assert_eq!(tree.get(CommentId(1)).unwrap().comment().content, "a");
        assert!(!tree.get(CommentId(1)).unwrap().form().unwrap().pending);

        tree.submit_form(CommentId(1)).unwrap();
        let edited = CommentEdited {
            content: String::from("&lt;b&gt;"),
            comment_id: Some(CommentId(1)),
        };
        tree.apply_edit(CommentId(1), Ok(edited)).unwrap();
        let node = tree.get(CommentId(1)).unwrap();
        assert_eq!(node.comment().content, "&lt;b&gt;");
        assert_eq!(node.form(), None);
    }

    #[test]
    fn random_operations_keep_tree_consistent() {
        bolero::check!()
            .with_type::<Vec<(u8, u8)>>()
            .for_each(|ops: &Vec<(u8, u8)>| {
                let mut tree = CommentTree::new();
                let mut next_id = 0;
                for (op, target) in ops {
                    let ids = tree.walk().map(|(_, n)| n.id()).collect::<Vec<_>>();
                    let target = match ids.is_empty() {
                        true => None,
                        false => Some(ids[*target as usize % ids.len()]),
                    };
                    next_id += 1;
                    match (op % 4, target) {
                        (0, _) | (_, None) => {
                            tree.insert_top(comment(next_id, None, "top")).unwrap();
                            assert_eq!(tree.roots()[0], CommentId(next_id));
                        }
                        (1, Some(t)) => {
                            let parent_depth = tree.depth(t).unwrap();
                            let reply = comment(next_id, None, "reply");
                            let depth = tree.insert_reply(t, reply).unwrap();
                            assert_eq!(depth, parent_depth + 1);
                            let last = tree.get(t).unwrap().children().last();
                            assert_eq!(last, Some(&CommentId(next_id)));
                        }
                        (2, Some(t)) => {
                            tree.set_content(t, format!("edit {next_id}")).unwrap();
                        }
                        (_, Some(t)) => {
                            let len = tree.len();
                            let removed = tree.remove(t).unwrap();
                            assert_eq!(tree.len(), len - removed.len());
                            for r in removed {
                                assert!(!tree.contains(r));
                            }
                        }
                    }
                    check_invariants(&tree);
                }
            });
    }
}
