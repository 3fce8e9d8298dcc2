use anyhow::{anyhow, Context};
use blogthread_client::{
    api::{Comment, CommentId, CsrfToken, PostId},
    CommentTree, LikeState, Prompt,
};
use wasm_bindgen::JsCast;

use crate::PageConfig;

pub const ROOT_ID: &str = "comment-thread";

pub struct Page {
    pub root: web_sys::Element,
    pub config: PageConfig,
    pub tree: CommentTree,
    pub like: Option<LikeState>,
}

/// Browser `alert` and `confirm` dialogs
pub struct BrowserPrompt;

impl Prompt for BrowserPrompt {
    fn alert(&self, msg: &str) {
        if let Some(w) = web_sys::window() {
            let _ = w.alert_with_message(msg);
        }
    }

    fn confirm(&self, msg: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(msg).ok())
            .unwrap_or(false)
    }
}

fn data_attr(elt: &web_sys::Element, name: &str) -> anyhow::Result<String> {
    elt.get_attribute(&format!("data-{name}"))
        .ok_or_else(|| anyhow!("#{ROOT_ID} has no data-{name} attribute"))
}

fn child_text(elt: &web_sys::Element, selector: &str) -> String {
    elt.query_selector(&format!(":scope > {selector}"))
        .ok()
        .flatten()
        .and_then(|e| e.text_content())
        .map(|t| String::from(t.trim()))
        .unwrap_or_default()
}

fn elements(list: web_sys::NodeList) -> Vec<web_sys::Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Reads server-rendered `<li>` items, appending them in display order
fn read_items(list: &web_sys::Element, parent: Option<CommentId>, out: &mut Vec<Comment>) {
    let items = match list.query_selector_all(":scope > li") {
        Ok(items) => elements(items),
        Err(_) => return,
    };
    for li in items {
        let id = match li.get_attribute("data-id").and_then(|id| id.parse().ok()) {
            Some(id) => CommentId(id),
            None => {
                tracing::warn!("skipping comment item without a numeric data-id");
                continue;
            }
        };
        out.push(Comment {
            id,
            author: child_text(&li, "strong"),
            content: child_text(&li, ".comment-content"),
            created_at: child_text(&li, "small"),
            parent_id: parent,
        });
        if let Ok(Some(replies)) = li.query_selector(":scope > ul.list-group") {
            read_items(&replies, Some(id), out);
        }
    }
}

fn read_like(root: &web_sys::Element) -> Option<LikeState> {
    let count = root.get_attribute("data-like-count")?.parse().ok()?;
    let liked = root.get_attribute("data-liked").as_deref() == Some("true");
    Some(LikeState { liked, count })
}

/// Reads the thread root, its configuration and the initial comments, then
/// empties the root so that it can be rendered into
pub fn read_page() -> anyhow::Result<Page> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;
    let root = document
        .get_element_by_id(ROOT_ID)
        .ok_or_else(|| anyhow!("page has no #{ROOT_ID} element"))?;

    let post = data_attr(&root, "post-id")?
        .parse()
        .context("parsing data-post-id")?;
    let csrf = data_attr(&root, "csrf")?;
    let host = window
        .location()
        .origin()
        .map_err(|e| anyhow!("reading window origin: {e:?}"))?;

    let mut comments = Vec::new();
    if let Ok(Some(list)) = root.query_selector("#comment-list") {
        read_items(&list, None, &mut comments);
    }
    let like = read_like(&root);
    root.set_inner_html("");

    Ok(Page {
        config: PageConfig {
            host,
            post: PostId(post),
            csrf: CsrfToken(csrf),
        },
        tree: CommentTree::from_comments(comments),
        like,
        root,
    })
}
