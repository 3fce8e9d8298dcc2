use blogthread_client::{
    api::{CsrfToken, PostId},
    HttpTransport,
};

mod dom;
mod ui;

lazy_static::lazy_static! {
    static ref CLIENT: reqwest::Client = reqwest::Client::new();
}

/// What the hosting page tells us about itself
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    /// Origin the page was served from, requests go there
    pub host: String,
    pub post: PostId,
    pub csrf: CsrfToken,
}

impl PageConfig {
    pub fn transport(&self) -> HttpTransport {
        HttpTransport::new(CLIENT.clone(), self.host.clone(), self.csrf.clone())
    }
}

fn main() {
    tracing_wasm::set_as_global_default();

    let page = match dom::read_page() {
        Ok(page) => page,
        Err(err) => {
            tracing::error!(?err, "not starting comment thread");
            return;
        }
    };
    tracing::info!(
        post = ?page.config.post,
        num_comments = page.tree.len(),
        "starting comment thread"
    );
    yew::Renderer::<ui::App>::with_root_and_props(
        page.root,
        ui::AppProps {
            config: page.config,
            tree: page.tree,
            like: page.like,
        },
    )
    .render();
}
