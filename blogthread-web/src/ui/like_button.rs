use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct LikeButtonProps {
    pub liked: bool,
    pub count: u64,
    pub pending: bool,
    pub on_click: Callback<()>,
}

#[function_component(LikeButton)]
pub fn like_button(p: &LikeButtonProps) -> Html {
    let state_class = match p.liked {
        true => "btn-success",
        false => "btn-outline-success",
    };
    html! {
        <div class="mb-3 d-flex align-items-center">
            <button
                id="like-btn"
                type="button"
                class={ classes!("btn", state_class) }
                aria-pressed={ if p.liked { "true" } else { "false" } }
                disabled={ p.pending }
                onclick={ p.on_click.reform(|_| ()) }
            >
                { "Like" }
            </button>
            <span id="like-count" class="ms-2">{ p.count }</span>
        </div>
    }
}
