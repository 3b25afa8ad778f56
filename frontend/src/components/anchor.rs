use web_sys::MouseEvent;
use yew::prelude::*;

use crate::dom;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    /// Fired after the scroll starts, e.g. to close the mobile menu.
    #[prop_or_default]
    pub on_navigate: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link that scrolls smoothly instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dom::smooth_scroll_to(&href);
            on_navigate.emit(());
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} style={props.style.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
