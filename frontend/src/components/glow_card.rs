use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::dom;

/// Pointer position relative to the card's top-left corner.
pub fn pointer_offset(client_x: i32, client_y: i32, left: f64, top: f64) -> (f64, f64) {
    (f64::from(client_x) - left, f64::from(client_y) - top)
}

#[derive(Properties, PartialEq)]
pub struct GlowCardProps {
    #[prop_or_default]
    pub class: Classes,
    /// Feed the pointer position into `--mouse-x`/`--mouse-y` for the radial glow.
    #[prop_or_default]
    pub track_pointer: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(GlowCard)]
pub fn glow_card(props: &GlowCardProps) -> Html {
    let card_ref = use_node_ref();

    let onmousemove = {
        let card_ref = card_ref.clone();
        let track_pointer = props.track_pointer;
        Callback::from(move |e: MouseEvent| {
            if !track_pointer {
                return;
            }
            if let Some(card) = card_ref.cast::<HtmlElement>() {
                let rect = card.get_bounding_client_rect();
                let (x, y) = pointer_offset(e.client_x(), e.client_y(), rect.left(), rect.top());
                dom::set_style(&card, "--mouse-x", &format!("{}px", x));
                dom::set_style(&card, "--mouse-y", &format!("{}px", y));
            }
        })
    };

    let glow = |opacity: &'static str| {
        let card_ref = card_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(card) = card_ref.cast::<HtmlElement>() {
                dom::set_style(&card, "--glow-opacity", opacity);
            }
        })
    };

    html! {
        <div
            ref={card_ref.clone()}
            class={props.class.clone()}
            {onmousemove}
            onmouseenter={glow("1")}
            onmouseleave={glow("0")}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_relative_to_card() {
        assert_eq!(pointer_offset(150, 320, 100.0, 300.0), (50.0, 20.0));
        assert_eq!(pointer_offset(90, 300, 100.5, 300.0), (-10.5, 0.0));
    }
}
