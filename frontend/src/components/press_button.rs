use web_sys::MouseEvent;
use yew::prelude::*;

pub fn press_transform(pressed: bool) -> &'static str {
    if pressed {
        "transform: scale(0.98);"
    } else {
        "transform: scale(1);"
    }
}

/// Inline style plus the mouse handlers that drive it. Spread onto any
/// clickable element that should sink slightly while held.
#[derive(Clone, PartialEq)]
pub struct Press {
    pub style: &'static str,
    pub onmousedown: Callback<MouseEvent>,
    pub onmouseup: Callback<MouseEvent>,
}

#[hook]
pub fn use_press() -> Press {
    let pressed = use_state(|| false);

    let set = |value: bool| {
        let pressed = pressed.clone();
        Callback::from(move |_: MouseEvent| pressed.set(value))
    };

    Press {
        style: press_transform(*pressed),
        onmousedown: set(true),
        onmouseup: set(false),
    }
}

#[derive(Properties, PartialEq)]
pub struct PressButtonProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PressButton)]
pub fn press_button(props: &PressButtonProps) -> Html {
    let press = use_press();

    html! {
        <button
            class={props.class.clone()}
            style={press.style}
            onmousedown={press.onmousedown}
            onmouseup={press.onmouseup}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressed_buttons_shrink() {
        assert_eq!(press_transform(true), "transform: scale(0.98);");
        assert_eq!(press_transform(false), "transform: scale(1);");
    }

    #[test]
    fn release_restores_full_size() {
        let released = press_transform(false);
        assert_ne!(press_transform(true), released);
        assert!(released.ends_with("scale(1);"));
    }
}
