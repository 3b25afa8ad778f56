use std::rc::Rc;

use yew::prelude::*;

use crate::config::{FadeInConfig, SiteConfig};
use crate::reveal::use_reveal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeKind {
    Title,
    Subtitle,
    Text,
}

impl FadeKind {
    fn tag(self) -> &'static str {
        match self {
            FadeKind::Title => "h2",
            FadeKind::Subtitle => "h3",
            FadeKind::Text => "p",
        }
    }

    fn class(self) -> &'static str {
        match self {
            FadeKind::Title => "section-title",
            FadeKind::Subtitle => "section-subtitle",
            FadeKind::Text => "section-text",
        }
    }
}

pub fn fade_style(revealed: bool, config: &FadeInConfig) -> String {
    if revealed {
        format!("opacity: 1; transform: translateY(0); transition: {};", config.transition)
    } else {
        format!(
            "opacity: 0; transform: translateY({}px); transition: {};",
            config.offset_px, config.transition
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    pub kind: FadeKind,
    #[prop_or_default]
    pub children: Children,
}

/// Heading or paragraph that slides up into place the first time it scrolls
/// into view.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), config.fade_in.reveal_options());

    html! {
        <@{props.kind.tag()}
            ref={node}
            class={props.kind.class()}
            style={fade_style(revealed, &config.fade_in)}
        >
            { for props.children.iter() }
        </@>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_revealed() {
        let config = FadeInConfig::default();
        assert_eq!(
            fade_style(false, &config),
            "opacity: 0; transform: translateY(20px); transition: opacity 0.6s ease, transform 0.6s ease;"
        );
        assert_eq!(
            fade_style(true, &config),
            "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;"
        );
    }

    #[test]
    fn kinds_map_to_section_classes() {
        assert_eq!(FadeKind::Title.class(), "section-title");
        assert_eq!(FadeKind::Subtitle.class(), "section-subtitle");
        assert_eq!(FadeKind::Text.class(), "section-text");
        assert_eq!(FadeKind::Text.tag(), "p");
    }
}
