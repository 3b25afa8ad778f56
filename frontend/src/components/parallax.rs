use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::SiteConfig;

pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
    scroll_y * factor
}

/// Decorative particle layer in the hero that drifts slower than the page.
#[function_component(Particles)]
pub fn particles() -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let (_, scroll_y) = use_window_scroll();
    let style = format!(
        "transform: translateY({}px);",
        parallax_offset(scroll_y, config.parallax_factor)
    );

    html! {
        <div class="animated-particles" {style} aria-hidden="true">
            { for (0..12).map(|i| html! { <span class={classes!("particle", format!("particle-{}", i))}></span> }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_scales_with_scroll() {
        assert_eq!(parallax_offset(0.0, 0.3), 0.0);
        assert_eq!(parallax_offset(1000.0, 0.3), 300.0);
        assert_eq!(parallax_offset(200.0, 0.0), 0.0);
    }
}
