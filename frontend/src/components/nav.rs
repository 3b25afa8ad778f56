use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::press_button::use_press;
use crate::config::SiteConfig;
use crate::dom::{self, SectionBounds};

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#services", "Services"),
    ("#why", "Why Us"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

const ACTIVE_LINK_STYLE: &str = "color: var(--neon-cyan); text-shadow: 0 0 10px var(--neon-cyan);";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

pub enum MenuAction {
    Toggle,
    Close,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
        };
        if open == self.open {
            self
        } else {
            Rc::new(Self { open })
        }
    }
}

/// Id of the section under the marker line `offset` px below the top of the
/// viewport. Later sections win if several contain it.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    let marker = scroll_y + offset;
    sections
        .iter()
        .rev()
        .find(|s| !s.id.is_empty() && s.contains(marker))
        .map(|s| s.id.as_str())
}

/// The section to highlight next, or `None` to leave the current highlight
/// alone. Past the last section (the footer) the previous link stays lit.
pub fn highlight_change(current: Option<&str>, found: Option<&str>) -> Option<String> {
    match found {
        Some(id) if current != Some(id) => Some(id.to_string()),
        _ => None,
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let menu = use_reducer(MenuState::default);
    let active = use_state(|| None::<String>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |offset| {
                let offset = *offset;
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let window_clone = window.clone();
                    let mut last: Option<String> = None;
                    let mut update = move || {
                        let scroll_y = window_clone.scroll_y().unwrap_or_default();
                        let sections = dom::section_bounds();
                        let found = active_section(&sections, scroll_y, offset);
                        if let Some(next) = highlight_change(last.as_deref(), found) {
                            last = Some(next.clone());
                            active.set(Some(next));
                        }
                    };
                    update();

                    let callback = Closure::<dyn FnMut()>::new(update);
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            config.nav.section_offset_px,
        );
    }

    {
        let menu = menu.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu.dispatch(MenuAction::Close);
            }
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.dispatch(MenuAction::Close))
    };

    let hamburger_press = use_press();

    let on_logo = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_top();
    });

    html! {
        <nav class="navbar">
            <div class="nav-container">
                <a href="#" class="logo" onclick={on_logo}>
                    {"🔓 SocialUnlock"}
                </a>
                <ul class={classes!("nav-menu", menu.open.then_some("active"))}>
                    { for NAV_LINKS.iter().map(|(href, label)| {
                        let is_active = dom::anchor_id(href).is_some()
                            && dom::anchor_id(href) == active.as_deref();
                        html! {
                            <li>
                                <AnchorLink
                                    href={*href}
                                    class={classes!("nav-link", is_active.then_some("active"))}
                                    style={is_active.then_some(AttrValue::Static(ACTIVE_LINK_STYLE))}
                                    on_navigate={close_menu.clone()}
                                >
                                    {*label}
                                </AnchorLink>
                            </li>
                        }
                    }) }
                </ul>
                <button
                    class={classes!("hamburger", menu.open.then_some("active"))}
                    aria-label="Toggle navigation"
                    aria-expanded={menu.open.to_string()}
                    style={hamburger_press.style}
                    onmousedown={hamburger_press.onmousedown}
                    onmouseup={hamburger_press.onmouseup}
                    onclick={toggle_menu}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: MenuState, action: MenuAction) -> MenuState {
        *Rc::new(state).reduce(action)
    }

    fn sections() -> Vec<SectionBounds> {
        [("home", 0.0, 800.0), ("services", 800.0, 900.0), ("why", 1700.0, 600.0)]
            .iter()
            .map(|(id, top, height)| SectionBounds {
                id: id.to_string(),
                top: *top,
                height: *height,
            })
            .collect()
    }

    #[test]
    fn hamburger_toggles_menu() {
        let open = reduce(MenuState::default(), MenuAction::Toggle);
        assert!(open.open);
        assert!(!reduce(open, MenuAction::Toggle).open);
    }

    #[test]
    fn close_is_idempotent() {
        let closed = Rc::new(MenuState::default());
        let same = closed.clone().reduce(MenuAction::Close);
        assert!(Rc::ptr_eq(&closed, &same));
        let open = reduce(MenuState::default(), MenuAction::Toggle);
        assert!(!reduce(open, MenuAction::Close).open);
    }

    #[test]
    fn marker_line_picks_section() {
        let sections = sections();
        assert_eq!(active_section(&sections, 0.0, 100.0), Some("home"));
        assert_eq!(active_section(&sections, 699.0, 100.0), Some("home"));
        assert_eq!(active_section(&sections, 700.0, 100.0), Some("services"));
        assert_eq!(active_section(&sections, 1650.0, 100.0), Some("why"));
        assert_eq!(active_section(&sections, 2300.0, 100.0), None);
    }

    #[test]
    fn highlight_survives_scrolling_past_the_last_section() {
        let sections = sections();
        let found = active_section(&sections, 1650.0, 100.0);
        let lit = highlight_change(None, found);
        assert_eq!(lit.as_deref(), Some("why"));

        let below = active_section(&sections, 2300.0, 100.0);
        assert_eq!(highlight_change(lit.as_deref(), below), None);
        assert_eq!(highlight_change(lit.as_deref(), Some("why")), None);
        assert_eq!(
            highlight_change(lit.as_deref(), Some("services")).as_deref(),
            Some("services")
        );
    }

    #[test]
    fn sections_without_ids_are_ignored() {
        let sections = vec![SectionBounds {
            id: String::new(),
            top: 0.0,
            height: 1000.0,
        }];
        assert_eq!(active_section(&sections, 0.0, 100.0), None);
    }

    #[test]
    fn every_nav_link_is_an_anchor() {
        assert!(NAV_LINKS.iter().all(|(href, _)| dom::anchor_id(href).is_some()));
    }
}
