use std::cell::Cell;

use log::debug;
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub fn from_hidden(hidden: bool) -> Self {
        if hidden {
            Visibility::Hidden
        } else {
            Visibility::Visible
        }
    }
}

thread_local! {
    static PAGE_VISIBILITY: Cell<Visibility> = Cell::new(Visibility::Visible);
}

pub fn current() -> Visibility {
    PAGE_VISIBILITY.with(|v| v.get())
}

pub fn set(visibility: Visibility) {
    PAGE_VISIBILITY.with(|v| v.set(visibility));
}

fn read_document() -> Option<Visibility> {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| Visibility::from_hidden(d.hidden()))
}

/// Keeps the page visibility state in sync for as long as the calling
/// component is mounted. Mount initialises it, unmount resets it.
#[hook]
pub fn use_visibility_tracking() {
    use_mount(|| {
        if let Some(visibility) = read_document() {
            set(visibility);
        }
    });

    use_event_with_window("visibilitychange", |_: Event| {
        if let Some(visibility) = read_document() {
            debug!("Page visibility changed to {:?}", visibility);
            set(visibility);
        }
    });

    use_unmount(|| set(Visibility::Visible));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_visible_and_tracks_updates() {
        assert_eq!(current(), Visibility::Visible);
        set(Visibility::Hidden);
        assert_eq!(current(), Visibility::Hidden);
        set(Visibility::from_hidden(false));
        assert_eq!(current(), Visibility::Visible);
    }
}
