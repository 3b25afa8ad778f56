use std::rc::Rc;

use yew::prelude::*;

use crate::config::SiteConfig;
use crate::ticker;

/// Reveals a text one character at a time.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            typed: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.typed >= self.chars.len()
    }

    /// Types one more character and returns the visible prefix.
    pub fn advance(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.typed += 1;
        Some(self.chars[..self.typed].iter().collect())
    }
}

#[derive(Properties, PartialEq)]
pub struct TypingTitleProps {
    pub text: AttrValue,
}

/// Hero title that types itself out once on mount.
#[function_component(TypingTitle)]
pub fn typing_title(props: &TypingTitleProps) -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let enabled = config.typing.enabled;
    let shown = use_state(|| {
        if enabled {
            String::new()
        } else {
            props.text.to_string()
        }
    });

    {
        let shown = shown.clone();
        let text = props.text.clone();
        let interval_ms = config.typing.char_interval_ms;
        use_effect_with_deps(
            move |_| {
                if enabled {
                    let mut writer = Typewriter::new(&text);
                    ticker::repeat_until(interval_ms, move || {
                        if let Some(prefix) = writer.advance() {
                            shown.set(prefix);
                        }
                        writer.is_done()
                    });
                }
                || ()
            },
            (),
        );
    }

    html! {
        <h1 class="hero-title" aria-label={props.text.clone()}>{(*shown).clone()}</h1>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_one_character_per_step() {
        let mut writer = Typewriter::new("Unlock");
        let frames: Vec<String> = std::iter::from_fn(|| writer.advance()).collect();
        assert_eq!(frames, vec!["U", "Un", "Unl", "Unlo", "Unloc", "Unlock"]);
        assert!(writer.is_done());
        assert_eq!(writer.advance(), None);
    }

    #[test]
    fn multibyte_characters_are_whole() {
        let mut writer = Typewriter::new("🔓ok");
        assert_eq!(writer.advance().as_deref(), Some("🔓"));
        assert_eq!(writer.advance().as_deref(), Some("🔓o"));
    }

    #[test]
    fn empty_text_is_already_done() {
        let mut writer = Typewriter::new("");
        assert!(writer.is_done());
        assert_eq!(writer.advance(), None);
    }
}
