use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::fade_in::{FadeIn, FadeKind};
use crate::components::press_button::use_press;

/// At most one FAQ item is open at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

pub enum AccordionAction {
    Toggle(usize),
}

impl Accordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

impl Reducible for Accordion {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AccordionAction::Toggle(index) if self.is_open(index) => Rc::new(Self { open: None }),
            AccordionAction::Toggle(index) => Rc::new(Self { open: Some(index) }),
        }
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let press = use_press();
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("active"))}>
            <button
                class="faq-question"
                aria-expanded={props.open.to_string()}
                style={press.style}
                onmousedown={press.onmousedown}
                onmouseup={press.onmouseup}
                onclick={toggle}
            >
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

const FAQS: &[(&str, &str)] = &[
    (
        "How long does a recovery take?",
        "Most cases are resolved within 24 to 72 hours. Complex cases involving multiple platforms can take up to a week, and we keep you updated throughout.",
    ),
    (
        "Which platforms do you work with?",
        "Instagram, Facebook, TikTok, X, Snapchat and YouTube. Contact us if yours is not listed and we will tell you honestly whether we can help.",
    ),
    (
        "Is my information kept private?",
        "Always. Case details are shared only with the specialist handling them and are deleted once the case is closed.",
    ),
    (
        "What do you need from me to start?",
        "The account handle, any email or phone number that was linked to it, and a short description of what happened. Never send us passwords.",
    ),
    (
        "How do I get in touch?",
        "Message @socialunlock on Telegram. A specialist usually replies within the hour.",
    ),
];

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let accordion = use_reducer(Accordion::default);

    html! {
        <section id="faq" class="faq-section">
            <div class="container">
                <FadeIn kind={FadeKind::Title}>{"Frequently Asked Questions"}</FadeIn>
                <FadeIn kind={FadeKind::Text}>{"Everything you need to know before reaching out."}</FadeIn>
                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(index, (question, answer))| {
                        let on_toggle = {
                            let accordion = accordion.clone();
                            Callback::from(move |_: ()| accordion.dispatch(AccordionAction::Toggle(index)))
                        };
                        html! {
                            <FaqItem question={*question} open={accordion.is_open(index)} {on_toggle}>
                                <p>{*answer}</p>
                            </FaqItem>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle(state: Accordion, index: usize) -> Accordion {
        (*Rc::new(state).reduce(AccordionAction::Toggle(index))).clone()
    }

    #[test]
    fn starts_closed() {
        let accordion = Accordion::default();
        assert!((0..FAQS.len()).all(|i| !accordion.is_open(i)));
    }

    #[test]
    fn opening_one_closes_the_others() {
        let accordion = toggle(Accordion::default(), 1);
        assert!(accordion.is_open(1));
        let accordion = toggle(accordion, 3);
        assert!(accordion.is_open(3));
        assert!(!accordion.is_open(1));
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        let accordion = toggle(toggle(Accordion::default(), 2), 2);
        assert_eq!(accordion, Accordion::default());
    }
}
