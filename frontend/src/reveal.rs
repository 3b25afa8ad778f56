use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::ConfigError;

/// Browsers report the ratio at a crossing with some rounding, e.g. 0.4999 for
/// a 0.5 threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    threshold: f64,
    root_margin: String,
}

impl RevealOptions {
    pub fn new(threshold: f64, root_margin: impl Into<String>) -> Result<Self, ConfigError> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::ThresholdOutOfRange(threshold));
        }
        Ok(Self {
            threshold,
            root_margin: root_margin.into(),
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn root_margin(&self) -> &str {
        &self.root_margin
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            root_margin: "0px".to_string(),
        }
    }
}

/// An action that runs at most once. Armed until fired, inert afterwards.
pub struct OneShot<F> {
    action: Option<F>,
}

impl<F: FnOnce()> OneShot<F> {
    pub fn new(action: F) -> Self {
        Self {
            action: Some(action),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.action.is_some()
    }

    /// Runs the action if still armed. Returns whether it ran.
    pub fn fire(&mut self) -> bool {
        match self.action.take() {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }
}

/// Decides, from a stream of observed visible fractions, when a container has
/// been revealed.
pub struct RevealGate<F> {
    threshold: f64,
    shot: OneShot<F>,
}

impl<F: FnOnce()> RevealGate<F> {
    pub fn new(threshold: f64, on_reveal: F) -> Self {
        Self {
            threshold,
            shot: OneShot::new(on_reveal),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.shot.is_armed()
    }

    /// Returns true only for the observation that fired the reveal. A fully
    /// hidden container never reveals, however small the threshold.
    pub fn observe_ratio(&mut self, ratio: f64) -> bool {
        if ratio > 0.0 && ratio + RATIO_TOLERANCE >= self.threshold {
            self.shot.fire()
        } else {
            false
        }
    }
}

/// Live intersection observer for one container. The observer unobserves the
/// container as soon as it reveals, and is disconnected when this handle drops.
pub struct ViewportTrigger {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportTrigger {
    /// Arms a trigger on `container`. A missing container, or a browser
    /// without IntersectionObserver, yields `None` and nothing ever fires.
    pub fn observe<F>(container: Option<&Element>, options: &RevealOptions, on_reveal: F) -> Option<Self>
    where
        F: FnOnce() + 'static,
    {
        let container = container?;
        let mut gate = RevealGate::new(options.threshold(), on_reveal);

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                if !gate.is_armed() {
                    return;
                }
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let ratio = if entry.is_intersecting() {
                        entry.intersection_ratio()
                    } else {
                        0.0
                    };
                    if gate.observe_ratio(ratio) {
                        debug!("Revealed container at ratio {:.3}", ratio);
                        observer.unobserve(&entry.target());
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold()));
        init.set_root_margin(options.root_margin());

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
        observer.observe(container);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportTrigger {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Returns false until `node` has been revealed once, then true for the rest
/// of the component's life.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let trigger = ViewportTrigger::observe(
                    node.cast::<Element>().as_ref(),
                    options,
                    move || revealed.set(true),
                );
                move || drop(trigger)
            },
            (node, options),
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_gate(threshold: f64) -> (RevealGate<impl FnOnce()>, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let gate = RevealGate::new(threshold, move || counter.set(counter.get() + 1));
        (gate, calls)
    }

    #[test]
    fn one_shot_runs_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let mut shot = OneShot::new(move || counter.set(counter.get() + 1));
        assert!(shot.is_armed());
        assert!(shot.fire());
        assert!(!shot.is_armed());
        assert!(!shot.fire());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn below_threshold_stays_armed() {
        let (mut gate, calls) = counting_gate(0.5);
        assert!(!gate.observe_ratio(0.0));
        assert!(!gate.observe_ratio(0.3));
        assert!(gate.is_armed());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn crossing_fires_then_disarms() {
        let (mut gate, calls) = counting_gate(0.5);
        assert!(!gate.observe_ratio(0.2));
        assert!(gate.observe_ratio(0.6));
        assert!(!gate.is_armed());
        assert!(!gate.observe_ratio(0.0));
        assert!(!gate.observe_ratio(1.0));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn rounding_at_the_crossing_still_reveals() {
        let (mut gate, calls) = counting_gate(0.5);
        assert!(gate.observe_ratio(0.4999));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn tiny_threshold_ignores_hidden_container() {
        for threshold in [0.001, 0.0005] {
            let (mut gate, calls) = counting_gate(threshold);
            assert!(!gate.observe_ratio(0.0));
            assert!(gate.is_armed());
            assert!(gate.observe_ratio(0.0002));
            assert_eq!(calls.get(), 1);
        }
    }

    #[test]
    fn full_threshold_needs_full_visibility() {
        let (mut gate, calls) = counting_gate(1.0);
        assert!(!gate.observe_ratio(0.9));
        assert!(gate.observe_ratio(1.0));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn options_reject_out_of_range_thresholds() {
        assert!(RevealOptions::new(0.0, "0px").is_err());
        assert!(RevealOptions::new(1.01, "0px").is_err());
        assert!(RevealOptions::new(f64::NAN, "0px").is_err());
        let options = RevealOptions::new(0.1, "0px 0px -100px 0px").unwrap();
        assert_eq!(options.threshold(), 0.1);
        assert_eq!(options.root_margin(), "0px 0px -100px 0px");
    }

    #[test]
    fn missing_container_is_a_no_op() {
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let trigger =
            ViewportTrigger::observe(None, &RevealOptions::default(), move || flag.set(true));
        assert!(trigger.is_none());
        assert!(!fired.get());
    }

    proptest! {
        #[test]
        fn fires_at_most_once(
            threshold in 0.0001f64..=1.0,
            ratios in proptest::collection::vec(0.0f64..=1.0, 0..64),
        ) {
            let (mut gate, calls) = counting_gate(threshold);
            let fired = ratios.iter().filter(|r| gate.observe_ratio(**r)).count();
            prop_assert!(fired <= 1);
            prop_assert_eq!(calls.get() as usize, fired);
            let expect_fire = ratios
                .iter()
                .any(|r| *r > 0.0 && r + RATIO_TOLERANCE >= threshold);
            prop_assert_eq!(fired == 1, expect_fire);
        }
    }
}
