use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;

/// Calls `step` every `interval_ms` until it returns true. The interval owns
/// itself through `handle` and is cleared on the tick that finishes.
pub fn repeat_until<F>(interval_ms: u32, mut step: F)
where
    F: FnMut() -> bool + 'static,
{
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let handle_clone = handle.clone();

    let interval = Interval::new(interval_ms, move || {
        if step() {
            let finished = handle_clone.borrow_mut().take();
            drop(finished);
        }
    });

    *handle.borrow_mut() = Some(interval);
}
