use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{GridConfig, SiteConfig};
use crate::visibility::{self, Visibility};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

/// Everything needed to paint one frame of the background grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridFrame {
    pub stroke: String,
    pub lines: Vec<Line>,
}

pub fn stroke_alpha(time: u64, config: &GridConfig) -> f64 {
    config.base_alpha + (time as f64 * 0.005).sin() * config.alpha_swing
}

pub fn grid_frame(width: f64, height: f64, time: u64, config: &GridConfig) -> GridFrame {
    let t = time as f64;
    let vertical_sway = (t * 0.002).sin() * config.sway_px;
    let horizontal_sway = (t * 0.002).cos() * config.sway_px;
    let step = config.cell_size.max(1.0);

    let mut lines = Vec::new();
    let mut x = 0.0;
    while x < width {
        lines.push(Line {
            from: (x, 0.0),
            to: (x + vertical_sway, height),
        });
        x += step;
    }
    let mut y = 0.0;
    while y < height {
        lines.push(Line {
            from: (0.0, y),
            to: (width, y + horizontal_sway),
        });
        y += step;
    }

    GridFrame {
        stroke: format!("rgba(0, 212, 255, {})", stroke_alpha(time, config)),
        lines,
    }
}

#[allow(deprecated)]
fn paint(context: &CanvasRenderingContext2d, width: f64, height: f64, frame: &GridFrame) {
    context.clear_rect(0.0, 0.0, width, height);
    context.set_stroke_style(&JsValue::from_str(&frame.stroke));
    context.set_line_width(1.0);
    for line in &frame.lines {
        context.begin_path();
        context.move_to(line.from.0, line.from.1);
        context.line_to(line.to.0, line.to.1);
        context.stroke();
    }
}

/// A `requestAnimationFrame` loop that stops when dropped.
pub struct AnimationLoop {
    window: Window,
    frame_id: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl AnimationLoop {
    pub fn start<F>(mut on_frame: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window()?;
        let frame_id = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        {
            let next = callback.clone();
            let frame_id = frame_id.clone();
            let window = window.clone();
            *callback.borrow_mut() = Some(Closure::new(move || {
                on_frame();
                if let Some(next) = next.borrow().as_ref() {
                    frame_id.set(window.request_animation_frame(next.as_ref().unchecked_ref()).ok());
                }
            }));
        }

        if let Some(first) = callback.borrow().as_ref() {
            frame_id.set(window.request_animation_frame(first.as_ref().unchecked_ref()).ok());
        }

        Some(Self {
            window,
            frame_id,
            callback,
        })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

/// Full-viewport animated grid behind the page. Frames are skipped while the
/// page is hidden.
#[function_component(GridCanvas)]
pub fn grid_canvas() -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let canvas_ref = use_node_ref();
    let (width, height) = use_window_size();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |(width, height)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    canvas.set_width(*width);
                    canvas.set_height(*height);
                }
                || ()
            },
            (width as u32, height as u32),
        );
    }

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |grid| {
                let grid = grid.clone();
                let animation = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                    let context = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()?
                        .dyn_into::<CanvasRenderingContext2d>()
                        .ok()?;
                    let mut time: u64 = 0;
                    AnimationLoop::start(move || {
                        if visibility::current() == Visibility::Hidden {
                            return;
                        }
                        let (w, h) = (f64::from(canvas.width()), f64::from(canvas.height()));
                        paint(&context, w, h, &grid_frame(w, h, time, &grid));
                        time += 1;
                    })
                });
                move || drop(animation)
            },
            config.grid.clone(),
        );
    }

    html! {
        <canvas id="gridCanvas" class="grid-canvas" ref={canvas_ref}></canvas>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_counts_follow_cell_size() {
        let frame = grid_frame(120.0, 60.0, 0, &GridConfig::default());
        // x = 0, 50, 100 and y = 0, 50
        assert_eq!(frame.lines.len(), 5);
    }

    #[test]
    fn first_frame_has_no_vertical_sway() {
        let config = GridConfig::default();
        let frame = grid_frame(100.0, 100.0, 0, &config);
        assert_eq!(frame.lines[0], Line { from: (0.0, 0.0), to: (0.0, 100.0) });
        let horizontal = frame.lines.iter().find(|l| l.from == (0.0, 50.0)).unwrap();
        assert_eq!(horizontal.to, (100.0, 60.0));
        assert_eq!(frame.stroke, "rgba(0, 212, 255, 0.1)");
    }

    #[test]
    fn sway_stays_within_bounds() {
        let config = GridConfig::default();
        for time in [0u64, 100, 785, 1571, 5000] {
            let frame = grid_frame(200.0, 200.0, time, &config);
            for line in &frame.lines {
                let dx = (line.to.0 - line.from.0).abs();
                let dy = (line.to.1 - line.from.1).abs();
                assert!(dx <= 200.0 + config.sway_px);
                assert!(dy <= 200.0 + config.sway_px);
            }
            let alpha = stroke_alpha(time, &config);
            assert!((0.05..=0.15).contains(&alpha));
        }
    }

    #[test]
    fn empty_canvas_draws_nothing() {
        let frame = grid_frame(0.0, 0.0, 42, &GridConfig::default());
        assert!(frame.lines.is_empty());
    }
}
