use std::fmt;

use log::{debug, warn};
use web_sys::Element;
use yew::NodeRef;

use crate::config::StatsConfig;
use crate::error::StatError;
use crate::ticker;

/// Raw `data-target` value that implies a percentage when no unit is declared.
const PERCENT_TARGET: &str = "100";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Suffix {
    Percent,
    Plus,
}

impl Suffix {
    pub fn from_unit(unit: &str) -> Result<Self, StatError> {
        match unit.trim() {
            "%" => Ok(Suffix::Percent),
            "+" => Ok(Suffix::Plus),
            other => Err(StatError::UnknownUnit(other.to_string())),
        }
    }

    fn for_raw_target(raw: &str) -> Self {
        if raw == PERCENT_TARGET {
            Suffix::Percent
        } else {
            Suffix::Plus
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Suffix::Percent => "%",
            Suffix::Plus => "+",
        }
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatTarget {
    pub value: u32,
    pub suffix: Suffix,
}

impl StatTarget {
    /// Parses a stat's declared `data-target` and optional `data-unit`. An
    /// explicit unit wins over the raw-value rule.
    pub fn parse(raw: Option<&str>, unit: Option<&str>) -> Result<Self, StatError> {
        let raw = raw.ok_or(StatError::MissingTarget)?;
        let value = raw
            .trim()
            .parse::<u32>()
            .map_err(|_| StatError::InvalidTarget(raw.to_string()))?;
        let suffix = match unit {
            Some(unit) => Suffix::from_unit(unit)?,
            None => Suffix::for_raw_target(raw),
        };
        Ok(Self { value, suffix })
    }

    pub fn from_element(element: &Element) -> Result<Self, StatError> {
        Self::parse(
            element.get_attribute("data-target").as_deref(),
            element.get_attribute("data-unit").as_deref(),
        )
    }

    pub fn render(&self, shown: u32) -> String {
        format!("{}{}", shown, self.suffix)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RampState {
    Idle,
    Ramping,
    Settled,
}

/// The displayed value of one stat as it climbs from 0 to its target in a
/// fixed number of steps.
#[derive(Clone, Debug)]
pub struct Ramp {
    target: StatTarget,
    increment: f64,
    current: f64,
    state: RampState,
}

impl Ramp {
    pub fn new(target: StatTarget, steps: u32) -> Self {
        Self {
            target,
            increment: f64::from(target.value) / f64::from(steps.max(1)),
            current: 0.0,
            state: RampState::Idle,
        }
    }

    pub fn state(&self) -> RampState {
        self.state
    }

    pub fn start(&mut self) {
        if self.state == RampState::Idle {
            self.state = RampState::Ramping;
        }
    }

    /// Advances one tick and returns the text to display. Returns `None` when
    /// not ramping, so a settled ramp never touches its node again.
    pub fn tick(&mut self) -> Option<String> {
        if self.state != RampState::Ramping {
            return None;
        }
        self.current += self.increment;
        let target = f64::from(self.target.value);
        if self.current >= target {
            self.state = RampState::Settled;
            Some(self.target.render(self.target.value))
        } else {
            Some(self.target.render(self.current.floor() as u32))
        }
    }
}

/// Handle to one stat number node and its declared target.
pub struct StatNode {
    pub node: NodeRef,
    pub target: StatTarget,
}

impl StatNode {
    /// Reads the target declared on the rendered node. Nodes that are not
    /// mounted or declare a bad target are skipped with a warning.
    pub fn from_ref(node: NodeRef) -> Option<Self> {
        let element = node.cast::<Element>()?;
        match StatTarget::from_element(&element) {
            Ok(target) => Some(Self { node, target }),
            Err(e) => {
                warn!("Skipping stat counter: {}", e);
                None
            }
        }
    }
}

pub struct CounterAnimator {
    tick_interval_ms: u32,
    steps: u32,
}

impl CounterAnimator {
    pub fn new(config: &StatsConfig) -> Self {
        Self {
            tick_interval_ms: config.tick_interval_ms,
            steps: config.steps,
        }
    }

    /// Starts an independent ramp for every stat. Each ramp runs to completion
    /// and clears its own timer. Returns how many ramps were started.
    pub fn animate(&self, stats: &[StatNode]) -> usize {
        let mut started = 0;
        for stat in stats {
            let Some(element) = stat.node.cast::<Element>() else {
                continue;
            };
            let mut ramp = Ramp::new(stat.target, self.steps);
            ramp.start();
            ticker::repeat_until(self.tick_interval_ms, move || {
                if let Some(text) = ramp.tick() {
                    element.set_text_content(Some(&text));
                }
                ramp.state() == RampState::Settled
            });
            started += 1;
        }
        debug!("Started {} stat counters", started);
        started
    }
}
