//! Hover motion model for the preview media container.
//!
//! The preview video scales up while the pointer rests on it. This module is
//! the framework-free description of that behaviour:
//!
//! - [`HoverState`] - the two-state machine (`Resting` / `Hovered`)
//! - [`MotionSpec`] - declarative `state -> (scale, duration, easing)` table
//! - [`ScaleTween`] - a retargetable tween; interrupting it starts a new tween
//!   from the current value instead of queueing behind the old one
//! - [`HoverMachine`] - pointer events in, scale values out
//!
//! [`crate::components::PreviewMedia`] keeps a [`HoverMachine`] in a signal
//! and renders the target of its current state as a CSS transition, which
//! retargets in flight the same way.
//!
//! # Example
//!
//! ```rust
//! use vitnode_home::motion::{HoverMachine, HoverState};
//!
//! let mut machine = HoverMachine::new();
//! machine.pointer_enter(0.0);
//! machine.pointer_leave(0.2);
//!
//! assert_eq!(machine.state(), HoverState::Resting);
//! assert_eq!(machine.scale_at(0.7), 1.0);
//! ```

use std::fmt;

/// Scale of the container while no pointer is over it.
pub const RESTING_SCALE: f64 = 1.0;
/// Scale of the container while hovered.
pub const HOVERED_SCALE: f64 = 1.25;
/// Duration of both transitions, in seconds.
pub const TRANSITION_SECS: f64 = 0.5;

/// Pointer-hover state owned by a single preview container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HoverState {
    /// No pointer over the container (initial state)
    #[default]
    Resting,
    /// Pointer currently over the container
    Hovered,
}

impl HoverState {
    /// Value used for the `data-hover-state` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            HoverState::Resting => "resting",
            HoverState::Hovered => "hovered",
        }
    }

    /// Motion parameters for reaching this state.
    pub fn motion(self) -> MotionSpec {
        match self {
            HoverState::Resting => MotionSpec {
                scale: RESTING_SCALE,
                duration_secs: TRANSITION_SECS,
                easing: Easing::CircInOut,
            },
            HoverState::Hovered => MotionSpec {
                scale: HOVERED_SCALE,
                duration_secs: TRANSITION_SECS,
                easing: Easing::CircInOut,
            },
        }
    }
}

impl fmt::Display for HoverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Easing curves understood by the motion model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    /// No easing
    Linear,
    /// Circular ease-in followed by circular ease-out, symmetric around 0.5
    CircInOut,
}

impl Easing {
    /// Map linear progress `p` (clamped to `0..=1`) onto the curve.
    pub fn apply(self, p: f64) -> f64 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Easing::Linear => p,
            Easing::CircInOut => {
                if p <= 0.5 {
                    circ_in(p * 2.0) / 2.0
                } else {
                    (2.0 - circ_in((1.0 - p) * 2.0)) / 2.0
                }
            }
        }
    }

    /// CSS timing function equivalent.
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::CircInOut => "cubic-bezier(0.85, 0, 0.15, 1)",
        }
    }
}

fn circ_in(p: f64) -> f64 {
    1.0 - (1.0 - p * p).max(0.0).sqrt()
}

/// Target of one transition: where to go, how long, along which curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSpec {
    /// Target scale factor
    pub scale: f64,
    /// Transition duration in seconds
    pub duration_secs: f64,
    /// Easing curve
    pub easing: Easing,
}

impl MotionSpec {
    /// `transform` value, e.g. `scale(1.25)`.
    pub fn transform_css(&self) -> String {
        format!("scale({})", self.scale)
    }

    /// `transition` value, e.g. `transform 0.5s cubic-bezier(...)`.
    pub fn transition_css(&self) -> String {
        format!("transform {}s {}", self.duration_secs, self.easing.css())
    }

    /// Inline style combining transform and transition. The renderer adds
    /// the final `;`.
    pub fn inline_style(&self) -> String {
        format!(
            "transform: {}; transition: {}",
            self.transform_css(),
            self.transition_css()
        )
    }
}

/// A scale tween that can be retargeted while in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTween {
    from: f64,
    to: f64,
    started_at: f64,
    duration_secs: f64,
    easing: Easing,
}

impl ScaleTween {
    /// A tween already settled at `value`.
    pub fn settled(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            started_at: 0.0,
            duration_secs: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Scale the tween is heading to.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Sampled scale at time `now` (seconds).
    pub fn value_at(&self, now: f64) -> f64 {
        if self.duration_secs <= 0.0 {
            return self.to;
        }
        let p = (now - self.started_at) / self.duration_secs;
        if p >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(p)
    }

    /// Whether the tween has reached its target at `now`.
    pub fn is_settled(&self, now: f64) -> bool {
        self.duration_secs <= 0.0 || now >= self.started_at + self.duration_secs
    }

    /// Replace the in-flight target. The new tween starts from the value
    /// sampled at `now`, so the motion never jumps and never queues.
    pub fn retarget(&mut self, now: f64, spec: MotionSpec) {
        if self.to == spec.scale {
            return;
        }
        self.from = self.value_at(now);
        self.to = spec.scale;
        self.started_at = now;
        self.duration_secs = spec.duration_secs;
        self.easing = spec.easing;
    }
}

/// Pointer-driven state machine for the preview container.
///
/// Transitions: `Resting -> Hovered` on pointer-enter, `Hovered -> Resting`
/// on pointer-leave. Repeated events in the same direction are ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverMachine {
    state: HoverState,
    tween: ScaleTween,
}

impl Default for HoverMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverMachine {
    /// Machine in the initial `Resting` state, settled at [`RESTING_SCALE`].
    pub fn new() -> Self {
        Self {
            state: HoverState::Resting,
            tween: ScaleTween::settled(RESTING_SCALE),
        }
    }

    /// Current state.
    pub fn state(&self) -> HoverState {
        self.state
    }

    /// Scale the current animation is heading to.
    pub fn target_scale(&self) -> f64 {
        self.tween.target()
    }

    /// Scale at time `now`.
    pub fn scale_at(&self, now: f64) -> f64 {
        self.tween.value_at(now)
    }

    /// Whether the animation has come to rest at `now`.
    pub fn is_settled(&self, now: f64) -> bool {
        self.tween.is_settled(now)
    }

    /// Pointer entered the container.
    pub fn pointer_enter(&mut self, now: f64) {
        self.transition(now, HoverState::Hovered);
    }

    /// Pointer left the container.
    pub fn pointer_leave(&mut self, now: f64) {
        self.transition(now, HoverState::Resting);
    }

    fn transition(&mut self, now: f64, next: HoverState) {
        if self.state == next {
            return;
        }
        self.state = next;
        self.tween.retarget(now, next.motion());
    }
}
