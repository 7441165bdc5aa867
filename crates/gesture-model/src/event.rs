//! Pointer event types.
//!
//! Mouse and touch input share one event shape. A touch event carries the
//! current touch list and the touches that changed in this event; a mouse
//! event carries only its own cursor position.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Monotonic timestamp in nanoseconds. Informational only: recognition
/// never looks at time.
pub type TimestampNs = u64;

/// A single point in surface-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Input device family that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Lifecycle phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// The element an event was dispatched on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventTarget {
    /// Whether the target is a hyperlink.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub anchor: bool,

    /// The target's class attribute, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl EventTarget {
    pub fn anchor() -> Self {
        Self {
            anchor: true,
            class_name: None,
        }
    }

    pub fn with_class(class_name: impl Into<String>) -> Self {
        Self {
            anchor: false,
            class_name: Some(class_name.into()),
        }
    }

    /// Whether the host's default action must be left alone for this
    /// target: links, and anything whose class contains `marker`.
    pub fn is_default_exempt(&self, marker: &str) -> bool {
        self.anchor
            || self
                .class_name
                .as_deref()
                .is_some_and(|class| class.contains(marker))
    }
}

/// A raw pointer event as delivered by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    #[serde(rename = "t", default)]
    pub timestamp_ns: TimestampNs,

    pub phase: PointerPhase,

    pub pointer: PointerKind,

    /// The event's own position (cursor position for mouse input).
    pub x: f64,
    pub y: f64,

    /// Touch points currently on the surface.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub touches: Vec<Coordinate>,

    /// Touch points that changed in this event.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changed_touches: Vec<Coordinate>,

    #[serde(default)]
    pub target: EventTarget,
}

impl PointerEvent {
    /// Create a mouse event at the cursor position.
    pub fn mouse(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self {
            timestamp_ns: 0,
            phase,
            pointer: PointerKind::Mouse,
            x,
            y,
            touches: Vec::new(),
            changed_touches: Vec::new(),
            target: EventTarget::default(),
        }
    }

    /// Create a single-finger touch event.
    ///
    /// The point is reported as changed; it is also listed as a current
    /// touch unless the finger is lifting (end/cancel).
    pub fn touch(phase: PointerPhase, x: f64, y: f64) -> Self {
        let point = Coordinate::new(x, y);
        let touches = match phase {
            PointerPhase::End | PointerPhase::Cancel => Vec::new(),
            _ => vec![point],
        };
        Self {
            timestamp_ns: 0,
            phase,
            pointer: PointerKind::Touch,
            x: 0.0,
            y: 0.0,
            touches,
            changed_touches: vec![point],
            target: EventTarget::default(),
        }
    }

    pub fn at(mut self, timestamp_ns: TimestampNs) -> Self {
        self.timestamp_ns = timestamp_ns;
        self
    }

    pub fn on(mut self, target: EventTarget) -> Self {
        self.target = target;
        self
    }

    /// Position of the event: the first changed touch, else the first
    /// current touch, else the event's own position.
    pub fn coordinates(&self) -> Coordinate {
        self.changed_touches
            .first()
            .or_else(|| self.touches.first())
            .copied()
            .unwrap_or(Coordinate::new(self.x, self.y))
    }

    /// Host listener name this event arrives under, if any.
    pub fn listener_name(&self) -> Option<EventName> {
        EventName::for_input(self.pointer, self.phase)
    }
}

/// Host listener names for pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventName {
    MouseDown,
    MouseMove,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
}

impl EventName {
    /// Listener name for a device/phase pair. Mouse input has no cancel.
    pub fn for_input(kind: PointerKind, phase: PointerPhase) -> Option<Self> {
        match (kind, phase) {
            (PointerKind::Mouse, PointerPhase::Start) => Some(Self::MouseDown),
            (PointerKind::Mouse, PointerPhase::Move) => Some(Self::MouseMove),
            (PointerKind::Mouse, PointerPhase::End) => Some(Self::MouseUp),
            (PointerKind::Mouse, PointerPhase::Cancel) => None,
            (PointerKind::Touch, PointerPhase::Start) => Some(Self::TouchStart),
            (PointerKind::Touch, PointerPhase::Move) => Some(Self::TouchMove),
            (PointerKind::Touch, PointerPhase::End) => Some(Self::TouchEnd),
            (PointerKind::Touch, PointerPhase::Cancel) => Some(Self::TouchCancel),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::MouseMove => "mousemove",
            Self::MouseUp => "mouseup",
            Self::TouchStart => "touchstart",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
            Self::TouchCancel => "touchcancel",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of pointer device families a binding listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerTypes {
    pub mouse: bool,
    pub touch: bool,
}

impl Default for PointerTypes {
    fn default() -> Self {
        Self::ALL
    }
}

impl PointerTypes {
    pub const NONE: Self = Self {
        mouse: false,
        touch: false,
    };

    pub const ALL: Self = Self {
        mouse: true,
        touch: true,
    };

    pub const TOUCH_ONLY: Self = Self {
        mouse: false,
        touch: true,
    };

    pub const MOUSE_ONLY: Self = Self {
        mouse: true,
        touch: false,
    };

    pub fn accepts(self, kind: PointerKind) -> bool {
        match kind {
            PointerKind::Mouse => self.mouse,
            PointerKind::Touch => self.touch,
        }
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            mouse: self.mouse || other.mouse,
            touch: self.touch || other.touch,
        }
    }

    /// Listener names needed for one phase.
    pub fn listener_names(self, phase: PointerPhase) -> Vec<EventName> {
        [PointerKind::Mouse, PointerKind::Touch]
            .into_iter()
            .filter(|kind| self.accepts(*kind))
            .filter_map(|kind| EventName::for_input(kind, phase))
            .collect()
    }

    /// Listener names needed across all phases.
    pub fn all_listener_names(self) -> Vec<EventName> {
        [
            PointerPhase::Start,
            PointerPhase::Move,
            PointerPhase::End,
            PointerPhase::Cancel,
        ]
        .into_iter()
        .flat_map(|phase| self.listener_names(phase))
        .collect()
    }
}
