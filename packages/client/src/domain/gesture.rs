//! Swipe-to-reply gesture.
//!
//! A threshold classifier over horizontal pointer displacement: a drag that
//! ends more than [`SWIPE_TRIGGER_PX`] to the right of where it started
//! selects the message as reply target. Anything shorter resets silently.

/// Rightward displacement a drag must exceed to trigger a reply
pub const SWIPE_TRIGGER_PX: f64 = 60.0;

/// Largest visual offset applied to the dragged message
pub const SWIPE_MAX_OFFSET_PX: f64 = 120.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum SwipeGesture {
    #[default]
    Idle,
    Dragging {
        start_x: f64,
        displacement: f64,
    },
}

impl SwipeGesture {
    /// Pointer or touch went down at `x`.
    pub fn start(&mut self, x: f64) {
        *self = Self::Dragging {
            start_x: x,
            displacement: 0.0,
        };
    }

    /// Pointer moved to `x`. Returns the visual offset to apply, which is
    /// zero for leftward drags and capped at [`SWIPE_MAX_OFFSET_PX`].
    pub fn update(&mut self, x: f64) -> f64 {
        match self {
            Self::Idle => 0.0,
            Self::Dragging {
                start_x,
                displacement,
            } => {
                *displacement = x - *start_x;
                (*displacement).clamp(0.0, SWIPE_MAX_OFFSET_PX)
            }
        }
    }

    /// Pointer released. Returns whether the drag triggers a reply; the
    /// gesture is reset either way.
    pub fn finish(&mut self) -> bool {
        let triggered = match *self {
            Self::Idle => false,
            Self::Dragging { displacement, .. } => displacement > SWIPE_TRIGGER_PX,
        };
        *self = Self::Idle;
        triggered
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
