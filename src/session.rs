use log::{debug, trace, warn};

use crate::drag_indicator::{DragIndicator, IndicatorGuard};

/// Smallest width the resizable pane may take
pub const MIN_WIDTH: f32 = 200.0;
/// Largest width the resizable pane may take
pub const MAX_WIDTH: f32 = 600.0;
/// Width of the resizable pane when nothing else is configured
pub const DEFAULT_RIGHT_WIDTH: f32 = 304.0;

/// Inclusive range the tracked width is clamped into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthBounds {
    pub min: f32,
    pub max: f32,
}

impl Default for WidthBounds {
    fn default() -> Self {
        Self {
            min: MIN_WIDTH,
            max: MAX_WIDTH,
        }
    }
}

impl WidthBounds {
    pub fn new(min: f32, max: f32) -> Result<Self, String> {
        if !min.is_finite() || !max.is_finite() {
            return Err(format!("Width bounds must be finite (got {}..={})", min, max));
        }
        if min < 0.0 {
            return Err(format!("Minimum width must not be negative (got {})", min));
        }
        if min > max {
            return Err(format!(
                "Minimum width {} is larger than maximum width {}",
                min, max
            ));
        }
        Ok(Self { min, max })
    }

    pub fn clamp(&self, width: f32) -> f32 {
        width.clamp(self.min, self.max)
    }
}

/// Why a drag ended without a pointer release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// The window lost focus mid-drag, so the release may never arrive
    FocusLost,
}

/// Anchors captured at drag start, plus the indicator held for the drag's lifetime
struct ActiveDrag<I: DragIndicator> {
    anchor_pointer_x: f32,
    anchor_width: f32,
    indicator: IndicatorGuard<I>,
}

enum DragState<I: DragIndicator> {
    Idle,
    Dragging(ActiveDrag<I>),
}

/// Tracks the width of the resizable pane and the drag lifecycle that edits it.
///
/// Idle -> Dragging on [`pointer_down`](Self::pointer_down), back to Idle on
/// [`pointer_up`](Self::pointer_up) or [`cancel`](Self::cancel). Moves only
/// apply while dragging:
/// `width = clamp(anchor_width + (anchor_x - pointer_x))`, so dragging left
/// widens a right-hand pane.
pub struct ResizeSession<I: DragIndicator + Clone> {
    tracked_width: f32,
    bounds: WidthBounds,
    indicator: I,
    state: DragState<I>,
}

impl<I: DragIndicator + Clone> ResizeSession<I> {
    pub fn new(initial_width: f32, bounds: WidthBounds, indicator: I) -> Self {
        let requested = if initial_width.is_finite() {
            initial_width
        } else {
            warn!(
                "Initial width {} is not a number, using default {}",
                initial_width, DEFAULT_RIGHT_WIDTH
            );
            DEFAULT_RIGHT_WIDTH
        };

        let tracked_width = bounds.clamp(requested);
        if tracked_width != requested {
            warn!(
                "Initial width {} outside {}..={}, clamped to {}",
                requested, bounds.min, bounds.max, tracked_width
            );
        }

        Self {
            tracked_width,
            bounds,
            indicator,
            state: DragState::Idle,
        }
    }

    pub fn tracked_width(&self) -> f32 {
        self.tracked_width
    }

    pub fn bounds(&self) -> WidthBounds {
        self.bounds
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// `(anchor_pointer_x, anchor_width)` of the live drag, if any
    pub fn anchor(&self) -> Option<(f32, f32)> {
        match &self.state {
            DragState::Dragging(drag) => Some((drag.anchor_pointer_x, drag.anchor_width)),
            DragState::Idle => None,
        }
    }

    /// Start a drag at pointer position `x`. Ignored if a drag is already live.
    pub fn pointer_down(&mut self, x: f32) -> bool {
        if self.is_active() {
            trace!("Ignoring pointer down at {}: drag already active", x);
            return false;
        }

        debug!("Resize started at x={} width={}", x, self.tracked_width);
        self.state = DragState::Dragging(ActiveDrag {
            anchor_pointer_x: x,
            anchor_width: self.tracked_width,
            indicator: IndicatorGuard::acquire(self.indicator.clone()),
        });
        true
    }

    /// Apply a pointer move. Returns whether the tracked width changed.
    pub fn pointer_move(&mut self, x: f32) -> bool {
        let DragState::Dragging(drag) = &self.state else {
            return false;
        };

        let delta = drag.anchor_pointer_x - x;
        let width = self.bounds.clamp(drag.anchor_width + delta);
        if width == self.tracked_width {
            return false;
        }

        trace!("Resize move x={} delta={} width={}", x, delta, width);
        self.tracked_width = width;
        true
    }

    /// End the drag normally. Returns whether a drag was active.
    pub fn pointer_up(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.state = DragState::Idle;
        debug!("Resize finished at width={}", self.tracked_width);
        true
    }

    /// Force the drag to end without a release. Returns whether a drag was active.
    pub fn cancel(&mut self, reason: CancelReason) -> bool {
        if !self.is_active() {
            return false;
        }
        self.state = DragState::Idle;
        debug!(
            "Resize cancelled ({:?}) at width={}",
            reason, self.tracked_width
        );
        true
    }

    /// Re-apply the live drag's global indicator for this frame
    pub fn refresh_indicator(&self) {
        if let DragState::Dragging(drag) = &self.state {
            drag.indicator.refresh();
        }
    }
}
