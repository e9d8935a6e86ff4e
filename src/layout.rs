// Horizontal sizing of the flexible pane | divider | resizable pane row

/// Space the divider occupies while idle
pub const DIVIDER_IDLE_WIDTH: f32 = 1.0;
/// Space reserved for the divider while a resize is live (matches its widened line)
pub const DIVIDER_ACTIVE_WIDTH: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneWidths {
    pub flexible: f32,
    pub divider: f32,
    pub resizable: f32,
}

impl PaneWidths {
    /// The resizable pane always gets `tracked_width`; the flexible pane takes
    /// what is left after the divider, never going below zero.
    pub fn compute(container_width: f32, tracked_width: f32, active: bool) -> Self {
        let divider = if active {
            DIVIDER_ACTIVE_WIDTH
        } else {
            DIVIDER_IDLE_WIDTH
        };

        Self {
            flexible: (container_width - tracked_width - divider).max(0.0),
            divider,
            resizable: tracked_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_reserves_one_pixel() {
        let widths = PaneWidths::compute(1000.0, 304.0, false);
        assert_eq!(widths.flexible, 695.0);
        assert_eq!(widths.divider, 1.0);
        assert_eq!(widths.resizable, 304.0);
    }

    #[test]
    fn test_dragging_reserves_three_pixels() {
        let widths = PaneWidths::compute(1000.0, 304.0, true);
        assert_eq!(widths.flexible, 693.0);
        assert_eq!(widths.divider, 3.0);
        assert_eq!(widths.resizable, 304.0);
    }

    #[test]
    fn test_narrow_container_keeps_resizable_width() {
        let widths = PaneWidths::compute(250.0, 304.0, false);
        assert_eq!(widths.flexible, 0.0);
        assert_eq!(widths.resizable, 304.0);
    }
}
