// Two-pane row with a draggable divider: flexible pane | divider | resizable pane.
// Built on egui primitives because SidePanel::resizable() sizes from the panel
// edge and doesn't give us the anchored, clamped behaviour we want.

use std::hash::Hash;

use egui::{Id, Layout, Pos2, Rect, Sense, Ui, UiBuilder, Vec2};
use log::trace;

use crate::divider::Divider;
use crate::drag_indicator::DragIndicator;
use crate::layout::PaneWidths;
use crate::session::{CancelReason, ResizeSession};

/// Pointer state sampled from the whole window once per frame
#[derive(Debug, Clone, Copy)]
struct PointerSample {
    x: Option<f32>,
    released: bool,
    primary_down: bool,
    focused: bool,
}

/// Lays out two content slots with a divider between them.
///
/// The width of the right-hand slot lives in the borrowed [`ResizeSession`],
/// which the caller owns across frames.
pub struct ResizableLayout<'a, I: DragIndicator + Clone> {
    id: Id,
    session: &'a mut ResizeSession<I>,
}

impl<'a, I: DragIndicator + Clone> ResizableLayout<'a, I> {
    pub fn new(id_source: impl Hash, session: &'a mut ResizeSession<I>) -> Self {
        Self {
            id: Id::new(id_source),
            session,
        }
    }

    /// Show the layout and fill it with content.
    /// The callback receives the flexible (left) and resizable (right) UIs.
    pub fn show(self, ui: &mut Ui, add_contents: impl FnOnce(&mut Ui, &mut Ui)) {
        let session = self.session;

        // Global pointer tracking only happens while a drag is live
        if session.is_active() {
            let sample = ui.input(|i| PointerSample {
                x: i.pointer.latest_pos().map(|p| p.x),
                released: i.pointer.primary_released(),
                primary_down: i.pointer.primary_down(),
                focused: i.focused,
            });
            Self::track_pointer(session, sample);
        }

        let whole = ui.available_rect_before_wrap();
        let widths = PaneWidths::compute(whole.width(), session.tracked_width(), session.is_active());

        let flexible_rect = Rect::from_min_size(whole.min, Vec2::new(widths.flexible, whole.height()));
        let divider_rect = Rect::from_min_size(
            Pos2::new(flexible_rect.max.x, whole.min.y),
            Vec2::new(widths.divider, whole.height()),
        );
        let resizable_rect = Rect::from_min_size(
            Pos2::new(divider_rect.max.x, whole.min.y),
            Vec2::new(widths.resizable, whole.height()),
        );

        let mut ui_flexible =
            ui.new_child(UiBuilder::new().max_rect(flexible_rect).layout(Layout::default()));
        ui_flexible.set_clip_rect(flexible_rect.intersect(ui.clip_rect()));
        let mut ui_resizable =
            ui.new_child(UiBuilder::new().max_rect(resizable_rect).layout(Layout::default()));
        ui_resizable.set_clip_rect(resizable_rect.intersect(ui.clip_rect()));

        add_contents(&mut ui_flexible, &mut ui_resizable);

        // Registered after the panes so the divider wins hit-testing at the edges
        Divider::new(session.is_active()).show(ui, self.id.with("divider"), divider_rect, |x| {
            session.pointer_down(x);
        });

        if session.is_active() {
            session.refresh_indicator();
            ui.ctx().request_repaint();
        }

        ui.allocate_rect(whole, Sense::hover());
    }

    fn track_pointer(session: &mut ResizeSession<I>, sample: PointerSample) {
        if !sample.focused {
            session.cancel(CancelReason::FocusLost);
            return;
        }

        if let Some(x) = sample.x {
            if session.pointer_move(x) {
                trace!("Resizable pane width now {}", session.tracked_width());
            }
        }

        if sample.released || !sample.primary_down {
            session.pointer_up();
        }
    }
}
