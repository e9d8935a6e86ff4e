use egui::{pos2, CursorIcon, Id, PointerButton, Rect, Rounding, Sense, Ui, Vec2};

/// Extra grab area on the resizable side of the painted line.
/// The flexible pane's right edge (usually its scrollbar) is left alone.
const HIT_MARGIN: f32 = 3.0;
/// Painted line width when hovered or dragging
const EXPANDED_LINE_WIDTH: f32 = 3.0;

/// Thin vertical handle between the two panes.
///
/// Holds no state of its own: the owner passes `active` in and is told about
/// drag starts through the callback given to [`Divider::show`].
pub struct Divider {
    active: bool,
}

impl Divider {
    pub fn new(active: bool) -> Self {
        Self { active }
    }

    /// Paint the divider into `rect` and report a primary-button drag start
    /// with the pointer's x position.
    pub fn show(
        self,
        ui: &mut Ui,
        id: Id,
        rect: Rect,
        on_drag_start: impl FnOnce(f32),
    ) -> egui::Response {
        let hit_rect = Rect::from_min_max(rect.min, pos2(rect.max.x + HIT_MARGIN, rect.max.y));
        let resp = ui.interact(hit_rect, id, Sense::drag());

        let hovered = resp.hovered();
        let visuals = ui.visuals();
        let color = if self.active {
            visuals.selection.bg_fill
        } else if hovered {
            visuals.widgets.hovered.bg_stroke.color
        } else {
            visuals.widgets.noninteractive.bg_stroke.color
        };

        let line_width = if self.active || hovered {
            EXPANDED_LINE_WIDTH
        } else {
            rect.width()
        };
        let line_rect = Rect::from_center_size(rect.center(), Vec2::new(line_width, rect.height()));
        ui.painter().rect_filled(line_rect, Rounding::ZERO, color);

        if hovered {
            ui.ctx().set_cursor_icon(CursorIcon::ResizeColumn);
        }

        if resp.drag_started_by(PointerButton::Primary) {
            if let Some(pos) = resp.interact_pointer_pos() {
                on_drag_start(pos.x);
            }
        }

        resp
    }
}
