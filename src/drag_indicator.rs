// Global "resize in progress" affordance for the whole window.
// While a divider drag is live, text selection is suppressed everywhere and the
// resize cursor is forced, regardless of what the pointer is hovering.

use egui::{CursorIcon, Id, Theme};
use log::debug;

/// Something that can visually put the whole viewport into drag mode.
pub trait DragIndicator {
    fn engage(&self);

    /// Re-apply per-frame state (egui resets the cursor every frame)
    fn refresh(&self) {}

    fn release(&self);
}

/// Scoped acquisition of a [`DragIndicator`]. Released exactly once on drop.
pub struct IndicatorGuard<I: DragIndicator> {
    indicator: I,
}

impl<I: DragIndicator> IndicatorGuard<I> {
    pub fn acquire(indicator: I) -> Self {
        indicator.engage();
        Self { indicator }
    }

    pub fn refresh(&self) {
        self.indicator.refresh();
    }
}

impl<I: DragIndicator> Drop for IndicatorGuard<I> {
    fn drop(&mut self) {
        self.indicator.release();
    }
}

/// Interaction settings overridden while dragging, stored in egui temp memory
#[derive(Debug, Clone, Copy)]
struct SavedSelection {
    selectable_labels: bool,
    multi_widget_text_select: bool,
}

impl SavedSelection {
    fn of(style: &egui::Style) -> Self {
        Self {
            selectable_labels: style.interaction.selectable_labels,
            multi_widget_text_select: style.interaction.multi_widget_text_select,
        }
    }

    fn restore(self, style: &mut egui::Style) {
        style.interaction.selectable_labels = self.selectable_labels;
        style.interaction.multi_widget_text_select = self.multi_widget_text_select;
    }
}

/// Both themes are saved so a theme switch mid-drag still restores cleanly
#[derive(Debug, Clone, Copy)]
struct SavedStyles {
    dark: SavedSelection,
    light: SavedSelection,
}

/// Drag indicator backed by an egui context
#[derive(Clone)]
pub struct EguiDragIndicator {
    ctx: egui::Context,
}

impl EguiDragIndicator {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }

    fn saved_id() -> Id {
        Id::new("split_pane_drag_indicator_saved")
    }
}

impl DragIndicator for EguiDragIndicator {
    fn engage(&self) {
        let saved = SavedStyles {
            dark: SavedSelection::of(&self.ctx.style_of(Theme::Dark)),
            light: SavedSelection::of(&self.ctx.style_of(Theme::Light)),
        };

        self.ctx.data_mut(|d| d.insert_temp(Self::saved_id(), saved));
        self.ctx.all_styles_mut(|style| {
            style.interaction.selectable_labels = false;
            style.interaction.multi_widget_text_select = false;
        });
        self.ctx.set_cursor_icon(CursorIcon::ResizeColumn);
        debug!("Drag indicator engaged (saved {:?})", saved);
    }

    fn refresh(&self) {
        self.ctx.set_cursor_icon(CursorIcon::ResizeColumn);
    }

    fn release(&self) {
        let saved: Option<SavedStyles> = self.ctx.data_mut(|d| {
            let saved = d.get_temp(Self::saved_id());
            d.remove::<SavedStyles>(Self::saved_id());
            saved
        });

        if let Some(saved) = saved {
            self.ctx.style_mut_of(Theme::Dark, |style| saved.dark.restore(style));
            self.ctx.style_mut_of(Theme::Light, |style| saved.light.restore(style));
        }
        self.ctx.set_cursor_icon(CursorIcon::Default);
        debug!("Drag indicator released");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records engage/release calls so tests can check the guard lifecycle
    #[derive(Clone, Default)]
    pub(crate) struct RecordingIndicator {
        pub(crate) log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl RecordingIndicator {
        pub(crate) fn calls(&self) -> Vec<&'static str> {
            self.log.borrow().clone()
        }
    }

    impl DragIndicator for RecordingIndicator {
        fn engage(&self) {
            self.log.borrow_mut().push("engage");
        }

        fn refresh(&self) {
            self.log.borrow_mut().push("refresh");
        }

        fn release(&self) {
            self.log.borrow_mut().push("release");
        }
    }

    #[test]
    fn test_guard_releases_once_on_drop() {
        let indicator = RecordingIndicator::default();
        {
            let guard = IndicatorGuard::acquire(indicator.clone());
            guard.refresh();
        }
        assert_eq!(indicator.calls(), vec!["engage", "refresh", "release"]);
    }

    #[test]
    fn test_egui_indicator_suppresses_and_restores_selection() {
        let ctx = egui::Context::default();
        let before = ctx.style().interaction.selectable_labels;
        assert!(before, "egui enables selectable labels by default");

        let guard = IndicatorGuard::acquire(EguiDragIndicator::new(ctx.clone()));
        assert!(!ctx.style().interaction.selectable_labels);
        assert!(!ctx.style().interaction.multi_widget_text_select);

        drop(guard);
        assert_eq!(ctx.style().interaction.selectable_labels, before);
        assert!(ctx.style().interaction.multi_widget_text_select);
    }

    #[test]
    fn test_egui_indicator_restores_both_themes_after_theme_switch() {
        let ctx = egui::Context::default();
        ctx.set_theme(Theme::Dark);

        let guard = IndicatorGuard::acquire(EguiDragIndicator::new(ctx.clone()));
        assert!(!ctx.style_of(Theme::Dark).interaction.selectable_labels);
        assert!(!ctx.style_of(Theme::Light).interaction.selectable_labels);

        ctx.set_theme(Theme::Light);
        drop(guard);

        assert!(ctx.style_of(Theme::Dark).interaction.selectable_labels);
        assert!(ctx.style_of(Theme::Light).interaction.selectable_labels);
        assert!(ctx.style_of(Theme::Dark).interaction.multi_widget_text_select);
    }

    #[test]
    fn test_egui_indicator_release_without_engage_keeps_style() {
        let ctx = egui::Context::default();
        ctx.style_mut(|s| s.interaction.selectable_labels = false);

        EguiDragIndicator::new(ctx.clone()).release();
        assert!(!ctx.style().interaction.selectable_labels);
    }
}
