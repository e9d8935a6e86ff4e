// Sample content shown in the two panes

use egui::RichText;
use egui_extras::syntax_highlighting::{self, CodeTheme};
use log::info;
use once_cell::sync::Lazy;

const SAMPLE_SOURCE: &str = r#"use std::collections::HashMap;

/// Count how often each word appears in `text`
fn word_counts(text: &str) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for word in text.split_whitespace() {
        *counts.entry(word).or_insert(0) += 1;
    }
    counts
}

fn main() {
    let counts = word_counts("the quick brown fox jumps over the lazy dog");
    println!("{:?}", counts.get("the"));
}
"#;

#[derive(Debug, Clone)]
pub struct Track {
    pub title: &'static str,
    pub artist: &'static str,
    pub duration_secs: u32,
}

static SAMPLE_TRACKS: Lazy<Vec<Track>> = Lazy::new(|| {
    vec![
        Track { title: "Harbour Lights", artist: "The Low Tides", duration_secs: 214 },
        Track { title: "Paper Satellites", artist: "Mira Vance", duration_secs: 187 },
        Track { title: "Slow Orbit", artist: "Northbound", duration_secs: 302 },
        Track { title: "Glasshouse", artist: "Ada & the Echoes", duration_secs: 241 },
        Track { title: "Night Ferry", artist: "The Low Tides", duration_secs: 268 },
        Track { title: "Copper Sky", artist: "Juniper Field", duration_secs: 199 },
        Track { title: "Static Bloom", artist: "Mira Vance", duration_secs: 223 },
        Track { title: "Last Tram Home", artist: "Northbound", duration_secs: 256 },
    ]
});

fn format_duration(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Code editor shown in the flexible pane
pub struct EditorPane {
    source: String,
    language: &'static str,
}

impl EditorPane {
    pub fn new() -> Self {
        Self {
            source: SAMPLE_SOURCE.to_string(),
            language: "rs",
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading("main.rs");
        ui.separator();

        let theme = CodeTheme::from_memory(ui.ctx(), ui.style());
        let language = self.language;
        let mut layouter = |ui: &egui::Ui, text: &str, wrap_width: f32| {
            let mut job = syntax_highlighting::highlight(ui.ctx(), ui.style(), &theme, text, language);
            job.wrap.max_width = wrap_width;
            ui.fonts(|f| f.layout_job(job))
        };

        egui::ScrollArea::both()
            .id_salt("editor_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.source)
                        .code_editor()
                        .desired_width(f32::INFINITY)
                        .desired_rows(30)
                        .layouter(&mut layouter),
                );
            });
    }
}

/// Track list shown in the resizable pane
pub struct PlaylistPane {
    selected: Option<usize>,
}

impl PlaylistPane {
    pub fn new() -> Self {
        Self { selected: None }
    }

    pub fn tracks(&self) -> &'static [Track] {
        &SAMPLE_TRACKS
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading("Playlist");
        let total: u32 = self.tracks().iter().map(|t| t.duration_secs).sum();
        ui.label(
            RichText::new(format!("{} tracks, {}", self.tracks().len(), format_duration(total)))
                .small()
                .color(egui::Color32::GRAY),
        );
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("playlist_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (idx, track) in self.tracks().iter().enumerate() {
                    let label = format!(
                        "{}  {} - {}",
                        format_duration(track.duration_secs),
                        track.title,
                        track.artist
                    );
                    if ui.selectable_label(self.selected == Some(idx), label).clicked() {
                        info!("Selected track {}: {}", idx, track.title);
                        self.selected = Some(idx);
                    }
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(187), "3:07");
        assert_eq!(format_duration(3600), "60:00");
    }

    #[test]
    fn test_playlist_starts_unselected() {
        let playlist = PlaylistPane::new();
        assert!(playlist.selected.is_none());
        assert_eq!(playlist.tracks().len(), 8);
    }
}
