use clap::Parser;
use eframe::egui;
use log::{error, info};
use std::path::PathBuf;

mod config;
mod demo;
mod divider;
mod drag_indicator;
mod layout;
mod session;
mod splitter;

use config::Config;
use demo::{EditorPane, PlaylistPane};
use drag_indicator::EguiDragIndicator;
use session::ResizeSession;
use splitter::ResizableLayout;

/// Two-pane editor layout with a draggable divider
#[derive(Parser, Debug)]
#[command(name = "split-pane", version, about)]
struct Args {
    /// Initial width of the right-hand pane in points (overrides config)
    #[arg(long, value_name = "PX")]
    right_width: Option<f32>,

    /// Load configuration from this file instead of ~/.config/split-pane/config.yaml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write an example config file and exit
    #[arg(long)]
    init_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

struct SplitPaneApp {
    session: ResizeSession<EguiDragIndicator>,
    editor: EditorPane,
    playlist: PlaylistPane,
}

impl SplitPaneApp {
    fn new(cc: &eframe::CreationContext<'_>, config: &Config, right_width: Option<f32>) -> Self {
        let initial_width = right_width.unwrap_or(config.layout.initial_right_width);
        let bounds = config.layout.bounds();
        info!(
            "Right pane starts at {} (bounds {}..={})",
            initial_width, bounds.min, bounds.max
        );

        Self {
            session: ResizeSession::new(
                initial_width,
                bounds,
                EguiDragIndicator::new(cc.egui_ctx.clone()),
            ),
            editor: EditorPane::new(),
            playlist: PlaylistPane::new(),
        }
    }
}

impl eframe::App for SplitPaneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Right pane: {:.0}px", self.session.tracked_width()));
                let bounds = self.session.bounds();
                ui.label(
                    egui::RichText::new(format!("({:.0}-{:.0})", bounds.min, bounds.max))
                        .small()
                        .color(egui::Color32::GRAY),
                );
                if let Some((_, anchor_width)) = self.session.anchor() {
                    ui.separator();
                    ui.label(format!("Resizing from {:.0}px", anchor_width));
                }
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(ctx.style().visuals.panel_fill))
            .show(ctx, |ui| {
                let editor = &mut self.editor;
                let playlist = &mut self.playlist;
                ResizableLayout::new("main_split", &mut self.session).show(ui, |left, right| {
                    egui::Frame::none()
                        .inner_margin(8.0)
                        .show(left, |ui| editor.show(ui));
                    egui::Frame::none()
                        .inner_margin(8.0)
                        .show(right, |ui| playlist.show(ui));
                });
            });
    }
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    info!("Split Pane starting...");

    if args.init_config {
        match Config::create_example() {
            Ok(path) => println!("Wrote example config to {}", path.display()),
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => match Config::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        },
        None => Config::load(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    let right_width = args.right_width;
    eframe::run_native(
        "split-pane",
        native_options,
        Box::new(move |cc| Ok(Box::new(SplitPaneApp::new(cc, &config, right_width)))),
    )
}
