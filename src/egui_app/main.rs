/**
 * Rutafy - Main Entry Point
 *
 * Native desktop client for the touristic routes API. It implements
 * eframe::App, mounts one screen at a time and drains finished network
 * calls once per frame.
 */
use eframe::egui;
use rutafy::egui_app::session::{FileStorage, SessionStore};
use rutafy::egui_app::theme::styles;
use rutafy::egui_app::{views, AppState, Config};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rutafy=info")),
        )
        .init();

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!("ignoring configuration: {}", err);
        Config::new()
    });

    let store = match config.storage_dir() {
        Some(dir) => {
            let storage = FileStorage::in_dir(&dir);
            tracing::info!("session stored in {}", storage.path().display());
            SessionStore::new(storage)
        }
        None => {
            tracing::warn!("no data directory, session will not survive restarts");
            SessionStore::in_memory()
        }
    };

    let state = match AppState::new(config, store) {
        Ok(state) => state,
        Err(err) => {
            tracing::error!("{}", err);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([720.0, 540.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Rutafy - Touristic Routes",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(RutafyApp::new(state, &cc.egui_ctx)))
        }),
    )
}

/// Main application state
struct RutafyApp {
    state: AppState,
}

impl RutafyApp {
    fn new(mut state: AppState, ctx: &egui::Context) -> Self {
        state.set_repaint_context(ctx.clone());
        Self { state }
    }
}

impl eframe::App for RutafyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        views::render_top_bar(ctx, &mut self.state);

        views::render_main_panel(ctx, &mut self.state);
    }
}
