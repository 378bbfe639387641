use std::sync::mpsc::{channel, Receiver, Sender};

use eframe::egui;
use tokio::runtime::Runtime;

use crate::egui_app::api::ApiClient;
use crate::egui_app::controllers::{
    self, login, Command, Controllers, Event, LoginCommand,
};
use crate::egui_app::navigation::Screen;
use crate::egui_app::session::{Session, SessionStore};
use crate::egui_app::Config;
use crate::shared::error::StartupError;

/// An event produced by a command, tagged with the mount it belongs to.
type Tagged = (u64, Event);

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub screen: Screen,
    pub controllers: Controllers,
    /// Session as of the last mount, poll or logout. Read by the views.
    pub session: Session,
    store: SessionStore,
    api: ApiClient,
    runtime: Runtime,
    mount_id: u64,
    events_tx: Sender<Tagged>,
    events_rx: Receiver<Tagged>,
    repaint: Option<egui::Context>,
}

impl AppState {
    pub fn new(config: Config, store: SessionStore) -> Result<Self, StartupError> {
        let api = ApiClient::new(&config, store.clone())?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("rutafy-io")
            .enable_all()
            .build()?;
        let (events_tx, events_rx) = channel();

        tracing::info!("AppState initialized against {}", config.server_url());

        let mut state = Self {
            config,
            screen: Screen::Home,
            controllers: Controllers::default(),
            session: store.snapshot(),
            store,
            api,
            runtime,
            mount_id: 0,
            events_tx,
            events_rx,
            repaint: None,
        };
        state.navigate(Screen::Home);
        Ok(state)
    }

    /// Ask egui to repaint whenever a command finishes.
    pub fn set_repaint_context(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    pub fn mount_id(&self) -> u64 {
        self.mount_id
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Email of the cached user, shown in the top bar.
    pub fn user_email(&self) -> Option<&str> {
        self.session.user.as_ref().map(|u| u.email.as_str())
    }

    /// Mount `screen` with a fresh controller. Results still in flight for
    /// the previous mount will be discarded.
    pub fn navigate(&mut self, screen: Screen) {
        self.mount_id += 1;
        self.screen = screen;
        self.session = self.store.snapshot();
        tracing::debug!("mount #{} {}", self.mount_id, screen.path());

        let commands = self.controllers.mount(screen, self.session.clone());
        self.spawn(self.mount_id, commands);
    }

    pub fn navigate_to_path(&mut self, path: &str) {
        self.navigate(Screen::resolve(path));
    }

    /// Feed a UI event to its controller and start the resulting commands.
    pub fn dispatch(&mut self, event: Event) {
        let commands = self.controllers.dispatch(event);
        self.spawn(self.mount_id, commands);
    }

    /// Drain finished commands. Called once per frame.
    pub fn poll(&mut self) {
        let mut changed = false;
        while let Ok((mount_id, event)) = self.events_rx.try_recv() {
            changed = true;
            if mount_id == self.mount_id {
                self.dispatch(event);
            } else if event.outlives_mount() {
                // Keep the cached profile in step with the stored token.
                tracing::debug!("login finished after leaving the screen");
                self.spawn(mount_id, vec![Command::Login(LoginCommand::FetchProfile)]);
            } else {
                tracing::debug!("discarding stale event from mount #{}", mount_id);
            }
        }
        if changed {
            self.session = self.store.snapshot();
        }
    }

    /// Clear the session and re-mount the current screen so that
    /// authenticated-only affordances disappear at once.
    pub fn logout(&mut self) {
        let current = std::mem::take(&mut self.controllers.login);
        self.controllers.login = match login::logout(current, &self.store) {
            Ok(state) => state,
            Err(err) => {
                tracing::error!("logout failed to clear the session: {}", err);
                return;
            }
        };
        tracing::info!("logged out");
        self.navigate(self.screen);
    }

    fn spawn(&self, mount_id: u64, commands: Vec<Command>) {
        for command in commands {
            let api = self.api.clone();
            let tx = self.events_tx.clone();
            let repaint = self.repaint.clone();
            self.runtime.spawn(async move {
                if let Some(event) = controllers::execute(command, &api).await {
                    // The receiver only goes away with the app.
                    let _ = tx.send((mount_id, event));
                    if let Some(ctx) = repaint {
                        ctx.request_repaint();
                    }
                }
            });
        }
    }
}
