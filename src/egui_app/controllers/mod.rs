//! Screen Controllers
//!
//! Every screen keeps an explicit state struct and a pure reducer
//! `(state, event) -> (state, commands)`. Commands describe network calls;
//! [`execute`] runs one and turns its outcome back into an event. Nothing in
//! a reducer touches the network or the session store.
//!
//! [`Controllers`] bundles the six screen states so that a whole flow can be
//! driven without a UI, either by [`crate::egui_app::AppState`] on a runtime
//! or sequentially with [`Controllers::settle`].

pub mod add;
pub mod favourites;
pub mod login;
pub mod profile;
pub mod search;
pub mod statistics;

use crate::egui_app::api::ApiClient;
use crate::egui_app::navigation::Screen;
use crate::egui_app::session::Session;

pub use add::{AddCommand, AddEvent, AddState};
pub use favourites::{Favourites, FavouritesCommand, FavouritesEvent, FavouritesState};
pub use login::{LoginCommand, LoginEvent, LoginPhase, LoginState};
pub use profile::{Profile, ProfileCommand, ProfileEvent, ProfileState};
pub use search::{SearchCommand, SearchEvent, SearchState};
pub use statistics::{Statistics, StatisticsCommand, StatisticsEvent, StatisticsState};

/// What a screen may show: a login prompt, or its authenticated content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Access<T> {
    #[default]
    Anonymous,
    Authenticated(T),
}

impl<T> Access<T> {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Access::Authenticated(_))
    }

    pub fn as_ref(&self) -> Access<&T> {
        match self {
            Access::Anonymous => Access::Anonymous,
            Access::Authenticated(data) => Access::Authenticated(data),
        }
    }

    pub fn authenticated(self) -> Option<T> {
        match self {
            Access::Anonymous => None,
            Access::Authenticated(data) => Some(data),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Login(LoginEvent),
    Search(SearchEvent),
    Add(AddEvent),
    Favourites(FavouritesEvent),
    Profile(ProfileEvent),
    Statistics(StatisticsEvent),
}

impl Event {
    /// The event a freshly mounted screen starts from. Home has no controller.
    pub fn mounted(screen: Screen, session: Session) -> Option<Event> {
        let event = match screen {
            Screen::Home => return None,
            Screen::Login => Event::Login(LoginEvent::Mounted(session)),
            Screen::Search => Event::Search(SearchEvent::Mounted(session)),
            Screen::Add => Event::Add(AddEvent::Mounted(session)),
            Screen::Favourites => Event::Favourites(FavouritesEvent::Mounted(session)),
            Screen::Profile => Event::Profile(ProfileEvent::Mounted(session)),
            Screen::Statistics => Event::Statistics(StatisticsEvent::Mounted(session)),
        };
        Some(event)
    }

    /// Events whose effects must land even after the screen was left.
    pub fn outlives_mount(&self) -> bool {
        matches!(self, Event::Login(LoginEvent::Authenticated))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login(LoginCommand),
    Search(SearchCommand),
    Add(AddCommand),
    Favourites(FavouritesCommand),
    Profile(ProfileCommand),
    Statistics(StatisticsCommand),
}

impl Command {
    /// Whether the call carries the bearer token.
    pub fn requires_auth(&self) -> bool {
        match self {
            Command::Login(c) => c.requires_auth(),
            Command::Search(c) => c.requires_auth(),
            Command::Add(c) => c.requires_auth(),
            Command::Favourites(c) => c.requires_auth(),
            Command::Profile(c) => c.requires_auth(),
            Command::Statistics(c) => c.requires_auth(),
        }
    }
}

/// Run one command against the API.
pub async fn execute(command: Command, api: &ApiClient) -> Option<Event> {
    match command {
        Command::Login(c) => login::execute(c, api).await.map(Event::Login),
        Command::Search(c) => search::execute(c, api).await.map(Event::Search),
        Command::Add(c) => add::execute(c, api).await.map(Event::Add),
        Command::Favourites(c) => favourites::execute(c, api).await.map(Event::Favourites),
        Command::Profile(c) => profile::execute(c, api).await.map(Event::Profile),
        Command::Statistics(c) => statistics::execute(c, api).await.map(Event::Statistics),
    }
}

fn wrap<C>(commands: Vec<C>, f: fn(C) -> Command) -> Vec<Command> {
    commands.into_iter().map(f).collect()
}

/// State of every screen controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Controllers {
    pub login: LoginState,
    pub search: SearchState,
    pub add: AddState,
    pub favourites: FavouritesState,
    pub profile: ProfileState,
    pub statistics: StatisticsState,
}

impl Controllers {
    /// Reset the screen's controller and feed it its `Mounted` event.
    pub fn mount(&mut self, screen: Screen, session: Session) -> Vec<Command> {
        match screen {
            Screen::Home => {}
            Screen::Login => self.login = LoginState::default(),
            Screen::Search => self.search = SearchState::default(),
            Screen::Add => self.add = AddState::default(),
            Screen::Favourites => self.favourites = FavouritesState::default(),
            Screen::Profile => self.profile = ProfileState::default(),
            Screen::Statistics => self.statistics = StatisticsState::default(),
        }
        match Event::mounted(screen, session) {
            Some(event) => self.dispatch(event),
            None => Vec::new(),
        }
    }

    /// Apply an event to the matching controller.
    pub fn dispatch(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::Login(e) => {
                let (state, commands) = login::reduce(std::mem::take(&mut self.login), e);
                self.login = state;
                wrap(commands, Command::Login)
            }
            Event::Search(e) => {
                let (state, commands) = search::reduce(std::mem::take(&mut self.search), e);
                self.search = state;
                wrap(commands, Command::Search)
            }
            Event::Add(e) => {
                let (state, commands) = add::reduce(std::mem::take(&mut self.add), e);
                self.add = state;
                wrap(commands, Command::Add)
            }
            Event::Favourites(e) => {
                let (state, commands) =
                    favourites::reduce(std::mem::take(&mut self.favourites), e);
                self.favourites = state;
                wrap(commands, Command::Favourites)
            }
            Event::Profile(e) => {
                let (state, commands) = profile::reduce(std::mem::take(&mut self.profile), e);
                self.profile = state;
                wrap(commands, Command::Profile)
            }
            Event::Statistics(e) => {
                let (state, commands) =
                    statistics::reduce(std::mem::take(&mut self.statistics), e);
                self.statistics = state;
                wrap(commands, Command::Statistics)
            }
        }
    }

    /// Execute commands one at a time, feeding every resulting event back,
    /// until no command is left.
    pub async fn settle(&mut self, api: &ApiClient, commands: Vec<Command>) {
        let mut pending = std::collections::VecDeque::from(commands);
        while let Some(command) = pending.pop_front() {
            if let Some(event) = execute(command, api).await {
                pending.extend(self.dispatch(event));
            }
        }
    }
}
