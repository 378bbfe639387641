//! Navigation Shell
//!
//! Maps paths to screens. The menu order is the order of [`Screen::MENU`].

/// A screen of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Home,
    Search,
    Add,
    Favourites,
    Profile,
    Statistics,
    Login,
}

impl Screen {
    pub const MENU: [Screen; 7] = [
        Screen::Home,
        Screen::Search,
        Screen::Add,
        Screen::Favourites,
        Screen::Profile,
        Screen::Statistics,
        Screen::Login,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Screen::Home => "/",
            Screen::Search => "/search",
            Screen::Add => "/add",
            Screen::Favourites => "/favourites",
            Screen::Profile => "/profile",
            Screen::Statistics => "/stats",
            Screen::Login => "/login",
        }
    }

    /// Exact path match; a `#` prefix (hash routing) is accepted.
    pub fn from_path(path: &str) -> Option<Screen> {
        let path = path.strip_prefix('#').unwrap_or(path);
        let path = if path.is_empty() { "/" } else { path };
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        Self::MENU.into_iter().find(|s| s.path() == path)
    }

    /// Resolve a path, falling back to Home for unknown paths.
    pub fn resolve(path: &str) -> Screen {
        Self::from_path(path).unwrap_or_else(|| {
            tracing::debug!("unknown path {:?}, showing home", path);
            Screen::Home
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Search => "Search",
            Screen::Add => "Add",
            Screen::Favourites => "Favourites",
            Screen::Profile => "Profile",
            Screen::Statistics => "Statistics",
            Screen::Login => "Login",
        }
    }

    /// One-line description shown on the home cards.
    pub fn description(self) -> &'static str {
        match self {
            Screen::Home => "Start page",
            Screen::Search => "Search touristic routes according to your interests and time",
            Screen::Add => "Add a custom route to your favourites",
            Screen::Favourites => "Explore the routes that you marked as favourites",
            Screen::Profile => "Update your default search preferences",
            Screen::Statistics => "See statistics about your favourite routes",
            Screen::Login => "Create an account, log in or log out",
        }
    }

    /// Screens whose content needs a session token.
    pub fn requires_login(self) -> bool {
        matches!(
            self,
            Screen::Add | Screen::Favourites | Screen::Profile | Screen::Statistics
        )
    }
}
