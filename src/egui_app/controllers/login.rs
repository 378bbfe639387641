//! Login Controller
//!
//! ```text
//! Anonymous ──submit──▶ Authenticating ──2xx──▶ Authenticated ──logout──▶ Anonymous
//!                              │
//!                              └──non-2xx──▶ Error (still anonymous)
//! ```
//!
//! Signup is a login preceded by `POST /user`; a rejected signup ends in the
//! same error state and is not retried. After a successful login the profile
//! is fetched and cached in the background.

use crate::egui_app::api::ApiClient;
use crate::egui_app::session::{Session, SessionStore};
use crate::shared::error::{ApiError, StorageError};
use crate::shared::models::{Credentials, User};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated,
    /// Credentials rejected. The user is still anonymous.
    Error,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginState {
    pub phase: LoginPhase,
    pub username: String,
    pub password: String,
    /// Profile known for the logged-in user, if any.
    pub user: Option<User>,
}

impl LoginState {
    pub fn is_logged_in(&self) -> bool {
        self.phase == LoginPhase::Authenticated
    }

    /// Inline "invalid credentials" flag.
    pub fn invalid_credentials(&self) -> bool {
        self.phase == LoginPhase::Error
    }

    pub fn is_busy(&self) -> bool {
        self.phase == LoginPhase::Authenticating
    }

    fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginEvent {
    Mounted(Session),
    UsernameChanged(String),
    PasswordChanged(String),
    LoginRequested,
    SignupRequested,
    /// Token received and stored.
    Authenticated,
    Rejected,
    ProfileCached(User),
    LoggedOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginCommand {
    Authenticate(Credentials),
    Signup(Credentials),
    FetchProfile,
}

impl LoginCommand {
    pub fn requires_auth(&self) -> bool {
        matches!(self, LoginCommand::FetchProfile)
    }
}

pub fn reduce(mut state: LoginState, event: LoginEvent) -> (LoginState, Vec<LoginCommand>) {
    match event {
        LoginEvent::Mounted(session) => {
            state.phase = if session.is_authenticated() {
                LoginPhase::Authenticated
            } else {
                LoginPhase::Anonymous
            };
            state.user = session.user;
            (state, vec![])
        }
        LoginEvent::UsernameChanged(username) => {
            state.username = username;
            clear_error(&mut state);
            (state, vec![])
        }
        LoginEvent::PasswordChanged(password) => {
            state.password = password;
            clear_error(&mut state);
            (state, vec![])
        }
        LoginEvent::LoginRequested | LoginEvent::SignupRequested
            if matches!(
                state.phase,
                LoginPhase::Authenticating | LoginPhase::Authenticated
            ) =>
        {
            (state, vec![])
        }
        LoginEvent::LoginRequested => {
            state.phase = LoginPhase::Authenticating;
            let command = LoginCommand::Authenticate(state.credentials());
            (state, vec![command])
        }
        LoginEvent::SignupRequested => {
            state.phase = LoginPhase::Authenticating;
            let command = LoginCommand::Signup(state.credentials());
            (state, vec![command])
        }
        LoginEvent::Authenticated => {
            state.phase = LoginPhase::Authenticated;
            state.password.clear();
            (state, vec![LoginCommand::FetchProfile])
        }
        LoginEvent::Rejected => {
            state.phase = LoginPhase::Error;
            (state, vec![])
        }
        LoginEvent::ProfileCached(user) => {
            state.user = Some(user);
            (state, vec![])
        }
        LoginEvent::LoggedOut => (LoginState::default(), vec![]),
    }
}

fn clear_error(state: &mut LoginState) {
    if state.phase == LoginPhase::Error {
        state.phase = LoginPhase::Anonymous;
    }
}

/// Clear the session and return to anonymous, synchronously.
pub fn logout(state: LoginState, session: &SessionStore) -> Result<LoginState, StorageError> {
    session.clear_session()?;
    let (state, _) = reduce(state, LoginEvent::LoggedOut);
    Ok(state)
}

pub async fn execute(command: LoginCommand, api: &ApiClient) -> Option<LoginEvent> {
    match command {
        LoginCommand::Authenticate(credentials) => authenticate(api, &credentials).await,
        LoginCommand::Signup(credentials) => match api.signup(&credentials).await {
            Ok(()) => {
                tracing::info!("account created for {}", credentials.username);
                authenticate(api, &credentials).await
            }
            Err(err) => {
                tracing::warn!("signup rejected: {}", err);
                Some(LoginEvent::Rejected)
            }
        },
        LoginCommand::FetchProfile => match fetch_profile(api).await {
            Ok(user) => Some(LoginEvent::ProfileCached(user)),
            Err(err) => {
                tracing::warn!("cannot cache user profile: {}", err);
                None
            }
        },
    }
}

/// `POST /token`, then store the token unless the session was cleared while
/// the request was in flight. A login overtaken by a logout yields no event.
async fn authenticate(api: &ApiClient, credentials: &Credentials) -> Option<LoginEvent> {
    let epoch = api.session().epoch();
    let token = match api.login(credentials).await {
        Ok(token) => token,
        Err(err) => {
            tracing::warn!("login rejected: {}", err);
            return Some(LoginEvent::Rejected);
        }
    };

    match api.session().set_token_since(epoch, &token.access_token) {
        Ok(true) => {
            tracing::info!("logged in as {}", credentials.username);
            Some(LoginEvent::Authenticated)
        }
        Ok(false) => {
            tracing::info!("session cleared while logging in as {}; token dropped", credentials.username);
            None
        }
        Err(err) => {
            tracing::error!("cannot store session token: {}", err);
            Some(LoginEvent::Rejected)
        }
    }
}

/// `GET /user` with the stored token, then cache the answer.
pub async fn fetch_profile(api: &ApiClient) -> Result<User, ApiError> {
    let user = api.current_user().await?;
    if let Err(err) = api.session().set_cached_user(&user) {
        tracing::warn!("cannot cache user profile: {}", err);
    }
    Ok(user)
}
