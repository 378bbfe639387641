//! Profile Controller
//!
//! Live categories start from the cached user. Saving new categories
//! replaces both the live list and the cached user's categories with the
//! server's answer; nothing changes locally until that answer arrives.

use super::Access;
use crate::egui_app::api::ApiClient;
use crate::egui_app::session::Session;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub email: String,
    pub categories: Vec<String>,
    /// Categories picked but not yet saved.
    pub new_categories: Vec<String>,
    pub all_categories: Vec<String>,
    pub saving: bool,
}

pub type ProfileState = Access<Profile>;

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileEvent {
    Mounted(Session),
    AllCategoriesLoaded(Vec<String>),
    CategoryPicked(String),
    Cleared,
    SaveRequested,
    /// Every category the user follows after the save.
    CategoriesSaved(Vec<String>),
    SaveFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileCommand {
    LoadCategories,
    AddCategories(Vec<String>),
}

impl ProfileCommand {
    pub fn requires_auth(&self) -> bool {
        matches!(self, ProfileCommand::AddCategories(_))
    }
}

pub fn reduce(state: ProfileState, event: ProfileEvent) -> (ProfileState, Vec<ProfileCommand>) {
    let (mut profile, event) = match (state, event) {
        (_, ProfileEvent::Mounted(session)) => return mount(session),
        (Access::Anonymous, _) => return (Access::Anonymous, vec![]),
        (Access::Authenticated(profile), event) => (profile, event),
    };

    let commands = match event {
        ProfileEvent::AllCategoriesLoaded(categories) => {
            profile.all_categories = categories;
            vec![]
        }
        ProfileEvent::CategoryPicked(category) => {
            if !profile.new_categories.contains(&category) {
                profile.new_categories.push(category);
            }
            vec![]
        }
        ProfileEvent::Cleared => {
            profile.new_categories.clear();
            vec![]
        }
        ProfileEvent::SaveRequested
            if profile.saving || profile.new_categories.is_empty() =>
        {
            vec![]
        }
        ProfileEvent::SaveRequested => {
            profile.saving = true;
            vec![ProfileCommand::AddCategories(profile.new_categories.clone())]
        }
        ProfileEvent::CategoriesSaved(categories) => {
            profile.categories = categories;
            profile.new_categories.clear();
            profile.saving = false;
            vec![]
        }
        ProfileEvent::SaveFailed => {
            profile.saving = false;
            vec![]
        }
        // Handled above.
        ProfileEvent::Mounted(_) => vec![],
    };
    (Access::Authenticated(profile), commands)
}

fn mount(session: Session) -> (ProfileState, Vec<ProfileCommand>) {
    if !session.is_authenticated() {
        return (Access::Anonymous, vec![]);
    }
    let user = session.user.unwrap_or_default();
    let profile = Profile {
        email: user.email,
        categories: user.categories,
        ..Profile::default()
    };
    (
        Access::Authenticated(profile),
        vec![ProfileCommand::LoadCategories],
    )
}

pub async fn execute(command: ProfileCommand, api: &ApiClient) -> Option<ProfileEvent> {
    match command {
        ProfileCommand::LoadCategories => {
            let categories = api.categories().await.unwrap_or_else(|err| {
                tracing::warn!("categories unavailable: {}", err);
                Vec::new()
            });
            Some(ProfileEvent::AllCategoriesLoaded(categories))
        }
        ProfileCommand::AddCategories(categories) => {
            match api.add_user_categories(&categories).await {
                Ok(categories) => {
                    tracing::info!("now following {} categories", categories.len());
                    cache_categories(api, &categories);
                    Some(ProfileEvent::CategoriesSaved(categories))
                }
                Err(err) => {
                    tracing::warn!("categories not saved: {}", err);
                    Some(ProfileEvent::SaveFailed)
                }
            }
        }
    }
}

/// Replace the cached user's categories, keeping the cached email.
fn cache_categories(api: &ApiClient, categories: &[String]) {
    let session = api.session();
    let Some(mut user) = session.get_cached_user() else {
        tracing::debug!("no cached user to update");
        return;
    };
    user.categories = categories.to_vec();
    if let Err(err) = session.set_cached_user(&user) {
        tracing::warn!("cannot cache user profile: {}", err);
    }
}
