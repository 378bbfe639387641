//! Statistics Controller
//!
//! Favourite counts by category and by municipality.

use super::Access;
use crate::egui_app::api::ApiClient;
use crate::egui_app::session::Session;
use crate::shared::models::StatEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub by_category: Vec<StatEntry>,
    pub by_municipality: Vec<StatEntry>,
}

impl Statistics {
    /// Largest count in `entries`, used to scale the bars. Never zero.
    pub fn scale(entries: &[StatEntry]) -> u64 {
        entries.iter().map(|e| e.count).max().unwrap_or(0).max(1)
    }
}

pub type StatisticsState = Access<Statistics>;

#[derive(Debug, Clone, PartialEq)]
pub enum StatisticsEvent {
    Mounted(Session),
    CategoryStatsLoaded(Vec<StatEntry>),
    MunicipalityStatsLoaded(Vec<StatEntry>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticsCommand {
    LoadCategoryStats,
    LoadMunicipalityStats,
}

impl StatisticsCommand {
    pub fn requires_auth(&self) -> bool {
        true
    }
}

pub fn reduce(
    state: StatisticsState,
    event: StatisticsEvent,
) -> (StatisticsState, Vec<StatisticsCommand>) {
    match (state, event) {
        (_, StatisticsEvent::Mounted(session)) => {
            if !session.is_authenticated() {
                return (Access::Anonymous, vec![]);
            }
            (
                Access::Authenticated(Statistics::default()),
                vec![
                    StatisticsCommand::LoadCategoryStats,
                    StatisticsCommand::LoadMunicipalityStats,
                ],
            )
        }
        (Access::Authenticated(mut stats), StatisticsEvent::CategoryStatsLoaded(entries)) => {
            stats.by_category = entries;
            (Access::Authenticated(stats), vec![])
        }
        (Access::Authenticated(mut stats), StatisticsEvent::MunicipalityStatsLoaded(entries)) => {
            stats.by_municipality = entries;
            (Access::Authenticated(stats), vec![])
        }
        (Access::Anonymous, _) => (Access::Anonymous, vec![]),
    }
}

pub async fn execute(command: StatisticsCommand, api: &ApiClient) -> Option<StatisticsEvent> {
    match command {
        StatisticsCommand::LoadCategoryStats => {
            let entries = api.category_stats().await.unwrap_or_else(|err| {
                tracing::warn!("category statistics unavailable: {}", err);
                Vec::new()
            });
            Some(StatisticsEvent::CategoryStatsLoaded(entries))
        }
        StatisticsCommand::LoadMunicipalityStats => {
            let entries = api.municipality_stats().await.unwrap_or_else(|err| {
                tracing::warn!("municipality statistics unavailable: {}", err);
                Vec::new()
            });
            Some(StatisticsEvent::MunicipalityStatsLoaded(entries))
        }
    }
}
