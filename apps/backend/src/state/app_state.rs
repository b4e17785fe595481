use std::sync::Arc;

use crate::adapters::{PlayerRepoMem, RoomRepoMem};
use crate::config::standard_rules;
use crate::domain::RuleConfig;
use crate::repos::{PlayerRepo, RoomRepo};
use crate::services::{PlayerService, RoomService, ScoringService};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub rooms: Arc<dyn RoomRepo>,
    pub players: Arc<dyn PlayerRepo>,
    /// Rules for rooms and scoring requests that bring none
    pub default_rules: RuleConfig,
}

impl AppState {
    /// Create a new AppState over the given repositories
    pub fn new(
        rooms: Arc<dyn RoomRepo>,
        players: Arc<dyn PlayerRepo>,
        default_rules: RuleConfig,
    ) -> Self {
        Self {
            rooms,
            players,
            default_rules,
        }
    }

    /// Create a new AppState backed by empty in-memory stores
    pub fn in_memory(default_rules: RuleConfig) -> Self {
        Self::new(
            Arc::new(RoomRepoMem::new()),
            Arc::new(PlayerRepoMem::new()),
            default_rules,
        )
    }

    /// In-memory state with the standard rule presets
    pub fn for_tests() -> Self {
        Self::in_memory(standard_rules())
    }

    pub fn room_service(&self) -> RoomService {
        RoomService::new(
            Arc::clone(&self.rooms),
            Arc::clone(&self.players),
            self.default_rules.clone(),
        )
    }

    pub fn player_service(&self) -> PlayerService {
        PlayerService::new(Arc::clone(&self.players), Arc::clone(&self.rooms))
    }

    pub fn scoring_service(&self) -> ScoringService {
        ScoringService::new()
    }
}
