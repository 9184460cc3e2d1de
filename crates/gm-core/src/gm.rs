//! The game master: owns every manager and resolves turns.
//!
//! Turn resolution is delegated to a [`TurnResolver`]. The resolver receives
//! the request and a mutable [`Table`] holding every manager, so a rules layer
//! can classify the action, roll checks, mutate records, log world events, and
//! produce narration. The default [`PlaceholderResolver`] does none of this and
//! only echoes the action back.

use gm_dice::DiceManager;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::character::CharacterManager;
use crate::config::GmConfig;
use crate::error::GmResult;
use crate::inventory::InventoryManager;
use crate::lore::LoreManager;
use crate::progression::ProgressionManager;
use crate::world::WorldStateManager;

/// One action a character attempts on their turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRequest {
    /// Free-text description of the action.
    pub action: String,
    /// The acting character.
    pub character_id: String,
}

impl TurnRequest {
    /// Create a request.
    pub fn new(action: impl Into<String>, character_id: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            character_id: character_id.into(),
        }
    }
}

/// Every manager a turn may read or change.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Character records.
    pub characters: CharacterManager,
    /// Dice and skill checks.
    pub dice: DiceManager,
    /// Character inventories.
    pub inventory: InventoryManager,
    /// XP and levels.
    pub progression: ProgressionManager,
    /// Lore entries.
    pub lore: LoreManager,
    /// World state and event log.
    pub world: WorldStateManager,
}

impl Table {
    /// Empty managers with dice seeded as configured.
    pub fn new(config: &GmConfig) -> Self {
        Self {
            dice: DiceManager::from_seed(config.seed),
            ..Self::default()
        }
    }
}

/// Turns an action into state changes and narration.
pub trait TurnResolver {
    /// Resolve `request` against `table`, returning the narration.
    fn resolve(&self, request: &TurnRequest, table: &mut Table) -> GmResult<String>;
}

impl<F> TurnResolver for F
where
    F: Fn(&TurnRequest, &mut Table) -> GmResult<String>,
{
    fn resolve(&self, request: &TurnRequest, table: &mut Table) -> GmResult<String> {
        self(request, table)
    }
}

/// Echoes the action without consulting dice, inventory, progression, lore,
/// or world state.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderResolver;

impl TurnResolver for PlaceholderResolver {
    fn resolve(&self, request: &TurnRequest, table: &mut Table) -> GmResult<String> {
        let party = table.characters.describe_party();
        tracing::debug!(party_size = party.len(), "placeholder turn");
        Ok(format!(
            "Action '{}' performed by {}.",
            request.action, request.character_id
        ))
    }
}

/// Coordinates the managers for one game session.
pub struct GameMaster {
    session_id: Uuid,
    config: GmConfig,
    table: Table,
    resolver: Box<dyn TurnResolver + Send>,
}

impl std::fmt::Debug for GameMaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameMaster")
            .field("session_id", &self.session_id)
            .field("config", &self.config)
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

impl Default for GameMaster {
    fn default() -> Self {
        Self::new(GmConfig::default())
    }
}

impl GameMaster {
    /// Create a game master with empty managers and the placeholder resolver.
    pub fn new(config: GmConfig) -> Self {
        let session_id = Uuid::new_v4();
        tracing::info!(session = %session_id, seed = ?config.seed, "game master session started");
        Self {
            session_id,
            table: Table::new(&config),
            config,
            resolver: Box::new(PlaceholderResolver),
        }
    }

    /// Replace the turn resolver.
    pub fn with_resolver(mut self, resolver: impl TurnResolver + Send + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Unique ID of this session.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// The configuration this game master was built with.
    pub fn config(&self) -> &GmConfig {
        &self.config
    }

    /// Resolve one action by `character_id` and return the narration.
    pub fn perform_action(&mut self, action: &str, character_id: &str) -> GmResult<String> {
        let request = TurnRequest::new(action, character_id);
        tracing::info!(
            session = %self.session_id,
            character = character_id,
            action,
            "resolving turn"
        );
        self.resolver.resolve(&request, &mut self.table)
    }

    /// All managers.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// All managers, mutably.
    pub fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    /// Character records.
    pub fn characters(&self) -> &CharacterManager {
        &self.table.characters
    }

    /// Character records, mutably.
    pub fn characters_mut(&mut self) -> &mut CharacterManager {
        &mut self.table.characters
    }

    /// The dice manager. Rolling needs `&mut` since it advances the RNG.
    pub fn dice_mut(&mut self) -> &mut DiceManager {
        &mut self.table.dice
    }

    /// Inventories.
    pub fn inventory(&self) -> &InventoryManager {
        &self.table.inventory
    }

    /// Inventories, mutably.
    pub fn inventory_mut(&mut self) -> &mut InventoryManager {
        &mut self.table.inventory
    }

    /// XP and levels.
    pub fn progression(&self) -> &ProgressionManager {
        &self.table.progression
    }

    /// XP and levels, mutably.
    pub fn progression_mut(&mut self) -> &mut ProgressionManager {
        &mut self.table.progression
    }

    /// Lore entries.
    pub fn lore(&self) -> &LoreManager {
        &self.table.lore
    }

    /// Lore entries, mutably.
    pub fn lore_mut(&mut self) -> &mut LoreManager {
        &mut self.table.lore
    }

    /// World state and event log.
    pub fn world(&self) -> &WorldStateManager {
        &self.table.world
    }

    /// World state and event log, mutably.
    pub fn world_mut(&mut self) -> &mut WorldStateManager {
        &mut self.table.world
    }
}
