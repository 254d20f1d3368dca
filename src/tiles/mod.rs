//! Tile system: templates, placed instances, and the catalog.
//!
//! ## Key Types
//!
//! - `TileTemplate`: Immutable catalog definition (doors, cost, rules)
//! - `PlacedTile`: A template instance on the board (rotation, claims)
//! - `TileCatalog`: Template lookup plus the draft pool
//!
//! The `standard` module bundles a ready-made tile set.

pub mod template;
pub mod catalog;
pub mod placed;
pub mod standard;

pub use template::{
    AbilityId, ActionId, PassiveAbility, Quest, QuestId, QuestTrigger, Reward, TemplateId,
    TileAction, TileColor, TileKind, TileTemplate, VpLogic,
};
pub use catalog::{CatalogError, TileCatalog};
pub use placed::PlacedTile;
