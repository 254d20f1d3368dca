//! Tile templates - static catalog data.
//!
//! `TileTemplate` holds the immutable properties of a tile type: doors,
//! placement cost, actions, passive abilities, quest and scoring rules.
//! Nothing here changes after authoring.
//!
//! Instance-specific data (position, rotation, claimed actions) is stored
//! separately in [`PlacedTile`](super::PlacedTile).

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::core::{Doors, Resource, Resources};

/// Unique identifier for a tile template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub u32);

impl TemplateId {
    /// Create a new template ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Template({})", self.0)
    }
}

/// Identifier of an action within its template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActionId(pub u16);

impl ActionId {
    /// Create a new action ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

/// Identifier of a passive ability within its template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AbilityId(pub u16);

/// Identifier of a quest within its template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QuestId(pub u16);

/// Colour category of a tile.
///
/// `Starter` marks the seed tile; it never scores and is never drafted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileColor {
    Starter,
    Orange,
    Green,
    Blue,
    Purple,
}

impl TileColor {
    /// Colours a drafted tile can have.
    pub fn playable() -> impl Iterator<Item = TileColor> {
        TileColor::iter().filter(|c| *c != TileColor::Starter)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TileColor::Starter => "starter",
            TileColor::Orange => "orange",
            TileColor::Green => "green",
            TileColor::Blue => "blue",
            TileColor::Purple => "purple",
        }
    }
}

impl std::fmt::Display for TileColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Broad role of a tile, for display and filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    Starter,
    #[default]
    Vp,
    Economy,
    Build,
    Social,
}

/// Resources plus flat VP granted by a passive ability or quest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reward {
    pub resources: Resources,
    pub vp: i64,
}

impl Reward {
    /// A reward of flat VP only.
    #[must_use]
    pub fn vp(vp: i64) -> Self {
        Self { resources: Resources::default(), vp }
    }

    /// A reward of one resource.
    #[must_use]
    pub fn resource(resource: Resource, amount: i64) -> Self {
        Self {
            resources: Resources::default().with(resource, amount),
            vp: 0,
        }
    }

    /// Add flat VP (builder pattern).
    #[must_use]
    pub fn with_vp(mut self, vp: i64) -> Self {
        self.vp = vp;
        self
    }

    /// Add a resource (builder pattern).
    #[must_use]
    pub fn with(mut self, resource: Resource, amount: i64) -> Self {
        self.resources = self.resources.with(resource, amount);
        self
    }
}

/// An activatable action on a tile.
///
/// Without `max_uses` the action is one-time per placed instance. With
/// `max_uses` it may be used that many times in total across every placed
/// copy of the template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileAction {
    pub id: ActionId,
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// Magnitudes subtracted when the action is used.
    #[serde(default)]
    pub cost: Resources,
    /// Deltas added when the action is used.
    #[serde(default)]
    pub effect: Resources,
    /// Flat VP granted when the action is used.
    #[serde(default)]
    pub vp: i64,
    #[serde(default)]
    pub max_uses: Option<u32>,
}

impl TileAction {
    /// Create a new one-time action with no cost or effect.
    #[must_use]
    pub fn new(id: ActionId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            description: String::new(),
            cost: Resources::default(),
            effect: Resources::default(),
            vp: 0,
            max_uses: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a cost entry.
    #[must_use]
    pub fn costs(mut self, resource: Resource, amount: i64) -> Self {
        self.cost = self.cost.with(resource, amount);
        self
    }

    /// Add an effect entry.
    #[must_use]
    pub fn gives(mut self, resource: Resource, amount: i64) -> Self {
        self.effect = self.effect.with(resource, amount);
        self
    }

    /// Grant flat VP.
    #[must_use]
    pub fn gives_vp(mut self, vp: i64) -> Self {
        self.vp = vp;
        self
    }

    /// Make the action repeatable up to `uses` times.
    #[must_use]
    pub fn repeatable(mut self, uses: u32) -> Self {
        self.max_uses = Some(uses);
        self
    }

    /// Is this a capped, repeatable action?
    #[must_use]
    pub fn is_repeatable(&self) -> bool {
        self.max_uses.is_some()
    }
}

/// Reward granted to the owning tile whenever a tile of `trigger_color` is placed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassiveAbility {
    pub id: AbilityId,
    #[serde(default)]
    pub label: String,
    pub trigger_color: TileColor,
    pub reward: Reward,
}

/// Kind of expenditure that advances a quest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestTrigger {
    SpendMoney,
    SpendReputation,
    SpendMaterials,
    SpendEnergy,
}

impl QuestTrigger {
    /// The resource whose expenditure advances this quest.
    #[must_use]
    pub const fn resource(self) -> Resource {
        match self {
            QuestTrigger::SpendMoney => Resource::Money,
            QuestTrigger::SpendReputation => Resource::Reputation,
            QuestTrigger::SpendMaterials => Resource::Materials,
            QuestTrigger::SpendEnergy => Resource::Energy,
        }
    }

    /// Does an expenditure of `spent` advance this quest?
    #[must_use]
    pub fn matches(self, spent: &Resources) -> bool {
        spent.get(self.resource()) > 0
    }
}

/// A counter that pays out after `target` matching expenditures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub label: String,
    pub trigger: QuestTrigger,
    pub target: u32,
    pub reward: Reward,
}

/// Static VP scoring rule.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VpLogic {
    /// Flat VP for having this tile on the board.
    pub flat: i64,
    /// VP per placed tile of a colour, counted across the whole board.
    pub per_color: Vec<(TileColor, i64)>,
}

impl VpLogic {
    /// Flat VP only.
    #[must_use]
    pub fn flat(vp: i64) -> Self {
        Self { flat: vp, per_color: Vec::new() }
    }

    /// Add a per-colour rule (builder pattern).
    #[must_use]
    pub fn per(mut self, color: TileColor, vp: i64) -> Self {
        self.per_color.push((color, vp));
        self
    }
}

/// Static tile template.
///
/// ## Example
///
/// ```
/// use tile_explorer::core::{Doors, Resource};
/// use tile_explorer::tiles::{ActionId, TemplateId, TileAction, TileColor, TileTemplate};
///
/// let stall = TileTemplate::new(TemplateId::new(1), "Market Stall", TileColor::Green)
///     .with_doors(Doors::new(true, false, true, false))
///     .with_cost(1)
///     .with_action(TileAction::new(ActionId::new(0), "Sell").gives(Resource::Money, 4));
///
/// assert_eq!(stall.action(ActionId::new(0)).unwrap().effect.money, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileTemplate {
    pub id: TemplateId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub color: TileColor,
    #[serde(default)]
    pub kind: TileKind,
    pub doors: Doors,
    /// Workers consumed to place this tile.
    #[serde(default)]
    pub cost: i64,
    #[serde(default)]
    pub actions: Vec<TileAction>,
    #[serde(default)]
    pub passives: Vec<PassiveAbility>,
    #[serde(default)]
    pub quest: Option<Quest>,
    #[serde(default)]
    pub vp: Option<VpLogic>,
}

impl TileTemplate {
    /// Create a template with all doors open and no rules.
    #[must_use]
    pub fn new(id: TemplateId, name: impl Into<String>, color: TileColor) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            color,
            kind: if color == TileColor::Starter { TileKind::Starter } else { TileKind::default() },
            doors: Doors::ALL,
            cost: 0,
            actions: Vec::new(),
            passives: Vec::new(),
            quest: None,
            vp: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the kind.
    #[must_use]
    pub fn with_kind(mut self, kind: TileKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the doors.
    #[must_use]
    pub fn with_doors(mut self, doors: Doors) -> Self {
        self.doors = doors;
        self
    }

    /// Set the worker cost.
    #[must_use]
    pub fn with_cost(mut self, workers: i64) -> Self {
        self.cost = workers;
        self
    }

    /// Add an action.
    #[must_use]
    pub fn with_action(mut self, action: TileAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Add a passive ability.
    #[must_use]
    pub fn with_passive(mut self, passive: PassiveAbility) -> Self {
        self.passives.push(passive);
        self
    }

    /// Set the quest.
    #[must_use]
    pub fn with_quest(mut self, quest: Quest) -> Self {
        self.quest = Some(quest);
        self
    }

    /// Set the scoring rule.
    #[must_use]
    pub fn with_vp(mut self, vp: VpLogic) -> Self {
        self.vp = Some(vp);
        self
    }

    /// Look up an action by ID.
    #[must_use]
    pub fn action(&self, id: ActionId) -> Option<&TileAction> {
        self.actions.iter().find(|a| a.id == id)
    }

    /// Is this the starter template?
    #[must_use]
    pub fn is_starter(&self) -> bool {
        self.color == TileColor::Starter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_id() {
        let id = TemplateId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Template(42)");
    }

    #[test]
    fn test_template_builder() {
        let template = TileTemplate::new(TemplateId::new(1), "Workshop", TileColor::Blue)
            .with_kind(TileKind::Build)
            .with_doors(Doors::new(true, true, true, false))
            .with_cost(2)
            .with_action(
                TileAction::new(ActionId::new(0), "Craft")
                    .costs(Resource::Money, 2)
                    .gives(Resource::Materials, 3)
                    .repeatable(3),
            );

        assert_eq!(template.name, "Workshop");
        assert_eq!(template.kind, TileKind::Build);
        assert_eq!(template.cost, 2);
        assert!(!template.doors.w);

        let craft = template.action(ActionId::new(0)).unwrap();
        assert!(craft.is_repeatable());
        assert_eq!(craft.cost.money, 2);
        assert_eq!(craft.effect.materials, 3);

        assert!(template.action(ActionId::new(9)).is_none());
    }

    #[test]
    fn test_starter_kind() {
        let starter = TileTemplate::new(TemplateId::new(0), "Home", TileColor::Starter);
        assert!(starter.is_starter());
        assert_eq!(starter.kind, TileKind::Starter);
    }

    #[test]
    fn test_quest_trigger_matches() {
        let spent = Resources::default().with(Resource::Money, 1).with(Resource::Energy, 0);

        assert!(QuestTrigger::SpendMoney.matches(&spent));
        assert!(!QuestTrigger::SpendEnergy.matches(&spent));
        assert!(!QuestTrigger::SpendMaterials.matches(&spent));
    }

    #[test]
    fn test_playable_colors() {
        let colors: Vec<_> = TileColor::playable().collect();
        assert_eq!(colors.len(), 4);
        assert!(!colors.contains(&TileColor::Starter));
    }

    #[test]
    fn test_template_serialization() {
        let template = TileTemplate::new(TemplateId::new(3), "Park", TileColor::Orange)
            .with_vp(VpLogic::flat(1).per(TileColor::Green, 2))
            .with_quest(Quest {
                id: QuestId(0),
                label: "Beautify".into(),
                trigger: QuestTrigger::SpendMoney,
                target: 2,
                reward: Reward::vp(5),
            });

        let json = serde_json::to_string(&template).unwrap();
        let back: TileTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(template, back);
    }

    #[test]
    fn test_template_minimal_json() {
        let json = r#"{"id": 7, "name": "Shed", "color": "blue", "doors": {"n": true, "e": false, "s": true, "w": false}}"#;
        let template: TileTemplate = serde_json::from_str(json).unwrap();

        assert_eq!(template.id, TemplateId::new(7));
        assert_eq!(template.cost, 0);
        assert!(template.actions.is_empty());
        assert!(template.vp.is_none());
    }
}
