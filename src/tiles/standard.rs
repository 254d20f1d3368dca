//! Standard tile set.
//!
//! A small neighbourhood-building deck:
//! - Orange tiles score VP directly
//! - Green tiles produce money and energy
//! - Blue tiles turn money or energy into materials
//! - Purple tiles build reputation and recruit workers
//!
//! Costs run from 1 to 3 workers. The starter ("Home Base") lets the player
//! hire extra workers for money.

use crate::core::{Doors, Resource};

use super::catalog::TileCatalog;
use super::template::{
    AbilityId, ActionId, PassiveAbility, Quest, QuestId, QuestTrigger, Reward, TemplateId,
    TileAction, TileColor, TileKind, TileTemplate, VpLogic,
};

pub const HOME_BASE: TemplateId = TemplateId::new(0);
pub const MARKET_STALL: TemplateId = TemplateId::new(1);
pub const WORKSHOP: TemplateId = TemplateId::new(2);
pub const TOWN_SQUARE: TemplateId = TemplateId::new(3);
pub const MONUMENT: TemplateId = TemplateId::new(4);
pub const PARK: TemplateId = TemplateId::new(5);
pub const GUILD_HALL: TemplateId = TemplateId::new(6);
pub const FARM: TemplateId = TemplateId::new(7);
pub const QUARRY: TemplateId = TemplateId::new(8);
pub const GALLERY: TemplateId = TemplateId::new(9);
pub const LABOR_OFFICE: TemplateId = TemplateId::new(10);
pub const BANK: TemplateId = TemplateId::new(11);
pub const BRIDGE: TemplateId = TemplateId::new(12);
pub const FESTIVAL_GROUNDS: TemplateId = TemplateId::new(13);

const fn doors(n: bool, e: bool, s: bool, w: bool) -> Doors {
    Doors::new(n, e, s, w)
}

/// The starter tile.
#[must_use]
pub fn home_base() -> TileTemplate {
    TileTemplate::new(HOME_BASE, "Home Base", TileColor::Starter)
        .describe("Where every journey starts.")
        .with_action(
            TileAction::new(ActionId::new(0), "Hire Help")
                .describe("Pay 3 money for an extra worker.")
                .costs(Resource::Money, 3)
                .gives(Resource::Workers, 1)
                .repeatable(3),
        )
}

/// Every draftable template in the standard set, in catalog order.
#[must_use]
pub fn templates() -> Vec<TileTemplate> {
    vec![
        TileTemplate::new(MARKET_STALL, "Market Stall", TileColor::Green)
            .with_kind(TileKind::Economy)
            .with_doors(doors(true, false, true, false))
            .with_cost(1)
            .with_action(TileAction::new(ActionId::new(0), "Sell Goods").gives(Resource::Money, 4))
            .with_vp(VpLogic::flat(1)),
        TileTemplate::new(WORKSHOP, "Workshop", TileColor::Blue)
            .with_kind(TileKind::Build)
            .with_doors(doors(true, true, true, false))
            .with_cost(2)
            .with_action(
                TileAction::new(ActionId::new(0), "Craft")
                    .costs(Resource::Money, 2)
                    .gives(Resource::Materials, 3)
                    .repeatable(3),
            ),
        TileTemplate::new(TOWN_SQUARE, "Town Square", TileColor::Purple)
            .with_kind(TileKind::Social)
            .with_cost(2)
            .with_action(TileAction::new(ActionId::new(0), "Gather").gives(Resource::Reputation, 2))
            .with_passive(PassiveAbility {
                id: AbilityId(0),
                label: "Community Spirit".into(),
                trigger_color: TileColor::Purple,
                reward: Reward::vp(1),
            }),
        TileTemplate::new(MONUMENT, "Monument", TileColor::Orange)
            .with_doors(doors(true, false, true, false))
            .with_cost(3)
            .with_action(
                TileAction::new(ActionId::new(0), "Dedicate")
                    .costs(Resource::Materials, 4)
                    .gives_vp(5),
            )
            .with_vp(VpLogic::flat(8)),
        TileTemplate::new(PARK, "Park", TileColor::Orange)
            .with_doors(doors(false, true, true, true))
            .with_cost(1)
            .with_vp(VpLogic::default().per(TileColor::Green, 2)),
        TileTemplate::new(GUILD_HALL, "Guild Hall", TileColor::Purple)
            .with_kind(TileKind::Social)
            .with_doors(doors(true, false, true, true))
            .with_cost(2)
            .with_quest(Quest {
                id: QuestId(0),
                label: "Fund the Guild".into(),
                trigger: QuestTrigger::SpendMoney,
                target: 3,
                reward: Reward::vp(10).with(Resource::Workers, 1),
            }),
        TileTemplate::new(FARM, "Farm", TileColor::Green)
            .with_kind(TileKind::Economy)
            .with_cost(1)
            .with_action(
                TileAction::new(ActionId::new(0), "Harvest")
                    .gives(Resource::Energy, 2)
                    .repeatable(2),
            ),
        TileTemplate::new(QUARRY, "Quarry", TileColor::Blue)
            .with_kind(TileKind::Build)
            .with_doors(doors(true, false, true, false))
            .with_cost(1)
            .with_action(
                TileAction::new(ActionId::new(0), "Dig")
                    .costs(Resource::Energy, 2)
                    .gives(Resource::Materials, 3)
                    .repeatable(2),
            )
            .with_quest(Quest {
                id: QuestId(0),
                label: "Deep Seam".into(),
                trigger: QuestTrigger::SpendEnergy,
                target: 2,
                reward: Reward::vp(5),
            }),
        TileTemplate::new(GALLERY, "Gallery", TileColor::Orange)
            .with_doors(doors(true, true, true, false))
            .with_cost(2)
            .with_vp(VpLogic::default().per(TileColor::Purple, 3))
            .with_passive(PassiveAbility {
                id: AbilityId(0),
                label: "Patrons".into(),
                trigger_color: TileColor::Orange,
                reward: Reward::resource(Resource::Money, 2),
            }),
        TileTemplate::new(LABOR_OFFICE, "Labor Office", TileColor::Purple)
            .with_kind(TileKind::Social)
            .with_doors(doors(false, true, true, true))
            .with_cost(1)
            .with_action(
                TileAction::new(ActionId::new(0), "Recruit")
                    .costs(Resource::Reputation, 2)
                    .gives(Resource::Workers, 2)
                    .repeatable(2),
            ),
        TileTemplate::new(BANK, "Bank", TileColor::Green)
            .with_kind(TileKind::Economy)
            .with_doors(doors(true, true, true, false))
            .with_cost(3)
            .with_action(
                TileAction::new(ActionId::new(0), "Invest")
                    .costs(Resource::Money, 5)
                    .gives(Resource::Money, 8)
                    .gives_vp(2),
            )
            .with_passive(PassiveAbility {
                id: AbilityId(0),
                label: "Interest".into(),
                trigger_color: TileColor::Green,
                reward: Reward::resource(Resource::Money, 1),
            }),
        TileTemplate::new(BRIDGE, "Bridge", TileColor::Blue)
            .with_kind(TileKind::Build)
            .with_doors(doors(true, false, true, false))
            .with_cost(2)
            .with_vp(VpLogic::flat(3))
            .with_passive(PassiveAbility {
                id: AbilityId(0),
                label: "Crossroads".into(),
                trigger_color: TileColor::Blue,
                reward: Reward::vp(2),
            }),
        TileTemplate::new(FESTIVAL_GROUNDS, "Festival Grounds", TileColor::Orange)
            .with_cost(2)
            .with_vp(VpLogic::default().per(TileColor::Orange, 1))
            .with_quest(Quest {
                id: QuestId(0),
                label: "Throw a Festival".into(),
                trigger: QuestTrigger::SpendReputation,
                target: 2,
                reward: Reward::vp(12),
            }),
    ]
}

/// The standard catalog: [`home_base`] plus [`templates`].
#[must_use]
pub fn catalog() -> TileCatalog {
    templates()
        .into_iter()
        .fold(TileCatalog::new(home_base()), TileCatalog::with)
}
