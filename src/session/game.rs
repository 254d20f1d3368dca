//! The game session state machine.
//!
//! `GameSession` is the single authority over a game. Front ends issue
//! commands (move, select, choose a draft option, reroll, claim an action)
//! and read queries; nothing else mutates the state.
//!
//! ## Command Contract
//!
//! Every command returns `Result<_, Rejection>`. A rejection means the
//! command did nothing: the board, resources, ledgers and status are
//! untouched. Accepted commands run to completion, then evaluate the
//! game-over conditions and save the session if persistence is attached.
//!
//! ## Movement
//!
//! All movement (keyboard steps, pointer moves, discovery of empty cells)
//! goes through one validation routine that reads the configured movement
//! mode. With doors enforced, leaving a tile needs an exit door and
//! entering a placed tile needs a door facing back.
//!
//! ## Example
//!
//! ```
//! use tile_explorer::core::{Direction, SessionConfig};
//! use tile_explorer::session::{GameSession, Transition};
//!
//! let mut session = GameSession::standard(SessionConfig::default().with_seed(42));
//!
//! // North of the start cell is unexplored: a draft opens
//! let Transition::DraftStarted { options, .. } = session.attempt_move(Direction::N).unwrap() else {
//!     panic!("expected a draft");
//! };
//!
//! let placed_at = session.select_draft_tile(options[0]).unwrap();
//! assert_eq!(session.state().player, placed_at);
//! assert_eq!(session.tiles_placed(), 2);
//! ```

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::error::{CommandResult, Rejection};
use super::focus::FocusMode;
use super::log::LogKind;
use super::snapshot::Snapshot;
use super::state::{SessionState, UsageKey};
use crate::core::{
    direction_between, Direction, GameRng, Position, Resource, Resources, SessionConfig,
};
use crate::draft::{any_affordable, draw_options, DraftOptions, PendingDraft};
use crate::persist::{PersistError, Persistence};
use crate::rules::{self, GameStatus, LossReason, Payout, PayoutSource};
use crate::tiles::{standard, ActionId, PlacedTile, TemplateId, TileCatalog, TileTemplate};

/// What an accepted movement or selection did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The player moved onto an existing tile.
    Moved(Position),
    /// An occupied cell was selected for inspection.
    Selected(Position),
    /// A draft opened for an empty cell.
    DraftStarted {
        target: Position,
        options: DraftOptions,
    },
    /// A draft opened with nothing affordable; the session is lost.
    DraftImpossible,
}

/// Result of validating one step from the player's cell.
enum Step {
    Occupied(Position),
    Empty(Position),
}

/// A single-player game.
#[derive(Debug)]
pub struct GameSession {
    catalog: Arc<TileCatalog>,
    config: SessionConfig,
    state: SessionState,
    rng: GameRng,
    persistence: Option<Persistence>,
}

/// Template of a placed tile.
///
/// Sessions are built from a catalog and snapshots are validated against
/// it, so a missing template is a broken invariant.
fn lookup(catalog: &TileCatalog, id: TemplateId) -> &TileTemplate {
    catalog
        .get(id)
        .unwrap_or_else(|| panic!("{id} is placed but not in the catalog"))
}

fn rng_for(config: &SessionConfig) -> GameRng {
    config.seed.map_or_else(GameRng::from_entropy, GameRng::new)
}

impl GameSession {
    /// Start a fresh session.
    #[must_use]
    pub fn new(catalog: Arc<TileCatalog>, config: SessionConfig) -> Self {
        let rng = rng_for(&config);
        let state = SessionState::new(&config, &catalog);
        info!(
            width = config.grid.width,
            height = config.grid.height,
            seed = rng.seed(),
            "new session"
        );
        Self {
            catalog,
            config,
            state,
            rng,
            persistence: None,
        }
    }

    /// Start a fresh session with the standard tile set.
    #[must_use]
    pub fn standard(config: SessionConfig) -> Self {
        Self::new(Arc::new(standard::catalog()), config)
    }

    /// Save after every accepted command (builder pattern).
    #[must_use]
    pub fn with_persistence(mut self, persistence: Persistence) -> Self {
        self.persistence = Some(persistence);
        self
    }

    /// Continue the saved session, or start fresh if there is none.
    ///
    /// Unusable saves are logged and ignored.
    #[must_use]
    pub fn resume(
        catalog: Arc<TileCatalog>,
        config: SessionConfig,
        persistence: Persistence,
    ) -> Self {
        match persistence.load() {
            Ok(Some(snapshot)) => match Self::restore(Arc::clone(&catalog), snapshot) {
                Ok(session) => return session.with_persistence(persistence),
                Err(err) => warn!(error = %err, "saved session is unusable, starting fresh"),
            },
            Ok(None) => {}
            Err(err) => warn!(error = %err, "failed to load saved session, starting fresh"),
        }
        Self::new(catalog, config).with_persistence(persistence)
    }

    /// Rebuild a session from a snapshot.
    pub fn restore(catalog: Arc<TileCatalog>, snapshot: Snapshot) -> Result<Self, PersistError> {
        snapshot.validate(&catalog)?;
        Ok(Self {
            catalog,
            config: snapshot.config,
            state: snapshot.state,
            rng: GameRng::from_state(&snapshot.rng),
            persistence: None,
        })
    }

    /// Capture the whole session.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            config: self.config.clone(),
            state: self.state.clone(),
            rng: self.rng.state(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn persistence(&self) -> Option<&Persistence> {
        self.persistence.as_ref()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    #[must_use]
    pub fn resources(&self) -> &Resources {
        &self.state.resources
    }

    // === Commands ===

    /// Step in `direction`: onto a placed tile, or into a draft for an
    /// empty cell.
    pub fn attempt_move(&mut self, direction: Direction) -> CommandResult<Transition> {
        self.try_move(direction)
            .inspect_err(|r| debug!(%direction, rejection = %r, "move rejected"))
    }

    /// Click a cell: select an occupied cell, or open a draft for an
    /// empty adjacent cell the player can reach.
    pub fn select_tile(&mut self, pos: Position) -> CommandResult<Transition> {
        self.try_select(pos)
            .inspect_err(|r| debug!(%pos, rejection = %r, "selection rejected"))
    }

    /// Resolve the open draft with one of the offered templates.
    ///
    /// Places the tile, pays its worker cost, fires passive abilities and
    /// moves the player onto it. Returns the new tile's position.
    pub fn select_draft_tile(&mut self, template: TemplateId) -> CommandResult<Position> {
        self.try_place(template)
            .inspect_err(|r| debug!(%template, rejection = %r, "draft choice rejected"))
    }

    /// Pay energy to redraw the open draft's options.
    ///
    /// A rejection for energy or the reroll cap is explained in the
    /// message log.
    pub fn reroll_draft(&mut self) -> CommandResult<()> {
        let result = self.try_reroll();
        if let Err(rejection) = &result {
            debug!(rejection = %rejection, "reroll rejected");
            if matches!(
                rejection,
                Rejection::RerollLimit(_) | Rejection::InsufficientEnergy { .. }
            ) {
                self.state
                    .log
                    .push(LogKind::Feedback, format!("Cannot reroll: {rejection}"));
            }
        }
        result
    }

    /// Use an action of the tile the player stands on.
    pub fn claim_action(&mut self, action: ActionId) -> CommandResult<()> {
        self.try_claim(action)
            .inspect_err(|r| debug!(?action, rejection = %r, "action rejected"))
    }

    /// Move onto an adjacent placed tile.
    pub fn move_to_tile(&mut self, target: Position) -> CommandResult<()> {
        self.try_move_to(target)
            .inspect_err(|r| debug!(%target, rejection = %r, "move rejected"))
    }

    /// Discard the save and start over with the same configuration.
    pub fn reset(&mut self) {
        if let Some(persistence) = &self.persistence {
            if let Err(err) = persistence.clear() {
                warn!(error = %err, "failed to clear saved session");
            }
        }
        self.state = SessionState::new(&self.config, &self.catalog);
        self.rng = rng_for(&self.config);
        info!("session reset");
    }

    /// Save now. Without persistence this does nothing.
    pub fn save(&self) -> Result<(), PersistError> {
        match &self.persistence {
            Some(persistence) => persistence.save(&self.snapshot()),
            None => Ok(()),
        }
    }

    /// Replace this session with the saved one.
    ///
    /// Returns `false` when there is nothing to load.
    pub fn load(&mut self) -> Result<bool, PersistError> {
        let Some(persistence) = &self.persistence else {
            return Ok(false);
        };
        let Some(snapshot) = persistence.load()? else {
            return Ok(false);
        };
        snapshot.validate(&self.catalog)?;

        self.config = snapshot.config;
        self.state = snapshot.state;
        self.rng = GameRng::from_state(&snapshot.rng);
        info!(status = %self.state.status, "session loaded");
        Ok(true)
    }

    // === Focus ===

    /// Switch keyboard focus. Entering details highlights the first action.
    pub fn set_focus_mode(&mut self, mode: FocusMode) {
        self.state.focus.set_mode(mode);
    }

    /// Highlight an action of the current tile, clamped to its actions.
    pub fn set_focused_action_index(&mut self, index: usize) {
        let count = self.current_template().map_or(0, |t| t.actions.len());
        self.state.focus.set_action_index(index, count);
    }

    /// Use the highlighted action.
    ///
    /// Focus returns to the grid once a successful claim leaves the current
    /// tile with no usable action.
    pub fn use_focused_action(&mut self) -> CommandResult<()> {
        self.ensure_playing()?;
        let action = self
            .current_template()
            .and_then(|t| t.actions.get(self.state.focus.action_index))
            .map(|a| a.id)
            .ok_or(Rejection::NoFocusedAction)?;

        self.claim_action(action)?;
        if !self.has_usable_action() {
            self.state.focus.reset();
        }
        Ok(())
    }

    // === Command bodies ===

    fn try_move(&mut self, direction: Direction) -> CommandResult<Transition> {
        self.ensure_playing()?;
        self.ensure_idle()?;

        match self.check_step(direction)? {
            Step::Occupied(target) => {
                self.ensure_energy(1)?;
                self.enter(target);
                Ok(Transition::Moved(target))
            }
            Step::Empty(target) => Ok(self.open_draft(direction, target)),
        }
    }

    fn try_select(&mut self, pos: Position) -> CommandResult<Transition> {
        self.ensure_playing()?;
        self.ensure_idle()?;
        if !self.config.grid.contains(pos) {
            return Err(Rejection::OutOfBounds(pos));
        }

        if self.state.board.is_occupied(pos) {
            self.state.selected = Some(pos);
            return Ok(Transition::Selected(pos));
        }

        let direction =
            direction_between(self.state.player, pos).ok_or(Rejection::NotAdjacent(pos))?;
        match self.check_step(direction)? {
            Step::Empty(target) => Ok(self.open_draft(direction, target)),
            Step::Occupied(target) => {
                self.state.selected = Some(target);
                Ok(Transition::Selected(target))
            }
        }
    }

    fn try_place(&mut self, template_id: TemplateId) -> CommandResult<Position> {
        self.ensure_playing()?;
        let draft = self.state.draft.as_ref().ok_or(Rejection::NotDrafting)?;
        if !draft.offers(template_id) {
            return Err(Rejection::NotOffered(template_id));
        }
        let (target, rotation) = (draft.target, draft.rotation());

        let catalog = Arc::clone(&self.catalog);
        let template = catalog
            .get(template_id)
            .ok_or(Rejection::NotOffered(template_id))?;
        if template.cost > self.state.resources.workers {
            return Err(Rejection::InsufficientWorkers {
                needed: template.cost,
                available: self.state.resources.workers,
            });
        }
        // Placement always ends with a move onto the new tile
        self.ensure_energy(1)?;

        let cost = Resources::default().with(Resource::Workers, template.cost);
        self.state.draft = None;
        self.state
            .board
            .place(PlacedTile::new(target, template_id, rotation));
        self.state.resources.spend(&cost);

        info!(
            tile = %template.name,
            %target,
            rotation = rotation.degrees(),
            "tile placed"
        );
        self.state.log.push_with_delta(
            LogKind::Placement,
            format!("You placed {} at {target}", template.name),
            cost.negated(),
            0,
        );

        let payouts = rules::propagate(&self.state.board, &catalog, template.color);
        self.apply_payouts(payouts);

        self.enter(target);
        Ok(target)
    }

    fn try_reroll(&mut self) -> CommandResult<()> {
        self.ensure_playing()?;
        let draft = self.state.draft.as_ref().ok_or(Rejection::NotDrafting)?;
        if !draft.can_reroll(self.config.max_rerolls) {
            return Err(Rejection::RerollLimit(self.config.max_rerolls));
        }
        let cost = draft.next_reroll_cost();
        self.ensure_energy(cost)?;

        let options = draw_options(&mut self.rng, &self.catalog, self.config.draft_size);
        self.state.resources.energy -= cost;
        if let Some(draft) = self.state.draft.as_mut() {
            draft.reroll(options.clone());
        }

        info!(cost, options = ?options, "draft rerolled");
        self.state.log.push_with_delta(
            LogKind::Draft,
            "You rerolled the draft",
            Resources::default().with(Resource::Energy, -cost),
            0,
        );

        self.evaluate_game_over();
        if self.state.status.is_playing()
            && !any_affordable(&options, &self.catalog, self.state.resources.workers)
        {
            self.fail_draft();
        }
        self.persist();
        Ok(())
    }

    fn try_claim(&mut self, action_id: ActionId) -> CommandResult<()> {
        self.ensure_playing()?;
        self.ensure_idle()?;

        let catalog = Arc::clone(&self.catalog);
        let player = self.state.player;
        let (template_id, claimed) = {
            let tile = self.tile_at(player);
            (tile.template, tile.has_claimed(action_id))
        };
        let template = lookup(&catalog, template_id);
        let action = template
            .action(action_id)
            .ok_or(Rejection::UnknownAction(action_id))?;

        let usage_key = UsageKey {
            template: template_id,
            action: action_id,
        };
        let exhausted = match action.max_uses {
            Some(max) => self.state.action_usage.count(&usage_key) >= max,
            None => claimed,
        };
        if exhausted {
            return Err(Rejection::ActionExhausted(action_id));
        }
        if !self.state.resources.can_afford(&action.cost) {
            return Err(Rejection::InsufficientResources {
                missing: self.state.resources.missing(&action.cost),
            });
        }

        self.state.resources.spend(&action.cost);
        self.state.resources.gain(&action.effect);
        self.state.bonus_vp += action.vp;

        if action.is_repeatable() {
            self.state.action_usage.increment(usage_key);
        }
        if let Some(tile) = self.state.board.get_mut(player) {
            if action.is_repeatable() {
                tile.record_use(action_id);
            } else {
                tile.claim(action_id);
            }
        }

        info!(tile = %template.name, action = %action.label, "action used");
        self.state.log.push_with_delta(
            LogKind::Action,
            format!("You used {} at {}", action.label, template.name),
            action.cost.negated().plus(&action.effect),
            action.vp,
        );

        // Quest completions are logged after the action that caused them
        let payouts =
            self.state
                .quests
                .record_expenditure(&self.state.board, &catalog, &action.cost);
        self.apply_payouts(payouts);

        self.settle();
        Ok(())
    }

    fn try_move_to(&mut self, target: Position) -> CommandResult<()> {
        self.ensure_playing()?;
        self.ensure_idle()?;
        if !self.config.grid.contains(target) {
            return Err(Rejection::OutOfBounds(target));
        }
        if target == self.state.player {
            return Err(Rejection::AlreadyThere(target));
        }

        let direction =
            direction_between(self.state.player, target).ok_or(Rejection::NotAdjacent(target))?;
        match self.check_step(direction)? {
            Step::Occupied(target) => {
                self.ensure_energy(1)?;
                self.enter(target);
                Ok(())
            }
            Step::Empty(target) => Err(Rejection::EmptyTarget(target)),
        }
    }

    // === Shared sequences ===

    /// Validate one step from the player's cell under the movement mode.
    fn check_step(&self, direction: Direction) -> CommandResult<Step> {
        let from = self.state.player;
        let target = self
            .config
            .grid
            .adjacent_position(from, direction)
            .ok_or(Rejection::OutOfBounds(from.step(direction)))?;
        let restricted = self.config.door_restricted;

        if restricted {
            let current = self.tile_at(from);
            if !current.has_door(lookup(&self.catalog, current.template), direction) {
                return Err(Rejection::NoExitDoor(direction));
            }
        }

        match self.state.board.get(target) {
            None => Ok(Step::Empty(target)),
            Some(tile) => {
                let template = lookup(&self.catalog, tile.template);
                if restricted && !tile.has_door(template, direction.inverse()) {
                    return Err(Rejection::NoEntranceDoor(target));
                }
                Ok(Step::Occupied(target))
            }
        }
    }

    /// Move the player onto a placed tile. Costs one energy.
    fn enter(&mut self, target: Position) {
        self.state.resources.energy -= 1;
        self.state.player = target;
        self.state.selected = Some(target);
        self.state.focus.reset();

        let name = &lookup(&self.catalog, self.tile_at(target).template).name;
        let message = format!("You moved to {name}");
        self.state.log.push_with_delta(
            LogKind::Movement,
            message,
            Resources::default().with(Resource::Energy, -1),
            0,
        );
        self.settle();
    }

    fn open_draft(&mut self, direction: Direction, target: Position) -> Transition {
        let options = draw_options(&mut self.rng, &self.catalog, self.config.draft_size);
        info!(%target, options = ?options, "draft opened");

        self.state.log.push(
            LogKind::Draft,
            format!("You found unexplored ground to the {direction}. Choose a tile to place."),
        );
        self.state.draft = Some(PendingDraft::open(direction, target, options.clone()));

        if !any_affordable(&options, &self.catalog, self.state.resources.workers) {
            self.fail_draft();
            self.persist();
            return Transition::DraftImpossible;
        }

        self.persist();
        Transition::DraftStarted { target, options }
    }

    /// End the session because the open draft has nothing affordable.
    fn fail_draft(&mut self) {
        let vp = self.victory_points();
        self.finish(GameStatus::Lost(LossReason::NoAffordableDraft { vp }));
    }

    /// Credit payouts and log them.
    fn apply_payouts(&mut self, payouts: Vec<Payout>) {
        for payout in payouts {
            self.state.resources.gain(&payout.reward.resources);
            self.state.bonus_vp += payout.reward.vp;

            let (kind, message) = match payout.source {
                PayoutSource::Passive { trigger } => (
                    LogKind::Passive,
                    format!(
                        "{}'s {} effect triggered! ({trigger} tile placed)",
                        payout.owner_name, payout.label
                    ),
                ),
                PayoutSource::Quest => (
                    LogKind::Quest,
                    format!("Quest completed: {} at {}", payout.label, payout.owner_name),
                ),
            };
            self.state
                .log
                .push_with_delta(kind, message, payout.reward.resources, payout.reward.vp);
        }
    }

    /// Evaluate game over, then save.
    fn settle(&mut self) {
        self.evaluate_game_over();
        self.persist();
    }

    fn evaluate_game_over(&mut self) {
        if !self.state.status.is_playing() {
            return;
        }
        let vp = self.victory_points();
        if let Some(status) = rules::evaluate(
            vp,
            self.config.win_threshold,
            &self.state.resources,
            &self.state.board,
        ) {
            self.finish(status);
        }
    }

    fn finish(&mut self, status: GameStatus) {
        let vp = self.victory_points();
        let message = match status {
            GameStatus::Playing => return,
            GameStatus::Won => format!("You won with {vp} VP!"),
            GameStatus::Lost(reason) => format!("Game over: {reason}"),
        };
        // A finished game has no open draft
        self.state.draft = None;
        self.state.status = status;
        self.state.log.push(LogKind::GameOver, message);
        info!(%status, vp, "game over");
    }

    /// Best-effort save after an accepted command.
    fn persist(&self) {
        if let Some(persistence) = &self.persistence {
            if let Err(err) = persistence.save(&self.snapshot()) {
                warn!(error = %err, "failed to save session");
            }
        }
    }

    // === Guards ===

    fn ensure_playing(&self) -> CommandResult<()> {
        if self.state.status.is_playing() {
            Ok(())
        } else {
            Err(Rejection::NotPlaying)
        }
    }

    fn ensure_idle(&self) -> CommandResult<()> {
        if self.state.is_drafting() {
            Err(Rejection::Drafting)
        } else {
            Ok(())
        }
    }

    fn ensure_energy(&self, needed: i64) -> CommandResult<()> {
        let available = self.state.resources.energy;
        if available < needed {
            Err(Rejection::InsufficientEnergy { needed, available })
        } else {
            Ok(())
        }
    }

    /// Could the player step in `direction` right now?
    pub(super) fn can_step(&self, direction: Direction) -> bool {
        self.check_step(direction).is_ok()
    }

    /// Placed tile at `pos`, which must be occupied.
    fn tile_at(&self, pos: Position) -> &PlacedTile {
        self.state
            .board
            .get(pos)
            .unwrap_or_else(|| panic!("expected a tile at {pos}"))
    }
}
