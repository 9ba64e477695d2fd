//! Combat session lifecycle and turn resolution.
//!
//! The [`CombatManager`] owns at most one [`session`](SessionSnapshot) at a
//! time. Callers drive it by alternating [`CombatManager::process_player_turn`]
//! and [`CombatManager::process_enemy_turn`]; every turn ends with the same
//! evaluation step:
//!
//! 1. integrity check of both participants (violations force-end the session)
//! 2. player dead → `PlayerDead`
//! 3. enemy dead → `PlayerWin`
//!
//! Validation failures are returned before any mutation. Failures on the
//! enemy's side never surface: the enemy falls back to a basic attack.

mod attack;
mod enemy_turn;
mod errors;
mod integrity;
mod item;
mod session;
mod skill;

pub use attack::{ATTACK_VARIANCE_MAX, AttackOutcome, attempt_escape, basic_attack};
pub use enemy_turn::{EnemyActionOutcome, apply_venom, resolve_enemy_action};
pub use errors::{
    CombatError, InsufficientResourcesError, InvalidActionError, ResourceNotFoundError, TurnError,
};
pub use integrity::{IntegrityViolation, check_integrity};
pub use item::{ItemOutcome, use_item};
pub use session::{CombatResult, PlayerAction, SessionSnapshot};
pub use skill::{SkillOutcome, use_skill, validate_skill};

use std::sync::Arc;

use crate::ai::{BehaviorProfile, EnemyAi};
use crate::character::Character;
use crate::config::CombatConfig;
use crate::env::{CombatEvent, EventSink, RollSource, SeededRolls, TracingSink};

use session::CombatSession;

/// Log line appended when a corrupted session is force-ended.
pub const INTEGRITY_ABORT_MESSAGE: &str = "Combat ended unexpectedly due to an internal error.";

/// Owner of the active combat session.
///
/// Built with [`CombatManager::builder`]. There is no global instance: the
/// embedding application keeps the manager in its own context.
pub struct CombatManager {
    config: CombatConfig,
    rolls: Box<dyn RollSource + Send>,
    sink: Arc<dyn EventSink>,
    session: Option<CombatSession>,
}

impl CombatManager {
    /// Seed used when the builder is not given one.
    pub const DEFAULT_SEED: u64 = 0x5eed;

    pub fn builder() -> CombatManagerBuilder {
        CombatManagerBuilder::new()
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Starts a session with the default behavior profile.
    ///
    /// # Errors
    ///
    /// See [`CombatManager::start_combat_with_behavior`].
    pub fn start_combat(
        &mut self,
        player: Character,
        enemy: Character,
    ) -> Result<SessionSnapshot, TurnError> {
        self.start_combat_with_behavior(player, enemy, BehaviorProfile::default())
    }

    /// Starts a session driving `enemy` with `profile`.
    ///
    /// A finished session that was never ended is replaced.
    ///
    /// # Errors
    ///
    /// - [`CombatError::SessionInProgress`] while another session is ongoing
    /// - [`CombatError::ParticipantDead`] if either participant is dead
    pub fn start_combat_with_behavior(
        &mut self,
        player: Character,
        enemy: Character,
        profile: BehaviorProfile,
    ) -> Result<SessionSnapshot, TurnError> {
        if self.is_combat_active() {
            return Err(CombatError::SessionInProgress.into());
        }
        for participant in [&player, &enemy] {
            if participant.is_dead() {
                return Err(CombatError::participant_dead(&participant.name).into());
            }
        }

        self.sink.emit(CombatEvent::CombatStart {
            player_name: player.name.clone(),
            enemy_name: enemy.name.clone(),
            player_level: player.level,
            enemy_hp_max: enemy.hp_max,
        });
        tracing::info!(
            player = %player.name,
            enemy = %enemy.name,
            personality = %profile.personality,
            "combat started"
        );

        let session = self
            .session
            .insert(CombatSession::new(player, enemy, EnemyAi::new(profile)));
        Ok(session.snapshot())
    }

    /// Resolves the player's action for this turn.
    ///
    /// # Errors
    ///
    /// - [`CombatError`] without an ongoing session or with a dead player
    /// - [`InvalidActionError::MissingArgument`] for an empty skill or item name
    /// - any error from [`use_skill`] or [`use_item`]
    ///
    /// The session is untouched on error.
    pub fn process_player_turn(
        &mut self,
        action: PlayerAction,
    ) -> Result<SessionSnapshot, TurnError> {
        let session = self.session.as_mut().ok_or(CombatError::NoSession)?;
        if !session.is_ongoing() {
            return Err(CombatError::AlreadyFinished {
                result: session.result,
            }
            .into());
        }
        if session.player.is_dead() {
            return Err(CombatError::participant_dead(&session.player.name).into());
        }

        let messages = match &action {
            PlayerAction::Attack => {
                basic_attack(
                    &session.player,
                    &mut session.enemy,
                    1.0,
                    &self.config,
                    &mut *self.rolls,
                )
                .messages
            }
            PlayerAction::Skill(name) => {
                let name = required_name(name, &action)?;
                let outcome = use_skill(&mut session.player, &mut session.enemy, name, &self.config)?;
                self.sink.emit(CombatEvent::SkillUsed {
                    user: session.player.name.clone(),
                    skill: outcome.skill.clone(),
                    target: session.enemy.name.clone(),
                    mp_cost: outcome.mp_cost,
                });
                outcome.messages
            }
            PlayerAction::Item(name) => {
                let name = required_name(name, &action)?;
                let outcome = use_item(&mut session.player, name)?;
                self.sink.emit(CombatEvent::ItemUsed {
                    user: session.player.name.clone(),
                    item: outcome.item.clone(),
                    effects_applied: outcome.effects_applied.clone(),
                });
                outcome.messages
            }
            PlayerAction::Escape => {
                let (escaped, message) =
                    attempt_escape(&session.player, &session.enemy, &self.config, &mut *self.rolls);
                if escaped {
                    session.result = CombatResult::Escaped;
                    tracing::info!(player = %session.player.name, "player escaped");
                }
                vec![message]
            }
        };

        session.log.extend(messages);
        session.turn_count += 1;
        tracing::debug!(turn = session.turn_count, action = action.label(), "player turn resolved");

        evaluate_end(session, self.sink.as_ref());
        Ok(session.snapshot())
    }

    /// Lets the enemy act, then ticks both participants' status effects.
    ///
    /// Returns the snapshot unchanged when the session is already over.
    ///
    /// # Errors
    ///
    /// [`CombatError::NoSession`] when no session exists.
    pub fn process_enemy_turn(&mut self) -> Result<SessionSnapshot, TurnError> {
        let session = self.session.as_mut().ok_or(CombatError::NoSession)?;
        if !session.is_ongoing() {
            return Ok(session.snapshot());
        }
        if session.player.is_dead() || session.enemy.is_dead() {
            evaluate_end(session, self.sink.as_ref());
            return Ok(session.snapshot());
        }

        let decision = session
            .ai
            .next_action(&session.enemy, &session.player, &mut *self.rolls);
        let outcome = resolve_enemy_action(
            &mut session.enemy,
            &mut session.player,
            &decision,
            &self.config,
            &mut *self.rolls,
        );
        if let Some(skill) = &outcome.skill {
            self.sink.emit(CombatEvent::SkillUsed {
                user: session.enemy.name.clone(),
                skill: skill.skill.clone(),
                target: session.player.name.clone(),
                mp_cost: skill.mp_cost,
            });
        }
        session.log.extend(outcome.messages);

        if let Some(message) =
            apply_venom(&session.enemy, &mut session.player, &self.config, &mut *self.rolls)
        {
            session.log.push(message);
        }

        let player_ticks = session.player.process_status_effects();
        let enemy_ticks = session.enemy.process_status_effects();
        session.log.extend(player_ticks);
        session.log.extend(enemy_ticks);

        evaluate_end(session, self.sink.as_ref());
        Ok(session.snapshot())
    }

    /// Snapshot of the current session, or an inactive one.
    pub fn get_combat_state(&self) -> SessionSnapshot {
        self.session
            .as_ref()
            .map_or_else(SessionSnapshot::inactive, CombatSession::snapshot)
    }

    /// Clears the session and hands the participants back.
    pub fn end_combat(&mut self) -> SessionSnapshot {
        match self.session.take() {
            Some(session) => {
                tracing::info!(
                    result = %session.result,
                    turns = session.turn_count,
                    "combat ended"
                );
                session.into_snapshot()
            }
            None => SessionSnapshot::inactive(),
        }
    }

    pub fn is_combat_active(&self) -> bool {
        self.session.as_ref().is_some_and(CombatSession::is_ongoing)
    }

    /// Mutable access to `(player, enemy)` for scripted effects.
    ///
    /// Changes are re-validated at the next end-of-turn evaluation.
    pub fn participants_mut(&mut self) -> Option<(&mut Character, &mut Character)> {
        self.session
            .as_mut()
            .map(|session| (&mut session.player, &mut session.enemy))
    }

    /// Drops any session and rewinds the roll stream.
    pub fn shutdown(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("combat session dropped on shutdown");
        }
        self.rolls.reset();
    }
}

impl std::fmt::Debug for CombatManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombatManager")
            .field("config", &self.config)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

fn required_name<'a>(name: &'a str, action: &PlayerAction) -> Result<&'a str, InvalidActionError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(InvalidActionError::missing_argument(action.label()));
    }
    Ok(name)
}

fn evaluate_end(session: &mut CombatSession, sink: &dyn EventSink) {
    if let Err(violation) = check_integrity(&session.player, &session.enemy) {
        tracing::error!(
            %violation,
            turn = session.turn_count,
            "combat state corrupted, ending session"
        );
        sink.emit(CombatEvent::CombatError {
            reason: violation.to_string(),
            turn_count: session.turn_count,
        });
        session.log.push(INTEGRITY_ABORT_MESSAGE.to_string());
        session.result = CombatResult::PlayerWin;
        return;
    }

    if session.player.is_dead() {
        session.result = CombatResult::PlayerDead;
        session
            .log
            .push(format!("{} has been defeated...", session.player.name));
        sink.emit(CombatEvent::PlayerDeath {
            player_name: session.player.name.clone(),
            enemy_name: session.enemy.name.clone(),
            turn_count: session.turn_count,
        });
        tracing::info!(player = %session.player.name, turn = session.turn_count, "player died");
    } else if session.enemy.is_dead() {
        session.result = CombatResult::PlayerWin;
        session.log.push(format!("{} was defeated!", session.enemy.name));
        sink.emit(CombatEvent::CombatEnd {
            winner: session.player.name.clone(),
            loser: session.enemy.name.clone(),
            turn_count: session.turn_count,
        });
        tracing::info!(enemy = %session.enemy.name, turn = session.turn_count, "enemy defeated");
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`CombatManager`].
pub struct CombatManagerBuilder {
    config: CombatConfig,
    seed: u64,
    rolls: Option<Box<dyn RollSource + Send>>,
    sink: Option<Arc<dyn EventSink>>,
}

impl CombatManagerBuilder {
    fn new() -> Self {
        Self {
            config: CombatConfig::default(),
            seed: CombatManager::DEFAULT_SEED,
            rolls: None,
            sink: None,
        }
    }

    pub fn config(mut self, config: CombatConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed for the default PCG roll source. Ignored when [`rolls`](Self::rolls) is set.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replaces the roll source entirely (scripted rolls in tests).
    pub fn rolls(mut self, rolls: impl RollSource + Send + 'static) -> Self {
        self.rolls = Some(Box::new(rolls));
        self
    }

    /// Event sink (default: [`TracingSink`]).
    pub fn sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build(self) -> CombatManager {
        let rolls = self
            .rolls
            .unwrap_or_else(|| Box::new(SeededRolls::pcg(self.seed)));
        CombatManager {
            config: self.config,
            rolls,
            sink: self.sink.unwrap_or_else(|| Arc::new(TracingSink)),
            session: None,
        }
    }
}
