//! The Farkle turn engine.
//!
//! `TurnEngine` owns the `GameState` and is the only thing that mutates it.
//! The view layer issues commands and re-renders from `state()` afterwards.
//!
//! ## Turn flow
//!
//! 1. A turn begins with neutral dice and nothing selected or locked.
//! 2. The first roll throws all six dice. If they score nothing the player
//!    busts; otherwise their full value becomes the round score.
//! 3. The player selects dice and rerolls. Selected and locked dice are set
//!    aside; the rest are thrown again. The selection is priced, added to
//!    the round score and locked for the rest of the turn. A selection worth
//!    nothing is a bust that forfeits the round score.
//! 4. Ending the turn banks the round score. A bank that reaches the winning
//!    score ends the game; otherwise play passes to the next seat.
//!
//! Every command either applies completely or returns an error and leaves
//! the state untouched.

use tracing::{debug, info};

use crate::core::{
    Action, DiceMask, DiceSource, FarkleConfig, GameRng, GameState, PlayerId, Roll, TurnPhase,
    DICE_COUNT,
};
use crate::scoring::{score, score_all};

use super::error::{FarkleError, SelectionRejection};
use super::outcome::{ActionOutcome, GameResult, RollOutcome, TurnOutcome};

/// Rules engine and state owner for one game.
///
/// ## Example
///
/// ```
/// use farkle_engine::core::{FarkleConfig, ScriptedDice};
/// use farkle_engine::rules::{RollOutcome, TurnEngine};
///
/// let dice = ScriptedDice::new([1, 1, 1, 2, 3, 4]);
/// let mut engine = TurnEngine::new(FarkleConfig::new(), dice).unwrap();
///
/// let outcome = engine.roll_dice().unwrap();
/// assert!(matches!(outcome, RollOutcome::Scored { points: 1000, .. }));
/// assert_eq!(engine.state().turn().round_score, 1000);
/// ```
#[derive(Clone, Debug)]
pub struct TurnEngine<D: DiceSource = GameRng> {
    config: FarkleConfig,
    state: GameState,
    dice: D,
}

impl TurnEngine<GameRng> {
    /// Engine rolling from a seeded RNG.
    pub fn seeded(config: FarkleConfig, seed: u64) -> Result<Self, FarkleError> {
        Self::new(config, GameRng::new(seed))
    }
}

impl<D: DiceSource> TurnEngine<D> {
    /// Create an engine, validating the configuration.
    pub fn new(config: FarkleConfig, dice: D) -> Result<Self, FarkleError> {
        config.validate()?;
        let state = GameState::new(&config);

        info!(
            players = config.player_count(),
            winning_score = config.winning_score,
            "new game"
        );

        Ok(Self { config, state, dice })
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &FarkleConfig {
        &self.config
    }

    /// Current state. Read-only; only engine commands change it.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// The dice source, e.g. to inspect how many scripted faces were used.
    #[must_use]
    pub fn dice_source(&self) -> &D {
        &self.dice
    }

    /// Points the current selection would score.
    #[must_use]
    pub fn selected_score(&self) -> u32 {
        let turn = self.state.turn();
        score(&turn.roll, turn.selection)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state.winner().map(|winner| {
            let player = self.state.player(winner);
            GameResult {
                winner,
                name: player.name.clone(),
                score: player.total_score,
            }
        })
    }

    /// Every command that would succeed right now.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let turn = self.state.turn();
        let mut actions = Vec::new();

        if !self.state.is_game_over() {
            actions.extend(turn.selectable().iter().map(|i| Action::ToggleSelection(i as u8)));

            let can_roll = match turn.phase {
                TurnPhase::AwaitingFirstRoll => true,
                TurnPhase::AwaitingSelection => !turn.selection.is_empty(),
                _ => false,
            };
            if can_roll {
                actions.push(Action::Roll);
            }
            actions.push(Action::EndTurn);
        }

        actions.push(Action::ResetGame);
        actions
    }

    // === Commands ===

    /// Apply any command.
    pub fn apply(&mut self, action: Action) -> Result<ActionOutcome, FarkleError> {
        match action {
            Action::ToggleSelection(index) => {
                self.toggle_selection(index as usize).map(ActionOutcome::Toggled)
            }
            Action::Roll => self.roll_dice().map(ActionOutcome::Rolled),
            Action::EndTurn => self.end_turn().map(ActionOutcome::TurnEnded),
            Action::ResetGame => {
                self.reset_game();
                Ok(ActionOutcome::Reset)
            }
        }
    }

    /// Flip the selection flag of the die at `index`.
    ///
    /// Returns the new selection.
    pub fn toggle_selection(&mut self, index: usize) -> Result<DiceMask, FarkleError> {
        if let Some(reason) = self.selection_rejection(index) {
            debug!(index, %reason, "selection refused");
            return Err(FarkleError::IllegalSelection { index, reason });
        }

        let player = self.state.active_player();
        let turn = self.state.turn_mut();
        turn.selection.toggle(index);
        let selection = turn.selection;

        debug!(
            player = %player,
            index,
            selected = selection.contains(index),
            selected_points = score(&turn.roll, selection),
            "toggled die"
        );
        self.state.record(player, Action::ToggleSelection(index as u8));

        Ok(selection)
    }

    /// Roll for the active player.
    ///
    /// The first roll of a turn throws all six dice. Later rolls need a
    /// selection, throw only the dice that are neither selected nor locked,
    /// and lock the selection. A bust ends the turn before this returns.
    pub fn roll_dice(&mut self) -> Result<RollOutcome, FarkleError> {
        self.ensure_in_play()?;

        match self.state.turn().phase {
            TurnPhase::AwaitingFirstRoll => Ok(self.first_roll()),
            _ => self.reroll(),
        }
    }

    /// Bank the round score and pass the turn.
    pub fn end_turn(&mut self) -> Result<TurnOutcome, FarkleError> {
        self.ensure_in_play()?;

        let player = self.state.active_player();
        self.state.record(player, Action::EndTurn);
        Ok(self.finish_turn(false))
    }

    /// Zero every score and give the first seat a fresh turn.
    pub fn reset_game(&mut self) {
        self.state.reset();
        info!("game reset");
    }

    // === Transitions ===

    fn first_roll(&mut self) -> RollOutcome {
        let player = self.state.active_player();
        let turn = self.state.turn_mut();

        throw(&mut self.dice, &mut turn.roll, DiceMask::ALL);
        turn.selection = DiceMask::NONE;
        turn.rolls += 1;

        let points = score_all(&turn.roll);
        if points > 0 {
            turn.round_score = points;
            turn.phase = TurnPhase::AwaitingSelection;
        }

        let roll = turn.roll;
        debug!(player = %player, roll = %roll, points, "first roll");
        self.settle_roll(player, roll, points)
    }

    fn reroll(&mut self) -> Result<RollOutcome, FarkleError> {
        let player = self.state.active_player();
        let turn = self.state.turn_mut();

        if turn.selection.is_empty() {
            debug!(player = %player, "reroll refused: nothing selected");
            return Err(FarkleError::IllegalReroll);
        }

        let scoring = turn.selection.difference(turn.lock);
        let rerolled = turn.rerollable();
        throw(&mut self.dice, &mut turn.roll, rerolled);
        turn.rolls += 1;

        let points = score(&turn.roll, scoring);
        if points > 0 {
            turn.round_score += points;
            turn.lock = turn.lock.union(turn.selection);
            turn.selection = DiceMask::NONE;
        }

        let roll = turn.roll;
        debug!(
            player = %player,
            roll = %roll,
            points,
            locked = turn.lock.count(),
            "reroll"
        );
        Ok(self.settle_roll(player, roll, points))
    }

    /// Record a roll and end the turn if it busted.
    fn settle_roll(&mut self, player: PlayerId, roll: Roll, points: u32) -> RollOutcome {
        self.state.record(player, Action::Roll);

        if points == 0 {
            let turn = self.finish_turn(true);
            return RollOutcome::Bust { roll, turn };
        }

        RollOutcome::Scored {
            roll,
            points,
            round_score: self.state.turn().round_score,
        }
    }

    /// End the active turn, banking unless `lose_points`.
    fn finish_turn(&mut self, lose_points: bool) -> TurnOutcome {
        let player = self.state.active_player();
        let round_score = self.state.turn().round_score;
        let winning_score = self.state.winning_score();

        let total = if lose_points {
            self.state.player(player).total_score
        } else {
            let entry = &mut self.state.players_mut()[player];
            entry.total_score = entry.total_score.saturating_add(round_score);
            entry.total_score
        };

        let turn = self.state.turn_mut();
        turn.round_score = 0;
        turn.selection = DiceMask::NONE;
        turn.turn_ended = true;

        if !lose_points && total >= winning_score {
            turn.phase = TurnPhase::GameOver { winner: player };
            let name = self.state.player(player).name.clone();
            info!(player = %player, name = %name, score = total, "game won");
            return TurnOutcome::Won(GameResult {
                winner: player,
                name,
                score: total,
            });
        }

        turn.phase = TurnPhase::TurnEnded;
        let next_player = self.state.players().next_after(player);
        self.state.begin_turn(next_player);

        if lose_points {
            info!(player = %player, forfeited = round_score, next = %next_player, "bust");
            TurnOutcome::Busted {
                player,
                forfeited: round_score,
                next_player,
            }
        } else {
            info!(player = %player, banked = round_score, total, next = %next_player, "banked");
            TurnOutcome::Banked {
                player,
                banked: round_score,
                total,
                next_player,
            }
        }
    }

    // === Guards ===

    fn ensure_in_play(&self) -> Result<(), FarkleError> {
        match self.state.winner() {
            Some(winner) => Err(FarkleError::GameOver {
                winner: self.state.player(winner).name.clone(),
            }),
            None => Ok(()),
        }
    }

    fn selection_rejection(&self, index: usize) -> Option<SelectionRejection> {
        let turn = self.state.turn();

        if self.state.is_game_over() {
            Some(SelectionRejection::GameOver)
        } else if turn.turn_ended {
            Some(SelectionRejection::TurnEnded)
        } else if index >= DICE_COUNT {
            Some(SelectionRejection::OutOfRange)
        } else if turn.phase == TurnPhase::AwaitingFirstRoll {
            Some(SelectionRejection::NotRolled)
        } else if turn.lock.contains(index) {
            Some(SelectionRejection::Locked)
        } else {
            None
        }
    }
}

/// Throw new faces for `positions`, leaving the other dice as they are.
fn throw<D: DiceSource>(dice: &mut D, roll: &mut Roll, positions: DiceMask) {
    for index in positions.iter() {
        roll.set(index, dice.roll_die());
    }
}
