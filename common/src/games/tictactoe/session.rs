use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::games::{GameBroadcaster, SessionRng};
use crate::log;
use super::bot_controller::select_move;
use super::game_state::{GameSnapshot, TicTacToeGameState};
use super::settings::TicTacToeSessionSettings;
use super::types::{PlayMode, PlayerNames, Position};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    PlaceMark(Position),
    JumpTo(usize),
    StepBack,
    StepForward,
    SetPlayMode(PlayMode),
    SetPlayerNames(PlayerNames),
}

#[derive(Clone)]
pub struct TicTacToeSessionState {
    pub session_id: String,
    pub game_state: Arc<Mutex<TicTacToeGameState>>,
    pub rng: Arc<Mutex<SessionRng>>,
    pub bot_delay: Duration,
    pending_bot_move: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl TicTacToeSessionState {
    pub fn create(
        session_id: impl Into<String>,
        settings: &TicTacToeSessionSettings,
        seed: u64,
    ) -> Result<Self, String> {
        settings.validate()?;

        let game_state =
            TicTacToeGameState::new(settings.play_mode, settings.player_names.clone());

        Ok(Self {
            session_id: session_id.into(),
            game_state: Arc::new(Mutex::new(game_state)),
            rng: Arc::new(Mutex::new(SessionRng::new(seed))),
            bot_delay: settings.bot_delay(),
            pending_bot_move: Arc::new(Mutex::new(None)),
        })
    }
}

pub struct TicTacToeSession;

impl TicTacToeSession {
    /// Publishes the opening position.
    pub async fn start(state: &TicTacToeSessionState, broadcaster: &impl GameBroadcaster) {
        let snapshot = state.game_state.lock().await.snapshot();
        let seed = state.rng.lock().await.seed();
        log!(
            "[session:{}] Started in {:?} mode, seed {}",
            state.session_id, snapshot.play_mode, seed
        );
        broadcaster.broadcast_state(snapshot).await;
    }

    pub async fn snapshot(state: &TicTacToeSessionState) -> GameSnapshot {
        state.game_state.lock().await.snapshot()
    }

    /// Applies one front-end command. Rejected commands leave the game untouched
    /// and are not broadcast.
    pub async fn handle_command<B: GameBroadcaster>(
        state: &TicTacToeSessionState,
        command: SessionCommand,
        broadcaster: &B,
    ) -> Result<(), String> {
        let result = {
            let mut game_state = state.game_state.lock().await;
            apply_command(&mut game_state, &command).map(|()| game_state.snapshot())
        };

        let snapshot = match result {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log!("[session:{}] Rejected {:?}: {}", state.session_id, command, e);
                return Err(e);
            }
        };

        if snapshot.bot_to_move {
            schedule_bot_move(state, broadcaster.clone()).await;
        } else {
            cancel_pending_bot_move(state).await;
        }

        publish(broadcaster, snapshot).await;
        Ok(())
    }

    /// Resolves once the scheduled bot reply, if any, has fired.
    pub async fn wait_for_bot_move(state: &TicTacToeSessionState) {
        let handle = state.pending_bot_move.lock().await.take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }
}

fn apply_command(
    game_state: &mut TicTacToeGameState,
    command: &SessionCommand,
) -> Result<(), String> {
    match command {
        SessionCommand::PlaceMark(position) => game_state.place_mark(*position),
        SessionCommand::JumpTo(index) => game_state.jump_to(*index),
        SessionCommand::StepBack => game_state.step_back(),
        SessionCommand::StepForward => game_state.step_forward(),
        SessionCommand::SetPlayMode(play_mode) => {
            game_state.set_play_mode(*play_mode);
            Ok(())
        }
        SessionCommand::SetPlayerNames(names) => game_state.set_player_names(names.clone()),
    }
}

async fn publish(broadcaster: &impl GameBroadcaster, snapshot: GameSnapshot) {
    let is_over = snapshot.status.is_over();
    broadcaster.broadcast_state(snapshot.clone()).await;
    if is_over {
        broadcaster.broadcast_game_over(snapshot).await;
    }
}

async fn schedule_bot_move<B: GameBroadcaster>(state: &TicTacToeSessionState, broadcaster: B) {
    let task_state = state.clone();
    let handle = tokio::spawn(async move {
        tokio::time::sleep(task_state.bot_delay).await;
        if let Some(snapshot) = play_bot_turn(&task_state).await {
            publish(&broadcaster, snapshot).await;
        }
    });

    let mut pending = state.pending_bot_move.lock().await;
    if let Some(previous) = pending.replace(handle) {
        previous.abort();
    }
    log!("[session:{}] Bot move scheduled in {:?}", state.session_id, state.bot_delay);
}

async fn cancel_pending_bot_move(state: &TicTacToeSessionState) {
    if let Some(handle) = state.pending_bot_move.lock().await.take() {
        handle.abort();
    }
}

/// Runs when the bot delay elapses. The turn is checked again against the
/// current state, which may have moved on since the move was scheduled.
async fn play_bot_turn(state: &TicTacToeSessionState) -> Option<GameSnapshot> {
    let mut game_state = state.game_state.lock().await;

    if !game_state.bot_to_move() {
        log!("[session:{}] Bot move suppressed, no longer the bot's turn", state.session_id);
        return None;
    }

    let board = *game_state.current_board();
    let calculated_move = {
        let mut rng = state.rng.lock().await;
        select_move(&board, &mut rng)
    };

    let position = match calculated_move {
        Ok(position) => position,
        Err(e) => {
            log!("[session:{}] Bot failed to pick a move: {}", state.session_id, e);
            return None;
        }
    };

    match game_state.place_bot_mark(position) {
        Ok(()) => {
            log!("[session:{}] Bot placed O at {}", state.session_id, position);
            Some(game_state.snapshot())
        }
        Err(e) => {
            log!("[session:{}] Bot failed to place mark at {}: {}", state.session_id, position, e);
            None
        }
    }
}
