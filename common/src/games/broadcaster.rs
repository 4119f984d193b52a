use std::future::Future;

use super::tictactoe::GameSnapshot;

pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;
}
