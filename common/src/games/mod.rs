pub mod broadcaster;
pub mod session_rng;
pub mod tictactoe;

pub use broadcaster::GameBroadcaster;
pub use session_rng::SessionRng;
