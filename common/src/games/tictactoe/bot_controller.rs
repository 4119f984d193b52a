use crate::games::SessionRng;
use super::board::get_available_moves;
use super::fork_detector::can_fork;
use super::types::{Board, CENTER, Mark, Position};
use super::win_detector::{check_win, threat_lines};

pub const BOT_MARK: Mark = Mark::O;
pub const HUMAN_MARK: Mark = Mark::X;

/// Picks the bot's (O) next move with a fixed priority cascade: win, block,
/// center, a move that gives X no fork, then anything open.
///
/// Fails on a board that is already won or full.
pub fn select_move(board: &Board, rng: &mut SessionRng) -> Result<Position, String> {
    if let Some(winner) = check_win(board) {
        return Err(format!("Game is already won by {}", winner.symbol()));
    }

    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return Err("No open positions left".to_string());
    }

    if let Some(position) = find_completing_move(board, BOT_MARK) {
        return Ok(position);
    }

    if let Some(position) = find_completing_move(board, HUMAN_MARK) {
        return Ok(position);
    }

    if available_moves.contains(&CENTER) {
        return Ok(CENTER);
    }

    let safe_moves = fork_safe_moves(board, &available_moves);
    let candidates = if safe_moves.is_empty() {
        &available_moves
    } else {
        &safe_moves
    };

    rng.choose(candidates)
        .ok_or_else(|| "No candidate moves".to_string())
}

/// Open cell of the first line where `mark` already holds the other two.
fn find_completing_move(board: &Board, mark: Mark) -> Option<Position> {
    threat_lines(board, mark)
        .next()
        .and_then(|line| line.iter().copied().find(|&position| board.cells()[position].is_empty()))
}

/// Moves after which X has no fork available.
pub fn fork_safe_moves(board: &Board, available_moves: &[Position]) -> Vec<Position> {
    available_moves
        .iter()
        .copied()
        .filter(|&position| !can_fork(HUMAN_MARK, &board.with_mark(position, BOT_MARK)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    fn rng() -> SessionRng {
        SessionRng::new(42)
    }

    #[test]
    fn test_takes_center_on_empty_board() {
        assert_eq!(select_move(&Board::new(), &mut rng()), Ok(4));
    }

    #[test]
    fn test_completes_own_line() {
        let board = Board::from([O, O, E, E, X, E, X, E, X]);
        assert_eq!(select_move(&board, &mut rng()), Ok(2));
    }

    #[test]
    fn test_blocks_opponent_line() {
        let board = Board::from([X, X, E, E, O, E, E, E, E]);
        assert_eq!(select_move(&board, &mut rng()), Ok(2));
    }

    #[test]
    fn test_winning_beats_blocking() {
        // X threatens the top row, O can finish the middle row.
        let board = Board::from([X, X, E, O, O, E, X, E, E]);
        assert_eq!(select_move(&board, &mut rng()), Ok(5));
    }

    #[test]
    fn test_first_threat_line_wins_ties() {
        // O can complete the top row or the left column; the top row is declared first.
        let board = Board::from([O, O, E, O, X, X, E, X, X]);
        assert_eq!(select_move(&board, &mut rng()), Ok(2));
    }

    #[test]
    fn test_avoids_handing_x_a_fork() {
        let board = Board::from([E, E, E, X, O, E, E, E, X]);
        let available = get_available_moves(&board);
        let safe = fork_safe_moves(&board, &available);
        assert_eq!(safe, vec![0, 6, 7]);
        for seed in 0..32 {
            let mut rng = SessionRng::new(seed);
            let position = select_move(&board, &mut rng).unwrap();
            assert!(safe.contains(&position), "seed {} picked {}", seed, position);
        }
    }

    #[test]
    fn test_falls_back_to_any_open_cell() {
        // X on opposite corners: every O reply leaves X a fork.
        let board = Board::from([X, E, E, E, O, E, E, E, X]);
        let available = get_available_moves(&board);
        assert!(fork_safe_moves(&board, &available).is_empty());
        for seed in 0..16 {
            let position = select_move(&board, &mut SessionRng::new(seed)).unwrap();
            assert!(available.contains(&position));
        }
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::from([X, E, E, E, O, E, E, E, X]);
        let first = select_move(&board, &mut SessionRng::new(9));
        let second = select_move(&board, &mut SessionRng::new(9));
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_won_board() {
        let board = Board::from([X, X, X, O, O, E, E, E, E]);
        assert!(select_move(&board, &mut rng()).is_err());
    }

    #[test]
    fn test_rejects_full_board() {
        let board = Board::from([X, O, X, X, O, O, O, X, X]);
        assert!(select_move(&board, &mut rng()).is_err());
    }

    #[test]
    fn test_always_plays_an_open_cell_until_game_over() {
        for seed in 0..50 {
            let mut bot_rng = SessionRng::new(seed);
            let mut human_rng = SessionRng::new(seed + 1000);
            let mut board = Board::new();
            while check_win(&board).is_none() && !get_available_moves(&board).is_empty() {
                let position = if board.x_is_next() {
                    human_rng.choose(&get_available_moves(&board)).unwrap()
                } else {
                    select_move(&board, &mut bot_rng).unwrap()
                };
                assert_eq!(board.get(position), Some(E), "seed {}", seed);
                board = board.with_mark(position, board.next_mark());
            }
        }
    }
}
