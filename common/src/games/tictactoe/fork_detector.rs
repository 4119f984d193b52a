use super::board::get_available_moves;
use super::types::{Board, Mark};
use super::win_detector::threat_lines;

/// Whether `mark`, moving next, can place a single mark that opens two or more
/// lines one move away from completion.
pub fn can_fork(mark: Mark, board: &Board) -> bool {
    get_available_moves(board)
        .into_iter()
        .any(|position| threat_lines(&board.with_mark(position, mark), mark).nth(1).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_no_fork_from_empty_board() {
        assert!(!can_fork(X, &Board::new()));
        assert!(!can_fork(O, &Board::new()));
    }

    #[test]
    fn test_opposite_corners_fork() {
        let board = Board::from([X, E, E, E, O, E, E, E, X]);
        assert!(can_fork(X, &board));
    }

    #[test]
    fn test_blocked_lines_do_not_count() {
        // Every X placement leaves at most one line with two X and an empty cell.
        let board = Board::from([X, E, E, E, O, X, E, E, O]);
        assert!(!can_fork(X, &board));
    }

    #[test]
    fn test_fork_detection_for_o() {
        let board = Board::from([O, E, E, E, X, E, E, X, O]);
        assert!(can_fork(O, &board));
    }

    #[test]
    fn test_full_board_cannot_fork() {
        let board = Board::from([X, O, X, X, O, O, O, X, X]);
        assert!(!can_fork(X, &board));
    }

    #[test]
    fn test_can_fork_does_not_mutate() {
        let board = Board::from([X, E, E, E, O, E, E, E, X]);
        let copy = board;
        assert!(can_fork(X, &board));
        assert!(can_fork(X, &board));
        assert_eq!(board, copy);
    }
}
