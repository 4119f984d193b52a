use super::board::get_available_moves;
use super::types::{Board, GameStatus, LINES, Mark, PlayerNames, Position, WinningLine};

pub fn line_values(board: &Board, line: &[Position; 3]) -> [Mark; 3] {
    line.map(|position| board.cells()[position])
}

/// Lines whose cell values satisfy `checker`, in declaration order.
pub fn matching_lines<F>(board: &Board, checker: F) -> impl Iterator<Item = &'static [Position; 3]>
where
    F: Fn([Mark; 3]) -> bool,
{
    LINES
        .iter()
        .filter(move |line| checker(line_values(board, line)))
}

/// Two cells hold `mark` and the third is empty.
pub fn is_open_threat(values: [Mark; 3], mark: Mark) -> bool {
    let owned = values.iter().filter(|&&cell| cell == mark).count();
    let empty = values.iter().filter(|cell| cell.is_empty()).count();
    owned == 2 && empty == 1
}

pub fn threat_lines(board: &Board, mark: Mark) -> impl Iterator<Item = &'static [Position; 3]> {
    matching_lines(board, move |values| is_open_threat(values, mark))
}

fn is_complete_line(values: [Mark; 3]) -> bool {
    let [a, b, c] = values;
    !a.is_empty() && a == b && a == c
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    matching_lines(board, is_complete_line)
        .next()
        .map(|line| WinningLine::new(board.cells()[line[0]], *line))
}

pub fn is_terminal(board: &Board) -> bool {
    check_win(board).is_some() || get_available_moves(board).is_empty()
}

pub fn game_status(board: &Board) -> GameStatus {
    match check_win(board) {
        Some(Mark::X) => GameStatus::XWon,
        Some(Mark::O) => GameStatus::OWon,
        _ if get_available_moves(board).is_empty() => GameStatus::Draw,
        _ => GameStatus::InProgress,
    }
}

pub fn status_text(board: &Board, x_is_next: bool) -> String {
    match check_win(board) {
        Some(winner) => format!("Winner: {}", winner.symbol()),
        None => format!("Next player: {}", next_symbol(x_is_next)),
    }
}

/// Status line that names the players, e.g. `Next player: You (X)`.
pub fn labelled_status_text(board: &Board, x_is_next: bool, names: &PlayerNames) -> String {
    match game_status(board) {
        GameStatus::XWon => format!("Winner: {} (X)", names.player_x),
        GameStatus::OWon => format!("Winner: {} (O)", names.player_o),
        GameStatus::Draw => "Draw".to_string(),
        GameStatus::InProgress => {
            let mark = if x_is_next { Mark::X } else { Mark::O };
            format!("Next player: {} ({})", names.name_for(mark), mark.symbol())
        }
    }
}

fn next_symbol(x_is_next: bool) -> &'static str {
    if x_is_next { "X" } else { "O" }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_win(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            for mark in [X, O] {
                let mut cells = [E; 9];
                for position in line {
                    cells[position] = mark;
                }
                let board = Board::from(cells);
                assert_eq!(check_win(&board), Some(mark), "line {:?}", line);
                assert_eq!(check_win_with_line(&board).map(|l| l.positions), Some(line));
            }
        }
    }

    #[test]
    fn test_full_board_without_line_has_no_winner() {
        let board = Board::from([X, O, X, X, O, O, O, X, X]);
        assert_eq!(check_win(&board), None);
        assert!(is_terminal(&board));
        assert_eq!(game_status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = Board::from([X, X, E, O, O, E, E, E, E]);
        assert_eq!(check_win(&board), None);
        assert!(!is_terminal(&board));
        assert_eq!(game_status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_first_line_in_declaration_order_wins() {
        // Top row and left column both complete for X; top row is declared first.
        let board = Board::from([X, X, X, X, O, O, X, O, O]);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.positions, [0, 1, 2]);
        assert_eq!(line.mark, X);
    }

    #[test]
    fn test_status_next_player() {
        let board = Board::from([X, E, E, E, O, E, E, O, X]);
        assert_eq!(status_text(&board, true), "Next player: X");
        assert_eq!(status_text(&board, false), "Next player: O");
    }

    #[test]
    fn test_status_winner() {
        let board = Board::from([X, O, X, E, O, E, E, O, X]);
        assert_eq!(status_text(&board, true), "Winner: O");
        assert_eq!(game_status(&board), GameStatus::OWon);
    }

    #[test]
    fn test_labelled_status() {
        let names = PlayerNames::default();
        let board = Board::from([X, E, E, E, O, E, E, E, E]);
        assert_eq!(labelled_status_text(&board, true, &names), "Next player: You (X)");
        let won = Board::from([X, X, X, O, O, E, E, E, E]);
        assert_eq!(labelled_status_text(&won, false, &names), "Winner: You (X)");
        let draw = Board::from([X, O, X, X, O, O, O, X, X]);
        assert_eq!(labelled_status_text(&draw, false, &names), "Draw");
    }

    #[test]
    fn test_threat_lines_need_an_empty_third_cell() {
        let board = Board::from([O, O, E, X, X, O, E, E, E]);
        assert_eq!(threat_lines(&board, O).collect::<Vec<_>>(), vec![&[0, 1, 2]]);
        assert_eq!(threat_lines(&board, X).count(), 0);
    }

    #[test]
    fn test_evaluation_is_pure() {
        let board = Board::from([X, E, O, E, X, E, E, E, E]);
        let copy = board;
        for _ in 0..3 {
            assert_eq!(check_win(&board), None);
            assert_eq!(get_available_moves(&board), vec![1, 3, 5, 6, 7, 8]);
        }
        assert_eq!(board, copy);
    }
}
