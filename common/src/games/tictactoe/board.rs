use super::types::{Board, Mark, Position};

pub fn get_available_moves(board: &Board) -> Vec<Position> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(position, _)| position)
        .collect()
}

pub fn is_valid_move(board: &Board, position: Position) -> bool {
    board.get(position) == Some(Mark::Empty)
}
