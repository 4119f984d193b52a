use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 9;
pub const CENTER: Position = 4;
pub const MAX_PLAYER_NAME_LEN: usize = 9;

pub type Position = usize;

/// Every three-in-a-row on the board: rows, columns, then both diagonals.
/// The order matters, the first matching line decides ties.
pub static LINES: [[Position; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Empty => "",
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, position: Position) -> Option<Mark> {
        self.cells.get(position).copied()
    }

    /// Returns a copy of the board with `mark` at `position`. The receiver is untouched.
    pub fn with_mark(&self, position: Position, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[position] = mark;
        next
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// X moves on even occupancy, O on odd.
    pub fn x_is_next(&self) -> bool {
        self.occupied_count() % 2 == 0
    }

    pub fn next_mark(&self) -> Mark {
        if self.x_is_next() { Mark::X } else { Mark::O }
    }
}

impl From<[Mark; BOARD_SIZE]> for Board {
    fn from(cells: [Mark; BOARD_SIZE]) -> Self {
        Self::from_cells(cells)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayMode {
    #[default]
    HumanVsBot,
    HumanVsHuman,
}

impl PlayMode {
    pub fn has_bot(&self) -> bool {
        *self == PlayMode::HumanVsBot
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerNames {
    pub player_x: String,
    pub player_o: String,
}

impl PlayerNames {
    pub fn new(player_x: impl Into<String>, player_o: impl Into<String>) -> Self {
        Self {
            player_x: player_x.into(),
            player_o: player_o.into(),
        }
    }

    pub fn name_for(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
            Mark::Empty => "",
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_player_name(&self.player_x)?;
        validate_player_name(&self.player_o)?;
        Ok(())
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new("You", "Bot")
    }
}

pub fn validate_player_name(name: &str) -> Result<(), String> {
    let length = name.chars().count();
    if length == 0 {
        return Err("Player name must not be empty".to_string());
    }
    if length > MAX_PLAYER_NAME_LEN {
        return Err(format!(
            "Player name '{}' is longer than {} characters",
            name, MAX_PLAYER_NAME_LEN
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub positions: [Position; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, positions: [Position; 3]) -> Self {
        Self { mark, positions }
    }

    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }
}
