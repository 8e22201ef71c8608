use super::board::DropError;
use super::{Board, Player};

/// Terminal flag of a game: still running, won by a player, or drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameAlreadyOver,
}

impl From<DropError> for MoveError {
    fn from(err: DropError) -> Self {
        match err {
            DropError::InvalidColumn(col) => MoveError::InvalidColumn(col),
            DropError::ColumnFull(col) => MoveError::ColumnFull(col),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Create the state of a fresh game: empty board, PlayerOne to move
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::One,
            status: GameStatus::InProgress,
        }
    }

    /// Test-only constructor for injected positions. Assumes the position
    /// is live: the caller is responsible for not injecting a finished game.
    #[cfg(test)]
    fn from_board(board: Board, current_player: Player) -> Self {
        GameState {
            board,
            current_player,
            status: GameStatus::InProgress,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the game status
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Check whether a column can take the next disc
    pub fn is_column_playable(&self, column: usize) -> bool {
        self.board.is_column_playable(column)
    }

    /// Apply a move and return the new state, leaving `self` untouched
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply a move in place and return the resulting status.
    ///
    /// Preconditions are checked in order: the game must still be in
    /// progress, the column must exist, the column must not be full.
    /// After the drop, a winning run is looked for before fullness, so a
    /// move that fills the last cell and completes a run wins rather than
    /// draws. The turn only passes when the game continues.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<GameStatus, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }

        let marker = self.current_player.to_cell();
        self.board.drop_piece(column, marker)?;

        if self.board.has_winning_run(marker) {
            self.status = GameStatus::Won(self.current_player);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current_player = self.current_player.other();
        }

        Ok(self.status)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
