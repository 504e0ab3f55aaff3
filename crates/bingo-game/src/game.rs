use bingo_core::{Board, Line, MarkState, Number};
use bingo_generator::{BoardSeed, GeneratedBoard};

use crate::{CallOutcome, GameError, GameStatus};

/// A single-player bingo game.
///
/// Holds the board, the marked cells, and every number called so far. A game
/// starts [`GameStatus::InProgress`] and becomes [`GameStatus::Won`] as soon
/// as any row, column, or diagonal is fully marked. A won game accepts no
/// further calls; it is meant to be replaced with a new one.
///
/// # Example
///
/// ```
/// use bingo_game::Game;
/// use bingo_generator::BoardGenerator;
///
/// let generated = BoardGenerator::new().generate();
/// let game = Game::new(generated);
///
/// assert!(game.marks().is_empty());
/// assert!(!game.is_won());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    seed: BoardSeed,
    marks: MarkState,
    called: Vec<Number>,
}

impl Game {
    /// Creates a new game from a generated board. No cell is marked.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(generated: GeneratedBoard) -> Self {
        let GeneratedBoard {
            board,
            seed,
            draws: _,
        } = generated;
        Self::with_board(board, seed)
    }

    /// Creates a new game on an explicit board.
    #[must_use]
    pub fn with_board(board: Board, seed: BoardSeed) -> Self {
        Self {
            board,
            seed,
            marks: MarkState::new(),
            called: Vec::new(),
        }
    }

    /// Restores a game by replaying `called` on a fresh copy of `board`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyWon`] if a number is called after the
    /// replay already completed a line.
    pub fn from_parts(board: Board, seed: BoardSeed, called: &[Number]) -> Result<Self, GameError> {
        called
            .iter()
            .try_fold(Self::with_board(board, seed), |game, &number| {
                game.call_number(number).map(|(next, _)| next)
            })
    }

    /// Returns the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the seed the board was generated from.
    #[must_use]
    pub fn seed(&self) -> BoardSeed {
        self.seed
    }

    /// Returns the marked cells.
    #[must_use]
    pub fn marks(&self) -> MarkState {
        self.marks
    }

    /// Returns every number called so far, oldest first, including repeats.
    #[must_use]
    pub fn called_numbers(&self) -> &[Number] {
        &self.called
    }

    /// Returns the most recently called number.
    #[must_use]
    pub fn last_called(&self) -> Option<Number> {
        self.called.last().copied()
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.marks.has_win() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns `true` if any line is complete.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status().is_won()
    }

    /// Returns the completed lines, in [`Line::ALL`] order.
    pub fn winning_lines(&self) -> impl Iterator<Item = Line> {
        self.marks.winning_lines()
    }

    /// Calls `number` and returns the resulting game along with what happened.
    ///
    /// The board is scanned in row-major order and the first cell holding
    /// `number` is marked. Calling a number that is not on the board, or one
    /// that was already called, is recorded but leaves the marks unchanged.
    /// `self` is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyWon`] if the game is already won.
    ///
    /// # Example
    ///
    /// ```
    /// use bingo_core::{Board, Number, Position};
    /// use bingo_game::{CallOutcome, Game};
    /// use bingo_generator::BoardSeed;
    ///
    /// let game = Game::with_board(Board::identity(), BoardSeed::from_bytes([0; 32]));
    /// let (next, outcome) = game.call_number(Number::new(7)).unwrap();
    ///
    /// assert_eq!(
    ///     outcome,
    ///     CallOutcome::Marked { position: Position::new(1, 1), completes_win: false }
    /// );
    /// assert!(game.marks().is_empty());
    /// assert!(next.marks().is_marked(Position::new(1, 1)));
    /// ```
    pub fn call_number(&self, number: Number) -> Result<(Self, CallOutcome), GameError> {
        if self.is_won() {
            return Err(GameError::AlreadyWon);
        }

        let mut next = self.clone();
        next.called.push(number);

        let outcome = match self.board.position_of(number) {
            None => CallOutcome::NotOnBoard,
            Some(position) if self.marks.is_marked(position) => {
                CallOutcome::AlreadyMarked { position }
            }
            Some(position) => {
                next.marks = self.marks.marked(&self.board, number);
                CallOutcome::Marked {
                    position,
                    completes_win: next.marks.has_win(),
                }
            }
        };

        log::debug!("called {number}: {outcome:?}");
        Ok((next, outcome))
    }
}
