//! Game state module - the game controller
//!
//! Ties together the board, the active piece, the randomizer and scoring.
//! The external driver calls [`GameState::on_tick`] on a timer and feeds
//! [`Command`]s from the keyboard; both run to completion before the next
//! event is accepted.
//!
//! Run states: `Running <-> Paused` via `TogglePause`, `Running -> GameOver`
//! when a freshly spawned piece does not fit, and `GameOver -> Running` only
//! through `NewGame`.

use tracing::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::pieces::{MoveOutcome, PlacedPiece};
use crate::rng::PieceRandomizer;
use crate::scoring::{line_clear_points, tick_interval_ms};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, RunState, ShapeKind};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: PlacedPiece,
    randomizer: PieceRandomizer,
    score: u32,
    lines: u32,
    /// Pieces spawned in the current episode, the first one included.
    pieces: u32,
    /// Monotonic episode id (increments on every new game).
    episode: u32,
    state: RunState,
}

impl GameState {
    /// Create a running game and spawn the first piece.
    pub fn new(config: GameConfig, mut randomizer: PieceRandomizer) -> Result<Self, GameError> {
        let board = Board::new(config.rows, config.columns)?;

        // Every shape must be able to appear at the spawn origin.
        if !ShapeKind::ALL
            .iter()
            .all(|&kind| PlacedPiece::spawn(kind).check_position(&board))
        {
            return Err(GameError::SpawnAreaOutOfBounds {
                rows: config.rows,
                columns: config.columns,
            });
        }

        let active = PlacedPiece::spawn(randomizer.next_kind());
        let mut game = Self {
            config,
            board,
            active,
            randomizer,
            score: 0,
            lines: 0,
            pieces: 0,
            episode: 0,
            state: RunState::Running,
        };
        game.award_spawn();

        info!(
            rows = config.rows,
            columns = config.columns,
            "new game started"
        );
        Ok(game)
    }

    /// Create a game with a deterministic piece sequence
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::new(config, PieceRandomizer::seeded(seed))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &PlacedPiece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == RunState::GameOver
    }

    /// Interval the driver should wait before the next tick
    pub fn tick_interval_ms(&self) -> u32 {
        tick_interval_ms(
            self.config.base_interval_ms,
            self.lines,
            self.config.lines_per_speedup,
        )
    }

    /// Timer tick: step the piece down once unless paused or over.
    ///
    /// Returns the interval to re-arm the timer with.
    pub fn on_tick(&mut self) -> u32 {
        if self.state.is_running() {
            self.step();
        }
        self.tick_interval_ms()
    }

    /// Apply an input command.
    ///
    /// Everything except `TogglePause` and `NewGame` is ignored unless the game
    /// is running. Returns whether the command changed anything.
    pub fn apply(&mut self, command: Command) -> bool {
        if !self.state.is_running() && !command.allowed_when_stopped() {
            return false;
        }

        match command {
            Command::MoveLeft => self.active.try_move_left(&self.board),
            Command::MoveRight => self.active.try_move_right(&self.board),
            Command::Rotate => self.active.try_rotate(&self.board),
            Command::SoftDrop => {
                self.step();
                true
            }
            Command::TogglePause => self.toggle_pause(),
            Command::NewGame => {
                self.reset();
                true
            }
        }
    }

    /// Move the active piece down one row, locking it if it has landed
    fn step(&mut self) -> MoveOutcome {
        let outcome = self.active.try_move_down(&self.board);
        if outcome == MoveOutcome::Landed {
            self.lock_active();
        }
        outcome
    }

    /// Copy the active piece into the board, clear lines, spawn the next piece
    /// and check whether it fits.
    fn lock_active(&mut self) {
        let cells = self.active.cells();
        self.board.place(&cells, self.active.color());
        debug!(kind = self.active.kind.as_str(), ?cells, "piece locked");

        let cleared = self.board.clear_full_lines();
        if cleared > 0 {
            self.lines = self.lines.saturating_add(cleared);
            self.score = self
                .score
                .saturating_add(line_clear_points(cleared, self.config.points_per_line));
            debug!(cleared, total = self.lines, "lines cleared");
        }

        self.spawn_piece();

        if !self.active.fits(&self.board) {
            self.state = RunState::GameOver;
            info!(
                score = self.score,
                lines = self.lines,
                pieces = self.pieces,
                "game over"
            );
        }
    }

    fn spawn_piece(&mut self) {
        self.active = PlacedPiece::spawn(self.randomizer.next_kind());
        self.award_spawn();
    }

    fn award_spawn(&mut self) {
        self.pieces = self.pieces.saturating_add(1);
        self.score = self.score.saturating_add(self.config.points_per_piece);
        debug!(kind = self.active.kind.as_str(), pieces = self.pieces, "piece spawned");
    }

    fn toggle_pause(&mut self) -> bool {
        self.state = match self.state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
            RunState::GameOver => return false,
        };
        info!(state = self.state.as_str(), "pause toggled");
        true
    }

    /// Start a new episode on the same board dimensions, continuing the piece stream
    fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.pieces = 0;
        self.episode = self.episode.wrapping_add(1);
        self.state = RunState::Running;
        self.spawn_piece();
        info!(episode = self.episode, "new game started");
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.columns = self.board.columns();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = Some(ActiveSnapshot::from(self.active));
        out.score = self.score;
        out.lines = self.lines;
        out.pieces = self.pieces;
        out.state = self.state;
        out.tick_interval_ms = self.tick_interval_ms();
        out.episode = self.episode;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    fn set_active(&mut self, piece: PlacedPiece) {
        assert!(piece.fits(&self.board), "staged piece must fit the board");
        self.active = piece;
    }
}
