//! Session module - drives one game from the first level intro to game over
//!
//! The session owns the grid, the active piece and the counters. It is
//! advanced by two inputs only: [`GameSession::tick`] with elapsed time, and
//! commands (applied directly or queued). Everything goes through
//! `&mut self`, so piece mutation is single-writer by construction.
//!
//! Lifecycle of a piece: spawn -> fall (gravity and commands) -> a blocked
//! downward move locks it -> rows clear, counters update, game-over check,
//! level check -> next spawn. Spawning and locking run synchronously inside
//! the call that triggers them.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::catalog::PieceCatalog;
use crate::grid::Grid;
use crate::piece::ActivePiece;
use crate::rng::{PieceSource, UniformPieces};
use crate::scoring::{fall_interval_ms, score_for_rows, should_level_up};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Tunables fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for the default uniform piece source
    pub seed: u32,
    /// Intro pause before level 1
    pub first_intro_ms: u32,
    /// Intro pause before every later level
    pub intro_ms: u32,
}

impl SessionConfig {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            first_intro_ms: FIRST_LEVEL_INTRO_MS,
            intro_ms: LEVEL_INTRO_MS,
        }
    }

    /// Same seed, pieces spawn as soon as a level starts.
    pub fn without_intro(mut self) -> Self {
        self.first_intro_ms = 0;
        self.intro_ms = 0;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Complete game state
#[derive(Debug)]
pub struct GameSession {
    config: SessionConfig,
    catalog: PieceCatalog,
    source: Box<dyn PieceSource>,
    grid: Grid,
    active: Option<ActivePiece>,
    phase: Phase,
    score: u32,
    lines: u32,
    level: u32,
    /// Id of the most recently spawned piece (0 before the first spawn).
    piece_id: u32,
    fall_timer_ms: u32,
    commands: VecDeque<GameAction>,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a session with the standard catalog and a uniform piece source.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_parts(
            config,
            PieceCatalog::standard(),
            Box::new(UniformPieces::new(config.seed)),
        )
    }

    /// Create a session with an injected catalog and piece source.
    pub fn with_parts(
        config: SessionConfig,
        catalog: PieceCatalog,
        source: Box<dyn PieceSource>,
    ) -> Self {
        Self {
            config,
            catalog,
            source,
            grid: Grid::new(),
            active: None,
            phase: Phase::Ready,
            score: 0,
            lines: 0,
            level: 0,
            piece_id: 0,
            fall_timer_ms: 0,
            commands: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Run the first level check and begin play.
    ///
    /// With zero lines at level 0 the check always passes, so every game
    /// opens on level 1.
    pub fn start(&mut self) {
        if self.phase != Phase::Ready {
            return;
        }
        self.advance_level_or_spawn();
    }

    pub fn started(&self) -> bool {
        self.phase != Phase::Ready
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn catalog(&self) -> &PieceCatalog {
        &self.catalog
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for scenario setup and tooling.
    ///
    /// Bypasses piece legality; callers must not overlap the active piece.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    /// Absolute cells of the active piece
    pub fn active_cells(&self) -> Option<[(i8, i8); 4]> {
        self.active.as_ref().map(ActivePiece::cells)
    }

    /// Cells the active piece would occupy after a hard drop
    pub fn landing_cells(&self) -> Option<[(i8, i8); 4]> {
        let piece = self.active.as_ref()?;
        let (x, y) = piece.landing_anchor(&self.grid);
        Some(piece.shape().map(|(dx, dy)| (x + dx, y + dy)))
    }

    /// Current gravity period in milliseconds
    pub fn fall_interval_ms(&self) -> u32 {
        fall_interval_ms(self.level)
    }

    /// Queue a command for the next [`GameSession::tick`].
    pub fn push_command(&mut self, action: GameAction) {
        self.commands.push_back(action);
    }

    pub fn pending_commands(&self) -> usize {
        self.commands.len()
    }

    /// Take all events emitted since the last call, oldest first.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Apply a command immediately.
    ///
    /// Returns whether the piece moved or rotated (a hard drop always
    /// reports `true`). Commands are ignored outside the falling phase.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        match action {
            GameAction::Rotate => self.rotate(),
            GameAction::MoveLeft => self.move_piece(Direction::Left),
            GameAction::MoveRight => self.move_piece(Direction::Right),
            GameAction::MoveDown => self.move_piece(Direction::Down),
            GameAction::HardDrop => self.hard_drop(),
        }
    }

    /// Try to rotate the active piece; illegal rotations are ignored.
    pub fn rotate(&mut self) -> bool {
        match self.active.as_mut() {
            Some(piece) => piece.rotate(&self.grid),
            None => false,
        }
    }

    /// Try to move the active piece one cell.
    ///
    /// A blocked downward move locks the piece and returns `false`.
    pub fn move_piece(&mut self, direction: Direction) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if piece.shift(&self.grid, direction) {
            return true;
        }
        if direction == Direction::Down {
            self.lock_active();
        }
        false
    }

    pub fn move_left(&mut self) -> bool {
        self.move_piece(Direction::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_piece(Direction::Right)
    }

    pub fn move_down(&mut self) -> bool {
        self.move_piece(Direction::Down)
    }

    /// Drop the active piece as far as it goes and lock it.
    pub fn hard_drop(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        let rows = piece.drop_to_floor(&self.grid);
        debug!(piece_id = piece.piece_id(), rows, "hard drop");
        self.lock_active();
        true
    }

    /// Advance the session clock.
    ///
    /// Queued commands are applied first, in order. Then the level intro
    /// counts down, or gravity moves the piece one row per elapsed fall
    /// interval. Returns whether anything changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if matches!(self.phase, Phase::Ready | Phase::GameOver) {
            self.commands.clear();
            return false;
        }

        let mut changed = false;
        while let Some(action) = self.commands.pop_front() {
            changed |= self.apply_action(action);
        }

        match self.phase {
            Phase::LevelIntro {
                level,
                remaining_ms,
            } => {
                if elapsed_ms >= remaining_ms {
                    self.spawn_next();
                } else {
                    self.phase = Phase::LevelIntro {
                        level,
                        remaining_ms: remaining_ms - elapsed_ms,
                    };
                }
                changed = true;
            }
            Phase::Falling => {
                let interval = self.fall_interval_ms();
                self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
                while self.phase == Phase::Falling && self.fall_timer_ms >= interval {
                    self.fall_timer_ms -= interval;
                    self.move_piece(Direction::Down);
                    changed = true;
                }
            }
            Phase::Ready | Phase::GameOver => {}
        }

        changed
    }

    /// Serializable view for renderers.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_u8_grid(&mut out.grid);
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.landing = self.landing_cells();
        out.phase = self.phase;
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.fall_interval_ms = self.fall_interval_ms();
    }

    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        let kind = piece.kind();
        let piece_id = piece.piece_id();
        debug!(piece_id, kind = kind.as_str(), anchor = ?piece.anchor(), "piece locked");
        piece.lock_into(&mut self.grid);
        self.events.push(GameEvent::PieceLocked { kind, piece_id });
        self.on_piece_locked();
    }

    /// Clear rows, update counters, check game over, then level or spawn.
    fn on_piece_locked(&mut self) {
        let cleared = self.grid.clear_completed_rows();
        let count = cleared.len() as u32;
        if count > 0 {
            debug!(rows = ?cleared.as_slice(), "rows cleared");
            self.events.push(GameEvent::RowsCleared {
                rows: cleared.to_vec(),
            });
        }
        self.score += score_for_rows(count);
        self.lines += count;

        if self.grid.is_game_over() {
            self.enter_game_over();
            return;
        }

        self.advance_level_or_spawn();
    }

    /// Level check; a level-up discards the grid and shows the intro.
    fn advance_level_or_spawn(&mut self) {
        if !should_level_up(self.lines, self.level) {
            self.spawn_next();
            return;
        }

        self.level += 1;
        self.grid = Grid::new();
        self.fall_timer_ms = 0;
        info!(
            level = self.level,
            lines = self.lines,
            score = self.score,
            "level changed"
        );
        self.events.push(GameEvent::LevelChanged { level: self.level });

        let intro_ms = if self.level == 1 {
            self.config.first_intro_ms
        } else {
            self.config.intro_ms
        };
        if intro_ms == 0 {
            self.spawn_next();
        } else {
            self.phase = Phase::LevelIntro {
                level: self.level,
                remaining_ms: intro_ms,
            };
        }
    }

    fn spawn_next(&mut self) {
        let kind = self.source.next_kind();
        self.piece_id = self.piece_id.wrapping_add(1);
        let piece = ActivePiece::spawn(self.catalog.get(kind), self.piece_id);

        // The band check can miss a blocked spawn cell outside columns 1..=5.
        if !piece.is_legal(&self.grid) {
            debug!(kind = kind.as_str(), "spawn position blocked");
            self.enter_game_over();
            return;
        }

        self.events.push(GameEvent::PieceSpawned {
            kind,
            piece_id: self.piece_id,
        });
        self.active = Some(piece);
        self.phase = Phase::Falling;
        self.fall_timer_ms = 0;
    }

    fn enter_game_over(&mut self) {
        self.active = None;
        self.commands.clear();
        self.phase = Phase::GameOver;
        info!(
            score = self.score,
            lines = self.lines,
            level = self.level,
            "game over"
        );
        self.events.push(GameEvent::GameOver);
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
