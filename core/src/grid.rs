use std::collections::{HashSet, VecDeque};

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

/// Overall game progress. Valid transitions: `Playing -> Won` and
/// `Playing -> Lost`; a finished grid accepts no further moves.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Result of a reveal: the merged outcome plus every plate the call opened,
/// target first, each with its adjacent-mine count. Callers iterate `opened`
/// to update visuals instead of re-scanning the board.
#[derive(Clone, Debug, PartialEq)]
pub struct Reveal {
    pub outcome: RevealOutcome,
    pub opened: Vec<Opened>,
}

impl Reveal {
    fn no_change() -> Self {
        Self {
            outcome: RevealOutcome::NoChange,
            opened: Vec::new(),
        }
    }
}

/// One game of minesweeper: mine placement, per-plate visible state, flag
/// bookkeeping, the elapsed-time clock, and win/loss tracking.
#[derive(Clone, Debug)]
pub struct MinesGrid {
    config: GameConfig,
    minefield: Minefield,
    board: Array2<PlateState>,
    correct_flags: CellCount,
    wrong_flags: CellCount,
    revealed_safe: CellCount,
    state: GameState,
    triggered_mine: Option<Pos>,
    started_at: Option<Instant>,
    stopped_at: Option<Instant>,
}

impl MinesGrid {
    /// A grid sized for `config` with no mines dealt yet. Call [`run`] to
    /// start a game.
    ///
    /// [`run`]: MinesGrid::run
    pub fn new(config: GameConfig) -> Self {
        let minefield = Minefield::empty(config);
        let board = Array2::default(minefield.mine_mask_dim());
        Self {
            config,
            minefield,
            board,
            correct_flags: 0,
            wrong_flags: 0,
            revealed_safe: 0,
            state: GameState::Playing,
            triggered_mine: None,
            started_at: None,
            stopped_at: None,
        }
    }

    /// Starts a new game: fresh plates, `config.mines` mines at distinct
    /// uniformly random positions drawn from `seed`, counters reset, clock
    /// running.
    pub fn run(&mut self, seed: u64) {
        self.run_with(RandomMinefieldGenerator::new(seed).generate(self.config));
    }

    /// [`run`] with a pre-built minefield; the grid adopts its dimensions and
    /// mine count. Used for fixed layouts in tests.
    ///
    /// [`run`]: MinesGrid::run
    pub fn run_with(&mut self, minefield: Minefield) {
        self.config = minefield.game_config();
        self.board = Array2::default(minefield.mine_mask_dim());
        self.minefield = minefield;
        self.correct_flags = 0;
        self.wrong_flags = 0;
        self.revealed_safe = 0;
        self.state = GameState::Playing;
        self.triggered_mine = None;
        self.started_at = Some(Instant::now());
        self.stopped_at = None;
        log::debug!(
            "new game: {}x{} with {} mines",
            self.config.width,
            self.config.height,
            self.config.mines
        );
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn is_in_grid(&self, row: Coord, col: Coord) -> bool {
        self.minefield.in_bounds((row, col))
    }

    /// Safe probe: `false` off the grid or on an unmined plate. Neighbor
    /// scans near the border call this without bounds-checking first.
    pub fn is_bomb(&self, row: Coord, col: Coord) -> bool {
        self.minefield.contains_mine((row, col))
    }

    /// Safe probe: `false` off the grid.
    pub fn is_flagged(&self, row: Coord, col: Coord) -> bool {
        self.is_in_grid(row, col) && self.board[(row, col).to_nd_index()].is_flagged()
    }

    /// Visible state of one plate, `None` off the grid.
    pub fn plate_at(&self, row: Coord, col: Coord) -> Option<PlateState> {
        self.is_in_grid(row, col)
            .then(|| self.board[(row, col).to_nd_index()])
    }

    /// Flags currently placed, right or wrong.
    pub fn flagged_mines(&self) -> CellCount {
        self.correct_flags + self.wrong_flags
    }

    /// What the counter widget shows: total mines minus placed flags.
    pub fn mines_left(&self) -> isize {
        self.minefield.mine_count() as isize - self.flagged_mines() as isize
    }

    /// The mine whose reveal lost the game, if any.
    pub fn triggered_mine(&self) -> Option<Pos> {
        self.triggered_mine
    }

    /// Whole seconds since [`run`], frozen once the clock stops.
    ///
    /// [`run`]: MinesGrid::run
    pub fn elapsed_secs(&self) -> u32 {
        match self.started_at {
            Some(started) => {
                let end = self.stopped_at.unwrap_or_else(Instant::now);
                end.duration_since(started).as_secs() as u32
            }
            None => 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.stopped_at.is_none()
    }

    /// Halts the clock. Idempotent; does not change the game state.
    pub fn stop(&mut self) {
        if self.is_running() {
            self.stopped_at = Some(Instant::now());
        }
    }

    /// Toggles the flag on a plate. Flags block reveals; placing or clearing
    /// one adjusts the right/wrong tallies the win check reads. Revealed
    /// plates and finished games are a no-op. Out-of-grid coordinates fail
    /// with [`GameError::InvalidReference`].
    pub fn toggle_flag(&mut self, row: Coord, col: Coord) -> Result<FlagOutcome> {
        let pos = self.minefield.validate((row, col))?;

        if self.state.is_finished() {
            return Ok(FlagOutcome::NoChange);
        }

        let idx = pos.to_nd_index();
        let outcome = match self.board[idx] {
            PlateState::Hidden => {
                self.board[idx] = PlateState::Flagged;
                if self.minefield.contains_mine(pos) {
                    self.correct_flags += 1;
                } else {
                    self.wrong_flags += 1;
                }
                FlagOutcome::Changed
            }
            PlateState::Flagged => {
                self.board[idx] = PlateState::Hidden;
                if self.minefield.contains_mine(pos) {
                    self.correct_flags -= 1;
                } else {
                    self.wrong_flags -= 1;
                }
                FlagOutcome::Changed
            }
            PlateState::Revealed(_) => FlagOutcome::NoChange,
        };

        self.check_finish();
        Ok(outcome)
    }

    /// Reveals a plate. Flagged or already-revealed targets are a degenerate
    /// no-op. Revealing a mine records it, loses the game, and stops the
    /// clock. A target with zero adjacent mines flood-fills its whole
    /// zero-region plus the numbered boundary. Out-of-grid coordinates fail
    /// with [`GameError::InvalidReference`].
    pub fn reveal(&mut self, row: Coord, col: Coord) -> Result<Reveal> {
        let pos = self.minefield.validate((row, col))?;

        if self.state.is_finished() {
            return Ok(Reveal::no_change());
        }

        let idx = pos.to_nd_index();
        if !matches!(self.board[idx], PlateState::Hidden) {
            return Ok(Reveal::no_change());
        }

        if self.minefield.contains_mine(pos) {
            let adjacent = self.minefield.adjacent_mines(pos);
            self.board[idx] = PlateState::Revealed(adjacent);
            self.triggered_mine = Some(pos);
            self.state = GameState::Lost;
            self.stop();
            log::debug!("mine hit at {:?}", pos);
            return Ok(Reveal {
                outcome: RevealOutcome::HitMine,
                opened: vec![Opened { pos, adjacent }],
            });
        }

        // Explicit work list instead of plate-to-plate recursion, so deep
        // cascades cannot exhaust the call stack. Revealed plates
        // short-circuit, which is what terminates cyclic regions.
        let mut opened = Vec::new();
        let mut to_visit = VecDeque::from([pos]);
        let mut visited: HashSet<Pos> = HashSet::new();

        while let Some(visit) = to_visit.pop_front() {
            if !visited.insert(visit) {
                continue;
            }

            let idx = visit.to_nd_index();
            if !matches!(self.board[idx], PlateState::Hidden) {
                continue;
            }

            let adjacent = self.minefield.adjacent_mines(visit);
            self.board[idx] = PlateState::Revealed(adjacent);
            self.revealed_safe += 1;
            opened.push(Opened {
                pos: visit,
                adjacent,
            });
            log::trace!("opened plate at {:?}, adjacent mines: {}", visit, adjacent);

            // A zero count means no neighbor is mined, so all eight are safe
            // to enqueue; bounds and plate state are checked per neighbor.
            if adjacent == 0 {
                to_visit.extend(
                    neighbors(visit)
                        .filter(|&p| self.minefield.in_bounds(p))
                        .filter(|&p| matches!(self.board[p.to_nd_index()], PlateState::Hidden))
                        .filter(|p| !visited.contains(p)),
                );
            }
        }

        self.check_finish();
        let outcome = if self.state == GameState::Won {
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        };
        log::debug!("opened {} plates from {:?}", opened.len(), pos);
        Ok(Reveal { outcome, opened })
    }

    /// Win requires exact flagging: no wrong flags, every mine flagged, and
    /// every safe plate revealed. Runs after each reveal and flag toggle; on
    /// success the state flips to `Won` and the clock stops.
    fn check_finish(&mut self) {
        if self.state.is_finished() {
            return;
        }

        let finished = self.wrong_flags == 0
            && self.flagged_mines() == self.minefield.mine_count()
            && self.revealed_safe == self.minefield.safe_cell_count();

        if finished {
            self.state = GameState::Won;
            self.stop();
            log::debug!("game won after {}s", self.elapsed_secs());
        }
    }
}
