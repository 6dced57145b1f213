//! Discrete-tick snake simulation.
//!
//! The engine never touches a timer, a canvas or storage. Every transition returns the
//! [`SnakeEffect`] values the host must execute (start/stop the ticker, persist the high score,
//! play a sound), so a whole game can be driven from tests by applying [`SnakeAction::Tick`].

use desktop_app_contract::SoundCue;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Rejection-sampling attempts before food placement falls back to scanning free cells.
const FOOD_SAMPLE_ATTEMPTS: usize = 64;

/// Grid and pacing parameters for one engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub start_interval_ms: u32,
    pub interval_step_ms: u32,
    pub min_interval_ms: u32,
    pub points_per_food: u32,
    pub points_per_level: u32,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            start_interval_ms: 150,
            interval_step_ms: 20,
            min_interval_ms: 50,
            points_per_food: 10,
            points_per_level: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Maps a keyboard `key` value to a direction.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }

    /// Maps a swipe displacement to a direction. The dominant axis wins; a zero swipe is ignored.
    pub fn from_swipe(dx: i32, dy: i32) -> Option<Self> {
        if dx == 0 && dy == 0 {
            return None;
        }
        if dx.abs() > dy.abs() {
            Some(if dx > 0 { Self::Right } else { Self::Left })
        } else {
            Some(if dy > 0 { Self::Down } else { Self::Up })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnakeStatus {
    Idle,
    Running,
    Paused,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeAction {
    /// Start a fresh run. Ignored while already running.
    Start,
    /// Toggle `Running` and `Paused`.
    TogglePause,
    /// Return to a freshly initialized idle board.
    Reset,
    /// Stop the ticker but keep the board for display (modal closed).
    Stop,
    /// Request a direction change for the next tick.
    Steer(Direction),
    /// One scheduler step.
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeEffect {
    /// (Re)start the ticker at this interval, replacing any running ticker.
    StartTicker { interval_ms: u32 },
    /// Clear the ticker handle.
    StopTicker,
    /// Persist a new high score.
    PersistHighScore(u32),
    PlaySound(SoundCue),
    /// The run ended; the host announces the result.
    GameOver { score: u32, high_score: u32 },
}

#[derive(Debug, Clone)]
pub struct SnakeEngine {
    config: SnakeConfig,
    rng: SmallRng,
    segments: Vec<Cell>,
    direction: Direction,
    pending_direction: Direction,
    food: Cell,
    score: u32,
    level: u32,
    tick_interval_ms: u32,
    high_score: u32,
    status: SnakeStatus,
}

impl SnakeEngine {
    /// Creates an idle engine. `seed` drives food placement; `high_score` is the persisted best.
    pub fn new(config: SnakeConfig, seed: u64, high_score: u32) -> Self {
        let mut engine = Self {
            config,
            rng: SmallRng::seed_from_u64(seed),
            segments: Vec::new(),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food: Cell::new(0, 0),
            score: 0,
            level: 1,
            tick_interval_ms: config.start_interval_ms,
            high_score,
            status: SnakeStatus::Idle,
        };
        engine.reset_board();
        engine
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    /// Head-first body cells.
    pub fn segments(&self) -> &[Cell] {
        &self.segments
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn status(&self) -> SnakeStatus {
        self.status
    }

    /// Whether direction input from the keyboard or swipes should be honored.
    pub fn accepts_live_input(&self) -> bool {
        self.status == SnakeStatus::Running
    }

    /// Merges a high score loaded from storage. The high score never decreases.
    pub fn hydrate_high_score(&mut self, stored: u32) {
        self.high_score = self.high_score.max(stored);
    }

    pub fn apply(&mut self, action: SnakeAction) -> Vec<SnakeEffect> {
        match action {
            SnakeAction::Start => self.start(),
            SnakeAction::TogglePause => self.toggle_pause(),
            SnakeAction::Reset => {
                self.reset_board();
                vec![
                    SnakeEffect::StopTicker,
                    SnakeEffect::PlaySound(SoundCue::Click),
                ]
            }
            SnakeAction::Stop => self.stop(),
            SnakeAction::Steer(direction) => {
                self.steer(direction);
                vec![SnakeEffect::PlaySound(SoundCue::Click)]
            }
            SnakeAction::Tick => self.tick(),
        }
    }

    /// Queues `direction` for the next tick unless it reverses the committed direction.
    ///
    /// Returns whether the request was accepted.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    fn start(&mut self) -> Vec<SnakeEffect> {
        if self.status == SnakeStatus::Running {
            return Vec::new();
        }
        self.reset_board();
        self.status = SnakeStatus::Running;
        vec![
            SnakeEffect::PlaySound(SoundCue::Game),
            SnakeEffect::StartTicker {
                interval_ms: self.tick_interval_ms,
            },
        ]
    }

    fn toggle_pause(&mut self) -> Vec<SnakeEffect> {
        match self.status {
            SnakeStatus::Running => {
                self.status = SnakeStatus::Paused;
                vec![
                    SnakeEffect::PlaySound(SoundCue::Click),
                    SnakeEffect::StopTicker,
                ]
            }
            SnakeStatus::Paused => {
                self.status = SnakeStatus::Running;
                vec![
                    SnakeEffect::PlaySound(SoundCue::Click),
                    SnakeEffect::StartTicker {
                        interval_ms: self.tick_interval_ms,
                    },
                ]
            }
            SnakeStatus::Idle | SnakeStatus::GameOver => Vec::new(),
        }
    }

    fn stop(&mut self) -> Vec<SnakeEffect> {
        if matches!(self.status, SnakeStatus::Running | SnakeStatus::Paused) {
            self.status = SnakeStatus::Idle;
        }
        vec![SnakeEffect::StopTicker]
    }

    fn reset_board(&mut self) {
        let cx = self.config.grid_width / 2;
        let cy = self.config.grid_height / 2;
        self.segments = vec![Cell::new(cx, cy), Cell::new(cx - 1, cy), Cell::new(cx - 2, cy)];
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.level = 1;
        self.tick_interval_ms = self.config.start_interval_ms;
        self.status = SnakeStatus::Idle;
        if let Some(food) = self.sample_food() {
            self.food = food;
        }
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.config.grid_width).contains(&cell.x)
            && (0..self.config.grid_height).contains(&cell.y)
    }

    fn tick(&mut self) -> Vec<SnakeEffect> {
        if self.status != SnakeStatus::Running {
            return Vec::new();
        }

        self.direction = self.pending_direction;
        let Some(&head) = self.segments.first() else {
            return self.game_over();
        };
        let next = head.step(self.direction);

        if !self.in_bounds(next) || self.segments.contains(&next) {
            return self.game_over();
        }

        self.segments.insert(0, next);

        if next != self.food {
            self.segments.pop();
            return Vec::new();
        }

        let mut effects = vec![SnakeEffect::PlaySound(SoundCue::Game)];
        let previous = self.score;
        self.score += self.config.points_per_food;
        if self.score > self.high_score {
            self.high_score = self.score;
            effects.push(SnakeEffect::PersistHighScore(self.high_score));
        }

        let per_level = self.config.points_per_level.max(1);
        if self.score / per_level > previous / per_level {
            self.level += 1;
            self.tick_interval_ms = self
                .tick_interval_ms
                .saturating_sub(self.config.interval_step_ms)
                .max(self.config.min_interval_ms);
            effects.push(SnakeEffect::PlaySound(SoundCue::ThemeChange));
            effects.push(SnakeEffect::StartTicker {
                interval_ms: self.tick_interval_ms,
            });
        }

        match self.sample_food() {
            Some(food) => self.food = food,
            // Board is full: nothing left to eat.
            None => effects.extend(self.game_over()),
        }
        effects
    }

    fn game_over(&mut self) -> Vec<SnakeEffect> {
        self.status = SnakeStatus::GameOver;
        vec![
            SnakeEffect::StopTicker,
            SnakeEffect::PlaySound(SoundCue::Error),
            SnakeEffect::GameOver {
                score: self.score,
                high_score: self.high_score,
            },
        ]
    }

    /// Picks a uniformly random unoccupied cell, or `None` when the body fills the grid.
    fn sample_food(&mut self) -> Option<Cell> {
        let (w, h) = (self.config.grid_width, self.config.grid_height);
        if w <= 0 || h <= 0 {
            return None;
        }
        for _ in 0..FOOD_SAMPLE_ATTEMPTS {
            let cell = Cell::new(self.rng.gen_range(0..w), self.rng.gen_range(0..h));
            if !self.segments.contains(&cell) {
                return Some(cell);
            }
        }

        let free: Vec<Cell> = (0..h)
            .flat_map(|y| (0..w).map(move |x| Cell::new(x, y)))
            .filter(|cell| !self.segments.contains(cell))
            .collect();
        if free.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..free.len());
        Some(free[index])
    }
}
