//! Pure projection of engine state into something drawable.

use crate::engine::{Cell, SnakeEngine, SnakeStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Head,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCell {
    pub cell: Cell,
    pub kind: CellKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOverlay {
    Paused,
    GameOver { score: u32, high_score: u32 },
}

impl FrameOverlay {
    /// Lines drawn centered over the board.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Paused => vec!["PAUSED".to_string()],
            Self::GameOver { score, high_score } => vec![
                "GAME OVER".to_string(),
                format!("Score: {score}"),
                format!("High Score: {high_score}"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeFrame {
    pub grid_width: i32,
    pub grid_height: i32,
    pub cells: Vec<FrameCell>,
    pub food: Cell,
    pub score: u32,
    pub level: u32,
    pub high_score: u32,
    pub overlay: Option<FrameOverlay>,
    pub start_label: &'static str,
    pub pause_label: &'static str,
}

pub fn frame(engine: &SnakeEngine) -> SnakeFrame {
    let cells = engine
        .segments()
        .iter()
        .enumerate()
        .map(|(index, cell)| FrameCell {
            cell: *cell,
            kind: if index == 0 {
                CellKind::Head
            } else {
                CellKind::Body
            },
        })
        .collect();

    let overlay = match engine.status() {
        SnakeStatus::Paused => Some(FrameOverlay::Paused),
        SnakeStatus::GameOver => Some(FrameOverlay::GameOver {
            score: engine.score(),
            high_score: engine.high_score(),
        }),
        SnakeStatus::Idle | SnakeStatus::Running => None,
    };

    SnakeFrame {
        grid_width: engine.config().grid_width,
        grid_height: engine.config().grid_height,
        cells,
        food: engine.food(),
        score: engine.score(),
        level: engine.level(),
        high_score: engine.high_score(),
        overlay,
        start_label: match engine.status() {
            SnakeStatus::Running | SnakeStatus::Paused | SnakeStatus::GameOver => "Restart",
            SnakeStatus::Idle => "Start Game",
        },
        pause_label: if engine.status() == SnakeStatus::Paused {
            "Resume"
        } else {
            "Pause"
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::engine::{SnakeAction, SnakeConfig};

    #[test]
    fn idle_frame_marks_head_and_has_no_overlay() {
        let engine = SnakeEngine::new(SnakeConfig::default(), 1, 40);
        let frame = frame(&engine);

        assert_eq!(frame.cells.len(), 3);
        assert_eq!(frame.cells[0].kind, CellKind::Head);
        assert!(frame.cells[1..].iter().all(|c| c.kind == CellKind::Body));
        assert_eq!(frame.overlay, None);
        assert_eq!(frame.high_score, 40);
        assert_eq!(frame.start_label, "Start Game");
        assert_eq!(frame.pause_label, "Pause");
    }

    #[test]
    fn paused_frame_shows_overlay_and_resume_label() {
        let mut engine = SnakeEngine::new(SnakeConfig::default(), 1, 0);
        engine.apply(SnakeAction::Start);
        engine.apply(SnakeAction::TogglePause);
        let frame = frame(&engine);

        assert_eq!(frame.overlay, Some(FrameOverlay::Paused));
        assert_eq!(frame.pause_label, "Resume");
        assert_eq!(frame.start_label, "Restart");
    }

    #[test]
    fn game_over_overlay_lists_score_lines() {
        let overlay = FrameOverlay::GameOver {
            score: 30,
            high_score: 120,
        };
        assert_eq!(
            overlay.lines(),
            vec!["GAME OVER", "Score: 30", "High Score: 120"]
        );
    }
}
