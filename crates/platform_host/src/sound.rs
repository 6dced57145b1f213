//! Sound playback contracts and adapters.

use std::{cell::RefCell, rc::Rc};

/// Host service that plays short named clips.
///
/// Playback is fire-and-forget: callers log a returned error and move on. An unknown clip name is
/// not an error; implementations ignore it.
pub trait SoundService {
    /// Starts playing the clip registered under `clip`, rewinding it if already playing.
    fn play(&self, clip: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Sound service that plays nothing.
pub struct NoopSoundService;

impl SoundService for NoopSoundService {
    fn play(&self, _clip: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// Sound service that records requested clip names, for tests.
pub struct RecordingSoundService {
    played: Rc<RefCell<Vec<String>>>,
}

impl RecordingSoundService {
    /// Returns every clip requested so far, oldest first.
    pub fn played(&self) -> Vec<String> {
        self.played.borrow().clone()
    }
}

impl SoundService for RecordingSoundService {
    fn play(&self, clip: &str) -> Result<(), String> {
        self.played.borrow_mut().push(clip.to_string());
        Ok(())
    }
}
