//! Named-phase sequencing for boot, shutdown and delayed dialogs.
//!
//! Every deferred shell behavior is data: a [`PhaseSequence`] of `(phase, duration)` pairs plus a
//! queue of delayed dialogs, both advanced by elapsed milliseconds. The host drives them from one
//! interval; tests drive them directly.

use desktop_app_contract::DialogRequest;
use serde::{Deserialize, Serialize};

/// Boot progress steps: `(percent, status text)`.
pub const BOOT_STEPS: [(u8, &str); 7] = [
    (10, "Checking system configuration..."),
    (25, "Loading kernel..."),
    (40, "Initializing drivers..."),
    (55, "Starting services..."),
    (70, "Loading desktop environment..."),
    (85, "Applying settings..."),
    (100, "Welcome to Portfolio OS!"),
];

pub const POWER_ON_MS: u32 = 500;
pub const BOOT_STEP_MS: u32 = 500;
pub const FINALIZING_MS: u32 = 1000;
pub const DESKTOP_REVEAL_MS: u32 = 500;
pub const SHUTDOWN_CLOSING_MS: u32 = 500;
pub const POWERED_OFF_MS: u32 = 5000;

/// Ordered `(phase, duration_ms)` list advanced by elapsed time.
///
/// The first [`advance`](Self::advance) enters the first phase. Each phase is reported once, when
/// entered; a zero-length phase is entered and left within the same advance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSequence<P> {
    steps: Vec<(P, u32)>,
    index: usize,
    elapsed_ms: u32,
    started: bool,
}

impl<P: Clone> PhaseSequence<P> {
    pub fn new(steps: Vec<(P, u32)>) -> Self {
        Self {
            steps,
            index: 0,
            elapsed_ms: 0,
            started: false,
        }
    }

    /// Adds `elapsed_ms` and returns the phases entered, in order.
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<P> {
        let mut entered = Vec::new();
        if !self.started {
            self.started = true;
            if let Some((phase, _)) = self.steps.first() {
                entered.push(phase.clone());
            }
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        while let Some((_, duration)) = self.steps.get(self.index) {
            if self.elapsed_ms < *duration {
                break;
            }
            self.elapsed_ms -= *duration;
            self.index += 1;
            if let Some((phase, _)) = self.steps.get(self.index) {
                entered.push(phase.clone());
            }
        }
        entered
    }

    pub fn current(&self) -> Option<&P> {
        if !self.started {
            return None;
        }
        self.steps.get(self.index).map(|(phase, _)| phase)
    }

    pub fn is_finished(&self) -> bool {
        self.started && self.index >= self.steps.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Greeting {
    FirstBoot,
    Restart,
}

impl Greeting {
    pub fn dialog(self) -> DialogRequest {
        match self {
            Self::FirstBoot => DialogRequest::new(
                "Welcome",
                "Welcome to my Windows 95 portfolio! Double-click icons or use the Start menu to explore.",
            ),
            Self::Restart => DialogRequest::new("System Restarted", "Welcome back!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShellPhase {
    PowerOn,
    /// Index into [`BOOT_STEPS`].
    BootProgress(usize),
    Finalizing,
    DesktopReveal,
    Greet(Greeting),
    ShutdownClosing,
    PoweredOff,
}

/// Which full-screen surface is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShellScreen {
    /// Boot splash; `step` indexes [`BOOT_STEPS`] once progress starts.
    Boot { step: Option<usize> },
    Desktop,
    Shutdown,
}

impl ShellScreen {
    fn for_phase(phase: ShellPhase) -> Self {
        match phase {
            ShellPhase::PowerOn => Self::Boot { step: None },
            ShellPhase::BootProgress(step) => Self::Boot { step: Some(step) },
            ShellPhase::Finalizing => Self::Boot {
                step: Some(BOOT_STEPS.len() - 1),
            },
            ShellPhase::DesktopReveal | ShellPhase::Greet(_) | ShellPhase::ShutdownClosing => {
                Self::Desktop
            }
            ShellPhase::PoweredOff => Self::Shutdown,
        }
    }

    /// Progress text for the boot splash: `(percent, status)`.
    pub fn boot_progress(self) -> Option<(u8, &'static str)> {
        match self {
            Self::Boot { step: Some(step) } => BOOT_STEPS.get(step).copied(),
            _ => None,
        }
    }
}

pub fn boot_sequence(greeting: Greeting) -> Vec<(ShellPhase, u32)> {
    let mut steps = vec![(ShellPhase::PowerOn, POWER_ON_MS)];
    steps.extend((0..BOOT_STEPS.len()).map(|step| (ShellPhase::BootProgress(step), BOOT_STEP_MS)));
    steps.push((ShellPhase::Finalizing, FINALIZING_MS));
    steps.push((ShellPhase::DesktopReveal, DESKTOP_REVEAL_MS));
    steps.push((ShellPhase::Greet(greeting), 0));
    steps
}

pub fn shutdown_sequence() -> Vec<(ShellPhase, u32)> {
    let mut steps = vec![
        (ShellPhase::ShutdownClosing, SHUTDOWN_CLOSING_MS),
        (ShellPhase::PoweredOff, POWERED_OFF_MS),
    ];
    steps.extend(boot_sequence(Greeting::Restart));
    steps
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct DelayedDialog {
    remaining_ms: u32,
    dialog: DialogRequest,
}

/// Output of one [`Scheduler::advance`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchedulerTick {
    pub phases: Vec<ShellPhase>,
    pub dialogs: Vec<DialogRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheduler {
    sequence: Option<PhaseSequence<ShellPhase>>,
    delayed: Vec<DelayedDialog>,
    screen: ShellScreen,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self {
            sequence: None,
            delayed: Vec::new(),
            screen: ShellScreen::Boot { step: None },
        }
    }
}

impl Scheduler {
    pub fn screen(&self) -> ShellScreen {
        self.screen
    }

    pub fn current_phase(&self) -> Option<ShellPhase> {
        self.sequence.as_ref().and_then(|s| s.current().copied())
    }

    /// Replaces any running sequence and enters its first phase.
    pub fn start(&mut self, steps: Vec<(ShellPhase, u32)>) -> Vec<ShellPhase> {
        let mut sequence = PhaseSequence::new(steps);
        let entered = sequence.advance(0);
        self.sequence = Some(sequence);
        self.track(&entered);
        entered
    }

    pub fn queue_dialog(&mut self, delay_ms: u32, dialog: DialogRequest) {
        self.delayed.push(DelayedDialog {
            remaining_ms: delay_ms,
            dialog,
        });
    }

    pub fn advance(&mut self, elapsed_ms: u32) -> SchedulerTick {
        let mut tick = SchedulerTick::default();

        if let Some(sequence) = self.sequence.as_mut() {
            tick.phases = sequence.advance(elapsed_ms);
            if sequence.is_finished() {
                self.sequence = None;
            }
        }
        self.track(&tick.phases);

        let mut pending = Vec::with_capacity(self.delayed.len());
        for mut delayed in self.delayed.drain(..) {
            if delayed.remaining_ms <= elapsed_ms {
                tick.dialogs.push(delayed.dialog);
            } else {
                delayed.remaining_ms -= elapsed_ms;
                pending.push(delayed);
            }
        }
        self.delayed = pending;

        tick
    }

    /// True when nothing is waiting on the clock.
    pub fn is_idle(&self) -> bool {
        self.sequence.is_none() && self.delayed.is_empty()
    }

    fn track(&mut self, entered: &[ShellPhase]) {
        if let Some(last) = entered.last() {
            self.screen = ShellScreen::for_phase(*last);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn first_advance_enters_first_phase() {
        let mut sequence = PhaseSequence::new(vec![("a", 100), ("b", 50)]);
        assert_eq!(sequence.current(), None);
        assert_eq!(sequence.advance(0), vec!["a"]);
        assert_eq!(sequence.current(), Some(&"a"));
        assert!(sequence.advance(99).is_empty());
        assert_eq!(sequence.advance(1), vec!["b"]);
    }

    #[test]
    fn large_advance_reports_every_phase_once() {
        let mut sequence = PhaseSequence::new(vec![("a", 10), ("b", 10), ("c", 10)]);
        assert_eq!(sequence.advance(25), vec!["a", "b", "c"]);
        assert!(!sequence.is_finished());
        assert!(sequence.advance(4).is_empty());
        assert!(sequence.advance(1).is_empty());
        assert!(sequence.is_finished());
    }

    #[test]
    fn zero_length_phase_is_entered_and_passed() {
        let mut sequence = PhaseSequence::new(vec![("a", 10), ("marker", 0), ("b", 10)]);
        sequence.advance(0);
        assert_eq!(sequence.advance(10), vec!["marker", "b"]);
        assert_eq!(sequence.current(), Some(&"b"));
    }

    #[test]
    fn boot_reaches_greeting_after_original_timings() {
        let mut scheduler = Scheduler::default();
        assert_eq!(scheduler.start(boot_sequence(Greeting::FirstBoot)), vec![ShellPhase::PowerOn]);

        let tick = scheduler.advance(500);
        assert_eq!(tick.phases, vec![ShellPhase::BootProgress(0)]);
        assert_eq!(scheduler.screen().boot_progress(), Some((10, "Checking system configuration...")));

        let tick = scheduler.advance(3000);
        assert_eq!(tick.phases.last(), Some(&ShellPhase::BootProgress(6)));

        let tick = scheduler.advance(500);
        assert_eq!(tick.phases, vec![ShellPhase::Finalizing]);
        let tick = scheduler.advance(1000);
        assert_eq!(tick.phases, vec![ShellPhase::DesktopReveal]);
        assert_eq!(scheduler.screen(), ShellScreen::Desktop);
        let tick = scheduler.advance(500);
        assert_eq!(tick.phases, vec![ShellPhase::Greet(Greeting::FirstBoot)]);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn shutdown_goes_dark_then_reboots() {
        let mut scheduler = Scheduler::default();
        scheduler.start(shutdown_sequence());
        assert_eq!(scheduler.screen(), ShellScreen::Desktop);
        scheduler.advance(500);
        assert_eq!(scheduler.screen(), ShellScreen::Shutdown);
        let tick = scheduler.advance(5000);
        assert_eq!(tick.phases, vec![ShellPhase::PowerOn]);
        assert_eq!(scheduler.screen(), ShellScreen::Boot { step: None });
        let tick = scheduler.advance(60_000);
        assert_eq!(tick.phases.last(), Some(&ShellPhase::Greet(Greeting::Restart)));
    }

    #[test]
    fn delayed_dialog_fires_once_when_due() {
        let mut scheduler = Scheduler::default();
        scheduler.queue_dialog(500, DialogRequest::new("Snake Game", "Game Over!"));
        assert!(scheduler.advance(400).dialogs.is_empty());
        assert!(!scheduler.is_idle());
        assert_eq!(
            scheduler.advance(100).dialogs,
            vec![DialogRequest::new("Snake Game", "Game Over!")]
        );
        assert!(scheduler.is_idle());
    }
}
