use serde::{Deserialize, Serialize};

pub const INITIAL_DELAY_MS: u32 = 300;
pub const REPEAT_INTERVAL_MS: u32 = 100;

#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct RepeatTiming {
    pub initial_delay_ms: u32,
    pub repeat_interval_ms: u32,
}

impl Default for RepeatTiming {
    fn default() -> Self {
        Self {
            initial_delay_ms: INITIAL_DELAY_MS,
            repeat_interval_ms: REPEAT_INTERVAL_MS,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HoldPhase {
    #[default]
    Idle,
    WaitingInitialDelay,
    Repeating,
}

/// Handle for the one timer a hold may have pending.
///
/// The owner sleeps for [`HoldTicket::delay_ms`] and then hands the ticket
/// back to [`HoldMachine::fire`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HoldTicket {
    generation: u64,
    delay_ms: u32,
}

impl HoldTicket {
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

/// Press-and-hold state of a single repeat button.
///
/// Every `press` and `cancel` starts a new generation, so tickets from an
/// earlier hold are dead even if their timer still fires.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoldMachine {
    timing: RepeatTiming,
    phase: HoldPhase,
    generation: u64,
}

impl HoldMachine {
    pub fn new(timing: RepeatTiming) -> Self {
        Self {
            timing,
            phase: HoldPhase::Idle,
            generation: 0,
        }
    }

    pub fn phase(&self) -> HoldPhase {
        self.phase
    }

    pub fn timing(&self) -> RepeatTiming {
        self.timing
    }

    pub fn is_held(&self) -> bool {
        self.phase != HoldPhase::Idle
    }

    /// Starts a hold. The caller emits one step right away and arms the
    /// returned ticket.
    pub fn press(&mut self) -> HoldTicket {
        self.cancel();
        self.phase = HoldPhase::WaitingInitialDelay;
        HoldTicket {
            generation: self.generation,
            delay_ms: self.timing.initial_delay_ms,
        }
    }

    /// Called when the timer of `ticket` elapsed. `Some` means: emit a step
    /// and arm the returned ticket. `None` means the hold is over.
    pub fn fire(&mut self, ticket: HoldTicket) -> Option<HoldTicket> {
        if ticket.generation != self.generation {
            return None;
        }
        match self.phase {
            HoldPhase::Idle => None,
            HoldPhase::WaitingInitialDelay | HoldPhase::Repeating => {
                self.phase = HoldPhase::Repeating;
                Some(HoldTicket {
                    generation: self.generation,
                    delay_ms: self.timing.repeat_interval_ms,
                })
            }
        }
    }

    /// Switches to new timing. A hold in progress is cancelled.
    pub fn retime(&mut self, timing: RepeatTiming) {
        self.cancel();
        self.timing = timing;
    }

    /// Drops any pending timer. Returns whether a hold was active.
    pub fn cancel(&mut self) -> bool {
        let was_held = self.is_held();
        self.phase = HoldPhase::Idle;
        self.generation = self.generation.wrapping_add(1);
        was_held
    }
}

#[cfg(test)]
pub mod tests {
    use super::{HoldMachine, HoldPhase, HoldTicket, RepeatTiming};

    /// Drives a machine the way the button's timer loop does, on a fake clock.
    struct Clock {
        machine: HoldMachine,
        now: u32,
        pending: Option<(u32, HoldTicket)>,
        emitted: Vec<u32>,
    }

    impl Clock {
        fn new() -> Self {
            Self {
                machine: HoldMachine::default(),
                now: 0,
                pending: None,
                emitted: Vec::new(),
            }
        }

        fn press(&mut self) {
            let ticket = self.machine.press();
            self.emitted.push(self.now);
            self.pending = Some((self.now + ticket.delay_ms(), ticket));
        }

        fn release(&mut self) {
            self.machine.cancel();
        }

        fn advance_to(&mut self, until: u32) {
            while let Some((due, ticket)) = self.pending {
                if due > until {
                    break;
                }
                self.now = due;
                self.pending = match self.machine.fire(ticket) {
                    Some(next) => {
                        self.emitted.push(self.now);
                        Some((self.now + next.delay_ms(), next))
                    }
                    None => None,
                };
            }
            self.now = until;
        }
    }

    #[test]
    fn starts_idle() {
        let machine = HoldMachine::default();
        assert_eq!(machine.phase(), HoldPhase::Idle);
        assert_eq!(machine.timing(), RepeatTiming::default());
    }

    #[test]
    fn press_waits_for_initial_delay() {
        let mut machine = HoldMachine::default();
        let ticket = machine.press();
        assert_eq!(ticket.delay_ms(), 300);
        assert_eq!(machine.phase(), HoldPhase::WaitingInitialDelay);

        let next = machine.fire(ticket).unwrap();
        assert_eq!(next.delay_ms(), 100);
        assert_eq!(machine.phase(), HoldPhase::Repeating);
        assert_eq!(machine.fire(next).unwrap().delay_ms(), 100);
    }

    #[test]
    fn click_emits_once() {
        let mut clock = Clock::new();
        clock.press();
        clock.advance_to(120);
        clock.release();
        clock.advance_to(2000);
        assert_eq!(clock.emitted, vec![0]);
    }

    #[test]
    fn hold_repeats_after_initial_delay() {
        let mut clock = Clock::new();
        clock.press();
        clock.advance_to(299);
        assert_eq!(clock.emitted, vec![0]);
        clock.advance_to(300);
        assert_eq!(clock.emitted, vec![0, 300]);
        clock.advance_to(650);
        assert_eq!(clock.emitted, vec![0, 300, 400, 500, 600]);
        clock.release();
        clock.advance_to(5000);
        assert_eq!(clock.emitted.len(), 5);
        assert_eq!(clock.machine.phase(), HoldPhase::Idle);
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut machine = HoldMachine::default();
        let first = machine.press();
        let second = machine.press();
        assert_eq!(machine.fire(first), None);
        assert_eq!(machine.phase(), HoldPhase::WaitingInitialDelay);
        assert!(machine.fire(second).is_some());

        machine.cancel();
        assert_eq!(machine.fire(second), None);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut machine = HoldMachine::default();
        assert!(!machine.cancel());
        machine.press();
        assert!(machine.cancel());
        assert!(!machine.cancel());
        assert_eq!(machine.phase(), HoldPhase::Idle);
    }

    #[test]
    fn reusable_across_presses() {
        let mut clock = Clock::new();
        clock.press();
        clock.advance_to(400);
        clock.release();
        clock.advance_to(1000);
        clock.press();
        clock.advance_to(1300);
        clock.release();
        assert_eq!(clock.emitted, vec![0, 300, 400, 1000, 1300]);
    }

    #[test]
    fn custom_timing() {
        let mut machine = HoldMachine::new(RepeatTiming {
            initial_delay_ms: 500,
            repeat_interval_ms: 50,
        });
        let ticket = machine.press();
        assert_eq!(ticket.delay_ms(), 500);
        assert_eq!(machine.fire(ticket).map(|t| t.delay_ms()), Some(50));
    }

    #[test]
    fn timing_from_partial_json() {
        let timing: RepeatTiming = serde_json::from_str(r#"{"repeat_interval_ms": 40}"#).unwrap();
        assert_eq!(timing.initial_delay_ms, 300);
        assert_eq!(timing.repeat_interval_ms, 40);
    }

    #[test]
    fn retime_cancels_hold_in_progress() {
        let mut machine = HoldMachine::default();
        let ticket = machine.press();
        let timing = RepeatTiming {
            initial_delay_ms: 200,
            repeat_interval_ms: 60,
        };
        machine.retime(timing);
        assert_eq!(machine.timing(), timing);
        assert_eq!(machine.phase(), HoldPhase::Idle);
        assert_eq!(machine.fire(ticket), None);
        assert_eq!(machine.press().delay_ms(), 200);
    }

    #[test]
    fn finished_hold_is_not_held() {
        let mut machine = HoldMachine::default();
        assert!(!machine.is_held());
        let ticket = machine.press();
        assert!(machine.is_held());
        machine.cancel();
        assert_eq!(machine.fire(ticket), None);
        assert!(!machine.is_held());
    }
}
