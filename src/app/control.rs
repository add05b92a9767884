use std::time::{Duration, Instant};
use tracing::warn;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    /// Fresh game waiting to be started
    Ready,
    Playing,
    Paused,
    GameOver,
}

// combines the tick clock with game state management
pub struct Control {
    tick: Duration,
    last_update: Instant,

    // number of ticks that still need to be
    // performed to catch up with the current time
    missed_updates: Option<usize>,
    max_catch_up: usize,

    game_state: State,
}

impl Control {
    pub fn new(tick: Duration, max_catch_up: usize) -> Self {
        Self {
            tick,
            last_update: Instant::now(),
            missed_updates: None,
            max_catch_up: max_catch_up.max(1),
            game_state: State::Ready,
        }
    }

    pub fn can_update(&mut self) -> bool {
        self.can_update_at(Instant::now())
    }

    // repeatedly called in update() as while loop condition,
    // returns true once for every tick owed at `now`
    pub fn can_update_at(&mut self, now: Instant) -> bool {
        if self.game_state != State::Playing {
            return false;
        }

        match &mut self.missed_updates {
            Some(0) => {
                self.missed_updates = None;
                false
            }
            Some(n) => {
                *n -= 1;
                true
            }
            None => {
                let elapsed = now.saturating_duration_since(self.last_update);
                let mut owed = (elapsed.as_nanos() / self.tick.as_nanos().max(1)) as usize;
                if owed == 0 {
                    return false;
                }

                // keep the fractional part of a tick for next time
                self.last_update += self.tick * owed as u32;

                if owed > self.max_catch_up {
                    warn!(owed, skipped = owed - self.max_catch_up, "falling behind, skipping ticks");
                    owed = self.max_catch_up;
                    self.last_update = now;
                }

                self.missed_updates = Some(owed - 1);
                true
            }
        }
    }

    pub fn state(&self) -> State {
        self.game_state
    }

    pub fn play(&mut self) {
        self.play_at(Instant::now())
    }

    // the first tick happens one full period after starting
    pub fn play_at(&mut self, now: Instant) {
        self.game_state = State::Playing;
        self.last_update = now;
        self.missed_updates = None;
    }

    pub fn pause(&mut self) {
        self.game_state = State::Paused;
        self.missed_updates = None;
    }

    pub fn game_over(&mut self) {
        self.game_state = State::GameOver;
        self.missed_updates = None;
    }

    pub fn ready(&mut self) {
        self.game_state = State::Ready;
        self.missed_updates = None;
    }
}
