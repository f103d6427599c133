//! Level and outcome state machine.
//!
//! ```text
//!   start ──► LevelAnnounced ──(duration)──► Playing
//!                  ▲                            │ score ≥ threshold, level < max
//!                  └────────── level += 1 ◄─────┘
//!   Playing / LevelAnnounced ──(level == max, score ≥ final)──► BossFight
//!   BossFight ──(boss health ≤ 0)──► Victory
//!   any ──(no lives left / boss contact)──► Defeat
//! ```

use std::time::Duration;

use tracing::info;

use crate::session::Outcome;
use crate::tuning::{level_threshold, FINAL_THRESHOLD, LEVEL_ANNOUNCE_DURATION, MAX_LEVEL};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    LevelAnnounced,
    BossFight,
    Victory,
    Defeat,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Victory | Phase::Defeat)
    }
}

/// A state change the session has to act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    AnnouncementEnded,
    LevelAdvanced(u32),
    BossTriggered,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Progression {
    level: u32,
    announced_at: Option<Duration>,
    boss_triggered: bool,
    outcome: Option<Outcome>,
}

impl Progression {
    /// Level 1, with its announcement starting at `now`.
    pub fn new(now: Duration) -> Self {
        Self {
            level: 1,
            announced_at: Some(now),
            boss_triggered: false,
            outcome: None,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_announcing(&self) -> bool {
        self.announced_at.is_some()
    }

    pub fn boss_triggered(&self) -> bool {
        self.boss_triggered
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn phase(&self) -> Phase {
        match self.outcome {
            Some(Outcome::Victory) => Phase::Victory,
            Some(Outcome::Defeat) => Phase::Defeat,
            None if self.boss_triggered => Phase::BossFight,
            None if self.is_announcing() => Phase::LevelAnnounced,
            None => Phase::Playing,
        }
    }

    /// Evaluate the transitions due at `now` for the current `score`.
    /// Does nothing once an outcome is recorded.
    pub fn update(&mut self, now: Duration, score: u32) -> Vec<Transition> {
        let mut transitions = Vec::new();
        if self.outcome.is_some() {
            return transitions;
        }

        if let Some(since) = self.announced_at {
            if now.saturating_sub(since) >= LEVEL_ANNOUNCE_DURATION {
                self.announced_at = None;
                transitions.push(Transition::AnnouncementEnded);
            }
        }

        if !self.is_announcing() && self.level < MAX_LEVEL && score >= level_threshold(self.level) {
            self.level += 1;
            self.announced_at = Some(now);
            info!(level = self.level, score, "level advanced");
            transitions.push(Transition::LevelAdvanced(self.level));
        }

        if self.level == MAX_LEVEL && score >= FINAL_THRESHOLD && !self.boss_triggered {
            self.boss_triggered = true;
            info!(score, "boss fight");
            transitions.push(Transition::BossTriggered);
        }

        transitions
    }

    /// Record a terminal outcome. Only the first one sticks; returns whether
    /// this call recorded it.
    pub fn finish(&mut self, outcome: Outcome) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        self.outcome = Some(outcome);
        info!(?outcome, level = self.level, "session over");
        true
    }
}
