use std::time::Duration;

use side_scroller::progression::*;
use side_scroller::tuning::*;
use side_scroller::Outcome;

fn secs(s: f32) -> Duration {
    Duration::from_secs_f32(s)
}

/// Level 1, announcement already over.
fn playing() -> Progression {
    let mut p = Progression::new(Duration::ZERO);
    p.update(LEVEL_ANNOUNCE_DURATION, 0);
    p
}

/// Level 3 reached at t=4s (still announcing), score 15.
fn at_final_level() -> Progression {
    let mut p = playing();
    p.update(secs(2.0), level_threshold(1));
    p.update(secs(4.0), level_threshold(2));
    assert_eq!(p.level(), MAX_LEVEL);
    p
}

// ── Announcement ──────────────────────────────────────────────────────────────

#[test]
fn starts_on_level_one_announced() {
    let p = Progression::new(Duration::ZERO);
    assert_eq!(p.level(), 1);
    assert!(p.is_announcing());
    assert_eq!(p.phase(), Phase::LevelAnnounced);
    assert_eq!(p.outcome(), None);
}

#[test]
fn announcement_ends_after_fixed_duration() {
    let mut p = Progression::new(Duration::ZERO);
    assert!(p.update(secs(1.0), 0).is_empty());
    assert!(p.is_announcing());
    let t = p.update(LEVEL_ANNOUNCE_DURATION, 0);
    assert_eq!(t, vec![Transition::AnnouncementEnded]);
    assert_eq!(p.phase(), Phase::Playing);
}

// ── Level advance ─────────────────────────────────────────────────────────────

#[test]
fn no_advance_while_announcing() {
    let mut p = Progression::new(Duration::ZERO);
    p.update(secs(1.0), 100);
    assert_eq!(p.level(), 1);
}

#[test]
fn threshold_advances_one_level_and_announces() {
    let mut p = playing();
    assert!(p.update(secs(2.5), level_threshold(1) - 1).is_empty());
    let t = p.update(secs(3.0), level_threshold(1));
    assert_eq!(t, vec![Transition::LevelAdvanced(2)]);
    assert_eq!(p.level(), 2);
    assert_eq!(p.phase(), Phase::LevelAnnounced);
}

#[test]
fn huge_score_advances_only_one_level_per_announcement() {
    let mut p = playing();
    p.update(secs(3.0), 1000);
    assert_eq!(p.level(), 2);
    p.update(secs(3.5), 1000);
    assert_eq!(p.level(), 2, "blocked by the announcement");
    let t = p.update(secs(5.0), 1000);
    assert!(t.contains(&Transition::AnnouncementEnded));
    assert!(t.contains(&Transition::LevelAdvanced(3)));
}

#[test]
fn level_never_decreases_nor_exceeds_max() {
    let mut p = playing();
    let mut last = p.level();
    for step in 0..200 {
        let score = (step * 7) % 40; // scores go up and down
        p.update(secs(2.0 + step as f32 * 0.5), score);
        assert!(p.level() >= last);
        assert!(p.level() <= MAX_LEVEL);
        last = p.level();
    }
}

// ── Boss ──────────────────────────────────────────────────────────────────────

#[test]
fn boss_triggers_once_at_final_threshold() {
    let mut p = at_final_level();
    assert!(!p.update(secs(4.1), FINAL_THRESHOLD - 1).contains(&Transition::BossTriggered));
    let t = p.update(secs(4.2), FINAL_THRESHOLD);
    assert_eq!(t, vec![Transition::BossTriggered]);
    assert!(p.boss_triggered());
    assert_eq!(p.phase(), Phase::BossFight);

    for step in 0..10 {
        let t = p.update(secs(5.0 + step as f32), FINAL_THRESHOLD + 10);
        assert!(!t.contains(&Transition::BossTriggered));
    }
}

#[test]
fn boss_needs_final_level() {
    let mut p = playing();
    p.update(secs(3.0), FINAL_THRESHOLD);
    assert_eq!(p.level(), 2);
    assert!(!p.boss_triggered());
}

// ── Outcomes ──────────────────────────────────────────────────────────────────

#[test]
fn first_outcome_sticks() {
    let mut p = playing();
    assert!(p.finish(Outcome::Defeat));
    assert!(!p.finish(Outcome::Victory));
    assert_eq!(p.outcome(), Some(Outcome::Defeat));
    assert_eq!(p.phase(), Phase::Defeat);
    assert!(p.phase().is_terminal());
}

#[test]
fn terminal_state_stops_transitions() {
    let mut p = at_final_level();
    p.update(secs(4.5), FINAL_THRESHOLD);
    assert!(p.finish(Outcome::Victory));
    assert_eq!(p.phase(), Phase::Victory);
    assert!(p.update(secs(100.0), 1000).is_empty());
}
