//! Core domain: tests for the step timer.

use super::StepTimer;

#[test]
fn test_new_timer_is_not_done() {
    let timer = StepTimer::from_seconds(0.5);
    assert!(!timer.is_done());
    assert_eq!(timer.elapsed_secs(), 0.0);
}

#[test]
fn test_timer_done_after_duration() {
    let mut timer = StepTimer::from_seconds(0.5);
    timer.tick(0.25, false);
    assert!(!timer.is_done());

    timer.tick(0.3, false);
    assert!(timer.is_done());
}

#[test]
fn test_non_repeating_tick_clamps_at_duration() {
    let mut timer = StepTimer::from_seconds(0.5);
    timer.tick(2.0, false);
    timer.tick(2.0, false);

    assert!(timer.is_done());
    assert!((timer.elapsed_secs() - 0.5).abs() < 1e-6);
    assert_eq!(timer.remaining_secs(), 0.0);
}

#[test]
fn test_reset_zeroes_elapsed() {
    let mut timer = StepTimer::from_seconds(0.5);
    timer.tick(1.0, false);
    assert!(timer.is_done());

    timer.reset();
    assert!(!timer.is_done());
    assert_eq!(timer.elapsed_secs(), 0.0);
}

#[test]
fn test_finished_timer_starts_done() {
    let timer = StepTimer::finished(2.0);
    assert!(timer.is_done());
    assert!((timer.duration_secs() - 2.0).abs() < 1e-6);
}

#[test]
fn test_finish_completes_a_running_timer() {
    let mut timer = StepTimer::from_seconds(1.5);
    timer.tick(0.1, false);
    timer.finish();
    assert!(timer.is_done());
}

#[test]
fn test_repeating_tick_wraps_instead_of_clamping() {
    let mut timer = StepTimer::from_seconds(1.0);
    timer.tick(1.25, true);

    assert!(timer.elapsed_secs() < 1.0);
    assert!((timer.elapsed_secs() - 0.25).abs() < 1e-4);
}

#[test]
fn test_negative_delta_is_ignored() {
    let mut timer = StepTimer::from_seconds(1.0);
    timer.tick(0.5, false);
    timer.tick(-3.0, false);
    assert!((timer.elapsed_secs() - 0.5).abs() < 1e-6);
}
