use super::*;
use crate::animation::ease::Ease;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn flip() -> Tween<f64> {
    Tween::new(0.0, -180.0, ms(800), Ease::Linear)
}

#[test]
fn idle_timeline_reports_idle() {
    let mut tl = Timeline::<u32>::new();
    assert!(!tl.is_busy());
    assert_eq!(tl.advance(ms(16)), TimelineStep::Idle);
    assert!(tl.current().is_none());
}

#[test]
fn second_start_is_rejected_while_busy() {
    let mut tl = Timeline::new();
    assert!(tl.start(1u32, flip()));
    assert!(!tl.start(2u32, flip()));
    assert_eq!(tl.current().map(|(k, _)| *k), Some(1));
}

#[test]
fn advance_runs_then_finishes_once() {
    let mut tl = Timeline::new();
    tl.start(7u32, flip());

    assert_eq!(tl.advance(ms(400)), TimelineStep::Running { value: -90.0 });
    assert_eq!(tl.progress(), Some(0.5));
    assert_eq!(
        tl.advance(ms(400)),
        TimelineStep::Finished {
            key: 7,
            value: -180.0,
            overshoot: Duration::ZERO,
        }
    );
    assert!(!tl.is_busy());
    assert_eq!(tl.advance(ms(400)), TimelineStep::Idle);
}

#[test]
fn overshooting_advance_still_finishes() {
    let mut tl = Timeline::new();
    tl.start((), flip());
    assert!(matches!(
        tl.advance(ms(10_000)),
        TimelineStep::Finished { value, .. } if value == -180.0
    ));
}

#[test]
fn finished_step_reports_leftover_time() {
    let mut tl = Timeline::new();
    tl.start(1u32, flip());
    tl.advance(ms(790));
    assert_eq!(
        tl.advance(ms(30)),
        TimelineStep::Finished {
            key: 1,
            value: -180.0,
            overshoot: ms(20),
        }
    );
}
