use std::time::{Duration, Instant};

use space_defender::driver::FrameClock;

#[test]
fn request_is_due_one_interval_later() {
    let mut clock = FrameClock::new(Duration::from_millis(16));
    let now = Instant::now();
    let req = clock.request(now);
    assert_eq!(req.due(), now + Duration::from_millis(16));
    assert!(clock.is_live(&req));
}

#[test]
fn remaining_counts_down_and_saturates() {
    let mut clock = FrameClock::new(Duration::from_millis(20));
    let now = Instant::now();
    let req = clock.request(now);
    assert_eq!(
        clock.remaining(&req, now + Duration::from_millis(5)),
        Some(Duration::from_millis(15))
    );
    // A slow frame just runs late.
    assert_eq!(
        clock.remaining(&req, now + Duration::from_millis(50)),
        Some(Duration::ZERO)
    );
}

#[test]
fn cancel_invalidates_outstanding_requests() {
    let mut clock = FrameClock::new(Duration::from_millis(20));
    let now = Instant::now();
    let a = clock.request(now);
    let b = clock.request(now);
    clock.cancel();
    assert!(!clock.is_live(&a));
    assert!(!clock.is_live(&b));
    assert_eq!(clock.remaining(&a, now), None);

    let fresh = clock.request(now);
    assert!(clock.is_live(&fresh));
}

#[test]
fn from_fps_derives_interval() {
    assert_eq!(FrameClock::from_fps(50).interval(), Duration::from_millis(20));
    let sixty = FrameClock::from_fps(60).interval();
    assert!(sixty > Duration::from_micros(16_600) && sixty < Duration::from_micros(16_700));
    // Zero is treated as one frame per second rather than dividing by zero.
    assert_eq!(FrameClock::from_fps(0).interval(), Duration::from_secs(1));
}

#[test]
fn cancelled_frame_is_skipped_without_waiting() {
    let mut clock = FrameClock::new(Duration::from_millis(20));
    let now = Instant::now();
    let stale = clock.request(now);
    clock.cancel();

    // The loop neither draws nor sleeps for a stale request.
    assert!(!clock.is_live(&stale));
    assert_eq!(clock.remaining(&stale, now), None);

    let next = clock.request(now);
    assert!(clock.is_live(&next));
    assert_eq!(clock.remaining(&next, now), Some(Duration::from_millis(20)));
}
