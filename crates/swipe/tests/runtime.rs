//! Tokio driver behaviour under a paused clock.

use std::time::Duration;

use profile::{PhotoCategory, PhotoRecord};
use swipe::runtime;
use swipe::{Direction, Event, Phase, SwipeConfig, SwipeMachine};
use tokio::time::Instant;

fn machine(n: u32) -> SwipeMachine {
    let photos = (1..=n)
        .map(|id| PhotoRecord {
            id,
            src: format!("/assets/images/{id}.jpg"),
            alt: format!("photo {id}"),
            category: PhotoCategory::Casual,
            name: "Sergei".into(),
            age: 28,
            profession: "Engineer".into(),
        })
        .collect();
    SwipeMachine::new(photos, SwipeConfig::default())
}

fn swipe(direction: Direction) -> Event {
    Event::Swipe { direction }
}

#[tokio::test(start_paused = true)]
async fn settle_advances_after_animation() {
    let (handle, _task) = runtime::spawn(machine(3));
    let started = Instant::now();

    handle.send(swipe(Direction::Left)).unwrap();
    let snap = handle
        .wait_for(|s| s.phase == Phase::Idle { index: 1 })
        .await
        .unwrap();

    assert!(started.elapsed() >= Duration::from_millis(300));
    assert!(!snap.state.is_locked);
}

#[tokio::test(start_paused = true)]
async fn match_auto_dismisses_after_four_seconds() {
    let (handle, _task) = runtime::spawn(machine(1));

    handle.send(swipe(Direction::Right)).unwrap();
    let shown = handle
        .wait_for(|s| s.phase == Phase::MatchShown)
        .await
        .unwrap();
    assert_eq!(shown.state.match_subject.as_ref().map(|p| p.id), Some(1));
    let shown_at = Instant::now();

    handle
        .wait_for(|s| s.phase == Phase::Exhausted)
        .await
        .unwrap();
    assert!(shown_at.elapsed() >= Duration::from_millis(4000));
}

#[tokio::test(start_paused = true)]
async fn manual_close_prevents_auto_dismiss() {
    let (handle, _task) = runtime::spawn(machine(1));

    handle.send(swipe(Direction::Right)).unwrap();
    handle
        .wait_for(|s| s.phase == Phase::MatchShown)
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(1000)).await;
    handle.send(Event::CloseMatch).unwrap();
    let closed = handle
        .wait_for(|s| s.phase == Phase::Exhausted)
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_secs(10)).await;
    let later = handle.snapshot();
    assert_eq!(later.revision, closed.revision, "no render after manual close");
    assert_eq!(later.phase, Phase::Exhausted);
}

#[tokio::test(start_paused = true)]
async fn locked_input_is_dropped() {
    let (handle, _task) = runtime::spawn(machine(3));

    handle.send(swipe(Direction::Left)).unwrap();
    handle.send(swipe(Direction::Right)).unwrap();
    handle.send(swipe(Direction::Right)).unwrap();

    handle
        .wait_for(|s| s.phase == Phase::Idle { index: 1 })
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(handle.snapshot().phase, Phase::Idle { index: 1 });
}

#[tokio::test(start_paused = true)]
async fn restart_after_exhaustion() {
    let (handle, task) = runtime::spawn(machine(2));

    for _ in 0..2 {
        handle.send(swipe(Direction::Left)).unwrap();
        let rev = handle.snapshot().revision;
        handle
            .wait_for(|s| s.revision > rev && !s.state.is_locked)
            .await
            .unwrap();
    }
    assert_eq!(handle.snapshot().phase, Phase::Exhausted);

    handle.send(Event::Restart).unwrap();
    let snap = handle
        .wait_for(|s| s.phase == Phase::Idle { index: 0 })
        .await
        .unwrap();
    assert_eq!(snap.state.current_index, 0);

    drop(handle);
    let machine = task.await.unwrap();
    assert_eq!(machine.phase(), Phase::Idle { index: 0 });
}

#[tokio::test(start_paused = true)]
async fn send_fails_after_shutdown() {
    let (handle, task) = runtime::spawn(machine(1));
    let spare = handle.clone();
    task.abort();
    let _ = task.await;

    assert!(spare.send(Event::Restart).is_err());
    drop(handle);
}
