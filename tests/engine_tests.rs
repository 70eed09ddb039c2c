//! Engine runtime: queue ordering, publishing and the gravity ticker

use std::sync::{Arc, Mutex};
use std::time::Duration;

use blockfall::core::GameState;
use blockfall::engine::{EngineConfig, EngineError, EngineHandle, StateObserver};
use blockfall::types::{BoardSize, Command, Direction, GameStatus};

fn config(seed: u32) -> EngineConfig {
    EngineConfig::default()
        .with_board_size(BoardSize::new(12, 24))
        .with_seed(seed)
        .with_ticker(false)
}

/// Records every (command, tick, status) the worker publishes
#[derive(Clone, Default)]
struct Recorder {
    seen: Arc<Mutex<Vec<(Command, u32, GameStatus)>>>,
}

impl StateObserver for Recorder {
    fn on_state(&mut self, command: Command, state: &GameState) {
        self.seen
            .lock()
            .unwrap()
            .push((command, state.tick(), state.status()));
    }
}

#[tokio::test]
async fn shutdown_drains_queued_commands() {
    let recorder = Recorder::default();
    let observers: Vec<Box<dyn StateObserver>> = vec![Box::new(recorder.clone())];
    let handle = EngineHandle::spawn_with_observers(config(21), observers).unwrap();

    for _ in 0..5 {
        handle.send(Command::Tick).unwrap();
    }
    let final_state = handle.shutdown().await.unwrap();

    assert_eq!(final_state.tick(), 5);
    let seen = recorder.seen.lock().unwrap();
    let ticks: Vec<u32> = seen.iter().map(|(_, tick, _)| *tick).collect();
    assert_eq!(ticks, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn concurrent_producers_keep_their_own_order() {
    let recorder = Recorder::default();
    let observers: Vec<Box<dyn StateObserver>> = vec![Box::new(recorder.clone())];
    let handle = EngineHandle::spawn_with_observers(config(4), observers).unwrap();

    let a = handle.sender();
    let b = handle.sender();
    let left = tokio::spawn(async move {
        for _ in 0..20 {
            a.send(Command::step(Direction::Left)).unwrap();
            tokio::task::yield_now().await;
        }
    });
    let pauses = tokio::spawn(async move {
        for i in 0..20 {
            let command = if i % 2 == 0 {
                Command::Pause
            } else {
                Command::Resume
            };
            b.send(command).unwrap();
            tokio::task::yield_now().await;
        }
    });
    left.await.unwrap();
    pauses.await.unwrap();

    handle.shutdown().await.unwrap();
    let seen = recorder.seen.lock().unwrap();
    assert_eq!(seen.len(), 40);

    let toggles: Vec<Command> = seen
        .iter()
        .map(|(c, _, _)| *c)
        .filter(|c| matches!(c, Command::Pause | Command::Resume))
        .collect();
    for (i, command) in toggles.iter().enumerate() {
        let expected = if i % 2 == 0 {
            Command::Pause
        } else {
            Command::Resume
        };
        assert_eq!(*command, expected);
    }
}

#[tokio::test]
async fn engine_matches_pure_replay() {
    let script = [
        Command::Rotate,
        Command::step(Direction::Right),
        Command::hard_drop(),
        Command::Tick,
        Command::Pause,
        Command::Tick,
        Command::Resume,
        Command::step(Direction::Down),
        Command::Tick,
    ];
    let handle = EngineHandle::spawn(config(777)).unwrap();
    for command in script {
        handle.send(command).unwrap();
    }
    let from_engine = handle.shutdown().await.unwrap();

    let replayed = script
        .iter()
        .fold(GameState::start(BoardSize::new(12, 24), 777), |s, c| {
            s.reduce(*c)
        });
    assert_eq!(from_engine, replayed);
}

#[tokio::test]
async fn subscribers_see_latest_state() {
    let handle = EngineHandle::spawn(config(9)).unwrap();
    let mut rx = handle.subscribe();

    handle.send(Command::Pause).unwrap();
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().status(), GameStatus::Paused);
    assert_eq!(handle.state().status(), GameStatus::Paused);

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn closed_engine_rejects_commands() {
    let handle = EngineHandle::spawn(config(1)).unwrap();
    let sender = handle.sender();
    drop(handle);
    // The worker notices the dropped handle and closes the queue
    tokio::time::timeout(Duration::from_secs(1), async {
        while !sender.is_closed() {
            tokio::task::yield_now().await;
        }
    })
    .await
    .unwrap();
    assert!(matches!(sender.send(Command::Tick), Err(EngineError::Closed)));
}

#[tokio::test(start_paused = true)]
async fn ticker_stops_at_game_over() {
    let handle = EngineHandle::spawn(config(2).with_ticker(true).with_base_tick_ms(10)).unwrap();
    let mut rx = handle.subscribe();

    // Keep hard dropping; gravity locks each piece until the stack tops out.
    let over = tokio::time::timeout(Duration::from_secs(600), async {
        loop {
            if rx.borrow_and_update().status() == GameStatus::GameOver {
                break;
            }
            handle.send(Command::hard_drop()).unwrap();
            rx.changed().await.unwrap();
        }
    })
    .await;
    assert!(over.is_ok(), "game should top out");

    let tick = handle.state().tick();
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(handle.state().tick(), tick);
    assert_eq!(handle.state().status(), GameStatus::GameOver);

    handle.shutdown().await.unwrap();
}
