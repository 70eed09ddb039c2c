//! Engine runtime.
//!
//! One worker task owns the game state and reduces commands in arrival
//! order. Each new state is published on a watch channel and handed to the
//! registered observers. An optional ticker task feeds `Tick` commands at
//! the period the current velocity asks for.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, trace, warn};

use blockfall_core::{tick_interval_ms, GameState};
use blockfall_types::{Command, GameStatus};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::observer::StateObserver;

/// Cloneable producer side of the command queue.
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<Command>,
}

impl CommandSender {
    pub fn send(&self, command: Command) -> Result<(), EngineError> {
        self.tx.send(command).map_err(|_| EngineError::Closed)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Running engine instance.
///
/// Must be created inside a tokio runtime. Dropping the handle stops the
/// worker once it has drained the commands already queued.
pub struct EngineHandle {
    sender: CommandSender,
    state_rx: watch::Receiver<Arc<GameState>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    worker: JoinHandle<GameState>,
    ticker: Option<JoinHandle<()>>,
}

impl EngineHandle {
    pub fn spawn(config: EngineConfig) -> Result<Self, EngineError> {
        Self::spawn_with_observers(config, Vec::new())
    }

    pub fn spawn_with_observers(
        config: EngineConfig,
        observers: Vec<Box<dyn StateObserver>>,
    ) -> Result<Self, EngineError> {
        config.validate()?;

        let initial = Arc::new(GameState::start(config.board_size, config.seed));
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<Command>();
        let (state_tx, state_rx) = watch::channel(Arc::clone(&initial));
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        info!(
            width = config.board_size.width,
            height = config.board_size.height,
            seed = config.seed,
            ticker = config.ticker_enabled,
            "engine started"
        );

        let worker = tokio::spawn(run_worker(
            initial,
            cmd_rx,
            shutdown_rx,
            state_tx,
            observers,
        ));

        let ticker = config.ticker_enabled.then(|| {
            tokio::spawn(run_ticker(
                cmd_tx.clone(),
                state_rx.clone(),
                config.base_tick_ms,
            ))
        });

        Ok(Self {
            sender: CommandSender { tx: cmd_tx },
            state_rx,
            shutdown_tx: Some(shutdown_tx),
            worker,
            ticker,
        })
    }

    /// Queue a command; it is reduced after every command queued before it
    pub fn send(&self, command: Command) -> Result<(), EngineError> {
        self.sender.send(command)
    }

    pub fn sender(&self) -> CommandSender {
        self.sender.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<GameState>> {
        self.state_rx.clone()
    }

    /// Most recently published state
    pub fn state(&self) -> Arc<GameState> {
        Arc::clone(&self.state_rx.borrow())
    }

    /// Stop the ticker, drain the queue and return the final state.
    pub async fn shutdown(mut self) -> Result<GameState, EngineError> {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
            let _ = ticker.await;
        }
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        let state = (&mut self.worker).await?;
        info!(score = state.score(), lines = state.lines(), "engine stopped");
        Ok(state)
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

async fn run_worker(
    initial: Arc<GameState>,
    mut cmd_rx: mpsc::UnboundedReceiver<Command>,
    mut shutdown_rx: oneshot::Receiver<()>,
    state_tx: watch::Sender<Arc<GameState>>,
    mut observers: Vec<Box<dyn StateObserver>>,
) -> GameState {
    let mut state = initial;

    loop {
        tokio::select! {
            biased;
            command = cmd_rx.recv() => match command {
                Some(command) => {
                    state = apply(&state, command, &state_tx, &mut observers);
                }
                None => break,
            },
            // Resolves on an explicit shutdown and when the handle is dropped
            _ = &mut shutdown_rx => {
                cmd_rx.close();
                while let Some(command) = cmd_rx.recv().await {
                    state = apply(&state, command, &state_tx, &mut observers);
                }
                break;
            }
        }
    }

    Arc::try_unwrap(state).unwrap_or_else(|shared| (*shared).clone())
}

fn apply(
    state: &Arc<GameState>,
    command: Command,
    state_tx: &watch::Sender<Arc<GameState>>,
    observers: &mut [Box<dyn StateObserver>],
) -> Arc<GameState> {
    let next = Arc::new(state.reduce(command));
    trace!(command = command.as_str(), tick = next.tick(), "command reduced");
    log_transition(state, &next, command);

    for observer in observers.iter_mut() {
        observer.on_state(command, &next);
    }
    state_tx.send_replace(Arc::clone(&next));
    next
}

fn log_transition(prev: &GameState, next: &GameState, command: Command) {
    let restarted = matches!(command, Command::Restart)
        || (matches!(command, Command::PrimaryAction) && prev.status() == GameStatus::GameOver);
    if restarted {
        info!(previous_score = prev.score(), "game restarted");
        return;
    }

    if next.pieces_locked() > prev.pieces_locked() {
        debug!(
            rows = next.lines() - prev.lines(),
            points = next.score() - prev.score(),
            score = next.score(),
            "piece locked"
        );
    }

    match (prev.status(), next.status()) {
        (old, GameStatus::GameOver) if old != GameStatus::GameOver => {
            info!(
                score = next.score(),
                lines = next.lines(),
                pieces = next.pieces_locked(),
                "game over"
            );
        }
        (old, new) if old != new => {
            debug!(status = new.as_str(), "status changed");
        }
        _ => {}
    }
}

async fn run_ticker(
    tx: mpsc::UnboundedSender<Command>,
    mut state_rx: watch::Receiver<Arc<GameState>>,
    base_tick_ms: u32,
) {
    loop {
        let (status, velocity) = {
            let state = state_rx.borrow_and_update();
            (state.status(), state.velocity())
        };

        if status != GameStatus::InProgress {
            if state_rx.changed().await.is_err() {
                return;
            }
            continue;
        }

        let delay = tick_interval_ms(base_tick_ms, velocity);
        tokio::time::sleep(Duration::from_millis(u64::from(delay))).await;
        if tx.send(Command::Tick).is_err() {
            warn!("command queue closed, ticker stopping");
            return;
        }
    }
}
