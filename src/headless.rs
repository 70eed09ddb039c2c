//! Headless mode: commands in, snapshots out, one JSON document per line.
//!
//! Input lines are either a tagged command (`{"type":"rotate"}`) or its
//! short text form (`rotate`, `left`, `hardDrop`). Blank lines and lines
//! starting with `#` are skipped. The initial snapshot is written first,
//! then one output line per input line in input order: the snapshot after
//! the command was reduced, or an `{"error":...}` line for rejected input.
//! Gravity ticks from the ticker, when enabled, add snapshots of their own.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::core::{GameSnapshot, GameState};
use crate::engine::{EngineConfig, EngineHandle, StateObserver};
use crate::types::Command;

/// Parse one input line; `Ok(None)` for lines carrying no command
pub fn parse_command_line(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    if line.starts_with('{') {
        return serde_json::from_str(line)
            .map(Some)
            .map_err(|e| format!("invalid command: {}", e));
    }
    Command::from_str(line)
        .map(Some)
        .ok_or_else(|| format!("unknown command: {}", line))
}

/// Drive an engine from `input` until EOF, streaming snapshots to `output`.
pub async fn run<R, W>(config: EngineConfig, input: R, mut output: W) -> Result<GameState>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (snap_tx, mut snap_rx) = mpsc::unbounded_channel::<GameSnapshot>();
    let observer = move |_: Command, state: &GameState| {
        if snap_tx.send(state.snapshot()).is_err() {
            warn!("snapshot consumer gone");
        }
    };
    let observers: Vec<Box<dyn StateObserver>> = vec![Box::new(observer)];
    let handle = EngineHandle::spawn_with_observers(config, observers)?;

    write_json(&mut output, &handle.state().snapshot()).await?;

    let mut lines = input.lines();
    // Snapshots still owed for commands sent; no input is read until they arrive
    let mut pending = 0usize;
    loop {
        tokio::select! {
            line = lines.next_line(), if pending == 0 => {
                let Some(line) = line.context("reading commands")? else {
                    break;
                };
                match parse_command_line(&line) {
                    Ok(Some(command)) => {
                        handle.send(command)?;
                        pending += 1;
                    }
                    Ok(None) => {}
                    Err(message) => {
                        warn!(line = line.as_str(), "rejected input");
                        write_json(&mut output, &serde_json::json!({ "error": message })).await?;
                    }
                }
            }
            Some(snapshot) = snap_rx.recv() => {
                pending = pending.saturating_sub(1);
                write_json(&mut output, &snapshot).await?;
            }
            else => break,
        }
    }

    debug!("input closed, draining engine");
    let final_state = handle.shutdown().await?;
    while let Some(snapshot) = snap_rx.recv().await {
        write_json(&mut output, &snapshot).await?;
    }
    output.flush().await.context("flushing output")?;
    Ok(final_state)
}

async fn write_json<W, T>(output: &mut W, value: &T) -> Result<()>
where
    W: AsyncWrite + Unpin,
    T: serde::Serialize,
{
    let mut line = serde_json::to_vec(value)?;
    line.push(b'\n');
    output.write_all(&line).await.context("writing output")?;
    Ok(())
}
