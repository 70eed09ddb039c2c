//! Block-falling puzzle game (default binary).
//!
//! `blockfall` plays in the terminal; `blockfall headless` reads commands
//! from stdin and writes snapshots to stdout. See [`blockfall::cli`].

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tokio::io::BufReader;
use tokio::runtime::Runtime;
use tracing::info;

use blockfall::cli::{parse_args, Mode};
use blockfall::engine::{EngineConfig, EngineHandle};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::{headless, logging};

/// Input poll timeout; bounds how stale a frame can get
const FRAME_POLL: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    logging::init(cli.mode)?;
    let config = cli.apply(EngineConfig::from_env()?)?;

    let rt = Runtime::new().context("starting tokio runtime")?;
    match cli.mode {
        Mode::Headless => {
            let stdin = BufReader::new(tokio::io::stdin());
            let state = rt.block_on(headless::run(config, stdin, tokio::io::stdout()))?;
            info!(score = state.score(), lines = state.lines(), "headless run finished");
            Ok(())
        }
        Mode::Play => {
            let mut term = TerminalRenderer::new();
            term.enter().context("entering terminal mode")?;

            let result = play(&rt, config, &mut term);

            // Always try to restore terminal state.
            let _ = term.exit();
            result
        }
    }
}

fn play(rt: &Runtime, config: EngineConfig, term: &mut TerminalRenderer) -> Result<()> {
    let _guard = rt.enter();
    let handle = EngineHandle::spawn(config)?;
    let mut states = handle.subscribe();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        if dirty || states.has_changed().unwrap_or(false) {
            let state = states.borrow_and_update().clone();
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&state.snapshot(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        if !event::poll(FRAME_POLL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    break;
                }
                let status = handle.state().status();
                if let Some(command) = handle_key_event(key, status) {
                    handle.send(command)?;
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }

    let final_state = rt.block_on(handle.shutdown())?;
    info!(
        score = final_state.score(),
        lines = final_state.lines(),
        "game closed"
    );
    Ok(())
}
