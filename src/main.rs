//! Terminal Tetris runner (default binary).
//!
//! Drives the engine with a single-threaded loop: render, wait for a key until the
//! tick deadline, deliver commands, tick. Environment overrides:
//!
//! - `TETRIS_SEED`: piece sequence seed (entropy when unset)
//! - `TETRIS_LOG_PATH`: write logs to this file (no logging when unset)
//! - `TETRIS_LOG`: log level, `info` by default
//! - `TETRIS_ROWS`, `TETRIS_COLUMNS` and the other `GameConfig` variables

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, Level};

use classic_tetris::core::{GameConfig, GameSnapshot, GameState, PieceRandomizer};
use classic_tetris::input::{handle_key_event, is_acknowledge, should_quit};
use classic_tetris::term::{GameView, TerminalRenderer, Viewport};
use classic_tetris::types::Command;

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env();
    let randomizer = match std::env::var("TETRIS_SEED") {
        Ok(raw) => PieceRandomizer::seeded(
            raw.trim()
                .parse()
                .with_context(|| format!("invalid TETRIS_SEED: {raw}"))?,
        ),
        Err(_) => PieceRandomizer::from_entropy(),
    };
    let mut game = GameState::new(config, randomizer)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(score = game.score(), lines = game.lines(), "exiting");
    result
}

fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var("TETRIS_LOG_PATH") else {
        return Ok(());
    };
    let level = std::env::var("TETRIS_LOG")
        .ok()
        .and_then(|raw| raw.trim().parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    let file = File::create(&path).with_context(|| format!("cannot open log file {path}"))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .with_target(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut snapshot = GameSnapshot::default();

    let mut interval = Duration::from_millis(game.tick_interval_ms() as u64);
    let mut next_tick = Instant::now() + interval;

    loop {
        // Render.
        game.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&snapshot, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if game.is_game_over() && is_acknowledge(key) {
                        game.apply(Command::NewGame);
                    } else if let Some(command) = handle_key_event(key) {
                        game.apply(command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick. A zero interval ticks on every pass.
        if Instant::now() >= next_tick {
            interval = Duration::from_millis(game.on_tick() as u64);
            next_tick = Instant::now() + interval;
        }
    }
}
