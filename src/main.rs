//! Terminal sprite demo (default binary).
//!
//! This binary is a thin consumer of the registry and camera: it registers a
//! few grouped sprites, moves them through registry mutators on a fixed tick,
//! and flushes each frame through the crossterm renderer. Game rules live
//! here (in the consumer), never in the core.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing_subscriber::EnvFilter;

use tui_sprites::core::{Command, Registry};
use tui_sprites::term::{Camera, TerminalRenderer};
use tui_sprites::types::Position;

const VIEW_W: u16 = 32;
const VIEW_H: u16 = 12;
const TICK: Duration = Duration::from_millis(120);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut registry = Registry::new();

    let player = registry.register('@', Position::new(2, 5), "player", Some("crew"));
    for (i, x) in [6, 13, 21, 27].into_iter().enumerate() {
        let pos = Position::new(x, (i as i32 * 3) % VIEW_H as i32);
        registry.register('*', pos, &format!("star-{i}"), Some("stars"));
    }
    let camera = Camera::new("main", (VIEW_W, VIEW_H), Position::new(0, 0), '.');
    tracing::debug!("camera \"{}\" tracking {} sprites", camera.label(), registry.len());

    // Paint the first frame through the per-cell sink contract; the loop
    // then uses the diffing draw path.
    camera.push(&registry, term);
    term.flush_queued()?;

    let mut dy = 1;
    let mut last_tick = Instant::now();

    loop {
        term.draw(&camera.render(&registry))?;

        let timeout = TICK
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press
                        && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                    {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= TICK {
            last_tick = Instant::now();

            // Stars drift left and wrap.
            registry.broadcast("stars", Command::Translate { dx: -1, dy: 0 })?;
            for id in registry.group_members("stars")?.to_vec() {
                if registry.position(id)?.x < 0 {
                    registry.set_x(id, VIEW_W as i32 - 1)?;
                }
            }

            // Player bounces between the top and bottom rows.
            let at = registry.position(player)?;
            if at.y + dy < 0 || at.y + dy >= VIEW_H as i32 {
                dy = -dy;
            }
            registry.translate(player, 0, dy)?;
        }
    }
}
