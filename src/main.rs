//! Apple Catcher terminal runner (default binary).
//!
//! One thread: poll crossterm until the next frame is due, advance the shell,
//! redraw through the framebuffer diff renderer.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use apple_catcher::config::AppConfig;
use apple_catcher::core::SceneSnapshot;
use apple_catcher::input::{handle_key_event, should_quit, HeldKeys};
use apple_catcher::logging::{init_logging, LoggingConfig};
use apple_catcher::shell::{Shell, ShellView};
use apple_catcher::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use apple_catcher::types::TICK_MS;

/// Longest frame fed to the game, so a stalled terminal does not teleport apples.
const MAX_FRAME_MS: u32 = 100;

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_logging(LoggingConfig::for_terminal(config.log_path.clone()))?;

    let mut term = TerminalRenderer::new();
    let release_events = term.enter()?;

    let result = run(&mut term, &config, release_events);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("run failed: {:#}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig, release_events: bool) -> Result<()> {
    let seed = config.seed_or_clock();
    log::info!("session seed {}", seed);

    let mut shell = Shell::with_config(seed, config.game.clone());
    let view = GameView::default();
    let mut keys = HeldKeys::new().with_release_events(release_events);
    let mut throttle = RenderThrottle::default();
    let mut fb = FrameBuffer::new(0, 0);

    let clock = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let shell_view = shell.view();
        let fingerprint = frame_fingerprint(shell.scene(), &shell_view);
        let now_ms = clock.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, fingerprint, shell_view.overlay.is_static()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(shell.scene(), &shell_view, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            break;
                        }
                        if !keys.handle_key_press(key.code) {
                            if let Some(command) = handle_key_event(key) {
                                if shell.command(command) {
                                    keys.reset();
                                }
                            }
                        }
                    }
                    KeyEventKind::Release => keys.handle_key_release(key.code),
                },
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        let since_tick = last_tick.elapsed();
        if since_tick >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = (since_tick.as_millis() as u32).min(MAX_FRAME_MS);
            keys.update(elapsed_ms);
            shell.frame(elapsed_ms, keys.frame_input());
        }
    }

    shell.dismount();
    Ok(())
}

/// Everything the screen shows, hashed.
fn frame_fingerprint(scene: &SceneSnapshot, view: &ShellView) -> u64 {
    let mut hasher = DefaultHasher::new();
    scene.fingerprint().hash(&mut hasher);
    view.hash(&mut hasher);
    hasher.finish()
}
