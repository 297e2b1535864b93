//! Pong TTY entry point
//!
//! Terminal driver around the deterministic core: raw-mode key polling,
//! frame-rate governing, screen painting, and audio cues. The core never
//! sees any of this; it only consumes ticks and produces frames.

use std::io::{self, Write};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use pong_tty::render::{overlay_scores, render};
use pong_tty::settings::Settings;
use pong_tty::sim::{GameState, StateStore, tick};

/// Terminal bell, the whole sound system
const BELL: &str = "\x07";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("pong-tty starting (seed {seed})");

    let mut stdout = io::stdout();
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut stdout, seed);

    execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(out: &mut impl Write, seed: u64) -> anyhow::Result<()> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut store = StateStore::new(GameState::new());
    let mut settings = Settings::default();
    let mut last_frame = Instant::now();
    let mut actual_fps = settings.fps as f64;

    loop {
        // Drain pending keys; a quit request is honored here, at the tick
        // boundary, never mid-tick.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('s') | KeyCode::Char('S') => {
                        settings.sound = !settings.sound;
                        log::info!("sound {}", if settings.sound { "on" } else { "off" });
                    }
                    KeyCode::Char('+') | KeyCode::Char('=') => {
                        settings.raise_rate();
                        log::info!("rate up: {:?}", settings.frame_duration());
                    }
                    KeyCode::Char('-') => {
                        settings.lower_rate();
                        log::info!("rate down: {:?}", settings.frame_duration());
                    }
                    KeyCode::Char('d') => match serde_json::to_string(&store.read()) {
                        Ok(json) => log::debug!("state dump: {json}"),
                        Err(err) => log::warn!("state dump failed: {err}"),
                    },
                    _ => {}
                }
            }
        }

        let frame_start = Instant::now();
        let events = tick(&mut store, &mut rng)?;
        let state = store.read();

        if let Some(side) = events.scored {
            log::info!(
                "point to {side:?} ({} - {})",
                state.score_left,
                state.score_right
            );
        }

        let mut frame = render(&state);
        overlay_scores(&mut frame, state.score_left, state.score_right);

        queue!(out, Clear(ClearType::All))?;
        for (y, line) in frame.lines().iter().enumerate() {
            queue!(out, cursor::MoveTo(0, y as u16), Print(line))?;
        }

        let sound_label = if settings.sound { "ON" } else { "OFF" };
        let rate_label = if settings.max_mode {
            format!("{actual_fps:.0} fps MAX")
        } else {
            format!("{} fps", settings.fps)
        };
        queue!(
            out,
            cursor::MoveTo(0, 25),
            Print("pong-tty - two paddles playing themselves"),
            cursor::MoveTo(0, 26),
            Print(format!(
                "ESC to exit, S for sound [{sound_label}], +/- for framerate [{rate_label}]"
            ))
        )?;

        if settings.sound && (events.scored.is_some() || events.paddle_hit) {
            queue!(out, Print(BELL))?;
        }
        out.flush()?;

        let frame_time = frame_start.elapsed().as_secs_f64();
        if frame_time > 0.0 {
            actual_fps = 1.0 / frame_time;
        }
        if let Some(budget) = settings.frame_duration() {
            let since_last = last_frame.elapsed();
            if since_last < budget {
                std::thread::sleep(budget - since_last);
            }
        }
        last_frame = Instant::now();
    }
}
