mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;

use crossterm::{
    event::{self, Event},
    terminal, QueueableCommand,
};
use log::{error, info};
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

use zombies::compute::{init_state, tick, FrameInfo};
use zombies::config::{self, RuntimeConfig, Tuning};
use zombies::entities::GameStatus;
use zombies::graphics::{Graphics, Surface};
use zombies::input::InputState;
use zombies::render::draw_frame;
use zombies::terminal::{with_terminal, TerminalInput};
use zombies::timer::{Clock, FramePacer, SystemClock};

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until Escape (or Ctrl-C) is pressed.
///
/// Each frame: drain pending terminal events, sample input once, tick the
/// simulation, draw, present, then sleep out the rest of the frame budget.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &RuntimeConfig,
) -> std::io::Result<()> {
    let tuning = Tuning::default();
    let (width, height) = terminal::size()?;

    let mut state = match config.seed {
        Some(seed) => init_state(&mut StdRng::seed_from_u64(seed), &tuning),
        None => init_state(&mut thread_rng(), &tuning),
    };

    let clock = SystemClock::new();
    let mut pacer = FramePacer::new(clock.now_millis(), config.target_fps);
    let mut input = TerminalInput::new(width, height).with_reserved_rows(display::TEXT_ROWS);
    let mut sampled = InputState::default();

    let mut gfx = Graphics::new();
    let (sw, sh) = display::surface_size(width, height);
    gfx.push_target(Surface::new(sw, sh));
    info!("surface {sw}x{sh} for terminal {width}x{height}");

    loop {
        // ── Drain all pending input events (non-blocking) ─────────────────────
        input.begin_frame();
        let mut resized = None;
        while let Ok(ev) = rx.try_recv() {
            if let Event::Resize(w, h) = ev {
                resized = Some((w, h));
            }
            input.handle_event(&ev);
        }
        if let Some((w, h)) = resized {
            let (sw, sh) = display::surface_size(w, h);
            gfx.pop_target();
            gfx.push_target(Surface::new(sw, sh));
            out.queue(terminal::Clear(terminal::ClearType::All))?;
            info!("resized to {w}x{h}");
        }

        sampled.sample(&input);
        let frame = FrameInfo {
            now: clock.now_millis(),
            frame_time: pacer.frame_time(),
        };
        state = tick(&state, &sampled, frame, &tuning);

        if state.status == GameStatus::Exiting {
            info!("exit requested after {} frames, {} kills", state.frame, state.kills);
            return Ok(());
        }

        draw_frame(&mut gfx, &state, &tuning, config.outline_quad);
        if let Some(surface) = gfx.target() {
            display::present(out, surface, &state)?;
        }

        if let Some(remaining) = pacer.sleep_for(clock.now_millis()) {
            thread::sleep(remaining);
        }
        pacer.finish_frame(clock.now_millis());
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let config = RuntimeConfig::from_env();
    config::init_logging(&config)?;
    info!("starting with {config:?}");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    if let Err(e) = terminal::enable_raw_mode() {
        error!("terminal init failed: {e}");
        eprintln!("terminal init failed: {e}");
        return Err(e);
    }

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    // Restores the screen on every exit path, including a failed setup.
    let result = with_terminal(&mut out, |out| game_loop(out, &rx, &config));
    if let Err(e) = &result {
        error!("game loop failed: {e}");
    }
    result
}
