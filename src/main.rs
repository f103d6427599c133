mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use side_scroller::tuning::{ARENA_HEIGHT, ARENA_WIDTH, TICK_RATE};
use side_scroller::{Arena, HeldKeys, Input, Session};

const FRAME: Duration = Duration::from_micros(1_000_000 / TICK_RATE as u64);

// ── Simultaneous-input constants ──────────────────────────────────────────────

/// Min frames between shots. Classic terminals turn a held key into a stream
/// of presses; this keeps that stream from becoming a solid beam.
const SHOOT_COOLDOWN: u32 = 12;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if any of `keys` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|key| {
        key_frame
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    })
}

const LEFT_KEYS: &[KeyCode] = &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: &[KeyCode] = &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];
const JUMP_KEYS: &[KeyCode] = &[
    KeyCode::Up,
    KeyCode::Char('w'),
    KeyCode::Char('W'),
    KeyCode::Char(' '),
];
const SHOOT_KEYS: &[KeyCode] = &[
    KeyCode::Char('f'),
    KeyCode::Char('F'),
    KeyCode::Char('j'),
    KeyCode::Char('J'),
];

// ── Command line ──────────────────────────────────────────────────────────────

/// Side-scrolling arcade game in the terminal.
#[derive(Parser, Debug)]
#[command(name = "side_scroller", version, about)]
struct Cli {
    /// Seed for enemy and pickup placement (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Write diagnostics to this file. Filter with RUST_LOG (default "info").
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// World width in game units.
    #[arg(long, default_value_t = ARENA_WIDTH)]
    width: f32,

    /// World height in game units.
    #[arg(long, default_value_t = ARENA_HEIGHT)]
    height: f32,
}

/// The terminal is in raw mode while playing, so logs only go to a file.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

// ── Title screen ──────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

fn show_title<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "»  SIDE  SCROLLER  «";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    let lines: &[(&str, Color)] = &[
        ("Survive three levels, then defeat the boss.", Color::White),
        ("Enemies die on contact but cost you 20 HP.", Color::DarkGrey),
        ("Touching the boss is fatal.", Color::Red),
    ];
    for (i, (msg, color)) in lines.iter().enumerate() {
        out.queue(cursor::MoveTo(cx.saturating_sub(22), cy.saturating_sub(4) + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    // Pickup legend
    let pickups: &[(&str, Color, &str)] = &[
        ("+", Color::Yellow, " Health — restores 30 HP"),
        ("♥", Color::Magenta, " Life   — +1 life"),
    ];
    for (i, (sym, color, desc)) in pickups.iter().enumerate() {
        out.queue(cursor::MoveTo(cx.saturating_sub(22), cy + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(sym))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(*desc))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(22), cy + 3))?;
    out.queue(style::SetForegroundColor(Color::DarkGrey))?;
    out.queue(Print("← → / A D : Move   ↑ W SPACE : Jump   F J : Shoot"))?;

    out.queue(cursor::MoveTo(cx.saturating_sub(22), cy + 5))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print("[ENTER] Start    [Q] Quit"))?;

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        if let Ok(Event::Key(KeyEvent { code, kind, .. })) = rx.recv() {
            if kind == KeyEventKind::Release {
                continue;
            }
            match code {
                KeyCode::Enter => return Ok(MenuResult::Start),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs sessions back to back until the player quits.
///
/// Input model: `key_frame` records the frame of the last press/repeat event
/// for every key. Each frame the keys still "fresh" (within `HOLD_WINDOW`)
/// become the held-key snapshot handed to the session, so movement, jumping
/// and shooting combine freely. Shooting itself is edge-triggered: only a
/// press event fires, throttled by `SHOOT_COOLDOWN`.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut Session,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
) -> std::io::Result<()> {
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut shoot_cooldown: u32 = 0;
    let mut frame: u64 = 0;
    let mut started = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;
        let mut shoot_pressed = false;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') if session.outcome().is_some() => {
                            session.restart();
                            started = Instant::now();
                            key_frame.clear();
                        }
                        code if SHOOT_KEYS.contains(&code) && shoot_cooldown == 0 => {
                            shoot_pressed = true;
                            shoot_cooldown = SHOOT_COOLDOWN;
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        let input = Input {
            held: HeldKeys {
                left: is_held(&key_frame, LEFT_KEYS, frame),
                right: is_held(&key_frame, RIGHT_KEYS, frame),
                jump: is_held(&key_frame, JUMP_KEYS, frame),
                shoot: is_held(&key_frame, SHOOT_KEYS, frame),
            },
            shoot_pressed,
        };
        shoot_cooldown = shoot_cooldown.saturating_sub(1);

        if let Some(outcome) = session.tick(&input, started.elapsed(), rng) {
            tracing::info!(?outcome, score = session.score(), "game finished");
        }

        let (cols, rows) = terminal::size()?;
        display::render(out, session, cols, rows)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }
    let arena = Arena::new(cli.width, cli.height).context("invalid world size")?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::info!(?arena, seed = ?cli.seed, "starting");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx, arena, &mut rng);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("terminal I/O failed")
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    arena: Arena,
    rng: &mut StdRng,
) -> std::io::Result<()> {
    match show_title(out, rx)? {
        MenuResult::Quit => Ok(()),
        MenuResult::Start => {
            let mut session = Session::new(arena);
            game_loop(out, &mut session, rx, rng)
        }
    }
}
