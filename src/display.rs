//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! session. No game logic is performed; world-space bodies are scaled onto
//! the terminal grid and drawn as filled cell rectangles.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use side_scroller::entities::{Body, CollectibleKind};
use side_scroller::{Banner, Hud, Session};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_HUD_HEALTH: Color = Color::Green;
const C_PLAYER: Color = Color::Green;
const C_ENEMY: Color = Color::Blue;
const C_BOSS: Color = Color::Red;
const C_PROJECTILE: Color = Color::Cyan;
const C_PICKUP_HEALTH: Color = Color::Yellow;
const C_PICKUP_LIFE: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;

/// Maps world coordinates onto the bordered play area of the terminal.
struct Viewport {
    cols: u16,
    rows: u16,
    scale_x: f32,
    scale_y: f32,
}

impl Viewport {
    fn new(session: &Session, cols: u16, rows: u16) -> Self {
        let arena = session.registry().arena();
        Self {
            cols,
            rows,
            scale_x: f32::from(cols.saturating_sub(2)) / arena.width,
            scale_y: f32::from(rows.saturating_sub(4)) / arena.height,
        }
    }

    /// Cell span `[first, last]` covered by `body`, clipped to the play area.
    fn cells(&self, body: &Body) -> Option<(u16, u16, u16, u16)> {
        let max_col = i32::from(self.cols) - 2;
        let max_row = i32::from(self.rows) - 3;

        let c0 = 1 + (body.left() * self.scale_x).floor() as i32;
        let c1 = ((body.right() * self.scale_x).ceil() as i32).max(c0);
        let r0 = 2 + (body.top() * self.scale_y).floor() as i32;
        let r1 = (1 + (body.bottom() * self.scale_y).ceil() as i32).max(r0);

        let (c0, c1) = (c0.max(1), c1.min(max_col));
        let (r0, r1) = (r0.max(2), r1.min(max_row));
        if c0 > c1 || r0 > r1 {
            return None;
        }
        Some((c0 as u16, c1 as u16, r0 as u16, r1 as u16))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    session: &Session,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let view = Viewport::new(session, cols, rows);
    let registry = session.registry();
    let hud = session.hud();

    draw_border(out, &view)?;
    draw_hud(out, &view, &hud)?;

    for collectible in registry.collectibles() {
        let (color, glyph) = match collectible.kind {
            CollectibleKind::Health => (C_PICKUP_HEALTH, "+"),
            CollectibleKind::Life => (C_PICKUP_LIFE, "♥"),
        };
        draw_body(out, &view, &collectible.body, color, glyph)?;
    }
    for enemy in registry.enemies() {
        draw_body(out, &view, &enemy.body, C_ENEMY, "▓")?;
    }
    if let Some(boss) = registry.boss() {
        draw_body(out, &view, &boss.body, C_BOSS, "█")?;
    }
    for projectile in registry.projectiles() {
        draw_body(out, &view, &projectile.body, C_PROJECTILE, "─")?;
    }
    draw_body(out, &view, &registry.player().body, C_PLAYER, "█")?;

    draw_controls_hint(out, &view)?;
    if let Some(banner) = hud.banner {
        draw_banner(out, &view, &hud, banner)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let h = view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — the ground
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "▀".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: &Viewport, hud: &Hud) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>4}", hud.score)))?;

    // Level (or boss health) — centre
    let centre = match hud.boss {
        Some((health, max)) => {
            let filled = (health.max(0) * 10 / max.max(1)) as usize;
            format!("BOSS [{}{}]", "█".repeat(filled), "·".repeat(10 - filled))
        }
        None => format!("[ LEVEL {} ]", hud.level),
    };
    let lx = (view.cols / 2).saturating_sub(centre.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(if hud.boss.is_some() {
        C_BOSS
    } else {
        Color::White
    }))?;
    out.queue(Print(&centre))?;

    let health_str = format!("HP:{:>3} ", hud.health);
    let lives_str = format!("Lives:{}", "♥".repeat(hud.lives as usize));
    let right_len = (health_str.chars().count() + lives_str.chars().count()) as u16;
    out.queue(cursor::MoveTo(view.cols.saturating_sub(right_len + 1), 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HEALTH))?;
    out.queue(Print(&health_str))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_body<W: Write>(
    out: &mut W,
    view: &Viewport,
    body: &Body,
    color: Color,
    glyph: &str,
) -> std::io::Result<()> {
    let Some((c0, c1, r0, r1)) = view.cells(body) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(color))?;
    let span = glyph.repeat(usize::from(c1 - c0 + 1));
    for row in r0..=r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(&span))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   ↑ W SPACE : Jump   F J : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_banner<W: Write>(
    out: &mut W,
    view: &Viewport,
    hud: &Hud,
    banner: Banner,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>4}", hud.score);
    let lines: Vec<(String, Color)> = match banner {
        Banner::Level(level) => vec![(format!("—  LEVEL {level}  —"), Color::Yellow)],
        Banner::BossFight => return Ok(()),
        Banner::Victory => vec![
            ("╔════════════════════╗".to_string(), Color::Green),
            ("║      VICTORY!      ║".to_string(), Color::Green),
            ("╚════════════════════╝".to_string(), Color::Green),
            (score_line, Color::Yellow),
            ("R - Play Again  Q - Quit".to_string(), Color::White),
        ],
        Banner::Defeat => vec![
            ("╔════════════════════╗".to_string(), Color::Red),
            ("║    GAME  OVER      ║".to_string(), Color::Red),
            ("╚════════════════════╝".to_string(), Color::Red),
            (score_line, Color::Yellow),
            ("R - Play Again  Q - Quit".to_string(), Color::White),
        ],
    };

    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }

    Ok(())
}
