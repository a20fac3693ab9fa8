//! Terminal drawing for every scene. World coordinates are mapped onto the
//! character grid each frame, so resizing the terminal just rescales the
//! field.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType},
};
use match_core::{MatchSession, Side};

use crate::app::{App, Scene, GameOverReport, MODE_ITEMS, OPTION_ROWS, START_MENU_ITEMS};

pub fn draw(out: &mut impl Write, app: &App) -> Result<()> {
    queue!(out, Clear(ClearType::All))?;
    match &app.scene {
        Scene::StartMenu { selected } => {
            draw_menu(out, "PADDLE DUEL", &START_MENU_ITEMS, *selected)?
        }
        Scene::ModeSelect { selected } => draw_menu(out, "SELECT MODE", &MODE_ITEMS, *selected)?,
        Scene::Playing { .. } => {
            if let Some(session) = app.session.as_ref() {
                draw_match(out, session)?;
            }
        }
        Scene::GameOver { report, name_entry } => {
            if let Some(session) = app.session.as_ref() {
                draw_match(out, session)?;
            }
            draw_game_over(out, report, name_entry.as_deref())?;
        }
        Scene::HighScores => draw_high_scores(out, app)?,
        Scene::Options { selected } => draw_options(out, app, *selected)?,
    }
    out.flush()?;
    Ok(())
}

fn draw_menu(out: &mut impl Write, title: &str, items: &[&str], selected: usize) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let cx = cols / 2;
    let top = rows / 3;

    queue!(
        out,
        MoveTo(cx.saturating_sub(title.len() as u16 / 2), top),
        SetAttribute(Attribute::Bold),
        Print(title),
        SetAttribute(Attribute::Reset)
    )?;

    for (i, item) in items.iter().enumerate() {
        let marker = if i == selected { "> " } else { "  " };
        let line = format!("{marker}{item}");
        queue!(
            out,
            MoveTo(cx.saturating_sub(line.len() as u16 / 2), top + 2 + 2 * i as u16),
            Print(line)
        )?;
    }
    Ok(())
}

/// Field, paddles, ball, and the HUD line.
fn draw_match(out: &mut impl Write, session: &MatchSession) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let field = session.field();
    let config = session.config();

    // One HUD row on top, a border around the rest
    let grid_left = 1u16;
    let grid_top = 2u16;
    let grid_cols = cols.saturating_sub(2).max(10);
    let grid_rows = rows.saturating_sub(3).max(10);
    let sx = grid_cols as f32 / field.width;
    let sy = grid_rows as f32 / field.height;
    let to_cell = |x: f32, y: f32| -> (u16, u16) {
        let cx = (x * sx).round().clamp(0.0, (grid_cols - 1) as f32) as u16;
        let cy = (y * sy).round().clamp(0.0, (grid_rows - 1) as f32) as u16;
        (grid_left + cx, grid_top + cy)
    };

    // HUD: score, timer, ramp
    let score = session.score();
    let ramp_percent = ((session.current_ball_speed() - config.ball_speed_base)
        / config.ball_speed_base
        * 100.0)
        .round() as i32;
    let hud = format!(
        "{} : {}    TIME: {}s    SPEED: +{}%",
        score.player,
        score.opponent,
        session.elapsed_seconds(),
        ramp_percent
    );
    queue!(out, MoveTo(grid_left, 0), Print(hud))?;

    // Border
    let horizontal: String = "-".repeat(grid_cols as usize);
    queue!(out, MoveTo(grid_left, grid_top - 1), Print(&horizontal))?;
    queue!(out, MoveTo(grid_left, grid_top + grid_rows), Print(&horizontal))?;

    // Center line
    let (net_x, _) = to_cell(field.width / 2.0, 0.0);
    for row in 0..grid_rows {
        if row % 2 == 0 {
            queue!(out, MoveTo(net_x, grid_top + row), Print("|"))?;
        }
    }

    // Paddles
    for side in [Side::Left, Side::Right] {
        if let Some(y) = session.paddle_y(side) {
            let half = config.paddle_height / 2.0;
            let (x, y0) = to_cell(config.paddle_x(side), y - half);
            let (_, y1) = to_cell(config.paddle_x(side), y + half);
            for row in y0..=y1 {
                queue!(out, MoveTo(x, row), Print("#"))?;
            }
        }
    }

    // Ball
    if let Some(ball) = session.ball() {
        let (x, y) = to_cell(ball.pos.x, ball.pos.y);
        queue!(out, MoveTo(x, y), Print("O"))?;
    }

    // Countdown cue / pause overlay in the middle of the field
    let mid = to_cell(field.width / 2.0, field.height / 2.0);
    if session.is_paused() {
        banner(out, mid, "PAUSED - Esc resume, M menu")?;
    } else if let Some(cue) = session.countdown_cue() {
        banner(out, mid, cue.label())?;
    }
    Ok(())
}

fn banner(out: &mut impl Write, (cx, cy): (u16, u16), text: &str) -> Result<()> {
    queue!(
        out,
        MoveTo(cx.saturating_sub(text.len() as u16 / 2), cy),
        SetAttribute(Attribute::Bold),
        Print(text),
        SetAttribute(Attribute::Reset)
    )?;
    Ok(())
}

fn draw_game_over(
    out: &mut impl Write,
    report: &GameOverReport,
    name_entry: Option<&str>,
) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let cx = cols / 2;
    let top = rows / 3;

    banner(out, (cx, top), "GAME OVER!")?;
    let summary = format!(
        "Final Score: {} - {}   Time: {}s   Rank: #{}",
        report.record.player_score,
        report.record.opponent_score,
        report.record.elapsed_seconds,
        report.rank
    );
    queue!(
        out,
        MoveTo(cx.saturating_sub(summary.len() as u16 / 2), top + 2),
        Print(&summary)
    )?;

    let prompt = match name_entry {
        Some(buffer) => format!("Enter your name: {buffer}_"),
        None if report.is_top_10 => "R play again   M menu".to_owned(),
        None => "Not a top-10 run.   R play again   M menu".to_owned(),
    };
    queue!(
        out,
        MoveTo(cx.saturating_sub(prompt.len() as u16 / 2), top + 4),
        Print(prompt)
    )?;
    Ok(())
}

fn draw_high_scores(out: &mut impl Write, app: &App) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let cx = cols / 2;

    banner(out, (cx, 1), "HIGH SCORES")?;
    let left = cx.saturating_sub(28);
    queue!(
        out,
        MoveTo(left, 3),
        SetAttribute(Attribute::Bold),
        Print(format!(
            "{:<5}{:<14}{:<9}{:<7}{:<12}",
            "RANK", "NAME", "SCORE", "TIME", "DATE"
        )),
        SetAttribute(Attribute::Reset)
    )?;

    if app.table.is_empty() {
        queue!(
            out,
            MoveTo(cx.saturating_sub(14), 5),
            Print("No high scores yet!"),
            MoveTo(cx.saturating_sub(14), 6),
            Print("Play a game to set a record.")
        )?;
    } else {
        for (i, entry) in app.table.entries().iter().enumerate() {
            queue!(
                out,
                MoveTo(left, 4 + i as u16),
                Print(format!(
                    "{:<5}{:<14}{:<9}{:<7}{:<12}",
                    format!("{}.", i + 1),
                    entry.name,
                    format!("{} - {}", entry.player_score, entry.opponent_score),
                    format!("{}s", entry.elapsed_seconds),
                    entry.date
                ))
            )?;
        }
    }

    queue!(
        out,
        MoveTo(cx.saturating_sub(16), rows.saturating_sub(2)),
        Print("Esc back   C clear scores")
    )?;
    Ok(())
}

fn on_off(muted: bool) -> &'static str {
    if muted {
        "ON"
    } else {
        "OFF"
    }
}

fn draw_options(out: &mut impl Write, app: &App, selected: usize) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let cx = cols / 2;
    let top = rows / 3;

    banner(out, (cx, top), "OPTIONS")?;
    for (i, row) in OPTION_ROWS.iter().enumerate() {
        let value = match i {
            0 => format!("{:3.0}%", app.settings.music_volume * 100.0),
            1 => format!("{:3.0}%", app.settings.sfx_volume * 100.0),
            2 => on_off(app.settings.music_muted).to_owned(),
            3 => on_off(app.settings.sfx_muted).to_owned(),
            _ => String::new(),
        };
        let marker = if i == selected { "> " } else { "  " };
        let line = format!("{marker}{row:<14}{value}");
        queue!(
            out,
            MoveTo(cx.saturating_sub(12), top + 2 + 2 * i as u16),
            Print(line)
        )?;
    }
    queue!(
        out,
        MoveTo(cx.saturating_sub(18), rows.saturating_sub(2)),
        Print("Arrows adjust   Esc back")
    )?;
    Ok(())
}
