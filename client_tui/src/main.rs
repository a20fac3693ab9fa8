use std::fs::File;
use std::io;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute, terminal,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use leaderboard::JsonFileStore;
use tracing_subscriber::EnvFilter;

use client_tui::app::App;
use client_tui::audio::{AudioCues, BellSink};
use client_tui::{paths, render};

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let project = paths::project_paths()?;
    init_logging(&project.log_path);

    let settings = paths::load_settings(&project.settings_path);
    let store = JsonFileStore::new(&project.scores_path);
    let audio = AudioCues::new(Box::new(BellSink));
    let mut app = App::new(
        Box::new(store),
        settings,
        audio,
        Some(project.settings_path.clone()),
    );

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut app, &mut stdout);

    execute!(stdout, cursor::Show, LeaveAlternateScreen).ok();
    terminal::disable_raw_mode().ok();
    paths::save_settings(&project.settings_path, &app.settings);
    result
}

/// Log to a file in the data dir; stdout belongs to the game.
fn init_logging(path: &std::path::Path) {
    if let Ok(file) = File::create(path) {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }
}

fn run(app: &mut App, out: &mut io::Stdout) -> Result<()> {
    let mut last = Instant::now();

    while app.is_running() {
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    app.on_key(key.code, Instant::now());
                }
            }
        }

        let now = Instant::now();
        let dt = (now - last).as_secs_f32();
        last = now;
        app.tick(dt, now);

        render::draw(out, app)?;

        let spent = last.elapsed();
        if spent < FRAME {
            thread::sleep(FRAME - spent);
        }
    }
    Ok(())
}
