use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs, io,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
    time::{Duration, Instant},
};

use ranchtui::config::Config;
use ranchtui::handlers;
use ranchtui::logic::ui::{advance_upload, UPLOAD_TICK_MS};
use ranchtui::model::Model;
use ranchtui::ui;
use ranchtui::utils;

/// Ranch admin panel TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp dir
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (j/k in lists)
    #[arg(long)]
    vim: bool,

    /// Disable mouse swipe gestures (lists keep persistent action keys)
    #[arg(long)]
    no_mouse: bool,

    /// Path to config file (default: platform config dir, then ./config.yaml)
    #[arg(short, long)]
    config: Option<String>,
}

static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

fn log_debug(msg: &str) {
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

/// Locate the config file. Unlike the CLI flag, the default locations are
/// optional: a missing file just means defaults.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("ranchtui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

fn main() -> Result<()> {
    let args = Args::parse();

    DEBUG_MODE.store(args.debug, Ordering::Relaxed);
    if args.debug {
        log_debug("Debug mode enabled");
    }

    let mut config = match get_config_path(args.config)? {
        Some(path) => {
            log_debug(&format!("Loading config from: {:?}", path));
            let config_str = fs::read_to_string(&path)?;
            serde_yaml::from_str::<Config>(&config_str)?
        }
        None => Config::default(),
    };

    if args.vim {
        config.vim_mode = true;
    }
    if args.no_mouse {
        config.mouse_gestures = false;
    }

    let mut model = Model::new();
    model.ui.vim_mode = config.vim_mode;
    model.ui.mouse_gestures = config.mouse_gestures;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.mouse_gestures {
        execute!(io::stdout(), EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut model);

    disable_raw_mode()?;
    if config.mouse_gestures {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    model: &mut Model,
) -> Result<()> {
    let mut last_upload_tick = Instant::now();

    loop {
        terminal.draw(|f| {
            ui::render(f, model);
        })?;

        // Toasts auto-dismiss after their fixed lifetime.
        if model.ui.toast_expired() {
            model.ui.dismiss_toast();
        }

        // Simulated upload: one percent per tick until complete.
        if model.ui.upload_progress.is_some()
            && last_upload_tick.elapsed() >= Duration::from_millis(UPLOAD_TICK_MS)
        {
            if let Some(progress) = model.ui.upload_progress {
                model.ui.upload_progress = Some(advance_upload(progress));
            }
            last_upload_tick = Instant::now();
        }

        if model.ui.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    log_debug(&format!("key: {:?}", key.code));
                    handlers::handle_key(model, key);
                }
                Event::Mouse(mouse) => handlers::handle_mouse(model, mouse),
                _ => {}
            }
        }
    }

    Ok(())
}
