use anyhow::{Context, Result};
use chrono::NaiveDate;
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, EventStream,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::path::PathBuf;

use wheelpick::app::App;
use wheelpick::config::Config;
use wheelpick::demo::{self, GroupSource, GroupsFile};
use wheelpick::events::{Action, EventHandler};
use wheelpick::log;
use wheelpick::tui;

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    item_height: Option<f64>,
    height: Option<f64>,
    groups: Option<PathBuf>,
    date: Option<NaiveDate>,
}

const USAGE: &str = "usage: wheelpick [--item-height PX] [--height PX] [--groups FILE.json] [--date YYYY-MM-DD]";

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();
    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args.get(i + 1);
        match (flag, value) {
            ("--item-height", Some(v)) => {
                parsed.item_height = Some(v.parse().with_context(|| format!("invalid --item-height '{}'", v))?);
            }
            ("--height", Some(v)) => {
                parsed.height = Some(v.parse().with_context(|| format!("invalid --height '{}'", v))?);
            }
            ("--groups" | "-g", Some(v)) => parsed.groups = Some(PathBuf::from(v)),
            ("--date" | "-d", Some(v)) => {
                parsed.date = Some(
                    NaiveDate::parse_from_str(v, "%Y-%m-%d")
                        .with_context(|| format!("invalid --date '{}'", v))?,
                );
            }
            ("--help" | "-h", _) => anyhow::bail!(USAGE),
            (flag, None) if flag.starts_with('-') => {
                anyhow::bail!("{} requires a value\n{}", flag, USAGE)
            }
            (other, _) => anyhow::bail!("unknown argument '{}'\n{}", other, USAGE),
        }
        i += 2;
    }
    Ok(parsed)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let args: Vec<String> = std::env::args().collect();
    let args = parse_args(&args)?;

    // Config precedence: CLI > env var > file > default
    let config = Config::load().with_overrides(args.item_height, args.height);

    let (source, values) = match &args.groups {
        Some(path) => {
            let file = GroupsFile::load(path)
                .with_context(|| format!("failed to load groups from {}", path.display()))?;
            (GroupSource::Static(file.option_groups), file.value_groups)
        }
        None => {
            let (first_year, last_year) = config.year_range();
            let date = args
                .date
                .unwrap_or_else(|| chrono::Local::now().date_naive());
            (
                GroupSource::Date {
                    first_year,
                    last_year,
                },
                demo::date_values(date),
            )
        }
    };

    let mut app = App::new(config, source, values)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result?;

    // Final selection for scripts
    println!("{}", serde_json::to_string_pretty(app.value_groups())?);
    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        app.sync()?;

        // Render
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        // Settles read the offset that was just drawn
        if app.after_render() {
            continue;
        }

        if app.should_quit {
            return Ok(());
        }

        match event_stream.next().await {
            Some(Ok(event)) => {
                let action = EventHandler::handle_event(app, &event);
                if action != Action::None {
                    log::log_event(&format!("{:?}", action));
                }
                app.dispatch(action)?;
            }
            Some(Err(e)) => return Err(e.into()),
            None => return Ok(()),
        }
    }
}
