use std::error::Error;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use flexi_logger::{FileSpec, Logger};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::sync::{mpsc, Mutex};

use helpbot::api::ChatClient;
use helpbot::{config, key_handlers, ui, App, AppScreen};

enum Event {
    Input(CEvent),
    Tick,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    config::initialize_config()?;
    let cfg = config::get_config();

    // The TUI owns the terminal, so logs go to a file.
    let log_dir = dirs::home_dir()
        .map(|home| home.join(".config").join("helpbot").join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("."));
    let _logger = Logger::try_with_str(&cfg.log_level)?
        .log_to_file(FileSpec::default().directory(log_dir).basename("helpbot"))
        .start()?;

    let client = ChatClient::from_config()?;
    let app = Arc::new(Mutex::new(App::new(client)));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        eprintln!("{}", err);
    }
    res
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: Arc<Mutex<App>>,
) -> Result<(), Box<dyn Error>> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    // Input reader + ticker. Ticks keep the spinner and the streaming
    // transcript repainting while no keys arrive.
    tokio::spawn(async move {
        let mut last_tick = Instant::now();
        loop {
            let timeout = Duration::from_millis(100);
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(event) = event::read() {
                    if tx.send(Event::Input(event)).await.is_err() {
                        return;
                    }
                }
            }
            if last_tick.elapsed() >= Duration::from_millis(100) {
                if tx.send(Event::Tick).await.is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    loop {
        {
            let guard = app.lock().await;
            terminal.draw(|f| ui::draw(f, &guard))?;
            if guard.screen == AppScreen::Quit {
                break;
            }
        }

        match rx.recv().await {
            Some(Event::Input(CEvent::Key(key))) => {
                let mut guard = app.lock().await;
                key_handlers::handle_key(&mut guard, &app, key);
            }
            Some(Event::Input(_)) => {}
            Some(Event::Tick) => {
                let mut guard = app.lock().await;
                guard.status.update_spinner();
            }
            None => break,
        }
    }

    Ok(())
}
