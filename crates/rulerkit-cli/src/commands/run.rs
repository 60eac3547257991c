use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use rulerkit_core::AppConfig;
use rulerkit_tui::{
    event::{spawn_event_reader, AppEvent},
    input::handle_key_event,
    ui, App, FramePacer, Theme,
};

pub async fn run(config: AppConfig) -> Result<()> {
    // Build the app before touching the terminal so config errors print normally
    let mut app = App::new(config, Theme::default())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("rulerkit"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    tracing::info!(value = app.value.get(), "Ruler closed");
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut events = spawn_event_reader(Duration::from_millis(app.config.ui.tick_rate_ms));
    let mut pacer = FramePacer::new(app.config.ui.frame_interval());
    let mut animating = false;

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;
        if app.haptics.take_bell() {
            execute!(terminal.backend_mut(), Print('\u{7}'))?;
        }
        if app.should_quit {
            break;
        }

        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else {
                    break;
                };
                match event {
                    AppEvent::Key(key) => {
                        let action = handle_key_event(key, app.axis(), app.direction());
                        app.handle_action(action)?;
                    }
                    AppEvent::Mouse(mouse) => app.handle_mouse(&mouse, Instant::now()),
                    // Redrawn at the top of the loop
                    AppEvent::Resize(_, _) | AppEvent::Tick => {}
                }
            }
            delta = pacer.tick(), if animating => {
                app.on_frame(delta);
            }
        }

        // Frames only run while something moves; restart the clock after idling
        let wants_frames = app.needs_frames();
        if wants_frames && !animating {
            pacer.resume();
        }
        animating = wants_frames;
    }

    Ok(())
}
