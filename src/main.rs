//! Interactive PIN entry demo

use std::io;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use keyview::ui::KeyDialog;
use keyview::{ErrorListener, KeyOutcome, KeyView, KeyViewConfig};

const PIN_LENGTH: usize = 4;

/// PINs may not start with a zero
struct LeadingZero;

impl ErrorListener for LeadingZero {
    fn has_error(&self, text: &str) -> bool {
        text.starts_with('0')
    }

    fn on_error_status_changed(&mut self, _has_error: bool, _text: &str) {}
}

enum Exit {
    Finished(String),
    Submitted(usize),
    Cancelled,
}

fn main() -> Result<()> {
    let mut view = KeyView::from_config(KeyViewConfig::pin(PIN_LENGTH))?;
    view.set_error_listener(LeadingZero);

    let finished: Arc<Mutex<Option<String>>> = Arc::default();
    let sink = Arc::clone(&finished);
    view.set_finished_listener(move |text: &str| {
        if let Ok(mut slot) = sink.lock() {
            *slot = Some(text.to_string());
        }
    });

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut view, &finished);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match result? {
        Exit::Finished(pin) => println!("PIN entered ({} digits)", pin.len()),
        Exit::Submitted(len) => println!("Submitted early with {} of {} digits", len, PIN_LENGTH),
        Exit::Cancelled => println!("Cancelled"),
    }
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    view: &mut KeyView,
    finished: &Mutex<Option<String>>,
) -> Result<Exit> {
    loop {
        terminal.draw(|frame| {
            let dialog = KeyDialog::new(" Unlock ", "Enter your PIN", &*view).error("PIN cannot start with 0");
            frame.render_widget(dialog, frame.area());
        })?;

        if let Some(pin) = finished.lock().ok().and_then(|mut slot| slot.take()) {
            if !view.has_error() {
                return Ok(Exit::Finished(pin));
            }
        }

        let Event::Key(key) = event::read()? else { continue };
        if key.kind == KeyEventKind::Press && key.code == KeyCode::Esc {
            return Ok(Exit::Cancelled);
        }

        if view.handle_key(key) == KeyOutcome::Submitted {
            return Ok(Exit::Submitted(view.len()));
        }
    }
}
