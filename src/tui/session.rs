use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use smart_scheduler::{
    api::HttpEventsClient,
    app::{Action, AppState, EventForm, Mode, NotificationKind},
    home::Home,
    input::{command_mode, insert_mode, normal_mode},
    storage::Config,
    ui::theme::Theme,
};
use crate::tui::presentation::ui;

const TICK: Duration = Duration::from_millis(100);

pub async fn run_tui(config: Config) -> Result<(), io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::get_by_name(&config.ui.theme);
    let state = AppState::new()
        .with_theme(theme)
        .with_filter(config.ui.category_filter());
    let client = HttpEventsClient::new().with_base_url(config.api.base_url.clone());
    tracing::info!("Using events API at {}", client.base_url());

    let mut home = Home::new(Arc::new(client), state);
    home.dispatch(Action::Reload);

    let res = run_app(&mut terminal, &mut home, config.ui.notification_ttl());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    home: &mut Home<HttpEventsClient>,
    notification_ttl: Duration,
) -> io::Result<()> {
    loop {
        home.drain_outcomes();
        home.state.expire_notification(notification_ttl);

        terminal.draw(|f| ui(f, &home.state))?;

        if !event::poll(TICK)? {
            continue;
        }

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && handle_key(key.code, home)
        {
            return Ok(());
        }
    }
}

/// Returns true when the user asked to quit.
fn handle_key(code: KeyCode, home: &mut Home<HttpEventsClient>) -> bool {
    let action = match home.state.mode {
        Mode::Normal => {
            if home.state.show_help {
                handle_help_keys(code, &mut home.state);
                None
            } else if code == KeyCode::Char('q') {
                return true;
            } else {
                normal_mode::handle_key(code, &mut home.state)
            }
        }
        Mode::Insert => insert_mode::handle_key(code, &mut home.state),
        Mode::Command => match handle_command_mode(code, &mut home.state) {
            CommandResult::Quit => return true,
            CommandResult::Dispatch(action) => Some(action),
            CommandResult::Continue => None,
        },
    };

    if let Some(action) = action {
        home.dispatch(action);
    }
    false
}

fn handle_help_keys(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('j') => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
            app.show_help = false;
            app.help_scroll = 0;
        }
        _ => {}
    }
}

enum CommandResult {
    Quit,
    Dispatch(Action),
    Continue,
}

fn handle_command_mode(code: KeyCode, app: &mut AppState) -> CommandResult {
    match code {
        KeyCode::Enter => {
            let cmd = command_mode::parse_command(&app.command_buffer);
            app.command_buffer.clear();
            app.mode = Mode::Normal;

            match cmd {
                command_mode::Command::Quit => return CommandResult::Quit,
                command_mode::Command::Reload => return CommandResult::Dispatch(Action::Reload),
                command_mode::Command::NewEvent(title) => {
                    app.open_form(EventForm::with_title(title.unwrap_or_default()));
                }
                command_mode::Command::Filter(filter) => {
                    app.set_filter(filter);
                }
                command_mode::Command::Theme(theme_name) => {
                    app.theme = Theme::get_by_name(&theme_name);
                }
                command_mode::Command::Help => {
                    app.show_help = !app.show_help;
                }
                command_mode::Command::Error(message) => {
                    tracing::warn!("Command rejected: {}", message);
                    app.notify(NotificationKind::Error, message);
                }
            }
            CommandResult::Continue
        }
        KeyCode::Esc => {
            app.command_buffer.clear();
            app.mode = Mode::Normal;
            CommandResult::Continue
        }
        KeyCode::Backspace => {
            app.command_buffer.pop();
            if app.command_buffer.is_empty() {
                app.mode = Mode::Normal;
            }
            CommandResult::Continue
        }
        KeyCode::Char(c) => {
            app.command_buffer.push(c);
            CommandResult::Continue
        }
        _ => CommandResult::Continue,
    }
}
