use std::io::{self, Stdout};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use artgrid_core::{update, AppState, Msg};
use artgrid_logging::{artgrid_info, artgrid_trace};
use crossterm::{
    event::{self, Event as CrosstermEvent, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::config::{config_path_from_args, AppConfig};
use super::effects::EffectRunner;
use super::logging;
use super::ui::{self, constants::TICK_INTERVAL, keys::KeyAction};

enum InputEvent {
    Key(KeyEvent),
    Resize,
}

pub fn run_app() -> anyhow::Result<()> {
    let config_path = config_path_from_args();
    let config = AppConfig::load(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    logging::initialize(&config.log_file, config.log_level());
    artgrid_info!("artgrid starting against {}", config.api_base_url);

    let runner = EffectRunner::new(config.fetch_settings()).context("starting fetch engine")?;

    let (mut terminal, _guard) = setup_terminal().context("preparing terminal")?;

    let (input_tx, input_rx) = mpsc::channel::<InputEvent>();
    spawn_input_reader(input_tx);

    let mut app = App {
        state: AppState::new(),
        runner,
    };
    app.dispatch(Msg::Started);

    let mut needs_draw = true;
    loop {
        if app.state.consume_dirty() || needs_draw {
            let view = app.state.view();
            terminal.draw(|f| ui::render::render(f, &view))?;
            needs_draw = false;
        }

        match input_rx.recv_timeout(TICK_INTERVAL) {
            Ok(InputEvent::Key(key)) => {
                let view = app.state.view();
                match ui::keys::map_key(key, view.popover_open) {
                    Some(KeyAction::Quit) => break,
                    Some(action) => {
                        if let Some(msg) = ui::keys::action_to_msg(action, &view) {
                            app.dispatch(msg);
                        }
                    }
                    None => {}
                }
            }
            Ok(InputEvent::Resize) => needs_draw = true,
            Err(mpsc::RecvTimeoutError::Timeout) => app.dispatch(Msg::Tick),
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }

        for msg in app.runner.drain() {
            app.dispatch(msg);
        }
    }

    artgrid_info!("artgrid exiting");
    Ok(())
}

/// The one view session: its state and the runner that executes its effects.
struct App {
    state: AppState,
    runner: EffectRunner,
}

impl App {
    fn dispatch(&mut self, msg: Msg) {
        artgrid_trace!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }
}

fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    guarded_setup(enable_raw_mode, restore_terminal, || {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Terminal::new(CrosstermBackend::new(stdout))
    })
}

/// Arms the guard as soon as `enter` succeeds, so a failing `finish` still restores.
fn guarded_setup<T>(
    enter: impl FnOnce() -> io::Result<()>,
    restore: fn(),
    finish: impl FnOnce() -> io::Result<T>,
) -> io::Result<(T, TerminalGuard)> {
    enter()?;
    let guard = TerminalGuard { restore };
    let value = finish()?;
    Ok((value, guard))
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

struct TerminalGuard {
    restore: fn(),
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn spawn_input_reader(sender: mpsc::Sender<InputEvent>) {
    thread::spawn(move || loop {
        if let Ok(true) = event::poll(TICK_INTERVAL) {
            let forwarded = match event::read() {
                Ok(CrosstermEvent::Key(key)) => sender.send(InputEvent::Key(key)),
                Ok(CrosstermEvent::Resize(..)) => sender.send(InputEvent::Resize),
                _ => Ok(()),
            };
            if forwarded.is_err() {
                break;
            }
        }
    });
}
