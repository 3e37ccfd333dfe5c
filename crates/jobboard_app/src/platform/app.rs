use std::time::Duration;

use anyhow::Context;
use board_logging::{board_info, LogDestination};
use crossterm::event::{self, Event, KeyEventKind};
use jobboard_core::{update, AppState, Msg};
use jobboard_engine::FetchSettings;
use ratatui::backend::Backend;
use ratatui::Terminal;

use super::effects::EffectRunner;
use super::input::{key_action, KeyAction};
use super::terminal::TerminalGuard;
use super::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    board_logging::initialize(LogDestination::default());
    board_info!("Starting job board");

    let runner =
        EffectRunner::new(FetchSettings::default()).context("failed to start fetch engine")?;
    let mut guard = TerminalGuard::enter().context("failed to set up terminal")?;

    let mut app = App::new(runner);
    let result = app.run(guard.terminal_mut());
    app.shutdown();
    result
}

struct App {
    state: AppState,
    runner: EffectRunner,
    quit: bool,
}

impl App {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
            quit: false,
        }
    }

    fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let mut needs_render = self.dispatch(Msg::Init);

        while !self.quit {
            for msg in self.runner.poll() {
                needs_render |= self.dispatch(msg);
            }

            if needs_render {
                let view = self.state.view();
                terminal.draw(|frame| ui::render::render(frame, &view))?;
                needs_render = false;
            }

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        needs_render |= self.handle_key(key);
                    }
                    Event::Resize(..) => needs_render = true,
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: event::KeyEvent) -> bool {
        match key_action(&self.state.input_text(), key) {
            KeyAction::Edit(text) => self.dispatch(Msg::InputChanged(text)),
            KeyAction::Quit => {
                self.quit = true;
                false
            }
            KeyAction::Ignore => false,
        }
    }

    /// Runs one message through `update`, hands effects to the runner and
    /// reports whether the view changed.
    fn dispatch(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);
        was_dirty
    }

    fn shutdown(&mut self) {
        self.dispatch(Msg::Destroyed);
        board_info!("Job board destroyed");
    }
}
