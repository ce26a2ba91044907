use std::io::{self, Stdout};

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use gallery_core::{update, AppState, Msg};
use gallery_engine::FetchSettings;
use gallery_logging::{gallery_debug, gallery_info};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::effects::EffectRunner;
use super::logging;
use super::ui::constants::TICK_INTERVAL;
use super::ui::grid::{GridAction, GridState};
use super::ui::render::render;

type ShellTerminal = Terminal<CrosstermBackend<Stdout>>;

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize();
    gallery_info!("starting gallery shell");

    let effects = EffectRunner::new(FetchSettings::default()).context("start fetch engine")?;
    let mut terminal = setup_terminal().context("set up terminal")?;

    let result = Shell::new(effects).run(&mut terminal);

    restore_terminal(&mut terminal).context("restore terminal")?;
    gallery_info!("gallery shell stopped");
    result
}

fn setup_terminal() -> io::Result<ShellTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut ShellTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

struct Shell {
    state: AppState,
    grid: GridState,
    effects: EffectRunner,
    quit: bool,
}

impl Shell {
    fn new(effects: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            grid: GridState::default(),
            effects,
            quit: false,
        }
    }

    fn run(&mut self, terminal: &mut ShellTerminal) -> anyhow::Result<()> {
        self.dispatch_msg(Msg::Mounted);
        let mut needs_draw = true;

        while !self.quit {
            for msg in self.effects.drain_events() {
                self.dispatch_msg(msg);
            }

            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        needs_draw |= self.handle_key(key);
                    }
                    Event::Resize(_, _) => needs_draw = true,
                    _ => {}
                }
            }

            needs_draw |= self.state.consume_dirty();
            if needs_draw {
                let view = self.state.view();
                self.grid.clamp(view.rows.len());
                terminal.draw(|frame| render(frame, &view, &self.grid))?;
                needs_draw = false;
            }
        }
        Ok(())
    }

    /// Returns whether the key changed something only the grid knows about.
    fn handle_key(&mut self, key: event::KeyEvent) -> bool {
        let view = self.state.view();
        match self.grid.handle_key(key, &view) {
            GridAction::Dispatch(msg) => {
                self.dispatch_msg(msg);
                false
            }
            GridAction::Moved => true,
            GridAction::Quit => {
                self.quit = true;
                false
            }
            GridAction::Ignored => false,
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        gallery_debug!("dispatch {}", msg_label(&msg));
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.enqueue(effects);
    }
}

fn msg_label(msg: &Msg) -> &'static str {
    match msg {
        Msg::Mounted => "Mounted",
        Msg::PageChanged(_) => "PageChanged",
        Msg::SelectionChanged(_) => "SelectionChanged",
        Msg::CustomSelectToggled => "CustomSelectToggled",
        Msg::CustomSelectClosed => "CustomSelectClosed",
        Msg::CustomCountInput(_) => "CustomCountInput",
        Msg::CustomSelectSubmitted => "CustomSelectSubmitted",
        Msg::PageLoaded { .. } => "PageLoaded",
        Msg::PageFailed { .. } => "PageFailed",
    }
}
