use std::io;
use std::path::Path;
use std::sync::{mpsc, Arc};

use anyhow::Context;
use ratatui::crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event};
use ratatui::crossterm::execute;
use ratatui::DefaultTerminal;
use shortener_core::{update, FormState, Msg};
use shortener_logging::{shortener_info, shortener_warn};

use super::config::{build_shortener, load_config, AppConfig, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;

pub fn run_app() -> anyhow::Result<()> {
    let (config, config_error) = match load_config(Path::new(CONFIG_FILENAME)) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    logging::initialize(LogDestination::File(config.log_file.clone()));
    if let Some(err) = config_error {
        shortener_warn!("Using default config: {}", err);
    }

    let shortener =
        build_shortener(&config).context("failed to set up the shortening client")?;
    shortener_info!("Shortening via {}", shortener.endpoint());

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner =
        EffectRunner::new(Arc::new(shortener), msg_tx).context("failed to start the engine")?;

    let mut terminal = ratatui::try_init().context("failed to initialize the terminal")?;
    let _ = execute!(io::stdout(), EnableBracketedPaste);
    let result = event_loop(&mut terminal, &runner, &msg_rx);
    let _ = execute!(io::stdout(), DisableBracketedPaste);
    ratatui::restore();

    shortener_info!("Shutting down");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    runner: &EffectRunner,
    msg_rx: &mpsc::Receiver<Msg>,
) -> anyhow::Result<()> {
    let mut state = FormState::new();
    let mut needs_draw = true;

    loop {
        while let Ok(msg) = msg_rx.try_recv() {
            needs_draw |= dispatch(&mut state, msg, runner);
        }

        if needs_draw {
            let view = state.view();
            terminal
                .draw(|frame| ui::render::render(frame, &view))
                .context("failed to draw")?;
            needs_draw = false;
        }

        if !event::poll(ui::constants::TICK_INTERVAL)? {
            needs_draw |= dispatch(&mut state, Msg::Tick, runner);
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) => ui::input::map_key(key, state.input()),
            Event::Paste(text) => ui::input::map_paste(&text, state.input()),
            Event::Resize(..) => {
                needs_draw = true;
                continue;
            }
            _ => continue,
        };

        match action {
            ui::input::KeyAction::Quit => return Ok(()),
            ui::input::KeyAction::Msg(msg) => needs_draw |= dispatch(&mut state, msg, runner),
            ui::input::KeyAction::Ignore => {}
        }
    }
}

/// Run one message through `update`, execute its effects, and report whether a redraw is due.
fn dispatch(state: &mut FormState, msg: Msg, runner: &EffectRunner) -> bool {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.enqueue(effects);
    state.consume_dirty()
}
