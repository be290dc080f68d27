use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use artgrid_core::{update, AppState, Msg};
use grid_logging::{grid_debug, grid_info};
use is_terminal::IsTerminal;

use super::config::GridConfig;
use super::effects::EffectRunner;
use super::ui;
use super::ui::input::Command;
use crate::args::Cli;

/// Everything the event loop reacts to, from any thread.
pub enum Inbound {
    Msg(Msg),
    Line(String),
    InputClosed,
}

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    grid_logging::initialize(&cli.log_destination(), cli.log_level.into());

    let mut config = GridConfig::load(cli.config.as_deref())?;
    config.apply_overrides(&cli);
    grid_info!("Starting artgrid against {}", config.endpoint);

    let (inbound_tx, inbound_rx) = mpsc::channel::<Inbound>();
    let runner = EffectRunner::new(config.fetch_settings(), inbound_tx.clone())
        .context("starting fetch engine")?;
    spawn_input_reader(inbound_tx);

    // Not locked: log output from engine threads may share the terminal.
    let mut out = io::stdout();
    let color = out.is_terminal();

    let mut state = AppState::new();
    dispatch_msg(&mut state, &runner, Msg::Started);
    render_if_dirty(&mut state, &mut out, color)?;

    while let Ok(inbound) = inbound_rx.recv() {
        match inbound {
            Inbound::Msg(msg) => dispatch_msg(&mut state, &runner, msg),
            Inbound::Line(line) => match ui::input::parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => {
                    writeln!(out, "{}", ui::input::HELP)?;
                    write_prompt(&mut out)?;
                }
                Ok(command) => {
                    let view = state.view();
                    for msg in ui::input::to_msgs(&command, &view) {
                        dispatch_msg(&mut state, &runner, msg);
                    }
                    if !state.is_dirty() {
                        write_prompt(&mut out)?;
                    }
                }
                Err(reason) => {
                    if !reason.is_empty() {
                        writeln!(out, "{reason}")?;
                    }
                    write_prompt(&mut out)?;
                }
            },
            Inbound::InputClosed => break,
        }
        render_if_dirty(&mut state, &mut out, color)?;
    }

    grid_info!("Exiting with {} selected artworks", state.selection().len());
    Ok(())
}

fn dispatch_msg(state: &mut AppState, runner: &EffectRunner, msg: Msg) {
    grid_debug!("Dispatching {}", msg_label(&msg));
    let current = std::mem::take(state);
    let (next, effects) = update(current, msg);
    *state = next;
    runner.enqueue(effects);
}

fn render_if_dirty(state: &mut AppState, out: &mut impl Write, color: bool) -> io::Result<()> {
    if !state.consume_dirty() {
        return Ok(());
    }
    let view = state.view();
    write!(out, "\n{}", ui::render::render(&view, color))?;
    write_prompt(out)
}

fn write_prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}", ui::constants::PROMPT)?;
    out.flush()
}

/// Short message name for logs; page payloads are too large to print.
fn msg_label(msg: &Msg) -> &'static str {
    match msg {
        Msg::Started => "Started",
        Msg::PageRequested(_) => "PageRequested",
        Msg::PageLoaded { .. } => "PageLoaded",
        Msg::PageFailed { .. } => "PageFailed",
        Msg::SelectionChanged(_) => "SelectionChanged",
        Msg::SelectAllClicked => "SelectAllClicked",
        Msg::CountInputChanged(_) => "CountInputChanged",
        Msg::CountSubmitted => "CountSubmitted",
        Msg::ClearClicked => "ClearClicked",
        Msg::CancelProgressive => "CancelProgressive",
        Msg::NoOp => "NoOp",
    }
}

fn spawn_input_reader(tx: mpsc::Sender<Inbound>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(Inbound::Line(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(Inbound::InputClosed);
    });
}
