use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use sunborn_core::{update, AppState, CheckStatus, Msg};
use sunborn_logging::sunborn_info;

use crate::config::AppConfig;
use crate::effects::EffectRunner;
use crate::render;

/// Events feeding the dispatch loop: core messages from the engine and the
/// input thread, plus the end-of-input signal.
pub enum AppEvent {
    Core(Msg),
    InputClosed,
}

pub fn run(config: AppConfig) -> anyhow::Result<()> {
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(&config, event_tx.clone());

    let mut state = AppState::new();
    dispatch(&mut state, Msg::Started, &runner);
    render::print(&state.view());

    // Loading gate: no submission can race the loader because the prompt
    // only opens once loading has settled.
    while state.is_loading() {
        match event_rx.recv() {
            Ok(AppEvent::Core(msg)) => dispatch(&mut state, msg, &runner),
            Ok(AppEvent::InputClosed) | Err(_) => return Ok(()),
        }
        if state.consume_dirty() {
            render::print(&state.view());
        }
    }

    if state.status() == CheckStatus::LoadFailed {
        // Terminal state; the error line has already been rendered.
        return Ok(());
    }

    spawn_input_thread(event_tx);
    render::print_prompt();

    loop {
        match event_rx.recv() {
            Ok(AppEvent::Core(msg)) => {
                dispatch(&mut state, msg, &runner);
                if state.consume_dirty() {
                    render::print(&state.view());
                    if resolved(state.status()) {
                        render::print_prompt();
                    }
                }
            }
            Ok(AppEvent::InputClosed) | Err(_) => break,
        }
    }

    sunborn_info!("session ended");
    Ok(())
}

fn resolved(status: CheckStatus) -> bool {
    matches!(
        status,
        CheckStatus::Whitelisted | CheckStatus::NotWhitelisted
    )
}

fn dispatch(state: &mut AppState, msg: Msg, runner: &EffectRunner) {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.enqueue(effects);
}

/// Each stdin line is a submission: set the input, then submit it.
fn spawn_input_thread(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if event_tx.send(AppEvent::Core(Msg::InputChanged(line))).is_err() {
                return;
            }
            if event_tx.send(AppEvent::Core(Msg::CheckSubmitted)).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}
