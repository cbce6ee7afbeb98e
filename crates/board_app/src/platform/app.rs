use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use board_core::{update, Msg, PageState};
use board_engine::ClientSettings;
use board_logging::{board_debug, board_info};

use super::console::{parse_command, Command, HELP};
use super::effects::EffectRunner;
use super::ui;

/// Everything the message loop reacts to.
pub(crate) enum Input {
    Msg(Msg),
    List,
    Help,
    Invalid(String),
    Quit,
}

pub fn run_app(settings: ClientSettings) -> anyhow::Result<()> {
    board_info!(
        "Starting against {} page {}",
        settings.base_url,
        settings.page_path
    );

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    let runner = EffectRunner::new(settings, input_tx.clone())?;
    spawn_console(input_tx);

    println!("{HELP}");
    // The first page load goes through the same path as any reload.
    let mut state = dispatch_msg(PageState::new(), Msg::ReloadRequested, &runner);
    while let Ok(input) = input_rx.recv() {
        match input {
            Input::Msg(msg) => state = dispatch_msg(state, msg, &runner),
            Input::List => print_view(&state),
            Input::Help => println!("{HELP}"),
            Input::Invalid(reason) => println!("{reason} ({HELP})"),
            Input::Quit => break,
        }
    }

    board_info!("Shutting down");
    Ok(())
}

fn dispatch_msg(state: PageState, msg: Msg, runner: &EffectRunner) -> PageState {
    board_debug!("dispatch {:?}", msg);
    let (mut state, effects) = update(state, msg);
    board_logging::set_page_generation(state.generation());
    runner.run(effects);
    if state.consume_dirty() {
        print_view(&state);
    }
    state
}

fn print_view(state: &PageState) {
    for line in ui::render::render(&state.view()) {
        println!("{line}");
    }
}

fn spawn_console(input_tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let input = match parse_command(&line) {
                Ok(Command::List) => Input::List,
                Ok(Command::Click(element)) => Input::Msg(Msg::TriggerClicked { element }),
                Ok(Command::Reload) => Input::Msg(Msg::ReloadRequested),
                Ok(Command::Dismiss) => Input::Msg(Msg::NoticesDismissed),
                Ok(Command::Help) => Input::Help,
                Ok(Command::Quit) => Input::Quit,
                Err(reason) => Input::Invalid(reason),
            };
            let quit = matches!(input, Input::Quit);
            if input_tx.send(input).is_err() || quit {
                return;
            }
        }
        let _ = input_tx.send(Input::Quit);
    });
}
