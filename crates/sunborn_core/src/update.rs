use crate::{AppState, CheckStatus, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            if state.request_load() {
                vec![Effect::LoadAllowlists]
            } else {
                Vec::new()
            }
        }
        Msg::ListsLoaded { a, b } => {
            state.finish_loading(a, b);
            Vec::new()
        }
        Msg::ListsFailed => {
            state.fail_loading();
            Vec::new()
        }
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::CheckSubmitted => {
            // Loading gate: the checker is unreachable until the loader has
            // settled, and LoadFailed is terminal.
            if state.is_loading() || state.status() == CheckStatus::LoadFailed {
                return (state, Vec::new());
            }
            match state.begin_check() {
                Some(check_id) => vec![Effect::ScheduleResolve { check_id }],
                None => Vec::new(),
            }
        }
        Msg::CheckResolved { check_id } => {
            state.resolve_check(check_id);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
