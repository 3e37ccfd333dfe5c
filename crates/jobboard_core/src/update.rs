use crate::{AppState, Effect, Msg};

/// Applies a message to state and returns any effects.
///
/// Each keystroke runs to completion here: validate, maybe publish, recompute
/// the derived view, mark dirty.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Init => state.init(),
        Msg::InputChanged(text) => {
            state.input_changed(text);
            Vec::new()
        }
        Msg::JobsLoaded(jobs) => {
            state.apply_jobs(jobs);
            Vec::new()
        }
        Msg::JobsFailed(reason) => {
            state.apply_load_failure(reason);
            Vec::new()
        }
        Msg::Destroyed => {
            state.destroy();
            Vec::new()
        }
    };

    (state, effects)
}
