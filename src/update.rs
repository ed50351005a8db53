// src/update.rs
//
// Root reducer.  Every message goes through the domain reducers in
// `crate::reducers`; the first one that recognises it wins.
//
use crate::messages::{Command, Message};
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new(); // Collect commands to return

    if crate::reducers::session::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::navigation::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::metrics::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::facebook::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::comments::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::users::update(state, &msg, &mut commands) {
        return commands;
    }

    debug_log!("Unhandled message: {:?}", msg);
    commands
}
