use tallygrid_core::{EditLock, Roster};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub roster: UseStateHandle<Roster>,
    pub lock: UseStateHandle<EditLock>,
    /// Short feedback lines for save/load outcomes, newest last.
    pub status: UseStateHandle<Vec<String>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        roster: use_state(Roster::default),
        lock: use_state(EditLock::default),
        status: use_state(Vec::new),
    }
}
