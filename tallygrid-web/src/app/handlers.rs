//! Callback builders wiring UI events to core mutations.
//!
//! Every mutation clones the state out of its handle, applies the core
//! operation, and sets the handle back, so the derived view re-renders from
//! the updated value.

use tallygrid_core::{load_roster, save_roster, snapshot};
use yew::prelude::*;

use crate::app::state::AppState;
use crate::storage::BrowserStore;

fn push_status(handle: &UseStateHandle<Vec<String>>, line: impl Into<String>) {
    let mut lines = (**handle).clone();
    lines.push(line.into());
    handle.set(lines);
}

pub fn build_add_player(state: &AppState) -> Callback<()> {
    let roster = state.roster.clone();
    Callback::from(move |()| {
        let mut next = (*roster).clone();
        next.add_player();
        roster.set(next);
    })
}

pub fn build_add_round(state: &AppState) -> Callback<()> {
    let roster = state.roster.clone();
    Callback::from(move |()| {
        let mut next = (*roster).clone();
        next.add_round();
        roster.set(next);
    })
}

pub fn build_set_name(state: &AppState) -> Callback<(usize, String)> {
    let roster = state.roster.clone();
    Callback::from(move |(player, name): (usize, String)| {
        let mut next = (*roster).clone();
        next.set_name(player, name);
        roster.set(next);
    })
}

pub fn build_set_score(state: &AppState) -> Callback<(usize, usize, String)> {
    let roster = state.roster.clone();
    Callback::from(move |(player, round, raw): (usize, usize, String)| {
        let mut next = (*roster).clone();
        // A rejected write leaves `next` untouched; setting the handle anyway
        // snaps the cell back to the kept value on re-render.
        let _ = next.set_score(player, round, &raw);
        roster.set(next);
    })
}

pub fn build_request_edit(state: &AppState) -> Callback<()> {
    let lock = state.lock.clone();
    Callback::from(move |()| {
        let mut next = (*lock).clone();
        next.request_edit();
        lock.set(next);
    })
}

pub fn build_lock(state: &AppState) -> Callback<()> {
    let lock = state.lock.clone();
    Callback::from(move |()| {
        let mut next = (*lock).clone();
        next.lock();
        lock.set(next);
    })
}

pub fn build_enter_passcode(state: &AppState) -> Callback<String> {
    let lock = state.lock.clone();
    Callback::from(move |text: String| {
        let mut next = (*lock).clone();
        next.enter_passcode(text);
        lock.set(next);
    })
}

pub fn build_confirm_unlock(state: &AppState) -> Callback<()> {
    let lock = state.lock.clone();
    Callback::from(move |()| {
        let mut next = (*lock).clone();
        next.confirm_unlock();
        lock.set(next);
    })
}

pub fn build_set_passcode(state: &AppState) -> Callback<String> {
    let lock = state.lock.clone();
    Callback::from(move |value: String| {
        let mut next = (*lock).clone();
        next.set_passcode(value);
        lock.set(next);
    })
}

pub fn build_save(state: &AppState) -> Callback<()> {
    let roster = state.roster.clone();
    let status = state.status.clone();
    Callback::from(move |()| match save_roster(&BrowserStore, &roster) {
        Ok(()) => push_status(&status, "Saved."),
        Err(err) => {
            log::warn!("save failed: {err}");
            push_status(&status, "Could not save; scores kept in memory.");
        }
    })
}

pub fn build_load(state: &AppState) -> Callback<()> {
    let roster = state.roster.clone();
    let status = state.status.clone();
    Callback::from(move |()| match load_roster(&BrowserStore) {
        Ok(Some(loaded)) => {
            roster.set(loaded);
            push_status(&status, "Loaded saved scores.");
        }
        Ok(None) => push_status(&status, "Nothing saved yet."),
        Err(err) => {
            log::warn!("load failed: {err}");
            push_status(&status, "Saved data unreadable; keeping current scores.");
        }
    })
}

pub fn build_export(state: &AppState) -> Callback<()> {
    let roster = state.roster.clone();
    let status = state.status.clone();
    Callback::from(move |()| {
        let Ok(text) = snapshot::encode(&roster) else {
            return;
        };
        if let Some(win) = web_sys::window() {
            let nav = win.navigator();
            let cb = nav.clipboard();
            let _ = cb.write_text(&text);
            push_status(&status, "Copied scores to the clipboard.");
        }
    })
}

pub fn build_import(state: &AppState) -> Callback<String> {
    let roster = state.roster.clone();
    let status = state.status.clone();
    Callback::from(move |txt: String| match snapshot::decode(&txt) {
        Ok(imported) => {
            roster.set(imported);
            push_status(&status, "Imported scores.");
        }
        Err(err) => {
            log::warn!("import failed: {err}");
            push_status(&status, "That text is not a valid export; keeping current scores.");
        }
    })
}
