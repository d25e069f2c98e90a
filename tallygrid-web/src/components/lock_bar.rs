//! Title row with the Edit/Lock toggle and the passcode entry flow.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub can_edit: bool,
    pub awaiting_passcode: bool,
    pub entry_valid: bool,
    pub entered: AttrValue,
    pub on_request_edit: Callback<()>,
    pub on_lock: Callback<()>,
    pub on_enter_passcode: Callback<String>,
    pub on_confirm_unlock: Callback<()>,
    pub on_set_passcode: Callback<String>,
}

#[function_component(LockBar)]
pub fn lock_bar(p: &Props) -> Html {
    let locked = !p.can_edit && !p.awaiting_passcode;

    let request_edit = {
        let cb = p.on_request_edit.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let lock = {
        let cb = p.on_lock.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let confirm = {
        let cb = p.on_confirm_unlock.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_entry = {
        let cb = p.on_enter_passcode.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let on_passcode = {
        let cb = p.on_set_passcode.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };

    html! {
        <header class="lock-bar">
            <div class="header-row">
                <h1>{ "Least Count Score Tracker" }</h1>
                if locked {
                    <button id="edit-toggle" onclick={request_edit}>{ "Edit" }</button>
                } else {
                    <button id="edit-toggle" onclick={lock}>{ "Lock" }</button>
                }
            </div>
            if p.awaiting_passcode {
                <div class="field unlock-row">
                    <label for="passcode-entry">{ "Passcode" }</label>
                    <input
                        id="passcode-entry"
                        type="password"
                        placeholder="Enter passcode"
                        value={p.entered.clone()}
                        oninput={on_entry}
                    />
                    if p.entry_valid {
                        <button id="unlock-btn" onclick={confirm}>{ "Unlock" }</button>
                    } else {
                        <button id="unlock-btn" disabled={true}>{ "Invalid passcode" }</button>
                    }
                </div>
            }
            if p.can_edit {
                <div class="field passcode-row">
                    <label for="passcode-set">{ "Set passcode" }</label>
                    <input
                        id="passcode-set"
                        type="password"
                        placeholder="New passcode"
                        oninput={on_passcode}
                    />
                </div>
            }
        </header>
    }
}
