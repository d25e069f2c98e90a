use yew::prelude::*;

pub mod handlers;
pub mod state;

use crate::components::lock_bar::LockBar;
use crate::components::save_panel::SavePanel;
use crate::components::score_table::ScoreTable;

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();

    let add_player = {
        let cb = handlers::build_add_player(&app_state);
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let add_round = {
        let cb = handlers::build_add_round(&app_state);
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="tally-app">
            <LockBar
                can_edit={app_state.lock.can_edit()}
                awaiting_passcode={app_state.lock.awaiting_passcode()}
                entry_valid={app_state.lock.entry_valid()}
                entered={AttrValue::from(app_state.lock.entered().to_string())}
                on_request_edit={handlers::build_request_edit(&app_state)}
                on_lock={handlers::build_lock(&app_state)}
                on_enter_passcode={handlers::build_enter_passcode(&app_state)}
                on_confirm_unlock={handlers::build_confirm_unlock(&app_state)}
                on_set_passcode={handlers::build_set_passcode(&app_state)}
            />
            <main id="main">
                <ScoreTable
                    roster={(*app_state.roster).clone()}
                    can_edit={app_state.lock.can_edit()}
                    on_name_change={handlers::build_set_name(&app_state)}
                    on_score_change={handlers::build_set_score(&app_state)}
                />
                <div class="controls roster-actions">
                    <button onclick={add_player}>{ "Add Player" }</button>
                    <button onclick={add_round}>{ "Add Round" }</button>
                </div>
                <SavePanel
                    on_save={handlers::build_save(&app_state)}
                    on_load={handlers::build_load(&app_state)}
                    on_export={handlers::build_export(&app_state)}
                    on_import={handlers::build_import(&app_state)}
                />
                if !app_state.status.is_empty() {
                    <ul class="status-log" aria-live="polite">
                        { for app_state.status.iter().map(|line| html! { <li>{ line.clone() }</li> }) }
                    </ul>
                }
            </main>
        </div>
    }
}
