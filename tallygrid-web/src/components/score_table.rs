//! The score grid: one row per player, one column per round, running totals.

use tallygrid_core::Roster;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub roster: Roster,
    /// When false every cell renders as plain text.
    pub can_edit: bool,
    /// Emits `(player index, new name)`.
    pub on_name_change: Callback<(usize, String)>,
    /// Emits `(player index, round index, raw text)`; the core decides
    /// whether the write sticks.
    pub on_score_change: Callback<(usize, usize, String)>,
}

#[function_component(ScoreTable)]
pub fn score_table(p: &Props) -> Html {
    let rounds = p.roster.round_count();

    let rows = p.roster.players().iter().enumerate().map(|(row, player)| {
        let name_cell = if p.can_edit {
            let cb = p.on_name_change.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                    cb.emit((row, input.value()));
                }
            });
            html! {
                <input
                    type="text"
                    value={player.name.clone()}
                    oninput={oninput}
                    aria-label={format!("Name for player {}", row + 1)}
                />
            }
        } else {
            html! { <>{ player.name.clone() }</> }
        };

        let score_cells = (0..rounds).map(|round| {
            // Ragged rows widen with zeros; editing a missing cell is a no-op.
            let shown = player.scores.get(round).copied().unwrap_or(0);
            if p.can_edit {
                let cb = p.on_score_change.clone();
                let oninput = Callback::from(move |e: InputEvent| {
                    if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                        cb.emit((row, round, input.value()));
                    }
                });
                html! {
                    <td class="score-cell">
                        <input
                            type="number"
                            value={shown.to_string()}
                            oninput={oninput}
                            aria-label={format!("Round {} score for player {}", round + 1, row + 1)}
                        />
                    </td>
                }
            } else {
                html! { <td class="score-cell">{ shown }</td> }
            }
        });

        html! {
            <tr key={row.to_string()}>
                <td class="name-cell">{ name_cell }</td>
                { for score_cells }
                <td class="total-cell">{ player.total() }</td>
            </tr>
        }
    });

    html! {
        <table class="score-table">
            <thead>
                <tr>
                    <th scope="col">{ "Player" }</th>
                    { for (0..rounds).map(|i| html! { <th scope="col">{ format!("Round {}", i + 1) }</th> }) }
                    <th scope="col">{ "Total" }</th>
                </tr>
            </thead>
            <tbody>
                { for rows }
            </tbody>
        </table>
    }
}
