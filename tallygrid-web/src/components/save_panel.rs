//! Save/Load/Export buttons and the paste-to-import field.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_save: Callback<()>,
    pub on_load: Callback<()>,
    pub on_export: Callback<()>,
    pub on_import: Callback<String>,
}

#[function_component(SavePanel)]
pub fn save_panel(p: &Props) -> Html {
    let import_text = use_state(|| AttrValue::from(""));
    let on_input = {
        let st = import_text.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                st.set(input.value().into());
            }
        })
    };
    let save = {
        let cb = p.on_save.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let load = {
        let cb = p.on_load.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let export_btn = {
        let cb = p.on_export.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let import_btn = {
        let cb = p.on_import.clone();
        let val = import_text.clone();
        Callback::from(move |_| cb.emit((*val).to_string()))
    };

    html! {
        <div class="panel save-panel">
            <div class="controls">
                <button onclick={save}>{ "Save" }</button>
                <button onclick={load}>{ "Load" }</button>
                <button onclick={export_btn}>{ "Copy export" }</button>
            </div>
            <div class="field">
                <label for="import-json"><strong>{ "Paste an export to import" }</strong></label>
                <textarea id="import-json" value={(*import_text).clone()} oninput={on_input} rows={4} cols={40} />
            </div>
            <div class="controls">
                <button onclick={import_btn}>{ "Import" }</button>
            </div>
        </div>
    }
}
