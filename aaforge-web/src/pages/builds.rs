//! Saved-build manager: save, load, delete, reset, and clipboard transfer.

use aaforge_core::Build;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub build: Build,
    pub saved: Vec<String>,
    pub on_save: Callback<String>,
    pub on_load: Callback<String>,
    pub on_delete: Callback<String>,
    pub on_reset: Callback<()>,
    pub on_export: Callback<()>,
    pub on_import: Callback<String>,
}

#[function_component(BuildsPage)]
pub fn builds_page(props: &Props) -> Html {
    let save_name = use_state(|| props.build.name.clone());
    let import_text = use_state(String::new);

    let on_save_name = {
        let save_name = save_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            save_name.set(input.value());
        })
    };

    let on_save_click = {
        let cb = props.on_save.clone();
        let save_name = save_name.clone();
        Callback::from(move |_: MouseEvent| cb.emit((*save_name).clone()))
    };

    let on_import_text = {
        let import_text = import_text.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            import_text.set(area.value());
        })
    };

    let on_import_click = {
        let cb = props.on_import.clone();
        let import_text = import_text.clone();
        Callback::from(move |_: MouseEvent| cb.emit((*import_text).clone()))
    };

    html! {
        <section class="page builds-page">
            <h2>{ "Builds" }</h2>

            <div class="save-row">
                <input type="text" placeholder="Save as..."
                    value={(*save_name).clone()} oninput={on_save_name} />
                <button onclick={on_save_click}>{ "Save" }</button>
                <button class="danger" onclick={props.on_reset.reform(|_| ())}>
                    { "New build" }
                </button>
                <button onclick={props.on_export.reform(|_| ())}>
                    { "Copy to clipboard" }
                </button>
            </div>

            <h3>{ "Saved builds" }</h3>
            if props.saved.is_empty() {
                <p class="empty">{ "No saved builds yet." }</p>
            } else {
                <ul class="saved-list">
                    { for props.saved.iter().map(|name| {
                        let load = props.on_load.clone();
                        let delete = props.on_delete.clone();
                        let load_name = name.clone();
                        let delete_name = name.clone();
                        html! {
                            <li key={name.clone()}>
                                <span class="build-name">{ name.clone() }</span>
                                <button onclick={move |_| load.emit(load_name.clone())}>
                                    { "Load" }
                                </button>
                                <button class="danger"
                                    onclick={move |_| delete.emit(delete_name.clone())}>
                                    { "Delete" }
                                </button>
                            </li>
                        }
                    }) }
                </ul>
            }

            <h3>{ "Import" }</h3>
            <textarea rows="8" placeholder="Paste a build document here"
                value={(*import_text).clone()} oninput={on_import_text} />
            <button onclick={on_import_click}>{ "Import" }</button>
        </section>
    }
}
