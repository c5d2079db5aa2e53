//! Root component: owns the app state and routes between planner tabs.

pub mod bootstrap;
pub mod handlers;
pub mod state;

use yew::prelude::*;

use crate::pages::{
    AbilitiesPage, BuildsPage, CharacterPage, EquipmentPage, SpellsPage, SummaryPage,
};
use state::{Tab, use_app_state};

#[function_component(App)]
pub fn app() -> Html {
    let state = use_app_state();
    #[cfg(target_arch = "wasm32")]
    {
        bootstrap::use_bootstrap(&state);
    }

    let on_tab = {
        let tab = state.tab.clone();
        Callback::from(move |t: Tab| tab.set(t))
    };

    let status_banner = state.status.as_ref().map(|message| {
        let dismiss = handlers::dismiss_status(&state);
        html! {
            <div class="status-banner" role="status">
                <span>{ message.clone() }</span>
                <button class="status-dismiss" onclick={dismiss.reform(|_| ())}>
                    { "\u{00d7}" }
                </button>
            </div>
        }
    });

    let page = match *state.tab {
        Tab::Character => html! {
            <CharacterPage
                build={(*state.build).clone()}
                on_name={handlers::set_name(&state)}
                on_level={handlers::set_level(&state)}
                on_race={handlers::set_race(&state)}
                on_class={handlers::set_class(&state)}
            />
        },
        Tab::Abilities => html! {
            <AbilitiesPage
                build={(*state.build).clone()}
                catalog={(*state.catalog).clone()}
                filter={(*state.filter).clone()}
                catalog_ready={*state.catalog_ready}
                on_filter={{
                    let filter = state.filter.clone();
                    Callback::from(move |f| filter.set(f))
                }}
                on_toggle={handlers::toggle_ability(&state)}
                on_rank={handlers::set_ability_rank(&state)}
            />
        },
        Tab::Equipment => html! {
            <EquipmentPage
                build={(*state.build).clone()}
                results={(*state.items).clone()}
                on_search={handlers::search_items(&state)}
                on_equip={handlers::equip_item(&state)}
                on_unequip={handlers::unequip_item(&state)}
            />
        },
        Tab::Spells => html! {
            <SpellsPage
                build={(*state.build).clone()}
                results={(*state.spells).clone()}
                on_search={handlers::search_spells(&state)}
            />
        },
        Tab::Summary => html! {
            <SummaryPage build={(*state.build).clone()} />
        },
        Tab::Builds => html! {
            <BuildsPage
                build={(*state.build).clone()}
                saved={(*state.saved_builds).clone()}
                on_save={handlers::save_build(&state)}
                on_load={handlers::load_build(&state)}
                on_delete={handlers::delete_build(&state)}
                on_reset={handlers::reset_build(&state)}
                on_export={handlers::export_to_clipboard(&state)}
                on_import={handlers::import_from_text(&state)}
            />
        },
    };

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{ "AAforge" }</h1>
                <nav class="tabs">
                    { for Tab::ALL.iter().map(|t| {
                        let t = *t;
                        let on_tab = on_tab.clone();
                        let active = if *state.tab == t { "tab active" } else { "tab" };
                        html! {
                            <button class={active} onclick={move |_| on_tab.emit(t)}>
                                { t.label() }
                            </button>
                        }
                    }) }
                </nav>
            </header>
            { status_banner }
            <main class="app-main">
                { page }
            </main>
        </div>
    }
}
