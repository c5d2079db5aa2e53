//! Cross-class ability browser: filter, sort, and invest ranks.

use aaforge_core::{
    AbilityCatalog, AbilityFilter, AbilitySort, Build, GameClass, Tier, browse,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub build: Build,
    pub catalog: AbilityCatalog,
    pub filter: AbilityFilter,
    pub catalog_ready: bool,
    pub on_filter: Callback<AbilityFilter>,
    pub on_toggle: Callback<u32>,
    pub on_rank: Callback<(u32, i32)>,
}

#[function_component(AbilitiesPage)]
pub fn abilities_page(props: &Props) -> Html {
    if !props.catalog_ready {
        return html! {
            <section class="page abilities-page">
                <p class="loading">{ "Loading the ability tree..." }</p>
            </section>
        };
    }

    let on_search = {
        let cb = props.on_filter.clone();
        let filter = props.filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(AbilityFilter {
                search: input.value(),
                ..filter.clone()
            });
        })
    };

    let on_tier = {
        let cb = props.on_filter.clone();
        let filter = props.filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let tier = select.value().parse::<u8>().ok().and_then(Tier::from_rank);
            cb.emit(AbilityFilter {
                tier,
                ..filter.clone()
            });
        })
    };

    let on_class_filter = {
        let cb = props.on_filter.clone();
        let filter = props.filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(AbilityFilter {
                class: GameClass::from_name(&select.value()),
                ..filter.clone()
            });
        })
    };

    let on_sort = {
        let cb = props.on_filter.clone();
        let filter = props.filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let sort = AbilitySort::ALL
                .iter()
                .copied()
                .find(|s| s.label() == select.value())
                .unwrap_or_default();
            cb.emit(AbilityFilter {
                sort,
                ..filter.clone()
            });
        })
    };

    // The build's own class buys its abilities normally, not cross-class.
    let filter = AbilityFilter {
        exclude_class: props.build.class(),
        ..props.filter.clone()
    };
    let results = browse(&props.catalog, &filter);

    html! {
        <section class="page abilities-page">
            <h2>{ "Abilities" }</h2>
            <div class="filters">
                <input type="search" placeholder="Search name or description"
                    value={props.filter.search.clone()} oninput={on_search} />
                <select onchange={on_tier} title="Tier">
                    <option value="0" selected={props.filter.tier.is_none()}>
                        { "All tiers" }
                    </option>
                    { for Tier::ALL.iter().map(|t| html! {
                        <option value={t.rank().to_string()}
                            selected={props.filter.tier == Some(*t)}>
                            { t.name() }
                        </option>
                    }) }
                </select>
                <select onchange={on_class_filter} title="Class">
                    <option value="" selected={props.filter.class.is_none()}>
                        { "All classes" }
                    </option>
                    { for GameClass::ALL.iter().map(|c| html! {
                        <option value={c.name()}
                            selected={props.filter.class == Some(*c)}>
                            { c.name() }
                        </option>
                    }) }
                </select>
                <select onchange={on_sort} title="Sort by">
                    { for AbilitySort::ALL.iter().map(|s| html! {
                        <option value={s.label()} selected={props.filter.sort == *s}>
                            { s.label() }
                        </option>
                    }) }
                </select>
            </div>
            <p class="result-count">{ format!("{} abilities", results.len()) }</p>
            <ul class="ability-list">
                { for results.iter().map(|ability| {
                    let id = ability.universal_id;
                    let rank = props.build.ability_rank(id);
                    let toggle = props.on_toggle.clone();
                    let inc = props.on_rank.clone();
                    let dec = props.on_rank.clone();
                    let next_rank = rank.map_or(1, |r| r.saturating_add(1));
                    let prev_rank = rank.map_or(0, |r| r as i32 - 1);
                    let row_class = if rank.is_some() { "ability selected" } else { "ability" };
                    html! {
                        <li class={row_class} key={id}>
                            <div class="ability-head">
                                <button class="ability-toggle" onclick={move |_| toggle.emit(id)}>
                                    { match rank {
                                        Some(r) => format!("{}/{}", r, ability.total_ranks),
                                        None => format!("0/{}", ability.total_ranks),
                                    } }
                                </button>
                                <span class="ability-name">{ ability.name.clone() }</span>
                                <span class={format!("tier tier-{}", ability.tier.rank())}>
                                    { ability.tier.name() }
                                </span>
                                <span class="classes">
                                    { ability.original_class_names.join(", ") }
                                </span>
                            </div>
                            { ability.description.as_ref().map(|d| html! {
                                <p class="ability-desc">{ d.clone() }</p>
                            }) }
                            <div class="rank-controls">
                                <button disabled={rank.is_none()}
                                    onclick={move |_| dec.emit((id, prev_rank))}>
                                    { "-" }
                                </button>
                                <button disabled={rank == Some(ability.total_ranks)}
                                    onclick={move |_| inc.emit((id, next_rank as i32))}>
                                    { "+" }
                                </button>
                            </div>
                        </li>
                    }
                }) }
            </ul>
        </section>
    }
}
