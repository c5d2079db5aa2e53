//! Spell browser backed by the remote spell search.

use aaforge_core::{Build, GameClass, Spell, skill_name, target_type_name};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::SpellQuery;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub build: Build,
    pub results: Vec<Spell>,
    pub on_search: Callback<SpellQuery>,
}

fn class_list(spell: &Spell) -> String {
    let parts: Vec<String> = spell
        .class_levels()
        .into_iter()
        .map(|(class, level)| format!("{} {level}", class.short_name()))
        .collect();
    parts.join(", ")
}

fn seconds(millis: i32) -> String {
    format!("{:.1}s", f64::from(millis) / 1000.0)
}

#[function_component(SpellsPage)]
pub fn spells_page(props: &Props) -> Html {
    let name = use_state(String::new);
    // Preselect the build's class, the most common search.
    let class = use_state(|| props.build.class());
    let min_level = use_state(|| None::<u8>);
    let max_level = use_state(|| None::<u8>);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_class = {
        let class = class.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            class.set(GameClass::from_name(&select.value()));
        })
    };

    let on_min = {
        let min_level = min_level.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            min_level.set(input.value().parse::<u8>().ok());
        })
    };

    let on_max = {
        let max_level = max_level.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            max_level.set(input.value().parse::<u8>().ok());
        })
    };

    let on_submit = {
        let cb = props.on_search.clone();
        let name = name.clone();
        let class = class.clone();
        let min_level = min_level.clone();
        let max_level = max_level.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(SpellQuery {
                name: (*name).clone(),
                class: *class,
                min_level: *min_level,
                max_level: *max_level,
            });
        })
    };

    html! {
        <section class="page spells-page">
            <h2>{ "Spells" }</h2>
            <form class="spell-filters" onsubmit={on_submit}>
                <input type="search" placeholder="Spell name"
                    value={(*name).clone()} oninput={on_name} />
                <select onchange={on_class} title="Class">
                    <option value="" selected={class.is_none()}>{ "Any class" }</option>
                    { for GameClass::ALL.iter().map(|c| html! {
                        <option value={c.name()} selected={*class == Some(*c)}>
                            { c.name() }
                        </option>
                    }) }
                </select>
                <input type="number" min="1" max="60" placeholder="Min level" onchange={on_min} />
                <input type="number" min="1" max="60" placeholder="Max level" onchange={on_max} />
                <button type="submit">{ "Search" }</button>
            </form>
            <table class="spell-results">
                <thead>
                    <tr>
                        <th>{ "Name" }</th>
                        <th>{ "Mana" }</th>
                        <th>{ "Cast" }</th>
                        <th>{ "Recast" }</th>
                        <th>{ "Skill" }</th>
                        <th>{ "Target" }</th>
                        <th>{ "Classes" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.results.iter().map(|spell| html! {
                        <tr key={spell.id}>
                            <td class="spell-name">{ spell.name.clone() }</td>
                            <td>{ spell.mana }</td>
                            <td>{ seconds(spell.cast_time) }</td>
                            <td>{ seconds(spell.recast_time) }</td>
                            <td>{ skill_name(spell.skill).unwrap_or("-") }</td>
                            <td>{ target_type_name(spell.targettype).unwrap_or("-") }</td>
                            <td class="spell-classes">{ class_list(spell) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </section>
    }
}
