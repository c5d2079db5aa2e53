//! Character identity: name, level, race, and class.

use aaforge_core::{Build, GameClass, MAX_LEVEL, Race};
use std::str::FromStr;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub build: Build,
    pub on_name: Callback<String>,
    pub on_level: Callback<u8>,
    pub on_race: Callback<Option<Race>>,
    pub on_class: Callback<Option<GameClass>>,
}

#[function_component(CharacterPage)]
pub fn character_page(props: &Props) -> Html {
    let on_name = {
        let cb = props.on_name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };

    let on_level = {
        let cb = props.on_level.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let level = input.value().parse::<u8>().unwrap_or(MAX_LEVEL);
            cb.emit(level);
        })
    };

    let on_race = {
        let cb = props.on_race.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(Race::from_str(&select.value()).ok());
        })
    };

    let on_class = {
        let cb = props.on_class.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(GameClass::from_name(&select.value()));
        })
    };

    // Only offer classes the chosen race can play.
    let class_options: Vec<GameClass> = match props.build.race() {
        Some(race) => race.classes().to_vec(),
        None => GameClass::ALL.to_vec(),
    };

    html! {
        <section class="page character-page">
            <h2>{ "Character" }</h2>
            <div class="field">
                <label for="build-name">{ "Build name" }</label>
                <input id="build-name" type="text"
                    value={props.build.name.clone()} onchange={on_name} />
            </div>
            <div class="field">
                <label for="level">{ "Level" }</label>
                <input id="level" type="number" min="1" max={MAX_LEVEL.to_string()}
                    value={props.build.level().to_string()} onchange={on_level} />
            </div>
            <div class="field">
                <label for="race">{ "Race" }</label>
                <select id="race" onchange={on_race}>
                    <option value="" selected={props.build.race().is_none()}>
                        { "- none -" }
                    </option>
                    { for Race::ALL.iter().map(|race| html! {
                        <option value={race.name()}
                            selected={props.build.race() == Some(*race)}>
                            { race.name() }
                        </option>
                    }) }
                </select>
            </div>
            <div class="field">
                <label for="class">{ "Class" }</label>
                <select id="class" onchange={on_class}>
                    <option value="" selected={props.build.class().is_none()}>
                        { "- none -" }
                    </option>
                    { for class_options.iter().map(|class| html! {
                        <option value={class.name()}
                            selected={props.build.class() == Some(*class)}>
                            { class.name() }
                        </option>
                    }) }
                </select>
            </div>
        </section>
    }
}
