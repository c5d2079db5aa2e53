//! Equipment planner: the 22 slots plus an item search panel.

use aaforge_core::{Build, Item, Slot, StatId};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub build: Build,
    pub results: Vec<Item>,
    pub on_search: Callback<String>,
    pub on_equip: Callback<(Slot, Item)>,
    pub on_unequip: Callback<Slot>,
}

fn stat_summary(item: &Item) -> String {
    let parts: Vec<String> = StatId::ALL
        .iter()
        .filter_map(|stat| {
            let value = item.stats.get(*stat);
            (value != 0).then(|| format!("{} {value:+}", stat.label()))
        })
        .collect();
    parts.join(", ")
}

#[function_component(EquipmentPage)]
pub fn equipment_page(props: &Props) -> Html {
    // Which slot search results get equipped into.
    let target_slot = use_state(|| Slot::Primary);
    let query = use_state(String::new);

    let on_query = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_search = {
        let cb = props.on_search.clone();
        let query = query.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit((*query).clone());
        })
    };

    html! {
        <section class="page equipment-page">
            <h2>{ "Equipment" }</h2>
            <div class="equipment-grid">
                <table class="slots">
                    <tbody>
                        { for Slot::ALL.iter().map(|slot| {
                            let slot = *slot;
                            let select = target_slot.clone();
                            let unequip = props.on_unequip.clone();
                            let equipped = props.build.equipped(slot);
                            let row_class = if *target_slot == slot {
                                "slot-row targeted"
                            } else {
                                "slot-row"
                            };
                            html! {
                                <tr class={row_class} key={slot.as_str()}
                                    onclick={move |_| select.set(slot)}>
                                    <th>{ slot.display_name() }</th>
                                    <td>
                                        { match equipped {
                                            Some(item) => html! { <>
                                                <span class="item-name">{ item.name.clone() }</span>
                                                <button class="unequip"
                                                    onclick={move |e: MouseEvent| {
                                                        e.stop_propagation();
                                                        unequip.emit(slot);
                                                    }}>
                                                    { "\u{00d7}" }
                                                </button>
                                            </> },
                                            None => html! {
                                                <span class="empty">{ "(empty)" }</span>
                                            },
                                        } }
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
                <div class="item-search">
                    <form onsubmit={on_search}>
                        <input type="search" placeholder="Search items by name"
                            value={(*query).clone()} oninput={on_query} />
                        <button type="submit">{ "Search" }</button>
                    </form>
                    <p class="target-hint">
                        { format!("Equipping into: {}", target_slot.display_name()) }
                    </p>
                    <ul class="item-results">
                        { for props.results.iter().map(|item| {
                            let equip = props.on_equip.clone();
                            let slot = *target_slot;
                            let item_clone = item.clone();
                            html! {
                                <li key={item.id.to_string()}>
                                    <button class="equip"
                                        onclick={move |_| equip.emit((slot, item_clone.clone()))}>
                                        { "Equip" }
                                    </button>
                                    <span class="item-name">{ item.name.clone() }</span>
                                    <span class="item-stats">{ stat_summary(item) }</span>
                                </li>
                            }
                        }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}
