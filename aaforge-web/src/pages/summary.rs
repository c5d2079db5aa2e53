//! Build summary: character facts, credit costs, and equipment totals.

use aaforge_core::{Build, StatId, Tier};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub build: Build,
}

#[function_component(SummaryPage)]
pub fn summary_page(props: &Props) -> Html {
    let build = &props.build;
    let totals = build.total_credits_by_tier();
    let by_class = build.credit_costs_by_class();
    let stats = build.equipment_stats();

    let identity = format!(
        "{} - level {} {} {}",
        build.name,
        build.level(),
        build.race().map_or("(no race)", |r| r.name()),
        build.class().map_or("(no class)", |c| c.name()),
    );

    html! {
        <section class="page summary-page">
            <h2>{ "Summary" }</h2>
            <p class="identity">{ identity }</p>

            <h3>{ "Credits by tier" }</h3>
            <table class="credit-totals">
                <tbody>
                    { for Tier::ALL.iter().map(|tier| html! {
                        <tr key={tier.rank()}>
                            <th>{ tier.name() }</th>
                            <td>{ totals.get(*tier) }</td>
                            <td class="plat">
                                { format!("{}pp", u64::from(totals.get(*tier))
                                    * u64::from(tier.plat_per_credit())) }
                            </td>
                        </tr>
                    }) }
                    <tr class="grand-total">
                        <th>{ "Total" }</th>
                        <td>{ totals.total() }</td>
                        <td class="plat">{ format!("{}pp", totals.plat_cost()) }</td>
                    </tr>
                </tbody>
            </table>

            <h3>{ "Credits by class" }</h3>
            if by_class.is_empty() {
                <p class="empty">{ "No abilities selected." }</p>
            } else {
                <table class="class-credits">
                    <thead>
                        <tr>
                            <th>{ "Class" }</th>
                            { for Tier::ALL.iter().map(|t| html! { <th>{ t.name() }</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        { for by_class.iter().map(|(class_name, credits)| html! {
                            <tr key={class_name.clone()}>
                                <th>{ class_name.clone() }</th>
                                { for Tier::ALL.iter().map(|t| html! {
                                    <td>{ credits.get(*t) }</td>
                                }) }
                            </tr>
                        }) }
                    </tbody>
                </table>
            }

            <h3>{ "Selected abilities" }</h3>
            <ul class="selected-abilities">
                { for build.selected_abilities().values().map(|sel| html! {
                    <li key={sel.ability.universal_id}>
                        { format!(
                            "{} (rank {}/{}, {})",
                            sel.ability.name, sel.ranks,
                            sel.ability.total_ranks, sel.ability.tier.name(),
                        ) }
                    </li>
                }) }
            </ul>

            <h3>{ "Equipment stats" }</h3>
            if stats.is_zero() {
                <p class="empty">{ "Nothing equipped." }</p>
            } else {
                <table class="stat-totals">
                    <tbody>
                        { for StatId::ALL.iter().filter(|s| stats.get(**s) != 0).map(|stat| html! {
                            <tr key={stat.key()}>
                                <th>{ stat.label() }</th>
                                <td>{ format!("{:+}", stats.get(*stat)) }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aaforge_core::{GameClass, Race};
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        build: Build,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! { <SummaryPage build={props.build.clone()} /> }
    }

    fn render(build: Build) -> String {
        block_on(
            LocalServerRenderer::<Harness>::with_props(HarnessProps { build }).render(),
        )
    }

    #[test]
    fn empty_build_renders_placeholders() {
        let html = render(Build::new());
        assert!(html.contains("New Build"));
        assert!(html.contains("(no race)"));
        assert!(html.contains("No abilities selected."));
        assert!(html.contains("Nothing equipped."));
    }

    #[test]
    fn selections_show_up_with_credit_totals() {
        let ability: aaforge_core::Ability = serde_json::from_str(
            r#"{ "universalId": 5, "name": "Mystic Ward", "tier": 3,
                 "totalRanks": 2, "originalClassNames": ["Cleric", "Shaman"] }"#,
        )
        .unwrap();
        let mut build = Build::new();
        build.set_name("Wardkeeper");
        build.set_race(Some(Race::Dwarf));
        build.set_class(Some(GameClass::Cleric));
        build.set_ability_rank(&ability, 2);

        let html = render(build);
        assert!(html.contains("Wardkeeper"));
        assert!(html.contains("Mystic Ward"));
        assert!(html.contains("Shaman"));
        // 2 ascendant credits at 500pp each.
        assert!(html.contains("1000pp"));
    }
}
