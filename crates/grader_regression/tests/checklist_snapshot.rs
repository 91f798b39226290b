use grader_core::{run_scenario, ScenarioOptions};
use grader_regression::{duel_trace, pinned_roster};

#[test]
fn reference_checklist() {
    let mut roster = pinned_roster().unwrap();
    let checks = run_scenario(&mut roster, &ScenarioOptions::default());
    let checklist = checks
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!("reference_checklist", checklist);
}

#[test]
fn luke_finishes_vader() {
    let [luke, _, vader, _] = pinned_roster().unwrap().into_array();
    let vader = duel_core::Combatant::with_color(
        vader.name(),
        6,
        vader.faction(),
        vader.weapon_color(),
    )
    .unwrap();
    insta::assert_json_snapshot!("luke_vs_vader", duel_trace(&luke, &vader));
}
