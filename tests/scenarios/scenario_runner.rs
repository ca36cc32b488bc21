use super::scenario_loader::{SCENARIOS, Scenario, WireParam, load_scenarios};
/// Scenario runner
///
/// Replays scenarios through `reduce_raw` and checks the resulting state
use advsearch::{
    Action, Parameter, ParameterList, Payload, State, initial_state, reduce, reduce_raw,
};
use serde_json::Value;

fn to_parameter(value: &Value) -> Option<Parameter> {
    let name = value.get("name")?.as_str()?;
    let value = value.get("value")?.as_str()?;
    Some(Parameter::new(name, value))
}

/// Map a wire payload onto the typed payload; `None` for shapes the
/// reducer cannot take at all
fn to_payload(value: &Value) -> Option<Payload> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(to_parameter)
            .collect::<Option<ParameterList>>()
            .map(Payload::List),
        _ => to_parameter(value).map(Payload::Param),
    }
}

fn run_scenario(scenario: &Scenario) -> State {
    scenario
        .actions
        .iter()
        .fold(initial_state(), |state, action| match to_payload(&action.param) {
            Some(payload) => reduce_raw(state, &action.kind, payload),
            None => state,
        })
}

fn wire_params(state: &State) -> Vec<WireParam> {
    state
        .params
        .iter()
        .map(|p| WireParam {
            name: p.name().to_string(),
            value: p.value().to_string(),
        })
        .collect()
}

#[test]
fn test_run_inline_scenarios() {
    let mut failures = Vec::new();

    for scenario in load_scenarios(SCENARIOS) {
        let state = run_scenario(&scenario);
        if wire_params(&state) != scenario.expected {
            failures.push(format!(
                "{}: expected {:?}, got {:?}",
                scenario.name,
                scenario.expected,
                wire_params(&state)
            ));
        }
        if let Some(query) = &scenario.query {
            if &state.query_string() != query {
                failures.push(format!(
                    "{}: expected query {query:?}, got {:?}",
                    scenario.name,
                    state.query_string()
                ));
            }
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

/// Replay the same scenarios through the typed `Action` wire format.
/// Actions the wire format refuses (unknown type, wrong payload shape) are
/// exactly the ones the loose reducer ignores, so the end states agree.
#[test]
fn test_run_inline_scenarios_as_wire_actions() {
    let mut rejected = 0;

    for scenario in load_scenarios(SCENARIOS) {
        let state = scenario.actions.iter().fold(initial_state(), |state, action| {
            let wire = serde_json::json!({"type": action.kind, "param": action.param});
            match serde_json::from_value::<Action>(wire) {
                Ok(action) => reduce(state, action),
                Err(_) => {
                    rejected += 1;
                    state
                }
            }
        });
        assert_eq!(wire_params(&state), scenario.expected, "{}", scenario.name);
    }

    // "NOOP" and the SET_PARAMS carrying a single parameter
    assert_eq!(rejected, 2);
}
