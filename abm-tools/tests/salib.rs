use abm_tools::*;
use indexmap::IndexMap;
use serde_json::{Value, json};
use std::collections::BTreeMap;

fn ranges<T>(entries: &[(&str, (T, T))]) -> IndexMap<String, (T, T)>
where
    T: Clone,
{
    entries
        .iter()
        .map(|(name, range)| (name.to_string(), range.clone()))
        .collect()
}

#[test]
fn converts_to_salib_record() {
    let problem = param_tuples_to_salib(ranges(&[("a", (0, 1)), ("b", (-5, 5))]));
    assert_eq!(
        serde_json::to_value(&problem).unwrap(),
        json!({"num_vars": 2, "names": ["a", "b"], "bounds": [[0, 1], [-5, 5]]})
    );
}

#[test]
fn keeps_input_order() {
    let problem = param_tuples_to_salib(ranges(&[("z", (0.0, 1.0)), ("a", (2.0, 3.0))]));
    assert_eq!(problem.names, vec!["z", "a"]);
    assert_eq!(problem.bounds, vec![[0.0, 1.0], [2.0, 3.0]]);
}

#[test]
fn accepts_sorted_maps() {
    let mut sorted = BTreeMap::new();
    sorted.insert("speed", (0.5, 2.0));
    sorted.insert("density", (0.1, 0.9));
    let problem = param_tuples_to_salib(sorted);
    assert_eq!(problem.num_vars, 2);
    assert_eq!(problem.names, vec!["density", "speed"]);
    assert_eq!(problem.bounds, vec![[0.1, 0.9], [0.5, 2.0]]);
}

#[test]
fn accepts_pair_lists_and_borrowed_names() {
    let problem = param_tuples_to_salib(vec![("b", (1u32, 2u32)), ("a", (3, 4))]);
    assert_eq!(problem.names, vec!["b", "a"]);
    assert_eq!(problem.bounds_of("a"), Some(&[3, 4]));
}

#[test]
fn empty_ranges() {
    let problem = param_tuples_to_salib(IndexMap::<String, (f64, f64)>::new());
    assert_eq!(problem.num_vars, 0);
    assert!(problem.names.is_empty());
    assert!(problem.bounds.is_empty());
}

#[test]
fn bounds_are_not_validated() {
    let problem = param_tuples_to_salib(ranges(&[("inverted", (10, -10))]));
    assert_eq!(problem.bounds, vec![[10, -10]]);
}

#[test]
fn bounds_of_looks_up_by_name() {
    let problem = param_tuples_to_salib(ranges(&[("a", (0, 1)), ("b", (-5, 5))]));
    assert_eq!(problem.bounds_of("b"), Some(&[-5, 5]));
    assert_eq!(problem.bounds_of("c"), None);
}

#[test]
fn deserializes_salib_record() {
    let problem: SalibProblem = serde_json::from_value(json!({
        "num_vars": 1,
        "names": ["x"],
        "bounds": [[0.1, 0.9]]
    }))
    .unwrap();
    assert_eq!(problem.bounds_of("x"), Some(&[0.1, 0.9]));
}

// --- Dynamic parameter records ---

#[test]
fn converts_dynamic_params() {
    let params: AttrDict = AttrDict::from([("a", json!([0, 1])), ("b", json!([-5.5, 5]))]);
    let problem = salib_from_params(&params).unwrap();
    assert_eq!(
        serde_json::to_value(&problem).unwrap(),
        json!({"num_vars": 2, "names": ["a", "b"], "bounds": [[0, 1], [-5.5, 5]]})
    );
}

#[test]
fn rejects_non_range_params() {
    let params: AttrDict = AttrDict::from([("a", json!([0, 1])), ("steps", json!(100))]);
    let err = salib_from_params(&params).unwrap_err();
    assert!(matches!(err, ParamError::NotARange { ref name, .. } if name == "steps"));
    assert!(err.to_string().contains("steps"));
}

#[test]
fn rejects_wrong_length_and_non_numeric_pairs() {
    let params: AttrDict = AttrDict::from([("a", json!([0, 1, 2]))]);
    assert!(salib_from_params(&params).is_err());

    let params: AttrDict = AttrDict::from([("a", json!(["low", "high"]))]);
    assert!(salib_from_params(&params).is_err());

    let params: AttrDict = AttrDict::from([("a", Value::Null)]);
    assert!(salib_from_params(&params).is_err());
}
