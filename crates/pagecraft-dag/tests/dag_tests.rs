use pagecraft_dag::{GraphError, NodeId, RunError, TaskGraph};
use proptest::prelude::*;

type Trail = Vec<String>;

fn record(name: String) -> impl Fn(Trail) -> Result<Trail, String> {
    move |mut trail: Trail| {
        trail.push(name.clone());
        Ok(trail)
    }
}

fn no_deps() -> Vec<&'static str> {
    Vec::new()
}

proptest! {
    #[test]
    fn prop_chain_order_is_exact(len in 1..24usize) {
        // Register a chain n0 -> n1 -> ... in reverse to make scheduling do the work.
        let mut graph: TaskGraph<Trail, String> = TaskGraph::new();
        for i in (0..len).rev() {
            let deps: Vec<String> = if i == 0 { Vec::new() } else { vec![format!("n{}", i - 1)] };
            graph.register(format!("n{i}"), record(format!("n{i}")), deps).unwrap();
        }

        let trail = graph.run(Vec::new()).unwrap();
        let expected: Vec<String> = (0..len).map(|i| format!("n{i}")).collect();
        prop_assert_eq!(trail, expected);
    }

    #[test]
    fn prop_order_respects_every_edge(
        node_count in 1..16usize,
        edges in proptest::collection::vec((0..16usize, 0..16usize), 0..40)
    ) {
        // Only forward edges (low -> high), so the graph is always acyclic.
        let mut deps: Vec<Vec<String>> = vec![Vec::new(); node_count];
        for (a, b) in edges {
            if a < b && b < node_count {
                deps[b].push(format!("n{a}"));
            }
        }

        let mut graph: TaskGraph<Trail, String> = TaskGraph::new();
        for (i, d) in deps.iter().enumerate() {
            graph.register(format!("n{i}"), record(format!("n{i}")), d.clone()).unwrap();
        }

        let order = graph.execution_order().unwrap();
        prop_assert_eq!(order.len(), node_count);
        let position = |id: &str| order.iter().position(|n| n.as_str() == id).unwrap();
        for (i, d) in deps.iter().enumerate() {
            let me = format!("n{}", i);
            for dep in d {
                prop_assert!(position(dep) < position(&me), "{} ran after {}", dep, me);
            }
        }
    }
}

#[test]
fn fork_join_puts_siblings_in_the_middle() {
    let mut graph: TaskGraph<Trail, String> = TaskGraph::new();
    graph.register("a", record("a".into()), no_deps()).unwrap();
    graph.register("b", record("b".into()), ["a"]).unwrap();
    graph.register("c", record("c".into()), ["a"]).unwrap();
    graph.register("d", record("d".into()), ["b", "c"]).unwrap();

    let trail = graph.run(Vec::new()).unwrap();
    assert_eq!(trail.first().map(String::as_str), Some("a"));
    assert_eq!(trail.last().map(String::as_str), Some("d"));
    let mut middle = trail[1..3].to_vec();
    middle.sort();
    assert_eq!(middle, vec!["b", "c"]);
}

#[test]
fn two_node_cycle_is_rejected_before_any_node_runs() {
    use std::cell::Cell;
    use std::rc::Rc;

    let ran = Rc::new(Cell::new(0u32));
    let mut graph: TaskGraph<Trail, String> = TaskGraph::new();
    for (id, dep) in [("a", "b"), ("b", "a")] {
        let ran = Rc::clone(&ran);
        graph
            .register(
                id,
                move |trail: Trail| -> Result<Trail, String> {
                    ran.set(ran.get() + 1);
                    Ok(trail)
                },
                [dep],
            )
            .unwrap();
    }

    let err = graph.run(Vec::new()).unwrap_err();
    match err {
        RunError::Graph(GraphError::CycleDetected { unresolved }) => {
            assert_eq!(unresolved, vec![NodeId::new("a"), NodeId::new("b")]);
        }
        other => panic!("expected cycle error, got {other}"),
    }
    assert_eq!(ran.get(), 0);
}

#[test]
fn cycle_behind_a_valid_prefix_still_runs_nothing() {
    let mut graph: TaskGraph<Trail, String> = TaskGraph::new();
    graph.register("start", record("start".into()), no_deps()).unwrap();
    graph.register("x", record("x".into()), ["start", "z"]).unwrap();
    graph.register("y", record("y".into()), ["x"]).unwrap();
    graph.register("z", record("z".into()), ["y"]).unwrap();

    let err = graph.execution_order().unwrap_err();
    assert_eq!(
        err.to_string(),
        "cycle detected; unordered nodes: x, y, z"
    );
}

#[test]
fn dependencies_may_be_registered_after_dependents() {
    let mut graph: TaskGraph<Trail, String> = TaskGraph::new();
    graph.register("report", record("report".into()), ["load"]).unwrap();
    graph.register("load", record("load".into()), no_deps()).unwrap();

    assert_eq!(graph.run(Vec::new()).unwrap(), vec!["load", "report"]);
}
