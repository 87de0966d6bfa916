use chronolife_lib::model::history::{HistoryStore, DEFAULT_HISTORY_CAPACITY};
use chronolife_lib::model::state::CellStates;

fn marked_states(generation: u64) -> CellStates {
    // Encode the generation in the grid so entries can be told apart by content.
    let mut cells = CellStates::new(16, 16);
    cells.set((generation % 16) as usize, (generation / 16 % 16) as usize, true);
    cells
}

#[test]
fn test_150_pushes_into_capacity_100() {
    let mut store = HistoryStore::new(DEFAULT_HISTORY_CAPACITY);
    let mut counts = Vec::new();
    for generation in 0..150 {
        store.push(generation, marked_states(generation));
        counts.push(store.count());
    }

    assert_eq!(counts[99], 100, "filled to the cap without compaction");
    assert_eq!(counts[100], 51, "the 101st push halves the store first");
    assert!(counts.iter().all(|&count| count <= 100));
    assert_eq!(store.count(), 100);

    let retained: Vec<u64> = store.iter().map(|entry| entry.generation).collect();
    let expected: Vec<u64> = (50..150).rev().collect();
    assert_eq!(retained, expected);
}

#[test]
fn test_entries_keep_their_snapshots_through_compaction() {
    let mut store = HistoryStore::new(10);
    for generation in 0..23 {
        store.push(generation, marked_states(generation));
    }
    for entry in store.iter() {
        assert_eq!(entry.cells, marked_states(entry.generation));
    }
}

#[test]
fn test_pop_order_after_compaction() {
    let mut store = HistoryStore::new(4);
    for generation in 0..5 {
        store.push(generation, marked_states(generation));
    }
    // [0,1,2,3] -> keep [2,3] -> push 4
    let popped: Vec<u64> = std::iter::from_fn(|| store.pop())
        .map(|entry| entry.generation)
        .collect();
    assert_eq!(popped, vec![4, 3, 2]);
    assert!(store.is_empty());
}

#[test]
fn test_long_run_through_engine_keeps_recent_depth() {
    use chronolife_lib::model::engine::{SimulationEngine, StepOutcome};

    let mut engine = SimulationEngine::with_history_capacity(8, 8, 10);
    engine.place_pattern(3, 2, &[[true, true, true]]);
    for _ in 0..37 {
        engine.step_forward();
    }
    let depth = engine.history_len();
    assert!(depth >= 5 && depth <= 10, "depth {depth}");

    let mut last = None;
    while let StepOutcome::Rewound { generation } = engine.step_backward() {
        last = Some(generation);
    }
    // Rewinding stops at the oldest retained generation, not at zero.
    assert_eq!(last, Some(37 - depth as u64));
}
