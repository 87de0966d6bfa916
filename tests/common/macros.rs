/// Asserts the number of live cells in an engine.
#[macro_export]
macro_rules! assert_population {
    ($engine:expr, $count:expr) => {
        assert_eq!(
            $engine.count_alive_cells(),
            $count,
            "Population count mismatch at generation {}",
            $engine.generation()
        );
    };
}

/// Asserts that the listed cells, and only those, are alive.
#[macro_export]
macro_rules! assert_alive_exactly {
    ($engine:expr, $cells:expr) => {
        let mut expected: Vec<(i32, i32)> = $cells.to_vec();
        expected.sort_unstable();
        assert_eq!(
            common::alive_cells(&$engine),
            expected,
            "Unexpected live cells at generation {}",
            $engine.generation()
        );
    };
}
