//! Process-wide thread bound.

use anyhow::Result;
use matgen::testing::{init_tracing, thread_config_lock};
use matgen::{smp, ColumnMajor, Generator, SmpError, SymmetricCreator, UniformCreator};

#[test]
fn test_set_and_read_back() -> Result<()> {
    init_tracing();
    let _guard = thread_config_lock();

    smp::set_num_threads(5)?;
    assert_eq!(smp::num_threads(), 5);

    smp::set_num_threads(1)?;
    assert_eq!(smp::num_threads(), 1);
    Ok(())
}

#[test]
fn test_zero_keeps_previous_bound() -> Result<()> {
    let _guard = thread_config_lock();

    smp::set_num_threads(4)?;
    let err = smp::set_num_threads(0).unwrap_err();
    assert_eq!(err, SmpError::InvalidArgument);
    assert_eq!(err.to_string(), "Invalid number of threads");
    assert_eq!(smp::num_threads(), 4);
    Ok(())
}

#[test]
fn test_bound_is_always_positive() {
    let _guard = thread_config_lock();
    assert!(smp::num_threads() >= 1);
}

#[test]
fn test_parallel_evaluation_of_fixture() -> Result<()> {
    let _guard = thread_config_lock();
    smp::set_num_threads(3)?;

    let element = UniformCreator::<i64>::with_range(-5, 5)?;
    let symmetric = SymmetricCreator::<_, ColumnMajor>::with_size(8, element).generate();
    let row_sums = smp::par_map_rows(&symmetric, |i, m| {
        (0..8).map(|j| m[(i, j)]).sum::<i64>()
    })?;
    let column_sums: Vec<i64> = (0..8).map(|j| (0..8).map(|i| symmetric[(i, j)]).sum()).collect();
    assert_eq!(row_sums, column_sums);

    assert_eq!(smp::install(rayon::current_num_threads)?, 3);
    Ok(())
}
