//! The native `sum` subject: a fixed nine-element sequence reduced to a
//! single value, surfaced as the process exit status.

use thiserror::Error;

/// The sequence the program sums. Length and contents are fixed at compile
/// time and never change after construction.
pub const SEQUENCE: [i64; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Seed for the reduction.
pub const INITIAL_ACCUMULATOR: i64 = 0;

/// Known result of folding [`SEQUENCE`] from [`INITIAL_ACCUMULATOR`].
pub const EXPECTED_SUM: i64 = 45;

/// Failures on the generalized, caller-supplied paths. The fixed sequence
/// above can hit neither case.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SumError {
    #[error("sum overflowed i64 adding the element at index {index}")]
    Overflow { index: usize },
    #[error("expected a sequence of length {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Left-to-right fold over `values`, seeded with `init`.
///
/// Every element is visited exactly once; an empty slice returns `init`
/// unchanged.
pub fn sum(values: &[i64], init: i64) -> i64 {
    values.iter().fold(init, |acc, &v| acc + v)
}

/// Like [`sum`], but for input where the running total may leave the `i64`
/// range. Reports the position of the offending element instead of
/// wrapping or aborting.
pub fn checked_sum(values: &[i64], init: i64) -> Result<i64, SumError> {
    let mut acc = init;
    for (index, &v) in values.iter().enumerate() {
        acc = acc.checked_add(v).ok_or(SumError::Overflow { index })?;
    }
    Ok(acc)
}

/// Maps a dynamically sized slice onto the fixed nine-element shape.
pub fn fixed_sequence(values: &[i64]) -> Result<[i64; 9], SumError> {
    <[i64; 9]>::try_from(values).map_err(|_| SumError::InvalidLength {
        expected: SEQUENCE.len(),
        actual: values.len(),
    })
}

/// The whole program: the fixed sequence folded from the fixed seed.
pub fn sum_fixed() -> i64 {
    sum(&SEQUENCE, INITIAL_ACCUMULATOR)
}
