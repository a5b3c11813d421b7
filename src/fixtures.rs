//! The two demonstration cases the recovery is usually shown with, embedded from `fixtures/`.

/// Four shares of `f(x) = 3 + x^2` with threshold three. The share with index six lies beyond `n` and is ignored.
pub const SMALL_CASE: &str = include_str!("../fixtures/small_case.json");

/// Ten shares in bases 3 to 16 with threshold seven. Their values exceed 64 bits.
pub const LARGE_CASE: &str = include_str!("../fixtures/large_case.json");

/// All bundled cases together with their names.
pub const ALL: [(&str, &str); 2] = [("small_case", SMALL_CASE), ("large_case", LARGE_CASE)];
