//! Recovery of the secret of a threshold secret sharing from share records. See `case::solve` for the entry point
//! and `recovery_maths` for the arithmetic behind it.


pub mod case;
pub mod fixtures;
pub mod sharing;
