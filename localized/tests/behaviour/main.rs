//! Behavioural test harness for `localized` using `rstest-bdd`.
//!
//! Step implementations live in [`steps`], while [`scenarios`] binds the
//! `.feature` files under `tests/features` to the shared fixtures.

mod fixtures;
mod scenarios;
pub mod steps;
