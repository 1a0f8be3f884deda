//! tests/mod.rs

mod dispatch_tests;
pub mod support;
