#![allow(dead_code)]

pub mod builders;
pub mod harness;

// Re-export commonly used test utilities
#[allow(unused_imports)]
pub use builders::{UsersTableBuilder, UtterancesTableBuilder};
pub use harness::TestHarness;
