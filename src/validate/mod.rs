//! Validation coordination
//!
//! Fans probe calls out across every link of every document under a bounded
//! concurrency policy, enforces the per-document and whole-batch barriers,
//! and assembles the final report.

mod coordinator;

pub use coordinator::Validator;
