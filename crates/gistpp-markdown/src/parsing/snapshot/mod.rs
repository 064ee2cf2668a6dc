//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via outline assertions and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`normalize`**: renders a document as a stable indented outline for
//!   `insta` and plain string assertions
//! - **`invariants`**: structural checks every parse must pass (spans in
//!   bounds, child spans inside their parent, parent back-references,
//!   byte-exact round trip)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::outline;
