//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `setup.rs` - Initial layout, indexed access, square conversions
//! - `pawns.rs` - Pawn rule
//! - `sliders.rs` - Rook/bishop/queen walks
//! - `leapers.rs` - Knight/king offsets
//! - `apply.rs` - Move application
//! - `proptest.rs` - Property-based tests
