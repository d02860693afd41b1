//! List reordering integration tests
//!
//! This module tests [`lexorder::ListOrderer`] over caller-owned collections,
//! covering moves, side placement, insertion, appends, and the best-effort
//! handling of missing items.

mod move_tests;
