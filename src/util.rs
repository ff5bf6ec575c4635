/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between `i64` and `f64`
/// without risking silent data loss. The evaluator uses them to decide when an
/// integer result must be promoted to a real one, and when a real result may be
/// presented as an integer again.
pub mod num;
