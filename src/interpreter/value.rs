/// The runtime value type.
///
/// Defines `Value`, the integer-or-real number every evaluation produces,
/// together with its conversions and the normalization applied to final
/// results.
pub mod core;
