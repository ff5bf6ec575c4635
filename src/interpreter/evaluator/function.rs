/// Built-in function adapters.
///
/// Wraps the kernel functions that cannot fail so they fit the namespace's
/// callable signatures.
pub mod builtin;
/// The function namespace and call evaluation.
///
/// Declares the table of callable names and resolves calls against it.
pub mod core;
