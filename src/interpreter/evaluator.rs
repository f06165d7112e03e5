/// Tree walking and the binding set.
///
/// Holds the `Bindings` structure, terminal resolution, readiness checking,
/// and the terminal usage report.
pub mod core;

/// Binary operation evaluation.
///
/// Implements arithmetic, comparison and logical operations, including
/// elementwise broadcasting over sequences and field delegation.
pub mod binary;

/// Unary function application.
///
/// Implements the closed set of pointwise functions with their domain
/// checks, elementwise sequence mapping and field delegation.
pub mod function;
