/// Runtime value representation.
///
/// Defines the `Value` enum covering every result an evaluation can produce,
/// with conversion helpers and display formatting.
pub mod core;

/// Field objects and the numerical backend seam.
///
/// Defines the opaque `FieldHandle` wrapper for backend-owned field objects
/// and the `FieldOps` trait through which field arithmetic is delegated.
pub mod field;
