//! Terminal output helpers.

mod diagnostic;

pub use diagnostic::IcumfDiagnostic;
