#![no_std] // Critical for WASM compatibility

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod kinds;
pub mod language;
pub mod layers;
pub mod score;

// Re-export core types for convenience
pub use kinds::{LayerFlags, LayerKind};
pub use language::Language;
pub use layers::*;
pub use score::ParserEvaluationScore;
