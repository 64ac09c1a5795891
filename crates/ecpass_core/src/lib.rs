//! # ecpass_core: Deterministic Strong-Password Pipeline
//!
//! ## Layer Role
//!
//! ecpass_core is the bottom layer of the workspace. It turns a short,
//! memorable password into a longer pseudo-random password with no external
//! randomness source:
//!
//! ```text
//! memorable ─▶ seed ─▶ raw stream ─▶ uniform stream ─▶ characters ─▶ strong password
//!             (math::seed) (math::recurrence) (math::rank) (math::charmap)
//! ```
//!
//! - Seed derivation (`math::seed`)
//! - Chaotic stream generation behind the `Recurrence` trait (`math::recurrence`, `traits`)
//! - Rank-based normalisation to [0, 1] (`math::rank`)
//! - Printable ASCII mapping (`math::charmap`)
//! - Validation and orchestration (`generator`)
//! - Error taxonomy: `ValidationError`, `NumericDomainError`, `GeneratorError` (`types::error`)
//!
//! ## Purity
//!
//! Every stage is a pure function. A [`PasswordGenerator`] is an immutable
//! value, so it can be shared across threads without locking and batches of
//! independent requests are generated in parallel with rayon.
//!
//! ## Not a CSPRNG
//!
//! The recurrence is a fixed, hand-tuned transcendental formula. Anyone who
//! knows the memorable password can reproduce the output.
//!
//! ## Usage Examples
//!
//! ```rust
//! use ecpass_core::{generate, math::seed::derive_seed};
//!
//! // Seed derivation is exact: (97 + 98 + 99) / 256
//! assert_eq!(derive_seed("abc"), 1.1484375);
//!
//! let strong = generate("abc", 16).unwrap();
//! assert_eq!(strong.len(), 16);
//! assert!(strong.as_str().bytes().all(|b| (33..=126).contains(&b)));
//!
//! // Requested length shorter than the memorable password is rejected.
//! assert!(generate("password123", 5).unwrap_err().is_validation());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `GeneratorConfig` and `NumericPolicy`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod generator;
pub mod math;
pub mod traits;
pub mod types;

pub use generator::{
    generate, BatchConfig, GenerationRequest, GeneratorConfig, NumericPolicy, PasswordGenerator,
    PipelineTrace,
};
pub use math::recurrence::EcRecurrence;
pub use traits::Recurrence;
pub use types::{GeneratorError, NumericDomainError, PipelineStage, StrongPassword, ValidationError};
