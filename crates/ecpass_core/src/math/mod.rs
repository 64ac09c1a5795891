//! Numeric stages of the pipeline.
//!
//! Stages run strictly left to right and hold no state between calls:
//!
//! - [`seed`]: memorable password to real-valued seed
//! - [`recurrence`]: seed to raw chaotic stream
//! - [`rank`]: raw stream to uniform stream on [0, 1]
//! - [`charmap`]: uniform values to printable ASCII

pub mod charmap;
pub mod rank;
pub mod recurrence;
pub mod seed;
