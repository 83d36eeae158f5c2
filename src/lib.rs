pub mod amendment;
pub mod config;
pub mod core;
pub mod detection;

pub use crate::amendment::{amend_text, generate, generate_with_raw, AmendError, Amender, Occurrence};
pub use crate::core::josa::{Josa, Particle, Suffix};
pub use crate::core::unicode::{has_final_consonant, has_rieul_final};
pub use crate::detection::{segment, Segment};
