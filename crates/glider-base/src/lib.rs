//! # glider-base
//!
//! Core types shared across the glider crates:
//!
//! - **Error Types**: one unified error enum used everywhere
//! - **PRNG**: a small, seedable xorshift generator that callers own
//!   and pass into the search loop

pub mod error;
pub mod rng;

pub use error::{Error, Result};
pub use rng::XorShift64;
