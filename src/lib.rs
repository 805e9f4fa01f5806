//! Standard Diffie-Hellman domain parameters.
//!
//! Provides the 2048-, 3072- and 4096-bit MODP groups of
//! [RFC 3526](https://www.ietf.org/rfc/rfc3526.txt). The groups are parsed
//! once per process on first use and every accessor returns an owned copy,
//! so callers may mutate what they receive freely.
//!
//! ```
//! let group = dh_groups::rfc3526_2048();
//! assert_eq!(group.bits(), 2048);
//! assert_eq!(group.generator_hex(), "02");
//! ```

pub mod error;
pub mod groups;
mod params;
pub mod strength;

pub use error::{Error, Result};
pub use groups::{initialization_count, rfc3526_2048, rfc3526_3072, rfc3526_4096, Group};
pub use strength::StrengthClass;
