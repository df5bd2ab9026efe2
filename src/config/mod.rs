//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! Build-time configuration (TOML):
//!     → loader.rs (parse & deserialize)
//!     → semantic validation
//!     → CoreConfig (validated, immutable)
//!     → consumed once by Core::new
//!
//! Runtime configuration acceptance:
//!     opaque blob + caller-assigned generation
//!     → staging.rs stage (record generation, no content validation)
//!     → staging.rs apply (pure generation comparison)
//! ```
//!
//! # Design Decisions
//! - CoreConfig is immutable once a Core is built
//! - All fields have defaults so minimal configs work
//! - Staged blobs are content-opaque: the two-phase scheme never exposes a
//!   half-applied state because nothing beyond the generation is recorded

pub mod loader;
pub mod schema;
pub mod staging;

pub use schema::CoreConfig;
pub use staging::ConfigStaging;
