//! RAGE vehicle handling metadata library.
//!
//! This crate provides a unified interface to the ragemeta library ecosystem
//! for working with RAGE engine metadata files.
//!
//! # Crates
//!
//! - [`ragemeta_xml`] - XML element tree (parse + serialize)
//! - [`ragemeta_handling`] - `handling.meta` codec (records, sub-handling blocks)
//!
//! # Example
//!
//! ```no_run
//! use ragemeta::prelude::*;
//!
//! let file = HandlingFile::from_meta("handling.meta")?;
//! println!("records: {}", file.handlings.len());
//!
//! let bytes = file.to_xml_bytes()?;
//! std::fs::write("handling_out.meta", bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export sub-crates
pub use ragemeta_handling as handling;
pub use ragemeta_xml as xml;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ragemeta_handling::sub::SubHandling;
    pub use ragemeta_handling::{HandlingData, HandlingFile, Vector3};
    pub use ragemeta_xml::{parse_document, XmlNode};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
