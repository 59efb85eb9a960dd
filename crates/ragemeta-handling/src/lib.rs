//! Codec for RAGE `handling.meta` vehicle configuration files.
//!
//! A handling file is an XML document with the fixed root path
//! `CHandlingDataMgr/HandlingData`, holding one `Item` per vehicle. Each item
//! carries ~45 scalar and vector fields plus a `SubHandlingData` container of
//! specialized physics blocks (boat, bike, flying, weapons, ...), selected by
//! the `type` attribute of each nested item.
//!
//! This crate reconstructs the typed model from a parsed document and
//! reproduces a byte-stable document from the model:
//!
//! - [`HandlingFile`] - the file-level codec (load/export of the whole document)
//! - [`HandlingData`] - one named vehicle configuration
//! - [`sub::SubHandling`] - the closed set of 11 sub-handling block kinds
//! - [`Vector3`] - the 3-component vector encoding (`x`/`y`/`z` attributes)
//!
//! # Example
//!
//! ```no_run
//! use ragemeta_handling::HandlingFile;
//!
//! let file = HandlingFile::from_meta("handling.meta")?;
//! for handling in &file.handlings {
//!     println!("{}: {} sub-handling blocks", handling.handling_name, handling.sub_handling_data.len());
//! }
//!
//! let bytes = file.to_xml_bytes()?;
//! # Ok::<(), ragemeta_handling::Error>(())
//! ```

mod error;
mod field;
mod file;
mod record;
mod vector;

pub mod sub;

pub use error::{Error, Result};
pub use file::HandlingFile;
pub use record::HandlingData;
pub use vector::Vector3;
