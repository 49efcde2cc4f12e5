//! Morgan fingerprints for a flat, SMILES-like molecular notation.
//!
//! `molfp` turns a linear notation string (element symbols interleaved with
//! single-character bond symbols) into a fixed-size binary fingerprint that
//! summarizes each atom's bonded neighborhood out to a bounded radius.
//! Fingerprints are compared with Tanimoto similarity.
//!
//! The pipeline is pure and synchronous: parse the notation into an atom
//! sequence and a bond list, walk each atom's neighborhood breadth-first,
//! hash the canonical substructure string into a bit index, and set that bit.
//!
//! # Example
//!
//! ```
//! use molfp::{convert_to_morgan_fingerprint, tanimoto_similarity};
//!
//! let fp = convert_to_morgan_fingerprint("C-C=O").unwrap();
//! assert_eq!(fp.nbits(), 1024);
//! assert!(fp.count_ones() > 0);
//!
//! // Identical inputs produce identical fingerprints
//! let again = convert_to_morgan_fingerprint("C-C=O").unwrap();
//! assert!((tanimoto_similarity(&fp, &again) - 1.0).abs() < 1e-10);
//! ```

pub mod element;
pub mod error;
pub mod fingerprint;
pub mod molecule;
pub mod smiles;
pub mod traits;

pub use element::{element_by_number, element_by_symbol, Element};
pub use error::{MolfpError, Result};
pub use fingerprint::{
    convert_to_morgan_fingerprint, convert_to_morgan_fingerprint_with, morgan_fingerprint,
    tanimoto_bulk, tanimoto_similarity, Fingerprint, MorganConfig,
};
pub use molecule::{Atom, Bond, BondKind, Molecule};
pub use smiles::parse_smiles;
pub use traits::{ContentAddressable, Summarizable};
