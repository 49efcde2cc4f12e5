//! Morgan fingerprints and Tanimoto similarity.

use sha2::{Digest, Sha256};

use crate::error::{MolfpError, Result};
use crate::molecule::Molecule;
use crate::smiles::parse_smiles;
use crate::traits::ContentAddressable;

/// Base of the polynomial rolling hash over substructure strings.
const HASH_BASE: i32 = 67;

/// Immutable Morgan fingerprint parameters.
///
/// `nbits` must be nonzero; `new` enforces this. Separate callers may use
/// separate configurations concurrently, there is no shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MorganConfig {
    /// Maximum bond-hop distance considered around each atom.
    pub radius: usize,
    /// Fingerprint length in bits; hash values fold into `[0, nbits)`.
    pub nbits: usize,
}

impl Default for MorganConfig {
    fn default() -> Self {
        MorganConfig { radius: 2, nbits: 1024 }
    }
}

impl MorganConfig {
    /// Create a validated configuration.
    pub fn new(radius: usize, nbits: usize) -> Result<Self> {
        if nbits == 0 {
            return Err(MolfpError::InvalidInput(
                "fingerprint size must be nonzero".into(),
            ));
        }
        Ok(MorganConfig { radius, nbits })
    }
}

/// A fixed-size bit vector fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    bits: Vec<u64>,
    nbits: usize,
}

impl Fingerprint {
    /// Create an all-zero fingerprint of the given size.
    pub fn new(nbits: usize) -> Self {
        let nwords = (nbits + 63) / 64;
        Fingerprint {
            bits: vec![0u64; nwords],
            nbits,
        }
    }

    /// Set a bit at the given position.
    pub fn set_bit(&mut self, pos: usize) {
        let pos = pos % self.nbits;
        let word = pos / 64;
        let bit = pos % 64;
        self.bits[word] |= 1u64 << bit;
    }

    /// Get a bit at the given position.
    pub fn get_bit(&self, pos: usize) -> bool {
        let pos = pos % self.nbits;
        let word = pos / 64;
        let bit = pos % 64;
        (self.bits[word] >> bit) & 1 == 1
    }

    /// Count the number of set bits.
    pub fn count_ones(&self) -> u32 {
        self.bits.iter().map(|w| w.count_ones()).sum()
    }

    /// Number of bits in the fingerprint.
    pub fn nbits(&self) -> usize {
        self.nbits
    }

    /// The fingerprint as a 0/1 vector of length `nbits`.
    pub fn to_bit_vec(&self) -> Vec<u8> {
        (0..self.nbits).map(|pos| self.get_bit(pos) as u8).collect()
    }
}

impl ContentAddressable for Fingerprint {
    fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        for word in &self.bits {
            hasher.update(word.to_le_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

/// Compute the Morgan fingerprint of a molecule.
///
/// For every atom, in parse order, hashes the atom's local substructure out
/// to `config.radius` bond hops and sets the resulting bit. Repeated hits on
/// the same index are idempotent; an empty molecule yields an all-zero
/// vector.
pub fn morgan_fingerprint(mol: &Molecule, config: &MorganConfig) -> Fingerprint {
    let mut fp = Fingerprint::new(config.nbits);
    for atom_idx in 0..mol.atom_count() {
        fp.set_bit(substructure_hash(mol, atom_idx, config.radius, config.nbits));
    }
    fp
}

/// Parse a notation string and fingerprint it with the default parameters
/// (radius 2, 1024 bits).
pub fn convert_to_morgan_fingerprint(notation: &str) -> Result<Fingerprint> {
    convert_to_morgan_fingerprint_with(notation, &MorganConfig::default())
}

/// Parse a notation string and fingerprint it with an explicit configuration.
pub fn convert_to_morgan_fingerprint_with(
    notation: &str,
    config: &MorganConfig,
) -> Result<Fingerprint> {
    let mol = parse_smiles(notation)?;
    Ok(morgan_fingerprint(&mol, config))
}

/// Hash one atom's local substructure into `[0, nbits)`.
///
/// The substructure string is the center atom's symbol followed by, for each
/// neighbor in ascending index order, the connecting bond's symbol and the
/// neighbor's symbol. Sorting the neighbor set makes the result independent
/// of bond enumeration order. Only neighbors directly bonded to the center
/// contribute to the string; atoms reached at two or more hops widen the
/// neighbor set but add nothing.
fn substructure_hash(mol: &Molecule, atom_idx: usize, radius: usize, nbits: usize) -> usize {
    let mut substructure = String::from(mol.atoms[atom_idx].symbol);

    let mut neighbor_indices = mol.neighbors_within(atom_idx, radius);
    neighbor_indices.sort_unstable();

    for neighbor in neighbor_indices {
        if let Some(bond) = mol.get_bond(atom_idx, neighbor) {
            substructure.push(bond.kind.symbol());
            substructure.push_str(mol.atoms[neighbor].symbol);
        }
    }

    fold_index(rolling_hash(&substructure), nbits)
}

/// Base-67 polynomial rolling hash with 32-bit signed wraparound.
///
/// The 32-bit width and wrap-on-overflow rule are part of the bit-index
/// contract; changing either moves every fingerprint bit. All symbol
/// characters are ASCII, so bytes and character codes coincide.
fn rolling_hash(s: &str) -> i32 {
    let mut h: i32 = 0;
    for &byte in s.as_bytes() {
        h = h.wrapping_mul(HASH_BASE).wrapping_add(byte as i32);
    }
    h
}

/// Fold a (possibly negative) hash into `[0, nbits)`.
///
/// Euclidean remainder, so wrapped-negative hashes still map to a
/// non-negative index.
fn fold_index(hash: i32, nbits: usize) -> usize {
    (hash as i64).rem_euclid(nbits as i64) as usize
}

/// Tanimoto similarity coefficient between two fingerprints.
///
/// Returns 1.0 for identical fingerprints, 0.0 for completely disjoint.
pub fn tanimoto_similarity(fp1: &Fingerprint, fp2: &Fingerprint) -> f64 {
    assert_eq!(fp1.nbits, fp2.nbits, "fingerprints must have the same size");

    let mut and_count = 0u32;
    let mut or_count = 0u32;

    for (w1, w2) in fp1.bits.iter().zip(fp2.bits.iter()) {
        and_count += (w1 & w2).count_ones();
        or_count += (w1 | w2).count_ones();
    }

    if or_count == 0 {
        return 1.0; // Both empty → identical
    }

    and_count as f64 / or_count as f64
}

/// Compute Tanimoto similarity of a query against multiple targets.
pub fn tanimoto_bulk(query: &Fingerprint, targets: &[Fingerprint]) -> Vec<f64> {
    targets.iter().map(|t| tanimoto_similarity(query, t)).collect()
}
