//! Parser for a flat, SMILES-like linear notation.
//!
//! The grammar is deliberately minimal: element symbols interleaved with
//! single-character bond symbols. Element matching is greedy, two-character
//! window first, so `Cl` is chlorine rather than carbon followed by a stray
//! `l`. A bond symbol connects the atom before it to the atom after it.
//! Everything else (digits, parentheses, ring closures, whitespace) is
//! skipped without error.

use crate::element::{element_by_symbol, Element};
use crate::error::{MolfpError, Result};
use crate::molecule::{Atom, Bond, BondKind, Molecule};

/// Parse a flat notation string into a [`Molecule`].
///
/// Fails only when a bond symbol appears before any atom has been parsed;
/// unknown characters are ignored. The empty string parses to an empty
/// molecule.
pub fn parse_smiles(notation: &str) -> Result<Molecule> {
    let mut parser = NotationParser::new(notation);
    parser.parse()?;
    Ok(Molecule::new(parser.atoms, parser.bonds))
}

struct NotationParser<'a> {
    input: &'a [u8],
    pos: usize,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    /// Index of the previous atom (for bonding)
    prev_atom: Option<usize>,
    /// Pending bond kind for the next bond
    pending_bond: Option<BondKind>,
}

impl<'a> NotationParser<'a> {
    fn new(input: &'a str) -> Self {
        NotationParser {
            input: input.as_bytes(),
            pos: 0,
            atoms: Vec::new(),
            bonds: Vec::new(),
            prev_atom: None,
            pending_bond: None,
        }
    }

    fn parse(&mut self) -> Result<()> {
        while self.pos < self.input.len() {
            if let Some(elem) = self.try_parse_element() {
                self.push_atom(elem);
                continue;
            }

            let ch = self.input[self.pos];
            self.pos += 1;

            if let Some(kind) = BondKind::from_symbol(ch as char) {
                if self.prev_atom.is_none() {
                    return Err(MolfpError::Parse(format!(
                        "bond symbol '{}' at position {} before any atom",
                        ch as char,
                        self.pos - 1
                    )));
                }
                // Consecutive bond symbols overwrite each other; the last
                // one before the next atom wins.
                self.pending_bond = Some(kind);
            }
            // Anything else (digits, parentheses, whitespace) is ignored.
        }
        Ok(())
    }

    /// Greedy element match at the cursor: two-character symbols take
    /// precedence over one-character ones, exact case only.
    fn try_parse_element(&mut self) -> Option<&'static Element> {
        if self.pos + 2 <= self.input.len() {
            let pair = &self.input[self.pos..self.pos + 2];
            if pair.iter().all(u8::is_ascii_alphabetic) {
                if let Some(elem) = std::str::from_utf8(pair).ok().and_then(element_by_symbol) {
                    self.pos += 2;
                    return Some(elem);
                }
            }
        }
        let single = &self.input[self.pos..self.pos + 1];
        if single[0].is_ascii_alphabetic() {
            if let Some(elem) = std::str::from_utf8(single).ok().and_then(element_by_symbol) {
                self.pos += 1;
                return Some(elem);
            }
        }
        None
    }

    fn push_atom(&mut self, elem: &'static Element) {
        let atom_idx = self.atoms.len();
        self.atoms.push(Atom {
            atomic_number: elem.atomic_number,
            symbol: elem.symbol,
        });
        if let Some(prev) = self.prev_atom {
            if let Some(kind) = self.pending_bond.take() {
                self.bonds.push(Bond { atom1: prev, atom2: atom_idx, kind });
            }
        }
        self.prev_atom = Some(atom_idx);
    }
}
