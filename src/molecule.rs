//! Molecular graph representation and bounded neighborhood traversal.

use std::collections::VecDeque;

use sha2::{Digest, Sha256};

use crate::traits::{ContentAddressable, Summarizable};

/// Bond classification, in fixed symbol-table order.
///
/// The discriminant is the bond-type code: `-` is entry 0 of the symbol
/// table, so `Single` is 0, and so on. Reordering the variants changes every
/// fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondKind {
    Single = 0,
    Double = 1,
    Triple = 2,
    Aromatic = 3,
    /// Directional bond (`/` in SMILES).
    Up = 4,
    /// Directional bond (`\` in SMILES).
    Down = 5,
}

impl BondKind {
    /// All bond kinds in symbol-table order.
    pub const ALL: [BondKind; 6] = [
        BondKind::Single,
        BondKind::Double,
        BondKind::Triple,
        BondKind::Aromatic,
        BondKind::Up,
        BondKind::Down,
    ];

    /// The notation character for this bond kind.
    pub fn symbol(self) -> char {
        match self {
            BondKind::Single => '-',
            BondKind::Double => '=',
            BondKind::Triple => '#',
            BondKind::Aromatic => ':',
            BondKind::Up => '/',
            BondKind::Down => '\\',
        }
    }

    /// Look up a bond kind by its notation character.
    pub fn from_symbol(ch: char) -> Option<BondKind> {
        match ch {
            '-' => Some(BondKind::Single),
            '=' => Some(BondKind::Double),
            '#' => Some(BondKind::Triple),
            ':' => Some(BondKind::Aromatic),
            '/' => Some(BondKind::Up),
            '\\' => Some(BondKind::Down),
            _ => None,
        }
    }

    /// Index of this kind in the symbol table.
    pub fn code(self) -> usize {
        self as usize
    }
}

/// An atom in a molecular graph, identified by its index in parse order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Atom {
    pub atomic_number: u8,
    pub symbol: &'static str,
}

/// A bond between two atoms. Undirected for traversal purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub atom1: usize,
    pub atom2: usize,
    pub kind: BondKind,
}

/// A molecular graph with atoms, bonds, and adjacency information.
#[derive(Debug, Clone)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
    /// adjacency[atom_idx] = Vec<(neighbor_atom_idx, bond_idx)>, in bond order
    pub adjacency: Vec<Vec<(usize, usize)>>,
}

impl Molecule {
    /// Create a new molecule, building the adjacency list from atoms and bonds.
    pub fn new(atoms: Vec<Atom>, bonds: Vec<Bond>) -> Self {
        let mut adjacency = vec![Vec::new(); atoms.len()];
        for (bi, bond) in bonds.iter().enumerate() {
            adjacency[bond.atom1].push((bond.atom2, bi));
            adjacency[bond.atom2].push((bond.atom1, bi));
        }
        Molecule { atoms, bonds, adjacency }
    }

    /// Number of atoms.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Number of bonds.
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Graph degree of an atom (number of explicit bonds).
    pub fn degree(&self, atom_idx: usize) -> usize {
        self.adjacency[atom_idx].len()
    }

    /// Find the bond between two atoms, if any (first match in bond order).
    pub fn get_bond(&self, a1: usize, a2: usize) -> Option<&Bond> {
        self.adjacency[a1]
            .iter()
            .find(|&&(n, _)| n == a2)
            .map(|&(_, bi)| &self.bonds[bi])
    }

    /// Atom indices reachable from `atom_idx` within `radius` bond hops, in
    /// breadth-first visitation order, excluding the start atom itself.
    ///
    /// Partners are enqueued regardless of visited status and filtered at
    /// dequeue time; depths enter the queue in non-decreasing order, so the
    /// search stops outright once a dequeued depth exceeds `radius`.
    pub fn neighbors_within(&self, atom_idx: usize, radius: usize) -> Vec<usize> {
        let mut found = Vec::new();
        let mut visited = vec![false; self.atoms.len()];
        let mut queue = VecDeque::new();
        queue.push_back((atom_idx, 0usize));

        while let Some((current, depth)) = queue.pop_front() {
            if depth > radius {
                break;
            }
            if visited[current] {
                continue;
            }
            visited[current] = true;
            if depth > 0 {
                found.push(current);
            }
            for &(partner, _) in &self.adjacency[current] {
                queue.push_back((partner, depth + 1));
            }
        }

        found
    }
}

impl Summarizable for Molecule {
    fn summary(&self) -> String {
        format!("Molecule: {} atoms, {} bonds", self.atom_count(), self.bond_count())
    }
}

impl ContentAddressable for Molecule {
    fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        // Atom indices are the only atom identity; stored order is hashed as-is.
        for atom in &self.atoms {
            hasher.update([atom.atomic_number]);
            hasher.update(atom.symbol.as_bytes());
        }
        for bond in &self.bonds {
            hasher.update(bond.atom1.to_le_bytes());
            hasher.update(bond.atom2.to_le_bytes());
            hasher.update([bond.kind.code() as u8]);
        }
        hex::encode(hasher.finalize())
    }
}
