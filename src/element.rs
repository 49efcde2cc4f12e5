//! Periodic table data and element lookup.
//!
//! The table is ordered by atomic number and is used as a symbol membership
//! test by the notation parser; it carries no valence or mass data because
//! the crate does no chemical validity checking.

/// A chemical element from the periodic table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub atomic_number: u8,
    pub symbol: &'static str,
}

/// Elements 1-118 (H through Og).
static ELEMENTS: [Element; 118] = [
    Element { atomic_number: 1, symbol: "H" },
    Element { atomic_number: 2, symbol: "He" },
    Element { atomic_number: 3, symbol: "Li" },
    Element { atomic_number: 4, symbol: "Be" },
    Element { atomic_number: 5, symbol: "B" },
    Element { atomic_number: 6, symbol: "C" },
    Element { atomic_number: 7, symbol: "N" },
    Element { atomic_number: 8, symbol: "O" },
    Element { atomic_number: 9, symbol: "F" },
    Element { atomic_number: 10, symbol: "Ne" },
    Element { atomic_number: 11, symbol: "Na" },
    Element { atomic_number: 12, symbol: "Mg" },
    Element { atomic_number: 13, symbol: "Al" },
    Element { atomic_number: 14, symbol: "Si" },
    Element { atomic_number: 15, symbol: "P" },
    Element { atomic_number: 16, symbol: "S" },
    Element { atomic_number: 17, symbol: "Cl" },
    Element { atomic_number: 18, symbol: "Ar" },
    Element { atomic_number: 19, symbol: "K" },
    Element { atomic_number: 20, symbol: "Ca" },
    Element { atomic_number: 21, symbol: "Sc" },
    Element { atomic_number: 22, symbol: "Ti" },
    Element { atomic_number: 23, symbol: "V" },
    Element { atomic_number: 24, symbol: "Cr" },
    Element { atomic_number: 25, symbol: "Mn" },
    Element { atomic_number: 26, symbol: "Fe" },
    Element { atomic_number: 27, symbol: "Co" },
    Element { atomic_number: 28, symbol: "Ni" },
    Element { atomic_number: 29, symbol: "Cu" },
    Element { atomic_number: 30, symbol: "Zn" },
    Element { atomic_number: 31, symbol: "Ga" },
    Element { atomic_number: 32, symbol: "Ge" },
    Element { atomic_number: 33, symbol: "As" },
    Element { atomic_number: 34, symbol: "Se" },
    Element { atomic_number: 35, symbol: "Br" },
    Element { atomic_number: 36, symbol: "Kr" },
    Element { atomic_number: 37, symbol: "Rb" },
    Element { atomic_number: 38, symbol: "Sr" },
    Element { atomic_number: 39, symbol: "Y" },
    Element { atomic_number: 40, symbol: "Zr" },
    Element { atomic_number: 41, symbol: "Nb" },
    Element { atomic_number: 42, symbol: "Mo" },
    Element { atomic_number: 43, symbol: "Tc" },
    Element { atomic_number: 44, symbol: "Ru" },
    Element { atomic_number: 45, symbol: "Rh" },
    Element { atomic_number: 46, symbol: "Pd" },
    Element { atomic_number: 47, symbol: "Ag" },
    Element { atomic_number: 48, symbol: "Cd" },
    Element { atomic_number: 49, symbol: "In" },
    Element { atomic_number: 50, symbol: "Sn" },
    Element { atomic_number: 51, symbol: "Sb" },
    Element { atomic_number: 52, symbol: "Te" },
    Element { atomic_number: 53, symbol: "I" },
    Element { atomic_number: 54, symbol: "Xe" },
    Element { atomic_number: 55, symbol: "Cs" },
    Element { atomic_number: 56, symbol: "Ba" },
    Element { atomic_number: 57, symbol: "La" },
    Element { atomic_number: 58, symbol: "Ce" },
    Element { atomic_number: 59, symbol: "Pr" },
    Element { atomic_number: 60, symbol: "Nd" },
    Element { atomic_number: 61, symbol: "Pm" },
    Element { atomic_number: 62, symbol: "Sm" },
    Element { atomic_number: 63, symbol: "Eu" },
    Element { atomic_number: 64, symbol: "Gd" },
    Element { atomic_number: 65, symbol: "Tb" },
    Element { atomic_number: 66, symbol: "Dy" },
    Element { atomic_number: 67, symbol: "Ho" },
    Element { atomic_number: 68, symbol: "Er" },
    Element { atomic_number: 69, symbol: "Tm" },
    Element { atomic_number: 70, symbol: "Yb" },
    Element { atomic_number: 71, symbol: "Lu" },
    Element { atomic_number: 72, symbol: "Hf" },
    Element { atomic_number: 73, symbol: "Ta" },
    Element { atomic_number: 74, symbol: "W" },
    Element { atomic_number: 75, symbol: "Re" },
    Element { atomic_number: 76, symbol: "Os" },
    Element { atomic_number: 77, symbol: "Ir" },
    Element { atomic_number: 78, symbol: "Pt" },
    Element { atomic_number: 79, symbol: "Au" },
    Element { atomic_number: 80, symbol: "Hg" },
    Element { atomic_number: 81, symbol: "Tl" },
    Element { atomic_number: 82, symbol: "Pb" },
    Element { atomic_number: 83, symbol: "Bi" },
    Element { atomic_number: 84, symbol: "Po" },
    Element { atomic_number: 85, symbol: "At" },
    Element { atomic_number: 86, symbol: "Rn" },
    Element { atomic_number: 87, symbol: "Fr" },
    Element { atomic_number: 88, symbol: "Ra" },
    Element { atomic_number: 89, symbol: "Ac" },
    Element { atomic_number: 90, symbol: "Th" },
    Element { atomic_number: 91, symbol: "Pa" },
    Element { atomic_number: 92, symbol: "U" },
    Element { atomic_number: 93, symbol: "Np" },
    Element { atomic_number: 94, symbol: "Pu" },
    Element { atomic_number: 95, symbol: "Am" },
    Element { atomic_number: 96, symbol: "Cm" },
    Element { atomic_number: 97, symbol: "Bk" },
    Element { atomic_number: 98, symbol: "Cf" },
    Element { atomic_number: 99, symbol: "Es" },
    Element { atomic_number: 100, symbol: "Fm" },
    Element { atomic_number: 101, symbol: "Md" },
    Element { atomic_number: 102, symbol: "No" },
    Element { atomic_number: 103, symbol: "Lr" },
    Element { atomic_number: 104, symbol: "Rf" },
    Element { atomic_number: 105, symbol: "Db" },
    Element { atomic_number: 106, symbol: "Sg" },
    Element { atomic_number: 107, symbol: "Bh" },
    Element { atomic_number: 108, symbol: "Hs" },
    Element { atomic_number: 109, symbol: "Mt" },
    Element { atomic_number: 110, symbol: "Ds" },
    Element { atomic_number: 111, symbol: "Rg" },
    Element { atomic_number: 112, symbol: "Cn" },
    Element { atomic_number: 113, symbol: "Nh" },
    Element { atomic_number: 114, symbol: "Fl" },
    Element { atomic_number: 115, symbol: "Mc" },
    Element { atomic_number: 116, symbol: "Lv" },
    Element { atomic_number: 117, symbol: "Ts" },
    Element { atomic_number: 118, symbol: "Og" },
];

/// Look up an element by its symbol (e.g. "C", "Cl").
///
/// Matching is exact: `"CL"` is not chlorine.
pub fn element_by_symbol(symbol: &str) -> Option<&'static Element> {
    ELEMENTS.iter().find(|e| e.symbol == symbol)
}

/// Look up an element by its atomic number (1-based).
pub fn element_by_number(n: u8) -> Option<&'static Element> {
    if (1..=118).contains(&n) {
        Some(&ELEMENTS[(n - 1) as usize])
    } else {
        None
    }
}
