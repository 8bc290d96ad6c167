use super::ids::AtomId;

/// A covalent bond between two atoms.
///
/// Bonds are canonically ordered (the endpoint with the smaller input serial
/// comes first) and carry their rotamer classification, decided once at
/// construction time by the [`RotamerRules`](crate::core::rotamers::rules::RotamerRules)
/// and immutable thereafter. Traversal never recomputes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub atom1_id: AtomId, // endpoint with the smaller input serial
    pub atom2_id: AtomId,
    pub rotamer: bool, // true if this bond separates two rigid bodies
}

impl Bond {
    pub fn new(atom1_id: AtomId, atom2_id: AtomId, rotamer: bool) -> Self {
        Self {
            atom1_id,
            atom2_id,
            rotamer,
        }
    }

    pub fn contains(&self, atom_id: AtomId) -> bool {
        self.atom1_id == atom_id || self.atom2_id == atom_id
    }

    /// Returns the endpoint opposite to `atom_id`, or `None` if the bond does
    /// not touch `atom_id`.
    pub fn partner(&self, atom_id: AtomId) -> Option<AtomId> {
        if self.atom1_id == atom_id {
            Some(self.atom2_id)
        } else if self.atom2_id == atom_id {
            Some(self.atom1_id)
        } else {
            None
        }
    }
}
