use super::atom::Atom;
use super::ids::AtomId;
use super::topology::Bond;
use crate::core::rotamers::rules::RotamerRules;
use slotmap::{SecondaryMap, SlotMap};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while assembling an [`AtomicStructure`].
///
/// Both variants are input inconsistencies and abort the build; a bond
/// referencing an unknown atom is never silently skipped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("An atom with serial {serial} has already been added")]
    DuplicateSerial { serial: usize },

    #[error("Bond references unknown atom serial {serial}")]
    UnknownAtom { serial: usize },
}

/// The input structure graph: atoms with covalent bonds.
///
/// This struct is the central input representation for the compilation
/// pipeline. It stores atoms in a slot map, bonds in insertion order, and
/// maintains an adjacency cache so traversal can enumerate the bonds incident
/// to an atom without scanning the full bond list.
///
/// Bonds are classified as rotamer or not at the moment they are added (the
/// classification is cached on the [`Bond`] record); the structure is
/// otherwise immutable once assembled.
#[derive(Debug, Clone, Default)]
pub struct AtomicStructure {
    /// Primary storage for atoms.
    atoms: SlotMap<AtomId, Atom>,
    /// All bonds, in insertion order. Bond indices are stable.
    bonds: Vec<Bond>,
    /// Lookup map from input serial number to atom id.
    serial_map: HashMap<usize, AtomId>,
    /// Cached adjacency: for each atom, its `(neighbor, bond index)` pairs.
    adjacency: SecondaryMap<AtomId, Vec<(AtomId, usize)>>,
}

impl AtomicStructure {
    /// Creates a new, empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an atom to the structure.
    ///
    /// # Arguments
    ///
    /// * `atom` - The atom to add. Its serial must be unique in the structure.
    ///
    /// # Return
    ///
    /// The id assigned to the new atom.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::DuplicateSerial`] if an atom with the same
    /// input serial was already added.
    pub fn add_atom(&mut self, atom: Atom) -> Result<AtomId, StructureError> {
        let serial = atom.serial;
        if self.serial_map.contains_key(&serial) {
            return Err(StructureError::DuplicateSerial { serial });
        }

        let atom_id = self.atoms.insert(atom);
        self.adjacency.insert(atom_id, Vec::new());
        self.serial_map.insert(serial, atom_id);
        Ok(atom_id)
    }

    /// Adds a bond between two atoms identified by their input serials.
    ///
    /// The bond is stored canonically (smaller serial first) and classified
    /// once against `rules`; the rotamer flag is cached on the bond and never
    /// recomputed. Adding a bond that already exists is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::UnknownAtom`] if either serial does not
    /// refer to an atom of this structure.
    pub fn add_bond(
        &mut self,
        serial1: usize,
        serial2: usize,
        rules: &RotamerRules,
    ) -> Result<(), StructureError> {
        let (serial1, serial2) = if serial1 <= serial2 {
            (serial1, serial2)
        } else {
            (serial2, serial1)
        };

        let atom1_id = self.find_by_serial(serial1)?;
        let atom2_id = self.find_by_serial(serial2)?;

        if self.adjacency[atom1_id].iter().any(|&(n, _)| n == atom2_id) {
            return Ok(());
        }

        let atom1 = &self.atoms[atom1_id];
        let atom2 = &self.atoms[atom2_id];
        let rotamer = rules.is_rotamer(&atom1.name, &atom2.name, atom1.group_id, atom2.group_id);

        let bond_index = self.bonds.len();
        self.bonds.push(Bond::new(atom1_id, atom2_id, rotamer));
        self.adjacency[atom1_id].push((atom2_id, bond_index));
        self.adjacency[atom2_id].push((atom1_id, bond_index));
        Ok(())
    }

    /// Retrieves an immutable reference to an atom by its id.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Retrieves a mutable reference to an atom by its id.
    pub fn atom_mut(&mut self, id: AtomId) -> Option<&mut Atom> {
        self.atoms.get_mut(id)
    }

    /// Returns an iterator over all atoms as `(AtomId, &Atom)` pairs.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }

    /// Returns a slice of all bonds, in insertion order.
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Retrieves a bond by its index into [`Self::bonds`].
    pub fn bond(&self, index: usize) -> Option<&Bond> {
        self.bonds.get(index)
    }

    /// Returns the `(neighbor, bond index)` pairs incident to an atom.
    pub fn neighbors(&self, id: AtomId) -> &[(AtomId, usize)] {
        self.adjacency.get(id).map_or(&[], |v| v.as_slice())
    }

    /// Looks up an atom id by its input serial number.
    fn find_by_serial(&self, serial: usize) -> Result<AtomId, StructureError> {
        self.serial_map
            .get(&serial)
            .copied()
            .ok_or(StructureError::UnknownAtom { serial })
    }

    /// Returns the number of atoms in the structure.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Returns `true` if the structure holds no atoms.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}
