use crate::core::forcefield::params::ParticleParams;
use nalgebra::Point3;

/// Represents an atom in the input structure with its identity and properties.
///
/// This struct carries everything the compilation pipeline needs to know about
/// a single atom: its stable input serial number, its atom name (used by the
/// rotamer classifier and the backbone seeding filter), its parent group
/// (residue) id, its 3-D position, and the force-field-derived physical
/// properties stamped on by the parameterizer.
///
/// Traversal bookkeeping (visitation, body membership) is deliberately *not*
/// stored here; the rigid-body partitioner owns that state for the duration
/// of its pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The stable integer id of the atom as given by the input source.
    pub serial: usize,
    /// The name of the atom (e.g., "CA", "N", "O").
    pub name: String,
    /// The force field atom type (e.g., "C.3", "N.2") used for parameter lookup.
    pub force_field_type: String,
    /// The id of the parent group (residue) this atom belongs to.
    pub group_id: isize,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Physical properties resolved from the force-field table.
    ///
    /// Zeroed until [`Parameterizer`](crate::core::forcefield::parameterization::Parameterizer)
    /// runs over the structure.
    pub params: ParticleParams,
}

impl Atom {
    /// Creates a new `Atom` with zeroed physical properties.
    ///
    /// # Arguments
    ///
    /// * `serial` - The stable input id of the atom.
    /// * `name` - The name of the atom.
    /// * `force_field_type` - The force field type used for parameter lookup.
    /// * `group_id` - The id of the parent group (residue).
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(
        serial: usize,
        name: &str,
        force_field_type: &str,
        group_id: isize,
        position: Point3<f64>,
    ) -> Self {
        Self {
            serial,
            name: name.to_string(),
            force_field_type: force_field_type.to_string(),
            group_id,
            position,
            params: ParticleParams::default(),
        }
    }
}
