use crate::core::forcefield::params::ParticleParams;
use crate::core::models::atom::Atom;
use crate::core::models::ids::AtomId;
use nalgebra::Point3;
use std::collections::HashMap;

/// A body-local particle: a value copy of an atom owned by one rigid body.
///
/// A particle records which atom it came from (`atom_id` + `serial`) and which
/// body owns it; the body id overrides the atom's parent-group id so the
/// exporter can group output by body. Ghost particles are read-only duplicates
/// of atoms whose real home is an adjacent body; they exist solely to anchor
/// joint springs and are never mutated independently of their source.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// The source atom this particle was copied from.
    pub atom_id: AtomId,
    /// The source atom's stable input serial.
    pub serial: usize,
    /// The atom name (e.g., "CA").
    pub name: String,
    /// The owning body's id, overriding the atom's parent-group id.
    pub body_id: usize,
    /// True if this particle is a duplicated boundary atom from another body.
    pub ghost: bool,
    /// Position snapshot from the input configuration.
    pub position: Point3<f64>,
    /// Physical properties copied from the source atom.
    pub params: ParticleParams,
}

impl Particle {
    fn from_atom(atom_id: AtomId, atom: &Atom, body_id: usize, ghost: bool) -> Self {
        Self {
            atom_id,
            serial: atom.serial,
            name: atom.name.clone(),
            body_id,
            ghost,
            position: atom.position,
            params: atom.params,
        }
    }

    /// Euclidean distance between two particles' snapshot positions.
    pub fn distance(&self, other: &Particle) -> f64 {
        (self.position - other.position).norm()
    }
}

/// A maximal set of atoms connected only by non-rotamer bonds.
///
/// Particles are kept in insertion order (the order the partitioner produced
/// them, reals interleaved with the ghosts discovered from them), which is
/// the canonical emission order for the spring network.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    /// Sequential id assigned during partitioning.
    pub id: usize,
    particles: Vec<Particle>,
    index_of: HashMap<AtomId, usize>,
}

impl RigidBody {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            particles: Vec::new(),
            index_of: HashMap::new(),
        }
    }

    /// Adds an atom as a real member of this body.
    ///
    /// If the atom is already present as a ghost (a rotamer bond looping back
    /// into the same connected component), the existing entry is upgraded in
    /// place; the joint resolver reports that degenerate topology later.
    pub fn add_real(&mut self, atom_id: AtomId, atom: &Atom) {
        match self.index_of.get(&atom_id) {
            Some(&index) => self.particles[index].ghost = false,
            None => self.push(Particle::from_atom(atom_id, atom, self.id, false)),
        }
    }

    /// Adds an atom as a ghost member of this body.
    ///
    /// A no-op if the atom already has any entry in this body.
    pub fn add_ghost(&mut self, atom_id: AtomId, atom: &Atom) {
        if !self.index_of.contains_key(&atom_id) {
            self.push(Particle::from_atom(atom_id, atom, self.id, true));
        }
    }

    fn push(&mut self, particle: Particle) {
        self.index_of.insert(particle.atom_id, self.particles.len());
        self.particles.push(particle);
    }

    /// The body's particles in insertion order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Looks up the particle copied from a given atom, if present.
    pub fn particle_for_atom(&self, atom_id: AtomId) -> Option<&Particle> {
        self.index_of.get(&atom_id).map(|&i| &self.particles[i])
    }

    /// Local index of the particle copied from a given atom.
    pub fn local_index(&self, atom_id: AtomId) -> Option<usize> {
        self.index_of.get(&atom_id).copied()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::structure::AtomicStructure;
    use crate::core::rotamers::rules::RotamerRules;

    fn structure_with_two_atoms() -> (AtomicStructure, AtomId, AtomId) {
        let mut structure = AtomicStructure::new();
        let a = structure
            .add_atom(Atom::new(1, "CA", "C.3", 1, Point3::new(0.0, 0.0, 0.0)))
            .unwrap();
        let b = structure
            .add_atom(Atom::new(2, "CB", "C.3", 1, Point3::new(3.0, 4.0, 0.0)))
            .unwrap();
        structure.add_bond(1, 2, &RotamerRules::default()).unwrap();
        (structure, a, b)
    }

    #[test]
    fn add_real_copies_atom_and_overrides_parent() {
        let (structure, a, _) = structure_with_two_atoms();
        let mut body = RigidBody::new(4);
        body.add_real(a, structure.atom(a).unwrap());

        let particle = body.particle_for_atom(a).unwrap();
        assert!(!particle.ghost);
        assert_eq!(particle.body_id, 4);
        assert_eq!(particle.serial, 1);
    }

    #[test]
    fn add_ghost_is_noop_when_atom_already_present() {
        let (structure, a, _) = structure_with_two_atoms();
        let mut body = RigidBody::new(0);
        body.add_real(a, structure.atom(a).unwrap());
        body.add_ghost(a, structure.atom(a).unwrap());

        assert_eq!(body.len(), 1);
        assert!(!body.particle_for_atom(a).unwrap().ghost);
    }

    #[test]
    fn add_real_upgrades_existing_ghost_in_place() {
        let (structure, a, _) = structure_with_two_atoms();
        let mut body = RigidBody::new(0);
        body.add_ghost(a, structure.atom(a).unwrap());
        body.add_real(a, structure.atom(a).unwrap());

        assert_eq!(body.len(), 1);
        assert!(!body.particle_for_atom(a).unwrap().ghost);
    }

    #[test]
    fn particles_preserve_insertion_order() {
        let (structure, a, b) = structure_with_two_atoms();
        let mut body = RigidBody::new(0);
        body.add_real(a, structure.atom(a).unwrap());
        body.add_ghost(b, structure.atom(b).unwrap());

        let serials: Vec<usize> = body.particles().iter().map(|p| p.serial).collect();
        assert_eq!(serials, vec![1, 2]);
        assert_eq!(body.local_index(b), Some(1));
    }

    #[test]
    fn distance_is_euclidean() {
        let (structure, a, b) = structure_with_two_atoms();
        let mut body = RigidBody::new(0);
        body.add_real(a, structure.atom(a).unwrap());
        body.add_ghost(b, structure.atom(b).unwrap());

        let p1 = body.particle_for_atom(a).unwrap();
        let p2 = body.particle_for_atom(b).unwrap();
        assert_eq!(p1.distance(p2), 5.0);
    }
}
