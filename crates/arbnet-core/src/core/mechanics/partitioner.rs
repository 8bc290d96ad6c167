use super::body::RigidBody;
use crate::core::models::ids::AtomId;
use crate::core::models::structure::AtomicStructure;
use slotmap::SecondaryMap;

/// Atom names seeding the first (backbone) partitioning pass.
pub static BACKBONE_ATOM_NAMES: phf::Set<&'static str> = phf::phf_set! {
    "CA", "C", "N", "O", "H",
};

/// The result of rigid-body partitioning: the body set plus the per-atom
/// body-membership lists recorded during traversal.
///
/// An atom's membership list contains the body where it is a real member and
/// every body that holds it as a ghost (one per rotamer bond crossing a
/// boundary at that atom).
#[derive(Debug, Clone, Default)]
pub struct RigidBodyStructure {
    bodies: Vec<RigidBody>,
    memberships: SecondaryMap<AtomId, Vec<usize>>,
}

impl RigidBodyStructure {
    /// The rigid bodies, indexed by their sequential id.
    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    /// Retrieves a body by id.
    pub fn body(&self, id: usize) -> Option<&RigidBody> {
        self.bodies.get(id)
    }

    /// The body ids an atom participates in (real or ghost).
    pub fn memberships(&self, atom_id: AtomId) -> &[usize] {
        self.memberships.get(atom_id).map_or(&[], |v| v.as_slice())
    }

    fn record_membership(&mut self, atom_id: AtomId, body_id: usize) {
        let list = self.memberships.entry(atom_id).unwrap().or_default();
        if !list.contains(&body_id) {
            list.push(body_id);
        }
    }
}

/// Partitions a structure into maximal rigid bodies.
///
/// Two passes of flood fill over non-rotamer bonds, each seeded from
/// unvisited atoms scanned in ascending input serial order (the canonical
/// tie-break). The first pass only seeds atoms whose name is in
/// [`BACKBONE_ATOM_NAMES`], so the backbone decomposes into its canonical
/// per-residue segments before side-chain fragments get a chance to absorb
/// backbone stretches; the second pass is unrestricted and claims whatever
/// remains. The flood itself is never filtered, only the seeding is.
///
/// Where a rotamer bond is met, traversal stops: the far atom is recorded as
/// a member of the current body and copied in as a ghost particle, without
/// being visited. Its real home is decided when its own component is seeded.
/// A bond-less atom becomes a singleton body.
pub fn partition(structure: &AtomicStructure) -> RigidBodyStructure {
    let mut result = RigidBodyStructure::default();
    let mut visited: SecondaryMap<AtomId, bool> = SecondaryMap::new();

    let mut seeds: Vec<AtomId> = structure.atoms_iter().map(|(id, _)| id).collect();
    seeds.sort_by_key(|&id| {
        structure
            .atom(id)
            .expect("seed id collected from this structure")
            .serial
    });

    for filter in [Some(&BACKBONE_ATOM_NAMES), None] {
        for &seed in &seeds {
            if visited.get(seed).copied().unwrap_or(false) {
                continue;
            }
            if let Some(names) = filter {
                let name = &structure
                    .atom(seed)
                    .expect("seed id collected from this structure")
                    .name;
                if !names.contains(name.as_str()) {
                    continue;
                }
            }

            let body_id = result.bodies.len();
            let body = flood_fill(structure, seed, body_id, &mut visited, &mut result);
            result.bodies.push(body);
        }
    }

    result
}

/// Claims one connected component (through non-rotamer bonds) into a new body.
///
/// Explicit work-list traversal; visitation state lives here, not on the
/// atoms, and is shared across both seeding passes.
fn flood_fill(
    structure: &AtomicStructure,
    seed: AtomId,
    body_id: usize,
    visited: &mut SecondaryMap<AtomId, bool>,
    result: &mut RigidBodyStructure,
) -> RigidBody {
    let mut body = RigidBody::new(body_id);
    let mut stack = vec![seed];

    while let Some(atom_id) = stack.pop() {
        if visited.get(atom_id).copied().unwrap_or(false) {
            continue;
        }
        visited.insert(atom_id, true);

        let atom = structure
            .atom(atom_id)
            .expect("traversal only reaches atoms of this structure");
        result.record_membership(atom_id, body_id);
        body.add_real(atom_id, atom);

        for &(neighbor_id, bond_index) in structure.neighbors(atom_id) {
            let bond = structure
                .bond(bond_index)
                .expect("adjacency references a stored bond");
            if bond.rotamer {
                let neighbor = structure
                    .atom(neighbor_id)
                    .expect("bond endpoints exist by construction");
                result.record_membership(neighbor_id, body_id);
                body.add_ghost(neighbor_id, neighbor);
            } else if !visited.get(neighbor_id).copied().unwrap_or(false) {
                stack.push(neighbor_id);
            }
        }
    }

    body
}
