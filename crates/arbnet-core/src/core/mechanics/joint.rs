use super::partitioner::RigidBodyStructure;
use crate::core::models::ids::AtomId;
use crate::core::models::structure::AtomicStructure;
use thiserror::Error;

/// Invariant violations surfaced while resolving joints.
///
/// Every variant signals a bug in classification or partitioning upstream;
/// none of them is recoverable and none may be silently patched over.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JointError {
    #[error(
        "Rotamer bond between atoms {serial1} and {serial2} spans {count} rigid bodies, expected exactly 2"
    )]
    BodyCountMismatch {
        serial1: usize,
        serial2: usize,
        count: usize,
    },

    #[error("Atom {serial} has no real particle in any body shared with its rotamer partner")]
    MissingReal { serial: usize },

    #[error("Body {body_id} is missing the ghost copy of atom {serial}")]
    MissingGhost { body_id: usize, serial: usize },
}

/// The mechanical joint a rotamer bond represents: two real particles, one
/// per adjacent rigid body. Each endpoint also exists as a ghost in the
/// opposite body; those ghosts anchor the joint springs during synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Joint {
    /// Body where `atom1` is a real member.
    pub body1: usize,
    pub atom1: AtomId,
    /// Body where `atom2` is a real member.
    pub body2: usize,
    pub atom2: AtomId,
}

/// Resolves one joint per rotamer bond, in bond insertion order.
///
/// For bond (a, b), the intersection of the two endpoints' body-membership
/// lists must contain exactly two body ids: the body where a is real and the
/// body where b is real. Each side must additionally hold the opposite
/// endpoint as a ghost. Anything else is a structural inconsistency (for
/// example a rotamer bond that closed a cycle inside a single body) and
/// fails the build.
pub fn resolve_joints(
    structure: &AtomicStructure,
    rbs: &RigidBodyStructure,
) -> Result<Vec<Joint>, JointError> {
    let mut joints = Vec::new();

    for bond in structure.bonds().iter().filter(|b| b.rotamer) {
        let serial_of = |id: AtomId| {
            structure
                .atom(id)
                .expect("bond endpoints exist by construction")
                .serial
        };
        let serial1 = serial_of(bond.atom1_id);
        let serial2 = serial_of(bond.atom2_id);

        let memberships1 = rbs.memberships(bond.atom1_id);
        let memberships2 = rbs.memberships(bond.atom2_id);
        let shared: Vec<usize> = memberships1
            .iter()
            .copied()
            .filter(|id| memberships2.contains(id))
            .collect();

        if shared.len() != 2 {
            return Err(JointError::BodyCountMismatch {
                serial1,
                serial2,
                count: shared.len(),
            });
        }

        let body1 = real_home(rbs, &shared, bond.atom1_id)
            .ok_or(JointError::MissingReal { serial: serial1 })?;
        let body2 = real_home(rbs, &shared, bond.atom2_id)
            .ok_or(JointError::MissingReal { serial: serial2 })?;
        if body1 == body2 {
            return Err(JointError::BodyCountMismatch {
                serial1,
                serial2,
                count: 1,
            });
        }

        ensure_ghost(rbs, body1, bond.atom2_id, serial2)?;
        ensure_ghost(rbs, body2, bond.atom1_id, serial1)?;

        joints.push(Joint {
            body1,
            atom1: bond.atom1_id,
            body2,
            atom2: bond.atom2_id,
        });
    }

    Ok(joints)
}

/// The body among `candidates` where `atom_id` is a real member.
fn real_home(rbs: &RigidBodyStructure, candidates: &[usize], atom_id: AtomId) -> Option<usize> {
    candidates.iter().copied().find(|&body_id| {
        rbs.body(body_id)
            .and_then(|b| b.particle_for_atom(atom_id))
            .is_some_and(|p| !p.ghost)
    })
}

fn ensure_ghost(
    rbs: &RigidBodyStructure,
    body_id: usize,
    atom_id: AtomId,
    serial: usize,
) -> Result<(), JointError> {
    let is_ghost = rbs
        .body(body_id)
        .and_then(|b| b.particle_for_atom(atom_id))
        .is_some_and(|p| p.ghost);
    if is_ghost {
        Ok(())
    } else {
        Err(JointError::MissingGhost { body_id, serial })
    }
}
