use super::body::Particle;
use super::joint::Joint;
use super::partitioner::RigidBodyStructure;
use super::spring::{Spring, SynthesisConfig};
use crate::core::models::ids::AtomId;
use std::collections::HashMap;
use thiserror::Error;

/// Synthesis-time invariant violations. Either variant means the partitioner
/// or joint-resolver contract was broken upstream; the partially built
/// network is discarded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("Body {body_id} is missing the ghost counterpart of atom {serial} for a joint spring")]
    MissingGhost { body_id: usize, serial: usize },

    #[error("Body {body_id} is missing the real joint endpoint atom {serial}")]
    MissingEndpoint { body_id: usize, serial: usize },
}

/// The final artifact: an ordered particle list and an ordered spring list.
///
/// Particle order is body-then-membership order (bodies in id order,
/// particles in each body's insertion order); every `(body, atom)` pair is a
/// distinct network particle with its own index, so ghost duplicates are not
/// aliases of their source. Springs are grouped body-internal first (in body
/// id order), then joint springs in joint discovery order. The ordering is
/// not mechanically significant but is stable for reproducible output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpringNetwork {
    particles: Vec<Particle>,
    springs: Vec<Spring>,
    index_of: HashMap<(usize, AtomId), usize>,
}

impl SpringNetwork {
    /// All particles, in emission order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// All springs, in emission order.
    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    /// The network index assigned to a `(body id, atom)` occurrence.
    pub fn particle_index(&self, body_id: usize, atom_id: AtomId) -> Option<usize> {
        self.index_of.get(&(body_id, atom_id)).copied()
    }
}

/// Builds the complete particle and spring lists from the rigid-body set and
/// joint list.
///
/// Per body: one spring for every unordered pair of its particles (the
/// complete graph approximates rigidity under the downstream force law). Per
/// joint: two springs pairing each real endpoint with the ghost counterpart
/// of the opposite endpoint in its own body. Every rest length is the
/// particle distance in the input configuration at call time.
pub fn synthesize(
    rbs: &RigidBodyStructure,
    joints: &[Joint],
    config: &SynthesisConfig,
) -> Result<SpringNetwork, SynthesisError> {
    let mut network = SpringNetwork::default();
    let mut body_bases = Vec::with_capacity(rbs.bodies().len());

    for body in rbs.bodies() {
        body_bases.push(network.particles.len());
        for particle in body.particles() {
            network
                .index_of
                .insert((body.id, particle.atom_id), network.particles.len());
            network.particles.push(particle.clone());
        }
    }

    for (body, &base) in rbs.bodies().iter().zip(&body_bases) {
        let particles = body.particles();
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                network.springs.push(Spring {
                    index1: base + i,
                    index2: base + j,
                    stiffness: config.rigid_stiffness,
                    rest_length: particles[i].distance(&particles[j]),
                });
            }
        }
    }

    for joint in joints {
        let (real1, ghost2) = joint_pair(rbs, &network, joint.body1, joint.atom1, joint.atom2)?;
        let (real2, ghost1) = joint_pair(rbs, &network, joint.body2, joint.atom2, joint.atom1)?;

        for (real, ghost) in [(real1, ghost2), (real2, ghost1)] {
            let rest_length = network.particles[real].distance(&network.particles[ghost]);
            network.springs.push(Spring {
                index1: real,
                index2: ghost,
                stiffness: config.joint_stiffness,
                rest_length,
            });
        }
    }

    Ok(network)
}

/// Resolves, inside one body, the network indices of the real joint endpoint
/// and the ghost counterpart of the opposite endpoint.
fn joint_pair(
    rbs: &RigidBodyStructure,
    network: &SpringNetwork,
    body_id: usize,
    real_atom: AtomId,
    ghost_atom: AtomId,
) -> Result<(usize, usize), SynthesisError> {
    let body = rbs.body(body_id).ok_or(SynthesisError::MissingEndpoint {
        body_id,
        serial: 0,
    })?;

    let lookup = |atom_id: AtomId, want_ghost: bool| {
        body.particle_for_atom(atom_id)
            .filter(|p| p.ghost == want_ghost)
            .and_then(|p| network.particle_index(body_id, p.atom_id))
    };

    let real = lookup(real_atom, false).ok_or_else(|| SynthesisError::MissingEndpoint {
        body_id,
        serial: serial_in_body(body, real_atom),
    })?;
    let ghost = lookup(ghost_atom, true).ok_or_else(|| SynthesisError::MissingGhost {
        body_id,
        serial: serial_in_body(body, ghost_atom),
    })?;
    Ok((real, ghost))
}

fn serial_in_body(body: &super::body::RigidBody, atom_id: AtomId) -> usize {
    body.particle_for_atom(atom_id).map_or(0, |p| p.serial)
}
