use crate::core::mechanics::network::SpringNetwork;
use serde::Serialize;

/// One flattened particle row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleRecord {
    pub position: [f64; 3],
    pub charge: f64,
    pub radius: f64,
    pub epsilon: f64,
    pub mass: f64,
    pub transfer_energy: f64,
    pub name: String,
    /// The owning body's id (the particle's overridden parent group).
    pub parent_id: usize,
    pub chain: char,
    pub dynamic: bool,
}

/// One flattened spring row. Particle references are zero-based indices into
/// the particle array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpringRecord {
    pub particles: [usize; 2],
    pub stiffness: f64,
    pub rest_length: f64,
}

/// The array form of a spring network, ready for an external serializer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkArrays {
    pub particle_count: usize,
    pub spring_count: usize,
    pub particles: Vec<ParticleRecord>,
    pub springs: Vec<SpringRecord>,
}

const DEFAULT_CHAIN: char = 'A';

impl NetworkArrays {
    /// Flattens a network, preserving its particle and spring ordering.
    pub fn from_network(network: &SpringNetwork) -> Self {
        let particles = network
            .particles()
            .iter()
            .map(|p| ParticleRecord {
                position: [p.position.x, p.position.y, p.position.z],
                charge: p.params.charge,
                radius: p.params.radius,
                epsilon: p.params.epsilon,
                mass: p.params.mass,
                transfer_energy: p.params.transfer_energy,
                name: p.name.clone(),
                parent_id: p.body_id,
                chain: DEFAULT_CHAIN,
                dynamic: true,
            })
            .collect::<Vec<_>>();

        let springs = network
            .springs()
            .iter()
            .map(|s| SpringRecord {
                particles: [s.index1, s.index2],
                stiffness: s.stiffness,
                rest_length: s.rest_length,
            })
            .collect::<Vec<_>>();

        Self {
            particle_count: particles.len(),
            spring_count: springs.len(),
            particles,
            springs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mechanics::joint::resolve_joints;
    use crate::core::mechanics::network::synthesize;
    use crate::core::mechanics::partitioner::partition;
    use crate::core::mechanics::spring::SynthesisConfig;
    use crate::core::models::atom::Atom;
    use crate::core::models::structure::AtomicStructure;
    use crate::core::rotamers::rules::RotamerRules;
    use nalgebra::Point3;

    fn small_network() -> SpringNetwork {
        let rules = RotamerRules::default();
        let mut s = AtomicStructure::new();
        s.add_atom(Atom::new(1, "N", "N.3", 1, Point3::new(0.0, 0.0, 0.0)))
            .unwrap();
        s.add_atom(Atom::new(2, "CA", "C.3", 1, Point3::new(1.5, 0.0, 0.0)))
            .unwrap();
        s.add_bond(1, 2, &rules).unwrap(); // rotamer

        let rbs = partition(&s);
        let joints = resolve_joints(&s, &rbs).unwrap();
        synthesize(&rbs, &joints, &SynthesisConfig::default()).unwrap()
    }

    #[test]
    fn from_network_preserves_counts_and_order() {
        let network = small_network();
        let arrays = NetworkArrays::from_network(&network);

        assert_eq!(arrays.particle_count, network.particles().len());
        assert_eq!(arrays.spring_count, network.springs().len());
        assert_eq!(arrays.particles.len(), arrays.particle_count);
        assert_eq!(arrays.springs.len(), arrays.spring_count);

        for (record, particle) in arrays.particles.iter().zip(network.particles()) {
            assert_eq!(record.name, particle.name);
            assert_eq!(record.parent_id, particle.body_id);
            assert_eq!(record.position[0], particle.position.x);
        }
    }

    #[test]
    fn spring_records_use_zero_based_indices() {
        let arrays = NetworkArrays::from_network(&small_network());

        for record in &arrays.springs {
            assert!(record.particles[0] < arrays.particle_count);
            assert!(record.particles[1] < arrays.particle_count);
        }
        assert!(arrays.springs.iter().any(|r| r.particles[0] == 0));
    }

    #[test]
    fn records_carry_constant_chain_and_dynamic_state() {
        let arrays = NetworkArrays::from_network(&small_network());
        assert!(
            arrays
                .particles
                .iter()
                .all(|r| r.chain == 'A' && r.dynamic)
        );
    }
}
