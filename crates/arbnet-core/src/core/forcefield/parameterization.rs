use super::params::Forcefield;
use crate::core::models::structure::AtomicStructure;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParameterizationError {
    #[error(
        "Missing force-field parameters for type '{ff_type}' referenced by atom '{atom_name}' (serial {serial})"
    )]
    MissingParams {
        ff_type: String,
        atom_name: String,
        serial: usize,
    },
}

/// Stamps force-field properties onto every atom of a structure.
///
/// A lookup failure for any referenced type is a configuration error for the
/// whole run, never a per-atom skip.
pub struct Parameterizer<'a> {
    forcefield: &'a Forcefield,
}

impl<'a> Parameterizer<'a> {
    pub fn new(forcefield: &'a Forcefield) -> Self {
        Self { forcefield }
    }

    pub fn parameterize_structure(
        &self,
        structure: &mut AtomicStructure,
    ) -> Result<(), ParameterizationError> {
        let atom_ids: Vec<_> = structure.atoms_iter().map(|(id, _)| id).collect();

        for atom_id in atom_ids {
            let atom = structure
                .atom(atom_id)
                .expect("atom id collected from this structure");
            let params = self.forcefield.get(&atom.force_field_type).copied().ok_or(
                ParameterizationError::MissingParams {
                    ff_type: atom.force_field_type.clone(),
                    atom_name: atom.name.clone(),
                    serial: atom.serial,
                },
            )?;

            if let Some(atom) = structure.atom_mut(atom_id) {
                atom.params = params;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::params::ParticleParams;
    use crate::core::models::atom::Atom;
    use nalgebra::Point3;

    fn test_forcefield() -> Forcefield {
        Forcefield::from_params([
            (
                "C.3".to_string(),
                ParticleParams {
                    charge: -0.1,
                    radius: 1.9,
                    epsilon: 0.11,
                    mass: 12.011,
                    transfer_energy: 0.4,
                },
            ),
            (
                "N.3".to_string(),
                ParticleParams {
                    charge: -0.9,
                    radius: 1.8,
                    epsilon: 0.17,
                    mass: 14.007,
                    transfer_energy: -1.0,
                },
            ),
        ])
    }

    #[test]
    fn parameterize_stamps_params_on_every_atom() {
        let ff = test_forcefield();
        let mut structure = AtomicStructure::new();
        structure
            .add_atom(Atom::new(1, "CA", "C.3", 1, Point3::origin()))
            .unwrap();
        structure
            .add_atom(Atom::new(2, "N", "N.3", 1, Point3::new(1.0, 0.0, 0.0)))
            .unwrap();

        Parameterizer::new(&ff)
            .parameterize_structure(&mut structure)
            .unwrap();

        for (_, atom) in structure.atoms_iter() {
            assert_ne!(atom.params.mass, 0.0);
        }
    }

    #[test]
    fn parameterize_fails_fast_on_missing_type() {
        let ff = test_forcefield();
        let mut structure = AtomicStructure::new();
        structure
            .add_atom(Atom::new(3, "OXT", "O.co2", 1, Point3::origin()))
            .unwrap();

        let result = Parameterizer::new(&ff).parameterize_structure(&mut structure);
        assert_eq!(
            result,
            Err(ParameterizationError::MissingParams {
                ff_type: "O.co2".to_string(),
                atom_name: "OXT".to_string(),
                serial: 3,
            })
        );
    }
}
