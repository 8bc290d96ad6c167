use crate::core::mechanics::network::SpringNetwork;
use serde::Serialize;

/// One coordinate-only site record for structural inspection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteRecord {
    /// Element symbol guessed from the particle name.
    pub element: char,
    /// The owning body's id.
    pub parent_id: usize,
    pub position: [f64; 3],
}

/// A viewer-oriented dump of a network: one site per particle plus one
/// explicit connectivity pair per spring. Useful for eyeballing the rigid
/// bodies and joint anchors in common molecular-structure viewers; the text
/// emission itself stays external.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureDump {
    pub sites: Vec<SiteRecord>,
    pub connections: Vec<[usize; 2]>,
}

impl StructureDump {
    pub fn from_network(network: &SpringNetwork) -> Self {
        let sites = network
            .particles()
            .iter()
            .map(|p| SiteRecord {
                element: element_of(&p.name),
                parent_id: p.body_id,
                position: [p.position.x, p.position.y, p.position.z],
            })
            .collect();

        let connections = network
            .springs()
            .iter()
            .map(|s| [s.index1, s.index2])
            .collect();

        Self { sites, connections }
    }
}

/// First alphabetic character of the atom name, so numbered hydrogens like
/// "1HB" still map to 'H'.
fn element_of(name: &str) -> char {
    name.chars()
        .find(|c| c.is_ascii_alphabetic())
        .unwrap_or('X')
}
