use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulesLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Malformed rotamer rule at {path}:{line}: expected two atom names, got '{content}'")]
    MalformedLine {
        path: String,
        line: usize,
        content: String,
    },
}

/// The rule table deciding which bonds are rotamer (articulation) bonds.
///
/// The table is a set of *ordered* atom-name pairs: `(A, B)` is distinct from
/// `(B, A)`, and a caller wanting symmetric behavior must register both
/// directions. A bond matches iff the pair of endpoint names (in canonical
/// bond order) is registered **and** both endpoints belong to the same parent
/// group, so backbone bonds between adjacent residues never articulate.
///
/// The default table seeds the classic backbone rotation points
/// (Cα–C, C–Cα, Cβ–Cα, Cα–Cβ, Cα–N, N–Cα). A custom table loaded from a file
/// replaces the default wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotamerRules {
    pairs: HashSet<(String, String)>,
}

impl Default for RotamerRules {
    fn default() -> Self {
        Self::from_pairs([
            ("CA", "C"),
            ("C", "CA"),
            ("CB", "CA"),
            ("CA", "CB"),
            ("CA", "N"),
            ("N", "CA"),
        ])
    }
}

impl RotamerRules {
    /// Builds a rule table from an explicit list of ordered name pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        }
    }

    /// Loads a rule table from a line-oriented file, replacing the default.
    ///
    /// Each data line holds exactly two whitespace-separated atom names
    /// forming one ordered pair. Blank lines and lines starting with `#` are
    /// skipped. Pairs are registered exactly as written; no reverse direction
    /// is added implicitly.
    ///
    /// # Errors
    ///
    /// Returns [`RulesLoadError::Io`] if the file cannot be read and
    /// [`RulesLoadError::MalformedLine`] for any data line that does not hold
    /// exactly two fields.
    pub fn load(path: &Path) -> Result<Self, RulesLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| RulesLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        let mut pairs = HashSet::new();
        for (line_index, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            match fields.as_slice() {
                [first, second] => {
                    pairs.insert((first.to_string(), second.to_string()));
                }
                _ => {
                    return Err(RulesLoadError::MalformedLine {
                        path: path.to_string_lossy().to_string(),
                        line: line_index + 1,
                        content: trimmed.to_string(),
                    });
                }
            }
        }
        Ok(Self { pairs })
    }

    /// Decides whether a bond is a rotamer bond.
    ///
    /// Pure predicate: true iff the ordered pair `(name1, name2)` is
    /// registered and both endpoints share the same parent group id.
    pub fn is_rotamer(&self, name1: &str, name2: &str, group1: isize, group2: isize) -> bool {
        group1 == group2
            && self
                .pairs
                .contains(&(name1.to_string(), name2.to_string()))
    }

    /// Returns the number of registered pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no pairs are registered.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_table_contains_backbone_pairs_in_both_directions() {
        let rules = RotamerRules::default();
        assert_eq!(rules.len(), 6);
        assert!(rules.is_rotamer("CA", "C", 1, 1));
        assert!(rules.is_rotamer("C", "CA", 1, 1));
        assert!(rules.is_rotamer("CA", "CB", 1, 1));
        assert!(rules.is_rotamer("CB", "CA", 1, 1));
        assert!(rules.is_rotamer("CA", "N", 1, 1));
        assert!(rules.is_rotamer("N", "CA", 1, 1));
    }

    #[test]
    fn is_rotamer_requires_shared_parent_group() {
        let rules = RotamerRules::default();
        assert!(!rules.is_rotamer("CA", "C", 1, 2));
    }

    #[test]
    fn is_rotamer_rejects_unregistered_pairs() {
        let rules = RotamerRules::default();
        assert!(!rules.is_rotamer("CB", "CG", 1, 1));
        assert!(!rules.is_rotamer("O", "C", 1, 1));
    }

    #[test]
    fn from_pairs_is_directional() {
        let rules = RotamerRules::from_pairs([("CB", "CG")]);
        assert!(rules.is_rotamer("CB", "CG", 1, 1));
        assert!(!rules.is_rotamer("CG", "CB", 1, 1));
    }

    #[test]
    fn load_replaces_default_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rules.txt");
        fs::write(&path, "# custom articulation points\nCB\tCG\nCG\tCB\n\n").unwrap();

        let rules = RotamerRules::load(&path).unwrap();
        assert_eq!(rules.len(), 2);
        assert!(rules.is_rotamer("CB", "CG", 1, 1));
        assert!(!rules.is_rotamer("CA", "C", 1, 1));
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = RotamerRules::load(&dir.path().join("absent.txt"));
        assert!(matches!(result, Err(RulesLoadError::Io { .. })));
    }

    #[test]
    fn load_fails_for_malformed_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rules.txt");
        fs::write(&path, "CA C\nCB\n").unwrap();

        let result = RotamerRules::load(&path);
        assert!(matches!(
            result,
            Err(RulesLoadError::MalformedLine { line: 2, .. })
        ));
    }
}
