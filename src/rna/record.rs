use std::fmt::{Display, Formatter};

/// A nucleotide sequence and its dot-bracket secondary structure, position by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RnaRecord {
    pub sequence: String,
    pub structure: String,
}

impl RnaRecord {
    pub fn new<S: Into<String>, T: Into<String>>(sequence: S, structure: T) -> Self {
        Self {
            sequence: sequence.into(),
            structure: structure.into(),
        }
    }

    /// Number of positions (the structure decides; a valid record has equal lengths).
    pub fn len(&self) -> usize {
        self.structure.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty() && self.structure.is_empty()
    }
}

/// Text form written by the decompressor: sequence, newline, structure.
impl Display for RnaRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.sequence, self.structure)
    }
}

#[cfg(test)]
mod test {
    use super::RnaRecord;

    #[test]
    fn display_test() {
        let rna = RnaRecord::new("GGAUCC", "((..))");
        assert_eq!(rna.to_string(), "GGAUCC\n((..))");
        assert_eq!(rna.len(), 6);
        assert!(RnaRecord::default().is_empty());
    }
}
