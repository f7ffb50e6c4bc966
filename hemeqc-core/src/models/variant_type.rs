use std::fmt::{self, Display};

///
/// Variant class as written in the `Type` column of a variant table.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VariantType {
    Snv,
    Ins,
    Del,
    Other(String),
}

impl From<&str> for VariantType {
    fn from(value: &str) -> Self {
        match value {
            "SNV" => VariantType::Snv,
            "INS" => VariantType::Ins,
            "DEL" => VariantType::Del,
            other => VariantType::Other(other.to_string()),
        }
    }
}

impl VariantType {
    pub fn is_indel(&self) -> bool {
        matches!(self, VariantType::Ins | VariantType::Del)
    }

    ///
    /// Position used to key a variant of this type.
    ///
    /// Exome callers report insertions and deletions at the base before the
    /// event while the panel reports the first affected base, so indels are
    /// shifted by one to line the two up. Every other type keeps its
    /// declared position.
    ///
    pub fn normalized_position(&self, declared: u32) -> u32 {
        match self.is_indel() {
            true => declared.saturating_add(1),
            false => declared,
        }
    }
}

impl Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantType::Snv => write!(f, "SNV"),
            VariantType::Ins => write!(f, "INS"),
            VariantType::Del => write!(f, "DEL"),
            VariantType::Other(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("INS", 100, 101)]
    #[case("DEL", 100, 101)]
    #[case("SNV", 140453136, 140453136)]
    #[case("MNV", 100, 100)]
    #[case("del", 100, 100)]
    fn test_normalized_position(#[case] ty: &str, #[case] declared: u32, #[case] expected: u32) {
        assert_eq!(VariantType::from(ty).normalized_position(declared), expected);
    }

    #[rstest]
    fn test_round_trips_through_display() {
        assert_eq!(VariantType::from("DEL").to_string(), "DEL");
        assert_eq!(VariantType::from("Complex").to_string(), "Complex");
    }
}
