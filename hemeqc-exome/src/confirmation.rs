use std::fmt::{self, Display};

///
/// How strongly the exome data backs a variant at a given position.
///
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Confirmation {
    /// Nothing in the exome data at this position.
    #[default]
    Absent,
    /// Exome rows exist at this position but none has a calling allele.
    Present,
    /// An exome row at this position has a calling allele.
    Verified {
        allele: String,
        frequency: Option<String>,
    },
}

impl Confirmation {
    ///
    /// Truth tier used to rank variants for review: 0, 2 or 3.
    ///
    pub fn tier(&self) -> u8 {
        match self {
            Confirmation::Absent => 0,
            Confirmation::Present => 2,
            Confirmation::Verified { .. } => 3,
        }
    }

    ///
    /// Value of the annotation column in an annotated report:
    /// `""`, `IN_EXOME` or `VERIFIED - <allele>, <freq>%`.
    ///
    pub fn annotation(&self) -> String {
        match self {
            Confirmation::Absent => String::new(),
            Confirmation::Present => "IN_EXOME".to_string(),
            Confirmation::Verified { allele, frequency } => match frequency {
                Some(f) => format!("VERIFIED - {}, {}%", allele, f),
                None => format!("VERIFIED - {}", allele),
            },
        }
    }

    ///
    /// Value of the `horizon` column in a truth file.
    ///
    pub fn truth_label(&self) -> String {
        match self {
            Confirmation::Absent => String::new(),
            Confirmation::Present => "confirmed in parental cell line".to_string(),
            Confirmation::Verified { frequency, .. } => match frequency {
                Some(f) => format!("Verified - {}%", f),
                None => "Verified".to_string(),
            },
        }
    }
}

impl Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.annotation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(Confirmation::Absent, "", "", 0)]
    #[case(Confirmation::Present, "IN_EXOME", "confirmed in parental cell line", 2)]
    #[case(
        Confirmation::Verified { allele: "BRAF V600E".into(), frequency: Some("10.5".into()) },
        "VERIFIED - BRAF V600E, 10.5%",
        "Verified - 10.5%",
        3
    )]
    #[case(
        Confirmation::Verified { allele: "TP53 R273C".into(), frequency: None },
        "VERIFIED - TP53 R273C",
        "Verified",
        3
    )]
    fn test_labels(
        #[case] confirmation: Confirmation,
        #[case] annotation: &str,
        #[case] truth_label: &str,
        #[case] tier: u8,
    ) {
        assert_eq!(confirmation.annotation(), annotation);
        assert_eq!(confirmation.truth_label(), truth_label);
        assert_eq!(confirmation.tier(), tier);
    }
}
