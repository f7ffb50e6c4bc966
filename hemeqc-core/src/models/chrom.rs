///
/// Sort key for chromosome names.
///
/// Numbered chromosomes (`chr7`, `12`) compare numerically and always sort
/// before named ones (`chrX`, `chrM`, `GL000220.1`), which compare
/// lexicographically. A leading `chr` is ignored for both.
///
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChromKey {
    Numeric(u32),
    Named(String),
}

impl From<&str> for ChromKey {
    fn from(value: &str) -> Self {
        let name = value.strip_prefix("chr").unwrap_or(value);
        if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = name.parse::<u32>() {
                return ChromKey::Numeric(n);
            }
        }
        ChromKey::Named(name.to_string())
    }
}
