/// Canonical keyword form shared by the resolver, the classifier and the
/// trending aggregator: trimmed, lowercased, interior whitespace runs
/// collapsed to a single space.
///
/// "Quantum␣␣Computing␣" and "quantum computing" normalize identically, so
/// matching, grouping and classification all agree on what counts as the
/// same keyword.
pub fn normalize_keyword(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
