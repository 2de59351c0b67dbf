use std::collections::HashSet;

/// Distinct records in first-seen order, together with the size of the list
/// they were taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deduplicated {
    records: Vec<String>,
    original_count: usize,
}

impl Deduplicated {
    pub fn records(&self) -> &[String] {
        &self.records
    }

    pub fn into_records(self) -> Vec<String> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn original_count(&self) -> usize {
        self.original_count
    }

    pub fn duplicates_removed(&self) -> usize {
        self.original_count - self.records.len()
    }
}

/// Drop repeated entries, keeping the first occurrence of each. Comparison is
/// exact: case and surrounding whitespace are significant.
pub fn deduplicate(candidates: Vec<String>) -> Deduplicated {
    let original_count = candidates.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(original_count);
    let mut records = Vec::with_capacity(original_count);

    for candidate in candidates {
        if seen.insert(candidate.clone()) {
            records.push(candidate);
        }
    }

    log::debug!("Kept {} of {} candidates", records.len(), original_count);

    Deduplicated {
        records,
        original_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_first_occurrence_order_preserved() {
        let result = deduplicate(strings(&["b", "a", "b", "c", "a"]));
        assert_eq!(result.records(), strings(&["b", "a", "c"]).as_slice());
        assert_eq!(result.original_count(), 5);
        assert_eq!(result.duplicates_removed(), 2);
    }

    #[test]
    fn test_no_duplicates() {
        let result = deduplicate(strings(&["x", "y", "z"]));
        assert_eq!(result.len(), 3);
        assert_eq!(result.duplicates_removed(), 0);
    }

    #[test]
    fn test_comparison_is_exact() {
        let result = deduplicate(strings(&["Mail@x.io", "mail@x.io", "mail@x.io "]));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_empty_entries_deduplicated_like_any_other() {
        let result = deduplicate(strings(&["a", "", "b", "", ""]));
        assert_eq!(result.into_records(), strings(&["a", "", "b"]));
    }

    #[test]
    fn test_empty_input() {
        let result = deduplicate(Vec::new());
        assert!(result.is_empty());
        assert_eq!(result.original_count(), 0);
        assert_eq!(result.duplicates_removed(), 0);
    }

    #[test]
    fn test_counts_always_add_up() {
        let inputs = [
            strings(&["a", "a", "a"]),
            strings(&["1", "2", "1", "3", "2", "4"]),
            strings(&["only"]),
        ];

        for input in inputs {
            let total = input.len();
            let result = deduplicate(input);
            assert_eq!(result.len() + result.duplicates_removed(), total);

            let unique: HashSet<&String> = result.records().iter().collect();
            assert_eq!(unique.len(), result.len());
        }
    }
}
