/// Returns `base` if no existing name matches it, otherwise the first free
/// `base (n)` counting from 2.
pub fn unique_name(base: &str, existing: &[String]) -> String {
    if !existing.iter().any(|name| name == base) {
        return base.to_owned();
    }
    let mut counter = 2;
    loop {
        let candidate = format!("{base} ({counter})");
        if !existing.iter().any(|name| name == &candidate) {
            return candidate;
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_name_is_kept() {
        assert_eq!(unique_name("Budget", &[]), "Budget");
    }

    #[test]
    fn taken_name_gets_a_counter() {
        let existing = vec!["Budget".to_owned()];
        assert_eq!(unique_name("Budget", &existing), "Budget (2)");
    }

    #[test]
    fn counter_skips_taken_candidates() {
        let existing = vec!["Budget".to_owned(), "Budget (2)".to_owned()];
        assert_eq!(unique_name("Budget", &existing), "Budget (3)");
    }
}
