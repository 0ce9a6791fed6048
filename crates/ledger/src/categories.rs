/// The append-only ordered set of product categories.
///
/// Membership is exact, case-sensitive string equality, and the set never
/// shrinks: once a category has been used it stays selectable so historical
/// orders keep a valid grouping key.
#[derive(Debug, Clone, Default)]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Appends a new distinct category. Blank names and exact duplicates
    /// are a silent no-op. Returns whether the set grew.
    pub fn add(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() || self.names.iter().any(|n| n == trimmed) {
            return false;
        }
        self.names.push(trimmed.to_string());
        true
    }

    pub fn list(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_in_order_and_skips_duplicates() {
        let mut set = CategorySet::default();
        assert!(set.add("reels bundle"));
        assert!(set.add("CE Prime"));
        assert!(!set.add("reels bundle"));
        assert_eq!(set.list(), ["reels bundle", "CE Prime"]);
    }

    #[test]
    fn membership_is_case_sensitive() {
        let mut set = CategorySet::default();
        set.add("Prime");
        assert!(set.add("prime"));
        assert_eq!(set.list().len(), 2);
    }

    #[test]
    fn blank_names_are_ignored() {
        let mut set = CategorySet::default();
        assert!(!set.add(""));
        assert!(!set.add("   "));
        assert!(set.is_empty());
    }
}
