//! Company blacklist - the campaign's deduplicated exclusion list.

use crate::domain::foundation::CompanyId;
use serde::{Deserialize, Serialize};

use super::Company;

/// Ordered, deduplicated collection of companies a campaign must not
/// target.
///
/// # Invariants
///
/// - No two entries share a [`CompanyId`]
/// - Iteration order is insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyBlacklist {
    companies: Vec<Company>,
}

impl CompanyBlacklist {
    /// Creates an empty blacklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a company unless one with the same id is already present.
    ///
    /// Returns true if the company was inserted, false if the add was a
    /// duplicate no-op.
    pub fn add(&mut self, company: Company) -> bool {
        if self.contains(company.id()) {
            return false;
        }
        self.companies.push(company);
        true
    }

    /// Removes the entry with the given id, if present.
    ///
    /// Returns true if an entry was removed. Removing an absent id is a
    /// no-op.
    pub fn remove(&mut self, id: &CompanyId) -> bool {
        let before = self.companies.len();
        self.companies.retain(|c| c.id() != id);
        self.companies.len() != before
    }

    /// Checks whether a company with the given id is excluded.
    pub fn contains(&self, id: &CompanyId) -> bool {
        self.companies.iter().any(|c| c.id() == id)
    }

    /// Iterates the excluded companies in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Company> {
        self.companies.iter()
    }

    /// Returns the excluded companies as a slice, in insertion order.
    pub fn as_slice(&self) -> &[Company] {
        &self.companies
    }

    /// Returns the number of excluded companies.
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    /// Returns true if no companies are excluded.
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn company(id: &str, name: &str) -> Company {
        Company::new(CompanyId::new(id).unwrap(), name).unwrap()
    }

    #[test]
    fn add_inserts_company() {
        let mut blacklist = CompanyBlacklist::new();
        assert!(blacklist.add(company("co-1", "Acme")));
        assert_eq!(blacklist.len(), 1);
        assert!(blacklist.contains(&CompanyId::new("co-1").unwrap()));
    }

    #[test]
    fn add_duplicate_id_is_noop() {
        let mut blacklist = CompanyBlacklist::new();
        blacklist.add(company("co-1", "Acme"));
        let inserted = blacklist.add(company("co-1", "Acme Renamed"));

        assert!(!inserted);
        assert_eq!(blacklist.len(), 1);
        // First entry wins
        assert_eq!(blacklist.as_slice()[0].name(), "Acme");
    }

    #[test]
    fn remove_deletes_matching_entry() {
        let mut blacklist = CompanyBlacklist::new();
        blacklist.add(company("co-1", "Acme"));
        blacklist.add(company("co-2", "Globex"));

        assert!(blacklist.remove(&CompanyId::new("co-1").unwrap()));
        assert_eq!(blacklist.len(), 1);
        assert!(!blacklist.contains(&CompanyId::new("co-1").unwrap()));
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let mut blacklist = CompanyBlacklist::new();
        blacklist.add(company("co-1", "Acme"));

        assert!(!blacklist.remove(&CompanyId::new("co-9").unwrap()));
        assert_eq!(blacklist.len(), 1);
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut blacklist = CompanyBlacklist::new();
        blacklist.add(company("co-3", "Initech"));
        blacklist.add(company("co-1", "Acme"));
        blacklist.add(company("co-2", "Globex"));

        let names: Vec<&str> = blacklist.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Initech", "Acme", "Globex"]);
    }

    #[test]
    fn empty_blacklist_reports_empty() {
        let blacklist = CompanyBlacklist::new();
        assert!(blacklist.is_empty());
        assert_eq!(blacklist.len(), 0);
    }

    proptest! {
        #[test]
        fn no_duplicate_ids_after_any_add_sequence(ids in prop::collection::vec("[a-z]{1,4}", 0..32)) {
            let mut blacklist = CompanyBlacklist::new();
            for id in &ids {
                blacklist.add(company(id, "Some Co"));
            }

            let mut seen = std::collections::HashSet::new();
            for entry in blacklist.iter() {
                prop_assert!(seen.insert(entry.id().as_str().to_string()));
            }
        }
    }
}
