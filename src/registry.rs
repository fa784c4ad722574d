//! The step catalog
//!
//! A fixed, ordered sequence of named installation steps, built once at
//! startup and never mutated afterwards. Both the selection surfaces and the
//! run executor read it; selection is expressed as indices into this order.
//! Catalog order is the only ordering contract in the tool: later steps may
//! rely on artifacts earlier steps leave behind (Homebrew before anything
//! installed with `brew`, the NVM profile block before Node).

use crate::steps;
use crate::system::SetupContext;
use crate::types::Outcome;

/// Executable body of one step.
pub type StepFn = fn(&SetupContext) -> Outcome;

/// One named, described, independently executable installation unit.
pub struct Step {
    pub name: &'static str,
    pub description: &'static str,
    pub run: StepFn,
}

/// Ordered, append-only catalog of steps.
pub struct Registry {
    steps: Vec<Step>,
}

impl Registry {
    /// The standard catalog of setup steps.
    pub fn standard() -> Self {
        Self::from_steps(steps::catalog())
    }

    /// Build a registry from an explicit step list.
    pub fn from_steps(steps: Vec<Step>) -> Self {
        debug_assert!(
            {
                let mut names: Vec<&str> = steps.iter().map(|s| s.name).collect();
                names.sort_unstable();
                names.windows(2).all(|w| w[0] != w[1])
            },
            "step names must be unique"
        );
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Enumerate the catalog in registration order.
    pub fn list(&self) -> impl Iterator<Item = (usize, &'static str, &'static str)> + '_ {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| (index, step.name, step.description))
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_is_nonempty() {
        let registry = Registry::standard();
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_standard_catalog_names_are_unique() {
        let registry = Registry::standard();
        let mut names: Vec<&str> = registry.list().map(|(_, name, _)| name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_list_enumerates_in_registration_order() {
        let registry = Registry::standard();
        let indices: Vec<usize> = registry.list().map(|(index, _, _)| index).collect();
        let expected: Vec<usize> = (0..registry.len()).collect();
        assert_eq!(indices, expected);
    }

    #[test]
    fn test_list_matches_get() {
        let registry = Registry::standard();
        for (index, name, description) in registry.list() {
            let step = registry.get(index).expect("listed index must resolve");
            assert_eq!(step.name, name);
            assert_eq!(step.description, description);
        }
        assert!(registry.get(registry.len()).is_none());
    }

    #[test]
    fn test_homebrew_comes_first() {
        // Nearly every later step shells out to brew.
        let registry = Registry::standard();
        let (_, name, _) = registry.list().next().unwrap();
        assert_eq!(name, "Homebrew");
    }
}
