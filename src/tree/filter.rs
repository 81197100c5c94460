//! Name-based entry filtering

use std::collections::HashSet;
use std::ffi::{OsStr, OsString};

/// Set of bare entry names to skip. Matching is exact: no globbing, and
/// the full path is never consulted, so a name is skipped at every depth.
#[derive(Debug, Clone, Default)]
pub struct IgnoreFilter(HashSet<OsString>);

impl IgnoreFilter {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Check if an entry with this name should be skipped.
    pub fn is_ignored(&self, name: &OsStr) -> bool {
        self.0.contains(name)
    }

    /// Drop ignored names, keeping the order of the rest.
    pub fn retain_visible(&self, names: &mut Vec<OsString>) {
        if !self.0.is_empty() {
            names.retain(|name| !self.is_ignored(name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let filter = IgnoreFilter::new(["target", "node_modules"]);
        assert!(filter.is_ignored(OsStr::new("target")));
        assert!(filter.is_ignored(OsStr::new("node_modules")));
        assert!(!filter.is_ignored(OsStr::new("targets")));
        assert!(!filter.is_ignored(OsStr::new("Target")));
        assert!(!filter.is_ignored(OsStr::new("*")));

        let globby = IgnoreFilter::new(["*.log"]);
        assert!(!globby.is_ignored(OsStr::new("debug.log")));
        assert!(globby.is_ignored(OsStr::new("*.log")));
    }

    #[test]
    fn test_retain_visible_preserves_order() {
        let filter = IgnoreFilter::new([".git"]);
        let mut names: Vec<OsString> = ["z", ".git", "a", "m"].iter().map(OsString::from).collect();
        filter.retain_visible(&mut names);
        assert_eq!(names, vec![OsString::from("z"), OsString::from("a"), OsString::from("m")]);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = IgnoreFilter::default();
        let mut names = vec![OsString::from(".git"), OsString::from("src")];
        filter.retain_visible(&mut names);
        assert_eq!(names.len(), 2);
    }
}
