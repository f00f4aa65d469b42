use ahash::AHashMap;

use crate::Course;

/// Immutable, ordered collection of courses.
///
/// Order is load order and never changes; a course's index is its position
/// here. Duplicate names are allowed — the name index keeps the first
/// occurrence, matching first-match resolution everywhere else.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    by_name: AHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from (name, url) pairs in their stored order.
    #[must_use]
    pub fn new(entries: Vec<(String, String)>) -> Self {
        let courses: Vec<Course> = entries
            .into_iter()
            .enumerate()
            .map(|(index, (name, url))| Course::new(index, name, url))
            .collect();

        let mut by_name = AHashMap::with_capacity(courses.len());
        for course in &courses {
            by_name.entry(course.name.to_lowercase()).or_insert(course.index);
        }

        Self { courses, by_name }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Get a course by index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Course> {
        self.courses.get(index)
    }

    /// Exact case-insensitive name lookup. Returns the first occurrence
    /// when the catalog holds duplicate names.
    pub fn find_by_name(&self, name: &str) -> Option<&Course> {
        self.by_name
            .get(&name.to_lowercase())
            .and_then(|&index| self.courses.get(index))
    }

    /// Iterate courses in stored order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(names: &[&str]) -> Vec<(String, String)> {
        names
            .iter()
            .map(|n| (n.to_string(), format!("https://e.com/{}", n.to_lowercase())))
            .collect()
    }

    #[test]
    fn test_indices_are_dense_and_positional() {
        let catalog = Catalog::new(pairs(&["Rust Basics", "Python Basics", "SQL"]));
        assert_eq!(catalog.len(), 3);
        for (i, course) in catalog.iter().enumerate() {
            assert_eq!(course.index, i);
        }
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let catalog = Catalog::new(pairs(&["Rust Basics", "Python Basics"]));
        let hit = catalog.find_by_name("PYTHON basics").unwrap();
        assert_eq!(hit.index, 1);
        assert!(catalog.find_by_name("Haskell").is_none());
    }

    #[test]
    fn test_duplicate_names_resolve_to_first() {
        let catalog = Catalog::new(pairs(&["Intro", "Intro", "Other"]));
        assert_eq!(catalog.find_by_name("intro").unwrap().index, 0);
    }
}
