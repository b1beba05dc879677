use std::collections::HashMap;

use indexmap::IndexMap;

use crate::model::{DynamicContent, Property};

/// A school and how many listings name it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniversityCount {
    pub name: String,
    pub count: usize,
}

/// The session dataset. Built once at boot and read-only afterwards.
#[derive(Debug, Clone)]
pub struct DataStore {
    properties: Vec<Property>,
    index: HashMap<String, usize>,
    schools: Vec<String>,
    content: DynamicContent,
}

impl DataStore {
    /// `properties` must already be free of duplicate ids
    /// (see [`crate::convert::listings`]).
    pub fn new(properties: Vec<Property>, schools: Vec<String>, content: DynamicContent) -> Self {
        let index = properties
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        Self {
            properties,
            index,
            schools,
            content,
        }
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn property(&self, id: &str) -> Option<&Property> {
        self.index.get(id).and_then(|&i| self.properties.get(i))
    }

    /// The `schools` list published alongside the listings.
    pub fn schools(&self) -> &[String] {
        &self.schools
    }

    pub fn content(&self) -> &DynamicContent {
        &self.content
    }

    /// Distinct listing schools in first-appearance order.
    pub fn unique_universities(&self) -> Vec<&str> {
        self.school_counts().into_keys().collect()
    }

    /// The `n` schools with the most listings. Ties keep first-appearance
    /// order.
    pub fn top_universities(&self, n: usize) -> Vec<UniversityCount> {
        let mut counts: Vec<_> = self.school_counts().into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
            .into_iter()
            .take(n)
            .map(|(name, count)| UniversityCount {
                name: name.to_owned(),
                count,
            })
            .collect()
    }

    /// The first `n` listings, as featured on the home page.
    pub fn featured(&self, n: usize) -> &[Property] {
        &self.properties[..n.min(self.properties.len())]
    }

    fn school_counts(&self) -> IndexMap<&str, usize> {
        let mut counts = IndexMap::new();
        for school in self.properties.iter().filter_map(|p| p.school.as_deref()) {
            *counts.entry(school).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;
    use pretty_assertions::assert_eq;

    fn listing(id: &str, school: Option<&str>) -> Property {
        Property {
            id: id.into(),
            school: school.map(Into::into),
            ..Property::default()
        }
    }

    fn store(props: Vec<Property>) -> DataStore {
        DataStore::new(props, Vec::new(), defaults::dynamic_content())
    }

    #[test]
    fn lookup_by_id() {
        let store = store(defaults::properties());
        assert_eq!(
            store.property("prop2").map(|p| p.title.as_str()),
            Some("3-Bedroom Family Home")
        );
        assert!(store.property("missing").is_none());
    }

    #[test]
    fn universities_in_first_appearance_order() {
        let store = store(vec![
            listing("1", Some("B")),
            listing("2", None),
            listing("3", Some("A")),
            listing("4", Some("B")),
        ]);
        assert_eq!(store.unique_universities(), ["B", "A"]);
    }

    #[test]
    fn top_universities_ties_are_stable() {
        let store = store(vec![
            listing("1", Some("X")),
            listing("2", Some("Y")),
            listing("3", Some("Z")),
            listing("4", Some("Z")),
            listing("5", Some("W")),
        ]);
        let top: Vec<_> = store
            .top_universities(3)
            .into_iter()
            .map(|u| (u.name, u.count))
            .collect();
        assert_eq!(
            top,
            [("Z".to_owned(), 2), ("X".to_owned(), 1), ("Y".to_owned(), 1)]
        );
    }

    #[test]
    fn featured_is_clamped() {
        let store = store(defaults::properties());
        assert_eq!(store.featured(6).len(), 3);
        assert_eq!(store.featured(2).len(), 2);
    }
}
