use std::collections::HashSet;

/// A set of strings that remembers first-insertion order.
///
/// Merged action and resource lists must come out in the same order on every
/// run, so iteration follows insertion and never the hash order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` unless present. Returns `true` if it was added.
    pub fn insert(&mut self, value: &str) -> bool {
        if self.seen.contains(value) {
            return false;
        }
        self.seen.insert(value.to_string());
        self.items.push(value.to_string());
        true
    }

    pub fn extend<'a, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        for value in values {
            self.insert(value);
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    /// Remove `value`, keeping the order of the rest. Returns `true` if it was present.
    pub fn remove(&mut self, value: &str) -> bool {
        if !self.seen.remove(value) {
            return false;
        }
        self.items.retain(|item| item != value);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl<'a> IntoIterator for &'a OrderedSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = OrderedSet::new();
        for value in iter {
            set.insert(value.as_ref());
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_deduplicates_and_keeps_first_position() {
        let mut set = OrderedSet::new();
        assert!(set.insert("b"));
        assert!(set.insert("a"));
        assert!(!set.insert("b"));
        assert!(set.insert("c"));
        assert_eq!(set.as_slice(), ["b", "a", "c"]);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut set: OrderedSet = ["x", "*", "y"].into_iter().collect();
        assert!(set.remove("*"));
        assert!(!set.remove("*"));
        assert!(!set.contains("*"));
        assert_eq!(set.into_vec(), vec!["x", "y"]);
    }

    #[test]
    fn test_extend_from_strings() {
        let mut set = OrderedSet::new();
        let values = vec!["a".to_string(), "a".to_string(), "b".to_string()];
        set.extend(&values);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }
}
