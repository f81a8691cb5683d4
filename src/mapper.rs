use std::collections::HashMap;

/// Bidirectional map between node labels (e.g. URLs) and dense ids.
///
/// Ids are handed out in first-seen order starting from zero, so they can be
/// used directly as row numbers of a [`crate::SparseMatrix`].
#[derive(Debug, Clone, Default)]
pub struct LabelMapper {
    ids: HashMap<String, usize, ahash::RandomState>,
    labels: Vec<String>,
}

impl LabelMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `label`, assigning the next free one if unseen.
    pub fn id_or_insert(&mut self, label: &str) -> usize {
        if let Some(id) = self.ids.get(label) {
            return *id;
        }
        let id = self.labels.len();
        self.ids.insert(label.to_string(), id);
        self.labels.push(label.to_string());
        id
    }

    pub fn id(&self, label: &str) -> Option<usize> {
        self.ids.get(label).copied()
    }

    pub fn label(&self, id: usize) -> Option<&str> {
        self.labels.get(id).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// `(id, label)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.labels.iter().enumerate().map(|(i, s)| (i, s.as_str()))
    }
}
