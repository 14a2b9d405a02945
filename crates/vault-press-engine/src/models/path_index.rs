use super::DocumentPath;

/// Every file in the vault, sorted descending by relative path.
///
/// Built once per run and only read afterwards. The order is part of the
/// contract: link resolution keeps the last match in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathIndex {
    paths: Vec<DocumentPath>,
}

impl PathIndex {
    pub fn from_paths<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = DocumentPath>,
    {
        let mut paths: Vec<DocumentPath> = paths.into_iter().collect();
        paths.sort_by(|a, b| b.cmp(a));
        paths.dedup();
        Self { paths }
    }

    pub fn paths(&self) -> &[DocumentPath] {
        &self.paths
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DocumentPath> {
        self.paths.iter()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Finds the document a wiki link target refers to.
    ///
    /// When several documents share the name, the last one in index order
    /// wins, which is the lexicographically smallest path.
    pub fn resolve(&self, target: &str) -> Option<&DocumentPath> {
        self.paths.iter().filter(|p| p.matches_target(target)).last()
    }
}

impl<'a> IntoIterator for &'a PathIndex {
    type Item = &'a DocumentPath;
    type IntoIter = std::slice::Iter<'a, DocumentPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
