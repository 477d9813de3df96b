//! Write-once story corpus with precomputed domains.

use std::collections::HashMap;

use super::types::Item;

/// Ordered, immutable set of fetched items.
///
/// Built once from a successful fetch. Each item's domain is extracted up
/// front and positions are indexed by domain so exact domain filters only
/// touch matching items.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    /// Items in upstream rank order.
    items: Vec<Item>,
    /// Domain per item position, `None` when the item has no usable URL.
    domains: Vec<Option<String>>,
    /// Domain to ascending item positions.
    by_domain: HashMap<String, Vec<usize>>,
}

impl Corpus {
    /// What: Build a corpus and its domain index.
    ///
    /// Inputs:
    /// - `items`: Items in rank order.
    ///
    /// Output:
    /// - Corpus owning `items`.
    ///
    /// Details:
    /// - Positions in each index bucket are ascending, so index lookups keep rank order.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        let domains: Vec<Option<String>> = items.iter().map(Item::domain).collect();
        let mut by_domain: HashMap<String, Vec<usize>> = HashMap::new();
        for (pos, domain) in domains.iter().enumerate() {
            if let Some(d) = domain {
                by_domain.entry(d.clone()).or_default().push(pos);
            }
        }
        Self {
            items,
            domains,
            by_domain,
        }
    }

    /// Number of items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the corpus holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in rank order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item at `pos`.
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<&Item> {
        self.items.get(pos)
    }

    /// Precomputed domain of the item at `pos`.
    #[must_use]
    pub fn domain_at(&self, pos: usize) -> Option<&str> {
        self.domains.get(pos).and_then(Option::as_deref)
    }

    /// Positions of items whose domain equals `domain`, in rank order.
    #[must_use]
    pub fn positions_for_domain(&self, domain: &str) -> &[usize] {
        self.by_domain.get(domain).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct domains in the corpus.
    #[must_use]
    pub fn domain_count(&self) -> usize {
        self.by_domain.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, url: Option<&str>) -> Item {
        Item {
            id,
            title: Some(format!("story {id}")),
            url: url.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    /// What: Domain index groups normalized hosts in rank order
    ///
    /// - Input: Two example.com variants around an unrelated host, plus a text post
    /// - Output: example.com bucket holds positions 0 and 2; text post is unindexed
    fn index_groups_normalized_domains_in_order() {
        let corpus = Corpus::new(vec![
            item(1, Some("http://www.example.com/a")),
            item(2, Some("https://other.com/c")),
            item(3, Some("https://example.com/b")),
            item(4, None),
        ]);
        assert_eq!(corpus.positions_for_domain("example.com"), &[0, 2]);
        assert_eq!(corpus.positions_for_domain("other.com"), &[1]);
        assert!(corpus.positions_for_domain("missing.org").is_empty());
        assert_eq!(corpus.domain_at(3), None);
        assert_eq!(corpus.domain_count(), 2);
    }

    #[test]
    fn empty_corpus_has_no_domains() {
        let corpus = Corpus::default();
        assert!(corpus.is_empty());
        assert_eq!(corpus.domain_count(), 0);
        assert_eq!(corpus.domain_at(0), None);
    }
}
