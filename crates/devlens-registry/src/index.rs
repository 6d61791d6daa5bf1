#![forbid(unsafe_code)]

//! The merged registry index and its query facade.

use std::collections::{BTreeMap, HashMap};

use devlens_core::ident::UsageId;

use crate::RegistryError;
use crate::partition::Partition;
use crate::record::{Category, UsageRecord};

/// Immutable id → record catalog built once from ordered partitions.
///
/// Records keep the insertion order of the merged partitions; every filter
/// and search below yields results in that order.
#[derive(Debug, Clone, Default)]
pub struct RegistryIndex {
    records: Vec<UsageRecord>,
    by_id: HashMap<UsageId, usize>,
}

impl RegistryIndex {
    /// Fold ordered partitions into one index.
    ///
    /// Fails with [`RegistryError::DuplicateId`] on the first id seen twice
    /// anywhere across the partitions. First-occurrence-wins is deliberately
    /// not offered: an overwrite would corrupt the overlay's id → metadata
    /// contract, so duplication refuses the whole build.
    pub fn build<I>(partitions: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = Partition>,
    {
        let mut records = Vec::new();
        let mut by_id: HashMap<UsageId, usize> = HashMap::new();
        let mut partition_count = 0usize;

        for partition in partitions {
            partition_count += 1;
            let Partition {
                name,
                records: batch,
            } = partition;
            for record in batch {
                if by_id.contains_key(&record.id) {
                    return Err(RegistryError::DuplicateId {
                        id: record.id,
                        partition: name,
                    });
                }
                by_id.insert(record.id.clone(), records.len());
                records.push(record);
            }
        }

        tracing::info!(
            partitions = partition_count,
            records = records.len(),
            "usage registry built"
        );
        Ok(Self { records, by_id })
    }

    /// Look up a record by id. Absence is a normal outcome, never an error.
    #[inline]
    pub fn get(&self, id: &UsageId) -> Option<&UsageRecord> {
        self.by_id.get(id).map(|&i| &self.records[i])
    }

    /// Look up a record by raw id string.
    #[inline]
    pub fn get_str(&self, id: &str) -> Option<&UsageRecord> {
        self.by_id.get(id).map(|&i| &self.records[i])
    }

    /// Whether the id is registered.
    #[inline]
    pub fn contains(&self, id: &UsageId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of records in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &UsageRecord> {
        self.records.iter()
    }

    /// Records instantiating the given definition.
    pub fn filter_by_definition<'a>(
        &'a self,
        definition_id: &'a str,
    ) -> impl Iterator<Item = &'a UsageRecord> + 'a {
        self.records
            .iter()
            .filter(move |r| r.definition_id == definition_id)
    }

    /// Records originating from the given source file.
    pub fn filter_by_file<'a>(
        &'a self,
        file_path: &'a str,
    ) -> impl Iterator<Item = &'a UsageRecord> + 'a {
        self.records
            .iter()
            .filter(move |r| r.file_path == file_path)
    }

    /// Records in the given category.
    pub fn filter_by_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = &UsageRecord> + '_ {
        self.records.iter().filter(move |r| r.category == category)
    }

    /// Records carrying the given semantic tag (exact match).
    pub fn filter_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a UsageRecord> + 'a {
        self.records
            .iter()
            .filter(move |r| r.semantic_tags.iter().any(|t| t == tag))
    }

    /// Case-insensitive substring search over name, description, and tags.
    ///
    /// Results come back in insertion order; there is no ranking.
    pub fn search(&self, term: &str) -> impl Iterator<Item = &UsageRecord> + '_ {
        let needle = term.to_lowercase();
        self.records
            .iter()
            .filter(move |r| r.matches_needle(&needle))
    }

    /// Distinct definition ids, sorted.
    pub fn definitions(&self) -> Vec<&str> {
        let mut defs: Vec<&str> = self
            .records
            .iter()
            .map(|r| r.definition_id.as_str())
            .collect();
        defs.sort_unstable();
        defs.dedup();
        defs
    }

    /// Aggregate counts, computed on demand in one O(n) pass.
    pub fn stats(&self) -> RegistryStats {
        let mut stats = RegistryStats {
            total: self.records.len(),
            ..RegistryStats::default()
        };
        for record in &self.records {
            *stats.by_category.entry(record.category).or_default() += 1;
            *stats
                .by_definition
                .entry(record.definition_id.clone())
                .or_default() += 1;
            *stats.by_file.entry(record.file_path.clone()).or_default() += 1;
        }
        stats
    }
}

/// Aggregate counts over the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryStats {
    pub total: usize,
    pub by_category: BTreeMap<Category, usize>,
    pub by_definition: BTreeMap<String, usize>,
    pub by_file: BTreeMap<String, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, definition: &str, category: Category, tags: &[&str]) -> UsageRecord {
        UsageRecord {
            id: UsageId::new(id),
            definition_id: definition.to_string(),
            name: format!("Name of {id}"),
            description: format!("Description of {id}"),
            category,
            semantic_tags: tags.iter().map(|t| t.to_string()).collect(),
            file_path: format!("src/{definition}.rs"),
        }
    }

    fn sample_partitions() -> Vec<Partition> {
        vec![
            Partition::new(
                "auth",
                vec![
                    record("login-form", "form", Category::Form, &["auth"]),
                    record("login-submit", "button", Category::Form, &["auth", "cta"]),
                ],
            ),
            Partition::new(
                "clients",
                vec![
                    record("client-table", "table", Category::Content, &["crud"]),
                    record("client-add", "button", Category::Form, &["crud", "cta"]),
                    record("client-nav", "tabs", Category::Navigation, &[]),
                ],
            ),
            Partition::new(
                "shell",
                vec![record("app-footer", "footer", Category::Layout, &[])],
            ),
        ]
    }

    #[test]
    fn build_merges_partitions_in_order() {
        let index = RegistryIndex::build(sample_partitions()).unwrap();
        assert_eq!(index.len(), 6);
        let ids: Vec<&str> = index.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "login-form",
                "login-submit",
                "client-table",
                "client-add",
                "client-nav",
                "app-footer"
            ]
        );
    }

    #[test]
    fn get_returns_the_originating_record() {
        let index = RegistryIndex::build(sample_partitions()).unwrap();
        for id in ["login-form", "client-add", "app-footer"] {
            let record = index.get_str(id).unwrap();
            assert_eq!(record.id.as_str(), id);
            assert_eq!(record.name, format!("Name of {id}"));
        }
    }

    #[test]
    fn get_unknown_id_is_none() {
        let index = RegistryIndex::build(sample_partitions()).unwrap();
        assert!(index.get(&UsageId::new("nope")).is_none());
        assert!(index.get_str("").is_none());
        assert!(!index.contains(&UsageId::new("nope")));
    }

    #[test]
    fn duplicate_id_across_partitions_fails_the_build() {
        let mut partitions = sample_partitions();
        partitions.push(Partition::new(
            "rogue",
            vec![record("login-form", "form", Category::Form, &[])],
        ));

        let err = RegistryIndex::build(partitions).unwrap_err();
        match err {
            RegistryError::DuplicateId { id, partition } => {
                assert_eq!(id, UsageId::new("login-form"));
                assert_eq!(partition, "rogue");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_id_within_one_partition_fails_too() {
        let partitions = vec![Partition::new(
            "p",
            vec![
                record("same", "a", Category::Content, &[]),
                record("same", "b", Category::Content, &[]),
            ],
        )];
        assert!(matches!(
            RegistryIndex::build(partitions),
            Err(RegistryError::DuplicateId { .. })
        ));
    }

    #[test]
    fn empty_build_is_valid() {
        let index = RegistryIndex::build([]).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.stats().total, 0);
    }

    #[test]
    fn category_filters_partition_the_catalog() {
        let index = RegistryIndex::build(sample_partitions()).unwrap();
        let mut seen = 0;
        for category in Category::ALL {
            for record in index.filter_by_category(category) {
                assert_eq!(record.category, category);
                seen += 1;
            }
        }
        assert_eq!(seen, index.len());
    }

    #[test]
    fn filter_by_definition() {
        let index = RegistryIndex::build(sample_partitions()).unwrap();
        let buttons: Vec<&str> = index
            .filter_by_definition("button")
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(buttons, ["login-submit", "client-add"]);
    }

    #[test]
    fn filter_by_file() {
        let index = RegistryIndex::build(sample_partitions()).unwrap();
        let from_buttons: Vec<&str> = index
            .filter_by_file("src/button.rs")
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(from_buttons, ["login-submit", "client-add"]);
        assert_eq!(index.filter_by_file("src/missing.rs").count(), 0);
    }

    #[test]
    fn filter_by_tag_is_exact() {
        let index = RegistryIndex::build(sample_partitions()).unwrap();
        let cta: Vec<&str> = index.filter_by_tag("cta").map(|r| r.id.as_str()).collect();
        assert_eq!(cta, ["login-submit", "client-add"]);
        // Substrings of a tag do not match.
        assert_eq!(index.filter_by_tag("ct").count(), 0);
    }

    #[test]
    fn search_is_case_insensitive() {
        let index = RegistryIndex::build(sample_partitions()).unwrap();
        let upper: Vec<&str> = index.search("CLIENT").map(|r| r.id.as_str()).collect();
        let lower: Vec<&str> = index.search("client").map(|r| r.id.as_str()).collect();
        assert_eq!(upper, lower);
        assert!(!upper.is_empty());
    }

    #[test]
    fn search_covers_tags_and_returns_insertion_order() {
        let index = RegistryIndex::build(sample_partitions()).unwrap();
        let hits: Vec<&str> = index.search("crud").map(|r| r.id.as_str()).collect();
        assert_eq!(hits, ["client-table", "client-add"]);
    }

    #[test]
    fn search_no_hits_is_empty() {
        let index = RegistryIndex::build(sample_partitions()).unwrap();
        assert_eq!(index.search("zzzzz").count(), 0);
    }

    #[test]
    fn stats_counts_every_grouping() {
        let index = RegistryIndex::build(sample_partitions()).unwrap();
        let stats = index.stats();
        assert_eq!(stats.total, 6);
        assert_eq!(stats.by_category[&Category::Form], 3);
        assert_eq!(stats.by_category[&Category::Content], 1);
        assert_eq!(stats.by_definition["button"], 2);
        assert_eq!(stats.by_file["src/button.rs"], 2);
        assert_eq!(stats.by_category.values().sum::<usize>(), stats.total);
    }

    #[test]
    fn rebuild_without_a_partition_reflects_the_remainder() {
        let full = RegistryIndex::build(sample_partitions()).unwrap();
        assert_eq!(full.stats().total, 6);

        let mut fewer = sample_partitions();
        fewer.remove(1); // drop the 3-record partition
        let rebuilt = RegistryIndex::build(fewer).unwrap();
        assert_eq!(rebuilt.stats().total, 3);
        assert!(rebuilt.get_str("client-table").is_none());
        assert!(rebuilt.get_str("login-form").is_some());
    }

    #[test]
    fn definitions_are_sorted_and_distinct() {
        let index = RegistryIndex::build(sample_partitions()).unwrap();
        assert_eq!(
            index.definitions(),
            ["button", "footer", "form", "table", "tabs"]
        );
    }

    mod property {
        use super::*;
        use proptest::prelude::*;

        fn arb_category() -> impl Strategy<Value = Category> {
            proptest::sample::select(Category::ALL.to_vec())
        }

        fn arb_records(max: usize) -> impl Strategy<Value = Vec<UsageRecord>> {
            proptest::collection::btree_set("[a-z]{1,8}", 0..max).prop_flat_map(|ids| {
                let ids: Vec<String> = ids.into_iter().collect();
                proptest::collection::vec(arb_category(), ids.len()).prop_map(move |categories| {
                    ids.iter()
                        .zip(categories)
                        .map(|(id, category)| record(id, "def", category, &[]))
                        .collect()
                })
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(128))]

            /// Disjoint ids always build; every id resolves to its record.
            #[test]
            fn disjoint_ids_build_and_resolve(records in arb_records(24)) {
                let expected = records.len();
                let index = RegistryIndex::build([Partition::new("p", records.clone())]).unwrap();
                prop_assert_eq!(index.len(), expected);
                for record in &records {
                    prop_assert_eq!(index.get(&record.id), Some(record));
                }
            }

            /// Any duplicated id fails the build.
            #[test]
            fn duplicated_id_fails(records in arb_records(12)) {
                prop_assume!(!records.is_empty());
                let mut with_dup = records.clone();
                with_dup.push(records[0].clone());
                let result = RegistryIndex::build([Partition::new("p", with_dup)]);
                let is_duplicate = matches!(result, Err(RegistryError::DuplicateId { .. }));
                prop_assert!(is_duplicate);
            }

            /// Category filters form a partition of the catalog.
            #[test]
            fn category_filters_partition(records in arb_records(24)) {
                let index = RegistryIndex::build([Partition::new("p", records)]).unwrap();
                let counted: usize = Category::ALL
                    .iter()
                    .map(|&c| index.filter_by_category(c).count())
                    .sum();
                prop_assert_eq!(counted, index.len());
            }

            /// Search result sets are identical regardless of term casing.
            #[test]
            fn search_casing_irrelevant(records in arb_records(24), term in "[a-zA-Z]{1,6}") {
                let index = RegistryIndex::build([Partition::new("p", records)]).unwrap();
                let lower: Vec<_> = index.search(&term.to_lowercase()).map(|r| &r.id).collect();
                let upper: Vec<_> = index.search(&term.to_uppercase()).map(|r| &r.id).collect();
                prop_assert_eq!(lower, upper);
            }

            /// Stats totals always agree with the grouped counts.
            #[test]
            fn stats_totals_consistent(records in arb_records(24)) {
                let index = RegistryIndex::build([Partition::new("p", records)]).unwrap();
                let stats = index.stats();
                prop_assert_eq!(stats.total, index.len());
                prop_assert_eq!(stats.by_category.values().sum::<usize>(), stats.total);
                prop_assert_eq!(stats.by_definition.values().sum::<usize>(), stats.total);
            }
        }
    }
}
