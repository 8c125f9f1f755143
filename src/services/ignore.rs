//! Correlations the user chose to hide.

use crate::consts::cli_consts::IGNORED_CORRELATIONS_STORE_KEY;
use crate::storage::{LocalStorage, StorageError, parse_json_from_local_storage, write_json};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::rc::Rc;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SimpleTimeScopeType {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IgnoredCorrelation {
    pub key: String,
    pub time_scope: SimpleTimeScopeType,
}

pub struct CorrelationIgnoreService {
    storage: Rc<dyn LocalStorage>,
    ignored: Vec<IgnoredCorrelation>,
}

impl CorrelationIgnoreService {
    pub fn new(storage: Rc<dyn LocalStorage>) -> Self {
        Self {
            storage,
            ignored: Vec::new(),
        }
    }

    pub fn load(&mut self) {
        self.ignored =
            parse_json_from_local_storage(self.storage.as_ref(), IGNORED_CORRELATIONS_STORE_KEY)
                .unwrap_or_default();
    }

    /// Ignored keys per time scope. Every scope is present, possibly with no keys.
    pub fn group_by_time_scope(&self) -> BTreeMap<SimpleTimeScopeType, Vec<String>> {
        let mut result: BTreeMap<SimpleTimeScopeType, Vec<String>> =
            SimpleTimeScopeType::iter().map(|scope| (scope, Vec::new())).collect();
        for ignored in &self.ignored {
            result
                .entry(ignored.time_scope)
                .or_default()
                .push(ignored.key.clone());
        }
        result
    }

    pub fn is_ignored(&self, key: &str, time_scope: SimpleTimeScopeType) -> bool {
        self.ignored
            .iter()
            .any(|i| i.key == key && i.time_scope == time_scope)
    }

    pub fn ignore(&mut self, correlation: IgnoredCorrelation) -> Result<(), StorageError> {
        self.ignored.push(correlation);
        self.save()
    }

    pub fn ignored(&self) -> &[IgnoredCorrelation] {
        &self.ignored
    }

    pub fn import(&mut self, data: Vec<IgnoredCorrelation>) -> Result<(), StorageError> {
        self.ignored = data;
        self.save()
    }

    fn save(&self) -> Result<(), StorageError> {
        write_json(self.storage.as_ref(), IGNORED_CORRELATIONS_STORE_KEY, &self.ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn ignored(key: &str, time_scope: SimpleTimeScopeType) -> IgnoredCorrelation {
        IgnoredCorrelation {
            key: key.to_string(),
            time_scope,
        }
    }

    #[test]
    fn test_group_includes_empty_scopes() {
        let mut service = CorrelationIgnoreService::new(Rc::new(MemoryStorage::new()));
        service.ignore(ignored("a", SimpleTimeScopeType::Daily)).unwrap();
        service.ignore(ignored("b", SimpleTimeScopeType::Daily)).unwrap();
        service.ignore(ignored("c", SimpleTimeScopeType::Yearly)).unwrap();

        let grouped = service.group_by_time_scope();
        assert_eq!(grouped.len(), 4);
        assert_eq!(grouped[&SimpleTimeScopeType::Daily], vec!["a", "b"]);
        assert!(grouped[&SimpleTimeScopeType::Weekly].is_empty());
        assert_eq!(grouped[&SimpleTimeScopeType::Yearly], vec!["c"]);
    }

    #[test]
    fn test_ignores_persist() {
        let storage = Rc::new(MemoryStorage::new());
        let mut service = CorrelationIgnoreService::new(storage.clone());
        service.ignore(ignored("k", SimpleTimeScopeType::Weekly)).unwrap();

        let raw = storage.get_item(IGNORED_CORRELATIONS_STORE_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"[{"key":"k","timeScope":"WEEKLY"}]"#);

        let mut reloaded = CorrelationIgnoreService::new(storage);
        reloaded.load();
        assert!(reloaded.is_ignored("k", SimpleTimeScopeType::Weekly));
        assert!(!reloaded.is_ignored("k", SimpleTimeScopeType::Daily));
    }

    #[test]
    fn test_import_replaces() {
        let mut service = CorrelationIgnoreService::new(Rc::new(MemoryStorage::new()));
        service.ignore(ignored("old", SimpleTimeScopeType::Monthly)).unwrap();
        service
            .import(vec![ignored("new", SimpleTimeScopeType::Daily)])
            .unwrap();
        assert_eq!(service.ignored(), &[ignored("new", SimpleTimeScopeType::Daily)]);
    }

    #[test]
    fn test_scope_parses_case_insensitively() {
        assert_eq!("Weekly".parse::<SimpleTimeScopeType>().unwrap(), SimpleTimeScopeType::Weekly);
        assert_eq!(SimpleTimeScopeType::Monthly.to_string(), "monthly");
    }
}
