use contracts::domain::a001_sales_record::{SalesRecord, SalesRecordId};

use crate::shared::config::Config;
use crate::shared::data::KeyValueStorage;
use crate::shared::error::{StoreError, StoreResult};

/// Persisted collection of sales records under one storage key
///
/// Every mutation reads the whole collection, changes it and writes it back.
/// Insertion order is preserved; display ordering is applied on read by
/// [`SalesRecordRepository::list_newest_first`].
#[derive(Debug, Clone)]
pub struct SalesRecordRepository<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> SalesRecordRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn from_config(storage: S, config: &Config) -> Self {
        Self::new(storage, config.storage.key.clone())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// All records in insertion order
    pub fn list_all(&self) -> StoreResult<Vec<SalesRecord>> {
        let Some(payload) = self.storage.read(&self.key)? else {
            return Ok(Vec::new());
        };
        if payload.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str::<Vec<SalesRecord>>(&payload).map_err(|source| {
            tracing::warn!("Stored records under '{}' cannot be parsed: {}", self.key, source);
            StoreError::CorruptData {
                key: self.key.clone(),
                source,
            }
        })
    }

    /// All records, most recently added first
    pub fn list_newest_first(&self) -> StoreResult<Vec<SalesRecord>> {
        let mut records = self.list_all()?;
        records.reverse();
        Ok(records)
    }

    pub fn get_by_id(&self, id: &SalesRecordId) -> StoreResult<Option<SalesRecord>> {
        Ok(self.list_all()?.into_iter().find(|r| &r.id == id))
    }

    /// Append a record. Ids are not checked for uniqueness here.
    pub fn add(&self, record: SalesRecord) -> StoreResult<()> {
        let mut records = self.list_all()?;
        records.push(record);
        self.write_all(&records)
    }

    /// Replace the record with `id` in place, keeping `id`
    ///
    /// Returns `false` and leaves the collection untouched when no record
    /// has that id.
    pub fn update(&self, id: &SalesRecordId, mut fields: SalesRecord) -> StoreResult<bool> {
        let mut records = self.list_all()?;
        let Some(slot) = records.iter_mut().find(|r| &r.id == id) else {
            tracing::warn!("Update skipped, record {} not found", id);
            return Ok(false);
        };

        fields.id = id.clone();
        *slot = fields;
        self.write_all(&records)?;
        Ok(true)
    }

    /// Remove every record with `id`
    ///
    /// Returns `false` and writes nothing when no record matched.
    pub fn remove(&self, id: &SalesRecordId) -> StoreResult<bool> {
        let mut records = self.list_all()?;
        let before = records.len();
        records.retain(|r| &r.id != id);

        if records.len() == before {
            tracing::warn!("Remove skipped, record {} not found", id);
            return Ok(false);
        }

        self.write_all(&records)?;
        Ok(true)
    }

    /// Overwrite the whole collection, whatever is stored now
    pub fn replace_all(&self, records: &[SalesRecord]) -> StoreResult<()> {
        self.write_all(records)
    }

    /// Replace the whole collection with the demo dataset
    pub fn seed(&self) -> StoreResult<()> {
        let records = demo_records();
        tracing::info!("Seeding '{}' with {} demo records", self.key, records.len());
        self.replace_all(&records)
    }

    fn write_all(&self, records: &[SalesRecord]) -> StoreResult<()> {
        let payload = serde_json::to_string(records)?;
        self.storage.write(&self.key, &payload)
    }
}

/// Fixed demonstration dataset, one record per representative
pub fn demo_records() -> Vec<SalesRecord> {
    use contracts::enums::Representative;

    let record = |id: &str,
                  date: &str,
                  rep_name: Representative,
                  client: &str,
                  invoice_number: &str,
                  project_name: &str,
                  amount: f64,
                  contractor_name: &str,
                  outsourcing_cost: f64,
                  outsourcing_breakdown: &str| SalesRecord {
        id: SalesRecordId::new(id),
        date: date.to_string(),
        rep_name,
        client: client.to_string(),
        invoice_number: invoice_number.to_string(),
        project_name: project_name.to_string(),
        amount,
        contractor_name: contractor_name.to_string(),
        outsourcing_cost,
        outsourcing_breakdown: outsourcing_breakdown.to_string(),
    };

    vec![
        record(
            "1",
            "2026-01-10",
            Representative::Naito,
            "株式会社A",
            "INV-001",
            "LP制作",
            300000.0,
            "デザイン工房",
            50000.0,
            "デザイン費",
        ),
        record(
            "2",
            "2026-01-15",
            Representative::Yokosaka,
            "B商事",
            "INV-002",
            "システム改修",
            1000000.0,
            "Code-X",
            200000.0,
            "コーディング",
        ),
        record(
            "3",
            "2026-02-03",
            Representative::Sagawa,
            "C物産",
            "INV-003",
            "保守契約",
            800000.0,
            "",
            0.0,
            "",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::MemoryStorage;
    use contracts::enums::Representative;

    const KEY: &str = "sales_data_v1";

    fn repo() -> SalesRecordRepository<MemoryStorage> {
        SalesRecordRepository::new(MemoryStorage::new(), KEY)
    }

    fn record(id: &str, date: &str, amount: f64) -> SalesRecord {
        SalesRecord {
            id: SalesRecordId::new(id),
            date: date.to_string(),
            rep_name: Representative::Naito,
            client: "client".into(),
            invoice_number: String::new(),
            project_name: "project".into(),
            amount,
            contractor_name: String::new(),
            outsourcing_cost: 0.0,
            outsourcing_breakdown: String::new(),
        }
    }

    fn raw(repo: &SalesRecordRepository<MemoryStorage>) -> Option<String> {
        repo.storage().read(KEY).unwrap()
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let repo = repo();
        assert!(repo.list_all().unwrap().is_empty());
        assert_eq!(repo.get_by_id(&SalesRecordId::new("1")).unwrap(), None);
    }

    #[test]
    fn test_add_then_get_returns_equal_record() {
        let repo = repo();
        let r = record("a", "2026-01-10", 100.0);
        repo.add(r.clone()).unwrap();
        assert_eq!(repo.get_by_id(&r.id).unwrap(), Some(r));
    }

    #[test]
    fn test_add_keeps_insertion_order_and_newest_first_reverses() {
        let repo = repo();
        for id in ["a", "b", "c"] {
            repo.add(record(id, "2026-01-10", 1.0)).unwrap();
        }
        let ids: Vec<String> = repo.list_all().unwrap().into_iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        let ids: Vec<String> = repo
            .list_newest_first()
            .unwrap()
            .into_iter()
            .map(|r| r.id.0)
            .collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_duplicate_ids_both_persist() {
        let repo = repo();
        repo.add(record("dup", "2026-01-10", 1.0)).unwrap();
        repo.add(record("dup", "2026-01-11", 2.0)).unwrap();
        assert_eq!(repo.list_all().unwrap().len(), 2);

        assert!(repo.remove(&SalesRecordId::new("dup")).unwrap());
        assert!(repo.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_update_forces_located_id() {
        let repo = repo();
        repo.add(record("a", "2026-01-10", 1.0)).unwrap();
        repo.add(record("b", "2026-01-11", 2.0)).unwrap();

        let replacement = record("zzz", "2026-03-01", 500.0);
        assert!(repo.update(&SalesRecordId::new("a"), replacement).unwrap());

        let all = repo.list_all().unwrap();
        assert_eq!(all[0].id, SalesRecordId::new("a"));
        assert_eq!(all[0].amount, 500.0);
        assert_eq!(all[0].date, "2026-03-01");
        assert_eq!(all[1].id, SalesRecordId::new("b"));
        assert_eq!(repo.get_by_id(&SalesRecordId::new("zzz")).unwrap(), None);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let repo = repo();
        repo.add(record("a", "2026-01-10", 1.0)).unwrap();
        let before = raw(&repo);

        let updated = repo
            .update(&SalesRecordId::new("missing"), record("x", "2026-01-01", 9.0))
            .unwrap();
        assert!(!updated);
        assert_eq!(raw(&repo), before);
    }

    #[test]
    fn test_remove() {
        let repo = repo();
        repo.add(record("a", "2026-01-10", 1.0)).unwrap();
        repo.add(record("b", "2026-01-11", 2.0)).unwrap();

        assert!(repo.remove(&SalesRecordId::new("a")).unwrap());
        assert_eq!(repo.get_by_id(&SalesRecordId::new("a")).unwrap(), None);
        assert_eq!(repo.list_all().unwrap().len(), 1);

        let before = raw(&repo);
        assert!(!repo.remove(&SalesRecordId::new("a")).unwrap());
        assert_eq!(raw(&repo), before);
    }

    #[test]
    fn test_corrupt_payload_is_reported_and_not_overwritten() {
        let repo = SalesRecordRepository::new(MemoryStorage::with_entry(KEY, "{not json"), KEY);

        let err = repo.list_all().unwrap_err();
        assert!(err.is_corrupt());
        assert!(repo.get_by_id(&SalesRecordId::new("1")).is_err());
        assert!(repo.add(record("a", "2026-01-10", 1.0)).is_err());
        assert!(repo.remove(&SalesRecordId::new("a")).is_err());
        assert_eq!(raw(&repo).as_deref(), Some("{not json"));
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        let repo = SalesRecordRepository::new(
            MemoryStorage::with_entry(KEY, r#"{"id":"1"}"#),
            KEY,
        );
        assert!(repo.list_all().unwrap_err().is_corrupt());
    }

    #[test]
    fn test_unknown_rep_is_read_and_written_back() {
        let payload = r#"[
            {"id":"1","date":"2026-01-10","repName":"Naito","amount":100},
            {"id":"2","date":"2026-01-11","repName":"Tanaka","amount":"200"}
        ]"#;
        let repo = SalesRecordRepository::new(MemoryStorage::with_entry(KEY, payload), KEY);

        let all = repo.list_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].rep_name, Representative::Other("Tanaka".into()));
        assert_eq!(all[1].amount, 200.0);

        repo.add(record("3", "2026-01-12", 300.0)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw(&repo).unwrap()).unwrap();
        assert_eq!(value[1]["repName"], "Tanaka");
        assert_eq!(value.as_array().map(Vec::len), Some(3));

        assert!(repo.remove(&SalesRecordId::new("2")).unwrap());
        let ids: Vec<String> = repo.list_all().unwrap().into_iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_seed_replaces_everything_even_corrupt_data() {
        let repo = SalesRecordRepository::new(MemoryStorage::with_entry(KEY, "garbage"), KEY);
        repo.seed().unwrap();

        let all = repo.list_all().unwrap();
        assert_eq!(all, demo_records());
        assert_eq!(all.len(), 3);

        repo.add(record("x", "2026-05-01", 1.0)).unwrap();
        repo.seed().unwrap();
        assert_eq!(repo.list_all().unwrap().len(), 3);
    }

    #[test]
    fn test_persisted_amounts_are_numbers() {
        let repo = repo();
        repo.seed().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw(&repo).unwrap()).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);
        for item in items {
            assert!(item["amount"].is_number());
            assert!(item["outsourcingCost"].is_number());
        }
    }

    #[test]
    fn test_from_config_uses_configured_key() {
        let mut config = Config::default();
        config.storage.key = "sales_data_v9".into();
        let repo = SalesRecordRepository::from_config(MemoryStorage::new(), &config);
        repo.add(record("a", "2026-01-10", 1.0)).unwrap();
        assert!(repo.storage().read("sales_data_v9").unwrap().is_some());
        assert!(repo.storage().read(KEY).unwrap().is_none());
    }
}
