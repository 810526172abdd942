use contracts::dashboards::d400_rep_summary::RepSummaryRequest;
use contracts::domain::a001_sales_record::{SalesRecord, SalesRecordDto, SalesRecordId};
use contracts::enums::Representative;
use ledger::dashboards::d400_rep_summary::service as summary;
use ledger::domain::a001_sales_record::{service, SalesRecordRepository};
use ledger::shared::config::default_config;
use ledger::shared::data::{KeyValueStorage, MemoryStorage};

#[test]
fn seeded_store_totals_and_rep_breakdown() -> anyhow::Result<()> {
    let repo = SalesRecordRepository::from_config(MemoryStorage::new(), &default_config()?);
    service::insert_test_data(&repo)?;

    let records = service::list_all(&repo)?;
    assert_eq!(records.len(), 3);
    assert_eq!(summary::sum(&records), 2_100_000.0);
    assert_eq!(summary::profit_sum(&records), 1_850_000.0);

    let stats = summary::per_representative_report(&records, &Representative::all(), 2026, 1);
    assert_eq!(stats.len(), 3);
    for stat in &stats {
        let own: Vec<&SalesRecord> = records.iter().filter(|r| r.rep_name == stat.rep).collect();
        assert_eq!(own.len(), 1);
        assert_eq!(stat.yearly_sales, own[0].amount);
        assert_eq!(stat.yearly_profit, own[0].profit());
    }

    // Sagawa's record is dated February, so January shows nothing for them
    assert_eq!(stats[2].rep, Representative::Sagawa);
    assert_eq!(stats[2].monthly_sales, 0.0);
    assert_eq!(stats[0].monthly_sales, 300_000.0);

    let response = summary::get_rep_summary(&records, RepSummaryRequest::new(2026, 1));
    assert_eq!(response.total_sales, 2_100_000.0);
    assert_eq!(response.total_profit, 1_850_000.0);
    assert!(!response.can_seed);
    Ok(())
}

#[test]
fn form_edit_flow_keeps_ids_and_ratios() -> anyhow::Result<()> {
    let repo = SalesRecordRepository::new(MemoryStorage::new(), "sales_data_v1");
    service::insert_test_data(&repo)?;

    let first = SalesRecordId::new("1");
    let mut dto = service::get_by_id(&repo, &first)?
        .map(|r| r.to_dto())
        .unwrap_or_default();
    assert_eq!(
        summary::outsourcing_ratio(dto.amount, dto.outsourcing_cost),
        16.7
    );

    dto.id = Some("2".into());
    dto.outsourcing_cost = 0.0;
    assert!(service::update(&repo, &first, &dto)?);

    let edited = service::get_by_id(&repo, &first)?.expect("record 1 exists");
    assert_eq!(edited.id, first);
    assert_eq!(edited.outsourcing_cost, 0.0);
    assert_eq!(service::list_all(&repo)?.len(), 3);

    assert!(service::delete(&repo, &first)?);
    assert_eq!(service::get_by_id(&repo, &first)?, None);
    Ok(())
}

#[test]
fn reopened_store_preserves_types() -> anyhow::Result<()> {
    let storage = MemoryStorage::new();
    let repo = SalesRecordRepository::new(&storage, "sales_data_v1");

    let dto = SalesRecordDto {
        id: None,
        date: "2026-06-30".into(),
        rep_name: Representative::Sagawa,
        client: "E社".into(),
        invoice_number: String::new(),
        project_name: "保守".into(),
        amount: 123_456.5,
        contractor_name: String::new(),
        outsourcing_cost: 0.5,
        outsourcing_breakdown: String::new(),
    };
    let id = service::create(&repo, &dto)?;
    let written = service::list_all(&repo)?;

    // A second repository over the same substrate sees identical records
    let reopened = SalesRecordRepository::new(&storage, "sales_data_v1");
    assert_eq!(reopened.list_all()?, written);
    assert_eq!(reopened.get_by_id(&id)?.map(|r| r.amount), Some(123_456.5));

    let raw = storage.read("sales_data_v1")?.unwrap_or_default();
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    assert!(value[0]["amount"].is_f64());
    assert!(value[0]["outsourcingCost"].is_f64());
    Ok(())
}

#[test]
fn unknown_rep_stays_usable_end_to_end() -> anyhow::Result<()> {
    let payload = r#"[
        {"id":"1","date":"2026-01-10","repName":"Naito","amount":300000,"outsourcingCost":50000},
        {"id":"2","date":"2026-01-12","repName":"Tanaka","amount":100000,"outsourcingCost":0}
    ]"#;
    let repo = SalesRecordRepository::new(MemoryStorage::with_entry("sales_data_v1", payload), "sales_data_v1");

    let records = service::list_all(&repo)?;
    let response = summary::get_rep_summary(&records, RepSummaryRequest::new(2026, 1));
    assert_eq!(response.total_sales, 400_000.0);
    assert_eq!(response.rep_stats[0].monthly_sales, 300_000.0);

    service::create(&repo, &SalesRecordDto::default())?;
    assert_eq!(service::list_all(&repo)?.len(), 3);

    assert!(service::delete(&repo, &SalesRecordId::new("2"))?);
    assert!(service::list_all(&repo)?
        .iter()
        .all(|r| r.rep_name.is_known()));
    Ok(())
}
