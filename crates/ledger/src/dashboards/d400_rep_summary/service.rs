use chrono::Datelike;
use contracts::dashboards::d400_rep_summary::{RepStat, RepSummaryRequest, RepSummaryResponse};
use contracts::domain::a001_sales_record::SalesRecord;
use contracts::enums::Representative;

/// Sum of `amount`
pub fn sum<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    records.into_iter().map(|r| r.amount).sum()
}

/// Sum of `amount - outsourcing_cost`. May be negative.
pub fn profit_sum<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    records.into_iter().map(SalesRecord::profit).sum()
}

/// Records dated in `year` and 1-indexed `month`
///
/// Records whose date does not parse never match.
pub fn filter_by_month<'a, I>(records: I, year: i32, month: u32) -> Vec<&'a SalesRecord>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    records
        .into_iter()
        .filter(|r| {
            r.sale_date()
                .map(|d| d.year() == year && d.month() == month)
                .unwrap_or(false)
        })
        .collect()
}

/// Records dated in `year`
pub fn filter_by_year<'a, I>(records: I, year: i32) -> Vec<&'a SalesRecord>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    records
        .into_iter()
        .filter(|r| r.sale_date().map(|d| d.year() == year).unwrap_or(false))
        .collect()
}

/// Monthly and yearly totals per representative, in the order given
///
/// Records of representatives not in `representatives` are left out.
pub fn per_representative_report(
    records: &[SalesRecord],
    representatives: &[Representative],
    year: i32,
    month: u32,
) -> Vec<RepStat> {
    representatives
        .iter()
        .map(|rep| {
            let own = records.iter().filter(|r| &r.rep_name == rep);
            let monthly = filter_by_month(own.clone(), year, month);
            let yearly = filter_by_year(own, year);

            RepStat {
                rep: rep.clone(),
                display_name: rep.display_name().to_string(),
                monthly_sales: sum(monthly.iter().copied()),
                monthly_profit: profit_sum(monthly.iter().copied()),
                yearly_sales: sum(yearly.iter().copied()),
                yearly_profit: profit_sum(yearly.iter().copied()),
            }
        })
        .collect()
}

/// Outsourcing cost as a percentage of `amount`, rounded to one decimal
///
/// Defined as `0` when `amount` is not positive.
pub fn outsourcing_ratio(amount: f64, cost: f64) -> f64 {
    if amount.is_nan() || amount <= 0.0 || !cost.is_finite() {
        return 0.0;
    }
    ((cost / amount) * 100.0 * 10.0).round() / 10.0
}

/// Dashboard payload for the requested month
pub fn get_rep_summary(records: &[SalesRecord], request: RepSummaryRequest) -> RepSummaryResponse {
    let rep_stats = per_representative_report(
        records,
        &Representative::all(),
        request.year,
        request.month,
    );

    tracing::debug!(
        "Rep summary for {} over {} records",
        request.period(),
        records.len()
    );

    RepSummaryResponse {
        period: request.period(),
        year: request.year,
        month: request.month,
        total_sales: sum(records),
        total_profit: profit_sum(records),
        rep_stats,
        record_count: records.len(),
        can_seed: records.is_empty(),
    }
}
