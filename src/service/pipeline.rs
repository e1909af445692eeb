use crate::error::Result;
use crate::models::{CheapestSummary, InsightReport};
use crate::service::aggregator::PriceAggregator;
use crate::service::parser::parse_invoice_lines;
use crate::service::reporter::build_report;

/// 比价主流程：解析 → 归一化/聚合 → 报告
///
/// 每次调用独立构建全部中间状态，无共享可变数据，可并发调用。
pub fn compute_insights(csv_text: &str) -> Result<InsightReport> {
    // Phase 1: 解析
    let lines = parse_invoice_lines(csv_text).map_err(|e| {
        tracing::warn!("CSV rejected ({}): {}", e.kind(), e);
        e
    })?;

    // Phase 2: 聚合
    let aggregator = PriceAggregator::from_lines(lines);
    tracing::debug!(
        "聚合完成: {} 行, {} 个商品",
        aggregator.lines_seen(),
        aggregator.item_count()
    );

    // Phase 3: 报告
    let items = aggregator.into_items();
    let report = build_report(&items);

    tracing::info!(
        "比价完成: 商品 {}, 最低合计 {}, 最高合计 {}, 可节省 {}, 供应商 {}",
        report.item_count(),
        report.total_cheapest,
        report.total_most_expensive,
        report.total_savings,
        report.supplier_scoreboard.len()
    );

    Ok(report)
}

/// 旧版接口：每个商品最低价 + 合计
pub fn compute_cheapest(csv_text: &str) -> Result<CheapestSummary> {
    compute_insights(csv_text).map(CheapestSummary::from)
}
