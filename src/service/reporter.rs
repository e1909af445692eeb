use crate::models::decimal::round2;
use crate::models::{
    CanonicalKey, InsightReport, ItemAggregate, ItemInsight, Quote, SupplierScoreboard,
};
use bigdecimal::{BigDecimal, Zero};
use indexmap::IndexMap;

/// 由聚合结果生成比价报告
///
/// 合计精确求和后舍入到两位小数；
/// `total_savings` 由舍入后的两个合计相减得到。
/// 计分板 spend 累加舍入后的最低价，与 `cheapest_price` 一致。
pub fn build_report(items: &IndexMap<CanonicalKey, ItemAggregate>) -> InsightReport {
    let mut cheapest = IndexMap::with_capacity(items.len());
    let mut savings_by_item = IndexMap::with_capacity(items.len());
    let mut scoreboard = SupplierScoreboard::new();
    let mut total_cheapest = BigDecimal::zero();
    let mut total_most_expensive = BigDecimal::zero();

    for (key, agg) in items {
        let low = &agg.cheapest;
        let high = &agg.most_expensive;

        let cheapest_price = round2(&low.price);

        total_cheapest += &low.price;
        total_most_expensive += &high.price;
        scoreboard.record_win(&low.supplier, &cheapest_price);

        cheapest.insert(key.clone(), Quote::new(low.supplier.clone(), cheapest_price.clone()));
        savings_by_item.insert(
            key.clone(),
            ItemInsight {
                cheapest_supplier: low.supplier.clone(),
                cheapest_price,
                most_expensive_supplier: high.supplier.clone(),
                most_expensive_price: round2(&high.price),
                savings: round2(&(&high.price - &low.price)),
            },
        );
    }

    let total_cheapest = round2(&total_cheapest);
    let total_most_expensive = round2(&total_most_expensive);
    let total_savings = round2(&(&total_most_expensive - &total_cheapest));

    InsightReport {
        cheapest,
        savings_by_item,
        total_cheapest,
        total_most_expensive,
        total_savings,
        supplier_scoreboard: scoreboard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InvoiceLine;
    use crate::service::aggregator::aggregate;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn line(item: &str, supplier: &str, price: &str) -> InvoiceLine {
        InvoiceLine {
            item_raw: item.to_string(),
            supplier: supplier.to_string(),
            price: dec(price),
        }
    }

    #[test]
    fn empty_aggregate_gives_zero_totals() {
        let report = build_report(&IndexMap::new());
        assert!(report.cheapest.is_empty());
        assert_eq!(report.total_cheapest, dec("0"));
        assert_eq!(report.total_savings, dec("0"));
        assert!(report.supplier_scoreboard.is_empty());
    }

    #[test]
    fn savings_and_totals() {
        let items = aggregate(vec![
            line("Olive Oil", "A", "10.00"),
            line("olive oil", "B", "8.50"),
            line("Flour", "C", "5"),
            line("flour", "A", "6.25"),
        ]);
        let report = build_report(&items);

        let oil = &report.savings_by_item[0];
        assert_eq!(oil.savings, dec("1.50"));
        assert_eq!(report.total_cheapest, dec("13.50"));
        assert_eq!(report.total_most_expensive, dec("16.25"));
        assert_eq!(report.total_savings, dec("2.75"));
    }

    #[test]
    fn values_are_rounded_at_output() {
        let items = aggregate(vec![line("x", "A", "1.004"), line("x", "B", "2.006")]);
        let report = build_report(&items);

        let x = &report.savings_by_item[0];
        assert_eq!(x.cheapest_price, dec("1.00"));
        assert_eq!(x.most_expensive_price, dec("2.01"));
        assert_eq!(x.savings, dec("1.00"));
        assert_eq!(report.cheapest[0].price, dec("1.00"));
    }

    #[test]
    fn scoreboard_counts_wins_and_spend() {
        let items = aggregate(vec![
            line("a", "S1", "1.10"),
            line("b", "S1", "2.20"),
            line("c", "S2", "3.00"),
            line("c", "S1", "4.00"),
        ]);
        let report = build_report(&items);
        let board = &report.supplier_scoreboard;

        assert_eq!(board.total_wins(), 3);
        let s1 = board.get("S1").unwrap();
        assert_eq!(s1.wins, 2);
        assert_eq!(s1.spend, dec("3.30"));
        assert_eq!(board.get("S2").unwrap().wins, 1);
    }

    #[test]
    fn spend_matches_emitted_cheapest_prices_with_extra_decimals() {
        let items = aggregate(vec![
            line("a", "S", "1.004"),
            line("b", "S", "1.004"),
            line("c", "T", "0.005"),
            line("d", "T", "-0.005"),
        ]);
        let report = build_report(&items);
        let board = &report.supplier_scoreboard;

        assert_eq!(board.get("S").unwrap().spend, dec("2.00"));
        assert_eq!(board.get("T").unwrap().spend, dec("0.00"));
        for (supplier, entry) in board.iter() {
            let expected = report
                .savings_by_item
                .values()
                .filter(|i| &i.cheapest_supplier == supplier)
                .fold(BigDecimal::zero(), |acc, i| acc + &i.cheapest_price);
            assert_eq!(entry.spend, expected, "spend of {}", supplier);
        }
    }
}
