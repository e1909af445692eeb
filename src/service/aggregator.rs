use crate::models::{CanonicalKey, InvoiceLine, ItemAggregate, Quote};
use crate::service::normalizer::{canonical_key, normalize_supplier};
use indexmap::IndexMap;

/// 比价聚合器 - 按输入顺序单次折叠，维护每个商品的最低/最高报价
///
/// 使用 IndexMap 保序：商品按首次出现排序，同价时先出现的供应商胜出。
#[derive(Debug, Default)]
pub struct PriceAggregator {
    items: IndexMap<CanonicalKey, ItemAggregate>,
    lines_seen: usize,
}

impl PriceAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从明细行构建
    pub fn from_lines(lines: impl IntoIterator<Item = InvoiceLine>) -> Self {
        let mut aggregator = Self::new();
        for line in lines {
            aggregator.fold(line);
        }
        aggregator
    }

    /// 折叠一行
    pub fn fold(&mut self, line: InvoiceLine) {
        self.lines_seen += 1;

        let key = canonical_key(&line.item_raw);
        let quote = Quote::new(normalize_supplier(&line.supplier), line.price);

        match self.items.get_mut(&key) {
            Some(aggregate) => {
                if aggregate.observe(&quote) {
                    tracing::trace!(
                        "商品 {} 更新: 最低 {}@{}, 最高 {}@{}",
                        key,
                        aggregate.cheapest.supplier,
                        aggregate.cheapest.price,
                        aggregate.most_expensive.supplier,
                        aggregate.most_expensive.price
                    );
                }
            }
            None => {
                self.items.insert(key.clone(), ItemAggregate::new(key, quote));
            }
        }
    }

    pub fn get(&self, key: &CanonicalKey) -> Option<&ItemAggregate> {
        self.items.get(key)
    }

    /// 不同商品数量
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    pub fn into_items(self) -> IndexMap<CanonicalKey, ItemAggregate> {
        self.items
    }
}

/// 聚合明细行，返回保序的商品聚合表
pub fn aggregate(
    lines: impl IntoIterator<Item = InvoiceLine>,
) -> IndexMap<CanonicalKey, ItemAggregate> {
    PriceAggregator::from_lines(lines).into_items()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn line(item: &str, supplier: &str, price: &str) -> InvoiceLine {
        InvoiceLine {
            item_raw: item.to_string(),
            supplier: supplier.to_string(),
            price: BigDecimal::from_str(price).unwrap(),
        }
    }

    #[test]
    fn tie_at_minimum_keeps_first_seen() {
        let items = aggregate(vec![
            line("Olive Oil", "A", "10.00"),
            line("olive oil", "B", "8.50"),
            line("Olive Oil", "C", "8.50"),
        ]);

        assert_eq!(items.len(), 1);
        let agg = &items[0];
        assert_eq!(agg.key.as_str(), "olive oil");
        assert_eq!(agg.cheapest.supplier, "B");
        assert_eq!(agg.most_expensive.supplier, "A");
    }

    #[test]
    fn tie_at_maximum_keeps_first_seen() {
        let items = aggregate(vec![
            line("salt", "A", "2"),
            line("salt", "B", "5"),
            line("salt", "C", "5"),
        ]);
        assert_eq!(items[0].most_expensive.supplier, "B");
    }

    #[test]
    fn items_keep_first_seen_order() {
        let items = aggregate(vec![
            line("Sugar", "A", "1"),
            line("flour", "A", "2"),
            line("SUGAR", "B", "0.5"),
        ]);
        let keys: Vec<_> = items.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["sugar", "flour"]);
    }

    #[test]
    fn supplier_is_trimmed_but_case_kept() {
        let items = aggregate(vec![line("x", "  Acme ", "1")]);
        assert_eq!(items[0].cheapest.supplier, "Acme");
    }

    #[test]
    fn negative_and_zero_prices_are_accepted() {
        let items = aggregate(vec![line("x", "A", "0"), line("x", "B", "-1.5")]);
        assert_eq!(items[0].cheapest.supplier, "B");
        assert_eq!(items[0].most_expensive.supplier, "A");
    }

    #[test]
    fn counts_lines_and_items() {
        let mut aggregator = PriceAggregator::new();
        aggregator.fold(line("a", "A", "1"));
        aggregator.fold(line("A ", "B", "2"));
        aggregator.fold(line("b", "B", "3"));

        assert_eq!(aggregator.lines_seen(), 3);
        assert_eq!(aggregator.item_count(), 2);
        assert!(aggregator.get(&canonical_key("b")).is_some());
    }
}
