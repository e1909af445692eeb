use crate::models::{CanonicalKey, Quote};

/// 单个商品的聚合状态：最低价与最高价报价
///
/// 不变式：`cheapest.price <= most_expensive.price`
#[derive(Debug, Clone, PartialEq)]
pub struct ItemAggregate {
    pub key: CanonicalKey,
    pub cheapest: Quote,
    pub most_expensive: Quote,
}

impl ItemAggregate {
    /// 首次出现时最低价与最高价是同一报价
    pub fn new(key: CanonicalKey, quote: Quote) -> Self {
        Self {
            key,
            cheapest: quote.clone(),
            most_expensive: quote,
        }
    }

    /// 合并一条报价；价格相同保留先出现的供应商
    ///
    /// 返回是否改变了最低价或最高价。
    pub fn observe(&mut self, quote: &Quote) -> bool {
        let mut changed = false;

        if quote.price < self.cheapest.price {
            self.cheapest = quote.clone();
            changed = true;
        }

        if quote.price > self.most_expensive.price {
            self.most_expensive = quote.clone();
            changed = true;
        }

        changed
    }
}
