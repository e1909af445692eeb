use crate::models::decimal::{round2, serialize_number, to_f64};
use crate::models::{CanonicalKey, Quote};
use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use serde::ser::{Error, SerializeStruct};
use serde::{Serialize, Serializer};

/// 单个商品的比价结果 (价格均已保留两位小数)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemInsight {
    pub cheapest_supplier: String,
    #[serde(serialize_with = "serialize_number")]
    pub cheapest_price: BigDecimal,
    pub most_expensive_supplier: String,
    #[serde(serialize_with = "serialize_number")]
    pub most_expensive_price: BigDecimal,
    #[serde(serialize_with = "serialize_number")]
    pub savings: BigDecimal,
}

/// 供应商计分：最低价次数 + 按最低价归属的金额
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreboardEntry {
    pub wins: u32,
    pub spend: BigDecimal,
}

/// 供应商计分板，按供应商首次胜出的顺序保存
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierScoreboard {
    entries: IndexMap<String, ScoreboardEntry>,
}

impl SupplierScoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一次胜出：wins + 1，spend 累加最低价，每次累加后保留两位小数
    pub fn record_win(&mut self, supplier: &str, price: &BigDecimal) {
        let entry = self.entries.entry(supplier.to_string()).or_default();
        entry.wins += 1;
        entry.spend = round2(&(&entry.spend + price));
    }

    pub fn get(&self, supplier: &str) -> Option<&ScoreboardEntry> {
        self.entries.get(supplier)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ScoreboardEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_wins(&self) -> u32 {
        self.entries.values().map(|e| e.wins).sum()
    }
}

/// 输出为 `{ "wins": {..}, "spend": {..} }`
impl Serialize for SupplierScoreboard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wins: IndexMap<&str, u32> = self
            .entries
            .iter()
            .map(|(supplier, entry)| (supplier.as_str(), entry.wins))
            .collect();

        let mut spend: IndexMap<&str, f64> = IndexMap::with_capacity(self.entries.len());
        for (supplier, entry) in &self.entries {
            let amount = to_f64(&entry.spend).ok_or_else(|| {
                S::Error::custom(format!("spend of {} is not representable", supplier))
            })?;
            spend.insert(supplier.as_str(), amount);
        }

        let mut state = serializer.serialize_struct("SupplierScoreboard", 2)?;
        state.serialize_field("wins", &wins)?;
        state.serialize_field("spend", &spend)?;
        state.end()
    }
}

/// 比价报告 (根结果)
///
/// Map 的顺序即商品首次出现的顺序。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightReport {
    pub cheapest: IndexMap<CanonicalKey, Quote>,
    pub savings_by_item: IndexMap<CanonicalKey, ItemInsight>,
    #[serde(serialize_with = "serialize_number")]
    pub total_cheapest: BigDecimal,
    #[serde(serialize_with = "serialize_number")]
    pub total_most_expensive: BigDecimal,
    #[serde(serialize_with = "serialize_number")]
    pub total_savings: BigDecimal,
    pub supplier_scoreboard: SupplierScoreboard,
}

impl InsightReport {
    pub fn item_count(&self) -> usize {
        self.savings_by_item.len()
    }
}

/// 旧版 `/cheapest` 响应：每个商品的最低价 + 合计 (每种商品各买一件)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheapestSummary {
    pub cheapest: IndexMap<CanonicalKey, Quote>,
    #[serde(serialize_with = "serialize_number")]
    pub total: BigDecimal,
}

impl From<InsightReport> for CheapestSummary {
    fn from(report: InsightReport) -> Self {
        Self {
            cheapest: report.cheapest,
            total: report.total_cheapest,
        }
    }
}
