use bigdecimal::BigDecimal;
use serde::Serialize;
use std::fmt;

/// 发票明细行 (一行输入对应一条)
///
/// `item_raw` 与 `supplier` 保留原始文本，去空白等规整在归一化阶段完成。
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceLine {
    pub item_raw: String,
    pub supplier: String,
    pub price: BigDecimal,
}

/// 商品归一化键 (分组身份)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub(crate) fn new(key: String) -> Self {
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// 某商品的一次供应商报价
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub supplier: String,
    #[serde(serialize_with = "crate::models::decimal::serialize_number")]
    pub price: BigDecimal,
}

impl Quote {
    pub fn new(supplier: impl Into<String>, price: BigDecimal) -> Self {
        Self {
            supplier: supplier.into(),
            price,
        }
    }
}
