use crate::error::{InsightError, Result};
use crate::models::InvoiceLine;
use bigdecimal::BigDecimal;
use csv::{ReaderBuilder, StringRecord};
use std::str::FromStr;

pub const ITEM_COLUMN: &str = "item";
pub const SUPPLIER_COLUMN: &str = "supplier";
pub const PRICE_COLUMN: &str = "price";

/// 必需列在表头中的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndex {
    item: usize,
    supplier: usize,
    price: usize,
}

impl ColumnIndex {
    /// 按名称精确匹配 (区分大小写)，重复列取第一次出现
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        let item = find(ITEM_COLUMN);
        let supplier = find(SUPPLIER_COLUMN);
        let price = find(PRICE_COLUMN);
        match (item, supplier, price) {
            (Some(item), Some(supplier), Some(price)) => Ok(Self { item, supplier, price }),
            _ => {
                let columns = [
                    (ITEM_COLUMN, item),
                    (SUPPLIER_COLUMN, supplier),
                    (PRICE_COLUMN, price),
                ];
                let missing = columns
                    .iter()
                    .filter(|(_, idx)| idx.is_none())
                    .map(|(name, _)| name.to_string())
                    .collect();
                Err(InsightError::Schema { missing })
            }
        }
    }
}

/// 解析 CSV 文本为发票明细行 (保持输入顺序)
///
/// 任意一行出错即整体失败，不返回部分结果。
pub fn parse_invoice_lines(csv_text: &str) -> Result<Vec<InvoiceLine>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers().map_err(|e| csv_error(e, 1))?.clone();
    let columns = ColumnIndex::from_headers(&headers)?;
    tracing::debug!("表头校验通过: {:?}", columns);

    let mut lines = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(e, 0))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let item_raw = required_field(&record, columns.item, ITEM_COLUMN, line)?;
        let supplier = required_field(&record, columns.supplier, SUPPLIER_COLUMN, line)?;
        let price_raw = required_field(&record, columns.price, PRICE_COLUMN, line)?;

        lines.push(InvoiceLine {
            item_raw: item_raw.to_string(),
            supplier: supplier.to_string(),
            price: parse_price(price_raw, line)?,
        });
    }

    Ok(lines)
}

/// 整数部分最多位数 (超出后 f64 输出失真)
pub const MAX_INTEGER_DIGITS: usize = 15;
/// 小数部分最多位数
pub const MAX_FRACTION_DIGITS: usize = 10;

/// 价格：`[+-]digits[.digits]`，两侧空白忽略，不接受指数写法
pub fn parse_price(raw: &str, line: u64) -> Result<BigDecimal> {
    let trimmed = raw.trim();
    let reject = |reason: &str| InsightError::Format {
        line,
        field: PRICE_COLUMN.to_string(),
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(reject("price is empty"));
    }

    let unsigned = trimmed.strip_prefix(&['+', '-'][..]).unwrap_or(trimmed);
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    let has_digits = !int_part.is_empty() || !frac_part.is_empty();
    if !has_digits || !all_digits(int_part) || !all_digits(frac_part) {
        return Err(reject("price must be numeric"));
    }
    if int_part.len() > MAX_INTEGER_DIGITS || frac_part.len() > MAX_FRACTION_DIGITS {
        return Err(reject("price has too many digits"));
    }

    BigDecimal::from_str(trimmed).map_err(|_| reject("price must be numeric"))
}

fn required_field<'r>(
    record: &'r StringRecord,
    idx: usize,
    name: &str,
    line: u64,
) -> Result<&'r str> {
    record.get(idx).ok_or_else(|| InsightError::Format {
        line,
        field: name.to_string(),
        value: String::new(),
        reason: format!("row has {} fields, '{}' is missing", record.len(), name),
    })
}

fn csv_error(err: csv::Error, fallback_line: u64) -> InsightError {
    let line = err
        .position()
        .map(|p| p.line())
        .unwrap_or(fallback_line);
    InsightError::Format {
        line,
        field: "row".to_string(),
        value: String::new(),
        reason: err.to_string(),
    }
}
