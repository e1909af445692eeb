use bigdecimal::BigDecimal;
use serde::{ser::Error, Serializer};

/// 展示精度：两位小数
pub const PRESENTATION_SCALE: i64 = 2;

/// 四舍五入到两位小数 (远离零方向)
pub fn round2(value: &BigDecimal) -> BigDecimal {
    value.round(PRESENTATION_SCALE).with_scale(PRESENTATION_SCALE)
}

/// 十进制文本转 f64，保证最近舍入 (8.50 -> 8.5)
pub fn to_f64(value: &BigDecimal) -> Option<f64> {
    value.to_string().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// BigDecimal 以 JSON number 输出
pub fn serialize_number<S>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let number = to_f64(value)
        .ok_or_else(|| S::Error::custom(format!("decimal {} is not representable as f64", value)))?;
    serializer.serialize_f64(number)
}
