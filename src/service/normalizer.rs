use crate::models::CanonicalKey;

/// 商品名归一化：去两侧空白 + 转小写
///
/// "Olive Oil" 与 " olive oil " 归为同一商品。
pub fn canonical_key(item_raw: &str) -> CanonicalKey {
    CanonicalKey::new(item_raw.trim().to_lowercase())
}

/// 供应商名只去空白，大小写保留 (用于展示和计分归属)
pub fn normalize_supplier(supplier_raw: &str) -> String {
    supplier_raw.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_and_whitespace_collapse_to_one_key() {
        let a = canonical_key("Olive Oil");
        let b = canonical_key("  olive OIL\t");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "olive oil");
    }

    #[test]
    fn inner_whitespace_is_kept() {
        assert_ne!(canonical_key("olive  oil"), canonical_key("olive oil"));
    }

    #[test]
    fn idempotent() {
        let once = canonical_key(" Flour ");
        assert_eq!(canonical_key(once.as_str()), once);
    }

    #[test]
    fn supplier_case_is_preserved() {
        assert_eq!(normalize_supplier("  Acme Foods "), "Acme Foods");
        assert_ne!(normalize_supplier("acme"), normalize_supplier("ACME"));
    }

    #[test]
    fn empty_label_is_a_valid_key() {
        assert_eq!(canonical_key("   ").as_str(), "");
    }
}
