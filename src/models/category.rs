use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 题目分类（只读）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// 分类 ID → 分类名称，按 ID 升序
///
/// 序列化为 JSON 时键会变成字符串，如 `{"1": "Science"}`
pub type CategoryMap = BTreeMap<u64, String>;

pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|category| (category.id, category.kind.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_map_serializes_with_string_keys() {
        let categories = vec![
            Category { id: 2, kind: "Art".to_string() },
            Category { id: 1, kind: "Science".to_string() },
        ];
        let json = serde_json::to_string(&category_map(&categories)).unwrap();
        assert_eq!(json, r#"{"1":"Science","2":"Art"}"#);
    }
}
