use crate::error::SeedError;
use crate::models::category::Category;
use crate::models::question::{NewQuestion, Question};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tokio::fs;

/// 种子数据文件内容
///
/// ```toml
/// [[categories]]
/// id = 1
/// type = "Science"
///
/// [[questions]]
/// question = "What is the heaviest organ in the human body?"
/// answer = "The Liver"
/// category = 1
/// difficulty = 4
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<SeedQuestion>,
}

/// 种子题目，`id` 可省略，由加载器分配
#[derive(Debug, Clone, Deserialize)]
pub struct SeedQuestion {
    #[serde(default)]
    pub id: Option<u64>,
    pub question: String,
    pub answer: String,
    pub category: u64,
    pub difficulty: u32,
}

impl SeedData {
    /// 校验并转换为分类和题目记录
    ///
    /// 未指定 ID 的题目按出现顺序从"已用最大 ID + 1"开始编号
    pub fn into_records(self) -> std::result::Result<(Vec<Category>, Vec<Question>), SeedError> {
        let mut categories = BTreeMap::new();
        for category in self.categories {
            if categories.insert(category.id, category.clone()).is_some() {
                return Err(SeedError::DuplicateCategory(category.id));
            }
        }

        let mut next_id = self
            .questions
            .iter()
            .filter_map(|q| q.id)
            .max()
            .map_or(1, |max| max + 1);

        let mut used_ids = BTreeSet::new();
        let mut questions = Vec::with_capacity(self.questions.len());

        for (index, seed) in self.questions.into_iter().enumerate() {
            let id = match seed.id {
                Some(id) => id,
                None => {
                    let id = next_id;
                    next_id += 1;
                    id
                }
            };

            let invalid = |reason: String| SeedError::InvalidQuestion { index, reason };

            if !used_ids.insert(id) {
                return Err(invalid(format!("ID {} 重复", id)));
            }
            if !categories.contains_key(&seed.category) {
                return Err(invalid(format!("分类 {} 不存在", seed.category)));
            }

            let draft = NewQuestion {
                question: seed.question,
                answer: seed.answer,
                category: seed.category,
                difficulty: seed.difficulty,
            };
            draft.validate().map_err(invalid)?;
            questions.push(draft.with_id(id));
        }

        questions.sort_by_key(|q| q.id);
        Ok((categories.into_values().collect(), questions))
    }
}

/// 解析 TOML 格式的种子数据
pub fn parse_seed(content: &str) -> std::result::Result<SeedData, SeedError> {
    Ok(toml::from_str(content)?)
}

/// 从 TOML 文件加载种子数据
pub async fn load_seed_file(path: &Path) -> Result<SeedData> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取种子文件: {}", path.display()))?;

    let seed = parse_seed(&content)
        .with_context(|| format!("无法解析种子文件: {}", path.display()))?;

    tracing::debug!(
        "种子文件 {} 包含 {} 个分类, {} 道题目",
        path.display(),
        seed.categories.len(),
        seed.questions.len()
    );

    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = r#"
[[categories]]
id = 1
type = "Science"

[[categories]]
id = 2
type = "Art"

[[questions]]
id = 5
question = "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?"
answer = "Maya Angelou"
category = 2
difficulty = 2

[[questions]]
question = "What is the heaviest organ in the human body?"
answer = "The Liver"
category = 1
difficulty = 4

[[questions]]
question = "Who discovered penicillin?"
answer = "Alexander Fleming"
category = 1
difficulty = 3
"#;

    #[test]
    fn assigns_ids_after_highest_explicit_id() {
        let (categories, questions) = parse_seed(SEED).unwrap().into_records().unwrap();

        assert_eq!(categories.len(), 2);
        let ids: Vec<u64> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![5, 6, 7]);
        assert_eq!(questions[1].answer, "The Liver");
    }

    #[test]
    fn rejects_unknown_category() {
        let seed = r#"
[[categories]]
id = 1
type = "Science"

[[questions]]
question = "Q"
answer = "A"
category = 9
difficulty = 1
"#;
        let err = parse_seed(seed).unwrap().into_records().unwrap_err();
        assert!(matches!(err, SeedError::InvalidQuestion { index: 0, .. }));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let seed = r#"
[[categories]]
id = 1
type = "Science"

[[questions]]
id = 3
question = "Q1"
answer = "A1"
category = 1
difficulty = 1

[[questions]]
id = 3
question = "Q2"
answer = "A2"
category = 1
difficulty = 1
"#;
        let err = parse_seed(seed).unwrap().into_records().unwrap_err();
        assert!(matches!(err, SeedError::InvalidQuestion { index: 1, .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(parse_seed("[[categories]\nid ="), Err(SeedError::Parse(_))));
    }

    #[tokio::test]
    async fn missing_file_reports_path() {
        let err = load_seed_file(Path::new("does/not/exist.toml")).await.unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
