//! 题目过滤 - 业务能力层
//!
//! 两个过滤都保持输入顺序（存储按 ID 升序返回），结果为空不算错误

use crate::models::Question;

/// 按题干搜索，忽略大小写的子串匹配，只匹配题干不匹配答案
///
/// 调用方保证 `term` 非空；空关键字在接口层被当作"新建题目"
pub fn search<'a>(items: &'a [Question], term: &str) -> Vec<&'a Question> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|question| question.text_contains_lowercase(&needle))
        .collect()
}

/// 按分类过滤
pub fn by_category(items: &[Question], category: u64) -> Vec<&Question> {
    items
        .iter()
        .filter(|question| question.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64, text: &str, answer: &str, category: u64) -> Question {
        Question {
            id,
            question: text.to_string(),
            answer: answer.to_string(),
            category,
            difficulty: 1,
        }
    }

    fn items() -> Vec<Question> {
        vec![
            question(1, "What is the capital of France?", "Paris", 3),
            question(2, "Where is the Taj Mahal?", "Agra", 3),
            question(3, "WHAT year did the Titanic sink?", "1912", 4),
            question(4, "Who painted the Mona Lisa?", "what a question", 2),
        ]
    }

    fn ids(found: &[&Question]) -> Vec<u64> {
        found.iter().map(|q| q.id).collect()
    }

    #[test]
    fn search_is_case_insensitive_and_ignores_answers() {
        let items = items();
        assert_eq!(ids(&search(&items, "what")), vec![1, 3]);
        assert_eq!(ids(&search(&items, "TAJ")), vec![2]);
    }

    #[test]
    fn search_without_matches_is_empty() {
        let items = items();
        assert!(search(&items, "canoot").is_empty());
    }

    #[test]
    fn search_treats_sql_wildcards_literally() {
        let items = items();
        assert!(search(&items, "%").is_empty());
    }

    #[test]
    fn by_category_keeps_order_and_only_matching() {
        let items = items();
        assert_eq!(ids(&by_category(&items, 3)), vec![1, 2]);
        assert!(by_category(&items, 1000).is_empty());
    }

    #[test]
    fn filters_are_repeatable() {
        let items = items();
        assert_eq!(search(&items, "what"), search(&items, "what"));
        assert_eq!(by_category(&items, 4), by_category(&items, 4));
    }
}
