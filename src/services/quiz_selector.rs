//! 测验抽题 - 业务能力层
//!
//! 规则：
//! 1. 候选池 = 未出过的题目（ID 不在 `asked` 中），有分类时再按分类过滤
//! 2. 候选池为空 → `None`，表示测验结束（正常结果，不是错误）
//! 3. 否则从候选池中均匀随机抽一道

use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use crate::models::Question;
use crate::services::random::{RandomSource, ThreadRandom};

/// 测验抽题器
///
/// 不保存任何会话状态，已出过的题目由调用方每次传入
#[derive(Clone)]
pub struct QuizSelector {
    random: Arc<dyn RandomSource>,
}

impl QuizSelector {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// 抽取下一道未出过的题目
    ///
    /// # 参数
    /// - `pool`: 全部题目
    /// - `category`: 分类过滤，`None` 表示全部分类
    /// - `asked`: 已出过的题目 ID
    ///
    /// # 返回
    /// 候选池为空时返回 `None`
    pub fn next_question<'a>(
        &self,
        pool: &'a [Question],
        category: Option<u64>,
        asked: &HashSet<u64>,
    ) -> Option<&'a Question> {
        let eligible: Vec<&Question> = pool
            .iter()
            .filter(|q| !asked.contains(&q.id))
            .filter(|q| category.map_or(true, |c| q.category == c))
            .collect();

        debug!(
            "候选题目 {} 道 (分类: {:?}, 已出 {} 道)",
            eligible.len(),
            category,
            asked.len()
        );

        if eligible.is_empty() {
            return None;
        }

        let index = self.random.pick_index(eligible.len());
        eligible.get(index).copied()
    }
}

impl Default for QuizSelector {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRandom))
    }
}

impl std::fmt::Debug for QuizSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizSelector").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::random::SeededRandom;
    use std::collections::HashMap;

    fn question(id: u64, category: u64) -> Question {
        Question {
            id,
            question: format!("Question {}", id),
            answer: format!("Answer {}", id),
            category,
            difficulty: 1,
        }
    }

    fn pool() -> Vec<Question> {
        vec![
            question(1, 1),
            question(2, 1),
            question(5, 2),
            question(6, 2),
            question(7, 2),
            question(9, 3),
        ]
    }

    fn asked(ids: &[u64]) -> HashSet<u64> {
        ids.iter().copied().collect()
    }

    /// 总是返回最后一个下标
    struct LastIndex;

    impl RandomSource for LastIndex {
        fn pick_index(&self, len: usize) -> usize {
            len - 1
        }
    }

    #[test]
    fn single_eligible_question_is_deterministic() {
        let pool = pool();
        let selector = QuizSelector::default();

        for _ in 0..10 {
            let picked = selector.next_question(&pool, Some(2), &asked(&[5, 7])).unwrap();
            assert_eq!(picked.id, 6);
        }
    }

    #[test]
    fn every_question_asked_ends_the_quiz() {
        let pool = pool();
        let all: Vec<u64> = pool.iter().map(|q| q.id).collect();
        let selector = QuizSelector::default();

        assert!(selector.next_question(&pool, None, &asked(&all)).is_none());
        assert!(selector.next_question(&pool, Some(2), &asked(&[5, 6, 7])).is_none());
        assert!(selector.next_question(&pool, Some(404), &asked(&[])).is_none());
        assert!(selector.next_question(&[], None, &asked(&[])).is_none());
    }

    #[test]
    fn never_returns_asked_or_other_category() {
        let pool = pool();
        let selector = QuizSelector::new(Arc::new(SeededRandom::new(42)));
        let asked_ids = asked(&[1, 6]);

        for _ in 0..200 {
            let picked = selector.next_question(&pool, Some(2), &asked_ids).unwrap();
            assert!(!asked_ids.contains(&picked.id));
            assert_eq!(picked.category, 2);
        }
    }

    #[test]
    fn index_is_taken_from_the_eligible_pool() {
        let pool = pool();
        let selector = QuizSelector::new(Arc::new(LastIndex));

        // 候选池 [2, 5, 6, 7]，最后一个是 7，而不是整个题库的最后一个
        let picked = selector.next_question(&pool, None, &asked(&[1, 9])).unwrap();
        assert_eq!(picked.id, 7);
    }

    #[test]
    fn every_eligible_question_can_be_drawn() {
        let pool = pool();
        let selector = QuizSelector::new(Arc::new(SeededRandom::new(2024)));
        let mut counts: HashMap<u64, usize> = HashMap::new();

        for _ in 0..500 {
            let picked = selector.next_question(&pool, None, &asked(&[9])).unwrap();
            *counts.entry(picked.id).or_default() += 1;
        }

        let seen: HashSet<u64> = counts.keys().copied().collect();
        assert_eq!(seen, asked(&[1, 2, 5, 6, 7]));

        // 5 道候选各约 100 次
        for (id, count) in &counts {
            assert!((60..=140).contains(count), "题目 {} 被抽中 {} 次", id, count);
        }
    }
}
