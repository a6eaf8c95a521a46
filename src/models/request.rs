//! 请求体数据结构
//!
//! 前端提交的数字字段有时是字符串（如 `"category": "2"`），这里统一兼容

use serde::Deserialize;

use crate::models::question::NewQuestion;

/// 分页查询参数
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
}

impl PageQuery {
    /// 解析页码
    ///
    /// 缺省或不是数字时为第 1 页；负数页码按 0 处理（结果为空）；
    /// 超出 `usize` 的页码按 `usize::MAX` 处理（同样越界）
    pub fn page_number(&self) -> usize {
        let raw = match self.page.as_deref().map(str::trim) {
            None => return 1,
            Some(raw) => raw,
        };

        let (negative, digits) = match raw.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, raw.strip_prefix('+').unwrap_or(raw)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return 1;
        }
        if negative {
            return 0;
        }

        digits.parse::<usize>().unwrap_or(usize::MAX)
    }
}

/// `POST /questions` 请求体
///
/// 带非空 `searchTerm` 时为搜索，否则为新建题目
#[derive(Debug, Default, Deserialize)]
pub struct QuestionPayload {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_u64")]
    pub category: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_lenient_u64")]
    pub difficulty: Option<u64>,
}

impl QuestionPayload {
    /// 非空的搜索关键字
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|term| !term.is_empty())
    }

    /// 转换为待插入的新题目
    pub fn into_new_question(self) -> Result<NewQuestion, String> {
        let question = self.question.ok_or("缺少 question 字段")?;
        let answer = self.answer.ok_or("缺少 answer 字段")?;
        let category = self.category.ok_or("缺少 category 字段")?;
        let difficulty = self.difficulty.ok_or("缺少 difficulty 字段")?;
        let difficulty = u32::try_from(difficulty).map_err(|_| format!("难度超出范围: {}", difficulty))?;

        let draft = NewQuestion {
            question,
            answer,
            category,
            difficulty,
        };
        draft.validate()?;
        Ok(draft)
    }
}

/// `POST /quizzes` 请求体
#[derive(Debug, Deserialize)]
pub struct QuizPayload {
    pub quiz_category: QuizCategory,
    pub previous_questions: Vec<u64>,
}

/// 测验分类，`id` 为 0 或 null 表示全部分类
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_lenient_u64")]
    pub id: Option<u64>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl QuizPayload {
    /// 分类过滤条件，`None` 表示全部分类
    pub fn category_filter(&self) -> Option<u64> {
        self.quiz_category.id.filter(|id| *id != 0)
    }
}

// 兼容整数和数字字符串；空字符串视为 0，null 视为缺省
fn deserialize_lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct LenientVisitor;

    impl<'de> Visitor<'de> for LenientVisitor {
        type Value = Option<u64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative integer or a numeric string")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Ok(Some(0));
            }
            trimmed
                .parse::<u64>()
                .map(Some)
                .map_err(|_| E::custom(format!("invalid numeric string: {:?}", value)))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            u64::try_from(value)
                .map(Some)
                .map_err(|_| E::custom(format!("negative value: {}", value)))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(LenientVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_number_defaults_and_falls_back() {
        assert_eq!(PageQuery { page: None }.page_number(), 1);
        assert_eq!(PageQuery { page: Some("3".into()) }.page_number(), 3);
        assert_eq!(PageQuery { page: Some("abc".into()) }.page_number(), 1);
        assert_eq!(PageQuery { page: Some("-2".into()) }.page_number(), 0);
        assert_eq!(PageQuery { page: Some("+4".into()) }.page_number(), 4);
        assert_eq!(PageQuery { page: Some("2.5".into()) }.page_number(), 1);
    }

    #[test]
    fn page_number_overflow_is_out_of_range() {
        let huge = PageQuery { page: Some("99999999999999999999".into()) };
        assert_eq!(huge.page_number(), usize::MAX);

        let huge_negative = PageQuery { page: Some("-99999999999999999999".into()) };
        assert_eq!(huge_negative.page_number(), 0);
    }

    #[test]
    fn question_payload_accepts_numeric_strings() {
        let payload: QuestionPayload = serde_json::from_value(json!({
            "question": "Who invented Peanut Butter?",
            "answer": "George Washington Carver",
            "category": "4",
            "difficulty": 2
        }))
        .unwrap();

        assert!(payload.search_term().is_none());
        let draft = payload.into_new_question().unwrap();
        assert_eq!(draft.category, 4);
        assert_eq!(draft.difficulty, 2);
    }

    #[test]
    fn empty_search_term_means_create() {
        let payload: QuestionPayload = serde_json::from_value(json!({ "searchTerm": "" })).unwrap();
        assert!(payload.search_term().is_none());
        assert!(payload.into_new_question().is_err());
    }

    #[test]
    fn non_numeric_category_is_rejected() {
        let result: Result<QuestionPayload, _> = serde_json::from_value(json!({ "category": "science" }));
        assert!(result.is_err());
    }

    #[test]
    fn quiz_category_zero_means_all() {
        let payload: QuizPayload = serde_json::from_value(json!({
            "quiz_category": { "type": "click", "id": 0 },
            "previous_questions": [1, 2]
        }))
        .unwrap();
        assert_eq!(payload.category_filter(), None);

        let payload: QuizPayload = serde_json::from_value(json!({
            "quiz_category": { "type": "Science", "id": "1" },
            "previous_questions": []
        }))
        .unwrap();
        assert_eq!(payload.category_filter(), Some(1));
    }

    #[test]
    fn quiz_payload_requires_category_id_and_previous_questions() {
        let missing_id: Result<QuizPayload, _> = serde_json::from_value(json!({
            "quiz_category": { "type": "Science" },
            "previous_questions": []
        }));
        assert!(missing_id.is_err());

        let missing_previous: Result<QuizPayload, _> = serde_json::from_value(json!({
            "quiz_category": { "id": 1 }
        }));
        assert!(missing_previous.is_err());
    }
}
