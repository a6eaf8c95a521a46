pub mod mem_store;
pub mod question_store;

pub use mem_store::MemQuestionStore;
pub use question_store::QuestionStore;
