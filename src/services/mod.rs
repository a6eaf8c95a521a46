pub mod pager;
pub mod question_filter;
pub mod quiz_selector;
pub mod random;

pub use pager::{Pager, DEFAULT_PAGE_SIZE};
pub use quiz_selector::QuizSelector;
pub use random::{RandomSource, SeededRandom, ThreadRandom};
