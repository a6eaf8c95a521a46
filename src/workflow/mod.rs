pub mod trivia_flow;

pub use trivia_flow::{QuestionPostOutcome, TriviaFlow};
