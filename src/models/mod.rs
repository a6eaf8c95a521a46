pub mod category;
pub mod loaders;
pub mod question;
pub mod request;
pub mod response;

pub use category::{category_map, Category, CategoryMap};
pub use loaders::{load_seed_file, parse_seed, SeedData, SeedQuestion};
pub use question::{NewQuestion, Question};
pub use request::{PageQuery, QuestionPayload, QuizPayload};
