pub mod question_search;
pub mod statistics;

pub use question_search::QuestionSearch;
pub use statistics::BankStatistics;
