pub mod answer_extractor;
pub mod expression_extractor;
pub mod markers;
pub mod matching_service;
pub mod quality_validator;
pub mod question_extractor;
pub mod sample_answer_store;
pub mod text_extractor;

pub use answer_extractor::extract_answers;
pub use expression_extractor::extract_expressions;
pub use matching_service::match_answers;
pub use quality_validator::validate_answer;
pub use question_extractor::extract_questions;
pub use sample_answer_store::{SampleAnswerStore, SampleAnswers};
pub use text_extractor::extract_text;
