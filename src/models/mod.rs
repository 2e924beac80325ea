pub mod document;
pub mod question;
pub mod question_bank;
pub mod sample_answer;
pub mod topic;

pub use document::{ParsedDocument, QualityIssue, QualityReport};
pub use question::{Level, Question, QuestionId, QuestionType};
pub use question_bank::QuestionBank;
pub use sample_answer::{AnswerQuality, AnswerSource, SampleAnswerData};
pub use topic::{TopicCategory, TopicDescriptor, TopicTable};
