//! projble-core: chatbot core library (config, shared types, static knowledge base, question router).

mod knowledge;
mod router;
mod shared;

pub use shared::{
    CoreConfig, LlmConfig, LlmMode, QuestionKind, DEFAULT_LLM_BASE_URL, DEFAULT_LLM_MODEL,
    DEFAULT_SERVICE_NAME,
};

pub use knowledge::{match_topic, KnowledgeBase, Topic, DEFAULT_ANSWER, PROJ_BLE};

pub use router::{is_domain_question, Generator, QuestionRouter, RoutedAnswer, DOMAIN_KEYWORDS};
