//! Keyword topic matching over the static knowledge base.

use super::base::KnowledgeBase;

/// Returned for domain questions that match no topic.
pub const DEFAULT_ANSWER: &str = "I do not have that specific information. For the most accurate details, I recommend visiting the official PROJ-BLE website.";

/// A knowledge-base topic. Declaration order is match priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Mission,
    Vision,
    Values,
    Careers,
    CompanyName,
}

impl Topic {
    /// All topics in priority order.
    pub const ALL: [Topic; 5] = [
        Topic::Mission,
        Topic::Vision,
        Topic::Values,
        Topic::Careers,
        Topic::CompanyName,
    ];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Topic::Mission => &["mission", "goal", "purpose", "objective"],
            Topic::Vision => &["vision", "future", "envision"],
            Topic::Values => &["values", "principles", "beliefs"],
            Topic::Careers => &["career", "job", "work", "employment", "hiring"],
            Topic::CompanyName => &["name", "called", "company"],
        }
    }

    /// Canned answer for this topic.
    pub fn answer(&self, kb: &KnowledgeBase) -> String {
        match self {
            Topic::Mission => kb.mission_answer(),
            Topic::Vision => kb.vision_answer(),
            Topic::Values => kb.values_answer(),
            Topic::Careers => kb.careers_answer(),
            Topic::CompanyName => kb.company_name_answer(),
        }
    }
}

/// First topic (in priority order) with a keyword contained in the lower-cased question.
pub fn match_topic(question: &str) -> Option<Topic> {
    let lower = question.to_lowercase();
    Topic::ALL
        .into_iter()
        .find(|topic| topic.keywords().iter().any(|kw| lower.contains(kw)))
}
