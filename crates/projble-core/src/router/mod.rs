//! Question router: classifies a question and answers it from the knowledge base or delegates it.

use crate::knowledge::{match_topic, KnowledgeBase, DEFAULT_ANSWER, PROJ_BLE};
use crate::shared::QuestionKind;
use std::sync::Arc;

/// Substrings that mark a question as being about PROJ-BLE.
pub const DOMAIN_KEYWORDS: [&str; 12] = [
    "proj-ble",
    "proj ble",
    "projble",
    "company",
    "mission",
    "vision",
    "values",
    "career",
    "work",
    "job",
    "employment",
    "organization",
];

/// Produces an answer for a general (non-domain) question.
///
/// Implementations absorb their own failures: the returned string is always something
/// the caller can show to the user.
#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, question: &str) -> String;
}

/// Substring containment on the lower-cased question. "network" matches "work".
pub fn is_domain_question(question: &str) -> bool {
    let lower = question.to_lowercase();
    DOMAIN_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Answer text plus the classification that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedAnswer {
    pub text: String,
    pub kind: QuestionKind,
}

/// Routes domain questions to canned answers and everything else to a [`Generator`].
pub struct QuestionRouter {
    knowledge: &'static KnowledgeBase,
    generator: Arc<dyn Generator>,
}

impl QuestionRouter {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self {
            knowledge: &PROJ_BLE,
            generator,
        }
    }

    pub fn classify(&self, question: &str) -> QuestionKind {
        if is_domain_question(question) {
            QuestionKind::Domain
        } else {
            QuestionKind::General
        }
    }

    /// Canned answer for a domain question; [`DEFAULT_ANSWER`] when no topic matches.
    pub fn answer_from_knowledge(&self, question: &str) -> String {
        match match_topic(question) {
            Some(topic) => topic.answer(self.knowledge),
            None => DEFAULT_ANSWER.to_string(),
        }
    }

    pub async fn route(&self, question: &str) -> RoutedAnswer {
        let kind = self.classify(question);
        let text = match kind {
            QuestionKind::Domain => self.answer_from_knowledge(question),
            QuestionKind::General => self.generator.generate(question).await,
        };
        tracing::debug!(kind = kind.as_str(), chars = text.len(), "question routed");
        RoutedAnswer { text, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingGenerator {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl Generator for CountingGenerator {
        async fn generate(&self, question: &str) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            format!("generated: {}", question)
        }
    }

    fn router() -> (QuestionRouter, Arc<CountingGenerator>) {
        let generator = Arc::new(CountingGenerator {
            calls: AtomicUsize::new(0),
        });
        (QuestionRouter::new(generator.clone()), generator)
    }

    #[test]
    fn test_domain_keywords_are_case_insensitive_substrings() {
        assert!(is_domain_question("Tell me about PROJ-BLE"));
        assert!(is_domain_question("is projble hiring"));
        assert!(is_domain_question("How does a computer NETWORK function?"));
        assert!(is_domain_question("famous artwork"));
        assert!(!is_domain_question("What is formative assessment?"));
        assert!(!is_domain_question(""));
    }

    #[tokio::test]
    async fn test_mission_question_answered_without_generator() {
        let (router, generator) = router();
        let answer = router.route("What is your mission?").await;
        assert_eq!(answer.kind, QuestionKind::Domain);
        assert_eq!(answer.text, format!("**PROJ-BLE Mission:**\n{}", PROJ_BLE.mission));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_general_question_delegates_exactly_once() {
        let (router, generator) = router();
        let answer = router.route("What is formative assessment?").await;
        assert_eq!(answer.kind, QuestionKind::General);
        assert_eq!(answer.text, "generated: What is formative assessment?");
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_company_values_lists_every_value_in_order() {
        let (router, _) = router();
        let answer = router.route("Tell me about your company values").await;
        let mut last = 0;
        for (name, description) in PROJ_BLE.core_values {
            let line = format!("• **{}:** {}\n", name, description);
            let pos = answer.text.find(&line).expect("every value has its own bullet line");
            assert!(pos >= last, "values out of declared order");
            last = pos;
        }
    }

    #[tokio::test]
    async fn test_mission_wins_over_job() {
        let (router, _) = router();
        let answer = router.route("Does the mission affect my job?").await;
        assert!(answer.text.starts_with("**PROJ-BLE Mission:**"));
    }

    #[tokio::test]
    async fn test_domain_question_without_topic_gets_default_answer() {
        let (router, generator) = router();
        let answer = router.route("Which organization runs this?").await;
        assert_eq!(answer.kind, QuestionKind::Domain);
        assert_eq!(answer.text, DEFAULT_ANSWER);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }
}
