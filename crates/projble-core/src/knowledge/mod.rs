//! Static PROJ-BLE knowledge base (canned answers) and topic matching.
//!
//! ## Topics
//!
//! Topics are tested in this order against the lower-cased question; the first hit wins.
//!
//! | Order | Topic       | Keywords                                      |
//! |-------|-------------|-----------------------------------------------|
//! | 1     | Mission     | mission, goal, purpose, objective             |
//! | 2     | Vision      | vision, future, envision                      |
//! | 3     | Values      | values, principles, beliefs                   |
//! | 4     | Careers     | career, job, work, employment, hiring         |
//! | 5     | CompanyName | name, called, company                         |
//!
//! Matching is plain substring containment, so "homework" hits Careers through "work".

mod base;
mod topic;

pub use base::{KnowledgeBase, PROJ_BLE};
pub use topic::{match_topic, Topic, DEFAULT_ANSWER};
