//! Semantic meaning of calls

use crate::bid::BidTag;
use crate::dsl::annotations::Annotation;
use crate::dsl::planner::Planner;
use crate::kernel::HandConstraint;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Semantic meaning of a call
#[derive(Clone, Serialize, Deserialize)]
pub struct CallSemantics {
    /// What this call shows about our hand
    pub shows: Vec<HandConstraint>,
    /// Metadata about the bid (not hand constraints)
    pub annotations: Vec<Annotation>,
    /// Name of the rule that generated these semantics
    pub rule_name: String,
    pub tag: BidTag,
    /// Optional planner for selecting the bid
    #[serde(skip)]
    pub planner: Option<Arc<dyn Planner>>,
}

impl CallSemantics {
    pub fn has_annotation(&self, annotation: Annotation) -> bool {
        self.annotations.contains(&annotation)
    }

    /// "Rule name: shown constraints", or just the rule name when the call
    /// shows nothing.
    pub fn rationale(&self) -> String {
        let shows = HandConstraint::describe_all(&self.shows);
        if shows.is_empty() {
            self.rule_name.clone()
        } else {
            format!("{}: {}", self.rule_name, shows)
        }
    }
}

impl std::fmt::Debug for CallSemantics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallSemantics")
            .field("shows", &self.shows)
            .field("annotations", &self.annotations)
            .field("rule_name", &self.rule_name)
            .field("tag", &self.tag)
            .field("planner", &self.planner.as_ref().map(|_| "Some(Planner)"))
            .finish()
    }
}
