use serde::Serialize;
use serde_json::Value;

use crate::events::StackEvent;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StepReport {
    pub op: String,
    pub duration_ms: u128,
    pub ok: bool,
    /// Error text of a failed step, or the id a step produced.
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SessionReport {
    pub session_name: Option<String>,
    pub steps: Vec<StepReport>,
    pub renders: usize,
    pub events: Vec<StackEvent>,
    pub layer_ids: Vec<String>,
    pub current_id: Option<String>,
    pub final_state: Value,
}

impl SessionReport {
    pub fn failures(&self) -> usize {
        self.steps.iter().filter(|step| !step.ok).count()
    }
}
