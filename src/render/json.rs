use serde_json::{json, Map, Value};

use super::ProgressView;
use crate::outline::Step;
use crate::tracker::StepStatus;

fn step_value(step: &Step, progress: Option<ProgressView<'_>>) -> Value {
    let mut object = Map::new();
    object.insert("id".into(), json!(step.path().to_string()));
    object.insert("title".into(), json!(step.title()));
    if let Some(view) = progress {
        object.insert(
            "completed".into(),
            json!(view.status(step) == StepStatus::Done),
        );
    }
    let children: Vec<Value> = step
        .children()
        .iter()
        .map(|child| step_value(child, progress))
        .collect();
    object.insert("children".into(), Value::Array(children));
    Value::Object(object)
}

/// Pretty-printed JSON document for `step` and its descendants.
pub(super) fn document(step: &Step, progress: Option<ProgressView<'_>>) -> String {
    format!("{:#}", step_value(step, progress))
}
