//! Transform trait for payload reshaping between extract and load.

use serde_json::Value;

/// Reshapes an extracted payload before it is loaded.
///
/// The pipeline always invokes this as a distinct stage, even when the
/// transform is the identity, so sources that need real normalization
/// plug in without changing the orchestration.
pub trait Transform: Send + Sync {
    /// Reshape a payload. Infallible: a transform that can reject input
    /// belongs at the extract seam, not here.
    fn transform(&self, payload: Value) -> Value;

    /// Transform name, used as a log field.
    fn name(&self) -> &str {
        "unknown"
    }
}

/// Identity transform for sources that already return storage-ready JSON.
pub struct Passthrough;

impl Transform for Passthrough {
    fn transform(&self, payload: Value) -> Value {
        payload
    }

    fn name(&self) -> &str {
        "passthrough"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn passthrough_is_identity() {
        let payload = json!({"ip": "8.8.8.8", "riot": true, "trust_level": "1"});
        assert_eq!(Passthrough.transform(payload.clone()), payload);
    }
}
