//! Post-decision checks.
//!
//! After the normalizer computes a match verdict, action rules (zones,
//! schedules, camera masks) get a chance to annotate or reject the record.
//! The hook is an injected strategy so adapters stay free of rule logic.

use crate::rect::FaceBox;
use crate::thresholds::DetectSettings;

/// Computed fields handed to post-decision rules.
#[derive(Debug, Clone, Copy)]
pub struct DecisionContext<'a> {
    pub name: &'a str,
    pub confidence: f64,
    pub is_match: bool,
    pub face_box: &'a FaceBox,
    pub settings: &'a DetectSettings,
}

/// Verdict of a post-decision check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckVerdict {
    /// Keep the record; a non-empty list is attached as `checks`.
    Accept(Vec<String>),
    /// Drop the record from the output entirely.
    Reject,
}

/// Pluggable post-decision check.
pub trait DecisionCheck: Send + Sync {
    fn evaluate(&self, ctx: &DecisionContext<'_>) -> CheckVerdict;
}

/// Default hook: accepts everything, annotates nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl DecisionCheck for AcceptAll {
    fn evaluate(&self, _ctx: &DecisionContext<'_>) -> CheckVerdict {
        CheckVerdict::Accept(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_all() {
        let hook = AcceptAll;
        let face_box = FaceBox {
            top: 0.0,
            left: 0.0,
            width: 10.0,
            height: 10.0,
        };
        let settings = DetectSettings::default();
        let ctx = DecisionContext {
            name: "alice",
            confidence: 100.0,
            is_match: true,
            face_box: &face_box,
            settings: &settings,
        };

        assert_eq!(hook.evaluate(&ctx), CheckVerdict::Accept(Vec::new()));
    }
}
