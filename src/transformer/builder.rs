//! Builder API for configuring a transformer.

use crate::transformer::violations::UnknownActionPolicy;
use crate::transformer::Transformer;

/// Builder for creating a `Transformer`
#[derive(Debug, Clone, Default)]
pub struct TransformerBuilder {
    unknown_actions: UnknownActionPolicy,
    max_actions: Option<usize>,
}

impl TransformerBuilder {
    pub fn new() -> Self {
        Self {
            unknown_actions: UnknownActionPolicy::PassThrough,
            max_actions: None,
        }
    }

    /// Set how unrecognized action tags are handled
    pub fn on_unknown_action(mut self, policy: UnknownActionPolicy) -> Self {
        self.unknown_actions = policy;
        self
    }

    /// Reject calls with more than `n` actions
    pub fn max_actions(mut self, n: usize) -> Self {
        self.max_actions = Some(n);
        self
    }

    /// Build the transformer
    pub fn build(self) -> Transformer {
        Transformer {
            unknown_actions: self.unknown_actions,
            max_actions: self.max_actions,
        }
    }
}
