//! The oracle boundary: an external service that turns a prompt into text.
//!
//! The interface is deliberately plain string-to-string and blocking. The
//! controller defines no transport, retry, or timeout policy; a collaborator
//! that needs one enforces it behind this trait.

/// External text generator consumed by the repair controller.
pub trait Oracle {
    fn generate(&mut self, prompt: &str) -> String;
}

/// Test double that always answers with the same text.
pub struct FixedOracle {
    reply: String,
    pub calls: u32,
}

impl FixedOracle {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: 0,
        }
    }
}

impl Oracle for FixedOracle {
    fn generate(&mut self, _prompt: &str) -> String {
        self.calls += 1;
        self.reply.clone()
    }
}

/// Test double that plays back a fixed sequence of replies, then falls back
/// to the last one.
pub struct ScriptedOracle {
    replies: Vec<String>,
    pub calls: u32,
}

impl ScriptedOracle {
    pub fn new(replies: Vec<String>) -> Self {
        Self { replies, calls: 0 }
    }
}

impl Oracle for ScriptedOracle {
    fn generate(&mut self, _prompt: &str) -> String {
        let index = (self.calls as usize).min(self.replies.len().saturating_sub(1));
        self.calls += 1;
        self.replies.get(index).cloned().unwrap_or_default()
    }
}
