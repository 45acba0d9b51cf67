//! Recorded sessions: a JSON list of intents replayed against the engine.

use std::path::Path;

use anyhow::{bail, Context, Result};
use dugout_core::{AssignmentEngine, Intent};
use tracing::{debug, warn};

/// Tally of a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Intents the engine accepted.
    pub applied: usize,
    /// Intents the engine rejected.
    pub rejected: usize,
}

/// Reads a session file.
pub fn load(path: &Path) -> Result<Vec<Intent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read session {}", path.display()))?;
    parse(&content).with_context(|| format!("failed to parse session {}", path.display()))
}

/// Parses session JSON.
pub fn parse(content: &str) -> Result<Vec<Intent>> {
    Ok(serde_json::from_str(content)?)
}

/// Applies intents in order.
///
/// Rejected intents are logged and skipped, or abort the replay when
/// `strict` is set.
pub fn replay(engine: &mut AssignmentEngine, intents: Vec<Intent>, strict: bool) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();
    for (step, intent) in intents.into_iter().enumerate() {
        let described = format!("{intent:?}");
        match engine.apply(intent) {
            Ok(outcome) => {
                debug!(step, ?outcome, "intent applied");
                summary.applied += 1;
            }
            Err(error) if strict => {
                bail!("step {step}: {described} rejected: {error}");
            }
            Err(error) => {
                warn!(step, intent = %described, %error, "intent rejected, skipping");
                summary.rejected += 1;
            }
        }
    }
    Ok(summary)
}
