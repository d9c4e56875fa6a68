use super::*;

/// A validated request to mint `count` times from an existing rune.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub struct MintRequest {
  pub rune_id: RuneId,
  pub count: u64,
}
