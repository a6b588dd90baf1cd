use std::fs;
use std::path::Path;

use blake3::Hasher;
use log::info;
use thiserror::Error;

use crate::rules::RuleSet;

#[derive(Debug, Error)]
pub enum RuleFileError {
    #[error("failed to read rule file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse rule file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to hash rule set: {0}")]
    Hash(#[from] serde_json::Error),
}

/// Reads a TOML rule file. The tiers are not validated here; that happens
/// on the first calculation.
pub fn load_rule_set(path: impl AsRef<Path>) -> Result<RuleSet, RuleFileError> {
    let raw = fs::read_to_string(path)?;
    parse_rule_set(&raw)
}

pub fn parse_rule_set(raw: &str) -> Result<RuleSet, RuleFileError> {
    let rules: RuleSet = toml::from_str(raw)?;
    let hash = rule_set_hash(&rules)?;
    info!("rule_set_hash={hash}");
    Ok(rules)
}

/// blake3 over the canonical JSON encoding of `rules`, as lowercase hex.
pub fn rule_set_hash(rules: &RuleSet) -> Result<String, RuleFileError> {
    let bytes = serde_json::to_vec(rules)?;
    let mut hasher = Hasher::new();
    hasher.update(&bytes);
    Ok(hasher.finalize().to_hex().to_string())
}
