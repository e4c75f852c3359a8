use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{MinutemanError, Result};

/// Versioned configuration for the extraction engine.
///
/// Every lexicon the pipeline matches against lives here rather than in code,
/// so deployments can tune precision and tests can substitute minimal
/// lexicons. Loaded from TOML; all sections fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Lexicon revision, bumped whenever the shipped defaults change.
    pub version: u32,
    pub detection: DetectionConfig,
    pub extraction: ExtractionConfig,
    pub priority: PriorityConfig,
    pub scoring: ScoringConfig,
    pub aggregation: AggregationConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: 1,
            detection: DetectionConfig::default(),
            extraction: ExtractionConfig::default(),
            priority: PriorityConfig::default(),
            scoring: ScoringConfig::default(),
            aggregation: AggregationConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| MinutemanError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// Action-signal lexicons for the detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Imperative/action verbs, matched as whole words.
    pub action_verbs: Vec<String>,
    /// Obligation phrases, matched as whole-word phrases. Checked only when
    /// no action verb hit.
    pub obligation_phrases: Vec<String>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            action_verbs: strings(&[
                "fix", "create", "update", "implement", "review", "deploy", "test", "write",
                "investigate", "design", "build", "prepare", "schedule", "refactor", "document",
                "debug", "optimize",
            ]),
            obligation_phrases: strings(&[
                "need to",
                "needs to",
                "should",
                "must",
                "has to",
                "have to",
                "will",
                "going to",
                "action item",
                "todo",
            ]),
        }
    }
}

/// Attribute-extraction tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum number of words captured after the trigger for the title.
    pub title_max_words: usize,
    /// Phrases that mark a no-signal segment as a handoff utterance
    /// ("Alex, please handle it."), attributing the named member to the
    /// previous segment's draft.
    pub handoff_phrases: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            title_max_words: 8,
            handoff_phrases: strings(&[
                "please",
                "can you",
                "could you",
                "you take",
                "take this",
                "take it",
                "handle it",
                "handle this",
                "handle that",
                "you're good with",
                "you are good with",
            ]),
        }
    }
}

/// Ordered priority keyword buckets. Checked Critical, then High, then Low;
/// a segment matching none is Medium.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityConfig {
    pub critical: Vec<String>,
    pub high: Vec<String>,
    pub low: Vec<String>,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            critical: strings(&["urgent", "asap", "blocking", "critical", "immediately"]),
            high: strings(&["important", "priority", "soon", "high priority"]),
            low: strings(&["whenever", "no rush", "low priority", "eventually"]),
        }
    }
}

/// One row of the role-affinity table: task-type keywords that grant a bonus
/// to members whose role contains `role_keyword`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleAffinity {
    pub keywords: Vec<String>,
    pub role_keyword: String,
}

/// Assignment-scoring weights and the role-affinity table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points per skill token found in the task description.
    pub skill_weight: u32,
    /// Bonus for a role-affinity keyword match.
    pub role_bonus: u32,
    pub role_affinity: Vec<RoleAffinity>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            skill_weight: 2,
            role_bonus: 3,
            role_affinity: vec![
                RoleAffinity {
                    keywords: strings(&["ui", "frontend", "css", "design", "screen", "screens"]),
                    role_keyword: "frontend".to_string(),
                },
                RoleAffinity {
                    keywords: strings(&[
                        "api",
                        "apis",
                        "database",
                        "backend",
                        "schema",
                        "server",
                        "performance",
                    ]),
                    role_keyword: "backend".to_string(),
                },
                RoleAffinity {
                    keywords: strings(&["test", "tests", "qa", "bug", "quality", "automation"]),
                    role_keyword: "qa".to_string(),
                },
            ],
        }
    }
}

/// Dependency-resolution tunables for the aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Minimum share of a hint's content tokens that must appear in an
    /// earlier task's title or description to link it.
    pub dependency_overlap_threshold: f64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            dependency_overlap_threshold: 0.5,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lexicons_non_empty() {
        let config = EngineConfig::default();
        assert_eq!(config.version, 1);
        assert!(config.detection.action_verbs.contains(&"fix".to_string()));
        assert!(config
            .detection
            .obligation_phrases
            .contains(&"need to".to_string()));
        assert!(config.priority.critical.contains(&"urgent".to_string()));
        assert_eq!(config.scoring.skill_weight, 2);
        assert_eq!(config.scoring.role_bonus, 3);
        assert_eq!(config.scoring.role_affinity.len(), 3);
    }

    #[test]
    fn test_priority_bucket_order_is_fixed() {
        let config = PriorityConfig::default();
        // Critical bucket must win over Low when both match a segment, so the
        // buckets are distinct fields rather than an unordered map.
        assert!(!config.critical.is_empty());
        assert!(!config.low.is_empty());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let rt: EngineConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(rt.version, config.version);
        assert_eq!(rt.detection.action_verbs, config.detection.action_verbs);
        assert_eq!(
            rt.aggregation.dependency_overlap_threshold,
            config.aggregation.dependency_overlap_threshold
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("minuteman.toml");

        let mut config = EngineConfig::default();
        config.version = 7;
        config.extraction.title_max_words = 10;
        config.save(&path).unwrap();

        let loaded = EngineConfig::load(&path).unwrap();
        assert_eq!(loaded.version, 7);
        assert_eq!(loaded.extraction.title_max_words, 10);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = EngineConfig::load_or_default(Path::new("/nonexistent/minuteman.toml"));
        assert_eq!(config.version, 1);
    }

    #[test]
    fn test_partial_toml_uses_section_defaults() {
        let toml_str = r#"
            version = 3

            [extraction]
            title_max_words = 12
        "#;
        let config: EngineConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.version, 3);
        assert_eq!(config.extraction.title_max_words, 12);
        // Untouched sections keep their defaults.
        assert!(config.detection.action_verbs.contains(&"deploy".to_string()));
        assert_eq!(config.scoring.role_bonus, 3);
    }
}
