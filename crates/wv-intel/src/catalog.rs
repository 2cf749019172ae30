//! Scenario catalog backing the local insight source.
//!
//! The catalog is operator-supplied TOML: a list of scenarios (each carrying
//! an ungated [`FullInsight`] plus per-level message texts), a list of keyword
//! routes mapping chat messages onto scenarios or canned replies, and a
//! fallback for messages nothing matches.
//!
//! ```toml
//! [fallback]
//! messages = ["Ask me about a pool.", "I'm your edge-finder."]
//!
//! [[scenarios]]
//! key = "sol"
//! pool_label = "SOL 30m Pool"
//! ai_line = "SOL +3.0%"
//! lock_timer = "06:31"
//! messages = ["l1", "l2", "l3", "l4"]
//!
//! [scenarios.insight]
//! confidence = "High Confidence (82%)"
//! upsetAlert = true
//!
//! [[routes]]
//! any = ["sol", "solana"]
//! scenario = "sol"
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use wv_core::{FullInsight, Level};

use crate::error::IntelError;

// ---------------------------------------------------------------------------
// Data
// ---------------------------------------------------------------------------

/// One pool/topic the local source can talk about.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    /// Unique key; doubles as the pool id for insight requests.
    pub key: String,
    pub pool_label: String,
    pub ai_line: String,
    pub lock_timer: String,
    #[serde(default)]
    pub category: String,
    /// Wager duration suggested by the CTA, e.g. `30m`.
    #[serde(default)]
    pub duration_preset: Option<String>,
    #[serde(default)]
    pub resolution_source: String,
    /// Assistant text indexed by level - 1; levels past the end use the last entry.
    pub messages: Vec<String>,
    #[serde(default)]
    pub tone_tags: Vec<String>,
    #[serde(default)]
    pub quick_prompts: Vec<String>,
    #[serde(default)]
    pub insight: FullInsight,
}

impl Scenario {
    #[must_use]
    pub fn message_for(&self, level: Level) -> &str {
        leveled_text(&self.messages, level)
    }
}

/// Keyword rule routing a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Route {
    /// At least one of these must appear in the message.
    #[serde(default)]
    pub any: Vec<String>,
    /// All of these must appear in the message.
    #[serde(default)]
    pub all: Vec<String>,
    #[serde(default)]
    pub scenario: Option<String>,
    /// Canned platform-info answer; exclusive with `scenario`.
    #[serde(default)]
    pub reply: Option<String>,
    /// Text prepended to the scenario message.
    #[serde(default)]
    pub lead_in: Option<String>,
    /// Force the scenario's upset alert on or off.
    #[serde(default)]
    pub upset_alert: Option<bool>,
}

impl Route {
    /// Case-insensitive keyword match against an already-lowercased message.
    fn matches(&self, message: &str) -> bool {
        let all_ok = self.all.iter().all(|k| message.contains(&k.to_lowercase()));
        let any_ok = self.any.is_empty()
            || self.any.iter().any(|k| message.contains(&k.to_lowercase()));
        all_ok && any_ok
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Fallback {
    /// Text indexed by level - 1; levels past the end use the last entry.
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub quick_prompts: Vec<String>,
}

impl Fallback {
    #[must_use]
    pub fn message_for(&self, level: Level) -> &str {
        leveled_text(&self.messages, level)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub fallback: Fallback,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
    #[serde(default)]
    pub routes: Vec<Route>,
    /// Quick prompts offered after platform-info replies.
    #[serde(default)]
    pub info_quick_prompts: Vec<String>,
}

/// Where a chat message was routed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Routed<'a> {
    Scenario {
        scenario: &'a Scenario,
        lead_in: Option<&'a str>,
        upset_alert: Option<bool>,
    },
    Info(&'a str),
    Fallback(&'a Fallback),
}

fn leveled_text(texts: &[String], level: Level) -> &str {
    texts
        .get(usize::from(level.as_u8() - 1))
        .or_else(|| texts.last())
        .map_or("", String::as_str)
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl Catalog {
    /// Read and validate a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`IntelError::CatalogIo`] if the file cannot be read, otherwise
    /// the errors of [`Self::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, IntelError> {
        let raw = std::fs::read_to_string(path).map_err(|source| IntelError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            scenarios = catalog.scenarios.len(),
            routes = catalog.routes.len(),
            "loaded scenario catalog"
        );
        Ok(catalog)
    }

    /// Parse and validate catalog TOML.
    ///
    /// # Errors
    ///
    /// Returns [`IntelError::CatalogParse`] for malformed TOML and
    /// [`IntelError::InvalidCatalog`] if [`Self::validate`] fails.
    pub fn from_toml_str(raw: &str) -> Result<Self, IntelError> {
        let catalog: Self = toml::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check cross-references and required content.
    ///
    /// # Errors
    ///
    /// Returns [`IntelError::InvalidCatalog`] describing the first problem found.
    pub fn validate(&self) -> Result<(), IntelError> {
        let mut keys = HashSet::new();
        for scenario in &self.scenarios {
            if scenario.key.trim().is_empty() {
                return Err(invalid("scenario with empty key"));
            }
            if !keys.insert(scenario.key.as_str()) {
                return Err(invalid(format!("duplicate scenario key '{}'", scenario.key)));
            }
            if scenario.messages.is_empty() {
                return Err(invalid(format!(
                    "scenario '{}' has no messages",
                    scenario.key
                )));
            }
        }

        for (idx, route) in self.routes.iter().enumerate() {
            if route.any.is_empty() && route.all.is_empty() {
                return Err(invalid(format!("route #{idx} has no keywords")));
            }
            if route.any.iter().chain(&route.all).any(|k| k.trim().is_empty()) {
                return Err(invalid(format!("route #{idx} has a blank keyword")));
            }
            match (&route.scenario, &route.reply) {
                (Some(key), None) => {
                    if !keys.contains(key.as_str()) {
                        return Err(invalid(format!(
                            "route #{idx} targets unknown scenario '{key}'"
                        )));
                    }
                }
                (None, Some(_)) => {}
                _ => {
                    return Err(invalid(format!(
                        "route #{idx} must set exactly one of 'scenario' or 'reply'"
                    )));
                }
            }
        }

        if self.fallback.messages.is_empty() {
            return Err(invalid("fallback has no messages"));
        }

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn scenario(&self, key: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.key == key)
    }

    /// Route a chat message. The first matching route wins.
    #[must_use]
    pub fn route(&self, message: &str) -> Routed<'_> {
        let message = message.to_lowercase();
        let Some(route) = self.routes.iter().find(|r| r.matches(&message)) else {
            return Routed::Fallback(&self.fallback);
        };

        if let Some(reply) = &route.reply {
            return Routed::Info(reply);
        }

        // Validation guarantees the target exists; an unvalidated catalog
        // built by hand degrades to the fallback.
        match route.scenario.as_deref().and_then(|key| self.scenario(key)) {
            Some(scenario) => Routed::Scenario {
                scenario,
                lead_in: route.lead_in.as_deref(),
                upset_alert: route.upset_alert,
            },
            None => Routed::Fallback(&self.fallback),
        }
    }
}

fn invalid(reason: impl Into<String>) -> IntelError {
    IntelError::InvalidCatalog(reason.into())
}
