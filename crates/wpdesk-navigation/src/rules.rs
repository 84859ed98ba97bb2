//! Host + path match rules
//!
//! A rule matches a target when the hostnames are equal and either the paths
//! are equal or the rule path is the `/*` wildcard. Scheme and port are not
//! compared: the same page is often reached over both http and https while
//! redirecting.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::NavigationError;
use crate::target::NavigationTarget;
use crate::Result;

/// Path matching every page under a host.
pub const WILDCARD_PATH: &str = "/*";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRule {
    host: String,
    path: String,
}

impl MatchRule {
    pub fn new(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            path: path.into(),
        }
    }

    /// Build a rule from a URL pattern such as `http://calypso.localhost:3000/*`.
    pub fn parse(pattern: &str) -> Result<Self> {
        let url = Url::parse(pattern)
            .map_err(|e| NavigationError::InvalidRule(format!("{pattern}: {e}")))?;
        let host = url
            .host_str()
            .ok_or_else(|| NavigationError::InvalidRule(format!("{pattern}: missing host")))?;

        Ok(Self::new(host, url.path()))
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_wildcard(&self) -> bool {
        self.path == WILDCARD_PATH || self.path == "*"
    }

    pub fn matches(&self, target: &NavigationTarget) -> bool {
        target.host() == Some(self.host.as_str())
            && (self.is_wildcard() || target.path() == self.path)
    }
}

/// Ordered, immutable list of rules. Only existence of a match matters.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<MatchRule>,
}

impl RuleSet {
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = patterns
            .into_iter()
            .map(|p| MatchRule::parse(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn any_match(&self, target: &NavigationTarget) -> bool {
        self.rules.iter().any(|rule| rule.matches(target))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
