//! Parsed navigation targets

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::NavigationError;
use crate::Result;

/// A URL raised by a navigation event, parsed once per event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    url: Url,
}

impl NavigationTarget {
    pub fn parse(raw: &str) -> Result<Self> {
        Url::parse(raw)
            .map(|url| Self { url })
            .map_err(|e| NavigationError::InvalidUrl(format!("{raw}: {e}")))
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Hostname without the port.
    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }

    pub fn port(&self) -> Option<u16> {
        self.url.port()
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn query(&self) -> Option<&str> {
        self.url.query()
    }

    /// First value of a query parameter, decoded.
    pub fn query_param(&self, name: &str) -> Option<Cow<'_, str>> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Serialized origin, e.g. `https://example.com:8080`.
    pub fn origin(&self) -> String {
        self.url.origin().ascii_serialization()
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Copy of this target pointing at `host` with the port cleared.
    pub fn with_host(&self, host: &str) -> Result<Self> {
        let mut url = self.url.clone();
        url.set_host(Some(host))
            .map_err(|e| NavigationError::Rewrite(format!("{host}: {e}")))?;
        url.set_port(None)
            .map_err(|_| NavigationError::Rewrite(format!("{} has no port", url)))?;
        Ok(Self { url })
    }
}

impl FromStr for NavigationTarget {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}
