//! Navigation policy for the embedded site view
//!
//! Each handler looks at one event in isolation and returns a [`Decision`]:
//!
//! - `will-navigate`: wp-login reauth overrides are dropped, allow-listed
//!   pages stay in the app, everything else goes to the system browser.
//! - `new-window`: allow-listed pages get a smaller, offset app window, the
//!   rest go to the system browser with internal hosts made public.
//! - `will-redirect`: wp-login reauth redirects prompt the user, anything
//!   else proceeds.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::decision::{Decision, LoginPrompt, WindowGeometry};
use crate::rules::RuleSet;
use crate::target::NavigationTarget;
use crate::Result;

const LOGIN_PATH_MARKER: &str = "wp-login.php";
const REAUTH_PARAM: &str = "reauth";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Host of the bundled Calypso server
    pub server_host: String,
    pub server_port: u16,
    /// Host that replaces `server_host` before a URL leaves the app
    pub public_host: String,
    /// Pages that never leave the embedded view
    pub always_open_in_app: Vec<String>,
    /// Pages that open as a new app window instead of the system browser
    pub never_open_in_browser: Vec<String>,
}

impl NavigationConfig {
    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        let server_host = "127.0.0.1".to_string();
        let server_port = 41050;
        let server_url = format!("http://{server_host}:{server_port}");

        Self {
            always_open_in_app: vec![
                format!("http://{server_host}"),
                "http://localhost".to_string(),
                "http://calypso.localhost:3000/*".to_string(),
                "https://public-api.wordpress.com".to_string(),
                "https://wordpress.com/wp-login.php".to_string(),
                format!("{server_url}/*"),
            ],
            never_open_in_browser: vec![
                server_url,
                "https://public-api.wordpress.com/connect/".to_string(),
            ],
            server_host,
            server_port,
            public_host: "wordpress.com".to_string(),
        }
    }
}

/// Returns `url` when it may be handed to the system browser (http or https only).
pub fn is_openably_valid(url: &str) -> Option<&str> {
    let parsed = Url::parse(url).ok()?;
    match parsed.scheme() {
        "http" | "https" => Some(url),
        _ => None,
    }
}

/// A wp-login page carrying a non-empty `reauth` flag.
pub fn is_login_redirect(target: &NavigationTarget) -> bool {
    target.path().contains(LOGIN_PATH_MARKER)
        && target
            .query_param(REAUTH_PARAM)
            .is_some_and(|value| !value.is_empty())
}

pub struct NavigationPolicy {
    internal_host: String,
    public_host: String,
    always_open_in_app: RuleSet,
    never_open_in_browser: RuleSet,
}

impl NavigationPolicy {
    pub fn new(config: &NavigationConfig) -> Result<Self> {
        let policy = Self {
            internal_host: config.server_host.clone(),
            public_host: config.public_host.clone(),
            always_open_in_app: RuleSet::from_patterns(&config.always_open_in_app)?,
            never_open_in_browser: RuleSet::from_patterns(&config.never_open_in_browser)?,
        };

        tracing::debug!(
            always_open_in_app = policy.always_open_in_app.len(),
            never_open_in_browser = policy.never_open_in_browser.len(),
            "Navigation rules loaded"
        );

        Ok(policy)
    }

    pub fn always_open_in_app(&self) -> &RuleSet {
        &self.always_open_in_app
    }

    pub fn never_open_in_browser(&self) -> &RuleSet {
        &self.never_open_in_browser
    }

    pub fn will_navigate(&self, url: &str) -> Result<Decision> {
        let target = NavigationTarget::parse(url)?;

        // Calypso replaces window.location with wp-login when a session needs
        // reauth; following it would strand the user on a login form.
        if is_login_redirect(&target) {
            tracing::info!(
                origin = %target.origin(),
                path = target.path(),
                "Ignoring window location override"
            );
            return Ok(Decision::Suppress);
        }

        if self.always_open_in_app.any_match(&target) {
            return Ok(Decision::Allow);
        }

        Ok(Decision::OpenExternal(url.to_string()))
    }

    pub fn new_window(&self, url: &str, proposed: WindowGeometry) -> Result<Decision> {
        let target = NavigationTarget::parse(url)?;

        if self.never_open_in_browser.any_match(&target) {
            tracing::info!(url = %url, "Open in new window");
            return Ok(Decision::OpenInNewAppWindow(proposed.offset_and_scale()));
        }

        // The in-app window is never created here. If the internal host can't
        // be swapped out the URL must not reach the browser either.
        match self.rewrite_if_internal(target) {
            Ok(target) => Ok(Decision::OpenExternal(target.to_string())),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Dropping new window request");
                Ok(Decision::Suppress)
            }
        }
    }

    pub fn will_redirect(&self, url: &str) -> Result<Decision> {
        let target = NavigationTarget::parse(url)?;

        if !is_login_redirect(&target) {
            return Ok(Decision::Allow);
        }

        tracing::info!(origin = %target.origin(), "Login redirect requires Jetpack SSO");
        Ok(Decision::PromptUser(LoginPrompt {
            url: url.to_string(),
            host: target.host().unwrap_or_default().to_string(),
            origin: target.origin(),
        }))
    }

    /// Swap the internal server host for the public one so the system
    /// browser never sees the bundled server's address.
    pub fn rewrite_if_internal(&self, target: NavigationTarget) -> Result<NavigationTarget> {
        if target.host() != Some(self.internal_host.as_str()) {
            return Ok(target);
        }

        tracing::info!(
            from = %self.internal_host,
            to = %self.public_host,
            "Replacing internal url with public url"
        );
        target.with_host(&self.public_host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> NavigationPolicy {
        NavigationPolicy::new(&NavigationConfig::default()).unwrap()
    }

    fn target(url: &str) -> NavigationTarget {
        NavigationTarget::parse(url).unwrap()
    }

    const GEOMETRY: WindowGeometry = WindowGeometry {
        x: 0.0,
        y: 0.0,
        width: 1200.0,
        height: 800.0,
    };

    #[test]
    fn test_openably_valid() {
        assert_eq!(
            is_openably_valid("https://example.com/a"),
            Some("https://example.com/a")
        );
        assert_eq!(is_openably_valid("http://example.com"), Some("http://example.com"));
        assert_eq!(is_openably_valid("wpdesktop://open"), None);
        assert_eq!(is_openably_valid("file:///etc/passwd"), None);
        assert_eq!(is_openably_valid("mailto:someone@example.com"), None);
        assert_eq!(is_openably_valid("example.com/no-scheme"), None);
        assert_eq!(is_openably_valid(""), None);
    }

    #[test]
    fn test_login_redirect_detection() {
        assert!(is_login_redirect(&target(
            "https://wordpress.com/wp-login.php?reauth=1"
        )));
        assert!(is_login_redirect(&target(
            "https://site.example/blog/wp-login.php?redirect_to=x&reauth=yes"
        )));
        assert!(!is_login_redirect(&target("https://wordpress.com/wp-login.php")));
        assert!(!is_login_redirect(&target(
            "https://wordpress.com/wp-login.php?reauth="
        )));
        assert!(!is_login_redirect(&target("https://wordpress.com/login?reauth=1")));
    }

    #[test]
    fn test_default_config_rules_parse() {
        let policy = policy();
        assert_eq!(policy.always_open_in_app().len(), 6);
        assert_eq!(policy.never_open_in_browser().len(), 2);
        assert_eq!(NavigationConfig::default().server_url(), "http://127.0.0.1:41050");
    }

    #[test]
    fn test_invalid_rule_rejected() {
        let config = NavigationConfig {
            always_open_in_app: vec!["not a url".to_string()],
            ..NavigationConfig::default()
        };
        assert!(NavigationPolicy::new(&config).is_err());
    }

    #[test]
    fn test_will_navigate_allow_listed() {
        let policy = policy();
        assert_eq!(
            policy.will_navigate("http://calypso.localhost:3000/").unwrap(),
            Decision::Allow
        );
        assert_eq!(
            policy.will_navigate("http://127.0.0.1:41050/stats/day").unwrap(),
            Decision::Allow
        );
        assert_eq!(
            policy.will_navigate("https://wordpress.com/wp-login.php").unwrap(),
            Decision::Allow
        );
    }

    #[test]
    fn test_will_navigate_login_override_suppressed() {
        let policy = policy();
        assert_eq!(
            policy
                .will_navigate("https://wordpress.com/wp-login.php?reauth=1")
                .unwrap(),
            Decision::Suppress
        );
        assert_eq!(
            policy
                .will_navigate("https://jetpack.example/wp-login.php?reauth=1")
                .unwrap(),
            Decision::Suppress
        );
    }

    #[test]
    fn test_will_navigate_external() {
        let policy = policy();
        assert_eq!(
            policy.will_navigate("https://example.com/post").unwrap(),
            Decision::OpenExternal("https://example.com/post".to_string())
        );
        // exact rules don't extend to sub-paths
        assert_eq!(
            policy.will_navigate("http://localhost/wp-admin").unwrap(),
            Decision::OpenExternal("http://localhost/wp-admin".to_string())
        );
    }

    #[test]
    fn test_will_navigate_invalid_url() {
        assert!(policy().will_navigate("::not-a-url").is_err());
    }

    #[test]
    fn test_new_window_in_app() {
        let decision = policy()
            .new_window("https://public-api.wordpress.com/connect/?client_id=1", GEOMETRY)
            .unwrap();
        match decision {
            Decision::OpenInNewAppWindow(g) => {
                assert!((g.x - 50.0).abs() < 1e-9);
                assert!((g.y - 50.0).abs() < 1e-9);
                assert!((g.width - 1080.0).abs() < 1e-9);
                assert!((g.height - 720.0).abs() < 1e-9);
            }
            other => panic!("Expected OpenInNewAppWindow, got {other:?}"),
        }
    }

    #[test]
    fn test_new_window_internal_host_rewritten() {
        let decision = policy()
            .new_window("http://127.0.0.1:41050/me/purchases", GEOMETRY)
            .unwrap();
        assert_eq!(
            decision,
            Decision::OpenExternal("http://wordpress.com/me/purchases".to_string())
        );
    }

    #[test]
    fn test_new_window_external_untouched() {
        let decision = policy()
            .new_window("https://example.com:8080/a?b=c", GEOMETRY)
            .unwrap();
        assert_eq!(
            decision,
            Decision::OpenExternal("https://example.com:8080/a?b=c".to_string())
        );
    }

    #[test]
    fn test_new_window_unrewritable_internal_url_suppressed() {
        // file URLs can't drop their port, so the rewrite fails
        let decision = policy()
            .new_window("file://127.0.0.1/etc/passwd", GEOMETRY)
            .unwrap();
        assert_eq!(decision, Decision::Suppress);
    }

    #[test]
    fn test_will_redirect() {
        let policy = policy();
        match policy
            .will_redirect("https://wordpress.com/wp-login.php?reauth=1")
            .unwrap()
        {
            Decision::PromptUser(prompt) => {
                assert_eq!(prompt.url, "https://wordpress.com/wp-login.php?reauth=1");
                assert_eq!(prompt.host, "wordpress.com");
                assert_eq!(prompt.origin, "https://wordpress.com");
            }
            other => panic!("Expected PromptUser, got {other:?}"),
        }

        assert_eq!(
            policy.will_redirect("https://example.com/landing").unwrap(),
            Decision::Allow
        );
    }

    #[test]
    fn test_rewrite_keeps_other_hosts() {
        let policy = policy();
        let original = target("https://example.com:9000/x");
        let rewritten = policy.rewrite_if_internal(original.clone()).unwrap();
        assert_eq!(rewritten, original);
    }
}
