//! System browser launcher

use wpdesk_navigation::{ExternalOpener, NavigationError};

/// Opens URLs with the platform's default handler without waiting on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl ExternalOpener for SystemOpener {
    fn open(&self, url: &str) -> wpdesk_navigation::Result<()> {
        open::that_detached(url).map_err(|e| open_error(url, e))
    }
}

fn open_error(url: &str, e: std::io::Error) -> NavigationError {
    NavigationError::Open(format!("{url}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_names_url() {
        let err = open_error(
            "https://wordpress.com/me",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no handler"),
        );
        assert!(matches!(err, NavigationError::Open(_)));
        assert_eq!(
            err.to_string(),
            "Failed to open external browser: https://wordpress.com/me: no handler"
        );
    }
}
