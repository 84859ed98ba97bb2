//! Well-known setting keys

/// Path the main site view restores to on launch, e.g. `/stats/day/example.com`.
pub const LAST_LOCATION: &str = "last_location";

/// Build the `last_location` value pointing at a site's stats page.
pub fn stats_location(host: &str) -> String {
    format!("/stats/day/{host}")
}
