//! Map link construction for external viewers.
//!
//! The catalog itself never talks to a browser; it only exposes the URL a
//! host environment can hand to its default URL handler.

use url::Url;

use crate::models::Coordinate;

const GOOGLE_MAPS_BASE: &str = "http://maps.google.com/maps";

/// Google Maps URL pointing at the coordinate, in decimal degrees.
pub fn google_maps_url(location: &Coordinate) -> Url {
    let (lat, lon) = location.as_degrees();
    let raw = format!("{GOOGLE_MAPS_BASE}?q={lat},{lon}");
    // Formatted floats always yield a parseable URL.
    Url::parse(&raw).expect("maps URL is well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_uses_degree_pair() {
        let coord = Coordinate::from_degrees(41.8781, -87.6298);
        let (lat, lon) = coord.as_degrees();

        let url = google_maps_url(&coord);
        assert_eq!(url.host_str(), Some("maps.google.com"));
        assert_eq!(url.path(), "/maps");

        let expected = format!("q={lat},{lon}");
        assert_eq!(url.query(), Some(expected.as_str()));
    }
}
