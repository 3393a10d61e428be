//! Search URL composition.
//!
//! The target site is addressed purely by path segments, appended in a fixed
//! order: base, pickup location, optional drop-off location, pickup date,
//! optional drop-off date. Empty optional segments are omitted together with
//! their separator, so the path never contains a double slash.
//!
//! Segments are appended raw. The target site tolerates unencoded spaces in
//! path segments, so no percent-encoding is applied.

/// Compose the outbound search URL. `base_url` is expected to end with `/`.
pub fn build_search_url(
    base_url: &str,
    pickup_location: &str,
    drop_off_location: &str,
    pickup_date: &str,
    drop_off_date: &str,
) -> String {
    let mut url = format!("{base_url}{pickup_location}/");
    if !drop_off_location.is_empty() {
        url.push_str(drop_off_location);
        url.push('/');
    }
    url.push_str(pickup_date);
    url.push('/');
    if !drop_off_date.is_empty() {
        url.push_str(drop_off_date);
    }
    url
}
