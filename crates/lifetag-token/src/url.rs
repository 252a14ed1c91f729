//! Smart-poster URL assembly and fragment extraction.
//!
//! The payload rides in the URL fragment, which never reaches a server —
//! a phone that scanned the tag can render the data with no network at all.

use lifetag_core::EmergencyData;

use crate::{decode::decode, encode::encode, error::Result};

/// Canonical production base, used when no explicit base is given and no
/// browsing location is available (headless writers, background jobs).
pub const DEFAULT_BASE: &str = "https://lifetag.app";

// ─── Route ───────────────────────────────────────────────────────────────────

/// Which card view the URL opens on the receiving device.
///
/// `Children` is the simplified display mode with offline caching. An enum
/// rather than a flag so call sites stay legible if further view modes
/// appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardRoute {
  #[default]
  Standard,
  Children,
}

impl CardRoute {
  /// Route suffix appended to the derived or fallback base.
  pub fn suffix(self) -> &'static str {
    match self {
      Self::Standard => "/card",
      Self::Children => "/card/children",
    }
  }
}

// ─── Location ────────────────────────────────────────────────────────────────

/// A browsing location, when one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
  /// Scheme and authority, e.g. `https://records.example.org`.
  pub origin: String,
  /// Path of the current document, e.g. `/app/dashboard`.
  pub path:   String,
}

/// Source of the current browsing location.
///
/// The URL builder's only ambient read, injected so it is substitutable in
/// tests. Embedding front ends supply their own implementation; everything
/// else uses [`NoLocation`].
pub trait LocationSource {
  fn location(&self) -> Option<Location>;
}

/// A context with no browsing location (CLI, tests, background jobs).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl LocationSource for NoLocation {
  fn location(&self) -> Option<Location> { None }
}

// ─── URL builder ─────────────────────────────────────────────────────────────

/// Derive a base from a browsing location: drop the last path segment and
/// any trailing slash, then append the route suffix.
fn base_from_location(loc: &Location, route: CardRoute) -> String {
  let path = loc
    .path
    .rsplit_once('/')
    .map(|(head, _)| head)
    .unwrap_or("")
    .trim_end_matches('/');
  format!("{}{}{}", loc.origin, path, route.suffix())
}

/// Build a full URL carrying `data` in its fragment.
///
/// Base precedence: an explicit `base` is used verbatim (the caller owns its
/// route); otherwise a location from `source`, trimmed and suffixed with the
/// `route`; otherwise [`DEFAULT_BASE`] plus the `route` suffix. The encoded
/// token follows a literal `#` with no other separators.
pub fn smart_poster_url(
  data: &EmergencyData,
  base: Option<&str>,
  route: CardRoute,
  source: &impl LocationSource,
) -> Result<String> {
  let token = encode(data)?;
  let base = match base {
    Some(explicit) => explicit.to_string(),
    None => match source.location() {
      Some(loc) => base_from_location(&loc, route),
      None      => format!("{DEFAULT_BASE}{}", route.suffix()),
    },
  };
  Ok(format!("{base}#{token}"))
}

// ─── Fragment reader ─────────────────────────────────────────────────────────

/// The fragment of `url`, without the leading `#`; `None` when absent.
///
/// `None` is the receiver's cue that no offline payload is present and an
/// online fetch is the only option left.
pub fn fragment(url: &str) -> Option<&str> {
  url.split_once('#').map(|(_, frag)| frag)
}

/// Decode the emergency payload carried in `url`'s fragment, if any.
pub fn decode_fragment(url: &str) -> Option<EmergencyData> {
  decode(fragment(url)?)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_helpers::jan_kowalski;

  struct FixedLocation(&'static str, &'static str);

  impl LocationSource for FixedLocation {
    fn location(&self) -> Option<Location> {
      Some(Location {
        origin: self.0.to_string(),
        path:   self.1.to_string(),
      })
    }
  }

  #[test]
  fn explicit_base_is_used_verbatim() {
    let data = jan_kowalski();
    let url = smart_poster_url(
      &data,
      Some("https://records.example.org/card"),
      CardRoute::Standard,
      &NoLocation,
    )
    .unwrap();
    assert!(url.starts_with("https://records.example.org/card#"));
  }

  #[test]
  fn derived_base_trims_the_last_path_segment() {
    let data = jan_kowalski();
    let source = FixedLocation("https://records.example.org", "/app/dashboard");
    let url =
      smart_poster_url(&data, None, CardRoute::Standard, &source).unwrap();
    assert!(
      url.starts_with("https://records.example.org/app/card#"),
      "got: {url}"
    );
  }

  #[test]
  fn derived_base_handles_trailing_slash() {
    let data = jan_kowalski();
    let source = FixedLocation("https://records.example.org", "/app/nfc/");
    let url =
      smart_poster_url(&data, None, CardRoute::Children, &source).unwrap();
    assert!(
      url.starts_with("https://records.example.org/app/nfc/card/children#"),
      "got: {url}"
    );
  }

  #[test]
  fn derived_base_from_root_path() {
    let data = jan_kowalski();
    let source = FixedLocation("https://records.example.org", "/dashboard");
    let url =
      smart_poster_url(&data, None, CardRoute::Standard, &source).unwrap();
    assert!(url.starts_with("https://records.example.org/card#"), "got: {url}");
  }

  #[test]
  fn headless_fallback_uses_the_production_base() {
    let data = jan_kowalski();
    let url =
      smart_poster_url(&data, None, CardRoute::Children, &NoLocation).unwrap();
    assert!(
      url.starts_with("https://lifetag.app/card/children#"),
      "got: {url}"
    );
  }

  #[test]
  fn builder_is_deterministic() {
    let data = jan_kowalski();
    let a = smart_poster_url(&data, Some(DEFAULT_BASE), CardRoute::Standard, &NoLocation);
    let b = smart_poster_url(&data, Some(DEFAULT_BASE), CardRoute::Standard, &NoLocation);
    assert_eq!(a.unwrap(), b.unwrap());
  }

  #[test]
  fn fragment_strips_everything_up_to_the_first_hash() {
    assert_eq!(fragment("https://a.example/card#abc"), Some("abc"));
    assert_eq!(fragment("https://a.example/card"), None);
    assert_eq!(fragment("#abc"), Some("abc"));
    assert_eq!(fragment("a#b#c"), Some("b#c"));
  }

  #[test]
  fn built_url_fragment_decodes_to_the_original_payload() {
    let data = jan_kowalski();
    let url =
      smart_poster_url(&data, None, CardRoute::Children, &NoLocation).unwrap();
    assert_eq!(decode_fragment(&url), Some(data));
  }

  #[test]
  fn url_without_fragment_decodes_to_none() {
    assert_eq!(decode_fragment("https://lifetag.app/card"), None);
  }
}
