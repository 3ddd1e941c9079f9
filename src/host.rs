use crate::config::{ZIF_API_HOST, ZIF_API_HTTPS};

/// Node API overrides: read at runtime on the server, baked in at build time
/// for the browser bundle.
fn api_override(name: &'static str) -> Option<String> {
  #[cfg(feature = "ssr")]
  let value = std::env::var(name).ok();

  #[cfg(not(feature = "ssr"))]
  let value = match name {
    "ZIF_API_HOST" => option_env!("ZIF_API_HOST"),
    "ZIF_API_HTTPS" => option_env!("ZIF_API_HTTPS"),
    _ => None,
  }
  .map(str::to_string);

  value.filter(|v| !v.trim().is_empty())
}

pub fn get_host() -> String {
  resolve_host(api_override("ZIF_API_HOST"))
}

pub fn get_https() -> bool {
  resolve_https(api_override("ZIF_API_HTTPS"))
}

fn resolve_host(value: Option<String>) -> String {
  value.map(|v| v.trim().trim_end_matches('/').to_string()).unwrap_or_else(|| ZIF_API_HOST.into())
}

fn resolve_https(value: Option<String>) -> bool {
  value.as_deref().and_then(parse_flag).unwrap_or(ZIF_API_HTTPS)
}

fn parse_flag(s: &str) -> Option<bool> {
  match s.trim().to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Some(true),
    "0" | "false" | "no" | "off" => Some(false),
    _ => None,
  }
}

pub fn scheme(https: bool) -> &'static str {
  if https {
    "https"
  } else {
    "http"
  }
}

/// Location of one page of the node's popular posts listing.
pub fn popular_url(https: bool, host: &str, page: u32) -> String {
  format!("{}://{}/self/popular/{}/", scheme(https), host, page)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::ZIF_POPULAR_PAGE;

  #[test]
  fn defaults_build_the_local_node_url() {
    assert_eq!(popular_url(ZIF_API_HTTPS, ZIF_API_HOST, ZIF_POPULAR_PAGE), "http://127.0.0.1:8080/self/popular/0/");
  }

  #[test]
  fn popular_url_honours_scheme_host_and_page() {
    assert_eq!(popular_url(true, "zif.example:443", 3), "https://zif.example:443/self/popular/3/");
  }

  #[test]
  fn overrides_fall_back_to_defaults() {
    assert_eq!(resolve_host(None), "127.0.0.1:8080");
    assert_eq!(resolve_host(Some(" node.local:9090/ ".into())), "node.local:9090");
    assert!(!resolve_https(None));
    assert!(resolve_https(Some("yes".into())));
    assert!(!resolve_https(Some("garbage".into())));
  }

  #[test]
  fn flags() {
    assert_eq!(parse_flag("TRUE"), Some(true));
    assert_eq!(parse_flag(" 1 "), Some(true));
    assert_eq!(parse_flag("off"), Some(false));
    assert_eq!(parse_flag("maybe"), None);
  }
}
