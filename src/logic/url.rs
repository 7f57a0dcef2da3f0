//! URL validation
//!
//! Splits a url into scheme / network location / path the way a generic url
//! splitter does, and provides the validators registered for the "url" field.

use crate::error::ValidationError;

pub const DEFAULT_SCHEMES: [&str; 2] = ["http", "https"];

/// Components of a split url
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts<'a> {
    /// Lowercased scheme, empty if absent
    pub scheme: String,
    pub netloc: &'a str,
    pub path: &'a str,
    pub query: &'a str,
    pub fragment: &'a str,
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Split `url` without requiring any component
pub fn split_url(url: &str) -> Result<UrlParts<'_>, ValidationError> {
    let trimmed = url.trim_matches(|c: char| c.is_ascii_control() || c == ' ');

    let (scheme, rest) = match trimmed.find(':') {
        Some(i) if i > 0 && is_scheme(&trimmed[..i]) => {
            (trimmed[..i].to_lowercase(), &trimmed[i + 1..])
        }
        _ => (String::new(), trimmed),
    };

    let (netloc, rest) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            (&after[..end], &after[end..])
        }
        None => ("", rest),
    };

    if netloc.contains('[') != netloc.contains(']') {
        return Err(ValidationError::new(format!("{} is not a valid URL.", url)));
    }

    let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

    Ok(UrlParts {
        scheme,
        netloc,
        path,
        query,
        fragment,
    })
}

/// Split `url`, requiring a scheme and a network location
///
/// # Examples
/// ```
/// use tiledbrowse::logic::url::urlparse;
///
/// let parts = urlparse("https://tiled.example.com:8000/api/v1").unwrap();
/// assert_eq!(parts.scheme, "https");
/// assert_eq!(parts.netloc, "tiled.example.com:8000");
/// assert_eq!(parts.path, "/api/v1");
///
/// assert!(urlparse("Not a URL").is_err());
/// ```
pub fn urlparse(url: &str) -> Result<UrlParts<'_>, ValidationError> {
    let parts = split_url(url)?;

    if parts.scheme.is_empty() {
        return Err(ValidationError::new(format!(
            "{} is not a valid URL. URL must include a scheme.",
            url
        )));
    }

    if parts.netloc.is_empty() {
        return Err(ValidationError::new(format!(
            "{} is not a valid URL. URL must include a network location.",
            url
        )));
    }

    Ok(parts)
}

/// Verify that `url` parses as an absolute url
pub fn validate_url_syntax(url: &str) -> Result<(), ValidationError> {
    urlparse(url).map(|_| ())
}

/// Verify that the scheme of `url` is one of `valid_schemes`
pub fn validate_url_scheme<S: AsRef<str>>(
    url: &str,
    valid_schemes: &[S],
) -> Result<(), ValidationError> {
    let parts = urlparse(url)?;

    if valid_schemes.iter().any(|s| s.as_ref() == parts.scheme) {
        return Ok(());
    }

    let schemes: Vec<&str> = valid_schemes.iter().map(|s| s.as_ref()).collect();
    Err(ValidationError::new(format!(
        "{} is not a valid Tiled URL. URL must start with {}.",
        url,
        schemes.join(" or ")
    )))
}
