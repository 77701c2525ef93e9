//! Registrable (apex) domain resolution
//!
//! Maps a fully-qualified challenge hostname such as
//! `_acme-challenge.www.example.com.cn` to the zone the provider manages
//! (`example.com.cn`) by matching an ordered list of public suffixes.

use crate::error::{ProviderError, Result};

/// Built-in public suffixes, compound suffixes before their simple tails.
///
/// The first matching entry wins, so `.com.cn` must precede `.com` and `.cn`.
pub const DEFAULT_SUFFIXES: &[&str] = &[
    // Compound second-level suffixes
    ".com.cn",
    ".net.cn",
    ".org.cn",
    ".gov.cn",
    ".edu.cn",
    ".ac.cn",
    ".com.hk",
    ".org.hk",
    ".net.hk",
    ".com.tw",
    ".org.tw",
    ".co.uk",
    ".org.uk",
    ".co.jp",
    ".com.au",
    ".net.au",
    ".co.nz",
    ".com.sg",
    // Top-level suffixes
    ".com",
    ".net",
    ".cn",
    ".org",
    ".info",
    ".biz",
    ".top",
    ".xyz",
    ".vip",
    ".club",
    ".site",
    ".online",
    ".tech",
    ".shop",
    ".store",
    ".cloud",
    ".ltd",
    ".wang",
    ".ink",
    ".work",
    ".fun",
    ".xin",
    ".link",
    ".pro",
    ".asia",
    ".io",
    ".co",
    ".me",
    ".cc",
    ".tv",
    ".ai",
    ".dev",
    ".app",
    ".hk",
    ".tw",
    ".jp",
    ".uk",
    ".de",
    ".us",
];

/// Resolves hostnames to their registrable domain.
///
/// The suffix list is fixed at construction.
#[derive(Debug, Clone)]
pub struct DomainResolver {
    suffixes: Vec<String>,
}

impl Default for DomainResolver {
    fn default() -> Self {
        Self::new(DEFAULT_SUFFIXES.iter().copied())
    }
}

impl DomainResolver {
    /// Builds a resolver over `suffixes`, tested in the given order.
    ///
    /// Each suffix is lower-cased and given exactly one leading dot; blank
    /// entries and repeats are dropped.
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for suffix in suffixes {
            let Some(suffix) = normalize_suffix(suffix.as_ref()) else {
                continue;
            };
            if !normalized.contains(&suffix) {
                normalized.push(suffix);
            }
        }
        Self {
            suffixes: normalized,
        }
    }

    /// The built-in list with `extra` suffixes tested first.
    pub fn with_extra_suffixes<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra: Vec<String> = extra.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::new(
            extra
                .iter()
                .map(String::as_str)
                .chain(DEFAULT_SUFFIXES.iter().copied()),
        )
    }

    /// Suffixes in match order.
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Returns the apex domain of `hostname`.
    ///
    /// The first suffix `hostname` ends with is stripped and the label left of
    /// it is joined back to the suffix. Fails with
    /// [`ProviderError::DomainNotFound`] when no suffix matches, no label
    /// precedes the matching suffix, or the result is itself a listed suffix.
    pub fn resolve(&self, hostname: &str) -> Result<String> {
        let host = normalize_hostname(hostname);

        let matched = self
            .suffixes
            .iter()
            .find_map(|suffix| host.strip_suffix(suffix.as_str()).map(|rest| (rest, suffix)));

        match matched {
            Some((rest, suffix)) => {
                let label = rest.rsplit('.').next().unwrap_or_default();
                if label.is_empty() {
                    log::warn!("No label precedes suffix '{suffix}' in '{hostname}'");
                    return Err(ProviderError::DomainNotFound {
                        domain: hostname.to_string(),
                    });
                }
                let apex = format!("{label}{suffix}");
                if self.suffixes.iter().any(|s| s.strip_prefix('.') == Some(apex.as_str())) {
                    log::warn!("Zone '{apex}' derived from '{hostname}' is a public suffix");
                    return Err(ProviderError::DomainNotFound {
                        domain: hostname.to_string(),
                    });
                }
                log::debug!("Resolved '{hostname}' to zone '{apex}'");
                Ok(apex)
            }
            None => Err(ProviderError::DomainNotFound {
                domain: hostname.to_string(),
            }),
        }
    }
}

fn normalize_suffix(suffix: &str) -> Option<String> {
    let trimmed = suffix.trim().trim_matches('.');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!(".{}", trimmed.to_ascii_lowercase()))
    }
}

fn normalize_hostname(hostname: &str) -> String {
    hostname.trim().trim_end_matches('.').to_ascii_lowercase()
}
