//! # certbot-dns-qcloud
//!
//! DNS-01 authenticator for certbot backed by Tencent Cloud `DNSPod`.
//!
//! [`ChallengeAuthenticator::perform`] creates `_acme-challenge.<domain>` TXT
//! records and [`ChallengeAuthenticator::cleanup`] removes them. The
//! `certbot-dns-qcloud` binary exposes both as certbot manual hooks:
//!
//! ```bash
//! certbot certonly --manual --preferred-challenges dns \
//!     --manual-auth-hook "certbot-dns-qcloud --credentials /etc/letsencrypt/qcloud.json auth" \
//!     --manual-cleanup-hook "certbot-dns-qcloud --credentials /etc/letsencrypt/qcloud.json cleanup" \
//!     -d example.com
//! ```

mod authenticator;
mod config;

pub use authenticator::{
    CHALLENGE_LABEL, ChallengeAuthenticator, ChallengeRequest, DESCRIPTION, MORE_INFO,
};
pub use config::{AuthenticatorConfig, DEFAULT_PROPAGATION_SECONDS};

pub use certbot_dns_qcloud_provider::{ProviderError, Result};
