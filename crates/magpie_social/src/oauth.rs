//! OAuth 1.0a request signing (HMAC-SHA1).
//!
//! The X API v2 tweet-creation endpoint requires OAuth 1.0a user context.
//! Signing follows RFC 5849: percent-encode and sort all protocol and
//! request parameters, build the signature base string from the method,
//! base URL, and parameter string, then HMAC-SHA1 with the concatenated
//! consumer and token secrets.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rand::Rng;
use rand::distributions::Alphanumeric;
use sha1::Sha1;

/// RFC 3986 unreserved characters pass through; everything else is encoded.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// The OAuth 1.0a key material for one user context.
#[derive(Debug, Clone)]
pub struct OauthToken {
    /// Consumer (application) key
    pub consumer_key: String,
    /// Consumer (application) secret
    pub consumer_secret: String,
    /// User access token
    pub access_token: String,
    /// User access token secret
    pub access_secret: String,
}

impl OauthToken {
    /// Build the `Authorization: OAuth ...` header value for one request.
    ///
    /// `extra_params` carries query-string and form-body parameters that
    /// participate in the signature. JSON request bodies contribute none.
    pub fn authorization_header(
        &self,
        method: &str,
        url: &str,
        extra_params: &[(String, String)],
    ) -> String {
        let nonce: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        let timestamp = chrono::Utc::now().timestamp().to_string();
        self.authorization_header_at(method, url, extra_params, &nonce, &timestamp)
    }

    /// Deterministic form of [`Self::authorization_header`] with the nonce
    /// and timestamp supplied by the caller.
    pub fn authorization_header_at(
        &self,
        method: &str,
        url: &str,
        extra_params: &[(String, String)],
        nonce: &str,
        timestamp: &str,
    ) -> String {
        let oauth_params = self.oauth_params(nonce, timestamp);
        let signature = self.sign(method, url, extra_params, &oauth_params);

        // Header parameters are the protocol parameters plus the signature,
        // in sorted key order.
        let mut header_params: Vec<(String, String)> = oauth_params;
        header_params.push(("oauth_signature".to_string(), signature));
        header_params.sort();

        let fields: Vec<String> = header_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect();

        format!("OAuth {}", fields.join(", "))
    }

    /// The seven protocol parameters, before signing.
    fn oauth_params(&self, nonce: &str, timestamp: &str) -> Vec<(String, String)> {
        vec![
            ("oauth_consumer_key".to_string(), self.consumer_key.clone()),
            ("oauth_nonce".to_string(), nonce.to_string()),
            ("oauth_signature_method".to_string(), "HMAC-SHA1".to_string()),
            ("oauth_timestamp".to_string(), timestamp.to_string()),
            ("oauth_token".to_string(), self.access_token.clone()),
            ("oauth_version".to_string(), "1.0".to_string()),
        ]
    }

    /// Compute the base64 HMAC-SHA1 signature for one request.
    fn sign(
        &self,
        method: &str,
        url: &str,
        extra_params: &[(String, String)],
        oauth_params: &[(String, String)],
    ) -> String {
        // Percent-encode every key and value, then sort by encoded form.
        let mut encoded: Vec<(String, String)> = extra_params
            .iter()
            .chain(oauth_params.iter())
            .map(|(k, v)| (percent_encode(k), percent_encode(v)))
            .collect();
        encoded.sort();

        let param_string = encoded
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");

        let base_string = format!(
            "{}&{}&{}",
            method.to_uppercase(),
            percent_encode(url),
            percent_encode(&param_string)
        );

        let signing_key = format!(
            "{}&{}",
            percent_encode(&self.consumer_secret),
            percent_encode(&self.access_secret)
        );

        let mut mac = Hmac::<Sha1>::new_from_slice(signing_key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(base_string.as_bytes());
        BASE64.encode(mac.finalize().into_bytes())
    }
}

/// Percent-encode per the OAuth 1.0a rules.
fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, OAUTH_ENCODE_SET).to_string()
}
