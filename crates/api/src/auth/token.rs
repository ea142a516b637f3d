//! Identity-token verification.
//!
//! Tokens are issued by an external identity provider. We only verify them:
//! signature, expiry and (when configured) issuer and audience. The `sub`
//! claim is the provider's stable user identifier; `email` is used when a
//! local user record has to be created for a first-time identity.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims read from an identity token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the identity provider's user id.
    pub sub: String,
    /// Email address of the identity, required to provision a local user.
    #[serde(default)]
    pub email: Option<String>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    #[serde(default)]
    pub iat: Option<i64>,
    /// Issuer, checked against [`AuthConfig::issuer`] when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Unique token identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

/// Key material used to verify token signatures.
#[derive(Debug, Clone)]
pub enum TokenKey {
    /// HS256 shared secret.
    Secret(String),
    /// RS256 public key in PEM form.
    RsaPublicKeyPem(String),
}

/// Configuration for identity-token verification.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub key: TokenKey,
    /// Expected `iss` claim. Not checked when `None`.
    pub issuer: Option<String>,
    /// Expected `aud` claim. Not checked when `None`.
    pub audience: Option<String>,
}

impl AuthConfig {
    /// Load token verification settings from environment variables.
    ///
    /// | Env Var                   | Required                   | Default |
    /// |---------------------------|----------------------------|---------|
    /// | `AUTH_JWT_SECRET`         | one of secret / public key | --      |
    /// | `AUTH_JWT_PUBLIC_KEY_PEM` | one of secret / public key | --      |
    /// | `AUTH_JWT_ISSUER`         | no                         | unset   |
    /// | `AUTH_JWT_AUDIENCE`       | no                         | unset   |
    ///
    /// A public key wins over a secret when both are set. Literal `\n`
    /// sequences in the PEM are turned into newlines so the key fits on one
    /// line of a `.env` file.
    ///
    /// # Panics
    ///
    /// Panics if neither key is set or the PEM cannot be parsed.
    pub fn from_env() -> Self {
        let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        let key = if let Some(pem) = non_empty("AUTH_JWT_PUBLIC_KEY_PEM") {
            let pem = pem.replace("\\n", "\n");
            DecodingKey::from_rsa_pem(pem.as_bytes())
                .unwrap_or_else(|e| panic!("AUTH_JWT_PUBLIC_KEY_PEM is not a valid RSA key: {e}"));
            TokenKey::RsaPublicKeyPem(pem)
        } else if let Some(secret) = non_empty("AUTH_JWT_SECRET") {
            TokenKey::Secret(secret)
        } else {
            panic!("AUTH_JWT_SECRET or AUTH_JWT_PUBLIC_KEY_PEM must be set in the environment");
        };

        Self {
            key,
            issuer: non_empty("AUTH_JWT_ISSUER"),
            audience: non_empty("AUTH_JWT_AUDIENCE"),
        }
    }

    fn decoding_key(&self) -> Result<(DecodingKey, Algorithm), jsonwebtoken::errors::Error> {
        match &self.key {
            TokenKey::Secret(secret) => {
                Ok((DecodingKey::from_secret(secret.as_bytes()), Algorithm::HS256))
            }
            TokenKey::RsaPublicKeyPem(pem) => {
                Ok((DecodingKey::from_rsa_pem(pem.as_bytes())?, Algorithm::RS256))
            }
        }
    }
}

/// Validate and decode an identity token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration, plus issuer and audience when the
/// configuration names them.
pub fn verify_token(token: &str, config: &AuthConfig) -> Result<Claims, jsonwebtoken::errors::Error> {
    let (key, algorithm) = config.decoding_key()?;

    let mut validation = Validation::new(algorithm);
    if let Some(issuer) = &config.issuer {
        validation.set_issuer(&[issuer]);
    }
    match &config.audience {
        Some(audience) => validation.set_audience(&[audience]),
        None => validation.validate_aud = false,
    }

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

/// Issue an HS256 identity token signed with `secret`.
///
/// Meant for local development and tests; production tokens come from the
/// identity provider.
pub fn generate_token(
    sub: &str,
    email: &str,
    secret: &str,
    ttl_secs: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        email: Some(email.to_string()),
        exp: now + ttl_secs,
        iat: Some(now),
        iss: None,
        jti: Some(Uuid::new_v4().to_string()),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}
