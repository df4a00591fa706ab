//! Bearer-token authentication and declarative role policy.
//!
//! The policy table maps `resource × verb → allowed roles` and is consulted
//! by a single middleware ([`authorize`]) mounted in front of every service
//! router. Handlers carry no role checks of their own.

use crate::api::ApiError;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::sync::Arc;

/// API path prefix under which resources are resolved
pub const API_PREFIX: &str = "/api/v1/";

/// Coarse action class derived from the HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Read,
    Write,
    Delete,
}

impl Verb {
    pub fn from_method(method: &Method) -> Option<Self> {
        match *method {
            Method::GET | Method::HEAD => Some(Self::Read),
            Method::POST | Method::PUT | Method::PATCH => Some(Self::Write),
            Method::DELETE => Some(Self::Delete),
            _ => None,
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Delete => "delete",
        };
        f.write_str(s)
    }
}

/// One row of the policy table. `resource = "*"` matches any resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyRule {
    pub resource: String,
    pub verbs: Vec<Verb>,
    pub roles: Vec<String>,
}

impl PolicyRule {
    pub fn new(resource: &str, verbs: &[Verb], roles: &[&str]) -> Self {
        Self {
            resource: resource.to_string(),
            verbs: verbs.to_vec(),
            roles: roles.iter().map(|r| normalize_role(r)).collect(),
        }
    }
}

/// Resolved policy table
#[derive(Debug, Clone)]
pub struct PolicyTable {
    rules: Vec<PolicyRule>,
}

impl PolicyTable {
    pub fn new(rules: Vec<PolicyRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|mut rule| {
                rule.roles = rule.roles.iter().map(|r| normalize_role(r)).collect();
                rule
            })
            .collect();
        Self { rules }
    }

    /// Read is broad, write is elevated, delete is the most restrictive.
    /// User administration is admin-only.
    pub fn default_rules() -> Vec<PolicyRule> {
        vec![
            PolicyRule::new(
                "users",
                &[Verb::Read, Verb::Write, Verb::Delete],
                &["ADMIN"],
            ),
            PolicyRule::new("*", &[Verb::Read], &["ADMIN", "LAWYER", "ASSISTANT"]),
            PolicyRule::new("*", &[Verb::Write], &["ADMIN", "LAWYER"]),
            PolicyRule::new("*", &[Verb::Delete], &["ADMIN"]),
        ]
    }

    /// Roles allowed for `verb` on `resource`. A rule naming the resource
    /// exactly wins over a wildcard rule. `None` means no rule applies.
    pub fn allowed_roles(&self, resource: &str, verb: Verb) -> Option<&[String]> {
        let matches = |rule: &&PolicyRule, wildcard: bool| {
            let resource_ok = if wildcard {
                rule.resource == "*"
            } else {
                rule.resource == resource
            };
            resource_ok && rule.verbs.contains(&verb)
        };

        self.rules
            .iter()
            .find(|rule| matches(rule, false))
            .or_else(|| self.rules.iter().find(|rule| matches(rule, true)))
            .map(|rule| rule.roles.as_slice())
    }

    pub fn is_allowed(&self, resource: &str, verb: Verb, roles: &BTreeSet<String>) -> bool {
        self.allowed_roles(resource, verb)
            .is_some_and(|allowed| allowed.iter().any(|role| roles.contains(role)))
    }
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self::new(Self::default_rules())
    }
}

/// `Admin`, `admin` and `ROLE_ADMIN` all name the same role
pub fn normalize_role(role: &str) -> String {
    let upper = role.trim().to_uppercase();
    upper
        .strip_prefix("ROLE_")
        .map(str::to_string)
        .unwrap_or(upper)
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// When false every request passes without a token
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Shared secret for HS256 tokens
    #[serde(default)]
    pub jwt_secret: Option<String>,

    /// PEM public key for RS256 tokens (takes precedence over the secret)
    #[serde(default)]
    pub jwt_public_key_pem: Option<String>,

    #[serde(default)]
    pub issuer: Option<String>,

    #[serde(default)]
    pub audience: Option<String>,

    #[serde(default = "default_leeway_seconds")]
    pub leeway_seconds: u64,

    /// Path prefixes reachable without a token
    #[serde(default = "default_public_paths")]
    pub public_paths: Vec<String>,

    #[serde(default = "PolicyTable::default_rules")]
    pub policy: Vec<PolicyRule>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            jwt_secret: None,
            jwt_public_key_pem: None,
            issuer: None,
            audience: None,
            leeway_seconds: default_leeway_seconds(),
            public_paths: default_public_paths(),
            policy: PolicyTable::default_rules(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_leeway_seconds() -> u64 {
    60
}

fn default_public_paths() -> Vec<String> {
    vec!["/health".to_string(), "/api-docs".to_string()]
}

/// Authentication / authorization failures
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,
    #[error("invalid token: {0}")]
    InvalidToken(String),
    #[error("role required for {verb} on '{resource}'")]
    Forbidden { resource: String, verb: Verb },
    #[error("auth misconfigured: {0}")]
    Misconfigured(String),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken => ApiError::unauthorized("Authentication required"),
            AuthError::InvalidToken(reason) => {
                tracing::debug!(%reason, "rejected bearer token");
                ApiError::unauthorized("Invalid or expired token")
            }
            AuthError::Forbidden { resource, verb } => ApiError::forbidden(format!(
                "Insufficient role for {} access to '{}'",
                verb, resource
            )),
            AuthError::Misconfigured(reason) => {
                tracing::error!(%reason, "authentication is misconfigured");
                ApiError::internal()
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RealmAccess {
    #[serde(default)]
    roles: Vec<String>,
}

/// Token claims; roles may come from `roles` or Keycloak's `realm_access`
#[derive(Debug, Clone, Deserialize)]
struct TokenClaims {
    sub: String,
    #[serde(default)]
    preferred_username: Option<String>,
    #[serde(default)]
    roles: Vec<String>,
    #[serde(default)]
    realm_access: Option<RealmAccess>,
}

/// Authenticated caller, inserted into request extensions by [`authorize`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub subject: String,
    pub username: Option<String>,
    pub roles: BTreeSet<String>,
}

impl From<TokenClaims> for Principal {
    fn from(claims: TokenClaims) -> Self {
        let realm_roles = claims.realm_access.unwrap_or_default().roles;
        let roles = claims
            .roles
            .iter()
            .chain(realm_roles.iter())
            .map(|r| normalize_role(r))
            .collect();
        Self {
            subject: claims.sub,
            username: claims.preferred_username,
            roles,
        }
    }
}

/// JWT validator built from [`AuthConfig`]
pub struct JwtValidator {
    key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn from_config(cfg: &AuthConfig) -> Result<Self, AuthError> {
        let (key, algorithm) = if let Some(pem) = &cfg.jwt_public_key_pem {
            let key = DecodingKey::from_rsa_pem(pem.as_bytes())
                .map_err(|e| AuthError::Misconfigured(format!("bad RSA public key: {e}")))?;
            (key, Algorithm::RS256)
        } else if let Some(secret) = &cfg.jwt_secret {
            (DecodingKey::from_secret(secret.as_bytes()), Algorithm::HS256)
        } else {
            return Err(AuthError::Misconfigured(
                "either jwt_secret or jwt_public_key_pem must be set".to_string(),
            ));
        };

        let mut validation = Validation::new(algorithm);
        validation.leeway = cfg.leeway_seconds;
        if let Some(issuer) = &cfg.issuer {
            validation.set_issuer(&[issuer]);
        }
        match &cfg.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Ok(Self { key, validation })
    }

    pub fn validate(&self, token: &str) -> Result<Principal, AuthError> {
        decode::<TokenClaims>(token, &self.key, &self.validation)
            .map(|data| data.claims.into())
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

/// Middleware state
#[derive(Clone)]
pub struct AuthState {
    validator: Option<Arc<JwtValidator>>,
    policy: Arc<PolicyTable>,
    public_paths: Arc<Vec<String>>,
}

impl AuthState {
    pub fn from_config(cfg: &AuthConfig) -> Result<Self, AuthError> {
        let validator = if cfg.enabled {
            Some(Arc::new(JwtValidator::from_config(cfg)?))
        } else {
            tracing::warn!("authentication disabled; all requests are allowed");
            None
        };
        Ok(Self {
            validator,
            policy: Arc::new(PolicyTable::new(cfg.policy.clone())),
            public_paths: Arc::new(cfg.public_paths.clone()),
        })
    }

    fn is_public(&self, path: &str) -> bool {
        self.public_paths.iter().any(|p| path.starts_with(p.as_str()))
    }

    fn check(&self, method: &Method, path: &str, token: Option<&str>) -> Result<Option<Principal>, AuthError> {
        let Some(validator) = &self.validator else {
            return Ok(None);
        };
        if *method == Method::OPTIONS || self.is_public(path) {
            return Ok(None);
        }
        let (Some(resource), Some(verb)) = (resource_of(path), Verb::from_method(method)) else {
            return Ok(None);
        };

        let token = token.ok_or(AuthError::MissingToken)?;
        let principal = validator.validate(token)?;

        if !self.policy.is_allowed(resource, verb, &principal.roles) {
            return Err(AuthError::Forbidden {
                resource: resource.to_string(),
                verb,
            });
        }
        Ok(Some(principal))
    }
}

/// First path segment after `/api/v1/`
pub fn resource_of(path: &str) -> Option<&str> {
    path.strip_prefix(API_PREFIX)?
        .split('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

fn bearer_from_parts(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer ").or_else(|| v.strip_prefix("bearer ")))
        .map(|t| t.trim().to_string())
}

/// Single authorization middleware consulting the policy table
pub async fn authorize(State(state): State<AuthState>, request: Request, next: Next) -> Response {
    let (mut parts, body) = request.into_parts();
    let token = bearer_from_parts(&parts);

    match state.check(&parts.method, parts.uri.path(), token.as_deref()) {
        Ok(principal) => {
            if let Some(principal) = principal {
                parts.extensions.insert(principal);
            }
            next.run(Request::from_parts(parts, body)).await
        }
        Err(err) => {
            tracing::debug!(path = %parts.uri.path(), error = %err, "request rejected by auth middleware");
            ApiError::from(err).into_response()
        }
    }
}

/// Raw bearer token of the incoming request, forwarded on inter-service calls
#[derive(Debug, Clone, Default)]
pub struct BearerToken(pub Option<String>);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(bearer_from_parts(parts)))
    }
}
