use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use crate::shared::errors::AuthError;

/// A verified external account, as reported by an identity provider
#[derive(Debug, Clone)]
pub struct ExternalAccount {
    pub account_id: String,
    pub display_name: Option<String>,
}

/// Identity provider contract: given provider-specific credentials, return
/// the verified external account id and display name, or fail.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Provider name stored on the user row (e.g. "github")
    fn name(&self) -> &'static str;

    async fn verify(&self, access_token: &str) -> Result<ExternalAccount, AuthError>;
}

/// GitHub-backed identity provider: verifies an OAuth access token by
/// calling the GitHub user API with it.
pub struct GithubIdentityProvider {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct GithubUser {
    id: u64,
    login: String,
    name: Option<String>,
}

impl GithubIdentityProvider {
    pub fn new() -> Self {
        let base_url = std::env::var("GITHUB_API_BASE")
            .unwrap_or_else(|_| "https://api.github.com".to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

impl Default for GithubIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for GithubIdentityProvider {
    fn name(&self) -> &'static str {
        "github"
    }

    async fn verify(&self, access_token: &str) -> Result<ExternalAccount, AuthError> {
        let url = format!("{}/user", self.base_url);

        // GitHub rejects requests without a User-Agent header
        let response = self
            .client
            .get(&url)
            .bearer_auth(access_token)
            .header("User-Agent", "bookswap-api")
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| AuthError::IdentityProvider(format!("Request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AuthError::AuthenticationFailed(
                "access token rejected by provider".to_string(),
            ));
        }

        if !response.status().is_success() {
            return Err(AuthError::IdentityProvider(format!(
                "Unexpected status: {}",
                response.status()
            )));
        }

        let account = response
            .json::<GithubUser>()
            .await
            .map_err(|e| AuthError::IdentityProvider(format!("Invalid response body: {}", e)))?;

        Ok(ExternalAccount {
            account_id: account.id.to_string(),
            // Fall back to the login when no profile name is set
            display_name: account.name.or(Some(account.login)),
        })
    }
}

/// Test-backed identity provider: a fixed token -> account table.
pub struct StubIdentityProvider {
    accounts: HashMap<String, ExternalAccount>,
}

impl StubIdentityProvider {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    pub fn with_account(mut self, token: &str, account_id: &str, display_name: &str) -> Self {
        self.accounts.insert(
            token.to_string(),
            ExternalAccount {
                account_id: account_id.to_string(),
                display_name: Some(display_name.to_string()),
            },
        );
        self
    }
}

impl Default for StubIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for StubIdentityProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn verify(&self, access_token: &str) -> Result<ExternalAccount, AuthError> {
        self.accounts
            .get(access_token)
            .cloned()
            .ok_or_else(|| {
                AuthError::AuthenticationFailed("unknown access token".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_provider_verifies_known_token() {
        let provider = StubIdentityProvider::new().with_account("token-1", "1001", "Alice");

        let account = provider.verify("token-1").await.expect("known token");
        assert_eq!(account.account_id, "1001");
        assert_eq!(account.display_name.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn test_stub_provider_rejects_unknown_token() {
        let provider = StubIdentityProvider::new().with_account("token-1", "1001", "Alice");

        let err = provider.verify("wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::AuthenticationFailed(_)));
    }
}
