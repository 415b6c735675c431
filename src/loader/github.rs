use crate::constants::github;
use crate::error::{Error, Result};
use crate::loader::interface::SourceLoader;
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use url::Url;

/// Loader fetching raw file content through the GitHub contents API.
pub struct GithubLoader {
    client: Client,
    api_url: Url,
    org: String,
    repo: String,
    git_ref: String,
    base_path: String,
    token: Option<String>,
}

impl GithubLoader {
    /// Creates a loader resolving identifiers under `base_path` of the default
    /// repository.
    pub fn new(base_path: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(github::USER_AGENT)
            .timeout(github::TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_url: Url::parse(github::API_URL).map_err(|e| Error::Other(e.into()))?,
            org: github::ORG.to_string(),
            repo: github::REPO.to_string(),
            git_ref: github::REF.to_string(),
            base_path: base_path.into(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// Points the loader at another API root, e.g. a GitHub Enterprise instance.
    pub fn with_api_url(mut self, api_url: &str) -> Result<Self> {
        let normalized = format!("{}/", api_url.trim_end_matches('/'));
        self.api_url = Url::parse(&normalized).map_err(|e| {
            Error::Other(anyhow::anyhow!("Invalid GitHub API URL '{api_url}': {e}"))
        })?;
        Ok(self)
    }

    pub fn with_repository(
        mut self,
        org: impl Into<String>,
        repo: impl Into<String>,
        git_ref: impl Into<String>,
    ) -> Self {
        self.org = org.into();
        self.repo = repo.into();
        self.git_ref = git_ref.into();
        self
    }

    /// Path of `identifier` inside the repository.
    pub fn repository_path(&self, identifier: &str) -> String {
        let base = self.base_path.trim_matches('/');
        let identifier = identifier.trim_start_matches('/');
        if base.is_empty() {
            identifier.to_string()
        } else {
            format!("{base}/{identifier}")
        }
    }

    fn contents_url(&self, identifier: &str) -> Result<Url> {
        let path = format!(
            "repos/{}/{}/contents/{}",
            self.org,
            self.repo,
            self.repository_path(identifier)
        );
        let mut url = self.api_url.join(&path).map_err(|e| Error::Other(e.into()))?;
        url.query_pairs_mut().append_pair("ref", &self.git_ref);
        Ok(url)
    }
}

impl SourceLoader for GithubLoader {
    fn cache_key(&self, identifier: &str) -> String {
        identifier.to_string()
    }

    fn load(&self, identifier: &str) -> Result<String> {
        let url = self.contents_url(identifier)?;
        debug!("Fetching {url}");

        let mut request = self.client.get(url).header(ACCEPT, github::RAW_MEDIA_TYPE);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::SourceFetchError {
                source_path: format!(
                    "github.com/{}/{}/{}",
                    self.org,
                    self.repo,
                    self.repository_path(identifier)
                ),
                e: format!("unexpected response status {status}"),
            });
        }
        Ok(response.text()?)
    }
}
