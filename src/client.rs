use {
  super::*,
  reqwest::header::{ACCEPT, USER_AGENT},
};

#[derive(Clone)]
pub(crate) struct Client {
  client: reqwest::Client,
}

impl Default for Client {
  fn default() -> Self {
    Self {
      client: reqwest::Client::new(),
    }
  }
}

impl Client {
  /// Asks the API to return each comment body pre-rendered as HTML.
  const ACCEPT_HTML_JSON: &str = "application/vnd.github.v3.html+json";

  // The GitHub API rejects requests without a user agent.
  const USER_AGENT_VALUE: &str =
    concat!("marginalia/", env!("CARGO_PKG_VERSION"));

  pub(crate) async fn fetch_comments(
    &self,
    config: &CommentsConfig,
  ) -> Result<Vec<IssueComment>> {
    Ok(
      self
        .client
        .get(config.api_url())
        .header(ACCEPT, Self::ACCEPT_HTML_JSON)
        .header(USER_AGENT, Self::USER_AGENT_VALUE)
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<IssueComment>>()
        .await?,
    )
  }
}
