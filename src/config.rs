#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CommentsConfig {
  pub(crate) issue: u64,
  pub(crate) org: String,
  pub(crate) repo: String,
}

impl CommentsConfig {
  pub(crate) fn api_url(&self) -> String {
    format!(
      "https://api.github.com/repos/{}/{}/issues/{}/comments",
      self.org, self.repo, self.issue
    )
  }

  pub(crate) fn issue_url(&self) -> String {
    format!(
      "https://github.com/{}/{}/issues/{}",
      self.org, self.repo, self.issue
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> CommentsConfig {
    CommentsConfig {
      issue: 42,
      org: "acme".to_string(),
      repo: "blog".to_string(),
    }
  }

  #[test]
  fn api_url_targets_the_issue_comments_endpoint() {
    assert_eq!(
      sample().api_url(),
      "https://api.github.com/repos/acme/blog/issues/42/comments"
    );
  }

  #[test]
  fn issue_url_points_at_the_human_facing_issue_page() {
    assert_eq!(
      sample().issue_url(),
      "https://github.com/acme/blog/issues/42"
    );
  }
}
