use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct CommentAuthor {
  pub(crate) html_url: String,
  pub(crate) login: String,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct IssueComment {
  pub(crate) body_html: String,
  pub(crate) created_at: DateTime<Utc>,
  #[allow(dead_code)]
  pub(crate) id: u64,
  pub(crate) updated_at: DateTime<Utc>,
  pub(crate) user: CommentAuthor,
}
