use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CommentBlock {
  pub(crate) author: String,
  pub(crate) author_url: String,
  pub(crate) body: Vec<String>,
  pub(crate) posted: String,
}

impl CommentBlock {
  fn from_comment(
    comment: &IssueComment,
    display_names: &HashMap<String, String>,
  ) -> Result<Self> {
    let author = display_names
      .get(&comment.user.login)
      .cloned()
      .unwrap_or_else(|| comment.user.login.clone());

    let mut posted = format_long_date(comment.created_at);

    if comment.created_at != comment.updated_at {
      posted.push_str(" (edited)");
    }

    Ok(Self {
      author,
      author_url: comment.user.html_url.clone(),
      body: html_to_lines(&comment.body_html)?,
      posted,
    })
  }
}

fn format_long_date(date: DateTime<Utc>) -> String {
  date.format("%B %-d, %Y").to_string()
}

/// Pure mapping from the fetched thread to display blocks, one per
/// comment, in arrival order. Drawing happens elsewhere.
pub(crate) fn render_comments(
  comments: &[IssueComment],
  display_names: &HashMap<String, String>,
) -> Result<Vec<CommentBlock>> {
  comments
    .iter()
    .map(|comment| CommentBlock::from_comment(comment, display_names))
    .collect()
}
