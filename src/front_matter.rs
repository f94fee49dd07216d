use super::*;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct FrontMatter {
  pub(crate) display_names: HashMap<String, String>,
  pub(crate) issue: Option<u64>,
  pub(crate) promo: Option<String>,
  pub(crate) repo: Option<String>,
  pub(crate) title: Option<String>,
  pub(crate) typo_url: Option<String>,
}

impl FrontMatter {
  const DELIMITER: &str = "+++";

  /// The widget is only instantiated when both `repo` and `issue` are
  /// present; otherwise the page shows the static turned-off message.
  pub(crate) fn comments_config(&self) -> Option<CommentsConfig> {
    let issue = self.issue?;

    let (org, repo) = self.repo.as_deref()?.split_once('/')?;

    Some(CommentsConfig {
      issue,
      org: org.to_string(),
      repo: repo.to_string(),
    })
  }

  pub(crate) fn parse(source: &str) -> Result<(Self, &str)> {
    let Some(rest) = source.strip_prefix(Self::DELIMITER) else {
      return Ok((Self::default(), source));
    };

    let Some((raw, body)) = rest.split_once(&format!("\n{}", Self::DELIMITER))
    else {
      bail!("unterminated front matter");
    };

    let matter =
      toml::from_str(raw).context("could not parse front matter")?;

    Ok((matter, body.strip_prefix('\n').unwrap_or(body)))
  }
}
