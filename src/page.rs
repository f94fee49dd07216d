use {super::*, std::path::Path};

pub(crate) struct Page {
  pub(crate) body: Vec<String>,
  pub(crate) matter: FrontMatter,
}

impl Page {
  pub(crate) fn comment_widget(&self) -> Option<CommentWidget> {
    self
      .matter
      .comments_config()
      .map(|config| CommentWidget::new(config, self.matter.display_names.clone()))
  }

  pub(crate) fn from_markdown(source: &str) -> Result<Self> {
    let (matter, markdown) = FrontMatter::parse(source)?;

    let parser = pulldown_cmark::Parser::new(markdown);

    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);

    Ok(Self {
      body: html_to_lines(&html)?,
      matter,
    })
  }

  pub(crate) fn load(path: &Path) -> Result<Self> {
    let source = fs::read_to_string(path)
      .with_context(|| format!("could not read {}", path.display()))?;

    Self::from_markdown(&source)
  }

  pub(crate) fn title(&self) -> &str {
    self.matter.title.as_deref().unwrap_or("Untitled")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_markdown_renders_body_text() {
    let page = Page::from_markdown(
      "+++\ntitle = \"A post\"\n+++\nHello *world*, this is the post body.",
    )
    .unwrap();

    assert_eq!(page.title(), "A post");

    assert!(
      page
        .body
        .iter()
        .any(|line| line.contains("this is the post body"))
    );
  }

  #[test]
  fn title_falls_back_when_front_matter_omits_it() {
    let page = Page::from_markdown("no front matter here").unwrap();
    assert_eq!(page.title(), "Untitled");
  }

  #[test]
  fn comment_widget_is_absent_without_an_issue() {
    let page =
      Page::from_markdown("+++\nrepo = \"acme/blog\"\n+++\nbody").unwrap();

    assert!(page.comment_widget().is_none());
  }
}
