use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DocLine {
  pub(crate) kind: LineKind,
  pub(crate) text: String,
}

impl DocLine {
  fn blank() -> Self {
    Self {
      kind: LineKind::Body,
      text: String::new(),
    }
  }
}

/// The full page laid out as rows at a given width: title, body,
/// footer, then the comment region. `region_start..lines.len()` is the
/// comment region, which is what the visibility trigger measures.
pub(crate) struct Document {
  pub(crate) lines: Vec<DocLine>,
  pub(crate) region_start: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineKind {
  Body,
  Heading,
  Link,
  Meta,
  Separator,
}

impl Document {
  pub(crate) fn assemble(
    page: &Page,
    widget: Option<&CommentWidget>,
    width: usize,
  ) -> Self {
    let width = width.max(1);

    let mut lines = Vec::new();

    push_wrapped(&mut lines, LineKind::Heading, page.title(), width);
    lines.push(DocLine::blank());

    for line in &page.body {
      if line.is_empty() {
        lines.push(DocLine::blank());
      } else {
        push_wrapped(&mut lines, LineKind::Body, line, width);
      }
    }

    if let Some(url) = page.matter.typo_url.as_deref() {
      lines.push(DocLine::blank());

      push_wrapped(
        &mut lines,
        LineKind::Link,
        &format!("Found a typo? Suggest an edit: {url}"),
        width,
      );
    }

    if let Some(promo) = page.matter.promo.as_deref() {
      lines.push(DocLine::blank());

      for line in promo.lines() {
        push_wrapped(&mut lines, LineKind::Meta, line, width);
      }
    }

    lines.push(DocLine::blank());
    lines.push(separator(width));

    let region_start = lines.len();

    push_wrapped(&mut lines, LineKind::Heading, COMMENTS_HEADING, width);

    match widget {
      None => push_wrapped(&mut lines, LineKind::Meta, COMMENTS_OFF, width),
      Some(widget) => match widget.phase() {
        Phase::NotLoaded => {
          push_wrapped(&mut lines, LineKind::Meta, COMMENTS_PENDING, width);
        }
        Phase::Loading => {
          push_wrapped(
            &mut lines,
            LineKind::Meta,
            LOADING_COMMENTS_STATUS,
            width,
          );
        }
        Phase::Failed => {
          push_wrapped(&mut lines, LineKind::Meta, COMMENTS_FAILED, width);
          push_wrapped(&mut lines, LineKind::Link, &widget.issue_url(), width);
        }
        Phase::Loaded(blocks) if blocks.is_empty() => {
          push_wrapped(&mut lines, LineKind::Meta, NO_COMMENTS, width);
        }
        Phase::Loaded(blocks) => {
          for block in blocks {
            lines.push(DocLine::blank());

            push_wrapped(
              &mut lines,
              LineKind::Heading,
              &format!("{} · {}", block.author, block.posted),
              width,
            );

            push_wrapped(&mut lines, LineKind::Link, &block.author_url, width);

            for line in &block.body {
              if line.is_empty() {
                lines.push(DocLine::blank());
              } else {
                push_wrapped(&mut lines, LineKind::Body, line, width);
              }
            }

            lines.push(separator(width));
          }
        }
      },
    }

    Self {
      lines,
      region_start,
    }
  }
}

fn push_wrapped(
  lines: &mut Vec<DocLine>,
  kind: LineKind,
  text: &str,
  width: usize,
) {
  for text in wrap_text(text, width) {
    lines.push(DocLine { kind, text });
  }
}

fn separator(width: usize) -> DocLine {
  DocLine {
    kind: LineKind::Separator,
    text: "─".repeat(width.min(40)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_page() -> Page {
    Page::from_markdown(
      "+++\ntitle = \"A post\"\nrepo = \"acme/blog\"\nissue = 7\n+++\nBody.",
    )
    .expect("sample page")
  }

  fn region_text(document: &Document) -> Vec<String> {
    document.lines[document.region_start..]
      .iter()
      .map(|line| line.text.clone())
      .collect()
  }

  #[test]
  fn region_begins_with_the_comments_heading() {
    let page = sample_page();
    let widget = page.comment_widget();

    let document = Document::assemble(&page, widget.as_ref(), 80);

    assert_eq!(region_text(&document)[0], COMMENTS_HEADING);
  }

  #[test]
  fn unconfigured_page_shows_the_turned_off_message() {
    let page = Page::from_markdown("+++\ntitle = \"quiet\"\n+++\nBody.")
      .expect("quiet page");

    let document = Document::assemble(&page, None, 80);

    assert!(region_text(&document).contains(&COMMENTS_OFF.to_string()));
  }

  #[test]
  fn pending_widget_shows_the_lazy_load_placeholder() {
    let page = sample_page();
    let widget = page.comment_widget();

    let document = Document::assemble(&page, widget.as_ref(), 80);

    assert!(region_text(&document).contains(&COMMENTS_PENDING.to_string()));
  }

  #[test]
  fn loading_widget_shows_the_loading_placeholder() {
    let page = sample_page();
    let mut widget = page.comment_widget().expect("widget");

    widget.begin_load();

    let document = Document::assemble(&page, Some(&widget), 80);

    assert!(
      region_text(&document).contains(&LOADING_COMMENTS_STATUS.to_string())
    );
  }

  #[test]
  fn empty_thread_shows_the_no_comments_placeholder() {
    let page = sample_page();
    let mut widget = page.comment_widget().expect("widget");

    widget.begin_load();
    widget.finish_load(Ok(Vec::new()));

    let document = Document::assemble(&page, Some(&widget), 80);

    let region = region_text(&document);

    assert!(region.contains(&NO_COMMENTS.to_string()));
    assert!(!region.iter().any(|line| line.contains('·')));
  }

  #[test]
  fn failed_thread_falls_back_to_the_issue_link() {
    let page = sample_page();
    let mut widget = page.comment_widget().expect("widget");

    widget.begin_load();
    widget.finish_load(Err(anyhow::anyhow!("boom")));

    let document = Document::assemble(&page, Some(&widget), 80);

    let region = region_text(&document);

    assert!(region.contains(&COMMENTS_FAILED.to_string()));
    assert!(region.contains(&"https://github.com/acme/blog/issues/7".to_string()));
  }

  #[test]
  fn typo_link_appears_in_the_footer() {
    let page = Page::from_markdown(
      "+++\ntitle = \"t\"\ntypo_url = \"https://example.com/edit\"\n+++\nBody.",
    )
    .expect("typo page");

    let document = Document::assemble(&page, None, 80);

    assert!(document.lines[..document.region_start].iter().any(|line| {
      line.kind == LineKind::Link && line.text.contains("Found a typo?")
    }));
  }
}
