use super::*;

pub(crate) struct State {
  help: HelpView,
  message: String,
  page: Page,
  pending_effects: Vec<Effect>,
  scroll: usize,
  transient_message: Option<TransientMessage>,
  viewport_height: usize,
  viewport_width: usize,
  widget: Option<CommentWidget>,
}

impl State {
  /// Evaluates the lazy-load trigger against the current viewport.
  /// Called after every draw, which is in turn driven by key, resize,
  /// and startup events; the widget phase makes repeat evaluations
  /// no-ops, so at most one fetch effect is ever produced.
  pub(crate) fn comment_trigger(&mut self) -> Option<Effect> {
    let document = self.document();

    let visible = self
      .region_box(&document)
      .fully_visible(
        saturating_i32(self.viewport_width),
        saturating_i32(self.viewport_height),
      );

    let widget = self.widget.as_mut()?;

    if !widget.should_load(visible, false) {
      return None;
    }

    let effect = widget.begin_load();

    if !self.help.is_visible() {
      self.message = LOADING_COMMENTS_STATUS.into();
    }

    Some(effect)
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> CommandDispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::ScrollDown => self.scroll_by(1),
      Command::ScrollUp => self.scroll_by(-1),
      Command::PageDown => self.scroll_by(self.page_jump()),
      Command::PageUp => self.scroll_by(-self.page_jump()),
      Command::ScrollToTop => self.scroll = 0,
      Command::ScrollToBottom => self.scroll = self.max_scroll(),
      Command::OpenIssuePage => self.open_issue_page(),
      Command::OpenTypoLink => self.open_typo_link(),
      Command::None => {}
    }

    CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  pub(crate) fn document(&self) -> Document {
    Document::assemble(&self.page, self.widget.as_ref(), self.viewport_width)
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Comments { result } => {
        if let Some(widget) = self.widget.as_mut() {
          widget.finish_load(result);
        }

        if !self.help.is_visible() {
          self.message = PAGE_STATUS.into();
        }
      }
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  fn max_scroll(&self) -> usize {
    self
      .document()
      .lines
      .len()
      .saturating_sub(self.viewport_height.max(1))
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn new(page: Page) -> Self {
    let widget = page.comment_widget();

    Self {
      help: HelpView::new(),
      message: PAGE_STATUS.into(),
      page,
      pending_effects: Vec::new(),
      scroll: 0,
      transient_message: None,
      viewport_height: 0,
      viewport_width: 0,
      widget,
    }
  }

  fn open_issue_page(&mut self) {
    match &self.widget {
      Some(widget) => self.pending_effects.push(Effect::OpenUrl {
        url: widget.issue_url(),
      }),
      None => self.set_transient_message(COMMENTS_OFF.into()),
    }
  }

  fn open_typo_link(&mut self) {
    match self.page.matter.typo_url.clone() {
      Some(url) => self.pending_effects.push(Effect::OpenUrl { url }),
      None => {
        self.set_transient_message("No typo link for this page.".into());
      }
    }
  }

  fn page_jump(&self) -> isize {
    saturating_isize(self.viewport_height.saturating_sub(1).max(1))
  }

  fn region_box(&self, document: &Document) -> BoundingBox {
    let scroll = saturating_i32(self.scroll);

    BoundingBox {
      bottom: saturating_i32(document.lines.len()) - scroll,
      left: 0,
      right: saturating_i32(self.viewport_width),
      top: saturating_i32(document.region_start) - scroll,
    }
  }

  pub(crate) fn scroll(&self) -> usize {
    self.scroll
  }

  fn scroll_by(&mut self, delta: isize) {
    let target = if delta >= 0 {
      let delta = usize::try_from(delta).unwrap_or(usize::MAX);
      self.scroll.saturating_add(delta)
    } else {
      let magnitude = delta
        .checked_abs()
        .and_then(|value| usize::try_from(value).ok())
        .unwrap_or(usize::MAX);

      self.scroll.saturating_sub(magnitude)
    };

    self.scroll = target.min(self.max_scroll());
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), original));

    self.message = message;
  }

  pub(crate) fn set_viewport(&mut self, width: usize, height: usize) {
    self.viewport_width = width;
    self.viewport_height = height;
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.current() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.original().to_string();
        self.transient_message = None;
      }
    }
  }
}

fn saturating_i32(value: usize) -> i32 {
  i32::try_from(value).unwrap_or(i32::MAX)
}

fn saturating_isize(value: usize) -> isize {
  isize::try_from(value).unwrap_or(isize::MAX)
}
