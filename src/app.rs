use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn doc_line(line: &DocLine) -> Line<'static> {
    let style = match line.kind {
      LineKind::Body => Style::default().fg(Color::White),
      LineKind::Heading => Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
      LineKind::Link => Style::default().fg(Color::Blue),
      LineKind::Meta | LineKind::Separator => {
        Style::default().fg(Color::DarkGray)
      }
    };

    Line::from(Span::styled(line.text.clone(), style))
  }

  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([Constraint::Min(0), Constraint::Length(1)])
      .split(frame.area());

    self
      .state
      .set_viewport(usize::from(layout[0].width), usize::from(layout[0].height));

    let document = self.state.document();

    let text: Vec<Line> = document
      .lines
      .iter()
      .skip(self.state.scroll())
      .take(usize::from(layout[0].height))
      .map(Self::doc_line)
      .collect();

    frame.render_widget(Paragraph::new(text), layout[0]);

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[1]);

    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::FetchComments { config } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        let handle = self.handle.clone();

        handle.spawn(async move {
          let _ = sender.send(Event::Comments {
            result: client.fetch_comments(&config).await,
          });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
    }
  }

  pub(crate) fn new(client: Client, page: Page) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state: State::new(page),
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      // The draw pass recorded the viewport, so the trigger sees the
      // layout produced by the latest key, resize, or startup event.
      if let Some(effect) = self.state.comment_trigger() {
        self.execute_effect(effect);
      }

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      // Resize and other non-key events fall through to the next draw,
      // which re-evaluates the trigger against the new viewport.
      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else {
        Command::from_key(key)
      };

      let dispatch = self.state.dispatch_command(command);

      for effect in dispatch.effects {
        self.execute_effect(effect);
      }

      if dispatch.should_exit {
        break;
      }
    }

    Ok(())
  }
}
