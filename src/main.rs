use {
  anyhow::{Context, bail},
  app::App,
  arguments::Arguments,
  chrono::{DateTime, Utc},
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  comment::IssueComment,
  comment_widget::{CommentWidget, Phase},
  config::CommentsConfig,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  document::{DocLine, Document, LineKind},
  effect::Effect,
  event::Event,
  front_matter::FrontMatter,
  help_view::HelpView,
  page::Page,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
  },
  render::{CommentBlock, render_comments},
  serde::Deserialize,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    collections::HashMap,
    env, fs,
    io::{self, IsTerminal, Stdout, Write},
    path::PathBuf,
    process,
    time::{Duration, Instant},
  },
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  transient_message::TransientMessage,
  utils::{html_to_lines, truncate, wrap_text},
  viewport::BoundingBox,
};

mod app;
mod arguments;
mod client;
mod command;
mod command_dispatch;
mod comment;
mod comment_widget;
mod config;
mod document;
mod effect;
mod event;
mod front_matter;
mod help_view;
mod page;
mod render;
mod state;
mod transient_message;
mod utils;
mod viewport;

const COMMENTS_FAILED: &str =
  "Comments could not be loaded. Join the discussion at:";

const COMMENTS_HEADING: &str = "Comments";

const COMMENTS_OFF: &str = "Comments are turned off for this page.";

const COMMENTS_PENDING: &str =
  "Comments load when this section scrolls into view.";

const NO_COMMENTS: &str = "No comments yet.";

const LOADING_COMMENTS_STATUS: &str = "Loading comments...";

const PAGE_STATUS: &str = "↑/k up • ↓/j down • pg↓/pg↑ page • o open discussion • t typo link • q quit • ? help";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const PRINT_WIDTH: usize = 80;

const USAGE: &str = "usage: marginalia <page.md> [--print]";

const HELP_TEXT: &str = "\
Navigation:
  ↑ / k   scroll up
  ↓ / j   scroll down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  space   page down
  g/home  jump to the top
  G/end   jump to the bottom

Actions:
  o       open the discussion page in your browser
  t       open the typo-report link
  q       quit marginalia
  esc     close help or quit
  ?       toggle this help

Comments load on their own once the comment
section scrolls fully into view.
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse()?;

  let page = Page::load(&arguments.page).context("could not load the page")?;

  if arguments.print || !io::stdout().is_terminal() {
    return run_print(page).await;
  }

  let client = Client::default();

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, page);

  app.run(&mut terminal)?;

  restore_terminal(&mut terminal)
}

async fn run_print(page: Page) -> Result {
  let client = Client::default();

  let mut widget = page.comment_widget();

  if let Some(widget) = widget.as_mut()
    && widget.should_load(false, true)
    && let Effect::FetchComments { config } = widget.begin_load()
  {
    widget.finish_load(client.fetch_comments(&config).await);
  }

  let document = Document::assemble(&page, widget.as_ref(), PRINT_WIDTH);

  let mut stdout = io::stdout().lock();

  for line in &document.lines {
    writeln!(stdout, "{}", line.text)?;
  }

  Ok(())
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
