use super::*;

/// One fetch per page view: `Loading` is entered synchronously before
/// the network effect is executed, so a trigger that fires while the
/// fetch is outstanding observes a non-`NotLoaded` phase and no-ops.
/// `Loaded` and `Failed` are terminal; nothing resets the phase.
pub(crate) enum Phase {
  Failed,
  Loaded(Vec<CommentBlock>),
  Loading,
  NotLoaded,
}

pub(crate) struct CommentWidget {
  config: CommentsConfig,
  display_names: HashMap<String, String>,
  phase: Phase,
}

impl CommentWidget {
  pub(crate) fn begin_load(&mut self) -> Effect {
    self.phase = Phase::Loading;

    Effect::FetchComments {
      config: self.config.clone(),
    }
  }

  pub(crate) fn finish_load(&mut self, result: Result<Vec<IssueComment>>) {
    let blocks = result
      .and_then(|comments| render_comments(&comments, &self.display_names));

    self.phase = match blocks {
      Ok(blocks) => Phase::Loaded(blocks),
      Err(_) => Phase::Failed,
    };
  }

  pub(crate) fn issue_url(&self) -> String {
    self.config.issue_url()
  }

  pub(crate) fn new(
    config: CommentsConfig,
    display_names: HashMap<String, String>,
  ) -> Self {
    Self {
      config,
      display_names,
      phase: Phase::NotLoaded,
    }
  }

  pub(crate) fn phase(&self) -> &Phase {
    &self.phase
  }

  pub(crate) fn should_load(
    &self,
    region_visible: bool,
    print_mode: bool,
  ) -> bool {
    matches!(self.phase, Phase::NotLoaded) && (region_visible || print_mode)
  }
}
