use super::*;

pub(crate) enum Event {
  Comments { result: Result<Vec<IssueComment>> },
}
