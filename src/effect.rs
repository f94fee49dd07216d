use super::*;

#[derive(Clone, Debug)]
pub(crate) enum Effect {
  FetchComments { config: CommentsConfig },
  OpenUrl { url: String },
}
