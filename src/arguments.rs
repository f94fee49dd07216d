use super::*;

pub(crate) struct Arguments {
  pub(crate) page: PathBuf,
  pub(crate) print: bool,
}

impl Arguments {
  pub(crate) fn parse() -> Result<Self> {
    Self::parse_from(env::args().skip(1))
  }

  fn parse_from<I>(arguments: I) -> Result<Self>
  where
    I: IntoIterator<Item = String>,
  {
    let mut page = None;
    let mut print = false;

    for argument in arguments {
      match argument.as_str() {
        "--print" => print = true,
        _ if argument.starts_with('-') => {
          bail!("unrecognized option `{argument}`\n{USAGE}")
        }
        _ => {
          if page.is_some() {
            bail!("unexpected argument `{argument}`\n{USAGE}");
          }

          page = Some(PathBuf::from(argument));
        }
      }
    }

    let Some(page) = page else {
      bail!("{USAGE}");
    };

    Ok(Self { page, print })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(arguments: &[&str]) -> Result<Arguments> {
    Arguments::parse_from(arguments.iter().map(ToString::to_string))
  }

  #[test]
  fn parse_accepts_a_page_and_the_print_flag() {
    let arguments = parse(&["post.md", "--print"]).unwrap();

    assert_eq!(arguments.page, PathBuf::from("post.md"));
    assert!(arguments.print);
  }

  #[test]
  fn parse_rejects_missing_page() {
    assert!(parse(&[]).is_err());
  }

  #[test]
  fn parse_rejects_unknown_options_and_extra_pages() {
    assert!(parse(&["--frobnicate"]).is_err());
    assert!(parse(&["a.md", "b.md"]).is_err());
  }
}
