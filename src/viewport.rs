/// Region edges in viewport-relative coordinates, rows and columns.
/// Content scrolled past the top of the viewport has a negative top edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct BoundingBox {
  pub(crate) bottom: i32,
  pub(crate) left: i32,
  pub(crate) right: i32,
  pub(crate) top: i32,
}

impl BoundingBox {
  pub(crate) fn fully_visible(
    &self,
    viewport_width: i32,
    viewport_height: i32,
  ) -> bool {
    self.top >= 0
      && self.left >= 0
      && self.bottom <= viewport_height
      && self.right <= viewport_width
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn inside() -> BoundingBox {
    BoundingBox {
      bottom: 20,
      left: 0,
      right: 80,
      top: 10,
    }
  }

  #[test]
  fn box_within_viewport_is_fully_visible() {
    assert!(inside().fully_visible(80, 24));
  }

  #[test]
  fn box_matching_viewport_edges_is_fully_visible() {
    let bounding_box = BoundingBox {
      bottom: 24,
      left: 0,
      right: 80,
      top: 0,
    };

    assert!(bounding_box.fully_visible(80, 24));
  }

  #[test]
  fn top_edge_above_viewport_is_not_visible() {
    let bounding_box = BoundingBox { top: -1, ..inside() };
    assert!(!bounding_box.fully_visible(80, 24));
  }

  #[test]
  fn bottom_edge_below_viewport_is_not_visible() {
    let bounding_box = BoundingBox {
      bottom: 25,
      ..inside()
    };

    assert!(!bounding_box.fully_visible(80, 24));
  }

  #[test]
  fn left_edge_outside_viewport_is_not_visible() {
    let bounding_box = BoundingBox { left: -1, ..inside() };
    assert!(!bounding_box.fully_visible(80, 24));
  }

  #[test]
  fn right_edge_outside_viewport_is_not_visible() {
    let bounding_box = BoundingBox {
      right: 81,
      ..inside()
    };

    assert!(!bounding_box.fully_visible(80, 24));
  }
}
