/// Invalid states the sliding menu surfaces instead of drawing garbage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlidingMenuError {
    /// A scroll change needed to scale the content panel but none is set.
    ContentPanelUnset,
    /// Measure had no explicit views and not enough children to pick from.
    MissingPanels { found: usize },
    /// The sliding padding leaves no room for the menu.
    InvalidMenuWidth {
        screen_width: i32,
        sliding_padding: i32,
    },
    /// A scroll change arrived before the first measure pass.
    NotMeasured,
}

impl std::fmt::Display for SlidingMenuError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlidingMenuError::ContentPanelUnset => write!(f, "content panel is not set"),
            SlidingMenuError::MissingPanels { found } => {
                write!(f, "expected menu and content panels, found {found} child(ren)")
            }
            SlidingMenuError::InvalidMenuWidth {
                screen_width,
                sliding_padding,
            } => write!(
                f,
                "sliding padding {sliding_padding} leaves no menu width on a {screen_width}px screen"
            ),
            SlidingMenuError::NotMeasured => write!(f, "sliding menu has not been measured"),
        }
    }
}

impl std::error::Error for SlidingMenuError {}
