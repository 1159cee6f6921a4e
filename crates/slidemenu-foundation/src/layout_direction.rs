/// Horizontal layout direction of the host container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    /// Left to right. The menu sits at the left edge.
    #[default]
    Ltr,
    /// Right to left. The menu sits at the right edge.
    Rtl,
}

impl LayoutDirection {
    #[inline]
    pub fn is_ltr(self) -> bool {
        matches!(self, LayoutDirection::Ltr)
    }

    #[inline]
    pub fn is_rtl(self) -> bool {
        matches!(self, LayoutDirection::Rtl)
    }
}
