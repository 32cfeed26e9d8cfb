//! Fine-grained dirty flags for the slider's leaf views.

use bitflags::bitflags;

use crate::selection::Thumb;

bitflags! {
    /// Which rendered outputs changed since the last render pass.
    ///
    /// A drag sample that moves one thumb dirties that thumb and the label, never the other
    /// thumb or the rails.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DirtyFlags: u8 {
        /// No changes
        const NONE           = 0b0000_0000;

        /// Low thumb offset changed
        const LOW_THUMB      = 0b0000_0001;

        /// High thumb offset changed
        const HIGH_THUMB     = 0b0000_0010;

        /// Label offset changed
        const LABEL_POSITION = 0b0000_0100;

        /// Label text changed
        const LABEL_TEXT     = 0b0000_1000;

        /// Rails inset changed (thumb width relayout)
        const RAILS          = 0b0001_0000;

        /// Root style replaced
        const ROOT           = 0b0010_0000;
    }
}

impl DirtyFlags {
    /// Flag for one thumb's offset.
    #[inline]
    pub fn thumb(thumb: Thumb) -> Self {
        match thumb {
            Thumb::Low => Self::LOW_THUMB,
            Thumb::High => Self::HIGH_THUMB,
        }
    }

    /// Both thumb offsets.
    #[inline]
    pub fn thumbs() -> Self {
        Self::LOW_THUMB | Self::HIGH_THUMB
    }

    /// Returns true if any label output changed.
    #[inline]
    pub fn touches_label(&self) -> bool {
        self.intersects(Self::LABEL_POSITION | Self::LABEL_TEXT)
    }

    /// Returns true if only positions changed, so leaves can move without re-rendering content.
    #[inline]
    pub fn is_transform_only(&self) -> bool {
        !self.is_empty() && !self.intersects(Self::LABEL_TEXT | Self::RAILS | Self::ROOT)
    }

    /// Flag `flag` if `changed`.
    #[inline]
    pub fn when(changed: bool, flag: Self) -> Self {
        if changed { flag } else { Self::NONE }
    }
}
