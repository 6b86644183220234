//! Interaction states a localised string can be attached to.

use bitflags::bitflags;

bitflags! {
    /// The presentation state a localised value applies to.
    ///
    /// States are bit sets, so combined states such as
    /// `SELECTED | HIGHLIGHTED` are expressible. [`ControlState::NORMAL`] is
    /// the empty set. The [`APPLICATION`](Self::APPLICATION) and
    /// [`RESERVED`](Self::RESERVED) masks leave room for caller-defined
    /// states; build those with [`ControlState::from_bits_retain`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ControlState: u32 {
        /// The control is being pressed or hovered.
        const HIGHLIGHTED = 1 << 0;
        /// The control does not accept interaction.
        const DISABLED = 1 << 1;
        /// The control is toggled on.
        const SELECTED = 1 << 2;
        /// The control has input focus.
        const FOCUSED = 1 << 3;
        /// Bits available to the application.
        const APPLICATION = 0x00FF_0000;
        /// Bits reserved for framework use.
        const RESERVED = 0xFF00_0000;
    }
}

impl ControlState {
    /// The default, unqualified state.
    pub const NORMAL: Self = Self::empty();

    /// Returns `true` for the unqualified state.
    #[must_use]
    pub const fn is_normal(self) -> bool {
        self.is_empty()
    }
}
