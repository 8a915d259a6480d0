//! Types describing a view's style, configuration hints, and the seam to the
//! windowing backend that owns the actual views.

use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Generic "unset" sentinel for integer hint values.
///
/// Backends report this for hints they do not support; hint setters accept it
/// to mean "no preference".
pub const DONT_CARE: i32 = -1;

bitflags! {
    /// The current presentation state of a view.
    ///
    /// Multiple states coexist; a fullscreen view is typically also mapped.
    /// Display enumeration order is ascending bit value.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct ViewStyle: u32 {
        /// View is modal, typically a dialog box of its transient parent.
        const MODAL = 1 << 0;
        /// View should be above most others.
        const TALL = 1 << 1;
        /// View should be wider than it is tall.
        const WIDE = 1 << 2;
        /// View is minimized, shaded, or otherwise invisible.
        const HIDDEN = 1 << 3;
        /// View is maximized to fill the screen.
        const FULLSCREEN = 1 << 4;
        /// View is being displayed above normal views.
        const ABOVE = 1 << 5;
        /// View is being displayed below normal views.
        const BELOW = 1 << 6;
        /// View is demanding attention, for example highlighted in a taskbar.
        const DEMANDING = 1 << 7;
        /// View is currently being resized.
        const RESIZING = 1 << 8;
        /// View is ready to be displayed.
        const MAPPED = 1 << 9;
    }
}

/// All style flags in ascending bit order, paired with their display names.
const STYLE_NAMES: [(ViewStyle, &str); 10] = [
    (ViewStyle::MODAL, "modal"),
    (ViewStyle::TALL, "tall"),
    (ViewStyle::WIDE, "wide"),
    (ViewStyle::HIDDEN, "hidden"),
    (ViewStyle::FULLSCREEN, "fullscreen"),
    (ViewStyle::ABOVE, "above"),
    (ViewStyle::BELOW, "below"),
    (ViewStyle::DEMANDING, "demanding"),
    (ViewStyle::RESIZING, "resizing"),
    (ViewStyle::MAPPED, "mapped"),
];

impl ViewStyle {
    /// Returns the display name of a single style flag.
    ///
    /// Returns `"unknown"` for values that are not exactly one defined flag.
    /// Rendering only ever looks up bits taken from a [`ViewStyle`] mask, so
    /// that fallback is a defensive invariant rather than a reachable path.
    pub fn name(self) -> &'static str {
        STYLE_NAMES
            .iter()
            .find(|(flag, _)| *flag == self)
            .map(|(_, name)| *name)
            .unwrap_or("unknown")
    }
}

/// An integer-valued configuration property of a view.
///
/// Hints are requested before a view is realized and queried afterwards to
/// discover what the backend actually provided. Identifiers are stable small
/// integers so the whole set can be iterated; use [`VIEW_HINTS`] rather than
/// relying on discriminant values for iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ViewHint {
    /// OpenGL context API.
    ContextApi,
    /// OpenGL context major version.
    ContextVersionMajor,
    /// OpenGL context minor version.
    ContextVersionMinor,
    /// OpenGL context profile.
    ContextProfile,
    /// OpenGL context debugging enabled.
    ContextDebug,
    /// Number of bits for red channel.
    RedBits,
    /// Number of bits for green channel.
    GreenBits,
    /// Number of bits for blue channel.
    BlueBits,
    /// Number of bits for alpha channel.
    AlphaBits,
    /// Number of bits for depth buffer.
    DepthBits,
    /// Number of bits for stencil buffer.
    StencilBits,
    /// True if sample buffers should be used.
    SampleBuffers,
    /// Number of samples per pixel (for anti-aliasing).
    Samples,
    /// True if double buffering should be used.
    DoubleBuffer,
    /// Number of frames between buffer swaps.
    SwapInterval,
    /// True if view should be resizable.
    Resizable,
    /// True if key repeat events are ignored.
    IgnoreKeyRepeat,
    /// Refresh rate in Hz.
    RefreshRate,
    /// View type.
    ViewType,
    /// True if window frame should be dark.
    DarkFrame,
}

/// All view hints in iteration order, paired with their display names.
///
/// The table is the authority for dump order; it is deliberately decoupled
/// from the numeric value of the discriminants so extending or reordering the
/// enumeration cannot silently corrupt iteration.
pub const VIEW_HINTS: [(ViewHint, &str); 20] = [
    (ViewHint::ContextApi, "Context API"),
    (ViewHint::ContextVersionMajor, "Context major version"),
    (ViewHint::ContextVersionMinor, "Context minor version"),
    (ViewHint::ContextProfile, "Context profile"),
    (ViewHint::ContextDebug, "Context debug"),
    (ViewHint::RedBits, "Red bits"),
    (ViewHint::GreenBits, "Green bits"),
    (ViewHint::BlueBits, "Blue bits"),
    (ViewHint::AlphaBits, "Alpha bits"),
    (ViewHint::DepthBits, "Depth bits"),
    (ViewHint::StencilBits, "Stencil bits"),
    (ViewHint::SampleBuffers, "Sample buffers"),
    (ViewHint::Samples, "Samples"),
    (ViewHint::DoubleBuffer, "Double buffer"),
    (ViewHint::SwapInterval, "Swap interval"),
    (ViewHint::Resizable, "Resizable"),
    (ViewHint::IgnoreKeyRepeat, "Ignore key repeat"),
    (ViewHint::RefreshRate, "Refresh rate"),
    (ViewHint::ViewType, "View type"),
    (ViewHint::DarkFrame, "Dark frame"),
];

impl ViewHint {
    /// Returns the display name of this hint.
    pub fn name(self) -> &'static str {
        match self {
            Self::ContextApi => "Context API",
            Self::ContextVersionMajor => "Context major version",
            Self::ContextVersionMinor => "Context minor version",
            Self::ContextProfile => "Context profile",
            Self::ContextDebug => "Context debug",
            Self::RedBits => "Red bits",
            Self::GreenBits => "Green bits",
            Self::BlueBits => "Blue bits",
            Self::AlphaBits => "Alpha bits",
            Self::DepthBits => "Depth bits",
            Self::StencilBits => "Stencil bits",
            Self::SampleBuffers => "Sample buffers",
            Self::Samples => "Samples",
            Self::DoubleBuffer => "Double buffer",
            Self::SwapInterval => "Swap interval",
            Self::Resizable => "Resizable",
            Self::IgnoreKeyRepeat => "Ignore key repeat",
            Self::RefreshRate => "Refresh rate",
            Self::ViewType => "View type",
            Self::DarkFrame => "Dark frame",
        }
    }
}

/// A single window/surface instance owned by the windowing backend.
///
/// The diagnostic layer only ever reads through this trait; it never creates,
/// mutates, or outlives the underlying view.
pub trait View {
    /// Returns the current integer value of a hint.
    ///
    /// Hints the active backend does not support report [`DONT_CARE`] (or
    /// whatever sentinel the backend chooses); that is not an error.
    fn hint(&self, hint: ViewHint) -> i32;
}

/// OpenGL context API, for [`ViewHint::ContextApi`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GlApi {
    /// Desktop OpenGL.
    #[default]
    OpenGl,
    /// OpenGL ES.
    OpenGlEs,
}

impl From<GlApi> for i32 {
    fn from(api: GlApi) -> Self {
        match api {
            GlApi::OpenGl => 2,
            GlApi::OpenGlEs => 3,
        }
    }
}

/// Vertical synchronization preference, for [`ViewHint::SwapInterval`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VsyncMode {
    /// Let the backend choose.
    #[default]
    DontCare,
    /// Explicitly disable vertical sync.
    Disabled,
    /// Explicitly enable vertical sync.
    Enabled,
}

impl From<VsyncMode> for i32 {
    fn from(mode: VsyncMode) -> Self {
        match mode {
            VsyncMode::DontCare => DONT_CARE,
            VsyncMode::Disabled => 0,
            VsyncMode::Enabled => 1,
        }
    }
}
