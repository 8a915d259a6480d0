//! The [`Event`] enum and assorted supporting types.
//!
//! Events are produced by a windowing backend and consumed here as plain
//! values; this crate classifies and renders them but never pumps or
//! dispatches them.

use dpi::{PhysicalPosition, PhysicalSize};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
pub use smol_str::SmolStr;

use crate::keyboard::ModifiersState;
use crate::window::ViewStyle;

/// Describes an event delivered to a view.
///
/// This is a closed taxonomy: every kind a backend can produce has a variant
/// here, and each variant carries exactly the payload that kind needs.
/// Consumers are expected to `match` exhaustively so that growing the
/// taxonomy is a compile error rather than a silent fall-through.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Event {
    /// No event.
    ///
    /// Carries no payload and is a silent no-operation for every consumer.
    Nothing,

    /// The view has been realized and its window-system resources created.
    Realize,

    /// The view is about to be unrealized and its resources destroyed.
    Unrealize,

    /// A key has been pressed.
    KeyPress {
        /// Raw key code.
        keycode: u32,
        /// The translated key, as an unshifted Unicode character where one
        /// exists and a private-use sentinel otherwise.
        key: char,
    },

    /// A key has been released.
    KeyRelease {
        /// Raw key code.
        keycode: u32,
        /// The translated key.
        key: char,
    },

    /// Character input, after any input method processing.
    Text {
        /// Raw key code.
        keycode: u32,
        /// The committed character.
        character: char,
        /// UTF-8 encoding of `character`.
        string: SmolStr,
    },

    /// A mouse button has been pressed.
    ButtonPress {
        /// Button number starting from 0.
        button: u32,
        /// Pointer position in view coordinates.
        position: PhysicalPosition<f64>,
        /// Keyboard modifiers active at the time of the event.
        modifiers: ModifiersState,
    },

    /// A mouse button has been released.
    ButtonRelease {
        /// Button number starting from 0.
        button: u32,
        /// Pointer position in view coordinates.
        position: PhysicalPosition<f64>,
        /// Keyboard modifiers active at the time of the event.
        modifiers: ModifiersState,
    },

    /// The mouse wheel has moved or the touchpad has scrolled.
    ///
    /// The deltas describe the scroll in lines or smooth increments,
    /// depending on `direction`.
    Scroll {
        /// Scroll distance along the X axis.
        dx: f64,
        /// Scroll distance along the Y axis.
        dy: f64,
        /// The dominant direction of the scroll.
        direction: ScrollDirection,
        /// Pointer position in view coordinates.
        position: PhysicalPosition<f64>,
        /// Keyboard modifiers active at the time of the event.
        modifiers: ModifiersState,
    },

    /// The pointer has entered the view.
    PointerIn {
        /// Pointer position in view coordinates.
        position: PhysicalPosition<f64>,
        /// How the crossing came about.
        mode: CrossingMode,
    },

    /// The pointer has left the view.
    PointerOut {
        /// Pointer position in view coordinates.
        position: PhysicalPosition<f64>,
        /// How the crossing came about.
        mode: CrossingMode,
    },

    /// The view has gained keyboard focus.
    FocusIn {
        /// How the focus change came about.
        mode: CrossingMode,
    },

    /// The view has lost keyboard focus.
    FocusOut {
        /// How the focus change came about.
        mode: CrossingMode,
    },

    /// A custom message sent by another part of the application.
    Client {
        /// First opaque word of data.
        data1: usize,
        /// Second opaque word of data.
        data2: usize,
    },

    /// A recursive event loop, such as a window drag, is starting.
    LoopEnter,

    /// A recursive event loop is finished.
    LoopLeave,

    /// A clipboard or drag-and-drop data offer is available.
    DataOffer,

    /// Offered data has been transferred and is ready to read.
    Data,

    /// The view is ready to draw a new frame.
    ///
    /// Sent before an expose when the view is animating continuously.
    Update,

    /// The position, size, or style of the view has changed.
    Configure {
        /// New position of the view.
        position: PhysicalPosition<i32>,
        /// New size of the view.
        size: PhysicalSize<u32>,
        /// New style flags of the view.
        style: ViewStyle,
    },

    /// A region of the view must be redrawn.
    Expose {
        /// Top-left corner of the region to redraw.
        position: PhysicalPosition<i32>,
        /// Size of the region to redraw.
        size: PhysicalSize<u32>,
    },

    /// The pointer has moved within the view.
    Motion {
        /// Pointer position in view coordinates.
        position: PhysicalPosition<f64>,
    },

    /// A timer registered on the view has fired.
    Timer {
        /// Caller-chosen timer identifier.
        id: usize,
    },

    /// The view has been requested to close.
    Close,
}

impl Event {
    /// Returns the modifier mask of input events that carry one.
    pub fn modifiers(&self) -> Option<ModifiersState> {
        match self {
            Event::ButtonPress { modifiers, .. }
            | Event::ButtonRelease { modifiers, .. }
            | Event::Scroll { modifiers, .. } => Some(*modifiers),
            _ => None,
        }
    }
}

/// Describes how a pointer or focus crossing came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CrossingMode {
    /// Crossing due to ordinary pointer motion or focus change.
    Normal,
    /// Crossing due to a grab being activated.
    Grab,
    /// Crossing due to a grab being released.
    Ungrab,
}

impl CrossingMode {
    /// Returns the stable display name of this mode.
    pub fn name(self) -> &'static str {
        match self {
            CrossingMode::Normal => "normal",
            CrossingMode::Grab => "grab",
            CrossingMode::Ungrab => "ungrab",
        }
    }
}

impl std::fmt::Display for CrossingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// The dominant direction of a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScrollDirection {
    /// Scroll up.
    Up,
    /// Scroll down.
    Down,
    /// Scroll left.
    Left,
    /// Scroll right.
    Right,
    /// Smooth scroll in any direction.
    Smooth,
}

impl ScrollDirection {
    /// Returns the stable display name of this direction.
    pub fn name(self) -> &'static str {
        match self {
            ScrollDirection::Up => "up",
            ScrollDirection::Down => "down",
            ScrollDirection::Left => "left",
            ScrollDirection::Right => "right",
            ScrollDirection::Smooth => "smooth",
        }
    }
}

impl std::fmt::Display for ScrollDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}
