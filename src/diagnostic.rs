//! Human-readable rendering of events, modifier masks, style flags, and view
//! hint dumps.
//!
//! The textual format is line-oriented with fixed field widths: floating
//! coordinates use a 6-character field with 1 decimal place, integer
//! coordinates and sizes use 5-character fields, and client message payloads
//! use unpadded uppercase hex. These widths are an externally observable
//! contract, relied on by golden-output tests.
//!
//! Rendering cannot fail; the count returned by the `print_*` functions is
//! the number of bytes written to the diagnostic stream and carries no
//! success/failure meaning.

use std::fmt::Write;

use crate::event::Event;
use crate::keyboard::ModifiersState;
use crate::window::{View, ViewStyle, VIEW_HINTS};

/// Renders one event as diagnostic text.
///
/// Rare, structurally important kinds (input, crossing, focus, lifecycle,
/// client messages) are always rendered. High-frequency kinds produced by
/// continuous redraw (update, configure, expose, close, motion, timer) flood
/// the output, so they render only when `verbose` is set; otherwise the
/// result is empty. [`Event::Nothing`] always renders as empty.
pub fn render_event(event: &Event, prefix: &str, verbose: bool) -> String {
    use Event::*;

    let mut out = String::new();
    match event {
        Nothing => {},
        Realize => {
            let _ = writeln!(out, "{prefix}Realize");
        },
        Unrealize => {
            let _ = writeln!(out, "{prefix}Unrealize");
        },
        KeyPress { keycode, key } => {
            let _ =
                writeln!(out, "{prefix}Key press   code {keycode:3} key  U+{:04X}", *key as u32);
        },
        KeyRelease { keycode, key } => {
            let _ =
                writeln!(out, "{prefix}Key release code {keycode:3} key  U+{:04X}", *key as u32);
        },
        Text { keycode, character, string } => {
            let _ = writeln!(
                out,
                "{prefix}Text entry  code {keycode:3} char U+{:04X} ({string})",
                *character as u32
            );
        },
        ButtonPress { button, position, modifiers }
        | ButtonRelease { button, position, modifiers } => {
            let state = if matches!(event, ButtonPress { .. }) { "down" } else { "up  " };
            let _ = write!(
                out,
                "{prefix}Mouse {button} {state} at {:6.1} {:6.1} ",
                position.x, position.y
            );
            write_modifiers(&mut out, *modifiers);
        },
        Scroll { dx, dy, direction, position, modifiers } => {
            let _ = write!(
                out,
                "{prefix}Scroll {dx:5.1} {dy:5.1} ({direction}) at {:6.1} {:6.1} ",
                position.x, position.y
            );
            write_modifiers(&mut out, *modifiers);
        },
        PointerIn { position, mode } => {
            let _ = writeln!(
                out,
                "{prefix}Mouse enter  at {:6.1} {:6.1} ({mode})",
                position.x, position.y
            );
        },
        PointerOut { position, mode } => {
            let _ = writeln!(
                out,
                "{prefix}Mouse leave  at {:6.1} {:6.1} ({mode})",
                position.x, position.y
            );
        },
        FocusIn { mode } => {
            let _ = writeln!(out, "{prefix}Focus in ({mode})");
        },
        FocusOut { mode } => {
            let _ = writeln!(out, "{prefix}Focus out ({mode})");
        },
        Client { data1, data2 } => {
            let _ = writeln!(out, "{prefix}Client {data1:X} {data2:X}");
        },
        LoopEnter => {
            let _ = writeln!(out, "{prefix}Loop enter");
        },
        LoopLeave => {
            let _ = writeln!(out, "{prefix}Loop leave");
        },
        DataOffer => {
            let _ = writeln!(out, "{prefix}Data offer");
        },
        Data => {
            let _ = writeln!(out, "{prefix}Data");
        },

        // High-frequency kinds below; suppressed unless verbose.
        Update | Configure { .. } | Expose { .. } | Close | Motion { .. } | Timer { .. }
            if !verbose => {},
        Update => {
            let _ = writeln!(out, "{prefix}Update");
        },
        Configure { position, size, style } => {
            let _ = write!(
                out,
                "{prefix}Configure {:5} {:5} {:5} {:5} (",
                position.x, position.y, size.width, size.height
            );
            write_style(&mut out, *style);
            let _ = writeln!(out, " )");
        },
        Expose { position, size } => {
            let _ = writeln!(
                out,
                "{prefix}Expose    {:5} {:5} {:5} {:5}",
                position.x, position.y, size.width, size.height
            );
        },
        Close => {
            let _ = writeln!(out, "{prefix}Close");
        },
        Motion { position } => {
            let _ = writeln!(out, "{prefix}Mouse motion at {:6.1} {:6.1}", position.x, position.y);
        },
        Timer { id } => {
            let _ = writeln!(out, "{prefix}Timer {id}");
        },
    }

    out
}

/// Renders one event and writes it to the diagnostic stream.
///
/// Returns the number of bytes written.
pub fn print_event(event: &Event, prefix: &str, verbose: bool) -> usize {
    let text = render_event(event, prefix, verbose);
    eprint!("{text}");
    text.len()
}

/// Renders a modifier mask as a `Modifiers:` line.
///
/// Every active modifier contributes a space-prefixed name, in the fixed
/// order Shift, Ctrl, Alt, Super; absent modifiers contribute nothing.
pub fn render_modifiers(modifiers: ModifiersState) -> String {
    let mut out = String::new();
    write_modifiers(&mut out, modifiers);
    out
}

fn write_modifiers(out: &mut String, modifiers: ModifiersState) {
    const NAMES: [(ModifiersState, &str); 4] = [
        (ModifiersState::SHIFT, " Shift"),
        (ModifiersState::CTRL, " Ctrl"),
        (ModifiersState::ALT, " Alt"),
        (ModifiersState::SUPER, " Super"),
    ];

    out.push_str("Modifiers:");
    for (modifier, name) in NAMES {
        if modifiers.intersects(modifier) {
            out.push_str(name);
        }
    }
    out.push('\n');
}

// Each active flag contributes a space-prefixed name, in ascending bit order.
fn write_style(out: &mut String, style: ViewStyle) {
    for flag in style.iter() {
        out.push(' ');
        out.push_str(flag.name());
    }
}

/// Renders the full hint configuration of a view, one `name: value` line per
/// hint, in [`VIEW_HINTS`] order.
///
/// Hints the backend reports as unsupported render their sentinel value like
/// any other; no error is signaled.
pub fn render_hints(view: &dyn View) -> String {
    let mut out = String::new();
    for (hint, name) in VIEW_HINTS {
        let _ = writeln!(out, "{name}: {}", view.hint(hint));
    }
    out
}

/// Renders the full hint configuration of a view and writes it to the
/// diagnostic stream.
///
/// Returns the number of bytes written.
pub fn print_hints(view: &dyn View) -> usize {
    let text = render_hints(view);
    eprint!("{text}");
    text.len()
}
