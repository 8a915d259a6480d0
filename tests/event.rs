use viewlet::diagnostic::{render_event, render_modifiers};
use viewlet::event::{CrossingMode, Event, ScrollDirection};
use viewlet::keyboard::ModifiersState;
use viewlet::window::ViewStyle;

macro_rules! foreach_event {
    ($closure:expr) => {{
        #[allow(unused_mut)]
        let mut x = $closure;

        use viewlet::event::Event::*;

        x(Nothing);
        x(Realize);
        x(Unrealize);
        x(KeyPress { keycode: 65, key: 'A' });
        x(KeyRelease { keycode: 65, key: 'A' });
        x(Text { keycode: 38, character: 'é', string: "é".into() });
        x(ButtonPress {
            button: 0,
            position: (1.0, 2.0).into(),
            modifiers: ModifiersState::empty(),
        });
        x(ButtonRelease {
            button: 2,
            position: (1.0, 2.0).into(),
            modifiers: ModifiersState::CTRL,
        });
        x(Scroll {
            dx: 0.0,
            dy: 1.0,
            direction: ScrollDirection::Down,
            position: (100.0, 200.0).into(),
            modifiers: ModifiersState::SHIFT | ModifiersState::ALT,
        });
        x(PointerIn { position: (50.0, 60.0).into(), mode: CrossingMode::Grab });
        x(PointerOut { position: (50.0, 60.0).into(), mode: CrossingMode::Ungrab });
        x(FocusIn { mode: CrossingMode::Normal });
        x(FocusOut { mode: CrossingMode::Normal });
        x(Client { data1: 0x1234ABCD, data2: 0x42 });
        x(LoopEnter);
        x(LoopLeave);
        x(DataOffer);
        x(Data);
        x(Update);
        x(Configure {
            position: (10, 20).into(),
            size: (640, 480).into(),
            style: ViewStyle::TALL | ViewStyle::FULLSCREEN,
        });
        x(Expose { position: (10, 20).into(), size: (640, 480).into() });
        x(Motion { position: (3.5, -2.5).into() });
        x(Timer { id: 7 });
        x(Close);
    }};
}

fn is_verbose_only(event: &Event) -> bool {
    matches!(
        event,
        Event::Update
            | Event::Configure { .. }
            | Event::Expose { .. }
            | Event::Close
            | Event::Motion { .. }
            | Event::Timer { .. }
    )
}

#[test]
fn rendering_is_idempotent() {
    foreach_event!(|event: Event| {
        for verbose in [false, true] {
            let first = render_event(&event, "Event: ", verbose);
            let second = render_event(&event, "Event: ", verbose);
            assert_eq!(first, second, "{event:?}");
        }
    });
}

#[test]
fn every_event_renders_one_prefixed_line_when_verbose() {
    foreach_event!(|event: Event| {
        let text = render_event(&event, "Event: ", true);
        if matches!(event, Event::Nothing) {
            assert!(text.is_empty());
        } else {
            assert!(text.starts_with("Event: "), "{event:?}: {text:?}");
            assert!(text.ends_with('\n'), "{event:?}: {text:?}");
            assert_eq!(text.matches('\n').count(), 1, "{event:?}: {text:?}");
        }
    });
}

#[test]
fn high_frequency_events_are_suppressed_by_default() {
    foreach_event!(|event: Event| {
        let text = render_event(&event, "", false);
        if is_verbose_only(&event) || matches!(event, Event::Nothing) {
            assert!(text.is_empty(), "{event:?}: {text:?}");
        } else {
            assert!(!text.is_empty(), "{event:?}");
        }
    });
}

#[test]
fn key_press_and_release_format() {
    let press = Event::KeyPress { keycode: 65, key: 'A' };
    let release = Event::KeyRelease { keycode: 65, key: 'A' };
    assert_eq!(render_event(&press, "Event: ", false), "Event: Key press   code  65 key  U+0041\n");
    assert_eq!(
        render_event(&release, "Event: ", false),
        "Event: Key release code  65 key  U+0041\n"
    );
}

#[test]
fn text_entry_format() {
    let event = Event::Text { keycode: 38, character: 'é', string: "é".into() };
    assert_eq!(render_event(&event, "", false), "Text entry  code  38 char U+00E9 (é)\n");
}

#[test]
fn button_lines_append_modifier_description() {
    let down = Event::ButtonPress {
        button: 0,
        position: (1.0, 2.0).into(),
        modifiers: ModifiersState::empty(),
    };
    assert_eq!(render_event(&down, "", false), "Mouse 0 down at    1.0    2.0 Modifiers:\n");

    let up = Event::ButtonRelease {
        button: 2,
        position: (1.0, 2.0).into(),
        modifiers: ModifiersState::CTRL,
    };
    assert_eq!(render_event(&up, "", false), "Mouse 2 up   at    1.0    2.0 Modifiers: Ctrl\n");
}

#[test]
fn scroll_modifiers_render_in_fixed_order() {
    let event = Event::Scroll {
        dx: 0.0,
        dy: 1.0,
        direction: ScrollDirection::Down,
        position: (100.0, 200.0).into(),
        modifiers: ModifiersState::ALT | ModifiersState::SHIFT,
    };
    assert_eq!(
        render_event(&event, "", false),
        "Scroll   0.0   1.0 (down) at  100.0  200.0 Modifiers: Shift Alt\n"
    );
}

#[test]
fn modifier_description_covers_all_subsets() {
    assert_eq!(render_modifiers(ModifiersState::empty()), "Modifiers:\n");
    assert_eq!(render_modifiers(ModifiersState::SUPER), "Modifiers: Super\n");
    assert_eq!(render_modifiers(ModifiersState::all()), "Modifiers: Shift Ctrl Alt Super\n");
}

#[test]
fn crossing_and_focus_name_their_mode() {
    let enter = Event::PointerIn { position: (50.0, 60.0).into(), mode: CrossingMode::Grab };
    assert_eq!(render_event(&enter, "", false), "Mouse enter  at   50.0   60.0 (grab)\n");

    let leave = Event::PointerOut { position: (50.0, 60.0).into(), mode: CrossingMode::Ungrab };
    assert_eq!(render_event(&leave, "", false), "Mouse leave  at   50.0   60.0 (ungrab)\n");

    let focus = Event::FocusIn { mode: CrossingMode::Normal };
    assert_eq!(render_event(&focus, "", false), "Focus in (normal)\n");

    let unfocus = Event::FocusOut { mode: CrossingMode::Normal };
    assert_eq!(render_event(&unfocus, "", false), "Focus out (normal)\n");
}

#[test]
fn client_payloads_render_as_hex() {
    let event = Event::Client { data1: 0x1234ABCD, data2: 0x42 };
    assert_eq!(render_event(&event, "", false), "Client 1234ABCD 42\n");
}

#[test]
fn configure_names_styles_in_ascending_bit_order() {
    // Constructed with the bits in descending order; rendering must not care.
    let event = Event::Configure {
        position: (10, 20).into(),
        size: (640, 480).into(),
        style: ViewStyle::FULLSCREEN | ViewStyle::TALL,
    };
    assert_eq!(
        render_event(&event, "", true),
        "Configure    10    20   640   480 ( tall fullscreen )\n"
    );
}

#[test]
fn configure_with_no_styles_renders_empty_parens() {
    let event = Event::Configure {
        position: (0, 0).into(),
        size: (1, 1).into(),
        style: ViewStyle::empty(),
    };
    assert_eq!(render_event(&event, "", true), "Configure     0     0     1     1 ( )\n");
}

#[test]
fn expose_and_motion_verbose_formats() {
    let expose = Event::Expose { position: (10, 20).into(), size: (640, 480).into() };
    assert_eq!(render_event(&expose, "", true), "Expose       10    20   640   480\n");

    let motion = Event::Motion { position: (3.5, -2.5).into() };
    assert_eq!(render_event(&motion, "", true), "Mouse motion at    3.5   -2.5\n");

    let timer = Event::Timer { id: 7 };
    assert_eq!(render_event(&timer, "", true), "Timer 7\n");
}

#[test]
fn modifiers_accessor_matches_payload() {
    foreach_event!(|event: Event| {
        let expected = match &event {
            Event::ButtonPress { modifiers, .. }
            | Event::ButtonRelease { modifiers, .. }
            | Event::Scroll { modifiers, .. } => Some(*modifiers),
            _ => None,
        };
        assert_eq!(event.modifiers(), expected);
    });
}
