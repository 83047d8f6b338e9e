//! Drives the app with key presses and checks what ends up on the page.

use flexbox_tutor::{render_document, render_frame, App, AppControl, KeyboardEvent, ScreenId, TerminalSize};

const WIDTH: u16 = 100;

fn app(start: ScreenId) -> App {
    App::new(start, TerminalSize::new(WIDTH, 30))
}

fn press(app: &App, keys: &[&str]) {
    for key in keys {
        assert_eq!(app.handle_key(&KeyboardEvent::new(*key)), AppControl::Continue, "key {key}");
    }
}

fn page(app: &App) -> String {
    render_document(app, WIDTH, 0).unwrap().buffer.to_text()
}

#[test]
fn every_screen_renders_inside_the_chrome() {
    let expected = [
        (ScreenId::Menu, "Choose a lesson to begin your journey"),
        (ScreenId::LayoutBasics, "LESSON 1: Layout Basics"),
        (ScreenId::FlexDirection, "LESSON 2: Flex Direction"),
        (ScreenId::Alignment, "LESSON 3: Alignment & Justification"),
        (ScreenId::Spacing, "LESSON 4: Spacing & Sizing"),
        (ScreenId::FlexGrow, "LESSON 5: Flexible Sizing with grow"),
        (ScreenId::RealWorld, "LESSON 6: Real World Layout Patterns"),
        (ScreenId::Playground, "INTERACTIVE PLAYGROUND"),
    ];
    for (id, marker) in expected {
        let text = page(&app(id));
        assert!(text.contains("FLEXBOX TUTOR"), "{}: no header", id.as_str());
        assert!(text.contains(marker), "{}: missing {marker:?}", id.as_str());
        assert!(text.contains("M Menu  Q Quit  ESC Back"), "{}: no footer", id.as_str());
    }
}

#[test]
fn menu_to_lesson_and_back() {
    let app = app(ScreenId::Menu);
    press(&app, &["ArrowDown", "ArrowDown", "Enter"]);
    assert_eq!(app.current(), ScreenId::Alignment);
    assert!(page(&app).contains("▶ JustifyContent::FlexStart"));

    press(&app, &["j"]);
    let text = page(&app);
    assert!(text.contains("▶ JustifyContent::Center"));
    assert!(!text.contains("▶ JustifyContent::FlexStart"));

    press(&app, &["Escape"]);
    assert_eq!(app.current(), ScreenId::Menu);

    // Re-entering starts the lesson over.
    press(&app, &["Enter"]);
    assert_eq!(app.current(), ScreenId::Alignment);
    assert!(page(&app).contains("▶ JustifyContent::FlexStart"));
}

#[test]
fn layout_basics_steps_through() {
    let app = app(ScreenId::LayoutBasics);
    assert!(page(&app).contains("Step 1 of 5"));
    press(&app, &["ArrowRight", "ArrowRight"]);
    assert!(page(&app).contains("Step 3 of 5"));
    press(&app, &["ArrowRight", "ArrowRight", "ArrowRight"]);
    assert!(page(&app).contains("Step 5 of 5"));
    press(&app, &["ArrowLeft"]);
    assert!(page(&app).contains("Step 4 of 5"));
}

#[test]
fn flex_direction_switches_mode() {
    let app = app(ScreenId::FlexDirection);
    assert!(page(&app).contains("Current mode: column"));
    press(&app, &["r"]);
    assert!(page(&app).contains("Current mode: row"));
    press(&app, &["c"]);
    assert!(page(&app).contains("Current mode: column"));
}

#[test]
fn spacing_descriptions_follow_values() {
    let app = app(ScreenId::Spacing);
    assert!(page(&app).contains("(1 space around content)"));
    press(&app, &["-"]);
    assert!(page(&app).contains("(No space - content touches border)"));
    press(&app, &["+", "+", "+"]);
    assert!(page(&app).contains("(3 spaces around content)"));
}

#[test]
fn flex_grow_distribution() {
    let app = app(ScreenId::FlexGrow);
    assert!(page(&app).contains("Box 1: 1/3 = 33%"));
    press(&app, &["1"]);
    assert!(page(&app).contains("Box 1: 2/4 = 50%"));
    for _ in 0..3 {
        press(&app, &["1", "2", "3"]);
    }
    // 2+3 = 0 mod 5 for the first box, 1+3 = 4 for the others.
    press(&app, &["2", "3"]);
    assert!(page(&app).contains("All values are 0 - boxes use their natural size"));
}

#[test]
fn real_world_cycles_examples() {
    let app = app(ScreenId::RealWorld);
    assert!(page(&app).contains("Viewing: HEADER"));
    press(&app, &["n"]);
    assert!(page(&app).contains("Viewing: SIDEBAR"));
    press(&app, &["p", "p"]);
    let text = page(&app);
    assert!(text.contains("Viewing: DASHBOARD"));
    assert!(text.contains("Recent Activity"));
}

#[test]
fn playground_generated_code_tracks_settings() {
    let app = app(ScreenId::Playground);
    let text = page(&app);
    assert!(text.contains("flex_direction: FlexDirection::Row,"));
    assert!(!text.contains("grow: 1.0,"));

    press(&app, &["d", "g", "m"]);
    let text = page(&app);
    assert!(text.contains("flex_direction: FlexDirection::Column,"));
    assert!(text.contains("grow: 1.0,"));
    assert!(text.contains("margin: Edges::all(1),"));
    assert_eq!(app.current(), ScreenId::Playground);

    press(&app, &["r"]);
    assert!(page(&app).contains("flex_direction: FlexDirection::Row,"));
}

#[test]
fn paging_moves_the_viewport() {
    let app = app(ScreenId::Spacing);
    let top = render_frame(&app);
    assert_eq!(top.scroll, 0);

    app.scroll.record_frame(top.scroll, top.max_scroll);
    press(&app, &["PageDown"]);
    let paged = render_frame(&app);
    assert!(paged.scroll > 0);
    assert_ne!(paged.buffer.to_text(), top.buffer.to_text());

    press(&app, &["Home"]);
    assert_eq!(render_frame(&app).scroll, 0);
}

#[test]
fn quit_from_anywhere() {
    let app = app(ScreenId::FlexGrow);
    assert_eq!(app.handle_key(&KeyboardEvent::new("q")), AppControl::Exit);
}
