use coordpad::panels::InputPanel;
use coordpad::{CoordinatePad, CoordinatePadApp, PadConfig, Page};
use egui::{vec2, Event, Key, Modifiers, PointerButton, Pos2, Rect};
use egui_plot::{PlotBounds, PlotPoint};

fn run_frames(app: &mut CoordinatePadApp, n: usize) {
    let ctx = egui::Context::default();
    for _ in 0..n {
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.show(ctx));
    }
}

/// One context kept across frames so pointer and focus state carry over.
struct Harness {
    ctx: egui::Context,
    app: CoordinatePadApp,
}

impl Harness {
    fn graph_page() -> Self {
        let mut app = CoordinatePadApp::new(PadConfig::default());
        app.navigate(Page::Graph);
        Self {
            ctx: egui::Context::default(),
            app,
        }
    }

    fn pad(&self) -> &CoordinatePad {
        self.app.pad().unwrap()
    }

    fn pad_mut(&mut self) -> &mut CoordinatePad {
        self.app.pad_mut().unwrap()
    }

    fn frame(&mut self, events: Vec<Event>) {
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(1200.0, 800.0))),
            events,
            ..Default::default()
        };
        let _ = self.ctx.run(input, |ctx| self.app.show(ctx));
    }

    fn idle(&mut self, n: usize) {
        for _ in 0..n {
            self.frame(Vec::new());
        }
    }

    fn click(&mut self, at: Pos2) {
        self.frame(vec![Event::PointerMoved(at), button(at, true)]);
        self.frame(vec![button(at, false)]);
    }

    fn type_into(&mut self, field: egui::Id, text: &str) {
        let rect = self.ctx.read_response(field).unwrap().rect;
        self.click(rect.center());
        self.frame(vec![Event::Text(text.to_string())]);
    }

    fn press_enter(&mut self) {
        self.frame(vec![Event::Key {
            key: Key::Enter,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }]);
    }

    fn screen_pos(&self, x: f64, y: f64) -> Pos2 {
        let transform = self.pad().graph_panel.transform().unwrap();
        transform.position_from_point(&PlotPoint::new(x, y))
    }

    fn marker(&self, index: usize) -> Pos2 {
        let p = self.pad().points().get(index).unwrap();
        self.screen_pos(p.x, p.y)
    }

    fn bounds(&self) -> PlotBounds {
        *self.pad().graph_panel.transform().unwrap().bounds()
    }

    /// Hover, press, move in `steps` and release. Returns the final pointer position.
    fn drag(&mut self, from: Pos2, step: egui::Vec2, steps: usize) -> Pos2 {
        self.frame(vec![Event::PointerMoved(from)]);
        self.frame(vec![button(from, true)]);
        let mut pos = from;
        for _ in 0..steps {
            pos += step;
            self.frame(vec![Event::PointerMoved(pos)]);
        }
        self.frame(vec![button(pos, false)]);
        self.idle(1);
        pos
    }
}

fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

fn assert_default_domain(bounds: PlotBounds) {
    let [x0, y0] = bounds.min();
    let [x1, y1] = bounds.max();
    for (got, want) in [(x0, -10.0), (y0, -10.0), (x1, 10.0), (y1, 10.0)] {
        assert!((got - want).abs() < 1e-9, "{got} != {want}");
    }
}

#[test]
fn every_page_renders_without_panicking() {
    let mut app = CoordinatePadApp::new(PadConfig::default());
    for page in Page::ALL {
        app.navigate(page);
        run_frames(&mut app, 2);
    }
}

#[test]
fn graph_page_renders_points_and_keeps_them_across_frames() {
    let mut app = CoordinatePadApp::new(PadConfig::default());
    app.navigate(Page::Graph);
    {
        let pad = app.pad_mut().unwrap();
        pad.data().append(1.0, 2.0, Some("#ff0000"));
        pad.data().append(3.0, 4.0, Some("not a color"));
    }
    run_frames(&mut app, 3);

    let pad = app.pad().unwrap();
    assert_eq!(pad.points().len(), 2);
    assert!(pad.graph_panel.dragging().is_none());
}

#[test]
fn dragging_a_marker_moves_the_point_not_the_view() {
    let mut h = Harness::graph_page();
    h.pad_mut().data().append(1.0, 1.0, Some("#ff0000"));
    h.pad_mut().data().append(-4.0, 3.0, None);
    h.idle(3);
    assert_default_domain(h.bounds());

    let start = h.marker(0);
    h.frame(vec![Event::PointerMoved(start)]);
    h.frame(vec![button(start, true)]);
    let mut pos = start;
    for step in 0..5 {
        pos += vec2(10.0, 10.0);
        h.frame(vec![Event::PointerMoved(pos)]);
        if step == 1 {
            let p = h.pad().points().get(0).unwrap();
            assert_eq!(h.pad().graph_panel.dragging(), Some(0));
            assert!(p.x > 1.0 && p.y < 1.0, "moved during drag: {p:?}");
            assert_eq!(p.color, "#ff0000");
        }
    }
    h.frame(vec![button(pos, false)]);
    h.idle(1);

    assert_eq!(h.pad().graph_panel.dragging(), None);
    let p = h.pad().points().get(0).unwrap();
    assert!(p.x > 1.0 && p.y < 1.0);
    assert_eq!(p.color, "#ff0000");
    assert_eq!(p.x, (p.x * 100.0).round() / 100.0);
    let other = h.pad().points().get(1).unwrap();
    assert_eq!((other.x, other.y), (-4.0, 3.0));

    assert_default_domain(h.bounds());
    assert!(h.marker(0).distance(pos) < 2.0);
}

#[test]
fn dragging_empty_space_pans_and_reset_view_restores_domain() {
    let mut h = Harness::graph_page();
    h.pad_mut().data().append(1.0, 1.0, None);
    h.idle(3);

    let from = h.screen_pos(-6.0, 6.0);
    h.drag(from, vec2(20.0, 0.0), 5);

    let panned = h.bounds();
    assert!(panned.min()[0] < -10.5, "view did not pan: {panned:?}");
    let p = h.pad().points().get(0).unwrap();
    assert_eq!((p.x, p.y), (1.0, 1.0));

    h.pad_mut().graph_panel.reset_view();
    h.idle(2);
    assert_default_domain(h.bounds());
}

#[test]
fn enter_in_y_field_adds_point_and_refocuses_x() {
    let mut h = Harness::graph_page();
    h.idle(2);
    h.type_into(InputPanel::x_field_id(), "1.5");
    h.type_into(InputPanel::y_field_id(), "-2");
    assert!(h.pad().points().is_empty());

    h.press_enter();
    let points = h.pad().points().points();
    assert_eq!(points.len(), 1);
    assert_eq!((points[0].x, points[0].y), (1.5, -2.0));
    let form = &h.pad().input_panel.form;
    assert!(form.x_text.is_empty() && form.y_text.is_empty());

    h.idle(1);
    assert!(h.ctx.memory(|m| m.has_focus(InputPanel::x_field_id())));
}

#[test]
fn enter_in_x_field_adds_point() {
    let mut h = Harness::graph_page();
    h.idle(2);
    h.type_into(InputPanel::y_field_id(), "4");
    h.type_into(InputPanel::x_field_id(), "3");

    h.press_enter();
    let points = h.pad().points().points();
    assert_eq!(points.len(), 1);
    assert_eq!((points[0].x, points[0].y), (3.0, 4.0));
}

#[test]
fn enter_with_bad_number_adds_nothing_and_keeps_text() {
    let mut h = Harness::graph_page();
    h.idle(2);
    h.type_into(InputPanel::x_field_id(), "abc");
    h.type_into(InputPanel::y_field_id(), "2");

    h.press_enter();
    assert!(h.pad().points().is_empty());
    let form = &h.pad().input_panel.form;
    assert_eq!((form.x_text.as_str(), form.y_text.as_str()), ("abc", "2"));
}

#[test]
fn add_button_adds_exactly_one_point() {
    let mut h = Harness::graph_page();
    h.idle(2);
    h.type_into(InputPanel::x_field_id(), "7");
    h.type_into(InputPanel::y_field_id(), "8");

    let add = h.pad().input_panel.add_button_rect().unwrap();
    h.click(add.center());
    h.idle(1);

    let points = h.pad().points().points();
    assert_eq!(points.len(), 1);
    assert_eq!((points[0].x, points[0].y), (7.0, 8.0));
    let form = &h.pad().input_panel.form;
    assert!(form.x_text.is_empty() && form.y_text.is_empty());
}
