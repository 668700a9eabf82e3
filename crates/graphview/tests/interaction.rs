use graphview::layout::{Position, Viewport};
use graphview::*;
use tracing_test::traced_test;

const PAGE: &str = r#"{
    "nodes": [
        {"id": "p0", "title": "Foo", "authors": ["Jane Doe", "Li Wei"], "abstract": "Graphs everywhere.", "weight": 5, "group": 1},
        {"id": "p1", "title": "Bar", "authors": ["Ann Lee"], "abstract": "Citations matter.", "weight": 3, "group": 2},
        {"id": "p2", "title": "Baz", "authors": ["Bo Chen"], "abstract": "Layouts settle.", "weight": 7, "group": 2},
        {"id": "p3", "title": "Qux", "authors": [], "abstract": "", "weight": 3, "group": 1}
    ],
    "links": [
        {"source": "p1", "target": "p0"},
        {"source": "p2", "target": "p0"}
    ],
    "searchHistory": ["q1", "q2", "q3", "q4"]
}"#;

fn settled_view() -> GraphView {
    let mut config = GraphViewConfig::default();
    config.simulation.viewport = Viewport::new(800.0, 600.0);
    let mut view = GraphView::from_json(PAGE, config).unwrap();
    view.run_until_settled(2_000);
    assert!(!view.simulation().is_running());
    view
}

fn center(view: &GraphView, index: usize) -> Position {
    view.position(index).unwrap()
}

fn highlighted(view: &GraphView) -> Vec<usize> {
    (0..view.papers().len())
        .filter(|&i| view.fill(i) == HIGHLIGHT)
        .collect()
}

#[test]
fn test_hover_fills_panel_and_highlights() {
    let mut view = settled_view();
    assert!(highlighted(&view).is_empty());
    assert!(!view.panel().toggle_visible);

    view.pointer(PointerEvent::Moved(center(&view, 0)));
    assert_eq!(view.interaction(), Interaction::Hovering(0));
    assert_eq!(view.panel().title, "Foo");
    assert_eq!(view.panel().author, "Jane Doe");
    assert_eq!(view.panel().abstract_text, "");
    assert!(view.panel().toggle_visible);
    assert!(view.paper(0).unwrap().label_visible);
    assert_eq!(highlighted(&view), vec![0]);
}

#[test]
fn test_hover_moves_highlight() {
    let mut view = settled_view();
    view.pointer(PointerEvent::Moved(center(&view, 0)));
    view.pointer(PointerEvent::Moved(center(&view, 2)));

    assert_eq!(view.interaction(), Interaction::Hovering(2));
    assert!(!view.paper(0).unwrap().label_visible);
    assert!(view.paper(2).unwrap().label_visible);
    assert_eq!(highlighted(&view), vec![2]);
    assert_ne!(view.fill(0), HIGHLIGHT);
    assert_eq!(view.fill(0), view.fill(3));
    assert_eq!(view.panel().title, "Baz");
}

#[test]
fn test_rehover_is_idempotent() {
    let mut view = settled_view();
    let p = center(&view, 1);
    view.pointer(PointerEvent::Moved(p));
    let panel = view.panel().clone();
    let papers = view.papers().to_vec();

    view.pointer(PointerEvent::Moved(Position::new(p.x + 0.5, p.y)));
    view.node_entered(1);
    assert_eq!(view.panel(), &panel);
    assert_eq!(view.papers(), papers.as_slice());
    assert_eq!(highlighted(&view), vec![1]);
}

#[test]
fn test_leave_hides_label_keeps_highlight() {
    let mut view = settled_view();
    view.pointer(PointerEvent::Moved(center(&view, 1)));
    view.pointer(PointerEvent::Moved(Position::new(10_000.0, 10_000.0)));

    assert_eq!(view.interaction(), Interaction::Idle);
    assert!(!view.paper(1).unwrap().label_visible);
    assert_eq!(view.last_hovered(), Some(1));
    assert_eq!(highlighted(&view), vec![1]);
}

#[test]
fn test_drag_pins_and_reheats() {
    let mut view = settled_view();
    let start = center(&view, 2);

    view.pointer(PointerEvent::Pressed(start));
    assert_eq!(view.interaction(), Interaction::Dragging(2));
    assert!(view.simulation().is_running());
    assert_eq!(view.simulation().alpha_target(), 0.3);

    let target = Position::new(40.0, 40.0);
    view.pointer(PointerEvent::Moved(target));
    for _ in 0..30 {
        assert!(view.on_frame());
    }
    assert_eq!(view.position(2), Some(target));
    assert!(view.simulation().alpha() > view.simulation().config().alpha_min);

    // Hover is suppressed while dragging
    let panel = view.panel().clone();
    view.node_entered(0);
    assert_eq!(view.interaction(), Interaction::Dragging(2));
    assert_eq!(view.panel(), &panel);

    view.pointer(PointerEvent::Released(target));
    assert_eq!(view.interaction(), Interaction::Hovering(2));
    assert_eq!(view.simulation().alpha_target(), 0.0);
    assert!(!view.simulation().node(2).unwrap().is_pinned());

    let frames = view.run_until_settled(5_000);
    assert!(frames > 0 && frames < 5_000);
    assert!(!view.on_frame());
}

fn visible_labels(view: &GraphView) -> Vec<&str> {
    view.papers()
        .iter()
        .filter(|p| p.label_visible)
        .map(|p| p.id.as_str())
        .collect()
}

#[test]
fn test_label_hides_after_drag_release() {
    let mut view = settled_view();
    let p0 = center(&view, 0);

    view.pointer(PointerEvent::Moved(p0));
    view.pointer(PointerEvent::Pressed(p0));
    view.pointer(PointerEvent::Released(p0));
    assert_eq!(view.interaction(), Interaction::Hovering(0));
    assert_eq!(visible_labels(&view), vec!["p0"]);

    view.pointer(PointerEvent::Moved(Position::new(10_000.0, 10_000.0)));
    assert_eq!(view.interaction(), Interaction::Idle);
    assert!(visible_labels(&view).is_empty());

    view.pointer(PointerEvent::Moved(center(&view, 2)));
    assert_eq!(visible_labels(&view), vec!["p2"]);
    assert_eq!(highlighted(&view), vec![2]);
}

#[test]
fn test_press_without_hover_labels_on_release() {
    let mut view = settled_view();
    view.drag_started(1);
    view.drag_ended();
    assert_eq!(view.interaction(), Interaction::Hovering(1));
    assert_eq!(view.panel().title, "Bar");
    assert_eq!(visible_labels(&view), vec!["p1"]);

    // Entering another node directly still leaves a single label
    view.node_entered(2);
    assert_eq!(visible_labels(&view), vec!["p2"]);
}

#[test]
fn test_click_opens_detail_page() {
    let mut view = settled_view();
    let link = view.pointer(PointerEvent::Clicked(center(&view, 0))).unwrap();
    assert_eq!(link.url(), "/loading?title=Foo&author=Jane%20Doe");

    let link = view.node_clicked(3).unwrap();
    assert_eq!(link.url(), "/loading?title=Qux&author=");

    assert!(view.pointer(PointerEvent::Clicked(Position::new(9_999.0, 0.0))).is_none());
}

#[test]
fn test_abstract_toggle() {
    let mut view = settled_view();
    assert!(!view.toggle_abstract());
    assert_eq!(view.panel().toggle, AbstractToggle::Collapsed);

    view.node_entered(1);
    assert!(view.toggle_abstract());
    assert_eq!(view.panel().toggle.label(), HIDE_ABSTRACT);
    assert_eq!(view.panel().abstract_text, "Citations matter....");

    // Expanded panel follows the hover
    view.node_entered(2);
    assert_eq!(view.panel().abstract_text, "Layouts settle....");

    assert!(view.toggle_abstract());
    assert_eq!(view.panel().toggle.label(), VIEW_ABSTRACT);
    assert_eq!(view.panel().abstract_text, "");
}

#[test]
fn test_history_slots_from_page() {
    let view = settled_view();
    let texts: Vec<&str> = view
        .history()
        .slots()
        .iter()
        .map(|s| s.text.as_str())
        .collect();
    assert_eq!(texts, vec!["q3", "q2", "q1"]);
    assert_eq!(
        SubmitButton::new(&view.history().slot(1).unwrap().text).click(),
        SubmitAction::Submit
    );
}

#[test]
fn test_paint_frame() {
    let mut view = settled_view();
    view.node_entered(0);
    let mut canvas = RecordingCanvas::default();
    view.paint(&mut canvas);

    assert_eq!(canvas.lines.len(), 2);
    assert_eq!(canvas.circles.len(), 4);
    assert_eq!(canvas.labels.len(), 4);

    // Links track their endpoints
    assert_eq!(canvas.lines[0], (center(&view, 1), center(&view, 0)));

    let (ref id, _, radius, fill) = canvas.circles[0];
    assert_eq!(id, "p0");
    assert_eq!(radius, 15.0);
    assert_eq!(fill, HIGHLIGHT);

    let (_, at, ref text, visible) = canvas.labels[0];
    assert_eq!(text, "Foo");
    assert!(visible);
    assert_eq!(at.x, center(&view, 0).x + 5.0 * 3.2);
    assert!(canvas.labels[1..].iter().all(|l| !l.3));

    let mut by_weight: Vec<(f64, f64)> = view
        .papers()
        .iter()
        .zip(&canvas.circles)
        .map(|(p, c)| (p.weight, c.2))
        .collect();
    by_weight.sort_by(|a, b| a.0.total_cmp(&b.0));
    for pair in by_weight.windows(2) {
        if pair[0].0 < pair[1].0 {
            assert!(pair[0].1 < pair[1].1);
        }
    }
}

#[test]
fn test_nodes_stay_in_viewport_circle() {
    let mut config = GraphViewConfig::default();
    config.simulation.viewport = Viewport::new(120.0, 90.0);
    let mut view = GraphView::from_json(PAGE, config).unwrap();
    let radius = view.simulation().radius_bound().unwrap();
    while view.on_frame() {
        for i in 0..view.papers().len() {
            assert!(view.position(i).unwrap().magnitude() <= radius + 1e-9);
        }
    }
}

#[test]
fn test_svg_output() {
    let mut view = settled_view();
    view.node_entered(1);
    let svg = view.render_svg().to_string();
    assert!(svg.contains(r#"viewBox="-400 -300 800 600""#));
    assert_eq!(svg.matches("<circle").count(), 4);
    assert_eq!(svg.matches("<line").count(), 2);
    assert_eq!(svg.matches("rgb(98, 255, 0)").count(), 1);
}

#[test]
#[traced_test]
fn test_hover_is_logged() {
    let mut view = settled_view();
    view.node_entered(0);
    view.node_clicked(0);
    assert!(logs_contain("hover"));
    assert!(logs_contain("open detail page"));
}
