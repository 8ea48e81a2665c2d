use approx::assert_relative_eq;
use barchart_rs::api::{BarChart, TimerState};
use barchart_rs::core::{ChartConfig, DataPoint, PaintPhase};
use barchart_rs::interaction::HoverEvent;
use barchart_rs::render::NullRenderer;

fn chart(animated: bool) -> BarChart<NullRenderer> {
    let config = ChartConfig::default()
        .with_size(200.0, 100.0)
        .with_window(0, 2)
        .with_animated(animated);
    let mut chart = BarChart::new(NullRenderer::default(), config);
    chart.set_data(vec![DataPoint::new("A", 10.0), DataPoint::new("B", 20.0)]);
    chart
}

#[test]
fn hover_before_entrance_completes_shows_no_tooltip() {
    let mut chart = chart(true);
    chart.render(0.0).expect("first paint");
    assert!(chart.hover_enter(1));
    assert_eq!(chart.hovered(), Some(1));
    assert!(chart.tooltip().expect("tooltip").is_none());
}

#[test]
fn first_paint_arms_entrance_timer() {
    let mut chart = chart(true);
    assert_eq!(chart.paint_phase(), PaintPhase::BeforeFirstPaint);
    assert_eq!(chart.entrance_timer().state(), TimerState::Idle);

    chart.render(2.0).expect("first paint");
    assert_eq!(chart.paint_phase(), PaintPhase::AfterFirstPaint);
    // Bar B: 0.1s stagger + full-height duration of 1s.
    match chart.entrance_timer().state() {
        TimerState::Pending { deadline } => assert_relative_eq!(deadline, 3.1, epsilon = 1e-9),
        other => panic!("unexpected timer state: {other:?}"),
    }

    chart.render(2.5).expect("second paint");
    assert!(chart.entrance_timer().is_pending());
}

#[test]
fn entrance_completion_enables_tooltip() {
    let mut chart = chart(true);
    chart.render(0.0).expect("first paint");
    chart.hover_enter(1);

    assert!(!chart.advance_clock(1.0));
    assert!(!chart.entrance_completed());
    assert!(chart.advance_clock(1.2));
    assert!(chart.entrance_completed());
    assert!(!chart.advance_clock(5.0));

    let tooltip = chart.tooltip().expect("tooltip").expect("visible");
    assert_eq!(tooltip.text, "B: 20");
    assert_relative_eq!(tooltip.x, 124.0);
    assert_relative_eq!(tooltip.y, 19.0 - 30.0 - 10.0);
    assert_relative_eq!(tooltip.center_x(), 164.0);
}

#[test]
fn static_chart_is_interactive_after_first_paint() {
    let mut chart = chart(false);
    chart.hover_enter(0);
    assert!(chart.tooltip().expect("tooltip").is_none());

    chart.render(0.0).expect("first paint");
    assert!(chart.entrance_completed());
    assert_eq!(chart.entrance_timer().state(), TimerState::Idle);
    let tooltip = chart.tooltip().expect("tooltip").expect("visible");
    assert_eq!(tooltip.text, "A: 10");
}

#[test]
fn teardown_cancels_pending_entrance() {
    let mut chart = chart(true);
    chart.render(0.0).expect("first paint");
    assert!(chart.teardown());
    assert!(chart.is_torn_down());
    assert_eq!(chart.entrance_timer().state(), TimerState::Cancelled);

    assert!(!chart.advance_clock(100.0));
    assert!(!chart.entrance_completed());
    assert!(!chart.teardown());
}

#[test]
fn teardown_before_first_paint_keeps_timer_cancelled() {
    let mut chart = chart(true);
    assert!(!chart.teardown());
    chart.render(0.0).expect("paint after teardown");
    assert_eq!(chart.entrance_timer().state(), TimerState::Cancelled);
}

#[test]
fn entrance_grows_bars_from_the_baseline() {
    let mut chart = chart(true);
    chart.render(0.0).expect("first paint");

    let start = chart.build_frame(0.0).expect("start frame");
    assert_relative_eq!(start.rects[0].height, 0.0);
    assert_relative_eq!(start.rects[0].y, 120.0);

    let mid = chart.build_frame(0.25).expect("mid frame");
    let mid_height = mid.rects[0].height;
    assert!(mid_height > 0.0 && mid_height < 50.0);

    let settled = chart.build_frame(2.0).expect("settled frame");
    assert_relative_eq!(settled.rects[0].height, 50.0);
    assert_relative_eq!(settled.rects[1].height, 100.0);
    assert_relative_eq!(settled.rects[1].y, 19.0);
}

#[test]
fn hovered_bar_uses_hover_fill_once_settled() {
    let mut chart = chart(false);
    chart.render(0.0).expect("first paint");
    chart.hover_enter(0);

    let frame = chart.build_frame(0.0).expect("frame");
    let hover_fill = chart.config().hover_color().to_color();
    let rest_fill = chart.config().bar_color.to_color();
    assert_eq!(frame.rects[0].fill_color, hover_fill);
    assert_eq!(frame.rects[1].fill_color, rest_fill);

    assert!(chart.hover_leave());
    let frame = chart.build_frame(0.0).expect("frame");
    assert_eq!(frame.rects[0].fill_color, rest_fill);
}

#[test]
fn hover_outside_new_window_is_cleared() {
    let mut chart = chart(false);
    chart.render(0.0).expect("first paint");
    chart.handle_hover(HoverEvent::Enter(1));

    chart.set_window(1, 1);
    assert_eq!(chart.hovered(), None);
}

#[test]
fn empty_chart_renders_without_bars() {
    let config = ChartConfig::default();
    let mut chart = BarChart::new(NullRenderer::default(), config);
    chart.render(0.0).expect("empty paint");
    chart.hover_enter(0);

    assert!(chart.tooltip().expect("tooltip").is_none());
    assert!(chart.animation_plan().expect("plan").is_empty());
    let renderer = chart.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_rect_count, 0);
}
