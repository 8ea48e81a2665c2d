use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{
    BarAnimation, BarSample, ChartConfig, ChartLayout, DataPoint, MeasuredExtents, PaintPhase,
    TooltipAnchor, entrance_total_secs, layout_chart, locate_tooltip, plan_animation,
    select_window,
};
use crate::error::ChartResult;
use crate::interaction::{HoverEvent, HoverState};
use crate::render::{RenderFrame, Renderer, TextMeasurer};

use super::entrance_timer::EntranceTimer;
use super::frame_builder::build_render_frame;
use super::measurement::{ExtentCache, ExtentChannel, MeasurementOutcome, MeasurementReport};

/// Whether the current layout already reflects measured label extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutPass {
    /// Computed before the labels of the current inputs were measured.
    Provisional,
    /// Recomputed once with measured extents; no further correction follows.
    Final,
}

/// One bar chart instance.
///
/// Owns everything that varies per instance: data, normalized configuration,
/// the measured-extent cache, hover state, the entrance timer and paint phase.
/// Every layout is recomputed wholesale from these inputs.
pub struct BarChart<R: Renderer> {
    renderer: R,
    config: ChartConfig,
    data: Vec<DataPoint>,
    extents: ExtentCache,
    hover: HoverState,
    entrance_timer: EntranceTimer,
    entrance_completed: bool,
    entrance_started_at: Option<f64>,
    paint_phase: PaintPhase,
    pass: LayoutPass,
    generation: u64,
    torn_down: bool,
}

impl<R: Renderer> BarChart<R> {
    #[must_use]
    pub fn new(renderer: R, config: ChartConfig) -> Self {
        Self {
            renderer,
            config: config.normalized(),
            data: Vec::new(),
            extents: ExtentCache::default(),
            hover: HoverState::default(),
            entrance_timer: EntranceTimer::default(),
            entrance_completed: false,
            entrance_started_at: None,
            paint_phase: PaintPhase::BeforeFirstPaint,
            pass: LayoutPass::Provisional,
            generation: 0,
            torn_down: false,
        }
    }

    pub fn set_data(&mut self, data: Vec<DataPoint>) {
        debug!(count = data.len(), "replace chart data");
        self.data = data;
        self.invalidate_labels();
    }

    pub fn set_config(&mut self, config: ChartConfig) {
        self.config = config.normalized();
        debug!(
            width = self.config.width,
            height = self.config.height,
            initial_value = self.config.initial_value,
            number_shown_columns = self.config.number_shown_columns,
            "replace chart config"
        );
        self.invalidate_labels();
    }

    /// Moves the visible window without touching any other setting.
    pub fn set_window(&mut self, initial_value: i64, number_shown_columns: i64) {
        let config = self
            .config
            .clone()
            .with_window(initial_value, number_shown_columns);
        self.set_config(config);
    }

    #[must_use]
    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    /// Normalized configuration in effect.
    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn extents(&self) -> MeasuredExtents {
        self.extents.extents()
    }

    /// Generation that measurement reports for the current layout must carry.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn layout_pass(&self) -> LayoutPass {
        self.pass
    }

    #[must_use]
    pub fn paint_phase(&self) -> PaintPhase {
        self.paint_phase
    }

    #[must_use]
    pub fn entrance_completed(&self) -> bool {
        self.entrance_completed
    }

    #[must_use]
    pub fn entrance_timer(&self) -> EntranceTimer {
        self.entrance_timer
    }

    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hover.hovered()
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Layout for the current inputs and latest measured extents.
    pub fn layout(&self) -> ChartResult<ChartLayout> {
        layout_chart(&self.data, &self.config, self.extents.extents())
    }

    /// Transition plan for the current paint phase.
    pub fn animation_plan(&self) -> ChartResult<Vec<BarAnimation>> {
        let layout = self.layout()?;
        Ok(plan_animation(&layout, &self.config, self.paint_phase))
    }

    pub fn tooltip(&self) -> ChartResult<Option<TooltipAnchor>> {
        let layout = self.layout()?;
        Ok(locate_tooltip(
            self.hover.hovered(),
            self.entrance_completed,
            &layout,
        ))
    }

    pub fn hover_enter(&mut self, position: usize) -> bool {
        self.handle_hover(HoverEvent::Enter(position))
    }

    pub fn hover_leave(&mut self) -> bool {
        self.handle_hover(HoverEvent::Leave)
    }

    pub fn handle_hover(&mut self, event: HoverEvent) -> bool {
        let changed = self.hover.apply(event);
        if changed {
            trace!(
                ?event,
                interactive = self.entrance_completed,
                "hover state changed"
            );
        }
        changed
    }

    /// Applies one measurement; returns whether a re-layout is due.
    ///
    /// Reports taken for older data or config are ignored.
    pub fn apply_measurement(&mut self, report: MeasurementReport) -> bool {
        self.accept_measurement(report).unwrap_or(false)
    }

    /// Applies a batch of measurements and performs the single correction
    /// pass. The pass only becomes final when the batch holds at least one
    /// report for the current inputs.
    pub fn apply_measurements(
        &mut self,
        reports: impl IntoIterator<Item = MeasurementReport>,
    ) -> bool {
        let mut changed = false;
        let mut accepted = false;
        for report in reports {
            if let Some(moved) = self.accept_measurement(report) {
                accepted = true;
                changed |= moved;
            }
        }
        if accepted {
            self.pass = LayoutPass::Final;
        }
        debug!(
            changed,
            accepted,
            pass = ?self.pass,
            generation = self.generation,
            "label measurements applied"
        );
        changed
    }

    /// `None` when the report is stale, otherwise whether the extent moved.
    fn accept_measurement(&mut self, report: MeasurementReport) -> Option<bool> {
        if report.generation < self.generation {
            warn!(
                channel = ?report.channel,
                generation = report.generation,
                current_generation = self.generation,
                "ignoring label measurement taken for previous inputs"
            );
            return None;
        }
        match self.extents.apply(report) {
            MeasurementOutcome::Accepted { changed } => Some(changed),
            MeasurementOutcome::Stale { latest_generation } => {
                warn!(
                    channel = ?report.channel,
                    generation = report.generation,
                    latest_generation,
                    "ignoring stale label measurement"
                );
                None
            }
        }
    }

    /// Measures the three label channels for the current inputs and applies
    /// them. Does nothing once the layout is final for these inputs.
    ///
    /// Returns whether the layout changed.
    pub fn measure_labels(&mut self, measurer: &mut impl TextMeasurer) -> ChartResult<bool> {
        if self.pass == LayoutPass::Final {
            return Ok(false);
        }
        let reports = self.measure_channels(measurer)?;
        Ok(self.apply_measurements(reports))
    }

    fn measure_channels(
        &self,
        measurer: &mut impl TextMeasurer,
    ) -> ChartResult<[MeasurementReport; 3]> {
        let config = &self.config;
        let y_label = measurer.measure_text(&config.y_axis_label, config.label_font_size)?;
        let x_label = measurer.measure_text(&config.x_axis_label, config.label_font_size)?;

        let slice = select_window(
            &self.data,
            config.initial_value,
            config.number_shown_columns,
        );
        let mut tick_max: f64 = 0.0;
        for bar in slice.iter() {
            let extent = measurer.measure_text(&bar.point.label, config.tick_label_font_size)?;
            tick_max = tick_max.max(extent.height);
        }

        Ok([
            MeasurementReport::new(self.generation, ExtentChannel::YLabelWidth, y_label.width),
            MeasurementReport::new(self.generation, ExtentChannel::XLabelHeight, x_label.height),
            MeasurementReport::new(
                self.generation,
                ExtentChannel::TickLabelMaxHeight,
                tick_max,
            ),
        ])
    }

    /// Advances the host clock; returns true when the entrance just completed.
    pub fn advance_clock(&mut self, now: f64) -> bool {
        if self.torn_down {
            return false;
        }
        let fired = self.entrance_timer.poll(now);
        trace!(now, fired, "entrance timer polled");
        if fired {
            self.entrance_completed = true;
            debug!(now, "entrance sequence completed");
        }
        fired
    }

    /// Frame for host time `now`, without side effects.
    pub fn build_frame(&self, now: f64) -> ChartResult<RenderFrame> {
        let layout = self.layout()?;
        let samples = self.bar_samples(&layout, now);
        let tooltip = locate_tooltip(self.hover.hovered(), self.entrance_completed, &layout);
        Ok(build_render_frame(
            &layout,
            &self.config,
            &samples,
            tooltip.as_ref(),
        ))
    }

    /// Paints the chart at host time `now`.
    ///
    /// The first successful paint starts the entrance sequence and arms the
    /// entrance timer; later paints only sample it.
    pub fn render(&mut self, now: f64) -> ChartResult<()> {
        let frame = self.build_frame(now)?;
        self.renderer.render(&frame)?;

        if self.paint_phase == PaintPhase::BeforeFirstPaint {
            self.start_entrance(now)?;
            self.paint_phase = PaintPhase::AfterFirstPaint;
        }
        debug!(
            now,
            pass = ?self.pass,
            rects = frame.rects.len(),
            canvas_width = frame.canvas.width,
            canvas_height = frame.canvas.height,
            "chart rendered"
        );
        Ok(())
    }

    /// Cancels the pending entrance timer; the instance stops reacting to the
    /// clock. Returns whether a pending timer was cancelled.
    pub fn teardown(&mut self) -> bool {
        self.torn_down = true;
        let cancelled = self.entrance_timer.cancel();
        debug!(cancelled, "chart torn down");
        cancelled
    }

    #[must_use]
    pub fn into_renderer(mut self) -> R {
        self.teardown();
        self.renderer
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn start_entrance(&mut self, now: f64) -> ChartResult<()> {
        self.entrance_started_at = Some(now);
        if !self.config.animated {
            self.entrance_completed = true;
            return Ok(());
        }
        let layout = self.layout()?;
        let plan = plan_animation(&layout, &self.config, PaintPhase::BeforeFirstPaint);
        let total = entrance_total_secs(&plan);
        self.entrance_timer.schedule(now, total);
        debug!(now, total, bars = plan.len(), "entrance timer scheduled");
        Ok(())
    }

    fn bar_samples(&self, layout: &ChartLayout, now: f64) -> Vec<BarSample> {
        // Entrance sampling always follows the first-paint timing.
        let plan = plan_animation(layout, &self.config, PaintPhase::BeforeFirstPaint);
        let hovered = self.hover.hovered();
        plan.iter()
            .map(|animation| {
                if self.entrance_completed {
                    let mut sample = animation.rest();
                    if hovered == Some(animation.position) {
                        sample.fill = animation.hover_fill;
                    }
                    return sample;
                }
                let elapsed = self.entrance_started_at.map_or(0.0, |start| now - start);
                animation.sample(elapsed)
            })
            .collect()
    }

    fn invalidate_labels(&mut self) {
        self.generation += 1;
        self.pass = LayoutPass::Provisional;
        let visible = select_window(
            &self.data,
            self.config.initial_value,
            self.config.number_shown_columns,
        )
        .len();
        if self.hover.retain_within(visible) {
            trace!(visible, "hovered bar left the window");
        }
    }
}
