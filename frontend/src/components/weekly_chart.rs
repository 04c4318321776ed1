use backend::WeekdayMinutes;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const CANVAS_WIDTH: u32 = 420;
const CANVAS_HEIGHT: u32 = 220;
const TODAY_COLOR: RGBColor = RGBColor(99, 102, 241);
const OTHER_COLOR: RGBColor = RGBColor(229, 231, 235);
/// Horizontal share of each day slot left empty on either side of its bar
const BAR_GAP: f64 = 0.15;

/// Top of the y axis: the tallest bar rounded up to a half hour, at least an hour
pub fn chart_ceiling(max_minutes: u32) -> u32 {
    max_minutes.div_ceil(30).max(2) * 30
}

#[derive(Properties, PartialEq)]
pub struct WeeklyChartProps {
    pub week: Vec<WeekdayMinutes>,
}

/// Bar chart of study minutes per weekday, drawn on a canvas
pub struct WeeklyChart {
    canvas_ref: NodeRef,
}

impl Component for WeeklyChart {
    type Message = ();
    type Properties = WeeklyChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw_chart(&ctx.props().week);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="weekly-chart">
                <canvas
                    ref={self.canvas_ref.clone()}
                    class="weekly-chart-canvas"
                    width={CANVAS_WIDTH.to_string()}
                    height={CANVAS_HEIGHT.to_string()}
                ></canvas>
                <div class="weekly-chart-labels">
                    {for ctx.props().week.iter().map(|day| html! {
                        <span
                            class={classes!("weekly-chart-label", day.is_today.then_some("today"))}
                            title={format!("{} minutes", day.minutes)}
                        >
                            {day.label()}
                        </span>
                    })}
                </div>
            </div>
        }
    }
}

impl WeeklyChart {
    fn draw_chart(&self, week: &[WeekdayMinutes]) {
        if week.is_empty() {
            return;
        }

        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            return;
        };
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let Some(backend) = CanvasBackend::with_canvas_object(canvas) else {
            return;
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let max_minutes = week.iter().map(|d| d.minutes).max().unwrap_or(0);
        let ceiling = chart_ceiling(max_minutes) as f64;

        let mut chart = match ChartBuilder::on(&root)
            .margin(8)
            .build_cartesian_2d(0.0..week.len() as f64, 0.0..ceiling)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        let bars = week.iter().enumerate().map(|(slot, day)| {
            let left = slot as f64 + BAR_GAP;
            let right = slot as f64 + 1.0 - BAR_GAP;
            let color = if day.is_today { TODAY_COLOR } else { OTHER_COLOR };
            Rectangle::new([(left, 0.0), (right, day.minutes as f64)], color.filled())
        });

        if chart.draw_series(bars).is_err() {
            log::warn!("Failed to draw weekly chart");
            return;
        }

        if let Err(e) = root.present() {
            log::warn!("Failed to present weekly chart: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_ceiling_rounds_up_to_half_hours() {
        assert_eq!(chart_ceiling(150), 150);
        assert_eq!(chart_ceiling(151), 180);
        assert_eq!(chart_ceiling(45), 60);
        assert_eq!(chart_ceiling(0), 60);
    }
}
