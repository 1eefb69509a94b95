use yew::prelude::*;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use shared::trends::MONTH_NAMES;
use shared::{year_style, TrendSeries};

use crate::services::Logger;

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 350;
const FALLBACK_LINE_COLOR: RGBColor = RGBColor(136, 136, 136);

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    pub title: String,
    pub series: TrendSeries,
    pub current_year: i32,
    #[prop_or_default]
    pub loading: bool,
}

pub struct TrendChart {
    canvas_ref: NodeRef,
}

impl Component for TrendChart {
    type Message = ();
    type Properties = TrendChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, _ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        // redrawn from `rendered`
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let props = ctx.props();
        if props.series.is_empty() {
            return;
        }

        if let Err(e) = self.draw_chart(&props.series, props.current_year) {
            Logger::error_with_component("trend_chart", &format!("Failed to draw {}: {}", props.title, e));
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div class="trend-chart-container">
                <div class="chart-title-header">
                    <h3 class="chart-title">{&props.title}</h3>
                </div>

                {if props.loading {
                    html! {
                        <div class="chart-loading">
                            <div class="loading-spinner"></div>
                            <p>{"Loading chart data..."}</p>
                        </div>
                    }
                } else if props.series.is_empty() {
                    html! {
                        <div class="chart-empty">
                            <p>{"No spending recorded"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="chart-content">
                            <canvas
                                ref={self.canvas_ref.clone()}
                                class="trend-chart-canvas"
                                width={CANVAS_WIDTH.to_string()}
                                height={CANVAS_HEIGHT.to_string()}
                            ></canvas>
                        </div>
                    }
                }}
            </div>
        }
    }
}

impl TrendChart {
    fn draw_chart(&self, series: &TrendSeries, current_year: i32) -> Result<(), String> {
        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return Ok(()),
        };

        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let backend = CanvasBackend::with_canvas_object(canvas)
            .ok_or_else(|| "canvas has no 2d context".to_string())?;
        let root = backend.into_drawing_area();
        root.fill(&WHITE).map_err(|e| format!("{:?}", e))?;

        let (y_min, y_max) = padded_range(series.value_range());

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(0i32..11i32, y_min..y_max)
            .map_err(|e| format!("{:?}", e))?;

        chart
            .configure_mesh()
            .y_desc("Cumulative spend (£)")
            .x_labels(12)
            .x_label_formatter(&|month: &i32| month_label(*month).to_string())
            .y_label_formatter(&|value: &f64| format!("£{:.0}", value))
            .label_style(("sans-serif", 12, &RGBColor(102, 126, 234)))
            .axis_style(&RGBColor(230, 230, 230))
            .bold_line_style(&RGBColor(245, 245, 245))
            .light_line_style(&RGBColor(250, 250, 250))
            .draw()
            .map_err(|e| format!("{:?}", e))?;

        for year in &series.years {
            let style = year_style(*year, current_year);
            let line_style = hex_color(style.color)
                .unwrap_or(FALLBACK_LINE_COLOR)
                .stroke_width(style.stroke_width);

            chart
                .draw_series(LineSeries::new(
                    series
                        .line(*year)
                        .into_iter()
                        .map(|(month, value)| (month as i32, value)),
                    line_style,
                ))
                .map_err(|e| format!("{:?}", e))?
                .label(year.to_string())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(&RGBColor(200, 200, 200))
            .draw()
            .map_err(|e| format!("{:?}", e))?;

        root.present().map_err(|e| format!("{:?}", e))
    }
}

fn month_label(index: i32) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|index| MONTH_NAMES.get(index))
        .copied()
        .unwrap_or("")
}

/// Adds headroom above the highest line; a flat series still gets a visible span
fn padded_range((min, max): (f64, f64)) -> (f64, f64) {
    let span = (max - min).max(1.0);
    let padding = span * 0.1;
    let lower = if min < 0.0 { min - padding } else { 0.0 };
    (lower, max + padding)
}

/// Parses `#RRGGBB`
fn hex_color(hex: &str) -> Option<RGBColor> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        let color = hex_color("#3357FF").unwrap();
        assert_eq!((color.0, color.1, color.2), (0x33, 0x57, 0xFF));
        assert!(hex_color("3357FF").is_none());
        assert!(hex_color("#33").is_none());
        assert!(hex_color("#GG0000").is_none());
    }

    #[test]
    fn test_every_year_color_parses() {
        for (_, color) in shared::trends::YEAR_COLORS {
            assert!(hex_color(color).is_some(), "{} should parse", color);
        }
        assert!(hex_color(shared::trends::FALLBACK_YEAR_COLOR).is_some());
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(0), "Jan");
        assert_eq!(month_label(11), "Dec");
        assert_eq!(month_label(12), "");
        assert_eq!(month_label(-1), "");
    }

    #[test]
    fn test_padded_range() {
        assert_eq!(padded_range((0.0, 0.0)), (0.0, 0.1));
        let (lower, upper) = padded_range((0.0, 1000.0));
        assert_eq!(lower, 0.0);
        assert!((upper - 1100.0).abs() < 1e-9);
        let (lower, _) = padded_range((-50.0, 50.0));
        assert!(lower < -50.0);
    }
}
