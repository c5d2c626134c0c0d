use crate::core::{AxisParameters, DotPlotLayout, FormattingConfig, ScatterLayout};
use crate::error::PlotResult;
use crate::render::{CirclePrimitive, LinePrimitive, PlotFrame, TextPrimitive};

use super::{PlotEngineConfig, PlotStyle};

/// Dots over a horizontal axis drawn in the reserved bottom band.
pub(super) fn build_dot_plot_frame(
    layout: &DotPlotLayout,
    config: PlotEngineConfig,
) -> PlotResult<PlotFrame> {
    let area = config.plot_area()?;
    let style = config.style;
    let mut frame = PlotFrame::new(config.viewport);

    for dot in layout.project(area)? {
        frame = frame.with_circle(CirclePrimitive::new(
            dot.x_px,
            dot.y_px,
            dot.radius_px,
            style.dot_color,
        ));
    }

    push_horizontal_axis(
        &mut frame,
        &layout.axis,
        f64::from(area.width),
        f64::from(area.height),
        style,
        config.formatting,
    )?;
    frame.validate()?;
    Ok(frame)
}

/// Points, both axes and (when present) the least-squares line.
pub(super) fn build_scatter_frame(
    layout: &ScatterLayout,
    config: PlotEngineConfig,
) -> PlotResult<PlotFrame> {
    let area = config.plot_area()?;
    let style = config.style;
    let width = f64::from(area.width);
    let height = f64::from(area.height);
    let radius = config.dot_plot.dot_diameter_px / 2.0;
    let mut frame = PlotFrame::new(config.viewport);

    for mark in layout.project(area)? {
        frame = frame.with_circle(CirclePrimitive::new(
            mark.x_px,
            mark.y_px,
            radius,
            style.dot_color,
        ));
    }

    push_horizontal_axis(
        &mut frame,
        &layout.x_axis,
        width,
        height,
        style,
        config.formatting,
    )?;
    push_vertical_axis(&mut frame, &layout.y_axis, height, style, config.formatting)?;

    if let Some(fit) = layout.fit {
        let x_scale = layout.x_axis.scale()?;
        let y_scale = layout.y_axis.scale()?;
        let (x_start, x_end) = (layout.x_axis.axis_min, layout.x_axis.axis_max);
        frame = frame.with_line(LinePrimitive::new(
            x_scale.domain_to_pixel(x_start, width)?,
            y_scale.domain_to_pixel_inverted(fit.predict(x_start), height)?,
            x_scale.domain_to_pixel(x_end, width)?,
            y_scale.domain_to_pixel_inverted(fit.predict(x_end), height)?,
            style.stroke_width_px,
            style.fit_line_color,
        ));
    }

    frame.validate()?;
    Ok(frame)
}

fn push_horizontal_axis(
    frame: &mut PlotFrame,
    axis: &AxisParameters,
    width: f64,
    axis_y: f64,
    style: PlotStyle,
    formatting: FormattingConfig,
) -> PlotResult<()> {
    let scale = axis.scale()?;
    frame.lines.push(LinePrimitive::new(
        0.0,
        axis_y,
        width,
        axis_y,
        style.stroke_width_px,
        style.axis_color,
    ));

    for tick in axis.ticks(formatting) {
        let x = scale.domain_to_pixel(tick.value, width)?;
        let length = if tick.major {
            style.major_tick_length_px
        } else {
            style.minor_tick_length_px
        };
        frame.lines.push(LinePrimitive::new(
            x,
            axis_y,
            x,
            axis_y + length,
            style.stroke_width_px,
            style.axis_color,
        ));
        if let Some(label) = tick.label {
            frame.texts.push(TextPrimitive::new(
                label,
                x,
                axis_y + style.major_tick_length_px + style.label_font_size_px,
                style.label_font_size_px,
                style.label_color,
            ));
        }
    }
    Ok(())
}

fn push_vertical_axis(
    frame: &mut PlotFrame,
    axis: &AxisParameters,
    height: f64,
    style: PlotStyle,
    formatting: FormattingConfig,
) -> PlotResult<()> {
    let scale = axis.scale()?;
    frame.lines.push(LinePrimitive::new(
        0.0,
        0.0,
        0.0,
        height,
        style.stroke_width_px,
        style.axis_color,
    ));

    for tick in axis.ticks(formatting) {
        let y = scale.domain_to_pixel_inverted(tick.value, height)?;
        let length = if tick.major {
            style.major_tick_length_px
        } else {
            style.minor_tick_length_px
        };
        frame.lines.push(LinePrimitive::new(
            0.0,
            y,
            length,
            y,
            style.stroke_width_px,
            style.axis_color,
        ));
        if let Some(label) = tick.label {
            frame.texts.push(TextPrimitive::new(
                label,
                style.major_tick_length_px + style.label_font_size_px,
                y,
                style.label_font_size_px,
                style.label_color,
            ));
        }
    }
    Ok(())
}
