//! Bar canvas pane
//!
//! Paints a [`DrawList`] onto a ratatui [`Canvas`]. The draw list lives in
//! surface coordinates (origin top-left, y down) while the canvas grid has its
//! origin bottom-left with y up, so every y is flipped against
//! [`SURFACE_HEIGHT`]. The canvas y-range extends below zero to leave room for
//! the height labels, which sit under each bar.

use crate::render::{DrawList, DrawOp, Fill, SurfaceRect, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Rectangle},
        Block, Borders, Paragraph,
    },
    Frame,
};

/// Surface units reserved under the bars for labels
const LABEL_BAND: f64 = 25.0;

/// Render the bar canvas pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, draw_list: Option<&DrawList>, title: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let Some(draw_list) = draw_list else {
        let paragraph = Paragraph::new("(nothing drawn yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    // One vertical fill line per horizontal cell is enough to cover a bar
    let inner_width = area.width.saturating_sub(2).max(1) as f64;
    let fill_step = (SURFACE_WIDTH as f64 / inner_width).max(1.0);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::HalfBlock)
        .background_color(DEFAULT_THEME.bg)
        .x_bounds([0.0, SURFACE_WIDTH as f64])
        .y_bounds([-LABEL_BAND, SURFACE_HEIGHT as f64])
        .paint(|ctx| paint(ctx, draw_list, fill_step));

    frame.render_widget(canvas, area);
}

fn paint(ctx: &mut Context, draw_list: &DrawList, fill_step: f64) {
    for op in draw_list.iter() {
        match op {
            // the canvas starts blank on every render
            DrawOp::Clear { .. } => {}
            DrawOp::FillRect { rect, fill } => {
                let color = match fill {
                    Fill::Normal => DEFAULT_THEME.bar,
                    Fill::Highlighted => DEFAULT_THEME.bar_highlight,
                };
                let (x, y, w, h) = flip(rect);
                // only the part of the bar that lands on the surface
                let right = (x + w).min(SURFACE_WIDTH as f64);
                let mut column = x.max(0.0);
                while column <= right {
                    ctx.draw(&CanvasLine {
                        x1: column,
                        y1: y,
                        x2: column,
                        y2: y + h,
                        color,
                    });
                    column += fill_step;
                }
            }
            DrawOp::StrokeRect { rect } => {
                let (x, y, width, height) = flip(rect);
                ctx.draw(&Rectangle {
                    x,
                    y,
                    width,
                    height,
                    color: DEFAULT_THEME.bar_outline,
                });
            }
            DrawOp::Label { x, y, text } => {
                ctx.print(
                    *x as f64,
                    SURFACE_HEIGHT as f64 - *y as f64,
                    Span::styled(text.clone(), Style::default().fg(DEFAULT_THEME.label)),
                );
            }
        }
    }
}

/// Convert a surface rectangle into canvas `(x, y, width, height)`
fn flip(rect: &SurfaceRect) -> (f64, f64, f64, f64) {
    let bottom = SURFACE_HEIGHT as f64 - (rect.y as f64 + rect.height as f64);
    (
        rect.x as f64,
        bottom,
        rect.width as f64,
        rect.height as f64,
    )
}
