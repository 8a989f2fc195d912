//! Drawing surfaces the heat map renders onto.

use std::collections::HashMap;
use std::sync::Arc;

use gpui::*;

use crate::data_types::Icon;

/// The primitives the renderer needs.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Bounds<Pixels>, color: Hsla);

    fn stroke_rect(&mut self, rect: Bounds<Pixels>, color: Hsla, width: Pixels);

    /// Draws `text` horizontally centered on `anchor.x` with its baseline at `anchor.y`.
    fn draw_text(&mut self, text: &str, anchor: Point<Pixels>, font_size: Pixels, color: Hsla);

    fn draw_icon(&mut self, icon: &Icon, bounds: Bounds<Pixels>);

    /// How far `text` rises above its baseline at `font_size`; zero when empty.
    fn text_height(&mut self, text: &str, font_size: Pixels) -> Pixels;
}

/// Paints into a live GPUI window.
pub struct WindowCanvas<'a> {
    window: &'a mut Window,
    cx: &'a mut App,
    icons: Option<&'a HashMap<SharedString, Arc<RenderImage>>>,
}

impl<'a> WindowCanvas<'a> {
    pub fn new(window: &'a mut Window, cx: &'a mut App) -> Self {
        Self {
            window,
            cx,
            icons: None,
        }
    }

    /// Ascent and descent of the default font, falling back to the whole
    /// font size above the baseline when the font cannot be resolved.
    fn font_metrics(&self, font_size: Pixels) -> (Pixels, Pixels) {
        let text_system = self.window.text_system();
        match text_system.font_id(&TextStyle::default().font()) {
            Ok(font_id) => {
                let descent = text_system.descent(font_id, font_size);
                (
                    text_system.ascent(font_id, font_size),
                    if descent < px(0.0) { -descent } else { descent },
                )
            }
            Err(err) => {
                tracing::debug!("failed to resolve default font: {err}");
                (font_size, px(0.0))
            }
        }
    }

    /// Images looked up by `Icon::name` when drawing icons.
    pub fn with_icons(mut self, icons: &'a HashMap<SharedString, Arc<RenderImage>>) -> Self {
        self.icons = Some(icons);
        self
    }
}

impl Canvas for WindowCanvas<'_> {
    fn fill_rect(&mut self, rect: Bounds<Pixels>, color: Hsla) {
        self.window.paint_quad(gpui::fill(rect, color));
    }

    fn stroke_rect(&mut self, rect: Bounds<Pixels>, color: Hsla, width: Pixels) {
        self.window
            .paint_quad(gpui::outline(rect, color, BorderStyle::Solid).border_widths(width));
    }

    fn draw_text(&mut self, text: &str, anchor: Point<Pixels>, font_size: Pixels, color: Hsla) {
        let run = TextRun {
            len: text.len(),
            font: TextStyle::default().font(),
            color,
            background_color: None,
            underline: None,
            strikethrough: None,
        };
        // Lines are painted from their top edge with the baseline centered
        // inside a line box of `font_size`.
        let (ascent, descent) = self.font_metrics(font_size);
        let baseline_offset = (font_size - ascent - descent) / 2.0 + ascent;

        if let Ok(lines) = self.window.text_system().shape_text(
            SharedString::from(text.to_string()),
            font_size,
            &[run],
            None,
            None,
        ) {
            for line in lines {
                let origin = point(anchor.x - line.width() / 2.0, anchor.y - baseline_offset);
                let _ = line.paint(origin, font_size, TextAlign::Left, None, self.window, self.cx);
            }
        }
    }

    fn draw_icon(&mut self, icon: &Icon, bounds: Bounds<Pixels>) {
        let Some(image) = self.icons.and_then(|icons| icons.get(&icon.name)) else {
            tracing::trace!(icon = %icon.name, "no image registered for icon");
            return;
        };
        if let Err(err) =
            self.window
                .paint_image(bounds, Corners::default(), image.clone(), 0, false)
        {
            tracing::debug!(icon = %icon.name, "failed to paint icon: {err}");
        }
    }

    fn text_height(&mut self, text: &str, font_size: Pixels) -> Pixels {
        if text.is_empty() {
            return px(0.0);
        }
        self.font_metrics(font_size).0
    }
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Bounds<Pixels>,
        color: Hsla,
    },
    StrokeRect {
        rect: Bounds<Pixels>,
        color: Hsla,
        width: Pixels,
    },
    Text {
        text: String,
        anchor: Point<Pixels>,
        font_size: Pixels,
        color: Hsla,
    },
    Icon {
        name: SharedString,
        bounds: Bounds<Pixels>,
    },
}

/// Records draw calls instead of painting them; for headless rendering
/// and frame comparisons.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn fills(&self) -> Vec<(Bounds<Pixels>, Hsla)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn strokes(&self) -> Vec<(Bounds<Pixels>, Hsla, Pixels)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokeRect { rect, color, width } => Some((*rect, *color, *width)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { .. }))
            .collect()
    }

    pub fn icons(&self) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Icon { .. }))
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Bounds<Pixels>, color: Hsla) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Bounds<Pixels>, color: Hsla, width: Pixels) {
        self.commands
            .push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn draw_text(&mut self, text: &str, anchor: Point<Pixels>, font_size: Pixels, color: Hsla) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            anchor,
            font_size,
            color,
        });
    }

    fn draw_icon(&mut self, icon: &Icon, bounds: Bounds<Pixels>) {
        self.commands.push(DrawCommand::Icon {
            name: icon.name.clone(),
            bounds,
        });
    }

    /// Uses the font size as the height of any non-empty text.
    fn text_height(&mut self, text: &str, font_size: Pixels) -> Pixels {
        if text.is_empty() {
            px(0.0)
        } else {
            font_size
        }
    }
}
