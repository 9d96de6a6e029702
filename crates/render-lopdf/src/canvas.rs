use cotizador_render_core::StandardFont;
use cotizador_render_core::metrics::to_win_ansi;
use cotizador_types::Rect;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

#[derive(Default, Clone, PartialEq)]
struct GraphicsState {
    font: Option<StandardFont>,
    font_size: f32,
    line_width: Option<f32>,
}

/// Accumulates the drawing operations of one page.
///
/// Coordinates are PDF user space: points, origin bottom-left, `y` is the
/// text baseline.
pub struct PageCanvas {
    content: Content,
    state: GraphicsState,
}

impl Default for PageCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl PageCanvas {
    pub fn new() -> Self {
        Self {
            content: Content { operations: vec![] },
            state: GraphicsState::default(),
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_font(&mut self, font: StandardFont, size: f32) {
        if self.state.font != Some(font) || self.state.font_size != size {
            self.push(
                "Tf",
                vec![Object::Name(font.resource_name().as_bytes().to_vec()), size.into()],
            );
            self.state.font = Some(font);
            self.state.font_size = size;
        }
    }

    /// Draws `text` starting at `x`.
    pub fn draw_text(&mut self, font: StandardFont, size: f32, x: f32, y: f32, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        self.push("BT", vec![]);
        self.set_font(font, size);
        self.push("Td", vec![x.into(), y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    /// Draws `text` so that it ends at `right_x`.
    pub fn draw_text_right(&mut self, font: StandardFont, size: f32, right_x: f32, y: f32, text: &str) {
        let width = font.string_width(text, size);
        self.draw_text(font, size, right_x - width, y, text);
    }

    /// Strokes a straight line.
    pub fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32) {
        if self.state.line_width != Some(width) {
            self.push("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
        self.push("m", vec![from.0.into(), from.1.into()]);
        self.push("l", vec![to.0.into(), to.1.into()]);
        self.push("S", vec![]);
    }

    /// Paints the image XObject `/resource_name` scaled into `rect`.
    pub fn draw_image(&mut self, resource_name: &str, rect: Rect) {
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                rect.width.into(),
                0.0f32.into(),
                0.0f32.into(),
                rect.height.into(),
                rect.x.into(),
                rect.y.into(),
            ],
        );
        self.push("Do", vec![Object::Name(resource_name.as_bytes().to_vec())]);
        self.push("Q", vec![]);
    }
}
