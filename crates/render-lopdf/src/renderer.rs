use crate::canvas::PageCanvas;
use crate::layout::{self, QuoteLayout};
use crate::logo::ImageXObject;
use crate::writer::StreamingPdfWriter;
use cotizador_render_core::metrics::to_win_ansi;
use cotizador_render_core::{
    DocumentRenderer, LogoImage, PDF_CONTENT_TYPE, QuoteDocument, RenderError, StandardFont, format,
};
use lopdf::{Object, StringFormat, dictionary};
use std::io::{Seek, Write};

const LOGO_RESOURCE: &str = "Im1";
const CREATOR: &str = "cotizador";
const PDF_VERSION: &str = "1.7";

/// Renders a quote onto a single PDF page with the two standard Helvetica
/// faces and an optional logo.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfQuoteRenderer;

impl LopdfQuoteRenderer {
    pub fn new() -> Self {
        Self
    }

    fn draw_page(
        &self,
        canvas: &mut PageCanvas,
        layout: &QuoteLayout,
        document: &QuoteDocument<'_>,
        with_logo: bool,
    ) {
        let input = document.input;
        let quote = document.quote;
        let labels = document.labels;
        let symbol = labels.currency_symbol.as_str();
        let left = layout.left_x;
        let right = layout.right_x;

        canvas.draw_text(
            StandardFont::HelveticaBold,
            layout::TITLE_FONT_SIZE,
            left,
            layout.title_y,
            &labels.title,
        );
        if with_logo {
            canvas.draw_image(LOGO_RESOURCE, layout.logo);
        }
        canvas.draw_line(
            (left, layout.header_rule_y),
            (right, layout.header_rule_y),
            layout::RULE_WIDTH,
        );

        let meta = [
            (
                layout.date_y,
                format!("Fecha: {}", document.generated_at.format("%Y-%m-%d %H:%M")),
            ),
            (layout.client_y, format!("Cliente: {}", input.client)),
            (layout.advisor_y, format!("Asesor: {}", input.advisor)),
        ];
        for (y, line) in &meta {
            canvas.draw_text(StandardFont::Helvetica, layout::META_FONT_SIZE, left, *y, line);
        }

        let mut y = layout.detail_heading_y;
        canvas.draw_text(
            StandardFont::HelveticaBold,
            layout::HEADING_FONT_SIZE,
            left,
            y,
            "Detalle",
        );
        y -= layout::HEADING_GAP;
        let details = [
            format!("Lote: {}", input.lot),
            format!("Área: {}", format::area(input.area_m2)),
            format!("Precio base: {}", format::money(symbol, quote.base_price)),
        ];
        for line in &details {
            canvas.draw_text(StandardFont::Helvetica, layout::BODY_FONT_SIZE, left, y, line);
            y -= layout::LINE_HEIGHT;
        }

        y -= layout::SECTION_GAP - layout::LINE_HEIGHT;
        canvas.draw_text(
            StandardFont::HelveticaBold,
            layout::HEADING_FONT_SIZE,
            left,
            y,
            &labels.summary_heading,
        );
        y -= layout::HEADING_GAP;
        let summary = [
            (
                "Enganche:",
                format!(
                    "{}  ({})",
                    format::money(symbol, quote.down_payment_amount),
                    format::percentage(quote.down_payment_percentage)
                ),
            ),
            ("Saldo a financiar:", format::money(symbol, quote.balance)),
            ("Plazo:", format::term(quote.term)),
            ("Cuota mensual:", format::money(symbol, quote.monthly_payment)),
        ];
        for (label, value) in &summary {
            canvas.draw_text(StandardFont::Helvetica, layout::BODY_FONT_SIZE, left, y, label);
            canvas.draw_text_right(StandardFont::Helvetica, layout::BODY_FONT_SIZE, right, y, value);
            y -= layout::LINE_HEIGHT;
        }

        canvas.draw_line(
            (left, layout.footer_rule_y),
            (right, layout.footer_rule_y),
            layout::RULE_WIDTH,
        );
        canvas.draw_text(
            StandardFont::Helvetica,
            layout::FOOTER_FONT_SIZE,
            left,
            layout.footer_text_y,
            &labels.footer_text,
        );
    }
}

fn text_object(text: &str) -> Object {
    Object::String(to_win_ansi(text), StringFormat::Literal)
}

impl<W: Write + Seek> DocumentRenderer<W> for LopdfQuoteRenderer {
    fn render(
        &self,
        document: &QuoteDocument<'_>,
        logo: Option<&LogoImage>,
        writer: W,
    ) -> Result<W, RenderError> {
        let page = document.page_size.dimensions_pt();
        let layout = QuoteLayout::for_page(page);
        let mut pdf = StreamingPdfWriter::new(writer, PDF_VERSION)?;

        for font in StandardFont::ALL {
            pdf.add_standard_font(font.resource_name(), font.base_font());
        }

        let with_logo = match logo {
            Some(logo) => match ImageXObject::from_encoded(&logo.data) {
                Ok(xobject) => {
                    pdf.add_image(LOGO_RESOURCE, xobject)?;
                    true
                }
                Err(e) => {
                    log::warn!("Skipping logo '{}': {}", logo.source, e);
                    false
                }
            },
            None => false,
        };

        let mut canvas = PageCanvas::new();
        self.draw_page(&mut canvas, &layout, document, with_logo);
        let content_id = pdf.write_content_stream(canvas.finish())?;
        pdf.add_page(vec![content_id], page);

        let creation_date = document.generated_at.format("D:%Y%m%d%H%M%S").to_string();
        pdf.set_info(dictionary! {
            "Title" => text_object(&format!("{} - Lote {}", document.labels.title, document.input.lot)),
            "Author" => text_object(&document.input.advisor),
            "Subject" => text_object(&format!("Cliente: {}", document.input.client)),
            "Creator" => text_object(CREATOR),
            "CreationDate" => text_object(&creation_date),
        });

        let writer = pdf.finish()?;
        log::info!(
            "Rendered quote for lot '{}' ({}, logo: {})",
            document.input.lot,
            document.page_size.name(),
            if with_logo { "yes" } else { "no" }
        );
        Ok(writer)
    }

    fn content_type(&self) -> &'static str {
        PDF_CONTENT_TYPE
    }
}
