use cotizador_types::{Rect, Size};

pub const MARGIN: f32 = 72.0;
pub const LOGO_SIZE: f32 = 80.0;

pub const TITLE_FONT_SIZE: f32 = 16.0;
pub const META_FONT_SIZE: f32 = 10.0;
pub const HEADING_FONT_SIZE: f32 = 12.0;
pub const BODY_FONT_SIZE: f32 = 11.0;
pub const FOOTER_FONT_SIZE: f32 = 9.0;

/// Advance between body lines and between summary rows.
pub const LINE_HEIGHT: f32 = 16.0;
/// Gap below a section heading.
pub const HEADING_GAP: f32 = 18.0;
/// Gap between the detail block and the summary heading.
pub const SECTION_GAP: f32 = 22.0;

pub const RULE_WIDTH: f32 = 1.0;

/// Fixed positions of the quote page, derived from the page size.
///
/// Everything hangs from the top edge except the footer, which sits on the
/// bottom margin. None of the positions depend on whether a logo is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteLayout {
    pub page: Size,
    pub left_x: f32,
    pub right_x: f32,
    pub title_y: f32,
    pub logo: Rect,
    pub header_rule_y: f32,
    pub date_y: f32,
    pub client_y: f32,
    pub advisor_y: f32,
    pub detail_heading_y: f32,
    pub footer_rule_y: f32,
    pub footer_text_y: f32,
}

impl QuoteLayout {
    pub fn for_page(page: Size) -> Self {
        let top = page.height;
        Self {
            page,
            left_x: MARGIN,
            right_x: page.width - MARGIN,
            title_y: top - MARGIN,
            logo: Rect::new(page.width - MARGIN - LOGO_SIZE, top - 90.0, LOGO_SIZE, LOGO_SIZE),
            header_rule_y: top - 105.0,
            date_y: top - 125.0,
            client_y: top - 139.0,
            advisor_y: top - 153.0,
            detail_heading_y: top - 185.0,
            footer_rule_y: 90.0,
            footer_text_y: MARGIN,
        }
    }
}
