use chrono::NaiveDate;
use cotizador::{
    DownPayment, FixedClock, InMemoryResourceProvider, QuoteGenerator, QuoteInput, QuoteSettings,
    Term,
};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::sync::Arc;

/// The stock lot, priced at 7 % down over five years.
pub fn sample_input() -> QuoteInput {
    QuoteInput {
        lot: "2-7-29".into(),
        client: "Jane Doe".into(),
        advisor: "Carlos Pérez".into(),
        area_m2: 189.0,
        base_price: 90_587.41,
        term: Term::new(5).unwrap(),
        down_payment: DownPayment::Percentage(7.0),
    }
}

pub fn fixed_clock(hour: u32, minute: u32) -> Arc<FixedClock> {
    let at = NaiveDate::from_ymd_opt(2025, 3, 14)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap();
    Arc::new(FixedClock(at))
}

/// A small opaque PNG, enough to exercise image embedding.
pub fn logo_png() -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(RgbaImage::from_fn(16, 16, |x, _| {
        Rgba([0, 80, 160, if x < 8 { 255 } else { 0 }])
    }))
    .write_to(&mut cursor, ImageFormat::Png)
    .unwrap();
    cursor.into_inner()
}

/// Generator with no logo and a clock frozen at 2025-03-14 09:30.
pub fn generator_without_logo() -> QuoteGenerator {
    QuoteGenerator::builder()
        .with_resource_provider(Arc::new(InMemoryResourceProvider::new()))
        .with_clock(fixed_clock(9, 30))
        .build()
        .unwrap()
}

pub fn generator_with_logo(logo: Vec<u8>) -> QuoteGenerator {
    let resources = InMemoryResourceProvider::new()
        .with_asset("logo.png", logo)
        .unwrap();
    QuoteGenerator::builder()
        .with_settings(QuoteSettings::default())
        .with_resource_provider(Arc::new(resources))
        .with_clock(fixed_clock(9, 30))
        .build()
        .unwrap()
}
