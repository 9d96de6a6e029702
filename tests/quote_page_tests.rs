mod common;

use common::fixtures::{fixed_clock, generator_without_logo, sample_input};
use common::pdf_assertions::{font_names, media_box, shown_text};
use common::{TestResult, generate, init_logger};
use cotizador::{DownPayment, GenerationError, InMemoryResourceProvider, PageSize, QuoteGenerator, QuoteSettings, Term};
use std::sync::Arc;

#[test]
fn test_reference_quote_renders_one_letter_page() -> TestResult {
    init_logger();
    let pdf = generate(&generator_without_logo(), &sample_input())?;

    assert_eq!(pdf.page_count(), 1);
    assert_eq!(media_box(&pdf.doc), vec![0.0, 0.0, 612.0, 792.0]);
    assert_eq!(font_names(&pdf.doc), vec!["Helvetica", "Helvetica-Bold"]);
    Ok(())
}

#[test]
fn test_reference_quote_figures() -> TestResult {
    let pdf = generate(&generator_without_logo(), &sample_input())?;

    assert!(pdf.has_text("Precio base: Q 90,587.41"));
    assert!(pdf.has_text("Q 6,341.12  (7.00%)"));
    assert!(pdf.has_text("Q 84,246.29"));
    assert!(pdf.has_text("5 años (60 meses)"));
    assert!(pdf.has_text("Q 2,326.79"));
    Ok(())
}

#[test]
fn test_header_and_metadata_block() -> TestResult {
    let pdf = generate(&generator_without_logo(), &sample_input())?;
    let shown = shown_text(&pdf.doc);

    let title = &shown[0];
    assert_eq!(title.text, "Cotización de Terreno");
    assert_eq!((title.x, title.y), (72.0, 720.0));
    assert_eq!((title.font.as_str(), title.size), ("F2", 16.0));

    let find = |text: &str| shown.iter().find(|t| t.text == text).unwrap();
    assert_eq!(find("Fecha: 2025-03-14 09:30").y, 667.0);
    assert_eq!(find("Cliente: Jane Doe").y, 653.0);
    assert_eq!(find("Asesor: Carlos Pérez").y, 639.0);
    assert_eq!(find("Desarrollado por M.Alfaro").y, 72.0);
    assert_eq!(find("Desarrollado por M.Alfaro").size, 9.0);
    Ok(())
}

#[test]
fn test_inputs_are_trimmed_before_rendering() -> TestResult {
    let mut input = sample_input();
    input.lot = "  2-7 29 ".into();
    input.client = " Ana Lopez  ".into();
    let pdf = generate(&generator_without_logo(), &input)?;

    assert!(pdf.has_text("Lote: 2-7 29"));
    assert!(pdf.has_text("Cliente: Ana Lopez"));
    assert_eq!(pdf.file_name, "cotizacion_lote_2-7_29_Ana_Lopez.pdf");
    Ok(())
}

#[test]
fn test_empty_client_produces_no_document() {
    let mut input = sample_input();
    input.client = "  ".into();
    let result = generator_without_logo().generate(&input);
    assert!(matches!(result, Err(GenerationError::Validation(_))));
}

#[test]
fn test_zero_price_renders_zero_figures() -> TestResult {
    let mut input = sample_input();
    input.base_price = 0.0;
    input.down_payment = DownPayment::Amount(500.0);

    for term in Term::all() {
        input.term = term;
        let pdf = generate(&generator_without_logo(), &input)?;
        assert!(pdf.has_text("Q 0.00  (0.00%)"));
        assert!(pdf.has_text("Precio base: Q 0.00"));
        assert_eq!(
            pdf.texts().iter().filter(|t| t.as_str() == "Q 0.00").count(),
            2,
            "balance and monthly payment should both be zero for {}",
            term
        );
    }
    Ok(())
}

#[test]
fn test_amount_mode_shows_derived_percentage() -> TestResult {
    let mut input = sample_input();
    input.base_price = 100_000.0;
    input.down_payment = DownPayment::Amount(12_500.0);
    input.term = Term::new(10)?;
    let pdf = generate(&generator_without_logo(), &input)?;

    assert!(pdf.has_text("Q 12,500.00  (12.50%)"));
    assert!(pdf.has_text("Q 87,500.00"));
    assert!(pdf.has_text("10 años (120 meses)"));
    // 87,500 × 0.01999317
    assert!(pdf.has_text("Q 1,749.40"));
    Ok(())
}

#[test]
fn test_same_clock_gives_identical_bytes() -> TestResult {
    let generator = generator_without_logo();
    let first = generator.generate(&sample_input())?;
    let second = generator.generate(&sample_input())?;
    assert_eq!(first.bytes, second.bytes);
    assert_eq!(first.content_type, "application/pdf");
    Ok(())
}

#[test]
fn test_only_the_date_changes_with_the_clock() -> TestResult {
    let later = QuoteGenerator::builder()
        .with_resource_provider(Arc::new(InMemoryResourceProvider::new()))
        .with_clock(fixed_clock(17, 5))
        .build()?;
    let a = generate(&generator_without_logo(), &sample_input())?.texts();
    let b = generate(&later, &sample_input())?.texts();

    let differing: Vec<(&String, &String)> = a.iter().zip(&b).filter(|(x, y)| x != y).collect();
    assert_eq!(a.len(), b.len());
    assert_eq!(
        differing,
        vec![(
            &"Fecha: 2025-03-14 09:30".to_string(),
            &"Fecha: 2025-03-14 17:05".to_string()
        )]
    );
    Ok(())
}

#[test]
fn test_settings_change_labels_and_page() -> TestResult {
    let settings = QuoteSettings::from_json(
        r#"{ "currencySymbol": "$", "footerText": "Inmobiliaria Norte", "pageSize": "Legal", "fileNamePrefix": "quote" }"#,
    )?;
    assert_eq!(settings.page_size, PageSize::Legal);
    let generator = QuoteGenerator::builder()
        .with_settings(settings)
        .with_resource_provider(Arc::new(InMemoryResourceProvider::new()))
        .with_clock(fixed_clock(9, 30))
        .build()?;
    let pdf = generate(&generator, &sample_input())?;

    assert_eq!(media_box(&pdf.doc), vec![0.0, 0.0, 612.0, 1008.0]);
    assert!(pdf.has_text("$ 2,326.79"));
    assert!(pdf.has_text("Inmobiliaria Norte"));
    assert_eq!(pdf.file_name, "quote_2-7-29_Jane_Doe.pdf");

    let shown = shown_text(&pdf.doc);
    assert_eq!(shown[0].y, 1008.0 - 72.0);
    Ok(())
}
