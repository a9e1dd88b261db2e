//! Layout plan tests: pagination, header repetition, conditional rows.
//!
//! These assert on the abstract draw-command plan, not on PDF bytes —
//! the plan is where every layout decision lives.

#![cfg(feature = "pdf")]

use bijak::core::*;
use bijak::pdf::{CompanyProfile, DrawCmd, Page, plan_invoice};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn billing() -> Party {
    PartyBuilder::new("Ramesh Kumar")
        .shop_name("Kumar Traders")
        .phone("+91 98123 45678")
        .gstin("27AAPFU0939F1ZV")
        .address("Plot 14, Industrial Area Phase II, near the old flour mill")
        .city("Nagpur")
        .state("Maharashtra")
        .build()
}

fn small_invoice() -> Invoice {
    InvoiceBuilder::new("INV-2026-00010", date(2026, 4, 12))
        .billing(billing())
        .add_line(
            LineItemBuilder::new("Cement Bags", dec!(2), dec!(100))
                .hsn("2523")
                .gst_rate(dec!(5))
                .build(),
        )
        .add_line(LineItemBuilder::new("Binding Wire", dec!(1), dec!(50)).build())
        .gst(true)
        .build()
        .unwrap()
}

fn invoice_with_lines(count: usize) -> Invoice {
    let mut builder = InvoiceBuilder::new("INV-2026-00011", date(2026, 4, 12)).billing(billing());
    for i in 0..count {
        builder = builder.add_line(
            LineItemBuilder::new(format!("Item {}", i + 1), dec!(1), dec!(10))
                .gst_rate(dec!(18))
                .build(),
        );
    }
    builder.gst(true).build().unwrap()
}

fn page_texts(page: &Page) -> Vec<&str> {
    page.commands
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

fn has_text(page: &Page, needle: &str) -> bool {
    page_texts(page).iter().any(|t| t.contains(needle))
}

// --- P5: determinism ---

#[test]
fn identical_input_produces_identical_plan() {
    let invoice = invoice_with_lines(60);
    let profile = CompanyProfile::default();
    let first = plan_invoice(&invoice, &profile).unwrap();
    let second = plan_invoice(&invoice, &profile).unwrap();
    assert_eq!(first.page_count(), second.page_count());
    assert_eq!(first, second);
}

// --- pagination & header repetition ---

#[test]
fn small_invoice_fits_one_page() {
    let plan = plan_invoice(&small_invoice(), &CompanyProfile::default()).unwrap();
    assert_eq!(plan.page_count(), 1);
}

#[test]
fn long_table_breaks_and_repeats_headers() {
    let profile = CompanyProfile::default();
    let plan = plan_invoice(&invoice_with_lines(60), &profile).unwrap();
    assert!(plan.page_count() >= 2, "60 rows must overflow one page");

    for page in &plan.pages {
        // Full company header on every page…
        assert!(has_text(page, &profile.name));
        assert!(has_text(page, "Invoice No: INV-2026-00011"));
        // …and the table header again on continuation pages.
        assert!(has_text(page, "DESCRIPTION"));
    }

    // Every one of the 60 rows was placed exactly once.
    let placed: usize = plan
        .pages
        .iter()
        .map(|p| page_texts(p).iter().filter(|t| t.starts_with("Item ")).count())
        .sum();
    assert_eq!(placed, 60);
}

#[test]
fn totals_always_follow_a_header_on_their_page() {
    // Sweep row counts so the totals block lands near the break
    // threshold at least once; its page must always carry the header.
    let profile = CompanyProfile::default();
    for count in [30, 33, 36, 39, 42] {
        let plan = plan_invoice(&invoice_with_lines(count), &profile).unwrap();
        let totals_page = plan
            .pages
            .iter()
            .find(|p| has_text(p, "Grand Total"))
            .expect("plan must contain a totals block");
        assert!(has_text(totals_page, &profile.name));
    }
}

// --- P6: conditional charge rows ---

#[test]
fn zero_charges_render_no_rows() {
    let plan = plan_invoice(&small_invoice(), &CompanyProfile::default()).unwrap();
    let last = plan.pages.last().unwrap();
    assert!(!has_text(last, "Transport"));
    assert!(!has_text(last, "Packaging"));
    assert!(!has_text(last, "Other Charges"));
    // Round Off renders always, signed.
    assert!(has_text(last, "Round Off"));
    assert!(has_text(last, "+0.00"));
}

#[test]
fn nonzero_charge_renders_exactly_one_row() {
    let invoice = InvoiceBuilder::new("INV-2026-00012", date(2026, 4, 12))
        .billing(billing())
        .add_line(LineItemBuilder::new("Cement Bags", dec!(2), dec!(100)).build())
        .transport(dec!(75))
        .build()
        .unwrap();
    let plan = plan_invoice(&invoice, &CompanyProfile::default()).unwrap();
    let last = plan.pages.last().unwrap();
    let transport_rows = page_texts(last)
        .iter()
        .filter(|t| **t == "Transport")
        .count();
    assert_eq!(transport_rows, 1);
    assert!(!has_text(last, "Packaging"));
}

// --- SGST/CGST rows ---

#[test]
fn gst_rows_show_halved_labels_and_half_amount() {
    let invoice = InvoiceBuilder::new("INV-2026-00013", date(2026, 4, 12))
        .billing(billing())
        .add_line(
            LineItemBuilder::new("A", dec!(1), dec!(100))
                .gst_rate(dec!(5))
                .build(),
        )
        .add_line(
            LineItemBuilder::new("B", dec!(1), dec!(100))
                .gst_rate(dec!(12))
                .build(),
        )
        .gst(true)
        .build()
        .unwrap();
    let plan = plan_invoice(&invoice, &CompanyProfile::default()).unwrap();
    let last = plan.pages.last().unwrap();
    assert!(has_text(last, "SGST (2.5%, 6%)"));
    assert!(has_text(last, "CGST (2.5%, 6%)"));
    // 5 + 12 = 17 total GST, half on each row.
    let half_count = page_texts(last).iter().filter(|t| **t == "8.50").count();
    assert_eq!(half_count, 2);
}

#[test]
fn gst_disabled_renders_no_split_rows() {
    let mut invoice = small_invoice();
    invoice.gst_enabled = false;
    let plan = plan_invoice(&invoice, &CompanyProfile::default()).unwrap();
    let last = plan.pages.last().unwrap();
    assert!(!has_text(last, "SGST"));
    assert!(!has_text(last, "CGST"));
    // Document-type box downgrades from TAX INVOICE.
    assert!(has_text(&plan.pages[0], "INVOICE"));
    assert!(!has_text(&plan.pages[0], "TAX INVOICE"));
}

// --- words line, lorry line, grand total ---

#[test]
fn words_line_uses_rounded_total() {
    let plan = plan_invoice(&small_invoice(), &CompanyProfile::default()).unwrap();
    let last = plan.pages.last().unwrap();
    // 250 + 10 GST = 260.
    assert!(has_text(
        last,
        "Amount in words: Two Hundred Sixty Rupees only"
    ));
}

#[test]
fn lorry_line_is_omitted_without_reserved_gap() {
    let with_lorry = InvoiceBuilder::new("INV-2026-00014", date(2026, 4, 12))
        .billing(billing())
        .lorry_number("MH 31 AB 1234")
        .add_line(LineItemBuilder::new("A", dec!(1), dec!(10)).build())
        .build()
        .unwrap();
    let mut without_lorry = with_lorry.clone();
    without_lorry.header.lorry_number = None;

    let profile = CompanyProfile::default();
    let with_plan = plan_invoice(&with_lorry, &profile).unwrap();
    let without_plan = plan_invoice(&without_lorry, &profile).unwrap();

    assert!(has_text(with_plan.pages.last().unwrap(), "Lorry No: MH 31 AB 1234"));
    assert!(!has_text(without_plan.pages.last().unwrap(), "Lorry No"));
    // Exactly the one lorry text command disappears; nothing is reserved.
    let count = |p: &bijak::pdf::RenderedDocument| {
        p.pages.iter().map(|pg| pg.commands.len()).sum::<usize>()
    };
    assert_eq!(count(&with_plan), count(&without_plan) + 1);
}

#[test]
fn grand_total_prints_rounded_value() {
    let invoice = InvoiceBuilder::new("INV-2026-00015", date(2026, 4, 12))
        .billing(billing())
        .add_line(LineItemBuilder::new("A", dec!(1), dec!(199.60)).build())
        .gst(false)
        .build()
        .unwrap();
    let plan = plan_invoice(&invoice, &CompanyProfile::default()).unwrap();
    let last = plan.pages.last().unwrap();
    assert!(has_text(last, "200.00"));
    assert!(has_text(last, "+0.40"));
}

// --- signature overlay ---

#[test]
fn signature_image_appears_only_when_selected() {
    let unsigned = small_invoice();
    let mut signed = unsigned.clone();
    signed.signature = Some(Signatory::Proprietor);

    let profile = CompanyProfile::default();
    let image_count = |invoice: &Invoice| {
        plan_invoice(invoice, &profile)
            .unwrap()
            .pages
            .iter()
            .flat_map(|p| p.commands.iter())
            .filter(|c| matches!(c, DrawCmd::Image { .. }))
            .count()
    };
    assert_eq!(image_count(&signed), image_count(&unsigned) + 1);
}

// --- invalid input refuses to render ---

#[test]
fn negative_amount_fails_before_any_page() {
    let invoice = InvoiceBuilder::new("INV-2026-00016", date(2026, 4, 12))
        .billing(billing())
        .add_line(LineItemBuilder::new("A", dec!(-1), dec!(10)).build())
        .build_unchecked()
        .unwrap();
    let err = plan_invoice(&invoice, &CompanyProfile::default()).unwrap_err();
    assert!(matches!(err, BijakError::InvalidAmount(_)));
}
