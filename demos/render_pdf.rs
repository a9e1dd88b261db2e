use bijak::core::*;
use bijak::pdf::{CompanyProfile, render_invoice_now};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn main() {
    let invoice = InvoiceBuilder::new(
        "INV-2026-00042",
        NaiveDate::from_ymd_opt(2026, 4, 12).unwrap(),
    )
    .billing(
        PartyBuilder::new("Ramesh Kumar")
            .shop_name("Kumar Traders")
            .phone("+91 98123 45678")
            .email("kumartraders@gmail.com")
            .gstin("27AAPFU0939F1ZV")
            .address("Plot 14, Industrial Area Phase II")
            .city("Nagpur")
            .state("Maharashtra")
            .build(),
    )
    .shipping(
        PartyBuilder::new("Site Office")
            .shop_name("Kumar Traders Warehouse")
            .address("Survey No. 88, MIDC Hingna")
            .city("Nagpur")
            .build(),
    )
    .add_line(
        LineItemBuilder::new("Cement Bags (50kg)", dec!(20), dec!(385))
            .hsn("2523")
            .gst_rate(dec!(28))
            .build(),
    )
    .add_line(
        LineItemBuilder::new("TMT Bars 12mm", dec!(1.75), dec!(58500))
            .hsn("7214")
            .gst_rate(dec!(18))
            .build(),
    )
    .add_line(
        LineItemBuilder::new("Binding Wire", dec!(12.5), dec!(62))
            .hsn("7217")
            .gst_rate(dec!(18))
            .build(),
    )
    .transport(dec!(450))
    .lorry_number("MH 31 AB 1234")
    .signature(Signatory::Proprietor)
    .gst(true)
    .build()
    .expect("invoice should be valid");

    let artifact =
        render_invoice_now(&invoice, &CompanyProfile::default()).expect("render should succeed");

    let out_dir = std::env::temp_dir();
    match artifact.save_to(&out_dir) {
        Ok(path) => println!("Wrote {} ({} bytes)", path.display(), artifact.bytes.len()),
        // The byte stream is still valid even when the write fails.
        Err(e) => eprintln!(
            "could not write {}: {e} ({} bytes rendered)",
            artifact.file_name,
            artifact.bytes.len()
        ),
    }
}
