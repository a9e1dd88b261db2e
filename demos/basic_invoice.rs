use bijak::core::*;
use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal_macros::dec;

fn main() {
    // The storage layer owns the number sequence; the core treats the
    // issued number as opaque.
    let mut sequence = InvoiceNumberSequence::new(Utc::now().year());

    let invoice = InvoiceBuilder::new(
        sequence.next_number(),
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
            .postal_code("440002")
            .build(),
    )
    .add_line(
        LineItemBuilder::new("Cement Bags (50kg)", dec!(20), dec!(385))
            .hsn("2523")
            .gst_rate(dec!(28))
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
    .gst(true)
    .build()
    .expect("invoice should be valid");

    let totals = invoice.totals().unwrap();
    println!("Invoice     : {}", invoice.header.number);
    println!("Subtotal    : Rs. {}", format_amount(totals.subtotal));
    println!(
        "SGST ({})  : Rs. {}",
        totals.gst_split.rate_label(),
        format_amount(totals.gst_split.half_amount)
    );
    println!(
        "CGST ({})  : Rs. {}",
        totals.gst_split.rate_label(),
        format_amount(totals.gst_split.half_amount)
    );
    println!("Round Off   : {}", format_signed(totals.round_off));
    println!("Grand Total : Rs. {}", format_amount(totals.rounded_total));
    println!("In words    : {} only", amount_in_words(totals.rounded_total));
}
