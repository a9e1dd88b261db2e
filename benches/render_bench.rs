use chrono::{DateTime, NaiveDate, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use bijak::core::*;
use bijak::pdf::{CompanyProfile, plan_invoice, render_invoice};

fn sample_invoice(line_count: usize) -> Invoice {
    let mut builder = InvoiceBuilder::new(
        "INV-2026-00042",
        NaiveDate::from_ymd_opt(2026, 4, 12).unwrap(),
    )
    .billing(
        PartyBuilder::new("Ramesh Kumar")
            .shop_name("Kumar Traders")
            .phone("+91 98123 45678")
            .gstin("27AAPFU0939F1ZV")
            .address("Plot 14, Industrial Area Phase II")
            .city("Nagpur")
            .build(),
    )
    .transport(dec!(120))
    .lorry_number("MH 31 AB 1234");
    for i in 0..line_count {
        builder = builder.add_line(
            LineItemBuilder::new(format!("Product {}", i + 1), dec!(2), dec!(149.50))
                .hsn("2523")
                .gst_rate(dec!(5))
                .build(),
        );
    }
    builder.build().unwrap()
}

fn timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-04-12T10:30:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn bench_totals(c: &mut Criterion) {
    let invoice = sample_invoice(40);
    c.bench_function("totals_40_lines", |b| {
        b.iter(|| black_box(&invoice).totals().unwrap())
    });
}

fn bench_plan(c: &mut Criterion) {
    let invoice = sample_invoice(40);
    let profile = CompanyProfile::default();
    c.bench_function("plan_40_lines", |b| {
        b.iter(|| plan_invoice(black_box(&invoice), &profile).unwrap())
    });
}

fn bench_render(c: &mut Criterion) {
    let invoice = sample_invoice(40);
    let profile = CompanyProfile::default();
    let ts = timestamp();
    c.bench_function("render_40_lines", |b| {
        b.iter(|| render_invoice(black_box(&invoice), &profile, ts).unwrap())
    });
}

criterion_group!(benches, bench_totals, bench_plan, bench_render);
criterion_main!(benches);
