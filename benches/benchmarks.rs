use criterion::{black_box, criterion_group, criterion_main, Criterion};
use chrono::NaiveDate;
use daily_rates::{
    aggregate::summarize,
    calendar::{DateFormat, DateWindow},
    decode::{decode, normalize_decimal_comma},
    types::CurrencyQuote,
};

const CODES: [&str; 8] = ["USD", "EUR", "GBP", "JPY", "CNY", "CHF", "XDR", "KZT"];

fn sample_document() -> Vec<u8> {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="windows-1251"?><ValCurs Date="16.10.2026" name="Foreign Currency Market">"#,
    );
    for (i, code) in CODES.iter().enumerate() {
        xml.push_str(&format!(
            "<Valute ID=\"R{i:05}\"><NumCode>{i:03}</NumCode><CharCode>{code}</CharCode><Nominal>1</Nominal><Name>Валюта {code}</Name><Value>{},{:04}</Value></Valute>",
            50 + i,
            i * 37
        ));
    }
    xml.push_str("</ValCurs>");
    encoding_rs::WINDOWS_1251.encode(&xml).0.into_owned()
}

fn benchmark_decode_document(c: &mut Criterion) {
    let document = sample_document();

    c.bench_function("decode_cp1251_document", |b| {
        b.iter(|| decode(black_box(&document)).unwrap());
    });
}

fn benchmark_normalize_number(c: &mut Criterion) {
    c.bench_function("normalize_decimal_comma_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                let _ = normalize_decimal_comma(black_box("81,2345"));
            }
        });
    });
}

fn benchmark_summarize_window(c: &mut Criterion) {
    let quotes: Vec<CurrencyQuote> = (0..91 * 45)
        .map(|i| {
            let code = CODES[i % CODES.len()];
            CurrencyQuote::new("16.10.2026", code, code, (i % 997) as f64 * 0.37)
        })
        .collect();

    c.bench_function("summarize_91_days", |b| {
        b.iter(|| summarize(black_box(&quotes)).unwrap());
    });
}

fn benchmark_date_tokens(c: &mut Criterion) {
    let format = DateFormat::parse("%d/%m/%Y").unwrap();
    let now = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

    c.bench_function("trailing_window_tokens", |b| {
        b.iter(|| DateWindow::trailing(black_box(now)).tokens(&format).count());
    });
}

criterion_group!(
    benches,
    benchmark_decode_document,
    benchmark_normalize_number,
    benchmark_summarize_window,
    benchmark_date_tokens
);
criterion_main!(benches);
