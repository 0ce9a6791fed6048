use crate::error::InterchangeError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};
use core_types::enums::{OrderSource, PaymentGateway};
use core_types::records::OrderRecord;
use core_types::time;
use rust_decimal::Decimal;
use std::path::Path;
use tracing::warn;
use uuid::Uuid;

/// The fixed column set of the interchange format, in wire order.
pub const HEADERS: [&str; 14] = [
    "Order Date",
    "Order Number",
    "Customer Name",
    "Email",
    "Mobile",
    "Order Amount",
    "Discount",
    "GST Amount",
    "Wallet Amount",
    "Referral Amount",
    "Total Paid",
    "Category",
    "Source",
    "Potential",
];

/// Encodes the ledger to CSV text. Dates are RFC 3339; Decimal values are
/// written exactly, so numeric columns round-trip without drift.
pub fn export_orders(orders: &[OrderRecord]) -> Result<String, InterchangeError> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(HEADERS)?;

    for order in orders {
        writer.write_record([
            order.order_date.to_rfc3339(),
            order.order_number.clone(),
            order.customer_name.clone(),
            order.email.clone(),
            order.mobile_number.clone(),
            order.order_amount.to_string(),
            order.discount_given.to_string(),
            order.gst_amount.to_string(),
            order.wallet_amount.to_string(),
            order.referral_amount.to_string(),
            order.total_paid.to_string(),
            order.category.clone(),
            order.source.to_string(),
            if order.potential { "Yes" } else { "No" }.to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    // The writer only ever received &str input.
    Ok(String::from_utf8(bytes).expect("csv output is UTF-8"))
}

pub fn write_orders_file(orders: &[OrderRecord], path: &Path) -> Result<(), InterchangeError> {
    let text = export_orders(orders)?;
    std::fs::write(path, text)?;
    Ok(())
}

/// Decodes CSV text into order records, total over its input.
///
/// The first line is the header and is skipped; blank lines are skipped;
/// rows that fail the CSV grammar are dropped with a warning rather than
/// aborting the rest of the file. Short rows are padded with empty columns
/// and every missing or unparsable value falls back to its documented
/// default. Row order is preserved.
///
/// Two derived-looking fields are taken from the file for compatibility
/// instead of being recomputed: GST applicability is inferred from the GST
/// column, and the commission is set to the raw order amount. The seller
/// split is always off on import.
pub fn import_orders(text: &str, now: DateTime<Utc>) -> Vec<OrderRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut orders = Vec::new();
    for (index, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                if record.iter().all(|field| field.trim().is_empty()) {
                    continue;
                }
                orders.push(row_to_order(&record, now));
            }
            Err(e) => warn!(row = index + 2, error = %e, "skipping malformed CSV row"),
        }
    }
    orders
}

pub fn read_orders_file(path: &Path, now: DateTime<Utc>) -> Result<Vec<OrderRecord>, InterchangeError> {
    let text = std::fs::read_to_string(path)?;
    Ok(import_orders(&text, now))
}

fn row_to_order(record: &csv::StringRecord, now: DateTime<Utc>) -> OrderRecord {
    let column = |i: usize| record.get(i).unwrap_or("").trim();

    let order_amount = parse_decimal(column(5));
    let gst_amount = parse_decimal(column(7));

    OrderRecord {
        // Imports never carry an identity over.
        id: Uuid::new_v4(),
        order_date: parse_date(column(0), now),
        order_number: text_or(column(1), "Imported"),
        customer_name: text_or(column(2), "Guest"),
        email: column(3).to_string(),
        mobile_number: column(4).to_string(),
        order_amount,
        discount_given: parse_decimal(column(6)),
        wallet_amount: parse_decimal(column(8)),
        referral_amount: parse_decimal(column(9)),
        gst_applied: gst_amount > Decimal::ZERO,
        split_with_seller: false,
        platform_fee_percent: 10,
        source: OrderSource::parse_or_default(column(12)),
        category: text_or(column(11), "Uncategorized"),
        gateway: PaymentGateway::None,
        gateway_rate: Decimal::ZERO,
        potential: column(13) == "Yes",
        gst_amount,
        total_paid: parse_decimal(column(10)),
        commission_amount: order_amount,
        seller_income: Decimal::ZERO,
    }
}

fn parse_decimal(text: &str) -> Decimal {
    text.parse().unwrap_or(Decimal::ZERO)
}

fn parse_date(text: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    if text.is_empty() {
        return now;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return dt.with_timezone(&Utc);
    }
    // The legacy entry form wrote business-local wall-clock datetimes.
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M") {
        if let Some(dt) = time::from_local_parts(naive.date(), naive.hour(), naive.minute()) {
            return dt;
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(dt) = time::from_local_parts(date, 0, 0) {
            return dt;
        }
    }
    now
}

fn text_or<'a>(value: &'a str, placeholder: &'a str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}
