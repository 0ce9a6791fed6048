use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The sales channel an order came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSource {
    Whatsapp,
    Website,
}

impl OrderSource {
    /// Lenient parse for interchange data. Unrecognized or missing text
    /// falls back to `Website`, never an error.
    pub fn parse_or_default(text: &str) -> Self {
        if text.trim().eq_ignore_ascii_case("whatsapp") {
            OrderSource::Whatsapp
        } else {
            OrderSource::Website
        }
    }
}

impl fmt::Display for OrderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSource::Whatsapp => write!(f, "Whatsapp"),
            OrderSource::Website => write!(f, "Website"),
        }
    }
}

/// The payment gateway that collected the money, if any.
///
/// Each gateway charges a fixed percentage of the amount collected. The rate
/// is frozen into the order at creation so later rate changes never rewrite
/// historical entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentGateway {
    None,
    PhonePe,
    Cashfree,
}

impl PaymentGateway {
    /// The fee fraction this gateway charges on collected cash.
    pub fn rate(&self) -> Decimal {
        match self {
            PaymentGateway::None => Decimal::ZERO,
            PaymentGateway::PhonePe => dec!(0.0218),
            PaymentGateway::Cashfree => dec!(0.018),
        }
    }

    pub fn parse_or_default(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "phonepe" => PaymentGateway::PhonePe,
            "cashfree" => PaymentGateway::Cashfree,
            _ => PaymentGateway::None,
        }
    }
}

impl fmt::Display for PaymentGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentGateway::None => write!(f, "None"),
            PaymentGateway::PhonePe => write!(f, "PhonePe"),
            PaymentGateway::Cashfree => write!(f, "Cashfree"),
        }
    }
}

/// Whether a seller payout obligation has been settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayoutStatus {
    Paid,
    Unpaid,
}

impl fmt::Display for PayoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoutStatus::Paid => write!(f, "Paid"),
            PayoutStatus::Unpaid => write!(f, "Unpaid"),
        }
    }
}
