use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Flat GST rate applied to the discounted order base when enabled.
pub const GST_RATE: Decimal = dec!(0.18);

/// The derived monetary fields of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Financials {
    pub gst_amount: Decimal,
    pub total_paid: Decimal,
    pub commission_amount: Decimal,
    pub seller_income: Decimal,
}

/// The order amount net of discount: the basis for GST and the seller split.
///
/// Discount is taken off before tax and before any share split; a discount
/// larger than the order clamps to zero rather than going negative.
pub fn net_base(order_amount: Decimal, discount_given: Decimal) -> Decimal {
    (order_amount - discount_given).max(Decimal::ZERO)
}

/// Derives the monetary breakdown of one order from its raw inputs.
///
/// Pure and total: no input combination fails. Wallet credit reduces only
/// the customer's cash payable, not the base used for GST or the split,
/// because it is the platform's own liability rather than a discount.
/// Excess wallet usage is absorbed by the zero clamp, never an error.
pub fn derive(
    order_amount: Decimal,
    discount_given: Decimal,
    wallet_amount: Decimal,
    gst_applied: bool,
    split_with_seller: bool,
    platform_fee_percent: u8,
) -> Financials {
    let base = net_base(order_amount, discount_given);

    let gst_amount = if gst_applied {
        base * GST_RATE
    } else {
        Decimal::ZERO
    };

    let total_paid = ((base - wallet_amount) + gst_amount).max(Decimal::ZERO);

    let (commission_amount, seller_income) = if split_with_seller {
        let commission = base * Decimal::from(platform_fee_percent) / dec!(100);
        (commission, (base - commission).max(Decimal::ZERO))
    } else {
        (base, Decimal::ZERO)
    };

    Financials {
        gst_amount,
        total_paid,
        commission_amount,
        seller_income,
    }
}
