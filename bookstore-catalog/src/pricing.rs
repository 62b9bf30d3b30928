use crate::book::Book;

/// Net price after applying a percentage discount.
///
/// Integer division truncates toward zero. Discounts above 100 saturate
/// to a net price of 0.
pub fn net_price_cents(price_cents: u64, discount_percent: u8) -> u64 {
    let remaining = 100u128.saturating_sub(u128::from(discount_percent));
    // Never exceeds price_cents, so the narrowing is lossless
    (u128::from(price_cents) * remaining / 100) as u64
}

/// Render an amount in cents for display, e.g. `$30.00`
pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

impl Book {
    pub fn net_price_cents(&self) -> u64 {
        net_price_cents(self.price_cents, self.discount_percent)
    }
}
