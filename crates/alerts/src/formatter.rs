//! Alert message formatting.
//!
//! Pure functions only: the same record always formats to the same string,
//! so nothing time- or state-dependent belongs here.

use memewatch_core::TokenRecord;

/// Format price with appropriate precision based on magnitude.
fn format_price(price: f64) -> String {
    if price == 0.0 {
        return "$0".to_string();
    }
    let abs_price = price.abs();
    if abs_price >= 1000.0 {
        format!("${:.2}", price)
    } else if abs_price >= 1.0 {
        format!("${:.4}", price)
    } else if abs_price >= 0.01 {
        format!("${:.6}", price)
    } else {
        format!("${:.8}", price)
    }
}

/// Format a USD amount with thousands separators, no cents.
fn format_usd(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

fn screen_outcome(passed: bool) -> &'static str {
    if passed {
        "Passed"
    } else {
        "Failed"
    }
}

/// Format a token record as a Markdown alert message.
pub fn format_signal_message(record: &TokenRecord) -> String {
    let signal = record.signal();

    format!(
        "🔥 *{signal} SIGNAL*: {symbol}\n\n\
         💰 Price: {price}\n\
         📊 5-min Volume: {volume}\n\
         💧 Liquidity: {liquidity}\n\
         📈 Market Cap: {market_cap}\n\
         🛡️ Rug Check: {rug}\n\
         🐝 Honeypot: {honeypot}\n\
         ⚠️ Risk Score: {risk}/100\n\n\
         ➡️ Suggested Action: *{signal}*",
        signal = signal,
        symbol = record.symbol,
        price = format_price(record.price),
        volume = format_usd(record.volume_5m),
        liquidity = format_usd(record.liquidity),
        market_cap = format_usd(record.market_cap),
        rug = screen_outcome(record.rug_check_passed),
        honeypot = screen_outcome(record.honeypot_passed),
        risk = record.risk_score,
    )
}
