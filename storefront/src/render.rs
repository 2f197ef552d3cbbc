// storefront/src/render.rs

//! Plain-text presentation. Nothing here mutates state; handlers pass in
//! whatever the core returned and print the result.

use kiyho::validation::FormErrors;
use kiyho::{CartChange, CartLine, OrderSummary, Product, ProductId, Receipt};
use std::fmt::Write;

fn group_thousands(digits: &str) -> String {
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(',');
    }
    out.push(ch);
  }
  out
}

fn dollars(amount: f64, keep_cents: bool) -> String {
  let fixed = format!("{:.2}", amount.abs());
  let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
  let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
  let cents = if keep_cents { cents } else { cents.trim_end_matches('0') };
  if cents.is_empty() {
    format!("{}${}", sign, group_thousands(whole))
  } else {
    format!("{}${}.{}", sign, group_thousands(whole), cents)
  }
}

/// Catalog prices: `$12,500`, `$12.5`.
pub fn format_price(amount: f64) -> String {
  dollars(amount, false)
}

/// Totals always carry cents: `$12,500.00`.
pub fn format_amount(amount: f64) -> String {
  dollars(amount, true)
}

pub fn product_list(products: &[&Product]) -> String {
  if products.is_empty() {
    return "No bags match your search.\n".to_string();
  }
  let mut out = String::new();
  for p in products {
    let _ = writeln!(out, "[{}] {:<16} {:<18} {:>9}", p.id, p.brand, p.name, format_price(p.price));
  }
  out
}

pub fn product_detail(p: &Product) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "{}", p.display_name());
  let _ = writeln!(out, "  id:    {}", p.id);
  let _ = writeln!(out, "  price: {}", format_price(p.price));
  if !p.description.is_empty() {
    let _ = writeln!(out, "  {}", p.description);
  }
  if !p.image.is_empty() {
    let _ = writeln!(out, "  image: {}", p.image);
  }
  out
}

fn cart_line(out: &mut String, line: &CartLine) {
  let _ = writeln!(
    out,
    "[{}] {:<34} {:>9} x {:<3} {:>12}",
    line.id,
    line.display_name(),
    format_price(line.price),
    line.quantity,
    format_price(line.subtotal())
  );
}

pub fn cart(lines: &[CartLine], item_count: u64, total: f64) -> String {
  if lines.is_empty() {
    return "Your cart is empty\n".to_string();
  }
  let mut out = String::new();
  for line in lines {
    cart_line(&mut out, line);
  }
  let _ = writeln!(out, "Items: {}  Total: {}", item_count, format_amount(total));
  out
}

pub fn summary(summary: &OrderSummary) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "Subtotal  {:>14}", format_amount(summary.subtotal));
  if summary.ships_free() {
    let _ = writeln!(out, "Shipping  {:>14}", "Free");
  } else {
    let _ = writeln!(out, "Shipping  {:>14}", format_amount(summary.shipping));
  }
  let _ = writeln!(out, "Tax       {:>14}", format_amount(summary.tax));
  let _ = writeln!(out, "Total     {:>14}", format_amount(summary.total));
  if let Some(remaining) = summary.free_shipping_remaining() {
    let _ = writeln!(out, "Add {} more for free shipping!", format_amount(remaining));
  }
  out
}

pub fn receipt(receipt: &Receipt) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "Payment Successful!");
  let _ = writeln!(out, "Order {} placed {}", receipt.order_id, receipt.placed_at.format("%Y-%m-%d %H:%M UTC"));
  for line in &receipt.lines {
    cart_line(&mut out, line);
  }
  out.push_str(&summary(&receipt.summary));
  let _ = writeln!(
    out,
    "Paid {} by {} (ref {})",
    format_amount(receipt.payment.amount),
    receipt.payment.method.label(),
    receipt.payment.reference
  );
  let _ = writeln!(out, "Thank you for your purchase! Your order will ship within 2-3 business days.");
  out
}

pub fn change(change: CartChange, id: &ProductId) -> String {
  match change {
    CartChange::Added => "Item added to cart!".to_string(),
    CartChange::Incremented { quantity } => format!("Item added to cart! ({} in cart)", quantity),
    CartChange::QuantityChanged { quantity } => format!("Quantity updated to {}.", quantity),
    CartChange::Removed => "Item removed from cart.".to_string(),
    CartChange::Cleared => "Cart cleared.".to_string(),
    CartChange::UnknownProduct => format!("No product with id {}; cart unchanged.", id),
    CartChange::NotInCart => format!("Product {} is not in your cart; cart unchanged.", id),
  }
}

pub fn form_errors(errors: &FormErrors) -> String {
  let mut out = String::new();
  for (field, message) in errors.iter() {
    let _ = writeln!(out, "{}: {}", field, message);
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn prices_drop_zero_cents() {
    assert_eq!(format_price(12500.0), "$12,500");
    assert_eq!(format_price(950.0), "$950");
    assert_eq!(format_price(12.5), "$12.5");
    assert_eq!(format_price(1234567.891), "$1,234,567.89");
    assert_eq!(format_price(0.0), "$0");
  }

  #[test]
  fn amounts_keep_cents() {
    assert_eq!(format_amount(270.0), "$270.00");
    assert_eq!(format_amount(12500.0), "$12,500.00");
    assert_eq!(format_amount(16.0), "$16.00");
    assert_eq!(format_amount(-5.5), "-$5.50");
  }

  #[test]
  fn empty_cart_message() {
    assert_eq!(cart(&[], 0, 0.0), "Your cart is empty\n");
  }

  #[test]
  fn summary_mentions_free_shipping_gap() {
    let text = summary(&OrderSummary::from_subtotal(150.0));
    assert!(text.contains("Add $50.00 more for free shipping!"), "{}", text);
    let text = summary(&OrderSummary::from_subtotal(250.0));
    assert!(text.contains("Free"), "{}", text);
    assert!(!text.contains("more for free shipping"), "{}", text);
  }
}
