// kiyho/src/catalog/collection.rs

use super::product::{Product, ProductId};

const KELLY_IMAGE: &str = "https://images.unsplash.com/photo-1584917865442-de89df76afd3?auto=format&fit=crop&w=1000&q=80";
const MARMONT_IMAGE: &str = "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?auto=format&fit=crop&w=1000&q=80";
const NEVERFULL_IMAGE: &str = "https://images.unsplash.com/photo-1594223274512-ad4803739b7c?auto=format&fit=crop&w=1000&q=80";
const RE_EDITION_IMAGE: &str = "https://images.unsplash.com/photo-1566150905458-1bf1fc113f0d?auto=format&fit=crop&w=1000&q=80";

fn bag(id: u64, brand: &str, name: &str, price: f64, description: &str, image: &str) -> Product {
  Product {
    id: ProductId::Int(id),
    brand: brand.to_string(),
    name: name.to_string(),
    price,
    description: description.to_string(),
    image: image.to_string(),
  }
}

pub(super) fn house_collection() -> Vec<Product> {
  vec![
    bag(
      1,
      "Hermès",
      "Mini Kelly",
      12500.0,
      "Iconic structured handbag in premium Epsom leather with palladium hardware.",
      KELLY_IMAGE,
    ),
    bag(
      2,
      "Gucci",
      "GG Marmont",
      2900.0,
      "Quilted leather shoulder bag with signature double G hardware in antique gold.",
      MARMONT_IMAGE,
    ),
    bag(
      3,
      "Louis Vuitton",
      "Neverfull MM",
      1950.0,
      "Spacious tote in iconic Monogram canvas with natural cowhide leather trim.",
      NEVERFULL_IMAGE,
    ),
    bag(
      4,
      "Prada",
      "Re-Edition 2005",
      1350.0,
      "Vintage-inspired nylon shoulder bag with iconic triangle logo in black.",
      RE_EDITION_IMAGE,
    ),
    // Chanel and Bottega share photography with the Kelly and Marmont.
    bag(
      5,
      "Chanel",
      "Classic Flap",
      8500.0,
      "Timeless quilted lambskin bag with signature chain strap and CC turn-lock.",
      KELLY_IMAGE,
    ),
    bag(
      6,
      "Bottega Veneta",
      "Jodie Mini",
      2750.0,
      "Soft padded leather hobo bag with signature intrecciato weave pattern.",
      MARMONT_IMAGE,
    ),
  ]
}
