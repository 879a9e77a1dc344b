//! Canned keyword responder.
//!
//! Maps an inbound chat message to a reply by scanning an ordered keyword
//! table. Stand-in for a real assistant model.

/// Ordered keyword-to-reply table with a fallback reply.
///
/// The table is an explicit ordered list, not a map: matching is
/// first-match-wins, so overlapping keywords resolve by table order. A
/// message containing both "cart" and "products" always gets the `products`
/// reply because that entry comes first.
#[derive(Debug, Clone)]
pub struct KeywordResponder {
    table: Vec<(&'static str, &'static str)>,
    default_reply: &'static str,
}

impl KeywordResponder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: vec![
                (
                    "hi",
                    "Hello! Welcome to EliteShop. How can I assist with your shopping today?",
                ),
                (
                    "products",
                    "We offer premium luxury watches, handbags, and sunglasses. Would you like to see our featured products?",
                ),
                (
                    "shipping",
                    "We provide free worldwide shipping on orders over $500. Delivery takes 3-5 business days.",
                ),
                (
                    "payment",
                    "We accept secure payments via credit card, PayPal, and more. Your data is safe with us.",
                ),
                (
                    "cart",
                    "I can help with your cart! Want to check your items or proceed to checkout?",
                ),
            ],
            default_reply: "I’m here to assist with your shopping needs. Ask about products, shipping, or payments!",
        }
    }

    /// Reply for `message`: the first table entry whose keyword is a
    /// substring of the lowercased input, or the fallback reply. Pure
    /// function; any input (including empty) yields a deterministic output.
    #[must_use]
    pub fn respond(&self, message: &str) -> &str {
        let lower = message.to_lowercase();
        for (keyword, reply) in &self.table {
            if lower.contains(keyword) {
                return reply;
            }
        }
        self.default_reply
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new()
    }
}
