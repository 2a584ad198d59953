//! Pricing engine: side-effect-free quotes over a reserves snapshot.

mod constant_product;
mod swap_quote;

pub use constant_product::{
    initial_shares, proportional_shares, quote_deposit, quote_deposit_for_b, quote_swap,
    quote_swap_a_for_b, quote_swap_b_for_a, quote_withdraw,
};
pub use swap_quote::SwapQuote;
