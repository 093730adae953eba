pub mod market;
pub mod toast;
pub mod trade;
