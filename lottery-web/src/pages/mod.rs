//! Page modules

pub mod lottery;

pub use lottery::LotteryPage;
