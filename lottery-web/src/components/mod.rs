//! UI Components

pub mod confetti;
pub mod navbar;

pub use confetti::Confetti;
pub use navbar::Navbar;
