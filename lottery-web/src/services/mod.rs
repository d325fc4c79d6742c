//! Chain access: the wallet provider seam, its browser implementation, the
//! contract binder and the async runtime the controller schedules on.

pub mod contract;
pub mod ethereum;
pub mod provider;
pub mod runtime;
