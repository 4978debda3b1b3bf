mod classify;
mod edit;
mod listing;
mod notify;
mod store;

pub use classify::*;
pub use edit::*;
pub use listing::*;
pub use notify::*;
pub use store::*;

#[cfg(test)]
pub(crate) mod testkit;
