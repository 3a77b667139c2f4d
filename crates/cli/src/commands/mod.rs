pub(crate) mod actions;
pub(crate) mod filter;
pub(crate) mod notifications;
pub(crate) mod tab;
