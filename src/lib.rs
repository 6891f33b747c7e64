pub mod backend;
pub mod buffer;
pub mod commit;
pub mod editor;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod remote;
pub mod session;
pub mod status;
pub mod store;
pub mod trace;

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
