pub(crate) mod common;
mod collection;
