#![allow(unused_imports)]

pub(crate) mod fixtures;
pub(crate) mod mock_api;

pub use fixtures::*;
pub use mock_api::*;
