#![allow(dead_code)]

mod assertions;
mod helpers;
mod test_app;

pub use assertions::{assert_basis_orthonormal, assert_model_valid, assert_unit};
pub use helpers::*;
pub use test_app::{TestApp, TestAppBuilder};
