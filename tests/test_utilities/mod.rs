#![allow(dead_code)]

pub mod fake_pkg;
pub mod mocks;
