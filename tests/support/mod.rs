#![allow(dead_code)]

pub mod demoform_env;
pub mod endpoint;
