pub mod build_args;
pub mod generate;
