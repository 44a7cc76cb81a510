pub mod packed;
