pub mod uq16;
