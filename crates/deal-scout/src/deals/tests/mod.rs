mod analysis;
mod common;
