//! Integration tests for pano-rs crates.
//!
//! End-to-end checks across decode -> project -> encode, plus golden
//! pixel references in [`golden`](self).

#[cfg(test)]
mod golden;
