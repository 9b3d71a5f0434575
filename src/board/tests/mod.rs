//! Cross-module board tests.

mod perft;
