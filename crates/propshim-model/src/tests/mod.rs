//! Unit tests for `propshim_model` types.

mod method_tests;
