//! Unit tests for `propshim_reader`.

mod support;
mod wrapper_tests;

mod behaviour;
