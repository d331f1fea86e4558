//! Edge case tests for phoxc-lex
