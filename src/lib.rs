//! # Bang-Lexer - a streaming tokenizer for a small brace-and-bang notation
//!
//! The notation knows string literals, integer literals, the boolean keywords
//! `true` and `false`, bare identifiers, and three symbols: `!`, `{` and `}`.
//! Whitespace separates tokens and is otherwise insignificant, except inside
//! string literals, which keep it verbatim.
//!
//! ```text
//! greeting! { "hello world" 42 true }
//! ```
//!
//! ## Structure
//!
//! - [`CharSource`](bang::token::source::CharSource) turns any [`std::io::Read`] into
//!   characters, with a single character of lookahead.
//! - [`Tokenizer`](bang::token::lexer::Tokenizer) classifies those characters into
//!   [`Tokens`](bang::token::tokens::Token) on demand. It keeps every token it
//!   produced, so a hand-written recursive descent parser can
//!   [`peek`](bang::token::lexer::Tokenizer::peek) as often as it likes before it
//!   [`reads`](bang::token::lexer::Tokenizer::read).
//!
//! The input is never read ahead of what the caller asked for, which makes the
//! tokenizer usable on interactive streams such as a terminal.
//!
//! ## Limitations
//!
//! - Integers are unsigned and must fit into a [`u64`]; there is no floating point.
//! - String literals have no escape sequences, so they cannot contain `"`.
//! - There are no comments.
#![deny(
    future_incompatible,
    keyword_idents,
    let_underscore,
    nonstandard_style,
    refining_impl_trait,
)]
#![deny(
    rust_2018_compatibility,
    rust_2021_compatibility,
    rust_2024_compatibility,
)]
#![deny(
    clippy::all,
    clippy::pedantic,
)]
#![deny(
    clippy::absolute_paths,
    clippy::alloc_instead_of_core,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::arithmetic_side_effects,
    clippy::as_conversions,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::else_if_without_else,
    clippy::error_impl_error,
    clippy::exhaustive_enums,
    clippy::exhaustive_structs,
    clippy::exit,
    clippy::get_unwrap,
    clippy::if_then_some_else_none,
    clippy::impl_trait_in_params,
    clippy::indexing_slicing,
    clippy::infinite_loop,
    clippy::let_underscore_must_use,
    clippy::let_underscore_untyped,
    clippy::map_err_ignore,
    clippy::min_ident_chars,
    clippy::missing_assert_message,
    clippy::missing_docs_in_private_items,
    clippy::missing_inline_in_public_items,
    clippy::mixed_read_write_in_expression,
    clippy::module_name_repetitions,
    clippy::non_ascii_literal,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::partial_pub_fields,
    clippy::pattern_type_mismatch,
    clippy::same_name_method,
    clippy::self_named_module_files,
    clippy::std_instead_of_alloc,
    clippy::str_to_string,
    clippy::string_add,
    clippy::string_slice,
    clippy::tests_outside_test_module,
    clippy::todo,
    clippy::try_err,
    clippy::undocumented_unsafe_blocks,
    clippy::unimplemented,
    clippy::unreachable,
    clippy::unused_result_ok,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::wildcard_enum_match_arm
)]
#![warn(unused)]
#![allow(
    edition_2024_expr_fragment_specifier,
    reason = "the macros expect the 2024 edition behaviour."
)]
pub mod bang;
