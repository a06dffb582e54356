//! The command line tool `cryptoquip` decodes monoalphabetic substitution
//! ciphers: given ciphertext and a word list, it finds every letter-to-letter
//! substitution that turns the ciphertext into a sequence of dictionary words.
//! It is hoped that the associated library will be useful for third party tools.

#![warn(
    absolute_paths_not_starting_with_crate,
    explicit_outlives_requirements,
    keyword_idents,
    noop_method_call,
    rust_2021_incompatible_closure_captures,
    rust_2021_incompatible_or_patterns,
    rust_2021_prefixes_incompatible_syntax,
    rust_2021_prelude_collisions,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    trivial_numeric_casts,
    trivial_casts,
    unreachable_pub,
    unused_lifetimes,
    unused_extern_crates,
    unused_qualifications,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::redundant_pub_crate)]

pub mod decrypt;
pub mod hash;
pub mod prelude;
pub mod tokenizer;
pub mod translator;
pub mod util;
pub mod wordlist;

pub use util::{Error, Result};
