//! LLM-backed free-text match commentary.
//!
//! Turns the metadata block of a match record into a short written analysis
//! by calling an OpenAI-compatible chat completions endpoint. The client is
//! blocking: the surrounding pipeline is synchronous end to end, and a
//! single completion per match does not warrant an async runtime.
//!
//! The API key is always supplied by the caller; this crate embeds no
//! credential and no default key lookup.

mod client;
mod prompt;

pub use client::{NarrateError, Narrator, NarratorConfig, DEFAULT_API_URL, DEFAULT_MODEL};
pub use prompt::build_prompt;
