//! gqlc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate provides the foundation types shared by every stage of the gqlc
//! front end. The lexer, and any parser built on top of it, describe source
//! locations, store their nodes, and report problems through these types.
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. BYTE OFFSETS EVERYWHERE
//!    Every location is a byte offset into a [`SourceText`]. Line and column
//!    numbers are derived from offsets only when a human needs to read them.
//!
//! 2. TYPED INDICES
//!    Arenas are [`IndexVec`]s keyed by newtype indices, so an index into the
//!    token arena can never be used to index something else.
//
// 3. DIAGNOSTICS AS DATA
//    Errors are turned into [`Diagnostic`] values that carry a code, a span
//    and a rendered source snippet. Printing them is the caller's decision.
//
// ============================================================================
// CRATE LAYOUT
// ============================================================================
//
// span/        Span, SourceText (named text buffer + line table)
// index_vec/   Idx trait, IndexVec<I, T>, define_idx! macro
// diagnostic/  Level, Diagnostic, DiagnosticBuilder, SourceSnippet,
//              DiagnosticCode, Handler
// error.rs     Error types for the utilities above

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SourceError, SourceResult};
pub use index_vec::{Idx, IndexVec};
pub use span::{SourceText, Span};

static_assertions::assert_impl_all!(Span: Copy, Send, Sync);
static_assertions::assert_impl_all!(SourceText: Send, Sync);
