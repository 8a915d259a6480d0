//! Diagnostics and test configuration for a cross-platform windowing
//! abstraction.
//!
//! This crate is the layer that sits around a windowing backend in tests and
//! demo programs. It classifies incoming [`event::Event`] values and renders
//! them as line-oriented diagnostic text, dumps a view's full hint
//! configuration, and parses the conventional single-character test flags
//! into an [`options::TestOptions`] value.
//!
//! The backends themselves are external collaborators: nothing here creates
//! views, pumps events, or draws. Events arrive as already-constructed
//! values, and views are only reached through the read-only
//! [`window::View`] trait.
//!
//! All operations are synchronous and pure functions of their inputs; the
//! only side effect anywhere is text written to the diagnostic stream.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use dpi;

pub mod diagnostic;
pub mod event;
pub mod keyboard;
pub mod options;
pub mod window;
