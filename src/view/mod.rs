//! View Module
//!
//! The presentation layer. Every page the server can answer with is one
//! variant of the `Page` enum, carrying exactly the data that page needs;
//! `render` maps each variant to its HTML. There is no template lookup and
//! no dynamic payload, so an unrenderable page cannot be expressed.

pub mod pages;
