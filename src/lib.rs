//! GH-X PRO - cosmetic game hacking simulator
//!
//! Everything is fabricated: scans invent their results and the currency
//! injectors replay a fixed script. Nothing reads process memory or talks to
//! a network.

pub mod core;
pub mod injector;
pub mod panel;
pub mod renderer;
pub mod runner;
pub mod scanner;
pub mod sequence;
pub mod shell;
pub mod ui;
