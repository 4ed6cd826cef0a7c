//! Bell ringer generator inputs.
//!
//! - [`options`]: topic, format and constraint lists
//! - [`spin`]: lock & spin selection of the three slots
//! - [`template`]: the prompt sent to the text generation service

#![deny(unsafe_code)]

pub mod error;
pub mod options;
pub mod spin;
pub mod template;

pub use error::{PromptError, Result};
pub use options::{CONSTRAINTS, FORMATS, Slot, TOPICS};
pub use spin::{Selection, SlotLocks, spin};
pub use template::{PromptRequest, StandardRef, render};
