//! Dayspan Core Types and Definitions
//!
//! This crate provides the foundational value types shared by the Dayspan
//! parser and overlap detector:
//!
//! - **Days**: A calendar day number bounded to a single year ([`day::Day`])
//! - **Events**: Closed day intervals ([`event::Event`])

pub mod day;
pub mod event;

pub use day::Day;
pub use event::{Event, EventError};
