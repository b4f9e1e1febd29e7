//! Billing export notifier.
//!
//! Listens for object-storage change events, reads the billing export the
//! event points at, and posts a summary of its cost lines to a chat
//! webhook. One attempt per invocation, no state between invocations.

pub mod billing;
pub mod config;
pub mod date;
pub mod error;
pub mod event;
pub mod handler;
pub mod message;
pub mod storage;
pub mod webhook;
