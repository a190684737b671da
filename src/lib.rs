//! NextSound Share: multi-track selection, share formatting, clipboard
//! delivery and toast notifications for the NextSound web client.

pub mod components;
pub mod config;
pub mod observer;
pub mod share;
pub mod timing;
pub mod toast;
pub mod tracks;
pub mod utils;
