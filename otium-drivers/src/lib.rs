//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in otium-core, written against `embedded-hal` 1.0 pins and delays:
//!
//! - HD44780 16x2 character LCD in 4-bit mode, with a backlight pin
//! - GPIO buzzer for the retirement alarm

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod alarm;
pub mod display;
