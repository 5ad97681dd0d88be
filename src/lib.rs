// SPDX-License-Identifier: Apache-2.0
pub mod booking;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod mailer;
