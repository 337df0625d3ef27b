//! # Scriba Feed
//!
//! The broadcast primitive behind Scriba's reactive read surface.
//!
//! ## Overview
//!
//! A [`ChangeFeed`] owns the current value and fans it out to any number
//! of [`Subscription`]s. Publishing never blocks: a subscriber that lags
//! has its pending value replaced by the newest one (latest-value-wins),
//! and a caught-up subscriber never observes stale data. Values reach
//! each subscriber in publish order; coalescing is the only permitted
//! skip.
//!
//! ## Usage
//!
//! ```rust
//! use scriba_feed::ChangeFeed;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let feed = ChangeFeed::new(0u32);
//! let mut sub = feed.subscribe();
//! assert_eq!(sub.current(), 0);
//!
//! feed.publish(1);
//! assert_eq!(sub.next().await, Some(1));
//! # }
//! ```

pub mod feed;

pub use feed::{ChangeFeed, Subscription};
