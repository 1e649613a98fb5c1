//! Domain types for the price history fetcher.
//!
//! All types validate at construction and are immutable afterwards; the
//! only lifecycle in this crate is accumulation of [`PricePoint`]s into a
//! [`PriceHistory`] across pagination iterations.

mod house;
mod price;
mod timestamp;

pub use house::{AccessToken, HouseId};
pub use price::{Page, PageInfo, PriceHistory, PricePoint};
pub use timestamp::PriceTimestamp;
