//! # orbis-calendar
//!
//! Pure day arithmetic for the Orbis daily challenge.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["epoch ms"] -->|"DayClock::raw_day()"| B["raw day (i64)"]
//!     B -->|"rem_euclid(cycle)"| C["day index (0..cycle)"]
//!     A -->|"DayClock::window()"| D["ChallengeWindow"]
//!     D -->|".challenge_date() / .next_reset()"| E["caller's challenge record"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use orbis_calendar::DayClock;
//!
//! let clock = DayClock::new(5, 365).unwrap();
//! let index = clock.day_index(1_749_963_600_000); // 2025-06-15T05:00:00Z
//! assert_eq!(index, 179);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `clock` | Day index resolution against a UTC reset hour |
//! | `window` | Challenge window (date, start, next reset) |
//! | `error` | Error types |

mod clock;
mod error;
mod window;

pub use clock::{
    DEFAULT_CYCLE_LENGTH_DAYS, DEFAULT_RESET_HOUR_UTC, DayClock, MS_PER_DAY, MS_PER_HOUR,
};
pub use error::CalendarError;
pub use window::ChallengeWindow;
