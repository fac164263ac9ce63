//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Contacts dispatched in the order they happened
//! - No rendering or platform dependencies

pub mod catalog;
pub mod collision;
pub mod fade;
pub mod game;
pub mod layout;
pub mod level;
pub mod physics;
pub mod progress;
mod resolver;
pub mod state;
pub mod tick;
pub mod timer;
pub mod title;

pub use catalog::{BrickCatalog, BrickKind, Category};
pub use fade::ColorFade;
pub use game::{Game, Scene};
pub use level::{LevelTable, next_scene};
pub use physics::{Contact, ContactFeed, PhysicsEvent};
pub use progress::GameProgress;
pub use state::{Ball, Brick, Deferred, GameEvent, LevelPhase, LevelState, Paddle};
pub use tick::{TickInput, autopilot_axis, tick_level};
pub use timer::{TimerId, TimerQueue};
pub use title::TitleScreen;
