//! `bot-schedule`: one-shot deferred timers for bot behaviors.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`timer`]       | `TimerEvent`, `TimerRequest`, `Scheduler` trait          |
//! | [`timer_queue`] | `TimerQueue` (`BTreeMap<Millis, Vec<(BotId, TimerEvent)>>`) |
//!
//! # Timer model
//!
//! The host offers a single deferred primitive: "call me back once after N
//! milliseconds".  There is no repeat and no cancel handle.  Behaviors ask for
//! a callback through [`Scheduler::set_timeout`]; the simulation buffers those
//! requests per bot during a frame and files them into the shared
//! [`TimerQueue`] once the frame is over.  Due entries are delivered back to
//! their bot between frames, never during one.

pub mod timer;
pub mod timer_queue;


pub use timer::{Scheduler, TimerEvent, TimerRequest};
pub use timer_queue::TimerQueue;
