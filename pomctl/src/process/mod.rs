//! Process management: detached timers and helper tools.

mod spawn;
pub mod timer;

pub use spawn::{spawn_process, ProcessOptions};
pub use timer::{DetachedTimer, TimerLauncher};
