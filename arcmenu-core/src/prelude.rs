//! Common imports for hosts embedding the menu.

pub use crate::carousel::{CarouselEngine, CarouselFrame, CarouselMetrics, Edge};
pub use crate::error::{MenuError, Result};
pub use crate::headless::{HeadlessController, HeadlessSurface};
pub use crate::host::{
    FeedbackEvent, FeedbackPlayer, HostBoundary, NullFeedback, OneBasedWire,
    ScrollBehavior, Surface, WirePost,
};
pub use crate::infra::RuntimeConfig;
pub use crate::lifecycle::{
    Deferral, ManualScheduler, MenuController, MenuKey, MenuPhase,
    TaskScheduler, TaskTicket, WheelDelta,
};
pub use crate::render::{RenderOutput, render};
pub use crate::selection::SelectionState;
pub use arcmenu_model::prelude::*;
