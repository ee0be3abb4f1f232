//! Hook generation: scroll-stopping opening lines for a persona, with
//! optional vibe and platform tuning.

pub mod generator;
pub mod vibe;

pub use generator::{
    delivery_angles, generate_hooks, hook_lines, testing_plan, HookRequest, HookResponse,
    TestingPlan,
};
pub use vibe::{Platform, Vibe};
