pub mod machine;
pub mod steps;

pub use machine::{Transition, Wizard};
pub use steps::{ChoiceOption, FollowUp, InputKind, STEPS, StepDescriptor, step, step_for_field};
