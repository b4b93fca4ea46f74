pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod wizard;

pub use error::{PlannerError, Result, ValidationError};
pub use models::{AnswerRecord, Field, PlanResult};
pub use wizard::{Transition, Wizard};
