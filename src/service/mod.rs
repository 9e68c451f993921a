pub mod activities;
pub mod campers;
pub mod signups;

pub use activities::ActivityService;
pub use campers::CamperService;
pub use signups::SignupService;
