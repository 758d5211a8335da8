pub mod configuration;
pub mod simulation;
pub mod visualization;

pub use simulation::attraction::{attraction_accelerations, Attractor};
pub use simulation::scenario::Scenario;
pub use simulation::spawn::{body_seeds, BodySeed};

pub use configuration::config::{BodyPaint, TrailFade, VariantConfig, VelocityMode};

pub use visualization::camera::compute_translation;
pub use visualization::palette::{ramp_alpha, speed_color, speed_hue};
pub use visualization::trail::{Sample, Trail};
pub use visualization::viewer::run;
