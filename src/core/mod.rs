pub mod camera;
pub mod constants;
pub mod draw;
pub mod motion;
pub mod particles;
pub mod projection;
pub mod sim;

pub use camera::{CameraState, CameraTuning, ControlInput};
pub use draw::DrawCommand;
pub use projection::Viewport;
pub use sim::{CloudParams, FrameInput, Simulation};
