mod pick_name;
mod route_path;

pub use pick_name::PickName;
pub use route_path::Path;
