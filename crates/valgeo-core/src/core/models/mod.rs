pub mod atom;
pub mod ids;
pub mod system;
pub mod topology;
