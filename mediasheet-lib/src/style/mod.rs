pub mod compiler;
pub mod matcher;
pub mod media_rule;
