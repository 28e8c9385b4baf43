mod class_swap;

pub use class_swap::ClassSwapTool;
