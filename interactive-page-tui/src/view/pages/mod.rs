//! 页面视图

pub mod accordion;
pub mod registration;
pub mod tabs;
