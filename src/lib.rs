// Export modules for library usage
pub mod config;
pub mod core;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::config::{PreferReflectConfig, ReflectMethod};
pub use crate::core::{Diagnostic, Error, SourceLocation};
pub use crate::engine::Linter;
pub use crate::rules::prefer_reflect::PreferReflect;
pub use crate::rules::{run_rule, Rule, RuleContext, RuleMeta};
