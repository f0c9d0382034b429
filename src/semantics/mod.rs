mod scope;
mod analyzer;

pub use scope::Scope;
pub use analyzer::SemanticAnalyzer;
