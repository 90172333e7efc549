mod args;
mod parsers;
mod value_enum;

pub use args::Args;
pub use parsers::JobsArg;
pub use value_enum::OutputFormat;
