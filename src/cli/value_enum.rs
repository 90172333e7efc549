use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain report, one field per line
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
}
