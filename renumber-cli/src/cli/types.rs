use clap::ValueEnum;
use renumber_core::{OutputFormat as CoreOutputFormat, Preview};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum PreviewArg {
    Table,
    Summary,
    None,
}

impl PreviewArg {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "summary" => Some(Self::Summary),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

impl From<PreviewArg> for Preview {
    fn from(arg: PreviewArg) -> Self {
        match arg {
            PreviewArg::Table => Self::Table,
            PreviewArg::Summary => Self::Summary,
            PreviewArg::None => Self::None,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum OutputFormat {
    Summary,
    Json,
}

impl From<OutputFormat> for CoreOutputFormat {
    fn from(arg: OutputFormat) -> Self {
        match arg {
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}
