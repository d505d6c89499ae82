use crate::report::write_report;
use clap::ValueEnum;
use mkt_core::models::{AnalysisResult, DisplayFlags};
use std::{io::Write, str::FromStr};

// This explicitly articulates the available renderings for the `analyze` subcommand
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn render<W: Write>(
        &self,
        result: &AnalysisResult,
        display: &DisplayFlags,
        buffer: &mut W,
    ) -> anyhow::Result<()> {
        match self {
            Self::Text => write_report(buffer, result, display)?,
            Self::Json => serde_json::to_writer_pretty(&mut *buffer, result)?,
        };
        buffer.flush()?;
        Ok(())
    }
}

impl FromStr for OutputFormat {
    type Err = OutputFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" | "txt" => Ok(Self::Text),
            "json" | "JSON" => Ok(Self::Json),
            _ => Err(Self::Err::Unknown(s.to_owned())),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum OutputFormatError {
    #[error("Unknown output format: {0}")]
    Unknown(String),
}
