//! Source processing API for the semiotic notation
//!
//! This module provides the stage/format surface used by the CLI and by
//! tests: a processing specification names a pipeline stage (token or ast)
//! and an output format, and [`process_source`]/[`process_file`] produce the
//! serialized result. The caller supplies the compiled [`ExprParser`]; this
//! module never compiles one behind the caller's back.

use crate::semiotic::formats;
use crate::semiotic::lexer::lex;
use crate::semiotic::parser::ExprParser;
use std::fmt;
use std::fs;
use std::path::Path;

/// The processing stage (what data to extract)
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// The output format
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Notation,
}

/// A complete processing specification
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let Some((stage_str, format_str_rest)) = format_str.split_once('-') else {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        };

        let stage = match stage_str {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            other => return Err(ProcessingError::InvalidStage(other.to_string())),
        };

        let format = match format_str_rest {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "notation" => OutputFormat::Notation,
            other => return Err(ProcessingError::InvalidFormatType(other.to_string())),
        };

        // Validate stage/format compatibility
        match (&stage, &format) {
            (ProcessingStage::Token, OutputFormat::Simple | OutputFormat::Json) => {}
            (ProcessingStage::Ast, OutputFormat::Json | OutputFormat::Yaml | OutputFormat::Notation) => {}
            (stage, format) => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "format '{:?}' is not supported for the {:?} stage",
                    format, stage
                )))
            }
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// All valid processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Yaml,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Notation,
            },
        ]
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    ParseFailed(String),
    SerializationFailed(String),
    IoError(String),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::ParseFailed(msg) => write!(f, "Parse failed: {}", msg),
            ProcessingError::SerializationFailed(msg) => {
                write!(f, "Serialization failed: {}", msg)
            }
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessingError {}

/// Process source text according to the given specification
pub fn process_source(
    parser: &ExprParser,
    source: &str,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Token => {
            let tokens = lex(source).map_err(|e| ProcessingError::ParseFailed(e.to_string()))?;
            match spec.format {
                OutputFormat::Simple => Ok(formats::tokens_to_simple(&tokens)),
                OutputFormat::Json => formats::tokens_to_json(&tokens)
                    .map_err(|e| ProcessingError::SerializationFailed(e.to_string())),
                _ => Err(ProcessingError::InvalidFormatType(
                    "only 'simple' and 'json' work with the token stage".to_string(),
                )),
            }
        }
        ProcessingStage::Ast => {
            let expr = parser
                .parse(source)
                .map_err(|e| ProcessingError::ParseFailed(e.to_string()))?;
            match spec.format {
                OutputFormat::Json => formats::expr_to_json(&expr)
                    .map_err(|e| ProcessingError::SerializationFailed(e.to_string())),
                OutputFormat::Yaml => formats::expr_to_yaml(&expr)
                    .map_err(|e| ProcessingError::SerializationFailed(e.to_string())),
                OutputFormat::Notation => Ok(formats::expr_to_notation(&expr)),
                _ => Err(ProcessingError::InvalidFormatType(
                    "only 'json', 'yaml' and 'notation' work with the ast stage".to_string(),
                )),
            }
        }
    }
}

/// Process a file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    parser: &ExprParser,
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path.as_ref())
        .map_err(|e| ProcessingError::IoError(e.to_string()))?;
    // Files carry a trailing newline; the lexer skips it, but notation
    // output should not inherit it either, so the content goes in as-is
    process_source(parser, content.trim_end_matches('\n'), spec)
}

/// All valid stage-format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .into_iter()
        .map(|spec| {
            format!(
                "{}-{}",
                match spec.stage {
                    ProcessingStage::Token => "token",
                    ProcessingStage::Ast => "ast",
                },
                match spec.format {
                    OutputFormat::Simple => "simple",
                    OutputFormat::Json => "json",
                    OutputFormat::Yaml => "yaml",
                    OutputFormat::Notation => "notation",
                }
            )
        })
        .collect()
}
