//! CLI argument definitions for the CMMS validation toolkit.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use cmms_model::DataType;
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cmms",
    version,
    about = "CMMS form validation - RUT check digits, typed values and API errors",
    long_about = "Run the CMMS frontend's client-side validation rules from the shell.\n\n\
                  Checks Chilean RUTs (single values or CSV exports), typed parameter\n\
                  values, color codes and entity forms, and classifies API error bodies."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow raw input values (RUTs, form values) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Print a JSON report instead of tables.
    #[arg(long = "json", global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean, format, or validate Chilean RUTs.
    Rut(RutArgs),

    /// Check a raw parameter value against a data type.
    Param(ParamArgs),

    /// Check a #RRGGBB color code.
    Color(ColorArgs),

    /// Validate a JSON form against an entity schema.
    Form(FormArgs),

    /// Classify the field errors of an API error body.
    Classify(ClassifyArgs),
}

#[derive(Args)]
pub struct RutArgs {
    #[command(subcommand)]
    pub action: RutAction,
}

#[derive(Subcommand)]
pub enum RutAction {
    /// Strip separators and upper-case.
    Clean {
        #[arg(value_name = "RUT", allow_hyphen_values = true)]
        input: String,
    },
    /// Format as 12.345.678-5 (no validation).
    Format {
        #[arg(value_name = "RUT", allow_hyphen_values = true)]
        input: String,
    },
    /// Compute the check digit of a RUT body.
    Dv {
        #[arg(value_name = "BODY")]
        body: String,
    },
    /// Validate a RUT and explain any failure.
    Check {
        #[arg(value_name = "RUT", allow_hyphen_values = true)]
        input: String,
    },
    /// Validate every RUT in a CSV column.
    Batch {
        #[arg(value_name = "CSV")]
        path: PathBuf,

        /// Header of the column holding RUTs (case-insensitive).
        #[arg(long = "column", default_value = "rut")]
        column: String,
    },
}

#[derive(Args)]
pub struct ParamArgs {
    #[arg(value_name = "TYPE", value_enum)]
    pub data_type: DataTypeArg,

    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Args)]
pub struct ColorArgs {
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Args)]
pub struct FormArgs {
    /// Entity form: category, priority, work-order-type, parameter.
    #[arg(value_name = "ENTITY")]
    pub entity: String,

    /// Form data as inline JSON, @FILE, or - for stdin.
    #[arg(value_name = "JSON")]
    pub data: String,

    /// Treat the form as an edit of a record marked not editable.
    #[arg(long = "locked")]
    pub locked: bool,
}

#[derive(Args)]
pub struct ClassifyArgs {
    /// Error body as inline JSON, @FILE, or - for stdin.
    #[arg(value_name = "JSON")]
    pub body: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DataTypeArg {
    String,
    Integer,
    Float,
    Boolean,
    Json,
}

impl From<DataTypeArg> for DataType {
    fn from(arg: DataTypeArg) -> Self {
        match arg {
            DataTypeArg::String => DataType::String,
            DataTypeArg::Integer => DataType::Integer,
            DataTypeArg::Float => DataType::Float,
            DataTypeArg::Boolean => DataType::Boolean,
            DataTypeArg::Json => DataType::Json,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
