use anyhow::{Context, Result, bail};
use serde_json::{Value, json};
use tracing::{debug, info, info_span, trace};

use cmms_cli::batch::check_file;
use cmms_cli::input::read_document;
use cmms_cli::logging::redact_value;
use cmms_cli::report::render_json;
use cmms_model::{DataType, parse_form_data};
use cmms_validate::{
    FormSchema, calculate_dv, classify_api_errors, clean_rut, format_rut, is_valid_hex_color,
    server_message, validate_edit, validate_form, validate_parameter_value,
    validate_rut_with_message,
};

use crate::cli::{ClassifyArgs, ColorArgs, FormArgs, ParamArgs, RutAction};
use crate::summary::{print_batch, print_field_errors, print_form, print_status};

/// Every command returns whether its input was accepted.
pub fn run_rut(action: &RutAction, json_output: bool) -> Result<bool> {
    let _span = info_span!("rut").entered();
    match action {
        RutAction::Clean { input } => {
            let clean = clean_rut(input);
            emit("rut clean", true, &json!({ "clean": clean }), json_output, || {
                println!("{clean}");
            })
        }
        RutAction::Format { input } => {
            let formatted = format_rut(input);
            emit(
                "rut format",
                true,
                &json!({ "formatted": formatted }),
                json_output,
                || println!("{formatted}"),
            )
        }
        RutAction::Dv { body } => {
            // calculate_dv expects digits only
            if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit()) {
                bail!("RUT body must contain only digits");
            }
            let dv = calculate_dv(body);
            emit(
                "rut dv",
                true,
                &json!({ "body": body, "dv": dv }),
                json_output,
                || println!("{dv}"),
            )
        }
        RutAction::Check { input } => {
            trace!(input = redact_value(input), "checking rut");
            let outcome = validate_rut_with_message(input);
            let formatted = format_rut(input);
            let status = outcome.message.as_deref().unwrap_or(&formatted);
            emit(
                "rut check",
                outcome.is_valid,
                &json!({ "formatted": formatted, "outcome": outcome }),
                json_output,
                || print_status(outcome.is_valid, status),
            )
        }
        RutAction::Batch { path, column } => {
            info!(path = %path.display(), column = %column, "checking rut batch");
            let report = check_file(path, column)?;
            let valid = !report.has_invalid();
            emit("rut batch", valid, &report, json_output, || print_batch(&report))
        }
    }
}

pub fn run_param(args: &ParamArgs, json_output: bool) -> Result<bool> {
    let data_type = DataType::from(args.data_type);
    trace!(value = redact_value(&args.value), %data_type, "checking parameter");
    let check = validate_parameter_value(&args.value, data_type);
    emit("param", check.valid, &check, json_output, || {
        print_status(check.valid, check.error.as_deref().unwrap_or(data_type.as_str()));
    })
}

pub fn run_color(args: &ColorArgs, json_output: bool) -> Result<bool> {
    let valid = is_valid_hex_color(&args.value);
    emit(
        "color",
        valid,
        &json!({ "value": args.value }),
        json_output,
        || print_status(valid, &args.value),
    )
}

pub fn run_form(args: &FormArgs, json_output: bool) -> Result<bool> {
    let schema = FormSchema::by_name(&args.entity)?;
    let _span = info_span!("form", entity = %schema.entity).entered();
    let text = read_document(&args.data)?;
    let data = parse_form_data(&text).context("parse form data")?;
    debug!(fields = data.len(), locked = args.locked, "form loaded");
    let result = if args.locked {
        validate_edit(&schema, &data, &Some(false))
    } else {
        validate_form(&schema, &data)
    };
    emit("form", result.valid, &result, json_output, || {
        print_form(&schema.entity, &result);
    })
}

pub fn run_classify(args: &ClassifyArgs, json_output: bool) -> Result<bool> {
    let text = read_document(&args.body)?;
    let body: Value = serde_json::from_str(&text).context("parse error body")?;
    if !body.is_object() {
        bail!("error body must be a JSON object");
    }
    let errors = classify_api_errors(&body);
    let message = server_message(&body);
    info!(entries = errors.len(), "error body classified");
    let payload = json!({ "server_message": message, "errors": errors });
    // Classification never rejects; the body itself is what was reported.
    emit("classify", true, &payload, json_output, || {
        if let Some(message) = &message {
            println!("server message: {message}");
        }
        print_field_errors(&errors);
    })
}

fn emit<T: serde::Serialize>(
    command: &str,
    valid: bool,
    result: &T,
    json_output: bool,
    print_human: impl FnOnce(),
) -> Result<bool> {
    if json_output {
        println!("{}", render_json(command, valid, result)?);
    } else {
        print_human();
    }
    Ok(valid)
}
