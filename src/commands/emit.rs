//! The `emit` command: build and print one task launch request.

use crate::cli::EmitArgs;
use crate::config::TaskConfig;
use crate::error::{Result, SparkError};
use crate::events::{append_event, Event, EventAction};
use crate::request::{LaunchRequest, LaunchRequestBuilder};
use serde_json::json;

/// Emit one launch request as JSON on stdout.
///
/// Overrides from flags are applied on top of the config file before
/// validation, so `--uri` can supply a uri the file omits. When every payload
/// field is overridden and the file is absent, the file is skipped entirely.
pub fn cmd_emit(args: EmitArgs) -> Result<()> {
    let config = resolve_config(&args)?;

    let request = LaunchRequestBuilder::new().build(
        &config.uri,
        &config.command_line_args,
        &config.environment_properties,
        &config.deployment_properties,
    );

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&request)
    } else {
        serde_json::to_string(&request)
    };
    let rendered = rendered
        .map_err(|e| SparkError::UserError(format!("failed to serialize launch request: {}", e)))?;

    println!("{}", rendered);

    // Best-effort audit logging: a failed append must not fail the emit.
    if let Some(log_path) = &args.log {
        let event = emit_event(&request);
        if let Err(e) = append_event(log_path, &event) {
            eprintln!("Warning: failed to log emit event: {}", e);
        }
    }

    Ok(())
}

/// Load the config file (when needed) and apply flag overrides.
fn resolve_config(args: &EmitArgs) -> Result<TaskConfig> {
    let mut config = if args.config.exists() {
        TaskConfig::load_unvalidated(&args.config)?
    } else if args.uri.is_some() {
        // Fully flag-driven invocation; no file required.
        TaskConfig::default()
    } else {
        return Err(SparkError::ConfigError(format!(
            "config file '{}' not found and no --uri override given",
            args.config.display()
        )));
    };

    if let Some(uri) = &args.uri {
        config.uri = uri.clone();
    }
    if let Some(cli_args) = &args.args {
        config.command_line_args = cli_args.clone();
    }
    if let Some(env) = &args.env_properties {
        config.environment_properties = env.clone();
    }
    if let Some(deploy) = &args.deploy_properties {
        config.deployment_properties = deploy.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Build the audit event for an emitted request.
fn emit_event(request: &LaunchRequest) -> Event {
    Event::new(EventAction::Emit).with_details(json!({
        "location": request.location,
        "argument_count": request.arguments.len(),
        "environment_count": request.environment.len(),
        "deployment_count": request.deployment.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn emit_args(config: PathBuf) -> EmitArgs {
        EmitArgs {
            config,
            uri: None,
            args: None,
            env_properties: None,
            deploy_properties: None,
            pretty: false,
            log: None,
        }
    }

    fn write_config(dir: &TempDir, yaml: &str) -> PathBuf {
        let path = dir.path().join("taskspark.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        path
    }

    #[test]
    fn emit_from_config_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "uri: hello.world\ncommand_line_args: \"param1='test'\"\n",
        );

        let result = cmd_emit(emit_args(path));
        assert!(result.is_ok());
    }

    #[test]
    fn emit_missing_config_without_uri_fails() {
        let args = emit_args(PathBuf::from("/nonexistent/taskspark.yaml"));
        let result = cmd_emit(args);

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::CONFIG_FAILURE);
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn emit_fully_flag_driven() {
        let mut args = emit_args(PathBuf::from("/nonexistent/taskspark.yaml"));
        args.uri = Some("hello.world".to_string());
        args.args = Some("a=1".to_string());

        assert!(cmd_emit(args).is_ok());
    }

    #[test]
    fn uri_override_completes_partial_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "environment_properties: \"prop.1=foo\"\n");

        // Without the override, validation fails on the empty uri.
        let result = cmd_emit(emit_args(path.clone()));
        assert!(result.is_err());

        let mut args = emit_args(path);
        args.uri = Some("hello.world".to_string());
        assert!(cmd_emit(args).is_ok());
    }

    #[test]
    fn emit_appends_event_to_log() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "uri: hello.world\n");
        let log_path = dir.path().join("events.ndjson");

        let mut args = emit_args(path);
        args.log = Some(log_path.clone());
        cmd_emit(args).unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("\"location\":\"hello.world\""));
    }

    #[test]
    fn resolve_config_applies_all_overrides() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "uri: old.uri\ncommand_line_args: \"old=1\"\nenvironment_properties: \"e=1\"\ndeployment_properties: \"d=1\"\n",
        );

        let mut args = emit_args(path);
        args.uri = Some("new.uri".to_string());
        args.args = Some("new=1".to_string());
        args.env_properties = Some("e=2".to_string());
        args.deploy_properties = Some("d=2".to_string());

        let config = resolve_config(&args).unwrap();
        assert_eq!(config.uri, "new.uri");
        assert_eq!(config.command_line_args, "new=1");
        assert_eq!(config.environment_properties, "e=2");
        assert_eq!(config.deployment_properties, "d=2");
    }

    #[test]
    fn emit_event_carries_counts() {
        let request = LaunchRequestBuilder::new().build(
            "hello.world",
            "a=1 b=2",
            "prop.1=foo",
            "",
        );
        let event = emit_event(&request);

        assert_eq!(event.details["location"], "hello.world");
        assert_eq!(event.details["argument_count"], 2);
        assert_eq!(event.details["environment_count"], 1);
        assert_eq!(event.details["deployment_count"], 0);
    }
}
