use std::path::Path;
use std::process;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use alert_detail::cli::{Args, OutputFormat};
use alert_detail::config::{discover_config, load_config_from_path, ConfigFile};
use alert_detail::prelude::*;

const DEFAULT_BASE_URL: &str = "http://localhost:1426";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Resolve configuration: explicit file, else auto-discovery, with CLI overrides
    let config = resolve_config(args.config.as_deref())?;
    let base_url = args
        .base_url
        .clone()
        .or_else(|| config.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

    // Create adapters (Dependency Injection)
    let client = DetectionApiClient::with_timeout(&base_url, timeout)?;
    let store = MemoryGroupStore::new();
    let notifier = StderrToastNotifier::new();

    // Create use case with injected dependencies
    let use_case = LoadAlertDetailUseCase::new(client.clone(), client, store, notifier);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("   {spinner:.green} {msg}")
            .expect("Failed to set spinner template"),
    );
    spinner.set_message(format!("Loading alert {}...", args.alert_id));
    spinner.enable_steady_tick(Duration::from_millis(80));

    // The aggregate never fails; failed fetches have already been toasted
    let model = use_case.execute(&args.alert_id).await;
    let controller = use_case.controller_defaults(&model);

    spinner.finish_and_clear();

    match args.format {
        OutputFormat::Json => {
            let mut output = serde_json::Map::new();
            output.insert("model".to_string(), serde_json::to_value(&model)?);
            output.insert("controller".to_string(), serde_json::to_value(&controller)?);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => print!("{}", render_text(&model, &controller)),
    }

    Ok(())
}

fn resolve_config(path: Option<&str>) -> Result<ConfigFile> {
    match path {
        Some(path) => load_config_from_path(Path::new(path)),
        None => Ok(discover_config(Path::new("."))?.unwrap_or_default()),
    }
}

fn render_text(model: &AlertDetailModel, controller: &ControllerInit) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(out, "Alert {}", model.alert_id);

    match &model.alert_data {
        Some(view) => {
            let _ = writeln!(
                out,
                "  Active:               {}",
                if view.is_active { "yes" } else { "no" }
            );
            if let Some(created_by) = &view.created_by {
                let _ = writeln!(out, "  Created by:           {}", created_by);
            }
            if let Some(updated_by) = &view.updated_by {
                let _ = writeln!(out, "  Updated by:           {}", updated_by);
            }
            if let Some(last_detection) = &view.last_detection_time {
                let _ = writeln!(out, "  Last detection:       {}", last_detection);
            }
            if !view.explore_dimensions.is_empty() {
                let _ = writeln!(
                    out,
                    "  Explore dimensions:   {}",
                    view.explore_dimensions.join(", ")
                );
            }
            if !view.filters.is_empty() {
                let _ = writeln!(out, "  Filters:              {}", view.filters.join("; "));
            }
            if !view.dimension_exploration.is_empty() {
                let _ = writeln!(
                    out,
                    "  Dimension exploration: {}",
                    view.dimension_exploration.join("; ")
                );
            }
        }
        None => {
            let _ = writeln!(out, "  (no detection data)");
        }
    }

    let _ = writeln!(
        out,
        "  Subscribed groups:    {}",
        if model.subscribed_groups.is_empty() {
            "(none)"
        } else {
            &model.subscribed_groups
        }
    );
    let _ = writeln!(
        out,
        "  Known groups:         {}",
        model.subscription_group_names.len()
    );

    let _ = writeln!(out);
    for section in &controller.sections {
        let _ = writeln!(out, "{} ({})", section.group_name, section.options.len());
        for option in &section.options {
            let _ = writeln!(out, "  - {} [{}]", option.name, option.id);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> AlertDetailModel {
        AlertDetailModel {
            alert_id: "1234".to_string(),
            alert_data: None,
            detection_yaml: None,
            subscription_groups: Some(vec![SubscriptionGroup {
                id: Some(1),
                name: "te-ops".to_string(),
                yaml: Some("type: EMAIL".to_string()),
                active: true,
            }]),
            subscribed_groups: "te-ops".to_string(),
            subscription_group_names: vec!["te-ops".to_string(), "te-dev".to_string()],
        }
    }

    fn sample_controller(model: &AlertDetailModel) -> ControllerInit {
        let create_group = GroupOption::create_group();
        ControllerInit {
            alert_id: model.alert_id.clone(),
            create_group: create_group.clone(),
            sections: vec![
                DisplayGroupSection::new("Create Group", vec![create_group.clone()]),
                DisplayGroupSection::new("Subscribed Groups", vec![]),
                DisplayGroupSection::new("Other Groups", vec![]),
            ],
            selected_group: create_group,
            selected_group_id: CREATE_GROUP_ID.to_string(),
            subscription_yaml: DEFAULT_SUBSCRIPTION_YAML.to_string(),
            detection_yaml: None,
        }
    }

    #[test]
    fn test_render_text_without_detection_data() {
        let model = sample_model();
        let controller = sample_controller(&model);
        let text = render_text(&model, &controller);

        assert!(text.contains("Alert 1234"));
        assert!(text.contains("(no detection data)"));
        assert!(text.contains("Subscribed groups:    te-ops"));
        assert!(text.contains("Create Group (1)"));
        assert!(text.contains("[n/a]"));
    }

    #[test]
    fn test_render_text_empty_subscribed_groups() {
        let mut model = sample_model();
        model.subscribed_groups = String::new();
        let controller = sample_controller(&model);
        let text = render_text(&model, &controller);

        assert!(text.contains("(none)"));
    }

    #[test]
    fn test_resolve_config_defaults_when_absent() {
        let config = resolve_config(None).unwrap();
        assert!(config.base_url.is_none() || !config.base_url.as_deref().unwrap().is_empty());
    }
}
