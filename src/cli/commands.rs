//! Subcommand handlers for config actions.

use super::args::ConfigAction;
use crate::ascii::DEFAULT_RAMP;
use crate::config::{default_path as get_config_path, Config};

const DEFAULT_CONFIG: &str = r#"# img2ascii configuration

[render]
# Brightness formula: average, min_max, luminosity, max, min
mode = "average"
# Character ramp, darkest to brightest. Uncomment to override the default.
# scale = " .:-=+*#%@"
invert = false

[output]
# Base name of the output file ({name}.txt)
name = "output"
"#;

/// Render the effective settings: config file values over built-in defaults.
fn effective_settings(cfg: &Config) -> String {
    format!(
        "  Mode: {}\n  Scale: {}\n  Invert: {}\n  Output name: {}\n",
        cfg.render.mode.as_deref().unwrap_or("average"),
        cfg.render.scale.as_deref().unwrap_or(DEFAULT_RAMP),
        if cfg.render.invert { "yes" } else { "no" },
        cfg.output.name.as_deref().unwrap_or("output"),
    )
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction) {
    match action {
        ConfigAction::Show => {
            let cfg = match Config::load(None) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            println!("Current configuration:");
            print!("{}", effective_settings(&cfg));
            println!();

            let config_path = get_config_path();
            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            let config_path = get_config_path();
            if config_path.exists() {
                println!("Config file already exists: {}", config_path.display());
                return;
            }
            if let Some(parent) = config_path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("Error: Failed to create {}: {}", parent.display(), e);
                    std::process::exit(1);
                }
            }
            match std::fs::write(&config_path, DEFAULT_CONFIG) {
                Ok(()) => println!("Created config file: {}", config_path.display()),
                Err(e) => {
                    eprintln!("Error: Failed to write config file: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputConfig, RenderConfig};

    #[test]
    fn test_effective_settings_built_in_defaults() {
        let out = effective_settings(&Config::default());
        assert!(out.contains("Mode: average"));
        assert!(out.contains(&format!("Scale: {}", DEFAULT_RAMP)));
        assert!(out.contains("Invert: no"));
        assert!(out.contains("Output name: output"));
    }

    #[test]
    fn test_effective_settings_reflect_config_file_values() {
        let cfg = Config {
            render: RenderConfig {
                mode: Some("luminosity".to_string()),
                scale: Some(" .:#".to_string()),
                invert: true,
            },
            output: OutputConfig {
                name: Some("art".to_string()),
            },
        };
        let out = effective_settings(&cfg);
        assert!(out.contains("Mode: luminosity"));
        assert!(out.contains("Scale:  .:#"));
        assert!(out.contains("Invert: yes"));
        assert!(out.contains("Output name: art"));
    }
}
