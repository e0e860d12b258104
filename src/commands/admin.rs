use crate::*;

fn settings_row(s: &Settings) -> String {
    format!("to_lower_case={}", s.to_lower_case)
}

pub fn handle_settings_commands(cli: &Cli, settings: &mut Settings) -> anyhow::Result<bool> {
    let Commands::Settings { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        SettingsCommands::Show => {
            print_one(cli.json, settings.clone(), settings_row)?;
        }
        SettingsCommands::Set { to_lower_case } => {
            if let Some(v) = to_lower_case {
                settings.to_lower_case = *v;
            }
            save_settings(settings)?;
            print_one(cli.json, settings.clone(), settings_row)?;
        }
        SettingsCommands::Reset => {
            *settings = Settings::default();
            save_settings(settings)?;
            print_one(cli.json, settings.clone(), settings_row)?;
        }
    }

    Ok(true)
}

pub fn handle_history(cli: &Cli) -> anyhow::Result<bool> {
    let Commands::History { limit } = &cli.command else {
        return Ok(false);
    };

    let entries = load_history(*limit)?;
    print_out(cli.json, &entries, |e| {
        let merged = e.data["merged_entries"].as_u64().unwrap_or(0);
        let external = e.data["external_path"].as_str().unwrap_or("-");
        format!("{}\t{}\t{}\t{}", e.ts, e.action, merged, external)
    })?;
    Ok(true)
}
