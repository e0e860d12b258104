use crate::*;

fn picker_for(file: &Option<PathBuf>) -> Box<dyn FilePicker> {
    match file {
        Some(path) => Box::new(ArgPicker(path.clone())),
        None => Box::new(PromptPicker::new(
            std::io::stdin().lock(),
            std::io::stderr(),
        )),
    }
}

/// Notices end the invocation: show the message and exit non-zero, nothing else.
fn notice_or<T>(result: Result<T, SyncError>) -> anyhow::Result<T> {
    match result {
        Ok(v) => Ok(v),
        Err(e) if e.is_notice() => {
            notice(&e.to_string());
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

pub fn handle_runtime_commands(cli: &Cli, settings: &Settings) -> anyhow::Result<bool> {
    let vault = Vault::new(&cli.vault, &cli.note);

    match &cli.command {
        Commands::Sync { file, out_dir } => {
            let export_dir = match out_dir {
                Some(d) => d.clone(),
                None => default_export_dir()?,
            };
            let mut picker = picker_for(file);
            let outcome = notice_or(run_sync(
                &vault,
                picker.as_mut(),
                &export_dir,
                &config_dir()?,
                settings,
            ))?;

            match outcome {
                SyncOutcome::Completed(report) => {
                    record(COMMAND_ID, serde_json::to_value(&report)?);
                    let data = serde_json::json!({"status": "synced", "report": &report});
                    print_one(cli.json, data, |_| {
                        format!(
                            "synced {} entries (+{} new) into {}; exported {}",
                            report.stats.merged_entries,
                            report.stats.added_to_note,
                            report.note_path.display(),
                            report
                                .export_path
                                .as_ref()
                                .map(|p| p.display().to_string())
                                .unwrap_or_default()
                        )
                    })?;
                }
                SyncOutcome::Cancelled => {
                    if cli.json {
                        print_json(serde_json::json!({"status": "cancelled"}))?;
                    }
                }
            }
        }
        Commands::Preview { file } => {
            let mut picker = picker_for(file);
            let Some(shown) = notice_or(preview(&vault, picker.as_mut()))? else {
                if cli.json {
                    print_json(serde_json::json!({"status": "cancelled"}))?;
                }
                return Ok(true);
            };
            if cli.json {
                print_json(&shown)?;
            } else {
                for entry in &shown.entries {
                    println!("{}", entry);
                }
            }
        }
        _ => return Ok(false),
    }

    Ok(true)
}
