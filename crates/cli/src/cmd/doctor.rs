use zk_core::config::loader::{ConfigError, ROOT_VAR};
use zk_core::periodic::{daily, weekly};
use zk_core::Config;

use super::CommandError;

pub fn run(loaded: Result<Config, ConfigError>) -> Result<(), CommandError> {
    match loaded {
        Ok(cfg) => {
            let today = daily(&cfg);
            let this_week = weekly(&cfg);

            println!("OK   zk doctor");
            println!("root: {}", cfg.paths.root.display());
            println!("inbox: {}", cfg.paths.inbox().display());
            println!("daily_notes: {}", cfg.paths.daily_notes().display());
            println!("weekly_notes: {}", cfg.paths.weekly_notes().display());
            println!(
                "daily_template: {} ({})",
                cfg.paths.daily_template_path().display(),
                presence(cfg.paths.daily_template_path().is_file())
            );
            println!(
                "weekly_template: {} ({})",
                cfg.paths.weekly_template_path().display(),
                presence(cfg.paths.weekly_template_path().is_file())
            );
            println!("today: {} ({})", today.note_path().display(), presence(today.exists()));
            println!(
                "this_week: {} ({})",
                this_week.note_path().display(),
                presence(this_week.exists())
            );
            println!("editor: {}", cfg.editor.command);
            if cfg.editor.is_nvim() {
                println!("editor.args: {}", cfg.editor.args);
                println!("editor.commands: {}", cfg.editor.commands.join(", "));
            }
            println!("logging.level: {}", cfg.logging.level);
            if let Some(file) = &cfg.logging.file {
                println!("logging.file: {}", file.display());
            }
            Ok(())
        }
        Err(e) => {
            println!("FAIL zk doctor");
            if let ConfigError::MissingVar(_) = e {
                println!("hint: export {ROOT_VAR}=/path/to/your/zettelkasten");
            }
            Err(e.into())
        }
    }
}

fn presence(exists: bool) -> &'static str {
    if exists {
        "exists"
    } else {
        "missing"
    }
}
