//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file and, optionally, a starter keyword list.

use crate::config::DEFAULT_CONFIG_FILE;
use clap::Args;
use std::fs;
use std::path::Path;

/// Starter keywords written by `--with-keywords`
const STARTER_KEYWORDS: &[&str] = &[
    "name", "email", "phone", "address", "ssn", "birth", "dob", "passport", "license", "iban",
    "card", "salary", "gender", "zip", "postcode",
];

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub output: String,

    /// Also write a starter keyword list to this path
    #[arg(long, value_name = "PATH")]
    pub with_keywords: Option<String>,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing PiiScout configuration");
        println!();

        let targets = std::iter::once(self.output.as_str()).chain(self.with_keywords.as_deref());
        for target in targets {
            if Path::new(target).exists() && !self.force {
                println!("❌ File already exists: {}", target);
                println!("   Use --force to overwrite");
                return Ok(2);
            }
        }

        let keywords_path = self.with_keywords.as_deref().unwrap_or("keywords.txt");

        if let Err(e) = fs::write(&self.output, generate_config(keywords_path)) {
            println!("❌ Failed to write configuration file");
            println!("   Error: {}", e);
            return Ok(5);
        }
        println!("✅ Configuration file created: {}", self.output);

        if let Some(path) = &self.with_keywords {
            if let Err(e) = fs::write(path, generate_keywords()) {
                println!("❌ Failed to write keyword list");
                println!("   Error: {}", e);
                return Ok(5);
            }
            println!("✅ Keyword list created: {}", path);
        }

        println!();
        println!("Next steps:");
        println!("  1. Edit {} with your server details", self.output);
        println!("  2. Set PIISCOUT_DB_PASSWORD in the environment or a .env file");
        println!("  3. Validate configuration: piiscout validate-config");
        println!("  4. Run the scan: piiscout scan");
        println!();
        Ok(0)
    }
}

/// Sample configuration pointing at `keywords_path`
fn generate_config(keywords_path: &str) -> String {
    format!(
        r#"# PiiScout Configuration File
# PII column detector for MySQL and PostgreSQL

[application]
log_level = "info"  # trace | debug | info | warn | error

[connection]
dialect = "mysql"  # mysql | postgresql
host = "localhost"
# port = 3306  # defaults to 3306 (mysql) or 5432 (postgresql)
user = "auditor"
password = "${{PIISCOUT_DB_PASSWORD}}"
# Database used to enumerate databases (postgresql only)
maintenance_database = "postgres"
connect_timeout_seconds = 10
# Keep one connection per database instead of reconnecting for every query
reuse_connections = false

[scan]
keywords_path = '{keywords_path}'
sample_limit = 5
# Blank lines in the keyword list match every column unless skipped
skip_blank_keywords = false
summary_mode = "rescan"  # rescan | aggregate
# Extra databases to skip on top of the server's system databases
exclude_databases = []

[report]
output_dir = "."
write_json = false

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"  # daily | hourly | never
"#
    )
}

fn generate_keywords() -> String {
    let mut out = STARTER_KEYWORDS.join("\n");
    out.push('\n');
    out
}
