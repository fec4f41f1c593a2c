//! CLI entry point for `nl2policy`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use nl2policy::engine::assembler::generate_policy;
use nl2policy::engine::risk::{assess_risk, risk_score, RiskLevel};
use nl2policy::store::export;
use nl2policy::store::kv::PolicyStore;
use nl2policy::store::saved::SavedPolicyItem;

#[derive(Parser)]
#[command(
    name = "nl2policy",
    about = "Translate natural-language access requests into structured governance policies"
)]
struct Cli {
    /// Policy request text
    #[arg(required_unless_present_any = ["input_file", "list", "delete", "export"])]
    text: Option<String>,

    /// Read the request text from a file
    #[arg(long)]
    input_file: Option<PathBuf>,

    /// Save the generated policy to the store
    #[arg(long)]
    save: bool,

    /// Policy store file
    #[arg(long, default_value = "nl2policy-store.json")]
    store: PathBuf,

    /// List saved policies
    #[arg(long)]
    list: bool,

    /// Delete a saved policy by id
    #[arg(long)]
    delete: Option<String>,

    /// Print the export JSON for a saved policy id
    #[arg(long)]
    export: Option<String>,

    /// Exit with status 1 when the assessed risk reaches this level
    #[arg(long)]
    fail_on: Option<RiskLevel>,

    /// Print verbose diagnostics
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let store = PolicyStore::new(&cli.store);

    if cli.list {
        for item in store.load() {
            println!(
                "{}  {}  {}  {}",
                item.id,
                item.created_at.to_rfc3339(),
                assess_risk(&item.policy),
                item.nlp_text
            );
        }
        return;
    }

    if let Some(id) = &cli.delete {
        match store.delete(id) {
            Ok(true) => return,
            Ok(false) => {
                eprintln!("No saved policy with id {id}");
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error deleting policy: {e}");
                process::exit(2);
            }
        }
    }

    if let Some(id) = &cli.export {
        let Some(item) = store.load().into_iter().find(|item| &item.id == id) else {
            eprintln!("No saved policy with id {id}");
            process::exit(1);
        };
        match export::export_pretty(&item) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error exporting policy: {e}");
                process::exit(2);
            }
        }
        return;
    }

    // Collect the request text
    let text = match (&cli.text, &cli.input_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading {}: {e}", path.display());
                process::exit(2);
            }
        },
        (None, None) => {
            eprintln!("No request text provided");
            process::exit(2);
        }
    };

    // Stage 1: Generate the structured policy
    let policy = generate_policy(&text);

    // Stage 2: Assess risk
    let risk = assess_risk(&policy);

    if cli.verbose {
        eprintln!(
            "Roles: {:?}, fields: {:?}, action: {}, score: {}",
            policy.role,
            policy.data_field,
            policy.action,
            risk_score(&policy)
        );
    }

    // Stage 3: Print the policy
    match serde_json::to_string_pretty(&policy) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing policy: {e}");
            process::exit(2);
        }
    }
    eprintln!("Risk: {risk}");

    // Stage 4: Persist when requested
    if cli.save {
        let item = SavedPolicyItem::new(policy, &text);
        let id = item.id.clone();
        if let Err(e) = store.insert(item) {
            eprintln!("Error saving policy: {e}");
            process::exit(2);
        }
        eprintln!("Saved policy {id}");
    }

    // Exit code based on assessed risk
    if cli.fail_on.is_some_and(|level| risk >= level) {
        process::exit(1);
    }
}
