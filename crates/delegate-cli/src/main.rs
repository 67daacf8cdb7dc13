mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "delegate",
    about = "Delegate suggestions, check-in dates and delegation state for your task list",
    version,
    propagate_version = true
)]
struct Cli {
    /// Plugin root (default: auto-detect from integrations/config/ or .git/)
    #[arg(long, global = true, env = "DELEGATE_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the example stakeholder graph and gitignore the real one
    Init,

    /// Suggest delegates for a task
    Match {
        /// Task title
        title: String,
        /// Task description
        #[arg(default_value = "")]
        description: String,
        /// Stakeholder graph (default: integrations/config/stakeholders.yaml)
        #[arg(long)]
        graph: Option<PathBuf>,
        /// Suggest even when the task carries an authority phrase
        #[arg(long)]
        skip_authority_check: bool,
    },

    /// Resolve a name or nickname to a stakeholder's display alias
    Resolve {
        name: String,
        #[arg(long)]
        graph: Option<PathBuf>,
    },

    /// List stakeholders in the graph (aliases only)
    Stakeholders {
        #[arg(long)]
        graph: Option<PathBuf>,
    },

    /// Check a task for phrases that require your own authority
    Authority {
        title: String,
        #[arg(default_value = "")]
        description: String,
    },

    /// Compute a check-in date N business days out
    Checkin {
        /// Business days to add
        #[arg(long, default_value_t = delegate_core::calendar::DEFAULT_CHECKIN_DAYS)]
        days: u32,
        /// Start date, YYYY-MM-DD (default: today)
        #[arg(long)]
        from: Option<String>,
    },

    /// Count business days from START up to (not including) END
    Elapsed {
        start: String,
        /// End date, YYYY-MM-DD (default: today)
        end: Option<String>,
    },

    /// Classify a task record's delegation state
    State {
        /// Task field as "Key=Value" (repeatable)
        #[arg(long = "field", short = 'f')]
        fields: Vec<String>,
        /// YAML mapping of task fields
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Build the task-list record for a direct delegation
    Record {
        title: String,
        /// Delegate alias or lookup term
        #[arg(long)]
        delegate: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Business days until check-in
        #[arg(long, default_value_t = delegate_core::calendar::DEFAULT_CHECKIN_DAYS)]
        days: u32,
        /// Scheduled date, YYYY-MM-DD (default: today)
        #[arg(long)]
        today: Option<String>,
        #[arg(long)]
        graph: Option<PathBuf>,
    },

    /// Build the intake record for a missed check-in
    FollowUp {
        /// Original task title
        title: String,
        #[arg(long)]
        delegate: String,
        /// Original check-in date, YYYY-MM-DD
        #[arg(long)]
        checkin: String,
        #[arg(long)]
        today: Option<String>,
    },

    /// Flag delegates holding several delegations open too long
    Stale {
        /// YAML or JSON list of {alias, task_title, scheduled_date}
        #[arg(long)]
        file: PathBuf,
        /// Business days before a delegation counts as stale
        #[arg(long, default_value_t = delegate_core::delegation::DEFAULT_STALE_THRESHOLD)]
        threshold: u32,
        #[arg(long)]
        today: Option<String>,
    },

    /// List delegations whose check-in is due or past
    Overdue {
        /// YAML or JSON list of {alias, task_title, checkin_date}
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        today: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    let json = cli.json;

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root, json),
        Commands::Match {
            title,
            description,
            graph,
            skip_authority_check,
        } => cmd::suggest::run(
            &root,
            graph.as_deref(),
            &title,
            &description,
            skip_authority_check,
            json,
        ),
        Commands::Resolve { name, graph } => {
            cmd::stakeholders::resolve(&root, graph.as_deref(), &name, json)
        }
        Commands::Stakeholders { graph } => {
            cmd::stakeholders::list(&root, graph.as_deref(), json)
        }
        Commands::Authority { title, description } => {
            cmd::authority::run(&title, &description, json)
        }
        Commands::Checkin { days, from } => cmd::dates::checkin(days, from.as_deref(), json),
        Commands::Elapsed { start, end } => cmd::dates::elapsed(&start, end.as_deref(), json),
        Commands::State { fields, file } => cmd::state::run(&fields, file.as_deref(), json),
        Commands::Record {
            title,
            delegate,
            description,
            days,
            today,
            graph,
        } => cmd::record::delegated(
            &root,
            cmd::record::DelegatedArgs {
                title: &title,
                description: &description,
                delegate: &delegate,
                days,
                today: today.as_deref(),
                graph: graph.as_deref(),
            },
            json,
        ),
        Commands::FollowUp {
            title,
            delegate,
            checkin,
            today,
        } => cmd::record::follow_up(&title, &delegate, &checkin, today.as_deref(), json),
        Commands::Stale {
            file,
            threshold,
            today,
        } => cmd::capacity::stale(&file, threshold, today.as_deref(), json),
        Commands::Overdue { file, today } => cmd::capacity::overdue(&file, today.as_deref(), json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
