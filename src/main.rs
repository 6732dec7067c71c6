use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use replydraft::client::HttpGenerateClient;
use replydraft::config::Config;
use replydraft::logging::{init_file_tracing, init_stderr_tracing, init_tracing};
use replydraft::protocol::{EmailLength, EmailStyle};
use replydraft::server::GenerateServer;
use replydraft::ui::controller::FormController;
use replydraft::ui::form::{
    ClassificationView, ExampleLetter, FactsView, FormIntent, Severity, TextEdit, TextField,
    CLASSIFICATION_PLACEHOLDER, FACTS_PLACEHOLDER,
};

#[derive(Debug, Parser)]
#[command(name = "replydraft", version, about = "Draft replies to business letters")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the generate service
    Serve {
        /// Config file (default: <config_dir>/replydraft/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override server.bind_addr
        #[arg(long)]
        bind: Option<String>,
    },
    /// Open the terminal reply form
    Compose {
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override client.endpoint
        #[arg(long)]
        endpoint: Option<String>,
    },
    /// Generate one reply and print it
    Generate {
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        endpoint: Option<String>,
        /// Tone of the reply
        #[arg(long, value_enum, default_value_t = EmailStyle::Business)]
        style: EmailStyle,
        /// Length of the reply
        #[arg(long, value_enum, default_value_t = EmailLength::Full)]
        length: EmailLength,
        /// Read the letter from a file instead of stdin
        #[arg(long, conflicts_with = "example")]
        file: Option<PathBuf>,
        /// Use a sample letter: complaint, regulator or partner
        #[arg(long)]
        example: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Serve { config, bind } => serve(config.as_deref(), bind),
        Command::Compose { config, endpoint } => compose(config.as_deref(), endpoint),
        Command::Generate {
            config,
            endpoint,
            style,
            length,
            file,
            example,
        } => generate(
            config.as_deref(),
            endpoint,
            style,
            length,
            file.as_deref(),
            example.as_deref(),
        ),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_env_overrides();
    config.validate()?;
    Ok(config)
}

fn serve(config_path: Option<&Path>, bind: Option<String>) -> Result<()> {
    init_tracing();
    let mut config = load_config(config_path)?;
    if let Some(bind) = bind {
        config.server.bind_addr = bind;
        config.validate()?;
    }

    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    runtime.block_on(async {
        let mut server = GenerateServer::new(&config)?;
        server.try_bind().await?;
        server.run().await?;
        Ok::<(), anyhow::Error>(())
    })
}

fn compose(config_path: Option<&Path>, endpoint: Option<String>) -> Result<()> {
    let config = load_config(config_path)?;
    let log_path = Config::config_dir().join("compose.log");
    init_file_tracing(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let endpoint = endpoint.unwrap_or(config.client.endpoint);
    replydraft::ui::runtime::run(endpoint)?;
    Ok(())
}

fn generate(
    config_path: Option<&Path>,
    endpoint: Option<String>,
    style: EmailStyle,
    length: EmailLength,
    file: Option<&Path>,
    example: Option<&str>,
) -> Result<()> {
    init_stderr_tracing();
    let config = load_config(config_path)?;
    let client = HttpGenerateClient::new(endpoint.unwrap_or(config.client.endpoint));

    let mut controller = FormController::new();
    match (example, file) {
        (Some(id), _) => {
            if ExampleLetter::from_id(id).is_none() {
                bail!("Unknown example '{}': expected complaint, regulator or partner", id);
            }
            controller.load_example(id);
        }
        (None, Some(path)) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            set_input(&mut controller, text);
        }
        (None, None) => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read letter from stdin")?;
            set_input(&mut controller, text);
        }
    }
    controller.dispatch(FormIntent::SelectStyle(style));
    controller.dispatch(FormIntent::SelectLength(length));

    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    runtime.block_on(controller.generate(&client));

    let state = controller.state();
    if let Some(status) = &state.status {
        if status.severity == Severity::Error {
            bail!("{}", status.message);
        }
    }

    match &state.classification {
        ClassificationView::Badge(label) => println!("Классификация: {}", label),
        ClassificationView::Placeholder => println!("{}", CLASSIFICATION_PLACEHOLDER),
    }
    match &state.facts {
        FactsView::List(facts) => {
            println!("Ключевые факты:");
            for fact in facts {
                println!("  - {}: {}", fact.label, fact.value);
            }
        }
        FactsView::Placeholder => println!("{}", FACTS_PLACEHOLDER),
    }
    println!();
    println!("{}", state.answer);
    Ok(())
}

fn set_input(controller: &mut FormController, text: String) {
    controller.dispatch(FormIntent::Edit {
        field: TextField::Input,
        edit: TextEdit::InsertStr(text),
    });
}
