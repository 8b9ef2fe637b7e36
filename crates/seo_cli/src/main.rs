use clap::{Parser, ValueEnum};
use seo_core::{logging::init_logging, Result, SeoRequest, SeoResult};
use seo_inference::{create_model, prompts::build_request, Config, SeoEngine};
use seo_web::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use url::Url;

mod render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_model_url(s: &str) -> std::result::Result<Url, String> {
    Url::parse(s).map_err(|e| format!("invalid model URL: {}", e))
}

#[derive(Parser, Debug)]
#[command(author, version, about = "SEO keyword research, page blueprints and content drafts", long_about = None)]
pub struct Cli {
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    #[arg(long, env = "SEO_MODEL", default_value = "gemini", help = "Model to use for generation. Available models: gemini (default), dummy")]
    model: String,
    #[arg(long, env = "GEMINI_MODEL")]
    model_name: Option<String>,
    #[arg(long, env = "GEMINI_BASE_URL", value_parser = parse_model_url)]
    model_url: Option<Url>,
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Print the prompt and schema without calling the model
    #[arg(long, global = true)]
    dry_run: bool,
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Exact-match keyword research for a domain
    Keywords {
        #[arg(long)]
        domain: String,
        #[arg(long)]
        description: String,
    },
    /// Meta tags, keyword cluster and heading outline for a page
    Page {
        #[arg(long)]
        domain: String,
        #[arg(long)]
        focus_keyword: String,
        #[arg(long)]
        description: String,
    },
    /// Product page copy
    Product {
        #[arg(long)]
        name: String,
        #[arg(long)]
        focus_keyword: String,
        #[arg(long)]
        description: String,
    },
    /// Long-form blog draft
    Blog {
        #[arg(long)]
        focus_keyword: String,
    },
    /// Render a saved JSON result
    Render { file: PathBuf },
    /// Serve the JSON API
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

impl Commands {
    fn seo_request(&self) -> Option<SeoRequest> {
        let request = match self {
            Commands::Keywords {
                domain,
                description,
            } => SeoRequest::KeywordResearch {
                domain: domain.clone(),
                description: description.clone(),
            },
            Commands::Page {
                domain,
                focus_keyword,
                description,
            } => SeoRequest::PageOptimization {
                domain: domain.clone(),
                focus_keyword: focus_keyword.clone(),
                description: description.clone(),
            },
            Commands::Product {
                name,
                focus_keyword,
                description,
            } => SeoRequest::ProductCopy {
                product_name: name.clone(),
                description: description.clone(),
                focus_keyword: focus_keyword.clone(),
            },
            Commands::Blog { focus_keyword } => SeoRequest::BlogContent {
                focus_keyword: focus_keyword.clone(),
            },
            Commands::Render { .. } | Commands::Serve { .. } => return None,
        };
        Some(request)
    }
}

impl Cli {
    fn inference_config(&self) -> Config {
        Config {
            api_key: self.api_key.clone(),
            model_name: self.model_name.clone(),
            base_url: self.model_url.as_ref().map(Url::to_string),
            provider: Some(self.model.clone()),
        }
    }
}

fn print_result(result: &SeoResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render::render(result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}

async fn generate(cli: &Cli, request: SeoRequest) -> Result<()> {
    request.validate()?;

    if cli.dry_run {
        let pair = build_request(&request);
        match cli.format {
            OutputFormat::Text => println!("{}", pair.combined()),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&pair)?),
        }
        return Ok(());
    }

    let engine = SeoEngine::new(create_model(&cli.inference_config())?);
    let feature = request.feature();
    let generation = match engine.generate(&request).await {
        Ok(generation) => generation,
        Err(e) if e.is_generation_failure() => {
            eprintln!("{}", feature.failure_message());
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    match cli.format {
        OutputFormat::Text => print_result(&generation.result, cli.format)?,
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&generation)?),
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    if let Some(request) = cli.command.seo_request() {
        return generate(&cli, request).await;
    }

    match &cli.command {
        Commands::Render { file } => {
            let text = tokio::fs::read_to_string(file).await?;
            let value: serde_json::Value = serde_json::from_str(&text)?;
            let result = SeoResult::detect(value)?;
            print_result(&result, cli.format)
        }
        Commands::Serve { addr } => {
            let model = create_model(&cli.inference_config())?;
            seo_web::serve(AppState::new(SeoEngine::new(model)), *addr).await
        }
        _ => Ok(()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    info!(model = %cli.model, "🚀 Starting");

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(kind = e.kind(), "{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
