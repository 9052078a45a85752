//! hookcraft - Tier-gated content generation for creators

mod cli;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use hookcraft_core::actor::{AccountActor, BillingActor, GenerationActor};
use hookcraft_core::models::{ContentGenerationRequest, TierLevel, UserSubscription};
use hookcraft_core::plans::PLANS;
use hookcraft_core::{
    confirm_payment, create_checkout, render_sections, ActorClient, AppConfig,
    GenerationOrchestrator, HttpTransport,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hookcraft",
    version,
    about = "Tier-gated content generation for creators",
    long_about = "Generate hooks, scripts and captions for short-form video, gated by your plan.\n\
                  \n\
                  Talks to the content actor over HTTP. The same actor backs the web\n\
                  frontend served by `hookcraft web`.\n\
                  \n\
                  Examples:\n\
                    hookcraft web                                    # Serve frontend + actor proxy\n\
                    hookcraft web --port 8080                        # Custom port\n\
                    hookcraft generate fitness TikTok Energetic \"busy parents\" \"Grow Audience\"\n\
                    hookcraft generate ... --calendar                # Include content calendar (Elite)\n\
                    hookcraft tier                                   # Show your plan and features\n\
                    hookcraft plans                                  # Compare plans\n\
                    hookcraft checkout pro                           # Upgrade via Stripe\n\
                    hookcraft payment-status cs_test_123             # Confirm a checkout\n\
                    hookcraft history --json                         # Past requests as JSON\n\
                  \n\
                  Web Frontend Workflow:\n\
                    # Option 1: Production (single command)\n\
                    trunk build --release                            # Compile frontend once\n\
                    hookcraft web                                    # Serves proxy + static frontend\n\
                    \n\
                    # Option 2: Development (hot reload)\n\
                    hookcraft web                                    # Terminal 1: proxy on 3333\n\
                    trunk serve                                      # Terminal 2: frontend on 3334\n\
                  \n\
                  Environment Variables:\n\
                    HOOKCRAFT_CONFIG                 # Path to config.toml\n\
                    HOOKCRAFT_ACTOR_URL              # Override actor endpoint\n\
                    HOOKCRAFT_BASE_URL               # Public origin used for Stripe return URLs\n\
                    HOOKCRAFT_NO_COLOR               # Disable ANSI colors (log-friendly)\n\
                    RUST_LOG                         # Log filter (default: hookcraft=info)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,

    /// Path to config file (default: ~/.config/hookcraft/config.toml)
    #[arg(long, global = true, env = "HOOKCRAFT_CONFIG")]
    config: Option<PathBuf>,

    /// Actor endpoint base URL
    #[arg(long, global = true, env = "HOOKCRAFT_ACTOR_URL")]
    actor_url: Option<String>,

    /// Public frontend origin for checkout return URLs
    #[arg(long, global = true, env = "HOOKCRAFT_BASE_URL")]
    base_url: Option<String>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "HOOKCRAFT_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the web frontend and actor proxy
    Web {
        /// Port for web server (default: from config, 3333)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Generate content for your plan
    Generate {
        /// Your niche, e.g. "home fitness"
        niche: String,
        /// Platform, e.g. TikTok
        platform: String,
        /// Tone, e.g. Energetic
        tone: String,
        /// Target audience
        audience: String,
        /// Goal, e.g. "Grow Audience"
        goal: String,
        /// Also generate a content calendar (Elite)
        #[arg(long)]
        calendar: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show your plan and its features
    Tier {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare available plans
    Plans {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start a Stripe checkout for a paid plan
    Checkout {
        /// Target plan: pro or elite
        tier: TierLevel,
        /// Print the checkout URL without opening a browser
        #[arg(long)]
        no_open: bool,
    },
    /// Confirm how a checkout session ended
    PaymentStatus {
        /// Stripe checkout session ID
        session_id: String,
    },
    /// Show previously submitted content requests
    History {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.actor_url, cli.base_url)
        .context("Invalid configuration")?;

    init_tracing(&config);

    let no_color = cli.no_color;

    match cli.mode {
        Mode::Web { port } => {
            run_web(config, port).await?;
        }
        Mode::Generate {
            niche,
            platform,
            tone,
            audience,
            goal,
            calendar,
            json,
        } => {
            let request = ContentGenerationRequest::new(niche, platform, tone, audience, goal);
            run_generate(&config, request, calendar, json, no_color).await?;
        }
        Mode::Tier { json } => {
            run_tier(&config, json, no_color).await?;
        }
        Mode::Plans { json } => {
            run_plans(&config, json, no_color).await;
        }
        Mode::Checkout { tier, no_open } => {
            run_checkout(&config, tier, no_open).await?;
        }
        Mode::PaymentStatus { session_id } => {
            run_payment_status(&config, &session_id).await?;
        }
        Mode::History { json } => {
            run_history(&config, json, no_color).await?;
        }
    }

    Ok(())
}

/// Logs go to stderr so `--json` output on stdout stays parseable
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn actor_client(config: &AppConfig) -> Result<ActorClient<HttpTransport>> {
    let transport = HttpTransport::new(
        config.actor_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )
    .context("Failed to create actor transport")?;

    Ok(ActorClient::new(transport))
}

async fn run_web(mut config: AppConfig, port: Option<u16>) -> Result<()> {
    if let Some(port) = port {
        config.port = port;
    }

    if config.dist_dir.join("index.html").exists() {
        println!("🌐 Frontend + actor proxy: http://localhost:{}", config.port);
    } else {
        println!(
            "🌐 Actor proxy only:       http://localhost:{}/api/*",
            config.port
        );
        println!("   💡 Run 'trunk build' in crates/hookcraft-web to compile the frontend");
    }

    hookcraft_web::run(&config).await
}

async fn run_generate(
    config: &AppConfig,
    request: ContentGenerationRequest,
    calendar: bool,
    json: bool,
    no_color: bool,
) -> Result<()> {
    let client = actor_client(config)?;
    let features = client
        .check_user_tier()
        .await
        .context("Failed to check your plan")?;

    let orchestrator = GenerationOrchestrator::new();
    let report = orchestrator.generate(&client, &request, &features).await?;

    let calendar = if calendar {
        match orchestrator
            .generate_calendar(&client, &request, &features)
            .await
        {
            Ok(calendar) => Some(calendar),
            Err(err) => {
                eprintln!("Calendar: {}", err.user_message());
                None
            }
        }
    } else {
        None
    };

    if json {
        println!("{}", cli::format_report_json(&report, calendar.as_deref()));
    } else {
        let views = render_sections(&report.content, &report.features);
        println!("{}", cli::format_sections(&views, no_color));
        if let Some(calendar) = &calendar {
            println!("\nContent Calendar\n================\n{}", calendar);
        }
    }

    if let Some(err) = report.persistence_error() {
        warn!(error = %err, "Content was generated but not saved to your history");
    }

    match report.error() {
        Some(err) if !report.has_results() => bail!("{}\n  {}", err.user_message(), err),
        Some(err) => {
            eprintln!("⚠ {}\n  {}", err.user_message(), err);
            Ok(())
        }
        None => Ok(()),
    }
}

async fn run_tier(config: &AppConfig, json: bool, no_color: bool) -> Result<()> {
    let client = actor_client(config)?;
    let (subscription, features) = tokio::join!(client.get_my_subscription(), client.check_user_tier());
    let subscription = subscription.context("Failed to load subscription")?;
    let features = features.context("Failed to check your plan")?;

    println!(
        "{}",
        cli::format_tier(subscription.as_ref(), &features, json, no_color)
    );
    Ok(())
}

/// Current tier is a best-effort highlight; the catalogue is local
async fn run_plans(config: &AppConfig, json: bool, no_color: bool) {
    let current = match actor_client(config) {
        Ok(client) => match client.get_my_subscription().await {
            Ok(subscription) => Some(UserSubscription::effective_tier(subscription.as_ref())),
            Err(err) => {
                warn!(error = %err, "Could not load current plan");
                None
            }
        },
        Err(err) => {
            warn!(error = %err, "Could not reach actor");
            None
        }
    };

    println!("{}", cli::format_plans(&PLANS, current, json, no_color));
}

async fn run_checkout(config: &AppConfig, tier: TierLevel, no_open: bool) -> Result<()> {
    let client = actor_client(config)?;
    let session = create_checkout(&client, tier, &config.public_base_url)
        .await
        .context("Failed to create checkout session. Please try again.")?;

    println!("Checkout for {}: {}", tier.label(), session.url);
    println!("Session ID: {}", session.id);

    if !no_open {
        open::that(&session.url).context("Failed to open browser")?;
    }

    println!(
        "\nAfter paying, confirm with: hookcraft payment-status {}",
        session.id
    );
    Ok(())
}

async fn run_payment_status(config: &AppConfig, session_id: &str) -> Result<()> {
    let client = actor_client(config)?;
    let outcome = confirm_payment(&client, session_id)
        .await
        .context("Failed to verify payment")?;

    println!("{}", cli::format_payment(&outcome));
    Ok(())
}

async fn run_history(config: &AppConfig, json: bool, no_color: bool) -> Result<()> {
    let client = actor_client(config)?;
    let requests = client
        .get_content_requests()
        .await
        .context("Failed to load content history")?;

    println!("{}", cli::format_history(&requests, json, no_color));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_checkout_parses_tier() {
        let cli = Cli::try_parse_from(["hookcraft", "checkout", "Elite", "--no-open"]).unwrap();
        match cli.mode {
            Mode::Checkout { tier, no_open } => {
                assert_eq!(tier, TierLevel::Elite);
                assert!(no_open);
            }
            _ => panic!("Expected Checkout"),
        }

        assert!(Cli::try_parse_from(["hookcraft", "checkout", "platinum"]).is_err());
    }

    #[test]
    fn test_generate_requires_all_fields() {
        assert!(Cli::try_parse_from(["hookcraft", "generate", "fitness", "TikTok"]).is_err());

        let cli = Cli::try_parse_from([
            "hookcraft",
            "generate",
            "fitness",
            "TikTok",
            "Energetic",
            "busy parents",
            "Grow Audience",
            "--json",
        ])
        .unwrap();
        assert!(matches!(cli.mode, Mode::Generate { json: true, calendar: false, .. }));
    }
}
