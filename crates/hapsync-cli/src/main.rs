//! hapctl - reconcile load-balancer objects against a HAProxy Data Plane API.
//!
//! This is the entry point for the `hapctl` binary. Desired state arrives as
//! JSON files; observed state is printed as JSON with the durable
//! `parent/leaf` id.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use serde::Serialize;

use hapsync_client::{ClientConfig, DataplaneClient};
use hapsync_reconcile::{
    BackendKind, BindKind, FrontendKind, KindSpec, Observed, Reconciler, ServerKind,
    ServerTemplateKind, Scope,
};

/// Reconcile load-balancer objects against a HAProxy Data Plane API.
#[derive(Parser, Debug)]
#[command(name = "hapctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the Data Plane API.
    #[arg(long, env = "HAPROXY_HOST")]
    host: String,

    /// Basic authentication user.
    #[arg(long, env = "HAPROXY_USERNAME")]
    username: String,

    /// Basic authentication password.
    #[arg(long, env = "HAPROXY_PASSWORD", hide_env_values = true)]
    password: String,

    /// Skip TLS certificate verification.
    #[arg(long, env = "HAPROXY_INSECURE", default_value = "false")]
    insecure: bool,

    /// Enable debug logging.
    #[arg(long, default_value = "false")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

/// Managed object kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    Backend,
    Frontend,
    Bind,
    Server,
    ServerTemplate,
    Resolver,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all objects of a kind.
    List {
        #[arg(value_enum)]
        kind: Kind,

        /// Parent backend name (required for server templates).
        #[arg(long)]
        parent: Option<String>,
    },

    /// Read one object by its parent/leaf id.
    Get {
        #[arg(value_enum)]
        kind: Kind,

        /// Durable id, e.g. "root/b1" or "f1/bd1".
        id: String,
    },

    /// Create or update an object from a JSON desired-state file.
    Apply {
        #[arg(value_enum)]
        kind: Kind,

        /// Path to the desired-state JSON.
        #[arg(long)]
        file: PathBuf,

        /// Parent object name (nested kinds, create only).
        #[arg(long)]
        parent: Option<String>,

        /// Existing id to update; omit to create.
        #[arg(long)]
        id: Option<String>,
    },

    /// Delete an object by its parent/leaf id.
    Delete {
        #[arg(value_enum)]
        kind: Kind,

        /// Durable id, e.g. "root/b1" or "f1/bd1".
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_env_filter("hapsync=debug,hapctl=debug,warn")
            .with_writer(std::io::stderr)
            .init();
    }

    let mut config = ClientConfig::new(&cli.host, &cli.username, &cli.password);
    config.insecure = cli.insecure;
    let client = Arc::new(DataplaneClient::new(&config));

    match cli.command {
        Command::List { kind, parent } => list(&client, kind, parent.as_deref()).await,
        Command::Get { kind, id } => match kind {
            Kind::Backend => get::<BackendKind>(&client, &id).await,
            Kind::Frontend => get::<FrontendKind>(&client, &id).await,
            Kind::Bind => get::<BindKind>(&client, &id).await,
            Kind::Server => get::<ServerKind>(&client, &id).await,
            Kind::ServerTemplate => get::<ServerTemplateKind>(&client, &id).await,
            Kind::Resolver => anyhow::bail!("resolvers are read-only; use `list resolver`"),
        },
        Command::Apply {
            kind,
            file,
            parent,
            id,
        } => match kind {
            Kind::Backend => apply::<BackendKind>(&client, &file, parent, id).await,
            Kind::Frontend => apply::<FrontendKind>(&client, &file, parent, id).await,
            Kind::Bind => apply::<BindKind>(&client, &file, parent, id).await,
            Kind::Server => apply::<ServerKind>(&client, &file, parent, id).await,
            Kind::ServerTemplate => apply::<ServerTemplateKind>(&client, &file, parent, id).await,
            Kind::Resolver => anyhow::bail!("resolvers are read-only; use `list resolver`"),
        },
        Command::Delete { kind, id } => match kind {
            Kind::Backend => delete::<BackendKind>(&client, &id).await,
            Kind::Frontend => delete::<FrontendKind>(&client, &id).await,
            Kind::Bind => delete::<BindKind>(&client, &id).await,
            Kind::Server => delete::<ServerKind>(&client, &id).await,
            Kind::ServerTemplate => delete::<ServerTemplateKind>(&client, &id).await,
            Kind::Resolver => anyhow::bail!("resolvers are read-only"),
        },
    }
}

async fn list(client: &Arc<DataplaneClient>, kind: Kind, parent: Option<&str>) -> anyhow::Result<()> {
    match kind {
        Kind::Backend => print_json(&client.backends().await?),
        Kind::Frontend => print_json(&client.frontends().await?),
        Kind::Bind => print_json(&client.binds().await?),
        Kind::Server => print_json(&client.servers().await?),
        Kind::ServerTemplate => {
            let parent =
                parent.context("--parent <backend> is required to list server templates")?;
            print_json(&client.server_templates(parent).await?)
        }
        Kind::Resolver => print_json(&client.resolvers().await?),
    }
}

async fn get<K>(client: &Arc<DataplaneClient>, id: &str) -> anyhow::Result<()>
where
    K: KindSpec,
    K::Object: Serialize,
{
    let reconciler = Reconciler::<K>::with_defaults(Arc::clone(client));
    let observed = reconciler.read(id).await?;
    print_observed(&observed)
}

async fn apply<K>(
    client: &Arc<DataplaneClient>,
    file: &Path,
    parent: Option<String>,
    id: Option<String>,
) -> anyhow::Result<()>
where
    K: KindSpec,
    K::Object: Serialize + DeserializeOwned,
{
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("cannot read {}", file.display()))?;
    let desired: K::Object = serde_json::from_str(&contents)
        .with_context(|| format!("invalid {} payload in {}", K::KIND, file.display()))?;

    let reconciler = Reconciler::<K>::with_defaults(Arc::clone(client));
    let observed = match id {
        Some(id) => reconciler.update(&id, &desired).await?,
        None => {
            let scope = parent.map_or(Scope::Root, Scope::nested);
            reconciler.create(&scope, &desired).await?
        }
    };

    print_observed(&observed)
}

async fn delete<K: KindSpec>(client: &Arc<DataplaneClient>, id: &str) -> anyhow::Result<()> {
    let reconciler = Reconciler::<K>::with_defaults(Arc::clone(client));
    match reconciler.delete(id).await {
        Ok(()) => {
            println!("deleted {id}");
            Ok(())
        }
        // An absent object is already in the desired end state.
        Err(err) if err.is_not_found() => {
            tracing::warn!(id, "object already absent");
            println!("already absent {id}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn print_observed<T: Serialize>(observed: &Observed<T>) -> anyhow::Result<()> {
    print_json(&serde_json::json!({
        "id": observed.id.to_string(),
        "object": &observed.object,
    }))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
