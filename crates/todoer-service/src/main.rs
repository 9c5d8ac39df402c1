use clap::Parser;
use std::net::SocketAddr;
use todoer_service::{build_router, grpc::serve_grpc, ServiceState};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "todoerd", version, about = "Todo-list management service")]
struct Cli {
    /// REST socket address to bind, e.g. 127.0.0.1:8080
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,
    /// gRPC socket address to bind, e.g. 127.0.0.1:50051
    #[arg(long, default_value = "127.0.0.1:50051")]
    grpc_listen: SocketAddr,
    /// Disable gRPC server and run REST only.
    #[arg(long, default_value_t = false)]
    no_grpc: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "todoer_service=info,info".to_string()),
        )
        .init();

    let cli = Cli::parse();
    let state = ServiceState::new();
    let app = build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(cli.listen).await?;
    info!("todoer-service REST listening on {}", listener.local_addr()?);

    let rest_task = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .map_err(anyhow::Error::from)
    });

    let grpc_task = if cli.no_grpc {
        None
    } else {
        let grpc_state = state.clone();
        let grpc_addr = cli.grpc_listen;
        info!("todoer-service gRPC listening on {}", grpc_addr);
        Some(tokio::spawn(async move {
            serve_grpc(grpc_state, grpc_addr).await
        }))
    };

    if let Some(grpc_task) = grpc_task {
        tokio::select! {
            rest = rest_task => rest??,
            grpc = grpc_task => grpc??,
        }
    } else {
        rest_task.await??;
    }

    Ok(())
}
