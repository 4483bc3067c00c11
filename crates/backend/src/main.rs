pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tokio::net::TcpListener;

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let addr = shared::config::socket_addr(&config)?;
    let static_dir = shared::config::resolve_static_dir(&config);

    if !static_dir.join("index.html").exists() {
        tracing::warn!(
            "index.html not found in {}, run `trunk build` in crates/frontend first",
            static_dir.display()
        );
    }
    tracing::info!("Serving frontend from {}", static_dir.display());

    let app = routes::configure_routes(&static_dir);

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
