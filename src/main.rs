use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

use bike_inventory::build_app;
use bike_inventory::config::environment::EnvironmentConfig;
use bike_inventory::database::seed::initialize_data;
use bike_inventory::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚲 Inventario de Bicicletas - API");
    info!("================================");

    let state = AppState::from_config(config.clone())?;

    if !config.is_development() && config.cors_origins.is_empty() {
        warn!("⚠️ CORS_ORIGINS vacío fuera de desarrollo: se aceptan todos los orígenes");
    }

    // Inicializar datos si no existen
    if let Err(e) = initialize_data(&state.store).await {
        error!("❌ Error inicializando datos en {}: {}", state.store.data_dir().display(), e);
        return Err(anyhow::anyhow!("Error de datos: {}", e));
    }
    info!("📂 Datos en {}", state.store.data_dir().display());
    info!("🗺️ Direcciones validadas contra: {}", state.address_validator.target_city());

    let app = build_app(state);
    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Estado del servicio");
    info!("📍 Estaciones:");
    info!("   GET    /api/estaciones - Listar estaciones");
    info!("   POST   /api/estaciones - Crear estación");
    info!("   PUT    /api/estaciones/:id - Actualizar estación");
    info!("   DELETE /api/estaciones/:id - Eliminar estación");
    info!("🚲 Bicicletas:");
    info!("   GET    /api/bicicletas - Listar bicicletas");
    info!("   GET    /api/bicicletas/:id - Obtener bicicleta");
    info!("   POST   /api/bicicletas - Crear bicicleta");
    info!("   PUT    /api/bicicletas/:id - Actualizar bicicleta");
    info!("   DELETE /api/bicicletas/:id - Eliminar bicicleta");
    info!("   POST   /api/bicicletas/:id/arreglos - Registrar arreglo");
    info!("   PUT    /api/bicicletas/:id/mover - Mover entre estaciones");
    info!("🗺️ Geocoding:");
    info!("   POST   /api/geocoding/validar - Validar dirección");
    info!("   POST   /api/geocoding/inversa - Dirección desde coordenadas");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo escuchar SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
