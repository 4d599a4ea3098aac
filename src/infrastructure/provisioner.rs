use crate::config::ServerConfig;
use crate::services::provisioner::AccountProvisioner;
use std::sync::Arc;
use tracing::info;

/// Builds the identity-provider client once at startup. The client is
/// injected through `AppState` rather than initialized as a module-level
/// singleton, so tests and the dev mode can swap it out.
pub fn setup_provisioner(config: &ServerConfig) -> Arc<dyn AccountProvisioner> {
    let provisioner = crate::services::provisioner::create_provisioner(config);

    info!(
        "🔑 Account provisioner ready [type: {}]",
        config.provisioner_type
    );

    provisioner.into()
}
