//! Persisted routing params and module genesis.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timeout a later outbound transfer hop of a CCTP route would use.
pub const CCTP_FORWARD_TRANSFER_TIMEOUT: Duration = Duration::from_secs(3 * 60 * 60);

/// Module params governing routing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Whether received funds may be routed into a CCTP burn.
    #[serde(default)]
    pub cctp_active: bool,
}

/// Read access to the current routing params.
///
/// Read once per routing attempt; implementations must not hand out a
/// value cached from an earlier packet.
pub trait ParamsSource {
    fn routing_config(&self) -> RoutingConfig;
}

impl ParamsSource for RoutingConfig {
    fn routing_config(&self) -> RoutingConfig {
        *self
    }
}

impl<P: ParamsSource + ?Sized> ParamsSource for &P {
    fn routing_config(&self) -> RoutingConfig {
        (**self).routing_config()
    }
}

/// In-memory param store. Writes are administrative and never happen while
/// a packet is handled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamStore {
    params: RoutingConfig,
}

impl ParamStore {
    pub fn new(params: RoutingConfig) -> Self {
        Self { params }
    }

    pub fn set_params(&mut self, params: RoutingConfig) {
        self.params = params;
    }

    pub fn set_cctp_active(&mut self, active: bool) {
        self.params.cctp_active = active;
    }
}

impl ParamsSource for ParamStore {
    fn routing_config(&self) -> RoutingConfig {
        self.params
    }
}

/// Module state at chain genesis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    #[serde(default)]
    pub params: RoutingConfig,
}

impl GenesisState {
    /// Genesis with routing disabled.
    pub fn default_genesis() -> Self {
        Self::default()
    }

    pub fn init_genesis(&self, store: &mut ParamStore) {
        store.set_params(self.params);
    }

    pub fn export_genesis(store: &ParamStore) -> Self {
        Self {
            params: store.routing_config(),
        }
    }
}
