use serde::{Deserialize, Serialize};

/// Composite identity key for a selection.
///
/// The full (app, instance, user, server) tuple is the natural key: the
/// same user can hold independent selections per app, per app instance,
/// and per server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionKey {
    pub app_id: String,
    pub instance_id: String,
    pub user_id: String,
    pub server_id: String,
}

impl SelectionKey {
    pub fn new(
        app_id: impl Into<String>,
        instance_id: impl Into<String>,
        user_id: impl Into<String>,
        server_id: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            instance_id: instance_id.into(),
            user_id: user_id.into(),
            server_id: server_id.into(),
        }
    }
}
