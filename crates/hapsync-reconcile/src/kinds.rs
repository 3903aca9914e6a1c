//! Descriptor implementations for the five managed kinds.

use async_trait::async_trait;
use hapsync_client::{Backend, Bind, DataplaneClient, Frontend, Server, ServerTemplate};

use crate::kind::{KindSpec, Scope};

/// Backend pools. Root-scoped; renaming replaces the object.
pub struct BackendKind;

#[async_trait]
impl KindSpec for BackendKind {
    type Object = Backend;

    const KIND: &'static str = "backend";
    const NAME_REQUIRES_REPLACEMENT: bool = true;

    fn leaf(object: &Backend) -> &str {
        &object.name
    }

    async fn fetch(
        client: &DataplaneClient,
        _scope: &Scope,
        leaf: &str,
    ) -> hapsync_client::Result<Backend> {
        client.backend(leaf).await
    }

    async fn create(
        client: &DataplaneClient,
        _scope: &Scope,
        transaction_id: &str,
        object: &Backend,
    ) -> hapsync_client::Result<Backend> {
        client.create_backend(transaction_id, object).await
    }

    async fn update(
        client: &DataplaneClient,
        _scope: &Scope,
        transaction_id: &str,
        leaf: &str,
        object: &Backend,
    ) -> hapsync_client::Result<Backend> {
        client.update_backend(transaction_id, leaf, object).await
    }

    async fn delete(
        client: &DataplaneClient,
        _scope: &Scope,
        transaction_id: &str,
        leaf: &str,
    ) -> hapsync_client::Result<()> {
        client.delete_backend(transaction_id, leaf).await
    }
}

/// Listening frontends. Root-scoped.
pub struct FrontendKind;

#[async_trait]
impl KindSpec for FrontendKind {
    type Object = Frontend;

    const KIND: &'static str = "frontend";
    const NAME_REQUIRES_REPLACEMENT: bool = false;

    fn leaf(object: &Frontend) -> &str {
        &object.name
    }

    async fn fetch(
        client: &DataplaneClient,
        _scope: &Scope,
        leaf: &str,
    ) -> hapsync_client::Result<Frontend> {
        client.frontend(leaf).await
    }

    async fn create(
        client: &DataplaneClient,
        _scope: &Scope,
        transaction_id: &str,
        object: &Frontend,
    ) -> hapsync_client::Result<Frontend> {
        client.create_frontend(transaction_id, object).await
    }

    async fn update(
        client: &DataplaneClient,
        _scope: &Scope,
        transaction_id: &str,
        leaf: &str,
        object: &Frontend,
    ) -> hapsync_client::Result<Frontend> {
        client.update_frontend(transaction_id, leaf, object).await
    }

    async fn delete(
        client: &DataplaneClient,
        _scope: &Scope,
        transaction_id: &str,
        leaf: &str,
    ) -> hapsync_client::Result<()> {
        client.delete_frontend(transaction_id, leaf).await
    }
}

/// Bind addresses, nested under a frontend.
pub struct BindKind;

#[async_trait]
impl KindSpec for BindKind {
    type Object = Bind;

    const KIND: &'static str = "bind";
    const NAME_REQUIRES_REPLACEMENT: bool = false;

    fn leaf(object: &Bind) -> &str {
        &object.name
    }

    async fn fetch(
        client: &DataplaneClient,
        scope: &Scope,
        leaf: &str,
    ) -> hapsync_client::Result<Bind> {
        client.bind(leaf, scope.parent_component()).await
    }

    async fn create(
        client: &DataplaneClient,
        scope: &Scope,
        transaction_id: &str,
        object: &Bind,
    ) -> hapsync_client::Result<Bind> {
        client
            .create_bind(transaction_id, object, scope.parent_component())
            .await
    }

    async fn update(
        client: &DataplaneClient,
        scope: &Scope,
        transaction_id: &str,
        leaf: &str,
        object: &Bind,
    ) -> hapsync_client::Result<Bind> {
        client
            .update_bind(transaction_id, leaf, object, scope.parent_component())
            .await
    }

    async fn delete(
        client: &DataplaneClient,
        scope: &Scope,
        transaction_id: &str,
        leaf: &str,
    ) -> hapsync_client::Result<()> {
        client
            .delete_bind(transaction_id, leaf, scope.parent_component())
            .await
    }
}

/// Pool members, nested under a backend.
pub struct ServerKind;

#[async_trait]
impl KindSpec for ServerKind {
    type Object = Server;

    const KIND: &'static str = "server";
    const NAME_REQUIRES_REPLACEMENT: bool = false;

    fn leaf(object: &Server) -> &str {
        &object.name
    }

    async fn fetch(
        client: &DataplaneClient,
        scope: &Scope,
        leaf: &str,
    ) -> hapsync_client::Result<Server> {
        client.server(leaf, scope.parent_component()).await
    }

    async fn create(
        client: &DataplaneClient,
        scope: &Scope,
        transaction_id: &str,
        object: &Server,
    ) -> hapsync_client::Result<Server> {
        client
            .create_server(transaction_id, object, scope.parent_component())
            .await
    }

    async fn update(
        client: &DataplaneClient,
        scope: &Scope,
        transaction_id: &str,
        leaf: &str,
        object: &Server,
    ) -> hapsync_client::Result<Server> {
        client
            .update_server(transaction_id, leaf, object, scope.parent_component())
            .await
    }

    async fn delete(
        client: &DataplaneClient,
        scope: &Scope,
        transaction_id: &str,
        leaf: &str,
    ) -> hapsync_client::Result<()> {
        client
            .delete_server(transaction_id, leaf, scope.parent_component())
            .await
    }
}

/// Server templates, nested under a backend and addressed by prefix.
pub struct ServerTemplateKind;

#[async_trait]
impl KindSpec for ServerTemplateKind {
    type Object = ServerTemplate;

    const KIND: &'static str = "server_template";
    const NAME_REQUIRES_REPLACEMENT: bool = false;

    fn leaf(object: &ServerTemplate) -> &str {
        &object.prefix
    }

    async fn fetch(
        client: &DataplaneClient,
        scope: &Scope,
        leaf: &str,
    ) -> hapsync_client::Result<ServerTemplate> {
        client.server_template(leaf, scope.parent_component()).await
    }

    async fn create(
        client: &DataplaneClient,
        scope: &Scope,
        transaction_id: &str,
        object: &ServerTemplate,
    ) -> hapsync_client::Result<ServerTemplate> {
        client
            .create_server_template(transaction_id, object, scope.parent_component())
            .await
    }

    async fn update(
        client: &DataplaneClient,
        scope: &Scope,
        transaction_id: &str,
        leaf: &str,
        object: &ServerTemplate,
    ) -> hapsync_client::Result<ServerTemplate> {
        client
            .update_server_template(transaction_id, leaf, object, scope.parent_component())
            .await
    }

    async fn delete(
        client: &DataplaneClient,
        scope: &Scope,
        transaction_id: &str,
        leaf: &str,
    ) -> hapsync_client::Result<()> {
        client
            .delete_server_template(transaction_id, leaf, scope.parent_component())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hapsync_client::Balance;

    #[test]
    fn leaf_names() {
        let backend = Backend {
            name: "b1".to_string(),
            mode: "http".to_string(),
            balance: Balance {
                algorithm: "roundrobin".to_string(),
            },
        };
        assert_eq!(BackendKind::leaf(&backend), "b1");

        let template = ServerTemplate {
            prefix: "srv".to_string(),
            fqdn: String::new(),
            num_or_range: String::new(),
            port: 0,
            check: String::new(),
            resolvers: String::new(),
        };
        // Templates carry no name; the prefix is the leaf identity.
        assert_eq!(ServerTemplateKind::leaf(&template), "srv");
    }

    #[test]
    fn replacement_is_declared_per_kind() {
        assert!(BackendKind::NAME_REQUIRES_REPLACEMENT);
        assert!(!FrontendKind::NAME_REQUIRES_REPLACEMENT);
        assert!(!BindKind::NAME_REQUIRES_REPLACEMENT);
        assert!(!ServerKind::NAME_REQUIRES_REPLACEMENT);
        assert!(!ServerTemplateKind::NAME_REQUIRES_REPLACEMENT);
    }
}
