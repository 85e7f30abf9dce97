use crate::app::flows::HelloFlow;
use crate::domain::ports::Flow;
use crate::utils::error::{FlowError, Result};
use crate::utils::validation::validate_flow_name;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Name-indexed set of flows the runner can execute.
#[derive(Default, Clone)]
pub struct FlowRegistry {
    flows: BTreeMap<String, Arc<dyn Flow>>,
}

impl FlowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtin_flows() -> Result<Self> {
        let mut registry = Self::new();
        registry.register(HelloFlow::new())?;
        Ok(registry)
    }

    pub fn register<F: Flow + 'static>(&mut self, flow: F) -> Result<()> {
        self.register_arc(Arc::new(flow))
    }

    pub fn register_arc(&mut self, flow: Arc<dyn Flow>) -> Result<()> {
        let name = flow.name().to_string();
        validate_flow_name("flow.name", &name)?;

        if self.flows.contains_key(&name) {
            return Err(FlowError::DuplicateFlow { name });
        }

        tracing::debug!("Registered flow '{}'", name);
        self.flows.insert(name, flow);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn Flow>> {
        self.flows
            .get(name)
            .cloned()
            .ok_or_else(|| FlowError::UnknownFlow {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.flows.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.flows.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::RunContext;
    use async_trait::async_trait;

    struct Named(&'static str);

    #[async_trait]
    impl Flow for Named {
        fn name(&self) -> &str {
            self.0
        }

        async fn run(&self, _ctx: &RunContext) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_builtin_registry_has_hello_flow() {
        let registry = FlowRegistry::with_builtin_flows().unwrap();
        assert_eq!(registry.names(), vec!["hello_flow"]);
        assert!(registry.contains("hello_flow"));
        assert_eq!(registry.get("hello_flow").unwrap().name(), "hello_flow");
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = FlowRegistry::new();
        registry.register(Named("a")).unwrap();

        let err = registry.register(Named("a")).unwrap_err();
        assert!(matches!(err, FlowError::DuplicateFlow { ref name } if name == "a"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_flow_lookup() {
        let registry = FlowRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.get("missing"),
            Err(FlowError::UnknownFlow { .. })
        ));
    }

    #[test]
    fn test_invalid_names_are_rejected() {
        let mut registry = FlowRegistry::new();
        assert!(registry.register(Named("has space")).is_err());
        assert!(registry.register(Named("")).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_names_are_sorted() {
        let mut registry = FlowRegistry::new();
        registry.register(Named("zeta")).unwrap();
        registry.register(Named("alpha")).unwrap();
        assert_eq!(registry.names(), vec!["alpha", "zeta"]);
    }
}
