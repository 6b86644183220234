//! Shared fixtures for the behavioural scenarios.

use std::sync::Arc;

use localized::{CatalogueResolver, LocalizedConfiguration, LocalizedOptions};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use test_helpers::{RecordingResolver, RecordingTarget};

/// Scenario state shared between binding steps.
#[derive(Debug, Default, ScenarioState)]
pub struct BindingContext {
    /// Strings the resolver answers with.
    pub catalogue: Slot<CatalogueResolver>,
    /// Configurations in declaration order.
    pub configurations: Slot<Vec<LocalizedConfiguration<String>>>,
    /// Table and scope for the binding.
    pub options: Slot<LocalizedOptions>,
    /// Resolver observed by the binding once built.
    pub resolver: Slot<Arc<RecordingResolver>>,
    /// Item left bound after the `when` step, if any.
    pub item: Slot<Option<RecordingTarget>>,
}

/// Creates a clean binding context for each scenario.
#[fixture]
pub fn binding_context() -> BindingContext {
    BindingContext::default()
}
